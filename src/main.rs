//! Address Book - Main entry point
//!
//! Reads commands from stdin, one per line, and prints replies to stdout.
//! Logs go to stderr.

use address_book::commands::{Command, Reply, Session};
use address_book::{Config, CsvAddressBookRepository};
use anyhow::Result;
use std::io::{self, BufRead, Write};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can pick the filter
    let config = Config::from_env();
    let log_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Using data file {} ({} records per page)",
        config.data_file.display(),
        config.records_per_page
    );

    let repository = Box::new(CsvAddressBookRepository::new(&config.data_file));
    let mut session = Session::open(repository, config.records_per_page)?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    writeln!(stdout, "Address book ready. Type 'help' for commands.")?;

    for line in stdin.lock().lines() {
        let line = line?;

        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(stdout, "{}", e)?;
                continue;
            }
        };

        match session.execute(command) {
            Ok(Reply::Text(text)) => writeln!(stdout, "{}", text)?,
            Ok(Reply::Exit(text)) => {
                writeln!(stdout, "{}", text)?;
                info!("Address book shutdown complete");
                return Ok(());
            }
            Err(e) => {
                warn!("Command failed: {}", e);
                writeln!(stdout, "{}", e)?;
            }
        }
    }

    // End of input behaves like `exit`
    session.save()?;
    info!("Address book shutdown complete");
    Ok(())
}
