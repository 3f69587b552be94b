//! Configuration management for the address book.
//!
//! This module handles loading and validating configuration from environment
//! variables. A `.env` file in the working directory is read first if present.

use crate::book::DEFAULT_RECORDS_PER_PAGE;
use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Default data file, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "address_book.csv";

/// Configuration for the address book.
#[derive(Debug, Clone)]
pub struct Config {
    /// CSV file contacts are loaded from and saved to
    pub data_file: PathBuf,

    /// Records per page when listing (default: 10)
    pub records_per_page: usize,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_FILE`: Data file path (default: "address_book.csv")
    /// - `ADDRESS_BOOK_PAGE_SIZE`: Records per page (default: 10)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine; dotenvy doesn't print to stdout
        let _ = dotenvy::dotenv();

        let data_file = match env::var("ADDRESS_BOOK_FILE") {
            Ok(val) if val.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "ADDRESS_BOOK_FILE".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(val) => PathBuf::from(val),
            Err(_) => PathBuf::from(DEFAULT_DATA_FILE),
        };

        let records_per_page =
            Self::parse_env_usize("ADDRESS_BOOK_PAGE_SIZE", DEFAULT_RECORDS_PER_PAGE)?;
        if records_per_page == 0 {
            return Err(ConfigError::InvalidValue {
                var: "ADDRESS_BOOK_PAGE_SIZE".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            data_file,
            records_per_page,
            log_level,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            records_per_page: DEFAULT_RECORDS_PER_PAGE,
            log_level: "error".to_string(),
        }
    }
}
