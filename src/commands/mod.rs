//! Line-oriented commands for driving an address book from a terminal.
//!
//! - **parser**: turns one input line into a [`Command`]
//! - **session**: executes commands against an address book and its repository

pub mod parser;
pub mod session;

pub use parser::{Command, HELP_TEXT};
pub use session::{Reply, Session};
