//! Address Book - a personal contact manager.
//!
//! This library stores named contacts with validated phone numbers and an
//! optional birthday, keeps them in insertion order, persists them to a CSV
//! file, and supports paginated listing and substring search.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone, birthday)
//! - **models**: The contact record and its birthday countdown
//! - **book**: The address book store and its page iterator
//! - **search**: Substring matching over names and phones
//! - **repositories**: Persistence seam and the CSV implementation
//! - **commands**: Line-oriented command parser and session used by the binary
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod book;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod search;

// Re-export commonly used types
pub use book::{AddressBook, Pages, RecordMut};
pub use commands::{Command, Reply, Session};
pub use config::Config;
pub use domain::{Birthday, ContactName, Phone, ValidationError};
pub use error::{AddressBookError, AddressBookResult, CommandError, ConfigError};
pub use models::{BirthdayCountdown, Record};
pub use repositories::{AddressBookRepository, CsvAddressBookRepository};
