//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when working with records and the address book.
#[derive(Error, Debug)]
pub enum AddressBookError {
    /// A field failed validation (invalid phone, invalid birthday, empty name)
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Phone number to delete is not on the record
    #[error("Phone {phone} not found for {name}")]
    PhoneNotFound { name: String, phone: String },

    /// No record is stored under the given name
    #[error("Record not found: {0}")]
    RecordNotFound(String),

    /// Persisted row has too few fields
    #[error("Malformed row at line {line}: expected at least 2 fields, got {fields}")]
    MalformedRow { line: u64, fields: usize },

    /// Persisted row has a field that fails validation
    #[error("Invalid row at line {line}: {source}")]
    InvalidRow {
        line: u64,
        #[source]
        source: ValidationError,
    },

    /// Underlying I/O failure while reading or writing a file
    #[error("Cannot access {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// CSV decoding failure unrelated to I/O
    #[error("CSV error: {0}")]
    Csv(String),
}

impl AddressBookError {
    /// Wrap an I/O error with the path it happened on.
    pub fn file_access(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileAccess {
            path: path.into(),
            source,
        }
    }

    /// Map a `csv::Error`, keeping I/O failures as `FileAccess`.
    pub fn from_csv(path: impl Into<PathBuf>, err: csv::Error) -> Self {
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(source) => Self::file_access(path, source),
            _ => Self::Csv(message),
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors produced while parsing a command line.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    /// Command keyword is not recognised
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// Required argument is missing
    #[error("Missing argument for {command}: {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    /// Argument is present but unusable
    #[error("Invalid argument for {command}: {reason}")]
    InvalidArgument {
        command: &'static str,
        reason: String,
    },
}

/// Convenience type alias for Results with AddressBookError
pub type AddressBookResult<T> = Result<T, AddressBookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;
