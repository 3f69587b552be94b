//! Data models for the address book.
//!
//! This module contains the contact record and the result type of its
//! birthday countdown.

pub mod record;

pub use record::{BirthdayCountdown, Record};
