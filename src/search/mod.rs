//! Substring search over contact records.
//!
//! Matching is plain, case-sensitive substring containment over a record's
//! name and phone numbers, with no normalisation.

pub mod record_search;

pub use record_search::{record_matches, search_records};
