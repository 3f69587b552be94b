//! Test fixtures and sample data for integration tests.
//!
//! This module provides reusable builders for contact records.

use address_book::{Birthday, ContactName, Phone, Record};

/// Create a record with a name only.
pub fn sample_record(name: &str) -> Record {
    Record::new(ContactName::new(name).unwrap())
}

/// Create a record with the given phones and optional birthday.
#[allow(dead_code)]
pub fn sample_record_with(name: &str, phones: &[&str], birthday: Option<&str>) -> Record {
    let mut record = phones
        .iter()
        .fold(sample_record(name), |record, phone| {
            record.with_phone(Phone::new(*phone).unwrap())
        });
    if let Some(raw) = birthday {
        record.set_birthday(Some(Birthday::new(raw).unwrap()));
    }
    record
}

/// Bill, with one phone and a birthday.
#[allow(dead_code)]
pub fn bill() -> Record {
    sample_record_with("Bill", &["+380(67)777-77-77"], Some("01-09-1990"))
}

/// Names of the records, in order.
#[allow(dead_code)]
pub fn names(records: &[&Record]) -> Vec<String> {
    records.iter().map(|r| r.name().to_string()).collect()
}
