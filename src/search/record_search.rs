//! Record search implementation.

use crate::models::Record;

/// Whether `query` occurs in the record's name or in any of its phones.
pub fn record_matches(record: &Record, query: &str) -> bool {
    record.name().as_str().contains(query)
        || record
            .phones()
            .iter()
            .any(|phone| phone.as_str().contains(query))
}

/// Every record matching `query`, in iteration order.
pub fn search_records<'a, I>(records: I, query: &str) -> Vec<&'a Record>
where
    I: IntoIterator<Item = &'a Record>,
{
    records
        .into_iter()
        .filter(|record| record_matches(record, query))
        .collect()
}
