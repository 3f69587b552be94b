use crate::book::AddressBook;
use crate::domain::{Birthday, ContactName, Phone, ValidationError};
use crate::error::{AddressBookError, AddressBookResult};
use crate::models::Record;
use crate::repositories::traits::AddressBookRepository;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Address book repository backed by a headerless CSV file.
///
/// Each row is `name, phone_1, ..., phone_N, birthday`. The birthday cell is
/// always written (empty when unset), so every row has at least two fields
/// and the last one is always the birthday.
#[derive(Debug, Clone)]
pub struct CsvAddressBookRepository {
    path: PathBuf,
}

impl CsvAddressBookRepository {
    /// Create a new CsvAddressBookRepository for the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AddressBookRepository for CsvAddressBookRepository {
    fn save(&self, book: &AddressBook) -> AddressBookResult<()> {
        let file = File::create(&self.path)
            .map_err(|e| AddressBookError::file_access(&self.path, e))?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .flexible(true)
            .terminator(csv::Terminator::CRLF)
            .from_writer(file);

        for record in book.records() {
            writer
                .write_record(record_to_row(record))
                .map_err(|e| AddressBookError::from_csv(&self.path, e))?;
        }
        writer
            .flush()
            .map_err(|e| AddressBookError::file_access(&self.path, e))?;

        info!(path = %self.path.display(), records = book.len(), "Address book saved");
        Ok(())
    }

    fn load(&self) -> AddressBookResult<Vec<Record>> {
        let file =
            File::open(&self.path).map_err(|e| AddressBookError::file_access(&self.path, e))?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(file);

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row.map_err(|e| AddressBookError::from_csv(&self.path, e))?;
            let line = row.position().map_or(0, |position| position.line());
            records.push(row_to_record(line, &row)?);
        }

        info!(path = %self.path.display(), records = records.len(), "Address book loaded");
        Ok(records)
    }
}

/// Encode a record as `name, phones..., birthday`.
pub fn record_to_row(record: &Record) -> Vec<String> {
    let mut row = Vec::with_capacity(record.phones().len() + 2);
    row.push(record.name().to_string());
    row.extend(record.phones().iter().map(Phone::to_string));
    row.push(
        record
            .birthday()
            .map(Birthday::to_string)
            .unwrap_or_default(),
    );
    row
}

/// Decode one CSV row. `line` is only used in error reports.
///
/// # Errors
///
/// - `MalformedRow` if the row has fewer than two fields
/// - `InvalidRow` if the name, a phone or a non-empty birthday cell fails validation
pub fn row_to_record(line: u64, row: &csv::StringRecord) -> AddressBookResult<Record> {
    let fields: Vec<&str> = row.iter().collect();
    let [name, phones @ .., birthday] = fields.as_slice() else {
        warn!(line, fields = fields.len(), "Rejecting row with too few fields");
        return Err(AddressBookError::MalformedRow {
            line,
            fields: fields.len(),
        });
    };

    let invalid = |source: ValidationError| {
        warn!(line, error = %source, "Rejecting row with invalid field");
        AddressBookError::InvalidRow { line, source }
    };

    let name = ContactName::new(*name).map_err(invalid)?;
    let phones = phones
        .iter()
        .map(|phone| Phone::new(*phone))
        .collect::<Result<Vec<_>, _>>()
        .map_err(invalid)?;
    let birthday = match *birthday {
        "" => None,
        raw => Some(Birthday::new(raw).map_err(invalid)?),
    };

    debug!(line, name = %name, phones = phones.len(), "Decoded row");

    let mut record = Record::new(name);
    record.modify_phone(phones);
    record.set_birthday(birthday);
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fields: &[&str]) -> csv::StringRecord {
        csv::StringRecord::from(fields.to_vec())
    }

    #[test]
    fn test_record_to_row_full() {
        let record = Record::new(ContactName::new("Bill").unwrap())
            .with_phone(Phone::new("+380(67)777-77-77").unwrap())
            .with_phone(Phone::new("+380(50)123-4-567").unwrap())
            .with_birthday(Birthday::new("01-09-1990").unwrap());

        assert_eq!(
            record_to_row(&record),
            vec!["Bill", "+380(67)777-77-77", "+380(50)123-4-567", "01-09-1990"]
        );
    }

    #[test]
    fn test_record_to_row_keeps_empty_birthday_cell() {
        let record = Record::new(ContactName::new("Bill").unwrap());
        assert_eq!(record_to_row(&record), vec!["Bill", ""]);
    }

    #[test]
    fn test_row_to_record() {
        let record =
            row_to_record(1, &row(&["Bill", "+380(67)777-77-77", "01-09-1990"])).unwrap();
        assert_eq!(record.name().as_str(), "Bill");
        assert_eq!(record.phones().len(), 1);
        assert_eq!(record.birthday().unwrap().to_string(), "01-09-1990");
    }

    #[test]
    fn test_row_to_record_name_and_empty_birthday() {
        let record = row_to_record(1, &row(&["Bill", ""])).unwrap();
        assert!(record.phones().is_empty());
        assert!(record.birthday().is_none());
    }

    #[test]
    fn test_row_to_record_too_few_fields() {
        let result = row_to_record(4, &row(&["Bill"]));
        assert!(matches!(
            result,
            Err(AddressBookError::MalformedRow { line: 4, fields: 1 })
        ));
    }

    #[test]
    fn test_row_to_record_invalid_phone() {
        let result = row_to_record(2, &row(&["Bill", "555-1234", ""]));
        match result {
            Err(AddressBookError::InvalidRow { line, source }) => {
                assert_eq!(line, 2);
                assert_eq!(source, ValidationError::InvalidPhone("555-1234".to_string()));
            }
            other => panic!("Expected InvalidRow, got: {:?}", other),
        }
    }

    #[test]
    fn test_row_to_record_invalid_birthday() {
        let result = row_to_record(2, &row(&["Bill", "+380(67)777-77-77", "1990-09-01"]));
        assert!(matches!(
            result,
            Err(AddressBookError::InvalidRow {
                source: ValidationError::InvalidBirthday { .. },
                ..
            })
        ));
    }
}
