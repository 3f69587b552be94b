//! The `AddressBook` store.

use crate::book::pages::Pages;
use crate::domain::{Birthday, Phone};
use crate::error::AddressBookResult;
use crate::models::Record;
use crate::repositories::{AddressBookRepository, CsvAddressBookRepository};
use crate::search::search_records;
use indexmap::IndexMap;
use std::ops::Deref;
use std::path::Path;
use tracing::debug;

/// Page size used by [`AddressBook::pages`] unless configured otherwise.
pub const DEFAULT_RECORDS_PER_PAGE: usize = 10;

/// Records keyed by contact name, in insertion order.
///
/// Every stored record's name equals its key. The only ways in are
/// [`add_record`](Self::add_record) and the bulk loaders; stored records can be
/// edited through [`get_mut`](Self::get_mut), which never exposes the name.
#[derive(Debug, Clone)]
pub struct AddressBook {
    records: IndexMap<String, Record>,
    records_per_page: usize,
}

impl AddressBook {
    /// Create an empty book whose [`pages`](Self::pages) hold `records_per_page` records.
    pub fn new(records_per_page: usize) -> Self {
        Self {
            records: IndexMap::new(),
            records_per_page: records_per_page.max(1),
        }
    }

    pub fn records_per_page(&self) -> usize {
        self.records_per_page
    }

    /// Insert `record` under its name, replacing any record already there.
    ///
    /// A replaced record keeps its original position. Nothing from the old
    /// record is merged in. Returns the replaced record.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let key = record.name().as_str().to_string();
        let replaced = self.records.insert(key, record);
        debug!(overwrote = replaced.is_some(), total = self.records.len(), "Record added");
        replaced
    }

    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Mutable access to a stored record's phones and birthday.
    pub fn get_mut(&mut self, name: &str) -> Option<RecordMut<'_>> {
        self.records.get_mut(name).map(RecordMut)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> + '_ {
        self.records.values()
    }

    /// Pages of up to `page_size` records, restarting from the first record on every call.
    pub fn iterator(&self, page_size: usize) -> Pages<'_> {
        Pages::new(&self.records, page_size)
    }

    /// Pages using the book's configured page size.
    pub fn pages(&self) -> Pages<'_> {
        self.iterator(self.records_per_page)
    }

    /// The `index`-th page (zero-based), or an empty list past the end.
    pub fn page(&self, index: usize, page_size: usize) -> Vec<&Record> {
        self.iterator(page_size).nth(index).unwrap_or_default()
    }

    /// Records whose name or any phone contains `query`, in insertion order.
    pub fn search(&self, query: &str) -> Vec<&Record> {
        search_records(self.records.values(), query)
    }

    /// Persist the book through `repository`, replacing what it stored before.
    pub fn save_to(&self, repository: &dyn AddressBookRepository) -> AddressBookResult<()> {
        repository.save(self)
    }

    /// Upsert every record from `repository` into this book.
    ///
    /// Everything is read and validated first; on error the book is
    /// unchanged. Later records replace earlier ones with the same name.
    /// Returns the number of records read.
    pub fn load_from(
        &mut self,
        repository: &dyn AddressBookRepository,
    ) -> AddressBookResult<usize> {
        let records = repository.load()?;
        Ok(self.extend_records(records))
    }

    /// Replace the whole contents of this book with the records from `repository`.
    ///
    /// On error the book is unchanged.
    pub fn reload_from(
        &mut self,
        repository: &dyn AddressBookRepository,
    ) -> AddressBookResult<usize> {
        let records = repository.load()?;
        self.records.clear();
        Ok(self.extend_records(records))
    }

    /// Write the book to a CSV file, replacing its contents.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> AddressBookResult<()> {
        self.save_to(&CsvAddressBookRepository::new(path.as_ref()))
    }

    /// CSV form of [`load_from`](Self::load_from).
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> AddressBookResult<usize> {
        self.load_from(&CsvAddressBookRepository::new(path.as_ref()))
    }

    /// CSV form of [`reload_from`](Self::reload_from).
    pub fn reload_from_file(&mut self, path: impl AsRef<Path>) -> AddressBookResult<usize> {
        self.reload_from(&CsvAddressBookRepository::new(path.as_ref()))
    }

    fn extend_records(&mut self, records: Vec<Record>) -> usize {
        let count = records.len();
        for record in records {
            self.add_record(record);
        }
        count
    }
}

/// Two books are equal when they hold equal records in the same order.
impl PartialEq for AddressBook {
    fn eq(&self, other: &Self) -> bool {
        self.records_per_page == other.records_per_page
            && self.records.iter().eq(other.records.iter())
    }
}

impl Eq for AddressBook {}

impl Default for AddressBook {
    fn default() -> Self {
        Self::new(DEFAULT_RECORDS_PER_PAGE)
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = indexmap::map::Values<'a, String, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.values()
    }
}

/// Mutable handle to a stored record.
///
/// Exposes the record's editing operations but not wholesale replacement,
/// so a record can't be renamed while it sits under its key.
#[derive(Debug)]
pub struct RecordMut<'a>(&'a mut Record);

impl RecordMut<'_> {
    pub fn add_phone(&mut self, phone: Phone) {
        self.0.add_phone(phone);
    }

    pub fn delete_phone(&mut self, phone: &Phone) -> AddressBookResult<()> {
        self.0.delete_phone(phone)
    }

    pub fn modify_phone(&mut self, phones: Vec<Phone>) {
        self.0.modify_phone(phones);
    }

    pub fn set_birthday(&mut self, birthday: Option<Birthday>) {
        self.0.set_birthday(birthday);
    }
}

impl Deref for RecordMut<'_> {
    type Target = Record;

    fn deref(&self) -> &Record {
        &*self.0
    }
}
