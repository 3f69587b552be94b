use address_book::error::{AddressBookError, AddressBookResult};
use address_book::repositories::AddressBookRepository;
use address_book::{AddressBook, Record};
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};

/// Mock address book repository for testing.
///
/// Keeps saved records in memory, can be told to fail, and tracks method
/// calls for verification. Clones share state, so a test can keep one
/// handle while a session owns another.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockAddressBookRepository {
    stored: Arc<Mutex<Option<Vec<Record>>>>,
    fail_with: Arc<Mutex<Option<io::ErrorKind>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockAddressBookRepository {
    /// Create a repository with nothing stored (like a missing file).
    pub fn new() -> Self {
        Self {
            stored: Arc::new(Mutex::new(None)),
            fail_with: Arc::new(Mutex::new(None)),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Create a repository that already holds `records`.
    pub fn with_records(records: Vec<Record>) -> Self {
        let repo = Self::new();
        *repo.stored.lock().unwrap() = Some(records);
        repo
    }

    /// Make every subsequent call fail with an I/O error of `kind`.
    pub fn fail_with(&self, kind: io::ErrorKind) {
        *self.fail_with.lock().unwrap() = Some(kind);
    }

    /// Records saved most recently, if any.
    pub fn stored(&self) -> Option<Vec<Record>> {
        self.stored.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }

    fn check_failure(&self) -> AddressBookResult<()> {
        match *self.fail_with.lock().unwrap() {
            Some(kind) => Err(AddressBookError::file_access(
                "mock.csv",
                io::Error::new(kind, "mock failure"),
            )),
            None => Ok(()),
        }
    }
}

impl Default for MockAddressBookRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl AddressBookRepository for MockAddressBookRepository {
    fn save(&self, book: &AddressBook) -> AddressBookResult<()> {
        self.track_call("save");
        self.check_failure()?;

        *self.stored.lock().unwrap() = Some(book.records().cloned().collect());
        Ok(())
    }

    fn load(&self) -> AddressBookResult<Vec<Record>> {
        self.track_call("load");
        self.check_failure()?;

        self.stored.lock().unwrap().clone().ok_or_else(|| {
            AddressBookError::file_access(
                "mock.csv",
                io::Error::new(io::ErrorKind::NotFound, "nothing saved yet"),
            )
        })
    }
}
