use crate::book::AddressBook;
use crate::error::AddressBookResult;
use crate::models::Record;

/// Repository for persisting an address book.
///
/// Provides abstraction over where and how records are stored,
/// enabling different implementations (flat file, in-memory for tests).
pub trait AddressBookRepository: Send + Sync {
    /// Overwrite the stored data with every record of `book`, in book order.
    fn save(&self, book: &AddressBook) -> AddressBookResult<()>;

    /// Read every stored record, in stored order.
    ///
    /// Either all records are returned or an error is; callers never see a
    /// partial result.
    fn load(&self) -> AddressBookResult<Vec<Record>>;
}
