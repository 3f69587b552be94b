//! The address book: an insertion-ordered store of records keyed by name.

pub mod address_book;
pub mod pages;

pub use address_book::{AddressBook, RecordMut, DEFAULT_RECORDS_PER_PAGE};
pub use pages::Pages;
