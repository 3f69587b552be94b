mod csv_repository;
mod traits;

pub use csv_repository::{record_to_row, row_to_record, CsvAddressBookRepository};
pub use traits::AddressBookRepository;
