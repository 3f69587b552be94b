//! Lazy pagination over the address book.

use crate::models::Record;
use indexmap::IndexMap;
use std::iter::FusedIterator;

/// Iterator over pages of records in insertion order.
///
/// Each page holds up to `page_size` records; the last one may be shorter.
/// Pages are computed on demand from a borrowed view of the book, so calling
/// [`AddressBook::iterator`](crate::book::AddressBook::iterator) again always
/// starts from the first record.
#[derive(Debug, Clone)]
pub struct Pages<'a> {
    records: &'a IndexMap<String, Record>,
    page_size: usize,
    position: usize,
}

impl<'a> Pages<'a> {
    /// A page size of 0 is treated as 1.
    pub(crate) fn new(records: &'a IndexMap<String, Record>, page_size: usize) -> Self {
        Self {
            records,
            page_size: page_size.max(1),
            position: 0,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }
}

impl<'a> Iterator for Pages<'a> {
    type Item = Vec<&'a Record>;

    fn next(&mut self) -> Option<Self::Item> {
        let total = self.records.len();
        if self.position >= total {
            return None;
        }

        let end = total.min(self.position + self.page_size);
        let page = (self.position..end)
            .filter_map(|index| self.records.get_index(index).map(|(_, record)| record))
            .collect();
        self.position = end;

        Some(page)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.records.len().saturating_sub(self.position);
        let pages = remaining.div_ceil(self.page_size);
        (pages, Some(pages))
    }
}

impl ExactSizeIterator for Pages<'_> {}

impl FusedIterator for Pages<'_> {}
