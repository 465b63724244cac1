use crate::book::BookRecord;
use crate::ids::BookId;

/// Ordered view of the server catalogue at the time of the last successful
/// listing fetch.
///
/// Order is exactly the server response order. Snapshots are replaced
/// wholesale, never patched, so there is no mutation API.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogueSnapshot {
    books: Vec<BookRecord>,
}

impl CatalogueSnapshot {
    pub fn new(books: Vec<BookRecord>) -> Self {
        Self { books }
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BookRecord> {
        self.books.iter()
    }

    pub fn as_slice(&self) -> &[BookRecord] {
        &self.books
    }

    pub fn get(&self, id: &BookId) -> Option<&BookRecord> {
        self.books.iter().find(|book| &book.id == id)
    }

    pub fn contains(&self, id: &BookId) -> bool {
        self.get(id).is_some()
    }

    pub fn ids(&self) -> impl Iterator<Item = &BookId> {
        self.books.iter().map(|book| &book.id)
    }
}

impl From<Vec<BookRecord>> for CatalogueSnapshot {
    fn from(books: Vec<BookRecord>) -> Self {
        Self::new(books)
    }
}

impl<'a> IntoIterator for &'a CatalogueSnapshot {
    type Item = &'a BookRecord;
    type IntoIter = std::slice::Iter<'a, BookRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.books.iter()
    }
}
