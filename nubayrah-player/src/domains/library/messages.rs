use crate::infra::api_types::{BookRecord, CatalogueError};

#[derive(Debug, Clone)]
pub enum LibraryMessage {
    /// Issue the fetch for the initial `Pending` signal. Sent once at boot.
    LoadBooks,
    /// Re-fetch the catalogue unless a fetch is already outstanding.
    RequestReload,
    BooksLoaded(Result<Vec<BookRecord>, CatalogueError>),
}

impl LibraryMessage {
    pub fn name(&self) -> &'static str {
        match self {
            LibraryMessage::LoadBooks => "Library::LoadBooks",
            LibraryMessage::RequestReload => "Library::RequestReload",
            LibraryMessage::BooksLoaded(_) => "Library::BooksLoaded",
        }
    }
}
