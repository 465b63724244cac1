use nubayrah_model::CatalogueSnapshot;

use crate::infra::api_types::{BookRecord, CatalogueError};
use crate::state::State;

/// Handles BooksLoaded. Success replaces the snapshot wholesale; failure
/// keeps the previous one. Either way the reload signal settles.
pub fn handle_books_loaded(
    state: &mut State,
    result: Result<Vec<BookRecord>, CatalogueError>,
) {
    let library = &mut state.domains.library.state;
    library.reload.settle();

    match result {
        Ok(books) => {
            log::info!("[Library] Loaded {} books", books.len());
            library.snapshot = CatalogueSnapshot::new(books);
            library.last_error = None;
        }
        Err(err) => {
            log::warn!(
                "[Library] Failed to load catalogue \
                 (server_url={}, kind={:?}): {}",
                state.server_url,
                err.kind(),
                err
            );
            library.last_error = Some(err.to_string());
        }
    }
}
