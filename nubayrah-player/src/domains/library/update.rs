use super::messages::LibraryMessage;
use super::update_handlers::{
    handle_books_loaded, handle_load_books, handle_request_reload,
};
use crate::common::messages::{DomainMessage, DomainUpdateResult};
use crate::state::State;

pub fn update_library(
    state: &mut State,
    message: LibraryMessage,
) -> DomainUpdateResult {
    match message {
        LibraryMessage::LoadBooks => {
            let task = handle_load_books(state);
            DomainUpdateResult::task(task.map(DomainMessage::Library))
        }
        LibraryMessage::RequestReload => {
            let task = handle_request_reload(state);
            DomainUpdateResult::task(task.map(DomainMessage::Library))
        }
        LibraryMessage::BooksLoaded(result) => {
            handle_books_loaded(state, result);
            DomainUpdateResult::none()
        }
    }
}
