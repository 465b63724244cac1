use std::sync::Arc;

use iced::Task;

use crate::domains::library::messages::LibraryMessage;
use crate::infra::api_types::{BookRecord, CatalogueError};
use crate::infra::services::catalogue::CatalogueService;
use crate::state::State;

pub async fn fetch_books(
    catalogue: Arc<dyn CatalogueService>,
) -> Result<Vec<BookRecord>, CatalogueError> {
    catalogue.list_books().await
}

/// Handles LoadBooks: the single fetch for the initial `Pending` signal.
pub fn handle_load_books(state: &mut State) -> Task<LibraryMessage> {
    let library = &mut state.domains.library.state;
    if library.initial_fetch_issued {
        log::warn!(
            "[Library] Initial fetch already issued, ignoring LoadBooks"
        );
        return Task::none();
    }
    library.initial_fetch_issued = true;

    if !library.reload.is_pending() {
        // A reload already ran to completion; arm a fresh one instead.
        return handle_request_reload(state);
    }

    log::info!("[Library] Loading catalogue from {}", state.server_url);
    issue_fetch(state)
}

/// Handles RequestReload: `Idle -> Pending` issues exactly one fetch, a
/// request while `Pending` is absorbed by the outstanding one.
pub fn handle_request_reload(state: &mut State) -> Task<LibraryMessage> {
    let library = &mut state.domains.library.state;
    if !library.reload.arm() {
        library.coalesced_requests += 1;
        log::debug!(
            "[Library] Reload already pending, coalescing request ({} so far)",
            library.coalesced_requests
        );
        return Task::none();
    }

    log::info!("[Library] Reloading catalogue");
    issue_fetch(state)
}

fn issue_fetch(state: &mut State) -> Task<LibraryMessage> {
    state.domains.library.state.fetch_count += 1;
    Task::perform(
        fetch_books(Arc::clone(&state.catalogue)),
        LibraryMessage::BooksLoaded,
    )
}
