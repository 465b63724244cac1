//! Row action domain: per-book delete and cover viewing.

pub mod messages;
pub mod update;

use std::collections::HashSet;

use crate::infra::api_types::BookId;
use crate::infra::services::browser::OpenRequest;

#[derive(Debug, Default)]
pub struct RowActionsDomainState {
    deletes_in_flight: HashSet<BookId>,
    /// Last cover request handed to the opener.
    pub last_cover_request: Option<OpenRequest>,
    pub last_open_error: Option<String>,
}

impl RowActionsDomainState {
    pub fn is_deleting(&self, id: &BookId) -> bool {
        self.deletes_in_flight.contains(id)
    }

    pub fn deletes_in_flight(&self) -> usize {
        self.deletes_in_flight.len()
    }

    pub(crate) fn mark_deleting(&mut self, id: BookId) {
        self.deletes_in_flight.insert(id);
    }

    pub(crate) fn clear_deleting(&mut self, id: &BookId) {
        self.deletes_in_flight.remove(id);
    }
}

#[derive(Debug, Default)]
pub struct RowActionsDomain {
    pub state: RowActionsDomainState,
}
