//! Library domain
//!
//! Owns the catalogue snapshot and the reload signal that gates fetching it.

pub mod messages;
pub mod types;
pub mod update;
pub mod update_handlers;
pub mod view;

pub use types::ReloadSignal;

use nubayrah_model::CatalogueSnapshot;

#[derive(Debug, Default)]
pub struct LibraryDomainState {
    /// Last successfully fetched catalogue, in server order.
    pub snapshot: CatalogueSnapshot,
    pub reload: ReloadSignal,
    /// Set once the boot fetch has been issued.
    pub initial_fetch_issued: bool,
    /// Last listing failure. Diagnostics only, never shown to the user.
    pub last_error: Option<String>,
    /// Number of listing fetches issued this session.
    pub fetch_count: u64,
    /// Reload requests absorbed by an outstanding fetch.
    pub coalesced_requests: u64,
}

#[derive(Debug, Default)]
pub struct LibraryDomain {
    pub state: LibraryDomainState,
}
