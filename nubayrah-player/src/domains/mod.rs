//! Domain modules for the Nubayrah client
//!
//! Each domain owns its state and an `update_*` function; domains reach
//! each other only through
//! [`CrossDomainEvent`](crate::common::messages::CrossDomainEvent)s.

pub mod library;
pub mod notification;
pub mod row_actions;
pub mod upload;

/// Domain registry that holds every domain's state
#[derive(Debug, Default)]
pub struct DomainRegistry {
    pub library: library::LibraryDomain,
    pub upload: upload::UploadDomain,
    pub notification: notification::NotificationDomain,
    pub row_actions: row_actions::RowActionsDomain,
}
