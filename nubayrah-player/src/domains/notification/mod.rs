//! Notification domain
//!
//! Reports the outcome of user-visible remote operations. Dismissing a shown
//! notification re-arms the library reload.

pub mod messages;
pub mod types;
pub mod update;
pub mod view;

pub use types::{NotificationPhase, NotificationState, OperationKind, Severity};

#[derive(Debug, Default)]
pub struct NotificationDomain {
    pub state: NotificationState,
}
