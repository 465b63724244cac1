pub mod cross_domain;

use crate::domains::library::messages::LibraryMessage;
use crate::domains::notification::messages::NotificationMessage;
use crate::domains::notification::types::OperationKind;
use crate::domains::row_actions::messages::RowActionMessage;
use crate::domains::upload::messages::UploadMessage;
use crate::infra::api_types::OperationOutcome;

use iced::Task;

/// Result of a domain update operation
pub struct DomainUpdateResult {
    /// The task to execute (may produce more messages)
    pub task: Task<DomainMessage>,
    /// Events handled by other domains before this update returns
    pub events: Vec<CrossDomainEvent>,
}

impl std::fmt::Debug for DomainUpdateResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DomainUpdateResult")
            .field("events", &self.events)
            .finish_non_exhaustive()
    }
}

impl DomainUpdateResult {
    pub fn none() -> Self {
        Self::task(Task::none())
    }

    /// Create a result with just a task
    pub fn task(task: Task<DomainMessage>) -> Self {
        Self {
            task,
            events: Vec::new(),
        }
    }

    pub fn with_events(
        task: Task<DomainMessage>,
        events: Vec<CrossDomainEvent>,
    ) -> Self {
        Self { task, events }
    }

    pub fn add_event(mut self, event: CrossDomainEvent) -> Self {
        self.events.push(event);
        self
    }
}

/// The main domain message router
#[derive(Debug, Clone)]
pub enum DomainMessage {
    /// Catalogue listing and reloads
    Library(LibraryMessage),

    /// File selection and submission
    Upload(UploadMessage),

    /// Outcome banner
    Notification(NotificationMessage),

    /// Per-row delete and cover actions
    RowAction(RowActionMessage),

    NoOp,
}

impl DomainMessage {
    pub fn name(&self) -> &'static str {
        match self {
            DomainMessage::Library(msg) => msg.name(),
            DomainMessage::Upload(msg) => msg.name(),
            DomainMessage::Notification(msg) => msg.name(),
            DomainMessage::RowAction(msg) => msg.name(),
            DomainMessage::NoOp => "DomainMessage::NoOp",
        }
    }
}

impl From<LibraryMessage> for DomainMessage {
    fn from(msg: LibraryMessage) -> Self {
        DomainMessage::Library(msg)
    }
}

impl From<UploadMessage> for DomainMessage {
    fn from(msg: UploadMessage) -> Self {
        DomainMessage::Upload(msg)
    }
}

impl From<NotificationMessage> for DomainMessage {
    fn from(msg: NotificationMessage) -> Self {
        DomainMessage::Notification(msg)
    }
}

impl From<RowActionMessage> for DomainMessage {
    fn from(msg: RowActionMessage) -> Self {
        DomainMessage::RowAction(msg)
    }
}

/// Events that need coordination between domains
#[derive(Debug, Clone)]
pub enum CrossDomainEvent {
    /// Ask the library to re-fetch the catalogue
    RequestLibraryRefresh,
    /// A user-visible remote operation was issued
    OperationStarted(OperationKind),
    /// A user-visible remote operation settled
    OperationCompleted {
        operation: OperationKind,
        outcome: OperationOutcome,
    },
}
