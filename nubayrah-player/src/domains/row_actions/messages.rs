use crate::infra::api_types::{BookId, OperationOutcome};

#[derive(Debug, Clone)]
pub enum RowActionMessage {
    /// Open the book's cover in a new, isolated browsing context
    ViewCover(BookId),
    /// Delete the book. There is no confirmation step.
    RequestDelete(BookId),
    Deleted(BookId, OperationOutcome),
}

impl RowActionMessage {
    pub fn name(&self) -> &'static str {
        match self {
            RowActionMessage::ViewCover(_) => "RowAction::ViewCover",
            RowActionMessage::RequestDelete(_) => "RowAction::RequestDelete",
            RowActionMessage::Deleted(..) => "RowAction::Deleted",
        }
    }
}
