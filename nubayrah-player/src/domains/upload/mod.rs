//! Upload domain
//!
//! Holds at most one selected local file and the outcome of the last submit.
//! Uploading never touches the catalogue snapshot.

pub mod messages;
pub mod update;
pub mod view;

use crate::infra::api_types::{OperationOutcome, UploadFile};

#[derive(Debug, Default)]
pub struct UploadDomainState {
    /// Text bound to the path input.
    pub path_input: String,
    /// Kept after a submit so the same file can be sent again.
    pub selected: Option<UploadFile>,
    pub last_outcome: Option<OperationOutcome>,
    pub in_flight: bool,
    pub reading_file: bool,
}

impl UploadDomainState {
    /// Inline status for the last submit: `"201 Created"`, or the failure
    /// message when no status was received.
    pub fn status_label(&self) -> Option<String> {
        self.last_outcome.as_ref().map(OperationOutcome::summary)
    }
}

#[derive(Debug, Default)]
pub struct UploadDomain {
    pub state: UploadDomainState,
}
