use std::path::PathBuf;

use crate::infra::api_types::{CatalogueError, OperationOutcome, UploadFile};

#[derive(Debug, Clone)]
pub enum UploadMessage {
    PathInputChanged(String),
    /// Load whatever path is currently typed in the input
    LoadPathInput,
    SelectPath(PathBuf),
    FileLoaded(Result<UploadFile, CatalogueError>),
    /// Replace the selection with an already loaded file
    SelectFile(UploadFile),
    Submit,
    Submitted(OperationOutcome),
}

impl UploadMessage {
    pub fn name(&self) -> &'static str {
        match self {
            UploadMessage::PathInputChanged(_) => "Upload::PathInputChanged",
            UploadMessage::LoadPathInput => "Upload::LoadPathInput",
            UploadMessage::SelectPath(_) => "Upload::SelectPath",
            UploadMessage::FileLoaded(_) => "Upload::FileLoaded",
            UploadMessage::SelectFile(_) => "Upload::SelectFile",
            UploadMessage::Submit => "Upload::Submit",
            UploadMessage::Submitted(_) => "Upload::Submitted",
        }
    }
}
