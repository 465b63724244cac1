//! Transport-level result types shared by the catalogue client and the
//! domain controllers.

use std::path::Path;
use std::sync::Arc;

use reqwest::StatusCode;
use thiserror::Error;

pub use nubayrah_model::{BookId, BookRecord, CatalogueSnapshot};

/// HTTP status code plus its reason phrase, as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub code: u16,
    pub text: String,
}

impl StatusLine {
    pub fn new(code: u16, text: impl Into<String>) -> Self {
        Self {
            code,
            text: text.into(),
        }
    }

    pub fn from_status(status: StatusCode) -> Self {
        Self {
            code: status.as_u16(),
            text: status.canonical_reason().unwrap_or_default().to_string(),
        }
    }

    pub fn is(&self, status: StatusCode) -> bool {
        self.code == status.as_u16()
    }
}

impl std::fmt::Display for StatusLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.text.is_empty() {
            write!(f, "{}", self.code)
        } else {
            write!(f, "{} {}", self.code, self.text)
        }
    }
}

/// Where a failed operation broke down. Only logging distinguishes these;
/// the UI treats every failure the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The server could not be reached.
    Transport,
    /// The server answered with a non-success status.
    Status,
    /// The operation was refused before any request was made.
    LocalPrecondition,
    /// The server answered but the body could not be decoded.
    Decode,
}

/// Normalized result of one remote call. A call yields exactly one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationOutcome {
    Success {
        status: StatusLine,
    },
    Failure {
        status: Option<StatusLine>,
        message: String,
        kind: FailureKind,
    },
}

impl OperationOutcome {
    pub fn success(status: StatusCode) -> Self {
        OperationOutcome::Success {
            status: StatusLine::from_status(status),
        }
    }

    pub fn status_failure(
        status: StatusLine,
        message: impl Into<String>,
    ) -> Self {
        OperationOutcome::Failure {
            status: Some(status),
            message: message.into(),
            kind: FailureKind::Status,
        }
    }

    pub fn no_file_selected() -> Self {
        CatalogueError::NoFileSelected.into()
    }

    pub fn status(&self) -> Option<&StatusLine> {
        match self {
            OperationOutcome::Success { status } => Some(status),
            OperationOutcome::Failure { status, .. } => status.as_ref(),
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        self.status().map(|status| status.code)
    }

    /// True when the server answered with exactly `expected`.
    pub fn has_status(&self, expected: StatusCode) -> bool {
        self.status().is_some_and(|status| status.is(expected))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, OperationOutcome::Success { .. })
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            OperationOutcome::Success { .. } => None,
            OperationOutcome::Failure { kind, .. } => Some(*kind),
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            OperationOutcome::Success { .. } => None,
            OperationOutcome::Failure { message, .. } => Some(message),
        }
    }

    /// One-line summary: the status line when there is one, otherwise the
    /// failure message.
    pub fn summary(&self) -> String {
        match self {
            OperationOutcome::Success { status } => status.to_string(),
            OperationOutcome::Failure {
                status: Some(status),
                ..
            } => status.to_string(),
            OperationOutcome::Failure {
                status: None,
                message,
                ..
            } => message.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogueError {
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("server responded {status}: {message}")]
    Status { status: StatusLine, message: String },

    #[error("could not decode server response: {0}")]
    Decode(String),

    #[error("no file selected")]
    NoFileSelected,

    #[error("could not read {path}: {message}")]
    FileRead { path: String, message: String },
}

impl CatalogueError {
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_decode() {
            CatalogueError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            CatalogueError::Status {
                status: StatusLine::from_status(status),
                message: err.to_string(),
            }
        } else {
            CatalogueError::Transport(err.to_string())
        }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            CatalogueError::Transport(_) => FailureKind::Transport,
            CatalogueError::Status { .. } => FailureKind::Status,
            CatalogueError::Decode(_) => FailureKind::Decode,
            CatalogueError::NoFileSelected
            | CatalogueError::FileRead { .. } => FailureKind::LocalPrecondition,
        }
    }
}

impl From<CatalogueError> for OperationOutcome {
    fn from(err: CatalogueError) -> Self {
        let kind = err.kind();
        match err {
            CatalogueError::Status { status, message } => {
                OperationOutcome::Failure {
                    status: Some(status),
                    message,
                    kind,
                }
            }
            other => OperationOutcome::Failure {
                status: None,
                message: other.to_string(),
                kind,
            },
        }
    }
}

/// A local book file chosen for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub file_name: String,
    pub mime: String,
    pub bytes: Arc<[u8]>,
}

impl UploadFile {
    pub fn new(
        file_name: impl Into<String>,
        bytes: impl Into<Arc<[u8]>>,
    ) -> Self {
        let file_name = file_name.into();
        let mime = mime_for(&file_name).to_string();
        Self {
            file_name,
            mime,
            bytes: bytes.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Read a file from disk without blocking the event loop.
    pub async fn read(path: &Path) -> Result<Self, CatalogueError> {
        let bytes = tokio::fs::read(path).await.map_err(|err| {
            CatalogueError::FileRead {
                path: path.display().to_string(),
                message: err.to_string(),
            }
        })?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        Ok(Self::new(file_name, bytes))
    }
}

fn mime_for(file_name: &str) -> &'static str {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase());
    match extension.as_deref() {
        Some("epub") => "application/epub+zip",
        Some("pdf") => "application/pdf",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_failure_keeps_server_status() {
        let outcome: OperationOutcome = CatalogueError::Status {
            status: StatusLine::new(500, "Internal Server Error"),
            message: "locked".into(),
        }
        .into();

        assert_eq!(outcome.status_code(), Some(500));
        assert_eq!(outcome.message(), Some("locked"));
        assert_eq!(outcome.failure_kind(), Some(FailureKind::Status));
        assert_eq!(outcome.summary(), "500 Internal Server Error");
    }

    #[test]
    fn local_failures_carry_no_status() {
        let outcome = OperationOutcome::no_file_selected();
        assert_eq!(outcome.status(), None);
        assert_eq!(
            outcome.failure_kind(),
            Some(FailureKind::LocalPrecondition)
        );
        assert_eq!(outcome.summary(), "no file selected");
    }

    #[test]
    fn success_summary_is_status_line() {
        let outcome = OperationOutcome::success(StatusCode::CREATED);
        assert!(outcome.has_status(StatusCode::CREATED));
        assert_eq!(outcome.summary(), "201 Created");
    }

    #[test]
    fn upload_mime_follows_extension() {
        let epub = UploadFile::new("a.EPUB", vec![1u8]);
        assert_eq!(epub.mime, "application/epub+zip");
        let other = UploadFile::new("notes", vec![1u8]);
        assert_eq!(other.mime, "application/octet-stream");
    }
}
