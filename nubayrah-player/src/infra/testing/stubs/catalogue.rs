use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::infra::api_types::{
    BookId, BookRecord, CatalogueError, OperationOutcome, StatusLine,
    UploadFile,
};
use crate::infra::services::catalogue::CatalogueService;

/// In-memory catalogue server.
///
/// Deletes remove the record and answer `204`, uploads append a record and
/// answer `201`, unless an override outcome has been scripted.
#[derive(Debug, Clone)]
pub struct StubCatalogueService {
    inner: Arc<RwLock<InnerCatalogueState>>,
    base_url: Arc<str>,
}

#[derive(Debug, Clone, Default)]
struct InnerCatalogueState {
    books: Vec<BookRecord>,
    next_id: u64,
    list_failure: Option<CatalogueError>,
    upload_override: Option<OperationOutcome>,
    delete_overrides: HashMap<BookId, OperationOutcome>,
    uploaded_files: Vec<String>,
    list_calls: usize,
    upload_calls: usize,
    delete_calls: usize,
}

impl Default for StubCatalogueService {
    fn default() -> Self {
        Self::new("http://localhost:5050")
    }
}

impl StubCatalogueService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(InnerCatalogueState {
                next_id: 1,
                ..InnerCatalogueState::default()
            })),
            base_url: Arc::from(base_url.into()),
        }
    }

    /// Stub pre-populated with the given records.
    pub fn with_books(books: Vec<BookRecord>) -> Self {
        let stub = Self::default();
        for book in books {
            stub.push_book(book);
        }
        stub
    }

    pub fn push_book(&self, book: BookRecord) {
        if let Ok(mut guard) = self.inner.write() {
            guard.books.push(book);
        }
    }

    /// Add a record with a generated numeric id and return that id.
    pub fn add_book(&self, title: &str, author: &str) -> BookId {
        let mut guard = self.inner.write().expect("lock poisoned");
        let id = BookId::from(guard.next_id);
        guard.next_id += 1;
        guard
            .books
            .push(BookRecord::new(id.clone(), title, author, "2021-06-01"));
        id
    }

    pub fn books(&self) -> Vec<BookRecord> {
        self.inner.read().expect("lock poisoned").books.clone()
    }

    /// Make every listing fail with `error` until cleared.
    pub fn fail_listing(&self, error: Option<CatalogueError>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.list_failure = error;
        }
    }

    pub fn script_upload(&self, outcome: OperationOutcome) {
        if let Ok(mut guard) = self.inner.write() {
            guard.upload_override = Some(outcome);
        }
    }

    /// Answer deletes of `id` with `outcome` and keep the record.
    pub fn script_delete(&self, id: BookId, outcome: OperationOutcome) {
        if let Ok(mut guard) = self.inner.write() {
            guard.delete_overrides.insert(id, outcome);
        }
    }

    pub fn uploaded_files(&self) -> Vec<String> {
        self.inner.read().expect("lock poisoned").uploaded_files.clone()
    }

    pub fn list_calls(&self) -> usize {
        self.inner.read().expect("lock poisoned").list_calls
    }

    pub fn upload_calls(&self) -> usize {
        self.inner.read().expect("lock poisoned").upload_calls
    }

    pub fn delete_calls(&self) -> usize {
        self.inner.read().expect("lock poisoned").delete_calls
    }
}

#[async_trait]
impl CatalogueService for StubCatalogueService {
    async fn list_books(&self) -> Result<Vec<BookRecord>, CatalogueError> {
        let mut guard = self.inner.write().expect("lock poisoned");
        guard.list_calls += 1;
        match &guard.list_failure {
            Some(error) => Err(error.clone()),
            None => Ok(guard.books.clone()),
        }
    }

    async fn fetch_book(
        &self,
        id: &BookId,
    ) -> Result<BookRecord, CatalogueError> {
        let guard = self.inner.read().expect("lock poisoned");
        guard
            .books
            .iter()
            .find(|book| &book.id == id)
            .cloned()
            .ok_or_else(|| CatalogueError::Status {
                status: StatusLine::from_status(StatusCode::NOT_FOUND),
                message: "book not found".into(),
            })
    }

    async fn upload_book(&self, file: UploadFile) -> OperationOutcome {
        let mut guard = self.inner.write().expect("lock poisoned");
        guard.upload_calls += 1;
        guard.uploaded_files.push(file.file_name.clone());
        if let Some(outcome) = guard.upload_override.clone() {
            return outcome;
        }

        let id = BookId::from(guard.next_id);
        guard.next_id += 1;
        let title = file
            .file_name
            .rsplit_once('.')
            .map(|(stem, _)| stem.to_string())
            .unwrap_or_else(|| file.file_name.clone());
        guard.books.push(BookRecord::new(id, title, "", ""));
        OperationOutcome::success(StatusCode::CREATED)
    }

    async fn delete_book(&self, id: &BookId) -> OperationOutcome {
        let mut guard = self.inner.write().expect("lock poisoned");
        guard.delete_calls += 1;
        if let Some(outcome) = guard.delete_overrides.get(id) {
            return outcome.clone();
        }

        let before = guard.books.len();
        guard.books.retain(|book| &book.id != id);
        if guard.books.len() < before {
            OperationOutcome::success(StatusCode::NO_CONTENT)
        } else {
            OperationOutcome::status_failure(
                StatusLine::from_status(StatusCode::NOT_FOUND),
                "book not found",
            )
        }
    }

    fn cover_url(&self, id: &BookId) -> String {
        format!(
            "{}/books/{}/cover",
            self.base_url,
            urlencoding::encode(id.as_str())
        )
    }
}
