//! Catalogue service trait and implementations
//!
//! Controllers talk to the remote store only through this trait so their
//! flows can be driven by in-memory doubles.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::infra::api_client::ApiClient;
use crate::infra::api_types::{
    BookId, BookRecord, CatalogueError, OperationOutcome, UploadFile,
};

/// Remote operations on the book catalogue
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogueService: Send + Sync + Debug {
    /// Fetch the whole catalogue in server order.
    async fn list_books(&self) -> Result<Vec<BookRecord>, CatalogueError>;

    async fn fetch_book(
        &self,
        id: &BookId,
    ) -> Result<BookRecord, CatalogueError>;

    async fn upload_book(&self, file: UploadFile) -> OperationOutcome;

    /// Success is decided by the caller from the returned status.
    async fn delete_book(&self, id: &BookId) -> OperationOutcome;

    /// Derive the cover address for a book. Never touches the network.
    fn cover_url(&self, id: &BookId) -> String;
}

#[async_trait]
impl CatalogueService for ApiClient {
    async fn list_books(&self) -> Result<Vec<BookRecord>, CatalogueError> {
        ApiClient::list_books(self).await
    }

    async fn fetch_book(
        &self,
        id: &BookId,
    ) -> Result<BookRecord, CatalogueError> {
        ApiClient::fetch_book(self, id).await
    }

    async fn upload_book(&self, file: UploadFile) -> OperationOutcome {
        ApiClient::upload_book(self, file).await
    }

    async fn delete_book(&self, id: &BookId) -> OperationOutcome {
        ApiClient::delete_book(self, id).await
    }

    fn cover_url(&self, id: &BookId) -> String {
        ApiClient::cover_url(self, id)
    }
}
