use log::{debug, info, warn};
use nubayrah_config::{
    ClientConfig, constants::DEFAULT_UPLOAD_FIELD, normalize_base_url,
};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response, StatusCode};
use std::time::Duration;

use crate::infra::api_types::{
    BookId, BookRecord, CatalogueError, OperationOutcome, StatusLine,
    UploadFile,
};

/// HTTP client for the book catalogue server
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    upload_field: String,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("upload_field", &self.upload_field)
            .finish()
    }
}

impl ApiClient {
    /// Create a client with the default timeout and upload field name.
    pub fn new(base_url: String) -> Self {
        Self::with_options(
            base_url,
            Duration::from_secs(30),
            DEFAULT_UPLOAD_FIELD.to_string(),
        )
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::with_options(
            config.base_url(),
            config.request_timeout,
            config.upload_field.clone(),
        )
    }

    pub fn with_options(
        base_url: String,
        timeout: Duration,
        upload_field: String,
    ) -> Self {
        let base_url = normalize_base_url(&base_url);
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|err| {
                warn!(
                    "[ApiClient] Failed to build HTTP client ({}), \
                     using defaults",
                    err
                );
                Client::new()
            });

        info!(
            "[ApiClient] Creating new API client with base URL: {}",
            base_url
        );

        Self {
            client,
            base_url,
            upload_field,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a full URL from a path
    pub fn build_url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    fn book_url(&self, id: &BookId) -> String {
        self.build_url(&format!("/books/{}", urlencoding::encode(id.as_str())))
    }

    /// Address of a book's cover image. Pure; no request is made.
    pub fn cover_url(&self, id: &BookId) -> String {
        format!("{}/cover", self.book_url(id))
    }

    pub async fn list_books(&self) -> Result<Vec<BookRecord>, CatalogueError> {
        let url = self.build_url("/books/");
        debug!("[ApiClient] GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(CatalogueError::from_reqwest)?;
        let response = ensure_success(response).await?;

        let books = response
            .json::<Vec<BookRecord>>()
            .await
            .map_err(|err| CatalogueError::Decode(err.to_string()))?;
        info!("[ApiClient] Listed {} books", books.len());
        Ok(books)
    }

    pub async fn fetch_book(
        &self,
        id: &BookId,
    ) -> Result<BookRecord, CatalogueError> {
        let url = self.book_url(id);
        debug!("[ApiClient] GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(CatalogueError::from_reqwest)?;
        let response = ensure_success(response).await?;

        response
            .json::<BookRecord>()
            .await
            .map_err(|err| CatalogueError::Decode(err.to_string()))
    }

    /// Submit one file as a single multipart part. Any status the server
    /// answers with is reported verbatim.
    pub async fn upload_book(&self, file: UploadFile) -> OperationOutcome {
        let url = self.build_url("/books");
        info!(
            "[ApiClient] Uploading {} ({} bytes) to {}",
            file.file_name,
            file.len(),
            url
        );

        let part = match Part::bytes(file.bytes.to_vec())
            .file_name(file.file_name.clone())
            .mime_str(&file.mime)
        {
            Ok(part) => part,
            Err(err) => return CatalogueError::from_reqwest(err).into(),
        };
        let form = Form::new().part(self.upload_field.clone(), part);

        match self.client.post(&url).multipart(form).send().await {
            Ok(response) => outcome_from_response(response).await,
            Err(err) => {
                warn!("[ApiClient] Upload transport failure: {}", err);
                CatalogueError::from_reqwest(err).into()
            }
        }
    }

    pub async fn delete_book(&self, id: &BookId) -> OperationOutcome {
        let url = self.book_url(id);
        info!("[ApiClient] DELETE {}", url);

        match self.client.delete(&url).send().await {
            Ok(response) => outcome_from_response(response).await,
            Err(err) => {
                warn!("[ApiClient] Delete transport failure: {}", err);
                CatalogueError::from_reqwest(err).into()
            }
        }
    }
}

async fn ensure_success(
    response: Response,
) -> Result<Response, CatalogueError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = error_message(status, &body);
    warn!("[ApiClient] Server responded {}: {}", status, message);
    Err(CatalogueError::Status {
        status: StatusLine::from_status(status),
        message,
    })
}

async fn outcome_from_response(response: Response) -> OperationOutcome {
    let status = response.status();
    if status.is_success() {
        debug!("[ApiClient] Server responded {}", status);
        return OperationOutcome::success(status);
    }

    let body = response.text().await.unwrap_or_default();
    let message = error_message(status, &body);
    warn!("[ApiClient] Server responded {}: {}", status, message);
    OperationOutcome::status_failure(StatusLine::from_status(status), message)
}

/// Prefer a JSON `message`/`error` field, then the raw body, then the
/// reason phrase.
fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error"] {
            if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
                return text.to_string();
            }
        }
    }

    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }

    status
        .canonical_reason()
        .unwrap_or("request failed")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cover_url_is_stable_and_encoded() {
        let client = ApiClient::new("localhost:5050/".to_string());
        let id = BookId::new("a b/c").unwrap();

        assert_eq!(client.base_url(), "http://localhost:5050");
        assert_eq!(
            client.cover_url(&id),
            "http://localhost:5050/books/a%20b%2Fc/cover"
        );
        assert_eq!(client.cover_url(&id), client.cover_url(&id));
    }

    #[test]
    fn build_url_joins_relative_paths() {
        let client = ApiClient::new("https://books.example.org".to_string());
        assert_eq!(
            client.build_url("books"),
            "https://books.example.org/books"
        );
        assert_eq!(
            client.build_url("/books/"),
            "https://books.example.org/books/"
        );
    }

    #[test]
    fn error_message_prefers_json_message() {
        assert_eq!(
            error_message(
                StatusCode::INTERNAL_SERVER_ERROR,
                r#"{"message":"locked"}"#
            ),
            "locked"
        );
        assert_eq!(
            error_message(StatusCode::BAD_REQUEST, "  bad epub \n"),
            "bad epub"
        );
        assert_eq!(error_message(StatusCode::NOT_FOUND, ""), "Not Found");
    }
}
