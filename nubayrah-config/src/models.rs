use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::constants::{
    DEFAULT_REQUEST_TIMEOUT, DEFAULT_SERVER_URL, DEFAULT_UPLOAD_FIELD,
    ENV_REQUEST_TIMEOUT, ENV_SERVER_URL, ENV_UPLOAD_FIELD,
};

/// Fully resolved client configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL of the catalogue server, without a trailing slash.
    pub server_url: Url,
    /// Per-request timeout applied by the HTTP client.
    pub request_timeout: Duration,
    /// Multipart field name used when uploading a book.
    pub upload_field: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: Url::parse(DEFAULT_SERVER_URL)
                .expect("default server URL is valid"),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            upload_field: DEFAULT_UPLOAD_FIELD.to_string(),
        }
    }
}

impl ClientConfig {
    /// Base URL rendered without the trailing slash `Url` always keeps.
    pub fn base_url(&self) -> String {
        self.server_url.as_str().trim_end_matches('/').to_string()
    }

    pub fn to_file_config(&self) -> FileClientConfig {
        FileClientConfig {
            server_url: Some(self.base_url()),
            request_timeout: Some(
                humantime::format_duration(self.request_timeout).to_string(),
            ),
            upload_field: Some(self.upload_field.clone()),
        }
    }
}

/// Raw configuration as stored in `config.json`.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FileClientConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_url: Option<String>,
    /// Human readable duration such as `"30s"` or `"1m 30s"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload_field: Option<String>,
}

/// Raw configuration picked up from the environment.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct EnvClientConfig {
    pub server_url: Option<String>,
    pub request_timeout: Option<String>,
    pub upload_field: Option<String>,
}

impl EnvClientConfig {
    pub fn from_map(vars: &HashMap<String, String>) -> Self {
        let pick = |key: &str| {
            vars.get(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            server_url: pick(ENV_SERVER_URL),
            request_timeout: pick(ENV_REQUEST_TIMEOUT),
            upload_field: pick(ENV_UPLOAD_FIELD),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.server_url.is_none()
            && self.request_timeout.is_none()
            && self.upload_field.is_none()
    }
}

/// Which layer supplied the effective server URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    Default,
    File,
    Env,
}
