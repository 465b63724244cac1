use std::sync::Arc;

use nubayrah_config::ClientConfig;

use crate::domains::DomainRegistry;
use crate::infra::api_client::ApiClient;
use crate::infra::services::browser::{BrowsingContextOpener, SystemBrowser};
use crate::infra::services::catalogue::CatalogueService;

/// Top-level application state
#[derive(Debug)]
pub struct State {
    pub domains: DomainRegistry,
    pub catalogue: Arc<dyn CatalogueService>,
    pub opener: Arc<dyn BrowsingContextOpener>,
    pub server_url: String,
}

impl State {
    /// State backed by the real HTTP client and the system browser.
    pub fn new(config: &ClientConfig) -> Self {
        let client = ApiClient::from_config(config);
        let server_url = client.base_url().to_string();
        Self::with_services(
            server_url,
            Arc::new(client),
            Arc::new(SystemBrowser),
        )
    }

    pub fn with_services(
        server_url: impl Into<String>,
        catalogue: Arc<dyn CatalogueService>,
        opener: Arc<dyn BrowsingContextOpener>,
    ) -> Self {
        Self {
            domains: DomainRegistry::default(),
            catalogue,
            opener,
            server_url: server_url.into(),
        }
    }
}
