use anyhow::Context;
use iced::Task;
use nubayrah_config::{ClientConfig, ConfigLoader};

use crate::common::messages::DomainMessage;
use crate::domains::library::messages::LibraryMessage;
use crate::state::State;

#[derive(Clone, Debug, Default)]
pub struct AppConfig {
    pub client: ClientConfig,
}

impl AppConfig {
    pub fn new(client: ClientConfig) -> Self {
        Self { client }
    }

    /// Resolve configuration from the config file and environment, falling
    /// back to defaults when it cannot be loaded.
    pub fn from_environment() -> Self {
        match load_client_config() {
            Ok(client) => Self { client },
            Err(err) => {
                log::warn!(
                    "[Bootstrap] {:#}; using default configuration",
                    err
                );
                Self::default()
            }
        }
    }

    pub fn server_url(&self) -> String {
        self.client.base_url()
    }
}

fn load_client_config() -> anyhow::Result<ClientConfig> {
    let load = ConfigLoader::new()
        .load()
        .context("failed to load client configuration")?;
    if let Some(path) = &load.file_path {
        log::info!("[Bootstrap] Read configuration from {}", path.display());
    }
    Ok(load.config)
}

pub fn base_state(config: &AppConfig) -> State {
    State::new(&config.client)
}

/// The catalogue starts out `Pending`; this is the fetch that settles it.
pub fn initial_tasks() -> Task<DomainMessage> {
    Task::done(DomainMessage::Library(LibraryMessage::LoadBooks))
}

/// Boot logic used by the runtime application.
pub fn runtime_boot(config: &AppConfig) -> (State, Task<DomainMessage>) {
    let state = base_state(config);
    log::info!("[Bootstrap] Connecting to {}", state.server_url);
    (state, initial_tasks())
}
