//! Shared configuration library for the Nubayrah library client.
//!
//! Configuration is composed from three layers, later layers winning:
//! compiled defaults, the JSON file under the user's config directory, and
//! environment variables (a `.env` file is folded in underneath the process
//! environment). The player binary only ever sees the resolved
//! [`ClientConfig`].

pub mod constants;
pub mod error;
pub mod loader;
pub mod models;
pub mod util;

pub use error::ConfigLoadError;
pub use loader::{ConfigLoad, ConfigLoader, default_config_path, save_config};
pub use models::{ClientConfig, ConfigSource, EnvClientConfig, FileClientConfig};
pub use util::normalize_base_url;
