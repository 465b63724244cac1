use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::constants::{
    APP_DIR_NAME, CONFIG_FILE_NAME, ENV_CONFIG_PATH, ENV_PREFIX,
};
use crate::error::ConfigLoadError;
use crate::models::{
    ClientConfig, ConfigSource, EnvClientConfig, FileClientConfig,
};
use crate::util::{parse_server_url, parse_timeout};

/// Result of a configuration load, with provenance for diagnostics.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: ClientConfig,
    pub server_url_source: ConfigSource,
    /// Config file that was read, if one existed.
    pub file_path: Option<PathBuf>,
}

/// Composes [`ClientConfig`] from defaults, the config file and the
/// environment.
#[derive(Debug, Default, Clone)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_file: Option<PathBuf>,
    env_vars: Option<HashMap<String, String>>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the config file from an explicit location instead of the
    /// platform config directory.
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Fold the given `.env` file underneath the process environment.
    pub fn with_env_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.env_file = Some(path.into());
        self
    }

    /// Use a fixed variable map instead of the process environment.
    pub fn with_env_vars(mut self, vars: HashMap<String, String>) -> Self {
        self.env_vars = Some(vars);
        self
    }

    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_vars = match &self.env_vars {
            Some(vars) => vars.clone(),
            None => collect_env(self.env_file.as_deref())?,
        };

        let file_path = self.resolve_config_path(&env_vars);
        let file_config = match file_path.as_deref() {
            Some(path) => read_file_config(path)?,
            None => None,
        };

        let env_config = EnvClientConfig::from_map(&env_vars);
        let (config, server_url_source) =
            compose(file_config.as_ref(), &env_config)?;

        tracing::info!(
            server_url = %config.server_url,
            source = ?server_url_source,
            timeout = ?config.request_timeout,
            "resolved client configuration"
        );

        Ok(ConfigLoad {
            config,
            server_url_source,
            file_path: file_config.and(file_path),
        })
    }

    fn resolve_config_path(
        &self,
        env_vars: &HashMap<String, String>,
    ) -> Option<PathBuf> {
        if let Some(path) = &self.config_path {
            return Some(path.clone());
        }
        if let Some(path) = env_vars
            .get(ENV_CONFIG_PATH)
            .filter(|value| !value.trim().is_empty())
        {
            return Some(PathBuf::from(path));
        }
        default_config_path()
    }
}

/// `<config_dir>/nubayrah/config.json` for the current platform.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Persist a configuration as pretty-printed JSON, creating parent
/// directories as needed.
pub fn save_config(
    config: &ClientConfig,
    path: &Path,
) -> Result<(), ConfigLoadError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| {
            ConfigLoadError::Io {
                path: parent.to_path_buf(),
                source,
            }
        })?;
    }
    let content = serde_json::to_string_pretty(&config.to_file_config())?;
    std::fs::write(path, content).map_err(|source| ConfigLoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn read_file_config(
    path: &Path,
) -> Result<Option<FileClientConfig>, ConfigLoadError> {
    if !path.exists() {
        tracing::debug!(
            path = %path.display(),
            "no config file, using defaults"
        );
        return Ok(None);
    }

    let content =
        std::fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    let parsed = serde_json::from_str::<FileClientConfig>(&content).map_err(
        |source| ConfigLoadError::Parse {
            path: path.to_path_buf(),
            source,
        },
    )?;
    Ok(Some(parsed))
}

fn collect_env(
    env_file: Option<&Path>,
) -> Result<HashMap<String, String>, ConfigLoadError> {
    let mut vars = HashMap::new();

    let env_file = env_file
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(".env"));
    if env_file.exists() {
        let entries = dotenvy::from_path_iter(&env_file).map_err(|source| {
            ConfigLoadError::EnvFile {
                path: env_file.clone(),
                source,
            }
        })?;
        for entry in entries {
            let (key, value) =
                entry.map_err(|source| ConfigLoadError::EnvFile {
                    path: env_file.clone(),
                    source,
                })?;
            vars.insert(key, value);
        }
    }

    // Process environment wins over the .env file.
    vars.extend(
        std::env::vars().filter(|(key, _)| key.starts_with(ENV_PREFIX)),
    );
    Ok(vars)
}

fn compose(
    file: Option<&FileClientConfig>,
    env: &EnvClientConfig,
) -> Result<(ClientConfig, ConfigSource), ConfigLoadError> {
    let mut config = ClientConfig::default();
    let mut source = ConfigSource::Default;

    if let Some(file) = file {
        if let Some(url) = file.server_url.as_deref() {
            config.server_url = parse_server_url(url)?;
            source = ConfigSource::File;
        }
        if let Some(timeout) = file.request_timeout.as_deref() {
            config.request_timeout = parse_timeout(timeout)?;
        }
        if let Some(field) = file.upload_field.as_deref() {
            config.upload_field = field.trim().to_string();
        }
    }

    if let Some(url) = env.server_url.as_deref() {
        config.server_url = parse_server_url(url)?;
        source = ConfigSource::Env;
    }
    if let Some(timeout) = env.request_timeout.as_deref() {
        config.request_timeout = parse_timeout(timeout)?;
    }
    if let Some(field) = env.upload_field.as_deref() {
        config.upload_field = field.to_string();
    }

    if config.upload_field.is_empty() {
        return Err(ConfigLoadError::EmptyUploadField);
    }

    Ok((config, source))
}
