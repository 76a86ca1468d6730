//! Configuration management.
//!
//! Reads `~/.marmoset/config.toml` (or `$MARMOSET_HOME/config.toml`) and
//! applies `MARMOSET_*` environment overrides on top of it.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Which secret store backs the registry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Platform keyring (Keychain, Credential Manager, Secret Service).
    #[default]
    Keyring,
    /// Plain JSON file in the marmoset home.
    File,
}

impl FromStr for Backend {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "keyring" => Ok(Backend::Keyring),
            "file" => Ok(Backend::File),
            _ => Err(ConfigError::UnknownBackend(s.to_string())),
        }
    }
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Backend::Keyring => write!(f, "keyring"),
            Backend::File => write!(f, "file"),
        }
    }
}

/// Marmoset configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Service namespace in the secret store
    pub service: String,
    /// Storage backend
    pub backend: Backend,
    /// Directory holding `config.toml` and the file backend's store
    #[serde(skip)]
    pub home: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service: constants::SERVICE.to_string(),
            backend: Backend::default(),
            home: PathBuf::from(constants::HOME_DIR),
        }
    }
}

impl Config {
    /// Load configuration from the marmoset home and the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the home directory cannot be determined, the
    /// config file is malformed, or `MARMOSET_BACKEND` names an unknown backend.
    pub fn load() -> Result<Self> {
        let env = |name: &str| std::env::var(name).ok();
        let home = home_dir(env)?;
        Self::load_from(&home, env)
    }

    /// Load configuration from `home`, resolving overrides through `env`.
    pub fn load_from<F>(home: &Path, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = home.join(constants::CONFIG_FILE);
        debug!(path = %path.display(), "loading config");

        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(&path).map_err(ConfigError::ReadFile)?;
            toml::from_str::<Self>(&contents).map_err(ConfigError::Parse)?
        } else {
            Self::default()
        };
        config.home = home.to_path_buf();

        if let Some(service) = env(constants::ENV_SERVICE).filter(|s| !s.is_empty()) {
            config.service = service;
        }
        if let Some(backend) = env(constants::ENV_BACKEND).filter(|s| !s.is_empty()) {
            config.backend = backend.parse()?;
        }

        debug!(
            service = %config.service,
            backend = %config.backend,
            "config loaded"
        );
        Ok(config)
    }

    /// Path of the file backend's store.
    pub fn store_path(&self) -> PathBuf {
        self.home.join(constants::STORE_FILE)
    }
}

/// Resolve the marmoset home directory.
///
/// `MARMOSET_HOME` wins; otherwise `~/.marmoset`.
pub fn home_dir<F>(env: F) -> Result<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(home) = env(constants::ENV_HOME).filter(|s| !s.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
    Ok(home.join(constants::HOME_DIR))
}
