//! Backend selection logic for the secret store
//!
//! Picks the keyring or the file store from the loaded [`Config`].

use tracing::info;

use super::{FileStore, KeyringStore, SecretStore};
use crate::core::config::{Backend, Config};

/// Default backend selection
///
/// Keyring unless the configuration (or `MARMOSET_BACKEND=file`) asks for
/// the file store.
pub fn default_backend(config: &Config) -> Box<dyn SecretStore> {
    match config.backend {
        Backend::Keyring => {
            info!(service = %config.service, "Using platform keyring backend");
            Box::new(KeyringStore::new(&config.service))
        }
        Backend::File => {
            let path = config.store_path();
            info!(
                service = %config.service,
                path = %path.display(),
                "Using file backend"
            );
            Box::new(FileStore::new(path, &config.service))
        }
    }
}
