//! Platform keyring backend.
//!
//! Uses the `keyring` crate, which maps to the macOS Keychain, the Windows
//! Credential Manager, or the Linux Secret Service. On Linux, kernel keyutils
//! only caches entries in front of the Secret Service, so credentials survive
//! a reboot.

use tracing::{debug, error};

use super::SecretStore;
use crate::error::{Result, StoreError};

/// Secret store backed by the platform keyring.
pub struct KeyringStore {
    service: String,
}

impl KeyringStore {
    /// Create a keyring store for a service namespace.
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }

    /// Service namespace entries are stored under.
    pub fn service(&self) -> &str {
        &self.service
    }

    fn entry(&self, key: &str) -> Result<::keyring::Entry> {
        ::keyring::Entry::new(&self.service, key).map_err(|e| {
            error!(key = %key, error = %e, "failed to open keyring entry");
            StoreError::Keyring(e).into()
        })
    }
}

impl SecretStore for KeyringStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match self.entry(key)?.get_password() {
            Ok(value) => {
                debug!(key = %key, service = %self.service, "keyring entry found");
                Ok(Some(value))
            }
            Err(::keyring::Error::NoEntry) => {
                debug!(key = %key, service = %self.service, "keyring entry not found");
                Ok(None)
            }
            Err(e) => {
                error!(key = %key, error = %e, "failed to read keyring entry");
                Err(StoreError::Keyring(e).into())
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        match self.entry(key)?.set_password(value) {
            Ok(()) => {
                debug!(key = %key, service = %self.service, "keyring entry written");
                Ok(())
            }
            Err(e) => {
                error!(key = %key, error = %e, "failed to write keyring entry");
                Err(StoreError::Keyring(e).into())
            }
        }
    }

    fn delete(&self, key: &str) -> Result<()> {
        match self.entry(key)?.delete_credential() {
            Ok(()) => {
                debug!(key = %key, service = %self.service, "keyring entry deleted");
                Ok(())
            }
            Err(::keyring::Error::NoEntry) => {
                debug!(key = %key, "keyring entry already absent");
                Ok(())
            }
            Err(e) => {
                error!(key = %key, error = %e, "failed to delete keyring entry");
                Err(StoreError::Keyring(e).into())
            }
        }
    }
}
