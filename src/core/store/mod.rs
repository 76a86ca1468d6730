//! Secret store backends.
//!
//! The registry persists everything through the [`SecretStore`] trait: a
//! string key/value interface scoped to one service namespace.
//!
//! ## Adding a New Storage Backend
//!
//! 1. Implement the `SecretStore` trait
//! 2. Add the implementation in a new file
//! 3. Re-export from this module and wire it into [`default_backend`]

use crate::error::Result;

mod backend;
mod fs;
mod memory;
mod platform;

pub use backend::default_backend;
pub use fs::FileStore;
pub use memory::MemoryStore;
pub use platform::KeyringStore;

/// Key/value secret storage scoped to a service namespace.
pub trait SecretStore {
    /// Read the value stored under `key`.
    ///
    /// # Returns
    ///
    /// `None` if there is no entry for `key`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any existing value.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete the entry for `key`. Deleting a missing entry succeeds.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend refuses the deletion.
    fn delete(&self, key: &str) -> Result<()>;
}

impl<S: SecretStore + ?Sized> SecretStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) -> Result<()> {
        (**self).delete(key)
    }
}

impl<S: SecretStore + ?Sized> SecretStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) -> Result<()> {
        (**self).delete(key)
    }
}
