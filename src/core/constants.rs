//! Constants used throughout marmoset.
//!
//! Centralizes magic strings and configuration values.

/// Default service namespace in the secret store.
pub const SERVICE: &str = "marmoset";

/// Prefix of the key holding an owner's user list.
pub const USERS_KEY_PREFIX: &str = "_config_";

/// Separator used when the user list is persisted as text.
pub const USER_SEPARATOR: char = ',';

/// Marmoset home directory relative to HOME (~/.marmoset).
pub const HOME_DIR: &str = ".marmoset";

/// Configuration file name inside the marmoset home.
pub const CONFIG_FILE: &str = "config.toml";

/// File backend store name inside the marmoset home.
pub const STORE_FILE: &str = "store.json";

/// Overrides the marmoset home directory.
pub const ENV_HOME: &str = "MARMOSET_HOME";

/// Overrides the service namespace.
pub const ENV_SERVICE: &str = "MARMOSET_SERVICE";

/// Selects the storage backend (`keyring` or `file`).
pub const ENV_BACKEND: &str = "MARMOSET_BACKEND";

/// Overrides the owner name derived from the OS account.
pub const ENV_OWNER: &str = "MARMOSET_OWNER";

/// Log filter for the tracing subscriber.
pub const ENV_LOG: &str = "MARMOSET_LOG";
