//! Error types.
//!
//! Each concern gets its own enum; [`Error`] wraps them so callers can use
//! `?` across layers and still match on the specific failure.

use thiserror::Error;

/// Top-level error returned by every fallible operation in the crate.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    NoUser(#[from] NoUserError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// An operation needed an existing, named user and didn't get one.
#[derive(Error, Debug)]
pub enum NoUserError {
    #[error("expected a username, given none")]
    Missing,

    #[error("{0} is not a known user")]
    Unknown(String),

    #[error("no users stored for {0}")]
    NoneStored(String),

    /// Listed, but the credential entry behind it is gone.
    #[error("no password stored for {0}")]
    MissingPassword(String),
}

/// Failures from the secret store backends.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("secret store error: {0}")]
    Keyring(#[from] keyring::Error),

    #[error("failed to read secret store: {0}")]
    ReadFailed(#[source] std::io::Error),

    #[error("failed to write secret store: {0}")]
    WriteFailed(#[source] std::io::Error),

    #[error("invalid secret store format: {0}")]
    InvalidFormat(String),
}

/// Failures loading `config.toml` or the environment overrides.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("unknown backend '{0}' (expected 'keyring' or 'file')")]
    UnknownBackend(String),

    #[error("unable to determine home directory")]
    NoHomeDir,
}

/// Rejected user input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("username cannot be empty")]
    EmptyUsername,

    #[error("invalid username '{username}': {reason}")]
    InvalidUsername { username: String, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
