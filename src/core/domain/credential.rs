//! Credential types.
//!
//! Passwords are held in [`Zeroizing`] buffers and never show up in
//! `Debug` output.

use zeroize::Zeroizing;

/// A username/password pair for the Marmoset server.
#[derive(Clone)]
pub struct Credential {
    username: String,
    password: Zeroizing<String>,
}

impl Credential {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: Zeroizing::new(password.into()),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Result of a registry lookup.
///
/// Mirrors the `(username, password)` pair the registry hands back: the
/// username is whatever was asked for (or the default user), and the
/// password is `None` when nothing matched.
///
/// A listed user can still come back without a password if its credential
/// entry was deleted underneath the list; [`Lookup::is_listed`] tells the two
/// cases apart.
#[derive(Clone, Default)]
pub struct Lookup {
    username: Option<String>,
    password: Option<Zeroizing<String>>,
    listed: bool,
}

impl Lookup {
    pub(crate) fn found(username: String, password: Option<String>) -> Self {
        Self {
            username: Some(username),
            password: password.map(Zeroizing::new),
            listed: true,
        }
    }

    pub(crate) fn missing(username: Option<&str>) -> Self {
        Self {
            username: username.map(str::to_string),
            password: None,
            listed: false,
        }
    }

    /// Whether the username is on the owner's list.
    pub fn is_listed(&self) -> bool {
        self.listed
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_ref().map(|p| p.as_str())
    }

    /// The credential, when both the username and password are known.
    pub fn into_credential(self) -> Option<Credential> {
        match (self.username, self.password) {
            (Some(username), Some(password)) => Some(Credential { username, password }),
            _ => None,
        }
    }
}

impl std::fmt::Debug for Lookup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lookup")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("listed", &self.listed)
            .finish()
    }
}
