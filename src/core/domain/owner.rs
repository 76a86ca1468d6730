//! Owner type.
//!
//! The local operating-system account that owns a user list.

use crate::core::constants;

/// The OS account whose Marmoset users are being managed.
///
/// Resolved once at the edge of the program and passed into every registry
/// operation, so nothing below the CLI reads the ambient account.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Owner(String);

impl Owner {
    /// Create an owner from an explicit account name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Owner for the account running this process.
    pub fn current() -> Self {
        Self(whoami::username())
    }

    /// Account name.
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Secret store key holding this owner's user list.
    pub fn users_key(&self) -> String {
        format!("{}{}", constants::USERS_KEY_PREFIX, self.0)
    }
}

impl std::fmt::Display for Owner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
