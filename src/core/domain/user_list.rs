//! User list type.
//!
//! Ordered usernames for one owner. The first entry is the default user.
//! The comma-joined text form only exists at the persistence edge
//! ([`UserList::parse`] / [`UserList::encode`]).

use serde::Serialize;

use crate::core::constants::USER_SEPARATOR;

/// Ordered, duplicate-free list of usernames.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct UserList(Vec<String>);

impl UserList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the stored text form.
    ///
    /// Empty segments are skipped, which covers values written with a
    /// trailing separator (`"alice,bob,"`). Repeated names keep their first
    /// position.
    pub fn parse(raw: &str) -> Self {
        let mut list = Self::new();
        for name in raw.split(USER_SEPARATOR).filter(|s| !s.is_empty()) {
            list.push(name);
        }
        list
    }

    /// Text form written to the secret store.
    pub fn encode(&self) -> String {
        let mut sep = [0u8; 4];
        self.0.join(USER_SEPARATOR.encode_utf8(&mut sep))
    }

    /// Exact membership check.
    pub fn contains(&self, username: &str) -> bool {
        self.0.iter().any(|u| u == username)
    }

    /// The default user, if any.
    pub fn default_user(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    /// Append a user. Returns `false` if it was already present.
    pub fn push(&mut self, username: &str) -> bool {
        if self.contains(username) {
            return false;
        }
        self.0.push(username.to_string());
        true
    }

    /// Move a user to the front, keeping the others in order.
    ///
    /// Returns `false` if the user is not in the list.
    pub fn promote(&mut self, username: &str) -> bool {
        match self.0.iter().position(|u| u == username) {
            Some(idx) => {
                let user = self.0.remove(idx);
                self.0.insert(0, user);
                true
            }
            None => false,
        }
    }

    /// Remove a user. Returns `false` if it was not present.
    pub fn remove(&mut self, username: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|u| u != username);
        self.0.len() != before
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<'a> FromIterator<&'a str> for UserList {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut list = Self::new();
        for name in iter {
            list.push(name);
        }
        list
    }
}
