//! Credential registry.
//!
//! A thin layer over a [`SecretStore`] that owns two pieces of schema:
//! - each credential lives under its username as the key
//! - an owner's ordered user list lives under [`Owner::users_key`]
//!
//! The user list is read, modified and written back without locking, so two
//! processes updating the same owner at once can lose an update.

use tracing::debug;

use crate::core::domain::{Lookup, Owner, UserList};
use crate::core::store::SecretStore;
use crate::core::validation;
use crate::error::{NoUserError, Result};

/// Per-owner registry of Marmoset credentials.
pub struct Registry<S> {
    store: S,
}

impl<S: SecretStore> Registry<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying secret store.
    pub fn backend(&self) -> &S {
        &self.store
    }

    /// Check whether `username` is one of the owner's users.
    ///
    /// Creates an empty user list for the owner if none exists yet.
    pub fn exists(&self, owner: &Owner, username: &str) -> Result<bool> {
        match self.load_users(owner)? {
            Some(users) => Ok(users.contains(username)),
            None => {
                self.init_users(owner)?;
                Ok(false)
            }
        }
    }

    /// Store a credential and add the username to the owner's list.
    ///
    /// An existing password for `username` is overwritten. The list is only
    /// rewritten when the username is new.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the username can't be stored.
    pub fn store(&self, owner: &Owner, username: &str, password: &str) -> Result<()> {
        validation::validate_username(username)?;

        self.store.set(username, password)?;
        debug!(owner = %owner, username = %username, "credential written");

        let mut users = self.load_users(owner)?.unwrap_or_default();
        if users.push(username) {
            self.save_users(owner, &users)?;
            debug!(owner = %owner, username = %username, count = users.len(), "user added");
        }
        Ok(())
    }

    /// Look up a user's credential.
    ///
    /// With `Some(username)`, returns that user's password if they are on
    /// the owner's list. With `None`, returns the default user. Anything
    /// else comes back with no password. An empty username counts as
    /// `None`.
    pub fn retrieve(&self, owner: &Owner, username: Option<&str>) -> Result<Lookup> {
        let username = username.filter(|u| !u.is_empty());

        let Some(users) = self.load_users(owner)? else {
            self.init_users(owner)?;
            return Ok(Lookup::missing(username));
        };

        let target = match username {
            Some(name) if users.contains(name) => name,
            Some(_) => return Ok(Lookup::missing(username)),
            None => match users.default_user() {
                Some(name) => name,
                None => return Ok(Lookup::missing(None)),
            },
        };

        let password = self.store.get(target)?;
        debug!(
            owner = %owner,
            username = %target,
            found = password.is_some(),
            "credential looked up"
        );
        Ok(Lookup::found(target.to_string(), password))
    }

    /// Make `username` the owner's default user.
    ///
    /// # Errors
    ///
    /// Returns `NoUserError` if no username is given or it isn't one of the
    /// owner's users. Nothing is written in that case.
    pub fn set_default(&self, owner: &Owner, username: Option<&str>) -> Result<()> {
        let (username, mut users) = self.require_user(owner, username)?;

        users.promote(username);
        self.save_users(owner, &users)?;
        debug!(owner = %owner, username = %username, "default user changed");
        Ok(())
    }

    /// Remove `username` from the owner's list and delete its credential.
    ///
    /// # Errors
    ///
    /// Returns `NoUserError` if no username is given or it isn't one of the
    /// owner's users. Nothing is written in that case.
    pub fn remove(&self, owner: &Owner, username: Option<&str>) -> Result<()> {
        let (username, mut users) = self.require_user(owner, username)?;

        users.remove(username);
        self.save_users(owner, &users)?;
        self.store.delete(username)?;
        debug!(owner = %owner, username = %username, "user removed");
        Ok(())
    }

    /// The owner's users, default first. Never writes.
    pub fn users(&self, owner: &Owner) -> Result<UserList> {
        Ok(self.load_users(owner)?.unwrap_or_default())
    }

    /// Resolve a username that must already be on the owner's list.
    fn require_user<'a>(
        &self,
        owner: &Owner,
        username: Option<&'a str>,
    ) -> Result<(&'a str, UserList)> {
        let username = username
            .filter(|u| !u.is_empty())
            .ok_or(NoUserError::Missing)?;

        let users = self.load_users(owner)?.unwrap_or_default();
        if !users.contains(username) {
            return Err(NoUserError::Unknown(username.to_string()).into());
        }
        Ok((username, users))
    }

    fn load_users(&self, owner: &Owner) -> Result<Option<UserList>> {
        Ok(self
            .store
            .get(&owner.users_key())?
            .map(|raw| UserList::parse(&raw)))
    }

    fn init_users(&self, owner: &Owner) -> Result<()> {
        debug!(owner = %owner, "initializing empty user list");
        self.save_users(owner, &UserList::new())
    }

    fn save_users(&self, owner: &Owner, users: &UserList) -> Result<()> {
        self.store.set(&owner.users_key(), &users.encode())
    }
}
