//! Test support utilities for marmoset integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]


#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment with an isolated marmoset home.
///
/// Every command runs against the file backend inside a temporary home and
/// a fixed owner, so tests never touch the real keyring and can run in
/// parallel.
pub struct Test {
    /// Temporary marmoset home
    pub home: TempDir,
    /// Owner passed via MARMOSET_OWNER
    pub owner: String,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let home = TempDir::new().expect("failed to create temp home");
        Self {
            home,
            owner: TEST_OWNER.to_string(),
        }
    }

    /// Create a test environment with users already stored, in order.
    pub fn with_users(users: &[(&str, &str)]) -> Self {
        let t = Self::new();
        for (username, password) in users {
            let output = t.add(username, password);
            assert!(
                output.status.success(),
                "Failed to add user {}: {}",
                username,
                String::from_utf8_lossy(&output.stderr)
            );
        }
        t
    }

    /// Path of the file backend's store.
    pub fn store_path(&self) -> PathBuf {
        self.home.path().join("store.json")
    }

    /// Parsed contents of the file backend's store.
    pub fn store_json(&self) -> serde_json::Value {
        let raw = std::fs::read_to_string(self.store_path()).expect("store file missing");
        serde_json::from_str(&raw).expect("store file is not JSON")
    }
}
