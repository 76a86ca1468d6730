//! Marmoset - keep your Marmoset submission credentials in the platform keyring.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── add           # Store a credential
//! │   ├── get           # Look up the default or a named user
//! │   ├── default       # Switch the default user
//! │   ├── rm            # Remove a user
//! │   ├── list          # List users
//! │   ├── whoami        # Show owner and backend
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── config        # ~/.marmoset/config.toml + env overrides
//!     ├── constants     # Service name, key prefix, file names
//!     ├── domain/       # Owner, UserList, Credential
//!     ├── registry      # Credential registry operations
//!     ├── store/        # Secret store backends
//!     │   ├── mod       # SecretStore trait
//!     │   ├── backend   # Backend selection from config
//!     │   ├── platform  # Platform keyring
//!     │   ├── fs        # JSON file
//!     │   └── memory    # In-process map
//!     └── validation    # Username validation
//! ```
//!
//! # Example
//!
//! ```
//! use marmoset::core::domain::Owner;
//! use marmoset::core::registry::Registry;
//! use marmoset::core::store::MemoryStore;
//!
//! let registry = Registry::new(MemoryStore::new());
//! let owner = Owner::new("student");
//!
//! registry.store(&owner, "alice", "pw1").unwrap();
//! let found = registry.retrieve(&owner, None).unwrap();
//! assert_eq!(found.username(), Some("alice"));
//! assert_eq!(found.password(), Some("pw1"));
//! ```

pub mod cli;
pub mod core;
pub mod error;
