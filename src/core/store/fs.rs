//! Filesystem backend.
//!
//! Keeps entries in a JSON file (`~/.marmoset/store.json`), grouped by
//! service namespace. The file is not encrypted; it is restricted to the
//! owning account (0600 on Unix), replaced by rename on every write, and
//! meant for headless machines without a keyring.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::SecretStore;
use crate::error::{Result, StoreError};

/// On-disk layout: service -> key -> value.
#[derive(Debug, Default, Serialize, Deserialize)]
struct Contents {
    #[serde(default)]
    services: BTreeMap<String, BTreeMap<String, String>>,
}

/// Secret store backed by a JSON file.
pub struct FileStore {
    path: PathBuf,
    service: String,
}

impl FileStore {
    /// Create a file store at `path` for a service namespace.
    ///
    /// The file is created on first write.
    pub fn new(path: impl Into<PathBuf>, service: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            service: service.into(),
        }
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Contents> {
        if !self.path.exists() {
            return Ok(Contents::default());
        }

        #[cfg(unix)]
        {
            if let Err(e) = validate_file_permissions(&self.path, 0o600) {
                warn!(
                    "Insecure store file permissions: {}. Run: chmod 600 {}",
                    e,
                    self.path.display()
                );
            }
        }

        let raw = fs::read_to_string(&self.path).map_err(StoreError::ReadFailed)?;
        if raw.trim().is_empty() {
            return Ok(Contents::default());
        }
        serde_json::from_str(&raw).map_err(|e| StoreError::InvalidFormat(e.to_string()).into())
    }

    fn write(&self, contents: &Contents) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(StoreError::WriteFailed)?;
        }

        let json = serde_json::to_string_pretty(contents)?;
        let tmp = self.temp_path();
        if let Err(e) = write_private(&tmp, format!("{}\n", json).as_bytes()) {
            let _ = fs::remove_file(&tmp);
            return Err(StoreError::WriteFailed(e).into());
        }
        fs::rename(&tmp, &self.path).map_err(StoreError::WriteFailed)?;

        debug!(path = %self.path.display(), "store file written");
        Ok(())
    }

    /// Sibling file new contents are staged in before replacing the store.
    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

/// Write `bytes` to a fresh file readable only by the owner (Unix).
fn write_private(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut options = fs::OpenOptions::new();
    options.create(true).truncate(true).write(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path)?;
    file.write_all(bytes)?;
    file.sync_all()?;

    // A stale temp file keeps its old mode when reopened
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
    }

    Ok(())
}

impl SecretStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let contents = self.read()?;
        Ok(contents
            .services
            .get(&self.service)
            .and_then(|entries| entries.get(key))
            .cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut contents = self.read()?;
        contents
            .services
            .entry(self.service.clone())
            .or_default()
            .insert(key.to_string(), value.to_string());
        self.write(&contents)
    }

    fn delete(&self, key: &str) -> Result<()> {
        let mut contents = self.read()?;
        let removed = match contents.services.get_mut(&self.service) {
            Some(entries) => entries.remove(key).is_some(),
            None => false,
        };
        if !removed {
            debug!(key = %key, "store entry already absent");
            return Ok(());
        }
        if contents
            .services
            .get(&self.service)
            .is_some_and(|entries| entries.is_empty())
        {
            contents.services.remove(&self.service);
        }
        self.write(&contents)
    }
}

/// Check that a file has the expected permissions mode.
#[cfg(unix)]
fn validate_file_permissions(path: &Path, expected_mode: u32) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let actual_mode = fs::metadata(path)?.permissions().mode() & 0o777;
    if actual_mode != expected_mode {
        return Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            format!("expected {:o}, found {:o}", expected_mode, actual_mode),
        ));
    }
    Ok(())
}
