//! Disk-backed credential scope.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use tracing::warn;

use super::CredentialScope;
use crate::error::CoreResult;

/// Scope backed by a single JSON object file. Survives process restarts
/// and is shared by every process of the same OS user, so it plays the
/// role of origin-scoped storage.
///
/// IO and parse failures are swallowed: an unreadable file reads as empty
/// and is overwritten by the next write. Nothing locks the file across
/// processes.
#[derive(Debug)]
pub struct FileScope {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process.
    guard: Mutex<()>,
}

impl FileScope {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            guard: Mutex::new(()),
        }
    }

    /// Default credential file under the platform data directory.
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("labsched")
            .join("credentials.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> CoreResult<HashMap<String, String>> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let contents = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    fn load_or_empty(&self) -> HashMap<String, String> {
        match self.load() {
            Ok(entries) => entries,
            Err(err) => {
                warn!(
                    "credential file {} unreadable, treating as empty: {err}",
                    self.path.display()
                );
                HashMap::new()
            }
        }
    }

    fn persist(&self, entries: &HashMap<String, String>) -> CoreResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string(entries)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

impl CredentialScope for FileScope {
    fn get(&self, key: &str) -> Option<String> {
        let _guard = self.guard.lock().unwrap_or_else(PoisonError::into_inner);
        match self.load() {
            Ok(entries) => entries.get(key).cloned(),
            Err(err) => {
                warn!("failed to read credential file {}: {err}", self.path.display());
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) {
        let _guard = self.guard.lock().unwrap_or_else(PoisonError::into_inner);
        let mut entries = self.load_or_empty();
        entries.insert(key.to_string(), value.to_string());
        if let Err(err) = self.persist(&entries) {
            warn!("failed to write credential file {}: {err}", self.path.display());
        }
    }

    fn remove(&self, key: &str) {
        let _guard = self.guard.lock().unwrap_or_else(PoisonError::into_inner);
        let mut entries = self.load_or_empty();
        entries.remove(key);
        if let Err(err) = self.persist(&entries) {
            warn!("failed to write credential file {}: {err}", self.path.display());
        }
    }
}
