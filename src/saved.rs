//! Saved-listings store
//!
//! A file-backed set of listing URLs the user has saved, kept in the
//! platform data directory. Writes go through a `.tmp` file plus rename
//! with an exclusive lock held for the duration, so concurrent CLI
//! invocations cannot tear the store file.

use fs2::FileExt;
use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

use crate::error::AppError;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Store file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("No usable data directory")]
    NoDataDir,
    #[error("Listing URL cannot be empty")]
    EmptyKey,
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::StoreError(err.to_string())
    }
}

/// File-backed saved-listings key set
pub struct SavedStore {
    path: PathBuf,
}

impl SavedStore {
    /// Open the store at its platform-default location, creating the parent
    /// directory on first use
    pub fn open_default() -> Result<Self, StoreError> {
        let path = default_store_path().ok_or(StoreError::NoDataDir)?;
        Ok(Self::at_path(path))
    }

    /// Open a store at an explicit path (tests, alternate profiles)
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// All saved listing URLs, sorted
    pub fn list(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.read_set()?.into_iter().collect())
    }

    /// Whether a listing URL is saved
    pub fn contains(&self, url: &str) -> Result<bool, StoreError> {
        Ok(self.read_set()?.contains(url))
    }

    /// Save a listing URL. Returns false when it was already present.
    pub fn add(&self, url: &str) -> Result<bool, StoreError> {
        if url.trim().is_empty() {
            return Err(StoreError::EmptyKey);
        }

        let mut set = self.read_set()?;
        let added = set.insert(url.to_string());
        if added {
            self.write_set(&set)?;
        }

        Ok(added)
    }

    /// Remove a listing URL. Returns false when it was not present.
    pub fn remove(&self, url: &str) -> Result<bool, StoreError> {
        let mut set = self.read_set()?;
        let removed = set.remove(url);
        if removed {
            self.write_set(&set)?;
        }

        Ok(removed)
    }

    fn read_set(&self) -> Result<BTreeSet<String>, StoreError> {
        if !self.path.exists() {
            return Ok(BTreeSet::new());
        }

        let data = fs::read_to_string(&self.path)?;
        let set = serde_json::from_str(&data)?;
        Ok(set)
    }

    fn write_set(&self, set: &BTreeSet<String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Lock, write to .tmp, rename atomically
        let lock_path = self.path.with_extension("lock");
        let lock_file = fs::File::create(&lock_path)?;
        lock_file.lock_exclusive()?;

        let tmp_path = self.path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(set)?;
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.path)?;

        FileExt::unlock(&lock_file)?;
        let _ = fs::remove_file(lock_path); // Best effort cleanup

        debug!("Wrote {} saved listings to {}", set.len(), self.path.display());
        Ok(())
    }
}

/// Platform data directory for the store file, honoring `XDG_DATA_HOME`
fn default_store_path() -> Option<PathBuf> {
    if let Some(xdg_data) = std::env::var_os("XDG_DATA_HOME") {
        return Some(PathBuf::from(xdg_data).join("jobsift").join("saved.json"));
    }

    dirs::data_dir().map(|dir| dir.join("jobsift").join("saved.json"))
}
