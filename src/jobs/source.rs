//! Job collection data sources
//!
//! The engine stays a pure function of the collection it is handed; where
//! that collection comes from, and how reloading is avoided while the
//! snapshot file is unchanged, lives entirely behind the [`JobSource`]
//! boundary.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::SystemTime;
use tracing::{debug, info};

use crate::error::AppError;

use super::enrich::{apply_enrichment, JobPatch};
use super::records::JobRecord;

/// Anything that can produce the current job collection
pub trait JobSource {
    fn load(&self) -> Result<Vec<JobRecord>, AppError>;
}

struct CachedSnapshot {
    modified: SystemTime,
    jobs: Vec<JobRecord>,
}

/// JSON snapshot file source with an mtime-keyed in-process cache.
///
/// The parsed collection is reused as long as the file's modification time
/// is unchanged; a touched file is re-read on the next load.
pub struct SnapshotSource {
    path: PathBuf,
    enrichment_path: Option<PathBuf>,
    cached: Mutex<Option<CachedSnapshot>>,
}

impl SnapshotSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            enrichment_path: None,
            cached: Mutex::new(None),
        }
    }

    /// Overlay field patches from a URL-keyed JSON map after each load
    pub fn with_enrichment(mut self, path: impl Into<PathBuf>) -> Self {
        self.enrichment_path = Some(path.into());
        self
    }

    fn read_snapshot(&self) -> Result<Vec<JobRecord>, AppError> {
        if !self.path.exists() {
            return Err(AppError::NotFound(format!(
                "Snapshot file not found: {}",
                self.path.display()
            )));
        }

        let data = fs::read_to_string(&self.path)?;
        let mut jobs: Vec<JobRecord> = serde_json::from_str(&data)?;

        if let Some(enrichment_path) = &self.enrichment_path {
            let patches = load_enrichment(enrichment_path)?;
            apply_enrichment(&mut jobs, &patches);
        }

        info!(
            "Loaded {} listings from {}",
            jobs.len(),
            self.path.display()
        );
        Ok(jobs)
    }
}

impl JobSource for SnapshotSource {
    fn load(&self) -> Result<Vec<JobRecord>, AppError> {
        let modified = fs::metadata(&self.path).and_then(|m| m.modified()).ok();

        let mut cached = self
            .cached
            .lock()
            .map_err(|_| AppError::Internal("snapshot cache lock poisoned".to_string()))?;

        if let (Some(modified), Some(snapshot)) = (modified, cached.as_ref()) {
            if snapshot.modified == modified {
                debug!("Snapshot unchanged, reusing cached collection");
                return Ok(snapshot.jobs.clone());
            }
        }

        let jobs = self.read_snapshot()?;
        if let Some(modified) = modified {
            *cached = Some(CachedSnapshot {
                modified,
                jobs: jobs.clone(),
            });
        }

        Ok(jobs)
    }
}

/// Read a URL-keyed patch map from a JSON file
pub fn load_enrichment(path: &Path) -> Result<HashMap<String, JobPatch>, AppError> {
    if !path.exists() {
        return Err(AppError::NotFound(format!(
            "Enrichment file not found: {}",
            path.display()
        )));
    }

    let data = fs::read_to_string(path)?;
    let patches = serde_json::from_str(&data)?;
    Ok(patches)
}
