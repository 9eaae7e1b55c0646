// src/store.rs

//! Persistence of the task registry to a JSON file.
//!
//! The on-disk document is a single object holding a format version and
//! the task records keyed by their id strings:
//!
//! ```json
//! {
//!   "format_version": 1,
//!   "tasks": { "<uuid>": { "uuid": "...", "name": "...", ... } }
//! }
//! ```
//!
//! Only the current schema is accepted. Files with a different
//! `format_version`, or files that fail to deserialize, are reported and
//! treated as unreadable; loading then falls back to an empty registry
//! instead of aborting startup. A failed save leaves the on-disk state
//! stale while the in-memory registry stays authoritative for the
//! session.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::errors::Result;
use crate::manager::TaskManager;
use crate::task::Task;

pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct StorageFile {
    format_version: u32,
    tasks: BTreeMap<String, Task>,
}

/// Load/save boundary for the task registry.
#[derive(Debug, Clone)]
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Default storage location: `<config dir>/nblauncher/tasks.json`,
    /// falling back to the current directory when no config dir exists.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("nblauncher")
            .join("tasks.json")
    }

    /// Read the registry from disk, failing soft.
    ///
    /// A missing file yields an empty registry silently; an unreadable or
    /// incompatible file yields an empty registry with a warning. Loading
    /// never aborts startup.
    pub fn load(&self) -> TaskManager {
        let mut manager = TaskManager::new();

        if !self.path.exists() {
            debug!(path = %self.path.display(), "no task storage file; starting empty");
            return manager;
        }

        let storage = match self.read_storage() {
            Ok(storage) => storage,
            Err(err) => {
                warn!(
                    path = %self.path.display(),
                    error = %err,
                    "could not read task storage; starting with an empty registry"
                );
                return manager;
            }
        };

        for task in storage.tasks.into_values() {
            manager.insert(task);
        }
        manager.sort_by_name();

        info!(path = %self.path.display(), tasks = manager.len(), "task storage loaded");
        manager
    }

    /// Serialize the full registry, overwriting the previous contents.
    pub fn save(&self, manager: &TaskManager) -> Result<()> {
        let tasks: BTreeMap<String, Task> = manager
            .tasks()
            .iter()
            .map(|t| (t.id.clone(), t.clone()))
            .collect();

        let storage = StorageFile {
            format_version: FORMAT_VERSION,
            tasks,
        };

        let json = serde_json::to_string_pretty(&storage)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating storage dir {:?}", parent))?;
            }
        }
        fs::write(&self.path, json)
            .with_context(|| format!("writing task storage {:?}", self.path))?;

        debug!(path = %self.path.display(), tasks = manager.len(), "task storage saved");
        Ok(())
    }

    fn read_storage(&self) -> Result<StorageFile> {
        let contents = fs::read_to_string(&self.path)?;
        let storage: StorageFile = serde_json::from_str(&contents)?;

        if storage.format_version != FORMAT_VERSION {
            return Err(crate::errors::LauncherError::StorageError(format!(
                "unsupported format_version {} (expected {})",
                storage.format_version, FORMAT_VERSION
            )));
        }

        Ok(storage)
    }
}
