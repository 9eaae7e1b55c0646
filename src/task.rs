// src/task.rs

//! The task data model.
//!
//! A [`Task`] is a named, persisted configuration describing a launchable
//! unit. Two kinds exist:
//!
//! - [`TaskSpec::Launcher`]: a full launcher invocation (executable path,
//!   optional directory overrides, font size, locale, free-form argument
//!   and environment blocks).
//! - [`TaskSpec::Source`]: a plain reference to a source directory.
//!
//! The serde field names mirror the persisted JSON shape that grew over
//! the history of the system (`uuid`, `last_run`, `arg`, `env`, camelCase
//! for the launcher fields), so existing storage files written in the
//! current schema stay readable. The variant is discriminated by an
//! explicit `"kind"` tag; there is no best-effort shape probing.

use std::path::PathBuf;

use chrono::Local;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named, persisted launch configuration.
///
/// The `id` is generated once at creation time and never changes; edits
/// replace the record under the same id. `last_run` is epoch milliseconds,
/// with `0` meaning the task has never been run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "uuid")]
    pub id: String,

    pub name: String,

    #[serde(rename = "last_run", default)]
    pub last_run: i64,

    #[serde(flatten)]
    pub spec: TaskSpec,
}

/// Variant payload of a [`Task`], tagged with `"kind"` in the stored JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TaskSpec {
    Launcher(LauncherSpec),
    Source(SourceSpec),
}

/// Fields of a launcher task.
///
/// The three directory overrides each carry an independent activation
/// flag; a deactivated directory is kept in the record (so re-activating
/// it restores the old value) but does not contribute to the compiled
/// command.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LauncherSpec {
    #[serde(rename = "execPath", default)]
    pub exec_path: PathBuf,

    #[serde(rename = "fontSize", default)]
    pub font_size: String,

    /// Language tag, e.g. `sv-SE`. Empty means "undefined".
    #[serde(default)]
    pub locale: String,

    #[serde(rename = "userDir", default)]
    pub user_dir: Option<PathBuf>,

    #[serde(rename = "userDirActivated", default)]
    pub user_dir_activated: bool,

    #[serde(rename = "cacheDir", default)]
    pub cache_dir: Option<PathBuf>,

    #[serde(rename = "cacheDirActivated", default)]
    pub cache_dir_activated: bool,

    #[serde(rename = "javaDir", default)]
    pub java_dir: Option<PathBuf>,

    #[serde(rename = "javaDirActivated", default)]
    pub java_dir_activated: bool,

    #[serde(rename = "consoleLogger", default)]
    pub console_logger: bool,

    /// Free-form multi-line argument block, parsed by the compiler.
    #[serde(rename = "arg", default)]
    pub arguments: String,

    /// Free-form multi-line `key=value` block, parsed by the compiler.
    #[serde(rename = "env", default)]
    pub environment: String,
}

/// Fields of a source task.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceSpec {
    #[serde(rename = "sourceDir", default)]
    pub source_dir: PathBuf,

    #[serde(default)]
    pub description: String,
}

impl Task {
    /// Create a new launcher task with a fresh id and `last_run = 0`.
    pub fn new_launcher(name: impl Into<String>, spec: LauncherSpec) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            last_run: 0,
            spec: TaskSpec::Launcher(spec),
        }
    }

    /// Create a new source task with a fresh id and `last_run = 0`.
    pub fn new_source(name: impl Into<String>, spec: SourceSpec) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            last_run: 0,
            spec: TaskSpec::Source(spec),
        }
    }

    /// Deep copy with a fresh id, `last_run` reset to 0 and the current
    /// ISO date appended to the name.
    pub fn cloned_with_new_id(&self) -> Self {
        let mut clone = self.clone();
        clone.id = Uuid::new_v4().to_string();
        clone.last_run = 0;
        clone.name = format!("{} {}", clone.name, Local::now().date_naive());
        clone
    }

    /// Human readable summary: the task name followed by its compiled
    /// command joined with single spaces.
    pub fn summary(&self) -> String {
        format!("[INFO] {}\n{}\n", self.name, crate::compiler::compile(self).join(" "))
    }
}
