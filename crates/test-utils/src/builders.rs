#![allow(dead_code)]

use std::path::PathBuf;

use nblauncher::task::{LauncherSpec, SourceSpec, Task, TaskSpec};
use uuid::Uuid;

/// Builder for launcher [`Task`]s to simplify test setup.
pub struct LauncherTaskBuilder {
    name: String,
    last_run: i64,
    spec: LauncherSpec,
}

impl LauncherTaskBuilder {
    pub fn new(name: &str, exec_path: &str) -> Self {
        Self {
            name: name.to_string(),
            last_run: 0,
            spec: LauncherSpec {
                exec_path: PathBuf::from(exec_path),
                ..LauncherSpec::default()
            },
        }
    }

    pub fn font_size(mut self, size: &str) -> Self {
        self.spec.font_size = size.to_string();
        self
    }

    pub fn locale(mut self, locale: &str) -> Self {
        self.spec.locale = locale.to_string();
        self
    }

    pub fn user_dir(mut self, path: &str, activated: bool) -> Self {
        self.spec.user_dir = Some(PathBuf::from(path));
        self.spec.user_dir_activated = activated;
        self
    }

    pub fn cache_dir(mut self, path: &str, activated: bool) -> Self {
        self.spec.cache_dir = Some(PathBuf::from(path));
        self.spec.cache_dir_activated = activated;
        self
    }

    pub fn java_dir(mut self, path: &str, activated: bool) -> Self {
        self.spec.java_dir = Some(PathBuf::from(path));
        self.spec.java_dir_activated = activated;
        self
    }

    pub fn console_logger(mut self, enabled: bool) -> Self {
        self.spec.console_logger = enabled;
        self
    }

    pub fn arguments(mut self, text: &str) -> Self {
        self.spec.arguments = text.to_string();
        self
    }

    pub fn environment(mut self, text: &str) -> Self {
        self.spec.environment = text.to_string();
        self
    }

    pub fn last_run(mut self, millis: i64) -> Self {
        self.last_run = millis;
        self
    }

    pub fn build(self) -> Task {
        Task {
            id: Uuid::new_v4().to_string(),
            name: self.name,
            last_run: self.last_run,
            spec: TaskSpec::Launcher(self.spec),
        }
    }
}

/// Build a source task in one call.
pub fn source_task(name: &str, source_dir: &str, description: &str) -> Task {
    Task {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        last_run: 0,
        spec: TaskSpec::Source(SourceSpec {
            source_dir: PathBuf::from(source_dir),
            description: description.to_string(),
        }),
    }
}
