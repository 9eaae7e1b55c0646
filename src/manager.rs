// src/manager.rs

//! In-memory task registry.
//!
//! [`TaskManager`] is the single source of truth for the session. It keeps
//! tasks in insertion order (the store sorts by name at load time, so a
//! session starts with a display-stable ordering) and offers the
//! case-insensitive name queries an editor surface needs to validate
//! uniqueness before committing a save.
//!
//! Mutations touch only the in-memory state; persistence is an explicit,
//! separate call on the store. This lets callers batch several edits into
//! one write.

use crate::task::Task;

#[derive(Debug, Default)]
pub struct TaskManager {
    tasks: Vec<Task>,
}

impl TaskManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ordered read-only view of the registry.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get_by_id(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Case-insensitive lookup by name.
    pub fn get_by_name(&self, name: &str) -> Option<&Task> {
        let wanted = name.to_lowercase();
        self.tasks.iter().find(|t| t.name.to_lowercase() == wanted)
    }

    /// Case-insensitive membership test over current names.
    pub fn exists(&self, name: &str) -> bool {
        self.get_by_name(name).is_some()
    }

    /// Validate a candidate name during an edit.
    ///
    /// True if the candidate equals the task's current name (editing
    /// without renaming) or is not already taken by a different task.
    /// Comparison is case-insensitive.
    pub fn is_valid(&self, current_name: &str, candidate_name: &str) -> bool {
        current_name.to_lowercase() == candidate_name.to_lowercase()
            || !self.exists(candidate_name)
    }

    /// Insert a task, replacing an existing record with the same id in
    /// place, or appending a new one.
    pub fn insert(&mut self, task: Task) {
        match self.tasks.iter_mut().find(|t| t.id == task.id) {
            Some(existing) => *existing = task,
            None => self.tasks.push(task),
        }
    }

    pub fn remove(&mut self, id: &str) -> Option<Task> {
        let index = self.tasks.iter().position(|t| t.id == id)?;
        Some(self.tasks.remove(index))
    }

    /// Clone the task with the given id: deep copy, fresh id, `last_run`
    /// reset to 0, current date appended to the name. The clone is
    /// appended to the registry and returned.
    pub fn clone_task(&mut self, id: &str) -> Option<&Task> {
        let clone = self.get_by_id(id)?.cloned_with_new_id();
        self.tasks.push(clone);
        self.tasks.last()
    }

    /// Record a completed run.
    pub fn set_last_run(&mut self, id: &str, millis: i64) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.last_run = millis;
                true
            }
            None => false,
        }
    }

    /// Sort case-insensitively by name; used by the store after load so
    /// every session starts with the same ordering.
    pub fn sort_by_name(&mut self) {
        self.tasks.sort_by_key(|t| t.name.to_lowercase());
    }
}
