// src/runtime.rs

//! Control loop tying the registry, the store and the executor together.
//!
//! One control task owns all shared state (the task registry and the run
//! slots); child processes only communicate back over the run-event
//! channel. Because nothing else mutates the maps, no locking is needed
//! and the at-most-one-run-per-id invariant holds.

use chrono::Utc;

use tracing::{debug, error, info, warn};

use crate::errors::{LauncherError, Result};
use crate::exec::{ExecutorManager, ProcessBackend, RunEvent, RunEventReceiver, StartOutcome};
use crate::manager::TaskManager;
use crate::store::TaskStore;

pub struct Runtime<B: ProcessBackend> {
    tasks: TaskManager,
    store: TaskStore,
    executors: ExecutorManager<B>,
    event_rx: RunEventReceiver,
}

impl<B: ProcessBackend> Runtime<B> {
    pub fn new(
        tasks: TaskManager,
        store: TaskStore,
        executors: ExecutorManager<B>,
        event_rx: RunEventReceiver,
    ) -> Self {
        Self {
            tasks,
            store,
            executors,
            event_rx,
        }
    }

    pub fn tasks(&self) -> &TaskManager {
        &self.tasks
    }

    pub fn tasks_mut(&mut self) -> &mut TaskManager {
        &mut self.tasks
    }

    pub fn is_running(&self, task_id: &str) -> bool {
        self.executors.is_running(task_id)
    }

    pub fn active_runs(&self) -> usize {
        self.executors.active_count()
    }

    /// Start the named task, unless it is already running.
    pub fn request_start(&mut self, name: &str) -> Result<StartOutcome> {
        let task = self
            .tasks
            .get_by_name(name)
            .cloned()
            .ok_or_else(|| LauncherError::TaskNotFound(name.to_string()))?;

        Ok(self.executors.request_start(&task))
    }

    /// Start a batch of tasks by name and drain events until idle.
    ///
    /// Every name is resolved before anything is dispatched, so an
    /// unknown name fails the whole batch with no runs started and no
    /// completions left unconsumed.
    pub async fn run_all(&mut self, names: &[String]) -> Result<()> {
        let mut to_start = Vec::with_capacity(names.len());
        for name in names {
            let task = self
                .tasks
                .get_by_name(name)
                .cloned()
                .ok_or_else(|| LauncherError::TaskNotFound(name.to_string()))?;
            to_start.push(task);
        }

        for task in &to_start {
            self.executors.request_start(task);
        }

        self.run_until_idle().await;
        Ok(())
    }

    /// React to one terminal run event.
    ///
    /// A completion frees the slot, stamps the task's `last_run` and
    /// persists the registry. A spawn failure only frees the slot; the
    /// task record stays untouched.
    pub fn handle_event(&mut self, event: RunEvent) {
        match event {
            RunEvent::Completed {
                task_id,
                exit_code,
                success,
            } => {
                self.executors.release(&task_id);

                info!(exit_code, success, "task run finished");

                if self.tasks.set_last_run(&task_id, Utc::now().timestamp_millis()) {
                    if let Err(err) = self.store.save(&self.tasks) {
                        warn!(error = %err, "could not persist registry after run");
                    }
                } else {
                    debug!(task_id, "finished run for a task no longer in the registry");
                }
            }

            RunEvent::SpawnFailed { task_id, error } => {
                self.executors.release(&task_id);
                error!(task_id, error, "task could not be started");
            }
        }
    }

    /// Consume run events until no run slot is held anymore.
    pub async fn run_until_idle(&mut self) {
        while self.executors.active_count() > 0 {
            match self.event_rx.recv().await {
                Some(event) => self.handle_event(event),
                None => {
                    debug!("run event channel closed; stopping");
                    break;
                }
            }
        }
    }
}
