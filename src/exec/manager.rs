// src/exec/manager.rs

//! Run-slot orchestration.
//!
//! [`ExecutorManager`] holds one slot per task id while a run of that
//! task is active, enforcing the at-most-one-concurrent-run-per-task
//! invariant. It is an explicitly constructed object owned by the
//! caller's context, not a process-wide singleton.
//!
//! Slot lifecycle: [`ExecutorManager::start`] reserves the slot and
//! dispatches the compiled run to the backend; only the run's terminal
//! event (completion or spawn failure), delivered to the control loop,
//! releases it via [`ExecutorManager::release`]. `request_start` never
//! touches an occupied slot. A long-running or hung process therefore
//! holds its slot until it exits; that is accepted behavior.

use std::collections::HashMap;

use tracing::{info, warn};

use crate::compiler;
use crate::exec::{CompiledRun, ProcessBackend};
use crate::task::Task;

/// Outcome of a start request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    Started,
    /// The task already holds a run slot; the request was ignored.
    /// This is a user-visible warning, not an error.
    AlreadyRunning,
}

struct ActiveRun {
    task_name: String,
}

pub struct ExecutorManager<B: ProcessBackend> {
    backend: B,
    active: HashMap<String, ActiveRun>,
}

impl<B: ProcessBackend> ExecutorManager<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            active: HashMap::new(),
        }
    }

    /// Start the task unless it already holds a run slot.
    pub fn request_start(&mut self, task: &Task) -> StartOutcome {
        if let Some(run) = self.active.get(&task.id) {
            warn!(
                task = %run.task_name,
                "task is already running; start request ignored"
            );
            return StartOutcome::AlreadyRunning;
        }

        self.start(task);
        StartOutcome::Started
    }

    /// Reserve the slot, compile the command and dispatch the run.
    ///
    /// Returns without waiting for completion; output delivery and the
    /// terminal run event arrive asynchronously.
    pub fn start(&mut self, task: &Task) {
        let argv = compiler::compile(task);

        info!(task = %task.name, cmd = %argv.join(" "), "dispatching task run");

        self.active.insert(
            task.id.clone(),
            ActiveRun {
                task_name: task.name.clone(),
            },
        );

        self.backend.spawn_run(CompiledRun {
            task_id: task.id.clone(),
            task_name: task.name.clone(),
            argv,
        });
    }

    /// Release the slot for a finished run. Returns false if no slot was
    /// held for the id.
    pub fn release(&mut self, task_id: &str) -> bool {
        self.active.remove(task_id).is_some()
    }

    pub fn is_running(&self, task_id: &str) -> bool {
        self.active.contains_key(task_id)
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }
}
