// src/exec/mod.rs

//! Process execution layer.
//!
//! This module owns everything between a compiled command and a finished
//! child process:
//!
//! - [`manager`] holds the per-task run slots and enforces that at most
//!   one run per task id is active at a time.
//! - [`runner`] spawns one child process with `tokio::process::Command`
//!   and streams its output.
//! - [`backend`] provides the [`ProcessBackend`] trait and the concrete
//!   [`TokioProcessBackend`] used in production; tests replace it with a
//!   fake implementation that doesn't spawn real processes.
//! - [`sink`] defines the [`OutputSink`] collaborator that receives the
//!   streamed output lines.

pub mod backend;
pub mod manager;
pub mod runner;
pub mod sink;

pub use backend::{ProcessBackend, TokioProcessBackend};
pub use manager::{ExecutorManager, StartOutcome};
pub use sink::{ConsoleSink, OutputSink, OutputStream};

use tokio::sync::mpsc;

/// A compiled, ready-to-spawn run of one task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledRun {
    pub task_id: String,
    pub task_name: String,
    pub argv: Vec<String>,
}

/// Events emitted by running (or failing-to-start) child processes.
///
/// The control loop reacts to these by releasing the run slot and, for
/// completions, updating the task's `last_run` and persisting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunEvent {
    /// The child process terminated, with any exit code. A non-zero exit
    /// is an informational outcome, not an error.
    Completed {
        task_id: String,
        exit_code: i32,
        success: bool,
    },

    /// The child process could not be started at all.
    SpawnFailed { task_id: String, error: String },
}

pub type RunEventSender = mpsc::Sender<RunEvent>;
pub type RunEventReceiver = mpsc::Receiver<RunEvent>;
