// src/exec/backend.rs

//! Pluggable process backend abstraction.
//!
//! [`ExecutorManager`](super::ExecutorManager) talks to a
//! [`ProcessBackend`] instead of spawning processes directly. This keeps
//! the slot bookkeeping synchronous and testable: production uses
//! [`TokioProcessBackend`], while tests substitute a fake backend that
//! records which runs were dispatched and synthesizes completion events.

use std::sync::Arc;

use crate::exec::runner::run_process;
use crate::exec::{CompiledRun, OutputSink, RunEventSender};

/// Trait abstracting how a compiled run is executed.
///
/// Dispatch is fire-and-forget: the call returns immediately while the
/// run proceeds asynchronously and reports back through the run-event
/// channel.
pub trait ProcessBackend: Send {
    fn spawn_run(&mut self, run: CompiledRun);
}

/// Real process backend used in production.
///
/// Each dispatched run gets its own Tokio task that spawns the child
/// process, streams output to the sink and emits the terminal
/// [`RunEvent`](super::RunEvent).
pub struct TokioProcessBackend {
    events: RunEventSender,
    sink: Arc<dyn OutputSink>,
}

impl TokioProcessBackend {
    pub fn new(events: RunEventSender, sink: Arc<dyn OutputSink>) -> Self {
        Self { events, sink }
    }
}

impl ProcessBackend for TokioProcessBackend {
    fn spawn_run(&mut self, run: CompiledRun) {
        let events = self.events.clone();
        let sink = Arc::clone(&self.sink);

        tokio::spawn(async move {
            run_process(run, events, sink).await;
        });
    }
}
