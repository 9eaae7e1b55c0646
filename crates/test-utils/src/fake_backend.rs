use std::sync::{Arc, Mutex};

use nblauncher::exec::{CompiledRun, ProcessBackend, RunEvent, RunEventSender};

/// A fake process backend that:
/// - records which runs were dispatched (nothing is actually spawned)
/// - optionally reports an immediate successful completion for each run.
///
/// With no event sender attached, dispatched runs stay "active" until the
/// test releases them itself, which is useful for exercising the
/// one-run-per-task invariant.
pub struct FakeBackend {
    spawned: Arc<Mutex<Vec<CompiledRun>>>,
    events: Option<RunEventSender>,
}

impl FakeBackend {
    /// Record dispatched runs; never complete them.
    pub fn recording(spawned: Arc<Mutex<Vec<CompiledRun>>>) -> Self {
        Self {
            spawned,
            events: None,
        }
    }

    /// Record dispatched runs and immediately queue a successful
    /// completion event for each.
    pub fn completing(spawned: Arc<Mutex<Vec<CompiledRun>>>, events: RunEventSender) -> Self {
        Self {
            spawned,
            events: Some(events),
        }
    }
}

impl ProcessBackend for FakeBackend {
    fn spawn_run(&mut self, run: CompiledRun) {
        {
            let mut guard = self.spawned.lock().unwrap();
            guard.push(run.clone());
        }

        if let Some(tx) = &self.events {
            tx.try_send(RunEvent::Completed {
                task_id: run.task_id,
                exit_code: 0,
                success: true,
            })
            .expect("run event channel full in FakeBackend");
        }
    }
}
