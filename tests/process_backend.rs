// tests/process_backend.rs

//! The real tokio process backend: output streaming and terminal events
//! for actual child processes.

use std::sync::{Arc, Mutex};

use nblauncher::exec::{
    CompiledRun, OutputSink, OutputStream, ProcessBackend, RunEvent, TokioProcessBackend,
};
use nblauncher_test_utils::{init_tracing, with_timeout};
use tokio::sync::mpsc;

/// Sink that collects streamed lines for assertions.
#[derive(Debug, Default)]
struct CollectingSink {
    lines: Mutex<Vec<(OutputStream, String)>>,
}

impl OutputSink for CollectingSink {
    fn line(&self, _task_name: &str, stream: OutputStream, line: &str) {
        self.lines.lock().unwrap().push((stream, line.to_string()));
    }
}

fn compiled(argv: &[&str]) -> CompiledRun {
    CompiledRun {
        task_id: "test-id".to_string(),
        task_name: "test-task".to_string(),
        argv: argv.iter().map(|s| s.to_string()).collect(),
    }
}

#[tokio::test]
async fn stdout_is_streamed_and_completion_is_reported() {
    init_tracing();

    let sink = Arc::new(CollectingSink::default());
    let (tx, mut rx) = mpsc::channel::<RunEvent>(8);
    let mut backend = TokioProcessBackend::new(tx, Arc::clone(&sink) as Arc<dyn OutputSink>);

    backend.spawn_run(compiled(&["echo", "hello world"]));

    let event = with_timeout(rx.recv()).await.unwrap();
    assert_eq!(
        event,
        RunEvent::Completed {
            task_id: "test-id".to_string(),
            exit_code: 0,
            success: true,
        }
    );

    let lines = sink.lines.lock().unwrap();
    assert!(lines
        .iter()
        .any(|(stream, line)| *stream == OutputStream::Stdout && line == "hello world"));
}

#[tokio::test]
async fn nonzero_exit_is_reported_as_completion_not_error() {
    init_tracing();

    let sink = Arc::new(CollectingSink::default());
    let (tx, mut rx) = mpsc::channel::<RunEvent>(8);
    let mut backend = TokioProcessBackend::new(tx, sink as Arc<dyn OutputSink>);

    backend.spawn_run(compiled(&["sh", "-c", "exit 3"]));

    let event = with_timeout(rx.recv()).await.unwrap();
    assert_eq!(
        event,
        RunEvent::Completed {
            task_id: "test-id".to_string(),
            exit_code: 3,
            success: false,
        }
    );
}

#[tokio::test]
async fn missing_executable_reports_spawn_failure() {
    init_tracing();

    let sink = Arc::new(CollectingSink::default());
    let (tx, mut rx) = mpsc::channel::<RunEvent>(8);
    let mut backend = TokioProcessBackend::new(tx, sink as Arc<dyn OutputSink>);

    backend.spawn_run(compiled(&["/definitely/not/a/real/binary"]));

    match with_timeout(rx.recv()).await.unwrap() {
        RunEvent::SpawnFailed { task_id, error } => {
            assert_eq!(task_id, "test-id");
            assert!(!error.is_empty());
        }
        other => panic!("expected SpawnFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn stderr_is_streamed_separately() {
    init_tracing();

    let sink = Arc::new(CollectingSink::default());
    let (tx, mut rx) = mpsc::channel::<RunEvent>(8);
    let mut backend = TokioProcessBackend::new(tx, Arc::clone(&sink) as Arc<dyn OutputSink>);

    backend.spawn_run(compiled(&["sh", "-c", "echo oops >&2"]));

    let _ = with_timeout(rx.recv()).await.unwrap();

    let lines = sink.lines.lock().unwrap();
    assert!(lines
        .iter()
        .any(|(stream, line)| *stream == OutputStream::Stderr && line == "oops"));
}
