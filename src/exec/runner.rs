// src/exec/runner.rs

//! Individual task process runner.

use std::process::Stdio;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;
use tracing::{error, info};

use crate::exec::{CompiledRun, OutputSink, OutputStream, RunEvent, RunEventSender};

/// Run one compiled command as a child process.
///
/// Stdout and stderr are streamed line by line to the sink while the
/// process runs. On termination (any exit code) a
/// [`RunEvent::Completed`] is sent; if the process cannot be spawned at
/// all, a [`RunEvent::SpawnFailed`] is sent instead. There is no
/// cancellation or timeout: a started process runs until it exits on its
/// own.
pub async fn run_process(run: CompiledRun, events: RunEventSender, sink: Arc<dyn OutputSink>) {
    let task_id = run.task_id.clone();
    let task_name = run.task_name.clone();

    if let Err(err) = run_process_inner(run, &events, sink).await {
        error!(task = %task_name, error = %err, "failed to start task process");
        let _ = events
            .send(RunEvent::SpawnFailed {
                task_id,
                error: format!("{err:#}"),
            })
            .await;
    }
}

async fn run_process_inner(
    run: CompiledRun,
    events: &RunEventSender,
    sink: Arc<dyn OutputSink>,
) -> Result<()> {
    let Some((program, args)) = run.argv.split_first() else {
        bail!("task '{}' compiled to an empty command", run.task_name);
    };

    info!(
        task = %run.task_name,
        cmd = %run.argv.join(" "),
        "starting task process"
    );

    let mut child = Command::new(program)
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .with_context(|| format!("spawning process for task '{}'", run.task_name))?;

    let stdout = child
        .stdout
        .take()
        .map(|out| stream_lines(out, run.task_name.clone(), OutputStream::Stdout, Arc::clone(&sink)));
    let stderr = child
        .stderr
        .take()
        .map(|err| stream_lines(err, run.task_name.clone(), OutputStream::Stderr, Arc::clone(&sink)));

    let status = child
        .wait()
        .await
        .with_context(|| format!("waiting for process of task '{}'", run.task_name))?;

    // Drain remaining output before reporting completion.
    if let Some(handle) = stdout {
        let _ = handle.await;
    }
    if let Some(handle) = stderr {
        let _ = handle.await;
    }

    let code = status.code().unwrap_or(-1);
    info!(
        task = %run.task_name,
        exit_code = code,
        success = status.success(),
        "task process exited"
    );

    events
        .send(RunEvent::Completed {
            task_id: run.task_id.clone(),
            exit_code: code,
            success: status.success(),
        })
        .await
        .with_context(|| format!("reporting completion of task '{}'", run.task_name))?;

    Ok(())
}

/// Forward lines from one child stream to the sink in a background task.
fn stream_lines(
    reader: impl AsyncRead + Unpin + Send + 'static,
    task_name: String,
    stream: OutputStream,
    sink: Arc<dyn OutputSink>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut lines = BufReader::new(reader).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            sink.line(&task_name, stream, &line);
        }
    })
}
