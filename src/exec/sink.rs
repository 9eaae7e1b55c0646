// src/exec/sink.rs

//! Output sink collaborator.
//!
//! A running child process streams its stdout/stderr lines to an
//! [`OutputSink`] for display. No further contract is assumed; rendering
//! belongs to the host surface.

/// Which stream a line arrived on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStream {
    Stdout,
    Stderr,
}

/// Receives streamed text lines from a running process.
pub trait OutputSink: Send + Sync {
    fn line(&self, task_name: &str, stream: OutputStream, line: &str);
}

/// Sink that forwards child output to the terminal, prefixed with the
/// task name. Stdout lines go to stdout, stderr lines to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl OutputSink for ConsoleSink {
    fn line(&self, task_name: &str, stream: OutputStream, line: &str) {
        match stream {
            OutputStream::Stdout => println!("[{task_name}] {line}"),
            OutputStream::Stderr => eprintln!("[{task_name}] {line}"),
        }
    }
}
