// src/lib.rs

pub mod cli;
pub mod compiler;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod manager;
pub mod runtime;
pub mod store;
pub mod task;

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Local};
use tokio::sync::mpsc;
use tracing::info;

use crate::cli::{CliArgs, Command};
use crate::errors::{LauncherError, Result};
use crate::exec::{ConsoleSink, ExecutorManager, RunEvent, TokioProcessBackend};
use crate::manager::TaskManager;
use crate::runtime::Runtime;
use crate::store::TaskStore;
use crate::task::Task;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - storage loading
/// - registry / executor manager / runtime
/// - the process backend and console sink
pub async fn run(args: CliArgs) -> Result<()> {
    let store = TaskStore::new(storage_path(&args));
    let mut tasks = store.load();

    match args.command {
        Command::List => {
            print_task_list(&tasks);
        }

        Command::Show { name } => {
            let task = find_task(&tasks, &name)?;
            print!("{}", task.summary());
        }

        Command::Run { names } => {
            run_tasks(tasks, store, &names).await?;
        }

        Command::Clone { name } => {
            let id = find_task(&tasks, &name)?.id.clone();
            if let Some(clone) = tasks.clone_task(&id) {
                println!("{}", clone.name);
            }
            store.save(&tasks)?;
        }

        Command::Remove { name } => {
            let id = find_task(&tasks, &name)?.id.clone();
            tasks.remove(&id);
            store.save(&tasks)?;
            info!(task = %name, "task removed");
        }
    }

    Ok(())
}

/// Start the named tasks and drive the run loop until every slot is free.
async fn run_tasks(tasks: TaskManager, store: TaskStore, names: &[String]) -> Result<()> {
    let (event_tx, event_rx) = mpsc::channel::<RunEvent>(64);

    let backend = TokioProcessBackend::new(event_tx, Arc::new(ConsoleSink));
    let executors = ExecutorManager::new(backend);
    let mut runtime = Runtime::new(tasks, store, executors, event_rx);

    runtime.run_all(names).await
}

fn storage_path(args: &CliArgs) -> PathBuf {
    args.storage
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(TaskStore::default_path)
}

fn find_task<'a>(tasks: &'a TaskManager, name: &str) -> Result<&'a Task> {
    tasks
        .get_by_name(name)
        .ok_or_else(|| LauncherError::TaskNotFound(name.to_string()))
}

fn print_task_list(tasks: &TaskManager) {
    if tasks.is_empty() {
        println!("no tasks defined");
        return;
    }

    for task in tasks.tasks() {
        println!("{}  (last run: {})", task.name, format_last_run(task.last_run));
    }
}

fn format_last_run(millis: i64) -> String {
    if millis == 0 {
        return "never".to_string();
    }

    DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "never".to_string())
}
