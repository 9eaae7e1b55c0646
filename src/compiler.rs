// src/compiler.rs

//! The command compiler: task configuration in, argv token sequence out.
//!
//! [`compile`] is a pure function with no side effects; the same task
//! always compiles to the same token sequence. The order of the sections
//! (exec path, font size, locale, directory overrides, logger switch,
//! argument block, environment block) is part of the contract: saved
//! configurations and downstream consumers depend on it.
//!
//! Environment overrides are not passed as a native environment map; they
//! are encoded as `-J-Dkey=value` argv tokens, the textual convention the
//! launched platform expects.

use std::path::Path;

use crate::task::{LauncherSpec, Task, TaskSpec};

/// Compile a task into its argv token sequence.
///
/// For a launcher task the first token is the executable path; the caller
/// is responsible for only compiling tasks with a non-empty `exec_path`.
/// A source task compiles to the single-token sequence `[source_dir]`.
pub fn compile(task: &Task) -> Vec<String> {
    match &task.spec {
        TaskSpec::Launcher(spec) => compile_launcher(spec),
        TaskSpec::Source(spec) => vec![spec.source_dir.to_string_lossy().into_owned()],
    }
}

fn compile_launcher(spec: &LauncherSpec) -> Vec<String> {
    let mut cmd = vec![spec.exec_path.to_string_lossy().into_owned()];

    push_value(&mut cmd, true, "--fontsize", &spec.font_size);
    push_value(&mut cmd, true, "--locale", &canonical_locale(&spec.locale));
    push_path(&mut cmd, spec.user_dir_activated, "--userdir", spec.user_dir.as_deref());
    push_path(&mut cmd, spec.cache_dir_activated, "--cachedir", spec.cache_dir.as_deref());
    push_path(&mut cmd, spec.java_dir_activated, "--jdkhome", spec.java_dir.as_deref());

    cmd.push(format!(
        "-J-Dnetbeans.logger.console={}",
        if spec.console_logger { "true" } else { "false" }
    ));

    cmd.extend(argument_tokens(&spec.arguments));
    cmd.extend(environment_tokens(&spec.environment));

    cmd
}

/// Canonical locale separator: language tags are stored with `-` but
/// passed to the launcher with `:`.
fn canonical_locale(locale: &str) -> String {
    locale.replace('-', ":")
}

fn push_value(cmd: &mut Vec<String>, condition: bool, key: &str, value: &str) {
    if condition && !value.trim().is_empty() {
        cmd.push(key.to_string());
        cmd.push(value.to_string());
    }
}

fn push_path(cmd: &mut Vec<String>, condition: bool, key: &str, path: Option<&Path>) {
    if let Some(path) = path {
        if condition && !path.as_os_str().is_empty() {
            cmd.push(key.to_string());
            cmd.push(path.to_string_lossy().into_owned());
        }
    }
}

/// Tokenize the free-form argument block.
///
/// Grammar: one entry per line; blank lines and lines whose first
/// non-space character is `#` are dropped; each remaining line is split
/// on whitespace and the tokens are appended in line order.
pub fn argument_tokens(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .filter(|line| !line.trim_start().starts_with('#'))
        .flat_map(|line| line.split_whitespace().map(str::to_owned))
        .collect()
}

/// Tokenize the free-form environment block.
///
/// Grammar: one `key=value` per line; lines starting with `#` and lines
/// without a `=` are dropped; each remaining line becomes a single
/// `-J-Dkey=value` token.
pub fn environment_tokens(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| !line.starts_with('#'))
        .filter(|line| line.contains('='))
        .map(|line| format!("-J-D{line}"))
        .collect()
}
