// tests/manager_registry.rs

//! Registry semantics: ordering, name queries and the clone lifecycle.

use chrono::Local;
use nblauncher::manager::TaskManager;
use nblauncher_test_utils::builders::{source_task, LauncherTaskBuilder};

fn manager_with(names: &[&str]) -> TaskManager {
    let mut manager = TaskManager::new();
    for name in names {
        manager.insert(LauncherTaskBuilder::new(name, "/usr/bin/nb").build());
    }
    manager
}

#[test]
fn exists_is_case_insensitive() {
    let manager = manager_with(&["Apache NetBeans 21"]);

    assert!(manager.exists("apache netbeans 21"));
    assert!(manager.exists("APACHE NETBEANS 21"));
    assert!(!manager.exists("Apache NetBeans 22"));
}

#[test]
fn is_valid_allows_keeping_the_current_name() {
    let manager = manager_with(&["dev", "prod"]);

    assert!(manager.is_valid("dev", "dev"));
    assert!(manager.is_valid("dev", "DEV"));
}

#[test]
fn is_valid_rejects_names_taken_by_other_tasks() {
    let manager = manager_with(&["dev", "prod"]);

    assert!(!manager.is_valid("dev", "prod"));
    assert!(!manager.is_valid("dev", "Prod"));
    assert!(manager.is_valid("dev", "staging"));
}

#[test]
fn insert_replaces_by_id_in_place() {
    let mut manager = TaskManager::new();
    let first = LauncherTaskBuilder::new("first", "/usr/bin/nb").build();
    let second = LauncherTaskBuilder::new("second", "/usr/bin/nb").build();
    let id = first.id.clone();

    manager.insert(first);
    manager.insert(second);

    let mut edited = manager.get_by_id(&id).unwrap().clone();
    edited.name = "renamed".to_string();
    manager.insert(edited);

    assert_eq!(manager.len(), 2);
    assert_eq!(manager.tasks()[0].name, "renamed");
    assert_eq!(manager.tasks()[0].id, id);
}

#[test]
fn clone_gets_new_id_zero_last_run_and_dated_name() {
    let mut manager = TaskManager::new();
    let original = LauncherTaskBuilder::new("dev", "/usr/bin/nb")
        .last_run(1_700_000_000_000)
        .build();
    let original_id = original.id.clone();
    manager.insert(original);

    let clone = manager.clone_task(&original_id).unwrap().clone();

    assert_ne!(clone.id, original_id);
    assert_eq!(clone.last_run, 0);
    assert_eq!(
        clone.name,
        format!("dev {}", Local::now().date_naive())
    );
    assert_eq!(manager.len(), 2);

    let original = manager.get_by_id(&original_id).unwrap();
    assert_eq!(original.name, "dev");
    assert_eq!(original.last_run, 1_700_000_000_000);
    assert_eq!(original.spec, clone.spec);
}

#[test]
fn clone_of_unknown_id_is_a_no_op() {
    let mut manager = manager_with(&["dev"]);

    assert!(manager.clone_task("no-such-id").is_none());
    assert_eq!(manager.len(), 1);
}

#[test]
fn remove_by_id() {
    let mut manager = TaskManager::new();
    let task = source_task("src", "/home/u/app", "");
    let id = task.id.clone();
    manager.insert(task);

    assert!(manager.remove(&id).is_some());
    assert!(manager.is_empty());
    assert!(manager.remove(&id).is_none());
}

#[test]
fn set_last_run_updates_only_the_matching_task() {
    let mut manager = manager_with(&["a", "b"]);
    let id = manager.get_by_name("a").unwrap().id.clone();

    assert!(manager.set_last_run(&id, 42));
    assert!(!manager.set_last_run("no-such-id", 42));

    assert_eq!(manager.get_by_name("a").unwrap().last_run, 42);
    assert_eq!(manager.get_by_name("b").unwrap().last_run, 0);
}

#[test]
fn sort_by_name_is_case_insensitive() {
    let mut manager = manager_with(&["beta", "Alpha", "gamma"]);
    manager.sort_by_name();

    let names: Vec<_> = manager.tasks().iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "beta", "gamma"]);
}
