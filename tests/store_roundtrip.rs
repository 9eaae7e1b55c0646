// tests/store_roundtrip.rs

//! Persistence: save/load round-trips and fail-soft loading.

use nblauncher::manager::TaskManager;
use nblauncher::store::TaskStore;
use nblauncher_test_utils::builders::{source_task, LauncherTaskBuilder};
use tempfile::TempDir;

fn store_in(dir: &TempDir) -> TaskStore {
    TaskStore::new(dir.path().join("tasks.json"))
}

#[test]
fn roundtrip_preserves_all_fields() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let mut manager = TaskManager::new();
    manager.insert(
        LauncherTaskBuilder::new("dev", "/opt/netbeans/bin/netbeans")
            .font_size("14")
            .locale("sv-SE")
            .user_dir("/home/u/userdir", true)
            .cache_dir("/home/u/cachedir", false)
            .java_dir("/opt/jdk", true)
            .console_logger(true)
            .arguments("--open foo\n# note\nbar")
            .environment("A=1\n#B=2")
            .last_run(1_700_000_000_000)
            .build(),
    );
    manager.insert(source_task("src", "/home/u/app", "main repo"));

    store.save(&manager).unwrap();
    let loaded = store.load();

    assert_eq!(loaded.len(), manager.len());
    for task in manager.tasks() {
        assert_eq!(loaded.get_by_id(&task.id), Some(task));
    }
}

#[test]
fn load_sorts_by_name() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let mut manager = TaskManager::new();
    manager.insert(LauncherTaskBuilder::new("zeta", "/usr/bin/nb").build());
    manager.insert(LauncherTaskBuilder::new("Alpha", "/usr/bin/nb").build());
    store.save(&manager).unwrap();

    let loaded = store.load();
    let names: Vec<_> = loaded.tasks().iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "zeta"]);
}

#[test]
fn save_overwrites_previous_contents() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let mut manager = TaskManager::new();
    let keep = LauncherTaskBuilder::new("keep", "/usr/bin/nb").build();
    let drop_me = LauncherTaskBuilder::new("drop", "/usr/bin/nb").build();
    let drop_id = drop_me.id.clone();
    manager.insert(keep);
    manager.insert(drop_me);
    store.save(&manager).unwrap();

    manager.remove(&drop_id);
    store.save(&manager).unwrap();

    let loaded = store.load();
    assert_eq!(loaded.len(), 1);
    assert!(loaded.get_by_id(&drop_id).is_none());
}

#[test]
fn missing_file_loads_an_empty_registry() {
    let dir = TempDir::new().unwrap();
    let store = TaskStore::new(dir.path().join("does-not-exist.json"));

    assert!(store.load().is_empty());
}

#[test]
fn corrupt_file_loads_an_empty_registry() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tasks.json");
    std::fs::write(&path, "this is not json {").unwrap();

    assert!(TaskStore::new(path).load().is_empty());
}

#[test]
fn unsupported_format_version_loads_an_empty_registry() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tasks.json");
    std::fs::write(&path, r#"{"format_version": 99, "tasks": {}}"#).unwrap();

    assert!(TaskStore::new(path).load().is_empty());
}

#[test]
fn persisted_records_use_the_historical_field_names() {
    let task = LauncherTaskBuilder::new("dev", "/usr/bin/nb")
        .arguments("--open foo")
        .environment("A=1")
        .build();

    let value = serde_json::to_value(&task).unwrap();
    let object = value.as_object().unwrap();

    for key in ["uuid", "name", "last_run", "kind", "execPath", "arg", "env"] {
        assert!(object.contains_key(key), "missing field {key}");
    }
    assert_eq!(value["kind"], "launcher");

    let source = serde_json::to_value(source_task("src", "/home/u/app", "")).unwrap();
    assert_eq!(source["kind"], "source");
    assert!(source.as_object().unwrap().contains_key("sourceDir"));
}

#[test]
fn save_creates_missing_parent_directories() {
    let dir = TempDir::new().unwrap();
    let store = TaskStore::new(dir.path().join("nested/deeper/tasks.json"));

    let mut manager = TaskManager::new();
    manager.insert(LauncherTaskBuilder::new("dev", "/usr/bin/nb").build());

    store.save(&manager).unwrap();
    assert_eq!(store.load().len(), 1);
}
