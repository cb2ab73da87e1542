//! Tests for storage adapters

use std::fs;

use taskboard::adapters::{JsonFileStorage, MemoryStorage};
use taskboard::core::models::{Status, Task, TaskId};
use taskboard::core::ports::{StorageError, TaskStorage};
use tempfile::TempDir;

use crate::common::sample_tasks;

// =============================================================================
// JSON FILE STORAGE
// =============================================================================

#[test]
fn test_missing_file_loads_empty() {
    let temp = TempDir::new().unwrap();
    let storage = JsonFileStorage::in_dir(temp.path());
    assert!(storage.load().unwrap().is_empty());
}

#[test]
fn test_file_is_named_after_storage_key() {
    let temp = TempDir::new().unwrap();
    assert!(JsonFileStorage::in_dir(temp.path()).path().ends_with("tasks.json"));
    assert!(JsonFileStorage::with_key(temp.path(), "work").path().ends_with("work.json"));
}

#[test]
fn test_round_trip_preserves_everything() {
    let temp = TempDir::new().unwrap();
    let mut storage = JsonFileStorage::in_dir(temp.path());
    let mut tasks = sample_tasks();
    tasks.push(Task::new("b7f3-uuid", "String id").with_description(""));

    storage.save(&tasks).unwrap();
    let loaded = storage.load().unwrap();

    assert_eq!(loaded, tasks);
    assert!(matches!(loaded[4].id, TaskId::Text(_)));
    assert!(matches!(loaded[0].id, TaskId::Number(1)));
}

#[test]
fn test_saved_layout_is_plain_array() {
    let temp = TempDir::new().unwrap();
    let mut storage = JsonFileStorage::in_dir(temp.path());
    storage
        .save(&[Task::new(1, "A").with_status(Status::InProgress)])
        .unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(storage.path()).unwrap()).unwrap();
    assert_eq!(
        raw,
        serde_json::json!([{ "id": 1, "name": "A", "description": "", "status": "in-progress" }])
    );
}

#[test]
fn test_save_overwrites_previous_list() {
    let temp = TempDir::new().unwrap();
    let mut storage = JsonFileStorage::in_dir(temp.path());

    storage.save(&sample_tasks()).unwrap();
    storage.save(&[Task::new(9, "Only")]).unwrap();

    assert_eq!(storage.load().unwrap(), [Task::new(9, "Only")]);
}

#[test]
fn test_save_creates_missing_directory() {
    let temp = TempDir::new().unwrap();
    let mut storage = JsonFileStorage::in_dir(&temp.path().join("nested/dir"));
    storage.save(&sample_tasks()).unwrap();
    assert_eq!(storage.load().unwrap().len(), 4);
}

#[test]
fn test_null_and_blank_files_load_empty() {
    let temp = TempDir::new().unwrap();
    let storage = JsonFileStorage::in_dir(temp.path());

    fs::write(storage.path(), "null").unwrap();
    assert!(storage.load().unwrap().is_empty());

    fs::write(storage.path(), "\n").unwrap();
    assert!(storage.load().unwrap().is_empty());
}

#[test]
fn test_corrupt_file_is_an_error() {
    let temp = TempDir::new().unwrap();
    let storage = JsonFileStorage::in_dir(temp.path());
    fs::write(storage.path(), r#"[{"id":1,"name":"A","status":"blocked"}]"#).unwrap();

    let err = storage.load().unwrap_err();
    assert!(matches!(err, StorageError::Corrupt { .. }));
    assert!(err.to_string().contains("tasks.json"));
}

#[test]
fn test_reads_lists_written_by_other_hosts() {
    let temp = TempDir::new().unwrap();
    let storage = JsonFileStorage::in_dir(temp.path());
    fs::write(
        storage.path(),
        r#"[{"id":"1699999999","name":"From browser","description":"","status":"archived"}]"#,
    )
    .unwrap();

    let tasks = storage.load().unwrap();
    assert_eq!(tasks[0].id, TaskId::from("1699999999"));
    assert_eq!(tasks[0].status, Status::Archived);
}

#[test]
fn test_negative_ids_round_trip() {
    let temp = TempDir::new().unwrap();
    let mut storage = JsonFileStorage::in_dir(temp.path());
    fs::write(
        storage.path(),
        r#"[{"id":-3,"name":"A","description":"","status":"todo"}]"#,
    )
    .unwrap();

    let tasks = storage.load().unwrap();
    assert_eq!(tasks, [Task::new(-3, "A")]);

    storage.save(&tasks).unwrap();
    let raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(storage.path()).unwrap()).unwrap();
    assert_eq!(raw[0]["id"], -3);
}

// =============================================================================
// MEMORY STORAGE
// =============================================================================

#[test]
fn test_memory_storage_shares_state_between_clones() {
    let storage = MemoryStorage::new();
    let mut handle = storage.clone();

    handle.save(&sample_tasks()).unwrap();

    assert_eq!(storage.stored(), sample_tasks());
    assert_eq!(storage.save_count(), 1);
}

#[test]
fn test_memory_storage_can_fail_saves() {
    let mut storage = MemoryStorage::with_tasks(sample_tasks());
    storage.set_fail_saves(true);

    let err = storage.save(&[]).unwrap_err();

    assert!(matches!(err, StorageError::Unavailable(_)));
    assert_eq!(storage.load().unwrap(), sample_tasks());
}
