use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;
use upload_engine::{ArtifactStore, EngineError, FailureKind, StoreError};

#[test]
fn nested_directory_is_created_on_first_save() {
    let temp = TempDir::new().unwrap();
    let store = ArtifactStore::new(temp.path().join("out").join("job"));

    let saved = store.save("Intro_to_X.docx", b"docx").unwrap();

    assert!(store.dir().is_dir());
    assert_eq!(saved, store.dir().join("Intro_to_X.docx"));
    assert_eq!(fs::read(saved).unwrap(), b"docx");
}

#[test]
fn saving_again_replaces_previous_copy() {
    let temp = TempDir::new().unwrap();
    let store = ArtifactStore::new(temp.path());

    let first = store.save("plan.md", b"v1").unwrap();
    let second = store.save("plan.md", b"v2").unwrap();

    assert_eq!(first, second);
    assert_eq!(fs::read(&second).unwrap(), b"v2");
    let leftovers: Vec<PathBuf> = fs::read_dir(temp.path())
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect();
    assert_eq!(leftovers, vec![second]);
}

#[test]
fn failed_save_keeps_existing_artifact() {
    let temp = TempDir::new().unwrap();
    let store = ArtifactStore::new(temp.path());
    let existing = store.save("plan.md", b"kept").unwrap();
    // A directory in the way of the target makes the final rename fail.
    fs::create_dir(temp.path().join("blocked.md")).unwrap();

    assert!(matches!(
        store.save("blocked.md", b"new"),
        Err(StoreError::Write { .. })
    ));
    assert_eq!(fs::read(existing).unwrap(), b"kept");
}

#[test]
fn file_in_place_of_directory_maps_to_persist_failure() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let err = ArtifactStore::new(&file_path).save("plan.md", b"data").unwrap_err();
    assert!(matches!(err, StoreError::NotADirectory(_)));

    let engine_err = EngineError::from(err);
    assert_eq!(engine_err.kind, FailureKind::Persist { path: file_path });
}
