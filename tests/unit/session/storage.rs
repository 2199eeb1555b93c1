use super::*;

#[test]
fn empty_storage_loads_nothing() {
    assert!(MemoryStorage::new().load().is_none());
}

#[test]
fn memory_save_then_load() {
    let mut state = SceneState::default();
    state.clock_face.bold = true;
    state.ring.shine = -3;
    let mut storage = MemoryStorage::new();
    storage.save(&state).unwrap();
    assert!(storage.blob(STATE_KEY).unwrap().contains("\"clockFace\""));
    assert_eq!(storage.load(), Some(state));
}

#[test]
fn corrupt_blob_is_ignored() {
    let mut storage = MemoryStorage::new();
    storage.write_blob(STATE_KEY, "{ not json").unwrap();
    assert!(storage.load().is_none());

    // Well-formed but invalid: zero-sized canvas.
    let mut bad = serde_json::to_value(SceneState::default()).unwrap();
    bad["width"] = 0.into();
    storage.write_blob(STATE_KEY, &bad.to_string()).unwrap();
    assert!(storage.load().is_none());
}

#[test]
fn file_storage_writes_state_json_in_dir() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("nested").join("store");
    let mut storage = FileStorage::new(&dir);
    assert!(storage.load().is_none());

    let mut state = SceneState::default();
    state.width = 454;
    state.height = 454;
    storage.save(&state).unwrap();

    let path = dir.join("state.json");
    assert_eq!(storage.path_for(STATE_KEY), path);
    assert!(path.is_file());
    assert!(!dir.join("state.json.tmp").exists());
    assert_eq!(FileStorage::new(&dir).load(), Some(state));
}
