//! Tests for SaveStore
//!
//! These tests verify:
//! - Lazy store-file creation on first upsert
//! - One record per key after any sequence of mutations
//! - Lookup/remove semantics against missing files and missing keys
//! - Corruption aborting mutations before any write
//! - Path assembly from the configured base directory and file format

use std::path::PathBuf;

use savebin::record::decode_records;
use savebin::{Config, DataType, FileFormat, SaveError, SaveStore};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_store() -> (TempDir, SaveStore, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder().base_dir(temp_dir.path()).build();
    let store = SaveStore::new(config);
    let path = temp_dir.path().join("slot1.bin");
    (temp_dir, store, path)
}

fn stored_keys(path: &std::path::Path) -> Vec<String> {
    let bytes = std::fs::read(path).unwrap();
    decode_records(&bytes)
        .unwrap()
        .into_iter()
        .map(|record| record.key)
        .collect()
}

// =============================================================================
// Upsert Tests
// =============================================================================

#[test]
fn test_upsert_creates_file_lazily() {
    let (_temp, store, path) = setup_store();

    assert!(!path.exists());
    store
        .upsert("Health", &[100, 0, 0, 0], DataType::Int, &path)
        .unwrap();
    assert!(path.is_file());

    assert_eq!(stored_keys(&path), vec!["Health"]);
}

#[test]
fn test_upsert_creates_missing_parent_directories() {
    let (temp, store, _) = setup_store();
    let path = temp.path().join("saves/slots/game.bin");

    store
        .upsert("Health", &[42, 0, 0, 0], DataType::Int, &path)
        .unwrap();

    assert!(path.is_file());
}

#[test]
fn test_upsert_then_lookup() {
    let (_temp, store, path) = setup_store();

    store
        .upsert("Health", &[42, 0, 0, 0], DataType::Int, &path)
        .unwrap();

    let (data_type, data) = store.lookup("Health", &path).unwrap().unwrap();
    assert_eq!(data_type, DataType::Int);
    assert_eq!(data, vec![42, 0, 0, 0]);
}

#[test]
fn test_upsert_replaces_existing_key() {
    let (_temp, store, path) = setup_store();

    store
        .upsert("Health", &[100, 0, 0, 0], DataType::Int, &path)
        .unwrap();
    store
        .upsert("Health", &[0, 0, 0, 0], DataType::Int, &path)
        .unwrap();

    // Exactly one record with the key, holding the newer value
    assert_eq!(stored_keys(&path), vec!["Health"]);
    let (_, data) = store.lookup("Health", &path).unwrap().unwrap();
    assert_eq!(data, vec![0, 0, 0, 0]);
}

#[test]
fn test_upsert_can_change_data_type() {
    let (_temp, store, path) = setup_store();

    store
        .upsert("Slot", &[3, 0, 0, 0], DataType::Int, &path)
        .unwrap();
    store.upsert("Slot", &[1], DataType::Bool, &path).unwrap();

    let (data_type, data) = store.lookup("Slot", &path).unwrap().unwrap();
    assert_eq!(data_type, DataType::Bool);
    assert_eq!(data, vec![1]);
}

#[test]
fn test_upsert_moves_key_to_tail() {
    let (_temp, store, path) = setup_store();

    store.upsert("a", &[1], DataType::Bool, &path).unwrap();
    store.upsert("b", &[1], DataType::Bool, &path).unwrap();
    store.upsert("c", &[1], DataType::Bool, &path).unwrap();

    store.upsert("a", &[0], DataType::Bool, &path).unwrap();

    assert_eq!(stored_keys(&path), vec!["b", "c", "a"]);
}

#[test]
fn test_upsert_idempotent() {
    let (_temp, store, path) = setup_store();

    store
        .upsert("Health", &[42, 0, 0, 0], DataType::Int, &path)
        .unwrap();
    let first = std::fs::read(&path).unwrap();

    store
        .upsert("Health", &[42, 0, 0, 0], DataType::Int, &path)
        .unwrap();
    let second = std::fs::read(&path).unwrap();

    assert_eq!(first, second);
}

// =============================================================================
// Lookup Tests
// =============================================================================

#[test]
fn test_lookup_missing_file_is_none() {
    let (_temp, store, path) = setup_store();

    assert!(store.lookup("Health", &path).unwrap().is_none());
}

#[test]
fn test_lookup_missing_key_is_none() {
    let (_temp, store, path) = setup_store();

    store.upsert("a", &[1], DataType::Bool, &path).unwrap();

    assert!(store.lookup("b", &path).unwrap().is_none());
}

#[test]
fn test_lookup_empty_file_is_none() {
    let (_temp, store, path) = setup_store();

    std::fs::write(&path, b"").unwrap();

    assert!(store.lookup("Health", &path).unwrap().is_none());
}

#[test]
fn test_lookup_keys_are_case_sensitive() {
    let (_temp, store, path) = setup_store();

    store.upsert("Health", &[1], DataType::Bool, &path).unwrap();

    assert!(store.lookup("health", &path).unwrap().is_none());
}

// =============================================================================
// Remove Tests
// =============================================================================

#[test]
fn test_remove_then_lookup_is_none() {
    let (_temp, store, path) = setup_store();

    store
        .upsert("Health", &[42, 0, 0, 0], DataType::Int, &path)
        .unwrap();
    store.remove("Health", &path).unwrap();

    assert!(store.lookup("Health", &path).unwrap().is_none());
}

#[test]
fn test_remove_preserves_other_records_and_order() {
    let (_temp, store, path) = setup_store();

    store.upsert("a", &[1], DataType::Bool, &path).unwrap();
    store.upsert("b", &[2, 0, 0, 0], DataType::Int, &path).unwrap();
    store.upsert("c", &[3, 0, 0, 0], DataType::Int, &path).unwrap();

    store.remove("b", &path).unwrap();

    assert_eq!(stored_keys(&path), vec!["a", "c"]);
    assert!(store.lookup("a", &path).unwrap().is_some());
    assert!(store.lookup("c", &path).unwrap().is_some());
}

#[test]
fn test_remove_missing_file_is_error() {
    let (_temp, store, path) = setup_store();

    assert!(matches!(
        store.remove("Health", &path),
        Err(SaveError::StoreMissing(_))
    ));
}

#[test]
fn test_remove_absent_key_succeeds() {
    let (_temp, store, path) = setup_store();

    store.upsert("a", &[1], DataType::Bool, &path).unwrap();

    // Content no-op, but the operation still rewrites and succeeds
    store.remove("zzz", &path).unwrap();

    assert_eq!(stored_keys(&path), vec!["a"]);
}

// =============================================================================
// Corruption Tests
// =============================================================================

#[test]
fn test_upsert_aborts_on_corrupt_file_without_writing() {
    let (_temp, store, path) = setup_store();

    store.upsert("a", &[1], DataType::Bool, &path).unwrap();
    let mut bytes = std::fs::read(&path).unwrap();
    bytes.truncate(bytes.len() - 1);
    std::fs::write(&path, &bytes).unwrap();

    let result = store.upsert("b", &[1], DataType::Bool, &path);
    assert!(matches!(result, Err(SaveError::Corruption(_))));

    // The damaged file is left exactly as it was, no partial rewrite
    assert_eq!(std::fs::read(&path).unwrap(), bytes);
}

#[test]
fn test_lookup_on_corrupt_file_is_error_not_none() {
    let (_temp, store, path) = setup_store();

    std::fs::write(&path, &[0xFF, 0x01, 0x02]).unwrap();

    assert!(matches!(
        store.lookup("Health", &path),
        Err(SaveError::Corruption(_))
    ));
}

#[test]
fn test_remove_on_corrupt_file_is_error() {
    let (_temp, store, path) = setup_store();

    std::fs::write(&path, &[0x01, 0xFF]).unwrap();

    assert!(matches!(
        store.remove("Health", &path),
        Err(SaveError::Corruption(_))
    ));
}

// =============================================================================
// Path Assembly Tests
// =============================================================================

#[test]
fn test_file_path_uses_configured_format() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder()
        .base_dir(temp_dir.path().join("store"))
        .file_format(FileFormat::Sav)
        .build();
    let store = SaveStore::new(config);

    let path = store.file_path("slot1").unwrap();

    assert_eq!(path, temp_dir.path().join("store").join("slot1.sav"));
    // Base directory was created on demand
    assert!(temp_dir.path().join("store").is_dir());
}

#[test]
fn test_file_path_with_explicit_format() {
    let (_temp, store, _) = setup_store();

    let bin = store.file_path_with_format("x", FileFormat::Bin).unwrap();
    let sav = store.file_path_with_format("x", FileFormat::Sav).unwrap();
    let dat = store.file_path_with_format("x", FileFormat::Dat).unwrap();

    assert!(bin.to_string_lossy().ends_with("x.bin"));
    assert!(sav.to_string_lossy().ends_with("x.sav"));
    assert!(dat.to_string_lossy().ends_with("x.dat"));
}

#[test]
fn test_default_file_path_uses_default_name() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder()
        .base_dir(temp_dir.path())
        .default_file_name("Autosave")
        .build();
    let store = SaveStore::new(config);

    let path = store.default_file_path().unwrap();

    assert_eq!(path, temp_dir.path().join("Autosave.bin"));
}

#[test]
fn test_format_is_cosmetic_across_extensions() {
    let (_temp, store, _) = setup_store();

    let sav = store.file_path_with_format("a", FileFormat::Sav).unwrap();
    let dat = store.file_path_with_format("b", FileFormat::Dat).unwrap();

    store.upsert("k", &[9, 0, 0, 0], DataType::Int, &sav).unwrap();
    store.upsert("k", &[9, 0, 0, 0], DataType::Int, &dat).unwrap();

    // Identical byte layout regardless of extension
    assert_eq!(std::fs::read(&sav).unwrap(), std::fs::read(&dat).unwrap());
}

// =============================================================================
// Delete Tests
// =============================================================================

#[test]
fn test_delete_store_removes_file() {
    let (_temp, store, path) = setup_store();

    store.upsert("a", &[1], DataType::Bool, &path).unwrap();

    assert!(store.delete_store(&path));
    assert!(!path.exists());
}

#[test]
fn test_delete_store_missing_file_is_false() {
    let (_temp, store, path) = setup_store();

    assert!(!store.delete_store(&path));
}
