//! End-to-end save/load scenario
//!
//! Drives a whole game-save session through the typed value layer: write a
//! handful of differently-typed entries, overwrite one, remove one, then
//! read everything back through a fresh store instance.

use savebin::value::{EnumWidth, Quat, Transform, Vec3};
use savebin::{Config, SaveStore, Value};
use tempfile::TempDir;
use tracing_subscriber::EnvFilter;

/// Surface store tracing output when RUST_LOG is set
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn test_full_save_session() {
    init_tracing();

    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder()
        .base_dir(temp_dir.path())
        .default_file_name("GameSave")
        .build();
    let store = SaveStore::new(config.clone());
    let path = store.default_file_path().unwrap();

    // Write a typical spread of save data
    store
        .upsert_value("Health", &Value::Int(100), &path)
        .unwrap();
    store
        .upsert_value("PlayerName", &Value::Text("Ada".to_string()), &path)
        .unwrap();
    store
        .upsert_value("HardcoreMode", &Value::Bool(true), &path)
        .unwrap();
    store
        .upsert_value(
            "Difficulty",
            &Value::Enum {
                width: EnumWidth::U8,
                value: 2,
            },
            &path,
        )
        .unwrap();
    store
        .upsert_value(
            "SpawnTransform",
            &Value::Transform(Transform::new(
                Vec3::new(12.0, 0.0, -4.5),
                Quat::IDENTITY,
                Vec3::ONE,
            )),
            &path,
        )
        .unwrap();

    // The player takes damage; the checkpoint overwrites Health
    store.upsert_value("Health", &Value::Int(37), &path).unwrap();

    // The player resets their profile name
    store.remove("PlayerName", &path).unwrap();

    // A fresh store instance sees exactly the persisted state
    let reopened = SaveStore::new(config);
    assert_eq!(
        reopened.lookup_value("Health", &path).unwrap(),
        Some(Value::Int(37))
    );
    assert_eq!(reopened.lookup_value("PlayerName", &path).unwrap(), None);
    assert_eq!(
        reopened.lookup_value("HardcoreMode", &path).unwrap(),
        Some(Value::Bool(true))
    );
    assert_eq!(
        reopened.lookup_value("Difficulty", &path).unwrap(),
        Some(Value::Enum {
            width: EnumWidth::U8,
            value: 2,
        })
    );
    assert_eq!(
        reopened.lookup_value("SpawnTransform", &path).unwrap(),
        Some(Value::Transform(Transform::new(
            Vec3::new(12.0, 0.0, -4.5),
            Quat::IDENTITY,
            Vec3::ONE,
        )))
    );
}
