use stackgen::core::Storage;
use stackgen::{LocalStorage, ScaffoldError};
use tempfile::TempDir;

#[tokio::test]
async fn test_write_round_trips_exact_bytes() {
    let temp_dir = TempDir::new().unwrap();
    let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());

    let content = "app:\n  name: X\n";
    storage
        .write_file("config.yaml", content.as_bytes())
        .await
        .unwrap();

    let written = std::fs::read(temp_dir.path().join("config.yaml")).unwrap();
    assert_eq!(written, content.as_bytes());
}

#[tokio::test]
async fn test_missing_parent_directory_fails_without_panic() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("no").join("such").join("dir");
    let storage = LocalStorage::new(missing.to_str().unwrap().to_string());

    let result = storage.write_file("config.yaml", b"x").await;

    match result {
        Err(ScaffoldError::WriteError { path, .. }) => {
            assert!(path.contains("config.yaml"));
        }
        other => panic!("expected WriteError, got {:?}", other),
    }

    // The emitter must not create intermediate directories on failure.
    assert!(!missing.exists());
}

#[tokio::test]
async fn test_second_write_fully_overwrites() {
    let temp_dir = TempDir::new().unwrap();
    let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());

    storage
        .write_file("Dockerfile", b"FROM python:3.11-slim\nCMD [\"app\"]\n")
        .await
        .unwrap();
    // Shorter content must truncate, not append.
    storage.write_file("Dockerfile", b"FROM alpine\n").await.unwrap();

    let written = std::fs::read_to_string(temp_dir.path().join("Dockerfile")).unwrap();
    assert_eq!(written, "FROM alpine\n");
}

#[tokio::test]
async fn test_writes_to_distinct_paths_are_independent() {
    let temp_dir = TempDir::new().unwrap();
    let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());

    // Make the first target unwritable by occupying its name with a directory.
    std::fs::create_dir(temp_dir.path().join("config.yaml")).unwrap();

    let first = storage.write_file("config.yaml", b"app: {}\n").await;
    let second = storage.write_file("Dockerfile", b"FROM alpine\n").await;

    assert!(first.is_err());
    assert!(second.is_ok());
    assert!(temp_dir.path().join("Dockerfile").exists());
}
