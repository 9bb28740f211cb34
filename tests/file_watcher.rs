// tests/file_watcher.rs

use std::sync::Arc;

use tokio::sync::mpsc;

use roadmap_checker::fs::mock::MockFileSystem;
use roadmap_checker::fs::{FileSystem, RealFileSystem};
use roadmap_checker::watch::{spawn_watcher, WatchSources};
use roadmap_checker_test_utils::init_tracing;

fn sources_in(root: &std::path::Path, progress_dir: &str) -> WatchSources {
    WatchSources {
        curriculum: root.join("roadmap.toml"),
        progress: root.join(progress_dir).join("progress.json"),
        categories: Vec::new(),
    }
}

#[tokio::test]
async fn watcher_creates_missing_storage_dir() {
    init_tracing();
    let tmp = tempfile::tempdir().unwrap();
    let sources = sources_in(tmp.path(), ".roadmap");
    let (tx, _rx) = mpsc::channel(16);

    let fs: Arc<dyn FileSystem> = Arc::new(RealFileSystem);
    let _handle = spawn_watcher(sources, fs, tx).unwrap();

    assert!(tmp.path().join(".roadmap").is_dir());
}

#[tokio::test]
async fn watcher_creates_dirs_through_the_filesystem() {
    init_tracing();
    let tmp = tempfile::tempdir().unwrap();
    let mock = MockFileSystem::new();
    let (tx, _rx) = mpsc::channel(16);

    let _handle = spawn_watcher(sources_in(tmp.path(), ""), Arc::new(mock.clone()), tx).unwrap();

    assert!(mock.has_dir(tmp.path()));
}

#[tokio::test]
async fn watcher_fails_when_storage_dir_cannot_be_created() {
    init_tracing();
    let tmp = tempfile::tempdir().unwrap();
    let mock = MockFileSystem::new();
    mock.set_read_only(true);
    let (tx, _rx) = mpsc::channel(16);

    let result = spawn_watcher(sources_in(tmp.path(), ".roadmap"), Arc::new(mock), tx);

    assert!(result.is_err());
    assert!(!tmp.path().join(".roadmap").exists());
}
