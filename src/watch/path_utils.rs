// src/watch/path_utils.rs

use std::path::{Path, PathBuf};

/// Whether a notify event path refers to `target`.
///
/// Tries a direct comparison first, then compares canonicalized parent
/// directories plus the file name. The file itself may already be gone
/// (editors often replace files by rename), so only the parent is
/// canonicalized.
pub fn is_same_file(event_path: &Path, target: &Path) -> bool {
    if event_path == target {
        return true;
    }
    if event_path.file_name() != target.file_name() {
        return false;
    }
    match (canonical_parent(event_path), canonical_parent(target)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Directory to watch for `file`: its parent, or `.` for a bare file name.
pub fn watch_dir_of(file: &Path) -> PathBuf {
    match file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn canonical_parent(path: &Path) -> Option<PathBuf> {
    watch_dir_of(path).canonicalize().ok()
}
