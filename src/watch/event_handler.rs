// src/watch/event_handler.rs

//! Turns a changed file into a runtime event.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, warn};

use crate::curriculum::{curriculum_from_source, CurriculumFormat};
use crate::engine::RuntimeEvent;
use crate::fs::FileSystem;
use crate::progress::{FileBackend, ProgressStore};
use crate::watch::hash::fingerprint;

/// Files watched in `watch` mode.
#[derive(Debug, Clone)]
pub struct WatchSources {
    pub curriculum: PathBuf,
    pub progress: PathBuf,
    /// Configured category order, for the unknown-category warning.
    pub categories: Vec<String>,
}

/// Read and validate the curriculum file.
///
/// Any failure (unreadable, unparseable, structurally invalid) becomes
/// `CurriculumRejected` so the runtime keeps showing the previous frame.
pub fn curriculum_event(fs: &dyn FileSystem, path: &Path, categories: &[String]) -> RuntimeEvent {
    let bytes = match fs.read(path) {
        Ok(b) => b,
        Err(e) => {
            warn!(?path, error = %e, "failed to read curriculum");
            return RuntimeEvent::CurriculumRejected {
                reason: format!("{:#}", e),
            };
        }
    };
    let hash = fingerprint(&bytes);

    let source = match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => {
            return RuntimeEvent::CurriculumRejected {
                reason: format!("curriculum is not valid UTF-8: {}", e),
            };
        }
    };

    match curriculum_from_source(&source, CurriculumFormat::from_path(path), categories) {
        Ok(curriculum) => {
            debug!(?path, hash = %hash, items = curriculum.len(), "curriculum reloaded");
            RuntimeEvent::CurriculumLoaded {
                fingerprint: hash,
                items: curriculum.into_items(),
            }
        }
        Err(e) => RuntimeEvent::CurriculumRejected {
            reason: e.to_string(),
        },
    }
}

/// Re-read the progress file. A corrupt file loads as an empty map.
pub fn progress_event(fs: Arc<dyn FileSystem>, path: &Path) -> RuntimeEvent {
    let store = ProgressStore::load(FileBackend::new(path, fs));
    RuntimeEvent::ProgressLoaded(store.map().clone())
}
