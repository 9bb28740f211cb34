// src/watch/watcher.rs

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::engine::RuntimeEvent;
use crate::fs::FileSystem;
use crate::watch::event_handler::{curriculum_event, progress_event, WatchSources};
use crate::watch::path_utils::{is_same_file, watch_dir_of};

/// Keeps the underlying `RecommendedWatcher` alive. Dropping it stops
/// file watching.
pub struct WatcherHandle {
    _inner: RecommendedWatcher,
}

impl std::fmt::Debug for WatcherHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatcherHandle").finish()
    }
}

/// Watch the curriculum and progress files and send reload events to the
/// runtime.
///
/// The parent directories are watched (non-recursively) rather than the
/// files, so replaced or newly created files are still seen. A missing
/// storage directory is created first.
pub fn spawn_watcher(
    sources: WatchSources,
    fs: Arc<dyn FileSystem>,
    runtime_tx: mpsc::Sender<RuntimeEvent>,
) -> Result<WatcherHandle> {
    let dirs: BTreeSet<PathBuf> = [
        watch_dir_of(&sources.curriculum),
        watch_dir_of(&sources.progress),
    ]
    .into_iter()
    .collect();

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<Event>();

    let mut watcher = RecommendedWatcher::new(
        move |res: notify::Result<Event>| match res {
            Ok(event) => {
                if let Err(err) = event_tx.send(event) {
                    eprintln!("roadmap-checker: failed to forward notify event: {err}");
                }
            }
            Err(err) => {
                eprintln!("roadmap-checker: file watch error: {err}");
            }
        },
        Config::default(),
    )?;

    for dir in &dirs {
        fs.create_dir_all(dir)?;
        watcher.watch(dir, RecursiveMode::NonRecursive)?;
        info!("file watcher started on {:?}", dir);
    }

    tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            if event.kind.is_access() {
                continue;
            }
            debug!(?event, "received notify event");

            let curriculum_changed = event
                .paths
                .iter()
                .any(|p| is_same_file(p, &sources.curriculum));
            let progress_changed = event
                .paths
                .iter()
                .any(|p| is_same_file(p, &sources.progress));

            if curriculum_changed {
                let ev = curriculum_event(fs.as_ref(), &sources.curriculum, &sources.categories);
                if runtime_tx.send(ev).await.is_err() {
                    break;
                }
            }
            if progress_changed {
                let ev = progress_event(Arc::clone(&fs), &sources.progress);
                if runtime_tx.send(ev).await.is_err() {
                    break;
                }
            }
        }
        debug!("watcher event loop finished");
    });

    Ok(WatcherHandle { _inner: watcher })
}
