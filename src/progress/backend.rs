// src/progress/backend.rs

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use tracing::debug;

use crate::fs::FileSystem;

/// Raw byte storage under one well-known key.
pub trait StorageBackend: Send {
    /// Stored bytes, or `None` if nothing was saved yet.
    fn load(&self) -> Result<Option<Vec<u8>>>;
    fn save(&mut self, bytes: &[u8]) -> Result<()>;
}

/// Stores the progress map as a file (`<dir>/<key>.json`).
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
    fs: Arc<dyn FileSystem>,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>, fs: Arc<dyn FileSystem>) -> Self {
        Self {
            path: path.into(),
            fs,
        }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl StorageBackend for FileBackend {
    fn load(&self) -> Result<Option<Vec<u8>>> {
        if !self.fs.exists(&self.path) {
            debug!(path = ?self.path, "no stored progress yet");
            return Ok(None);
        }
        self.fs.read(&self.path).map(Some)
    }

    fn save(&mut self, bytes: &[u8]) -> Result<()> {
        self.fs.write(&self.path, bytes)?;
        debug!(path = ?self.path, bytes = bytes.len(), "stored progress (file)");
        Ok(())
    }
}

/// Keeps the bytes in memory only. Clones share the same slot, so tests can
/// hand one to a store and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    slot: Arc<Mutex<Option<Vec<u8>>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(bytes.into()))),
        }
    }

    pub fn bytes(&self) -> Option<Vec<u8>> {
        self.slot.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl StorageBackend for MemoryBackend {
    fn load(&self) -> Result<Option<Vec<u8>>> {
        Ok(self.bytes())
    }

    fn save(&mut self, bytes: &[u8]) -> Result<()> {
        *self.slot.lock().unwrap_or_else(|e| e.into_inner()) = Some(bytes.to_vec());
        debug!(bytes = bytes.len(), "stored progress (memory)");
        Ok(())
    }
}
