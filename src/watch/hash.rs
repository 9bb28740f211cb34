// src/watch/hash.rs

use std::path::Path;

use anyhow::Result;
use blake3::Hasher;
use tracing::debug;

use crate::fs::FileSystem;

/// blake3 hex digest of `bytes`.
pub fn fingerprint(bytes: &[u8]) -> String {
    let mut hasher = Hasher::new();
    hasher.update(bytes);
    hasher.finalize().to_hex().to_string()
}

/// Fingerprint of the file at `path`.
pub fn fingerprint_file(fs: &dyn FileSystem, path: &Path) -> Result<String> {
    let bytes = fs.read(path)?;
    let hash = fingerprint(&bytes);
    debug!(?path, hash = %hash, "computed file fingerprint");
    Ok(hash)
}
