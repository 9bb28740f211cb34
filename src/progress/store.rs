// src/progress/store.rs

use std::fmt;

use tracing::{info, warn};

use crate::errors::{Result, RoadmapError};
use crate::progress::backend::StorageBackend;
use crate::progress::model::{
    decode_progress, encode_progress, resolved_status, DecodedProgress, ForeignRecords,
    ItemProgress, ProgressMap, ProgressPatch,
};
use crate::types::Status;

/// Durable learner progress.
///
/// Loaded once from its backend, written through on every mutation. The
/// store does not check keys against the curriculum and does not validate
/// record contents; that is the job of [`crate::progress::save_progress`].
///
/// Stored entries that are not valid records are carried along untouched
/// and written back with every save, until an update or import replaces them.
pub struct ProgressStore<B: StorageBackend> {
    backend: B,
    map: ProgressMap,
    foreign: ForeignRecords,
}

impl<B: StorageBackend> fmt::Debug for ProgressStore<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProgressStore")
            .field("records", &self.map.len())
            .field("foreign", &self.foreign.len())
            .finish_non_exhaustive()
    }
}

impl<B: StorageBackend> ProgressStore<B> {
    /// Read the persisted map.
    ///
    /// Missing storage gives an empty map. Unreadable storage, or storage
    /// that is not a JSON object, is logged and also gives an empty map; it
    /// never fails. Individual records that do not parse are kept as
    /// foreign entries.
    pub fn load(backend: B) -> Self {
        let decoded = match backend.load() {
            Ok(Some(bytes)) => match decode_progress(&bytes) {
                Ok(decoded) => {
                    info!(
                        records = decoded.records.len(),
                        foreign = decoded.foreign.len(),
                        "loaded progress"
                    );
                    decoded
                }
                Err(e) => {
                    warn!(error = %e, "stored progress is corrupt; starting empty");
                    DecodedProgress::default()
                }
            },
            Ok(None) => DecodedProgress::default(),
            Err(e) => {
                warn!(error = %e, "failed to read stored progress; starting empty");
                DecodedProgress::default()
            }
        };
        Self {
            backend,
            map: decoded.records,
            foreign: decoded.foreign,
        }
    }

    pub fn map(&self) -> &ProgressMap {
        &self.map
    }

    pub fn get(&self, id: &str) -> Option<&ItemProgress> {
        self.map.get(id)
    }

    pub fn status_of(&self, id: &str) -> Status {
        resolved_status(&self.map, id)
    }

    /// Stored entries that could not be read as records.
    pub fn foreign(&self) -> &ForeignRecords {
        &self.foreign
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Merge `patch` into the record for `id` (created if absent), persist
    /// the whole map and return the new record.
    ///
    /// No validation happens here. If the write fails, the in-memory map is
    /// left as it was.
    pub fn update(&mut self, id: &str, patch: ProgressPatch) -> Result<ItemProgress> {
        let current = self.map.get(id).cloned().unwrap_or_default();
        let record = current.merged(&patch);

        let mut next = self.map.clone();
        next.insert(id.to_string(), record.clone());
        let mut foreign = self.foreign.clone();
        foreign.remove(id);

        self.persist(&next, &foreign)?;
        self.map = next;
        self.foreign = foreign;

        info!(item = %id, status = %record.status, "updated progress");
        Ok(record)
    }

    /// Replace the whole map, unvalidated, and persist it. Foreign entries
    /// are dropped along with everything else.
    pub fn replace_all(&mut self, map: ProgressMap) -> Result<()> {
        self.replace_decoded(DecodedProgress {
            records: map,
            foreign: ForeignRecords::new(),
        })
    }

    fn replace_decoded(&mut self, decoded: DecodedProgress) -> Result<()> {
        self.persist(&decoded.records, &decoded.foreign)?;
        info!(
            records = decoded.records.len(),
            foreign = decoded.foreign.len(),
            "replaced all progress"
        );
        self.map = decoded.records;
        self.foreign = decoded.foreign;
        Ok(())
    }

    /// Parse an exported progress file and replace the store with it.
    ///
    /// A file that is not a JSON object leaves the current state untouched.
    /// Entries that are not valid records are imported verbatim as foreign
    /// entries. Returns the number of usable records.
    pub fn import_bytes(&mut self, bytes: &[u8]) -> Result<usize> {
        let decoded = decode_progress(bytes).map_err(|e| {
            warn!(error = %e, "rejected progress import");
            RoadmapError::Persistence(format!("could not read progress file: {}", e))
        })?;
        let count = decoded.records.len();
        self.replace_decoded(decoded)?;
        Ok(count)
    }

    /// The map, plus foreign entries, in the persistence format.
    pub fn export_bytes(&self) -> Result<Vec<u8>> {
        encode_progress(&self.map, &self.foreign)
            .map_err(|e| RoadmapError::Persistence(format!("serializing progress: {}", e)))
    }

    fn persist(&mut self, map: &ProgressMap, foreign: &ForeignRecords) -> Result<()> {
        let bytes = encode_progress(map, foreign)
            .map_err(|e| RoadmapError::Persistence(format!("serializing progress: {}", e)))?;
        self.backend
            .save(&bytes)
            .map_err(|e| RoadmapError::Persistence(format!("saving progress: {:#}", e)))
    }
}
