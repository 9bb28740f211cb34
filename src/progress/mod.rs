// src/progress/mod.rs

//! Progress Store: the persisted item-id -> record map.
//!
//! - [`model`]: the record, the merge patch and the JSON format.
//! - [`backend`]: byte storage (file or memory).
//! - [`store`]: the load/update/replace lifecycle, no validation.
//! - [`workflow`]: the validating entry point used by callers.

pub mod backend;
pub mod model;
pub mod store;
pub mod workflow;

pub use backend::{FileBackend, MemoryBackend, StorageBackend};
pub use model::{
    decode_progress, encode_progress, from_json_bytes, is_completed, resolved_status,
    to_json_bytes, DecodedProgress, ForeignRecords, ItemProgress, ProgressMap, ProgressPatch,
};
pub use store::ProgressStore;
pub use workflow::{save_progress, validate_progress};

/// Default file name for a progress export.
pub const PROGRESS_EXPORT_FILE: &str = "roadmap-progress.json";
