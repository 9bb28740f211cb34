// src/progress/model.rs

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::types::Status;

/// Mutable learner record for one item, stored under the item's id.
///
/// Serialized as `{"status": "...", "reason": "...", "repoUrl": "..."}`;
/// absent optional fields are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemProgress {
    #[serde(default)]
    pub status: Status,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,
}

impl ItemProgress {
    pub fn is_completed(&self) -> bool {
        self.status == Status::Completed
    }

    /// Reason text, or `""` when unset.
    pub fn reason_text(&self) -> &str {
        self.reason.as_deref().unwrap_or("")
    }

    pub fn repo_url_text(&self) -> &str {
        self.repo_url.as_deref().unwrap_or("")
    }

    /// Shallow field-by-field merge; fields left `None` in `patch` keep
    /// their current value.
    pub fn merged(&self, patch: &ProgressPatch) -> ItemProgress {
        ItemProgress {
            status: patch.status.unwrap_or(self.status),
            reason: patch.reason.clone().or_else(|| self.reason.clone()),
            repo_url: patch.repo_url.clone().or_else(|| self.repo_url.clone()),
        }
    }
}

/// Partial update applied by the store's merge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressPatch {
    pub status: Option<Status>,
    pub reason: Option<String>,
    pub repo_url: Option<String>,
}

impl ProgressPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    pub fn reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    pub fn repo_url(mut self, url: impl Into<String>) -> Self {
        self.repo_url = Some(url.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.reason.is_none() && self.repo_url.is_none()
    }
}

/// Item id -> progress record. Keys need not match a known item.
pub type ProgressMap = BTreeMap<String, ItemProgress>;

/// Status of `id`, defaulting to not-started when there is no record.
pub fn resolved_status(progress: &ProgressMap, id: &str) -> Status {
    progress
        .get(id)
        .map(|p| p.status)
        .unwrap_or_default()
}

pub fn is_completed(progress: &ProgressMap, id: &str) -> bool {
    resolved_status(progress, id) == Status::Completed
}

/// Entries of a stored progress file that are not valid records (an
/// unknown status, a wrong field type, ...). Kept verbatim and written back
/// on every save.
pub type ForeignRecords = BTreeMap<String, Value>;

/// A progress file split into usable records and foreign entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecodedProgress {
    pub records: ProgressMap,
    pub foreign: ForeignRecords,
}

/// Serialize the map in the persistence format.
pub fn to_json_bytes(progress: &ProgressMap) -> serde_json::Result<Vec<u8>> {
    serde_json::to_vec_pretty(progress)
}

/// Parse the persistence format strictly: any invalid record fails the
/// whole map.
pub fn from_json_bytes(bytes: &[u8]) -> serde_json::Result<ProgressMap> {
    serde_json::from_slice(bytes)
}

/// Parse the persistence format record by record.
///
/// Fails only when the document is not a JSON object. Entries that do not
/// parse as [`ItemProgress`] land in `foreign` instead of failing the load.
pub fn decode_progress(bytes: &[u8]) -> serde_json::Result<DecodedProgress> {
    let raw: BTreeMap<String, Value> = serde_json::from_slice(bytes)?;

    let mut decoded = DecodedProgress::default();
    for (id, value) in raw {
        match ItemProgress::deserialize(&value) {
            Ok(record) => {
                decoded.records.insert(id, record);
            }
            Err(e) => {
                warn!(item = %id, error = %e, "keeping unreadable progress record verbatim");
                decoded.foreign.insert(id, value);
            }
        }
    }
    Ok(decoded)
}

/// Serialize records plus foreign entries. A record wins over a foreign
/// entry with the same id.
pub fn encode_progress(
    records: &ProgressMap,
    foreign: &ForeignRecords,
) -> serde_json::Result<Vec<u8>> {
    let mut out: BTreeMap<&str, Value> = foreign
        .iter()
        .map(|(id, value)| (id.as_str(), value.clone()))
        .collect();
    for (id, record) in records {
        out.insert(id.as_str(), serde_json::to_value(record)?);
    }
    serde_json::to_vec_pretty(&out)
}
