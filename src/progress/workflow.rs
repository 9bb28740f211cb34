// src/progress/workflow.rs

//! Validating entry point for progress edits.
//!
//! The store primitive accepts anything; this layer enforces the record
//! rules before anything is written.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::curriculum::Curriculum;
use crate::errors::{ProgressField, Result, ValidationErrors};
use crate::progress::backend::StorageBackend;
use crate::progress::model::{ItemProgress, ProgressPatch};
use crate::progress::store::ProgressStore;
use crate::types::Status;

static REPO_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://").expect("repo URL pattern is valid"));

fn is_http_url(url: &str) -> bool {
    REPO_URL_RE.is_match(url)
}

/// Check a merged record against the save rules.
///
/// - a completed record needs a reason that is non-empty after trimming;
/// - a non-empty `repoUrl` must start with `http://` or `https://`.
pub fn validate_progress(record: &ItemProgress) -> std::result::Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if record.status == Status::Completed && record.reason_text().trim().is_empty() {
        errors.push(
            ProgressField::Reason,
            "a reason is required to mark an item completed",
        );
    }

    let url = record.repo_url_text();
    if !url.is_empty() && !is_http_url(url) {
        errors.push(
            ProgressField::RepoUrl,
            "repository URL must start with http:// or https://",
        );
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Apply `patch` to the record of item `id` through validation.
///
/// Fails with `ItemNotFound` for an unknown id and with `Validation` when the
/// merged record breaks a rule; in both cases nothing is written.
pub fn save_progress<B: StorageBackend>(
    store: &mut ProgressStore<B>,
    curriculum: &Curriculum,
    id: &str,
    patch: ProgressPatch,
) -> Result<ItemProgress> {
    let item = curriculum.resolve(id)?;

    let merged = store.get(id).cloned().unwrap_or_default().merged(&patch);
    if let Err(errors) = validate_progress(&merged) {
        warn!(item = %item.id, %errors, "rejected progress update");
        return Err(errors.into());
    }

    debug!(item = %item.id, "progress update passed validation");
    store.update(id, patch)
}
