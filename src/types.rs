// src/types.rs

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Learner status for a single item.
///
/// Absent progress records resolve to `NotStarted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    NotStarted,
    InProgress,
    Completed,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::NotStarted, Status::InProgress, Status::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::NotStarted => "not-started",
            Status::InProgress => "in-progress",
            Status::Completed => "completed",
        }
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::NotStarted
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "not-started" | "not_started" | "todo" => Ok(Status::NotStarted),
            "in-progress" | "in_progress" | "doing" => Ok(Status::InProgress),
            "completed" | "done" => Ok(Status::Completed),
            other => Err(format!(
                "invalid status: {other} (expected \"not-started\", \"in-progress\" or \"completed\")"
            )),
        }
    }
}

/// Placement strategy used by the layout engine.
///
/// - `Simple`: per-level rows, input order, fixed spacing.
/// - `Grouped`: one horizontal band per category, levels centred in the band.
/// - `Layered`: longest-path levels with barycenter crossing reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutPolicy {
    Simple,
    Grouped,
    Layered,
}

impl Default for LayoutPolicy {
    fn default() -> Self {
        LayoutPolicy::Simple
    }
}

impl FromStr for LayoutPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "simple" => Ok(LayoutPolicy::Simple),
            "grouped" => Ok(LayoutPolicy::Grouped),
            "layered" => Ok(LayoutPolicy::Layered),
            other => Err(format!(
                "invalid layout policy: {other} (expected \"simple\", \"grouped\" or \"layered\")"
            )),
        }
    }
}

/// How items with children are counted by the analytics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CountingMode {
    /// Only the items in the list itself.
    ParentOnly,
    /// Each item plus its direct children.
    Flattened,
}

impl Default for CountingMode {
    fn default() -> Self {
        CountingMode::ParentOnly
    }
}

impl FromStr for CountingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "parent-only" | "parent_only" | "parent" => Ok(CountingMode::ParentOnly),
            "flattened" | "flat" => Ok(CountingMode::Flattened),
            other => Err(format!(
                "invalid counting mode: {other} (expected \"parent-only\" or \"flattened\")"
            )),
        }
    }
}
