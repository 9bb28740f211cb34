// src/filter.rs

//! Visible subset of the top-level items.
//!
//! The three criteria are ANDed together; values inside one criterion are
//! ORed. An empty criterion matches everything.

use crate::curriculum::RoadmapItem;
use crate::progress::{resolved_status, ProgressMap};
use crate::types::Status;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub query: String,
    pub categories: Vec<String>,
    pub statuses: Vec<Status>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.categories.push(category.into());
        self
    }

    pub fn status(mut self, status: Status) -> Self {
        self.statuses.push(status);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty() && self.categories.is_empty() && self.statuses.is_empty()
    }
}

/// Case-insensitive match on the item or any direct child.
fn matches_text(item: &RoadmapItem, needle: &str) -> bool {
    item.text_matches(needle) || item.children.iter().any(|c| c.text_matches(needle))
}

pub fn matches(item: &RoadmapItem, progress: &ProgressMap, criteria: &FilterCriteria) -> bool {
    let needle = criteria.query.trim().to_lowercase();
    matches_with_needle(item, progress, criteria, &needle)
}

fn matches_with_needle(
    item: &RoadmapItem,
    progress: &ProgressMap,
    criteria: &FilterCriteria,
    needle: &str,
) -> bool {
    if !needle.is_empty() && !matches_text(item, needle) {
        return false;
    }
    if !criteria.categories.is_empty() && !criteria.categories.iter().any(|c| *c == item.category)
    {
        return false;
    }
    if !criteria.statuses.is_empty()
        && !criteria
            .statuses
            .contains(&resolved_status(progress, &item.id))
    {
        return false;
    }
    true
}

/// Items of `items` (top level only) that satisfy `criteria`, in input order.
pub fn apply_filters<'a>(
    items: &'a [RoadmapItem],
    progress: &ProgressMap,
    criteria: &FilterCriteria,
) -> Vec<&'a RoadmapItem> {
    let needle = criteria.query.trim().to_lowercase();
    items
        .iter()
        .filter(|item| matches_with_needle(item, progress, criteria, &needle))
        .collect()
}
