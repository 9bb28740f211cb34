// src/analytics.rs

//! Completion percentages over the curriculum and the progress map.
//!
//! Pure functions; nothing here touches storage.

use serde::Serialize;

use crate::curriculum::{flatten_one_level, RoadmapItem};
use crate::progress::{is_completed, ProgressMap};
use crate::types::CountingMode;

/// Completed/total counts and the rounded percentage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CompletionSummary {
    pub completed: usize,
    pub total: usize,
    pub percentage: u32,
}

impl CompletionSummary {
    pub fn new(completed: usize, total: usize) -> Self {
        Self {
            completed,
            total,
            percentage: rounded_percentage(completed, total),
        }
    }
}

/// Per-category summary, in first-seen category order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCompletion {
    pub category: String,
    #[serde(flatten)]
    pub summary: CompletionSummary,
}

/// `round(100 * completed / total)`, rounding halves up; 0 when `total == 0`.
pub fn rounded_percentage(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let completed = completed as u64;
    let total = total as u64;
    ((200 * completed + total) / (2 * total)) as u32
}

fn counted_items(items: &[RoadmapItem], mode: CountingMode) -> Vec<&RoadmapItem> {
    match mode {
        CountingMode::ParentOnly => items.iter().collect(),
        CountingMode::Flattened => flatten_one_level(items),
    }
}

/// Overall completion of `items` under the given counting mode.
pub fn overall_completion(
    items: &[RoadmapItem],
    progress: &ProgressMap,
    mode: CountingMode,
) -> CompletionSummary {
    let counted = counted_items(items, mode);
    let completed = counted
        .iter()
        .filter(|item| is_completed(progress, &item.id))
        .count();
    CompletionSummary::new(completed, counted.len())
}

/// Completion grouped by category, preserving first-seen order.
///
/// With `Flattened`, children count under their own category.
pub fn completion_by_category(
    items: &[RoadmapItem],
    progress: &ProgressMap,
    mode: CountingMode,
) -> Vec<CategoryCompletion> {
    let mut groups: Vec<(String, usize, usize)> = Vec::new();

    for item in counted_items(items, mode) {
        let slot = match groups.iter().position(|(c, _, _)| *c == item.category) {
            Some(i) => i,
            None => {
                groups.push((item.category.clone(), 0, 0));
                groups.len() - 1
            }
        };
        let group = &mut groups[slot];
        group.2 += 1;
        if is_completed(progress, &item.id) {
            group.1 += 1;
        }
    }

    groups
        .into_iter()
        .map(|(category, completed, total)| CategoryCompletion {
            category,
            summary: CompletionSummary::new(completed, total),
        })
        .collect()
}

/// Reorder a per-category result by a configured category list.
///
/// Listed categories come first in list order; the rest keep first-seen
/// order after them.
pub fn ordered_by(
    mut groups: Vec<CategoryCompletion>,
    categories: &[String],
) -> Vec<CategoryCompletion> {
    groups.sort_by_key(|g| {
        categories
            .iter()
            .position(|c| *c == g.category)
            .unwrap_or(categories.len())
    });
    groups
}

/// Short line for the share page.
pub fn share_progress_text(percentage: u32) -> String {
    format!("Roadmap progress: {}% complete", percentage)
}
