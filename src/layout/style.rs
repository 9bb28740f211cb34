// src/layout/style.rs

//! Style passes over an existing layout. Neither pass touches positions.

use std::collections::HashSet;

use serde::Serialize;

use crate::curriculum::{dependents_of, flatten_one_level, RoadmapItem};
use crate::layout::RoadmapLayout;
use crate::progress::{resolved_status, ProgressMap};
use crate::types::Status;

/// Opacity for nodes outside the highlighted closure.
pub const DIMMED_OPACITY: f32 = 0.3;
pub const FULL_OPACITY: f32 = 1.0;

/// Visual hints for one node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeStyle {
    pub background: String,
    pub border: String,
    pub opacity: f32,
}

impl NodeStyle {
    pub fn for_status(status: Status) -> Self {
        let (background, border) = status_colors(status);
        Self {
            background: background.to_string(),
            border: border.to_string(),
            opacity: FULL_OPACITY,
        }
    }
}

impl Default for NodeStyle {
    fn default() -> Self {
        Self::for_status(Status::NotStarted)
    }
}

fn status_colors(status: Status) -> (&'static str, &'static str) {
    match status {
        Status::Completed => ("#dcfce7", "2px solid #22c55e"),
        Status::InProgress => ("#dbeafe", "2px solid #3b82f6"),
        Status::NotStarted => ("#ffffff", "1px solid #9ca3af"),
    }
}

/// Recompute every node's status colours from `progress`.
///
/// Idempotent; opacity and geometry are left as they are.
pub fn apply_progress(layout: &mut RoadmapLayout, progress: &ProgressMap) {
    for node in layout.nodes.iter_mut() {
        let status = resolved_status(progress, &node.id);
        let (background, border) = status_colors(status);
        node.status = status;
        node.style.background = background.to_string();
        node.style.border = border.to_string();
    }
}

/// The focused item, its direct dependencies and its direct dependents.
pub fn highlight_closure(items: &[RoadmapItem], focus: &str) -> HashSet<String> {
    let mut closure = HashSet::new();
    closure.insert(focus.to_string());

    if let Some(item) = flatten_one_level(items).into_iter().find(|i| i.id == focus) {
        closure.extend(item.dependencies.iter().cloned());
    }
    closure.extend(
        dependents_of(items, focus)
            .into_iter()
            .map(|item| item.id.clone()),
    );
    closure
}

/// Dim every node outside the focus closure; `None` restores full opacity.
pub fn apply_focus(layout: &mut RoadmapLayout, items: &[RoadmapItem], focus: Option<&str>) {
    match focus {
        Some(id) => {
            let closure = highlight_closure(items, id);
            for node in layout.nodes.iter_mut() {
                node.style.opacity = if closure.contains(&node.id) {
                    FULL_OPACITY
                } else {
                    DIMMED_OPACITY
                };
            }
        }
        None => {
            for node in layout.nodes.iter_mut() {
                node.style.opacity = FULL_OPACITY;
            }
        }
    }
}
