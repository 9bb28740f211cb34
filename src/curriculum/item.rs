// src/curriculum/item.rs

use serde::{Deserialize, Serialize};

/// A reference link attached to an item. Passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tutorial {
    pub title: String,
    pub url: String,
}

/// One node of the curriculum graph.
///
/// Mirrors the data file:
///
/// ```toml
/// [[item]]
/// id = "javascript"
/// title = "JavaScript"
/// description = "DOM, async, fetch"
/// required_output = true
/// dependencies = ["html-css", "git"]
/// category = "Language"
///
/// [[item.children]]
/// id = "js-basics"
/// title = "Basic Syntax"
/// category = "Language"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapItem {
    /// Stable key; progress records are stored under it.
    pub id: String,

    pub title: String,

    #[serde(default)]
    pub description: String,

    /// Completing the item is expected to produce an artifact URL.
    #[serde(default, alias = "requiredOutput")]
    pub required_output: bool,

    /// Prerequisite ids, resolved among siblings or in an ancestor graph.
    #[serde(default)]
    pub dependencies: Vec<String>,

    pub category: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tutorials: Vec<Tutorial>,

    /// Sub-curriculum scoped to this item, with its own dependency edges.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RoadmapItem>,
}

impl RoadmapItem {
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Case-insensitive substring match on title or description.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn text_matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

/// All items of `items` followed by all of their direct children.
///
/// Deeper levels are not included.
pub fn flatten_one_level(items: &[RoadmapItem]) -> Vec<&RoadmapItem> {
    items
        .iter()
        .chain(items.iter().flat_map(|item| item.children.iter()))
        .collect()
}
