// src/curriculum/graph.rs

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::curriculum::item::{flatten_one_level, RoadmapItem};
use crate::curriculum::validate::validate_items;
use crate::errors::{Result, RoadmapError};

/// Position of an indexed item: top-level slot, plus child slot if nested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ItemSlot {
    top: usize,
    child: Option<usize>,
}

/// Index `items` and their direct children by id.
///
/// Fails with [`RoadmapError::DuplicateId`] if two of them share an id.
pub fn build_index(items: &[RoadmapItem]) -> Result<HashMap<&str, &RoadmapItem>> {
    let mut index = HashMap::new();
    for item in flatten_one_level(items) {
        if index.insert(item.id.as_str(), item).is_some() {
            return Err(RoadmapError::DuplicateId(item.id.clone()));
        }
    }
    Ok(index)
}

/// Items among `items` (and their direct children) whose `dependencies`
/// contain `id`. Linear scan, recomputed on every call.
pub fn dependents_of<'a>(items: &'a [RoadmapItem], id: &str) -> Vec<&'a RoadmapItem> {
    flatten_one_level(items)
        .into_iter()
        .filter(|item| item.dependencies.iter().any(|dep| dep == id))
        .collect()
}

/// A validated curriculum graph.
///
/// Owns the item list and an id index over the items plus their direct
/// children. Deeper levels are reached through [`Curriculum::sub_curriculum`].
#[derive(Debug, Clone)]
pub struct Curriculum {
    items: Vec<RoadmapItem>,
    index: HashMap<String, ItemSlot>,
    /// Ids of enclosing graphs, valid as dependency targets for nested graphs.
    ancestor_ids: HashSet<String>,
}

impl Curriculum {
    /// Build a top-level curriculum, failing fast on structural errors:
    /// duplicate ids, unresolved or self dependencies, and cycles.
    pub fn new(items: Vec<RoadmapItem>) -> Result<Self> {
        Self::with_ancestors(items, HashSet::new())
    }

    fn with_ancestors(items: Vec<RoadmapItem>, ancestor_ids: HashSet<String>) -> Result<Self> {
        let mut index = HashMap::new();
        for (top, item) in items.iter().enumerate() {
            if index
                .insert(item.id.clone(), ItemSlot { top, child: None })
                .is_some()
            {
                return Err(RoadmapError::DuplicateId(item.id.clone()));
            }
        }
        for (top, item) in items.iter().enumerate() {
            for (child, c) in item.children.iter().enumerate() {
                if index
                    .insert(
                        c.id.clone(),
                        ItemSlot {
                            top,
                            child: Some(child),
                        },
                    )
                    .is_some()
                {
                    return Err(RoadmapError::DuplicateId(c.id.clone()));
                }
            }
        }

        validate_items(&items, &ancestor_ids)?;

        debug!(
            items = items.len(),
            indexed = index.len(),
            "curriculum graph built"
        );

        Ok(Self {
            items,
            index,
            ancestor_ids,
        })
    }

    /// The active item set (this graph's own level).
    pub fn items(&self) -> &[RoadmapItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<RoadmapItem> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Look up an item (top-level or direct child) by id.
    pub fn resolve(&self, id: &str) -> Result<&RoadmapItem> {
        let slot = self
            .index
            .get(id)
            .ok_or_else(|| RoadmapError::ItemNotFound(id.to_string()))?;
        let top = &self.items[slot.top];
        Ok(match slot.child {
            Some(child) => &top.children[child],
            None => top,
        })
    }

    /// Items that list `id` as a direct dependency.
    pub fn dependents_of(&self, id: &str) -> Vec<&RoadmapItem> {
        dependents_of(&self.items, id)
    }

    /// Top-level items plus their direct children.
    pub fn flattened(&self) -> Vec<&RoadmapItem> {
        flatten_one_level(&self.items)
    }

    /// Open the children of `id` as an independent graph.
    ///
    /// Children may depend on their siblings or on any item of an enclosing
    /// graph; the parent's own edges do not carry over.
    pub fn sub_curriculum(&self, id: &str) -> Result<Curriculum> {
        let parent = self.resolve(id)?;
        let mut ancestors = self.ancestor_ids.clone();
        ancestors.extend(self.items.iter().map(|i| i.id.clone()));
        // Siblings of a nested parent are also in scope.
        if let Some(slot) = self.index.get(id) {
            if slot.child.is_some() {
                ancestors.extend(
                    self.items[slot.top]
                        .children
                        .iter()
                        .map(|c| c.id.clone()),
                );
            }
        }
        Self::with_ancestors(parent.children.clone(), ancestors)
    }
}
