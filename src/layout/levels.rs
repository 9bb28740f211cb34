// src/layout/levels.rs

//! Level assignment: longest prerequisite chain beneath each item.

use std::collections::HashMap;

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;
use tracing::debug;

use crate::curriculum::RoadmapItem;
use crate::errors::{Result, RoadmapError};

/// Level per item id for one layout invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Levels {
    by_id: HashMap<String, usize>,
    max: usize,
}

impl Levels {
    pub fn get(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    /// Level of `id`; ids outside the laid-out set count as level 0.
    pub fn level_of(&self, id: &str) -> usize {
        self.get(id).unwrap_or(0)
    }

    pub fn max_level(&self) -> usize {
        self.max
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// Compute `level(id)` for every item in `items`.
///
/// - No dependencies: level 0.
/// - Otherwise: `1 + max(level(dep))` over the dependencies present in
///   `items`. Dependencies missing from `items` are ignored, so filtered
///   subsets still lay out.
///
/// Walks a topological order instead of recursing, and fails with
/// [`RoadmapError::CyclicGraph`] when the items contain a cycle (including
/// an item that lists itself).
pub fn assign_levels(items: &[RoadmapItem]) -> Result<Levels> {
    let by_id: HashMap<&str, &RoadmapItem> =
        items.iter().map(|item| (item.id.as_str(), item)).collect();

    // Edge direction: dep -> item.
    let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();
    for item in items {
        graph.add_node(item.id.as_str());
    }
    for item in items {
        for dep in item.dependencies.iter() {
            if by_id.contains_key(dep.as_str()) {
                graph.add_edge(dep.as_str(), item.id.as_str(), ());
            }
        }
    }

    let order = toposort(&graph, None).map_err(|cycle| {
        RoadmapError::CyclicGraph(format!(
            "cannot assign levels: cycle involving item '{}'",
            cycle.node_id()
        ))
    })?;

    let mut levels: HashMap<String, usize> = HashMap::with_capacity(items.len());
    let mut max = 0;
    for id in order {
        let level = by_id
            .get(id)
            .map(|item| {
                item.dependencies
                    .iter()
                    .filter_map(|dep| levels.get(dep.as_str()))
                    .map(|l| l + 1)
                    .max()
                    .unwrap_or(0)
            })
            .unwrap_or(0);
        max = max.max(level);
        levels.insert(id.to_string(), level);
    }

    debug!(items = items.len(), max_level = max, "assigned levels");

    Ok(Levels { by_id: levels, max })
}
