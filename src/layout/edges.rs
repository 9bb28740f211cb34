// src/layout/edges.rs

use std::collections::HashSet;

use tracing::debug;

use crate::curriculum::RoadmapItem;
use crate::layout::LayoutEdge;

/// Stable identity of the edge `dependency -> item`.
pub fn edge_id(dependency: &str, item: &str) -> String {
    format!("{}-{}", dependency, item)
}

/// One edge per `(dependency -> item)` pair whose endpoints are both in
/// `items`. Repeated dependency entries on one item collapse to one edge.
pub fn build_edges(items: &[RoadmapItem]) -> Vec<LayoutEdge> {
    let present: HashSet<&str> = items.iter().map(|i| i.id.as_str()).collect();
    let mut seen: HashSet<(&str, &str)> = HashSet::new();
    let mut edges = Vec::new();

    for item in items {
        for dep in item.dependencies.iter() {
            if !present.contains(dep.as_str()) {
                debug!(item = %item.id, dep = %dep, "dependency outside laid-out set; no edge");
                continue;
            }
            if !seen.insert((dep.as_str(), item.id.as_str())) {
                debug!(item = %item.id, dep = %dep, "duplicate dependency entry collapsed");
                continue;
            }
            edges.push(LayoutEdge {
                id: edge_id(dep, &item.id),
                source: dep.clone(),
                target: item.id.clone(),
            });
        }
    }

    edges
}
