// src/curriculum/validate.rs

use std::collections::HashSet;

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;

use crate::curriculum::item::RoadmapItem;
use crate::errors::{Result, RoadmapError};

/// Strict structural checks over one sibling list and, recursively, over
/// every nested child list.
///
/// A dependency may point at a sibling or at any id in `ancestor_ids`.
pub(crate) fn validate_items(items: &[RoadmapItem], ancestor_ids: &HashSet<String>) -> Result<()> {
    let sibling_ids = unique_ids(items)?;

    for item in items {
        for dep in item.dependencies.iter() {
            if dep == &item.id {
                return Err(RoadmapError::SelfDependency(item.id.clone()));
            }
            if !sibling_ids.contains(dep.as_str()) && !ancestor_ids.contains(dep) {
                return Err(RoadmapError::UnresolvedDependency {
                    item: item.id.clone(),
                    dependency: dep.clone(),
                });
            }
        }
    }

    validate_acyclic(items)?;

    let has_children = items.iter().any(|i| i.has_children());
    if has_children {
        let mut scope = ancestor_ids.clone();
        scope.extend(sibling_ids.iter().map(|s| s.to_string()));
        for item in items.iter().filter(|i| i.has_children()) {
            validate_items(&item.children, &scope)?;
        }
    }

    Ok(())
}

fn unique_ids(items: &[RoadmapItem]) -> Result<HashSet<&str>> {
    let mut ids = HashSet::new();
    for item in items {
        if !ids.insert(item.id.as_str()) {
            return Err(RoadmapError::DuplicateId(item.id.clone()));
        }
    }
    Ok(ids)
}

/// Edge direction: dep -> item. Edges to ancestor ids are left out; they
/// cannot close a cycle within this sibling graph.
fn validate_acyclic(items: &[RoadmapItem]) -> Result<()> {
    let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();

    for item in items {
        graph.add_node(item.id.as_str());
    }

    for item in items {
        for dep in item.dependencies.iter() {
            if graph.contains_node(dep.as_str()) {
                graph.add_edge(dep.as_str(), item.id.as_str(), ());
            }
        }
    }

    match toposort(&graph, None) {
        Ok(_order) => Ok(()),
        Err(cycle) => Err(RoadmapError::CyclicGraph(format!(
            "cycle detected involving item '{}'",
            cycle.node_id()
        ))),
    }
}
