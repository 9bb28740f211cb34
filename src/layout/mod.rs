// src/layout/mod.rs

//! Layout engine: turns an item list into positioned nodes and edges.
//!
//! - [`levels`] assigns each item its dependency depth.
//! - [`simple`], [`grouped`] and [`layered`] are the placement policies.
//! - [`edges`] emits one edge per dependency pair.
//! - [`style`] holds the recolor and highlight passes, which never move nodes.
//!
//! Input must be acyclic; a cycle is reported as `CyclicGraph`.

pub mod edges;
pub mod grouped;
pub mod layered;
pub mod levels;
pub mod simple;
pub mod style;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::curriculum::RoadmapItem;
use crate::errors::Result;
use crate::progress::ProgressMap;
use crate::types::{LayoutPolicy, Status};

pub use edges::{build_edges, edge_id};
pub use levels::{assign_levels, Levels};
pub use style::{apply_focus, apply_progress, highlight_closure, NodeStyle};

/// Geometry constants, configurable through `[layout]`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct LayoutSpacing {
    #[serde(default = "default_node_width")]
    pub node_width: f64,
    #[serde(default = "default_node_height")]
    pub node_height: f64,
    /// Horizontal distance between neighbouring node origins (simple, layered).
    #[serde(default = "default_x_spacing")]
    pub x_spacing: f64,
    /// Vertical distance between levels.
    #[serde(default = "default_y_spacing")]
    pub y_spacing: f64,
    /// Free space between nodes inside a category band (grouped).
    #[serde(default = "default_node_gap")]
    pub node_gap: f64,
    /// Free space between category bands (grouped).
    #[serde(default = "default_band_gap")]
    pub band_gap: f64,
    /// Upper bound on barycenter sweeps (layered).
    #[serde(default = "default_sweeps")]
    pub sweeps: usize,
}

fn default_node_width() -> f64 {
    180.0
}

fn default_node_height() -> f64 {
    80.0
}

fn default_x_spacing() -> f64 {
    250.0
}

fn default_y_spacing() -> f64 {
    150.0
}

fn default_node_gap() -> f64 {
    70.0
}

fn default_band_gap() -> f64 {
    100.0
}

fn default_sweeps() -> usize {
    8
}

impl Default for LayoutSpacing {
    fn default() -> Self {
        Self {
            node_width: default_node_width(),
            node_height: default_node_height(),
            x_spacing: default_x_spacing(),
            y_spacing: default_y_spacing(),
            node_gap: default_node_gap(),
            band_gap: default_band_gap(),
            sweeps: default_sweeps(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutNode {
    pub id: String,
    pub label: String,
    pub position: Position,
    pub level: usize,
    pub category: String,
    pub status: Status,
    pub style: NodeStyle,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutEdge {
    pub id: String,
    pub source: String,
    pub target: String,
}

/// Render-ready output: nodes in input order plus their edges.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoadmapLayout {
    pub policy: LayoutPolicy,
    pub nodes: Vec<LayoutNode>,
    pub edges: Vec<LayoutEdge>,
}

impl RoadmapLayout {
    pub fn node(&self, id: &str) -> Option<&LayoutNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Positions only, for comparing geometry across style passes.
    pub fn positions(&self) -> Vec<(&str, Position)> {
        self.nodes
            .iter()
            .map(|n| (n.id.as_str(), n.position))
            .collect()
    }
}

/// Lay out `items` from scratch with the given policy.
///
/// Every node starts with the not-started style; run
/// [`apply_progress`] to colour it.
pub fn compute_layout(
    items: &[RoadmapItem],
    policy: LayoutPolicy,
    spacing: &LayoutSpacing,
) -> Result<RoadmapLayout> {
    let levels = assign_levels(items)?;

    let positions = match policy {
        LayoutPolicy::Simple => simple::place(items, &levels, spacing),
        LayoutPolicy::Grouped => grouped::place(items, &levels, spacing),
        LayoutPolicy::Layered => layered::place(items, &levels, spacing),
    };

    let nodes = items
        .iter()
        .zip(positions)
        .map(|(item, position)| LayoutNode {
            id: item.id.clone(),
            label: item.title.clone(),
            position,
            level: levels.level_of(&item.id),
            category: item.category.clone(),
            status: Status::NotStarted,
            style: NodeStyle::default(),
        })
        .collect();

    let edges = build_edges(items);

    debug!(?policy, items = items.len(), "computed layout");

    Ok(RoadmapLayout {
        policy,
        nodes,
        edges,
    })
}

/// [`compute_layout`] followed by [`apply_progress`].
pub fn compute_colored_layout(
    items: &[RoadmapItem],
    policy: LayoutPolicy,
    spacing: &LayoutSpacing,
    progress: &ProgressMap,
) -> Result<RoadmapLayout> {
    let mut layout = compute_layout(items, policy, spacing)?;
    apply_progress(&mut layout, progress);
    Ok(layout)
}
