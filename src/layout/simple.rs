// src/layout/simple.rs

use std::collections::HashMap;

use crate::curriculum::RoadmapItem;
use crate::layout::levels::Levels;
use crate::layout::{LayoutSpacing, Position};

/// One row per level; items fill their row left to right in input order.
pub fn place(items: &[RoadmapItem], levels: &Levels, spacing: &LayoutSpacing) -> Vec<Position> {
    let mut level_counts: HashMap<usize, usize> = HashMap::new();

    items
        .iter()
        .map(|item| {
            let level = levels.level_of(&item.id);
            let count = level_counts.entry(level).or_insert(0);
            let position = Position {
                x: *count as f64 * spacing.x_spacing,
                y: level as f64 * spacing.y_spacing,
            };
            *count += 1;
            position
        })
        .collect()
}
