// src/layout/grouped.rs

use std::collections::BTreeMap;

use tracing::debug;

use crate::curriculum::RoadmapItem;
use crate::layout::levels::Levels;
use crate::layout::{LayoutSpacing, Position};

/// Indices of the items in one category, bucketed by level.
struct Band<'a> {
    category: &'a str,
    rows: BTreeMap<usize, Vec<usize>>,
}

impl Band<'_> {
    fn widest_row(&self) -> usize {
        self.rows.values().map(|r| r.len()).max().unwrap_or(0)
    }
}

/// Category bands, left to right in the order categories are first seen.
///
/// A band is as wide as its widest level row; each row is centred inside
/// the band and sits at `level * y_spacing`.
pub fn place(items: &[RoadmapItem], levels: &Levels, spacing: &LayoutSpacing) -> Vec<Position> {
    let mut bands: Vec<Band<'_>> = Vec::new();

    for (idx, item) in items.iter().enumerate() {
        let band_idx = match bands.iter().position(|b| b.category == item.category) {
            Some(i) => i,
            None => {
                bands.push(Band {
                    category: &item.category,
                    rows: BTreeMap::new(),
                });
                bands.len() - 1
            }
        };
        bands[band_idx]
            .rows
            .entry(levels.level_of(&item.id))
            .or_default()
            .push(idx);
    }

    let slot = spacing.node_width + spacing.node_gap;
    let mut positions = vec![Position::default(); items.len()];
    let mut band_x = 0.0;

    for band in bands.iter() {
        let band_width = band.widest_row() as f64 * slot;

        for (level, row) in band.rows.iter() {
            let row_width = row.len() as f64 * slot;
            let offset = band_x + (band_width - row_width) / 2.0;
            for (i, &idx) in row.iter().enumerate() {
                positions[idx] = Position {
                    x: offset + i as f64 * slot,
                    y: *level as f64 * spacing.y_spacing,
                };
            }
        }

        debug!(
            category = band.category,
            x = band_x,
            width = band_width,
            "placed category band"
        );
        band_x += band_width + spacing.band_gap;
    }

    positions
}
