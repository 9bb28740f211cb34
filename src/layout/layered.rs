// src/layout/layered.rs

//! Sugiyama-style layered placement.
//!
//! 1. Ranks are the dependency levels.
//! 2. Order within each rank is refined with alternating barycenter sweeps,
//!    keeping the ordering with the fewest crossings seen.
//! 3. Each rank row is centred on the widest row.
//!
//! Ties are broken by input order, so the result is deterministic.

use std::cmp::Ordering;
use std::collections::HashMap;

use tracing::debug;

use crate::curriculum::RoadmapItem;
use crate::layout::levels::Levels;
use crate::layout::{LayoutSpacing, Position};

/// Adjacency between item indices, restricted to the laid-out set.
struct RankGraph {
    rank: Vec<usize>,
    /// Predecessors (dependencies) per node.
    preds: Vec<Vec<usize>>,
    /// Successors (dependents) per node.
    succs: Vec<Vec<usize>>,
}

impl RankGraph {
    fn new(items: &[RoadmapItem], levels: &Levels) -> Self {
        let index: HashMap<&str, usize> = items
            .iter()
            .enumerate()
            .map(|(i, item)| (item.id.as_str(), i))
            .collect();

        let n = items.len();
        let mut preds = vec![Vec::new(); n];
        let mut succs = vec![Vec::new(); n];
        for (i, item) in items.iter().enumerate() {
            for dep in item.dependencies.iter() {
                if let Some(&d) = index.get(dep.as_str()) {
                    if !preds[i].contains(&d) {
                        preds[i].push(d);
                        succs[d].push(i);
                    }
                }
            }
        }

        let rank = items.iter().map(|item| levels.level_of(&item.id)).collect();
        Self { rank, preds, succs }
    }
}

pub fn place(
    items: &[RoadmapItem],
    levels: &Levels,
    spacing: &LayoutSpacing,
) -> Vec<Position> {
    if items.is_empty() {
        return Vec::new();
    }

    let graph = RankGraph::new(items, levels);

    let mut ranks: Vec<Vec<usize>> = vec![Vec::new(); levels.max_level() + 1];
    for (i, &r) in graph.rank.iter().enumerate() {
        ranks[r].push(i);
    }

    minimize_crossings(&mut ranks, &graph, spacing.sweeps);

    let widest = ranks.iter().map(|r| r.len()).max().unwrap_or(0) as f64;
    let mut positions = vec![Position::default(); items.len()];
    for (r, row) in ranks.iter().enumerate() {
        let offset = (widest - row.len() as f64) * spacing.x_spacing / 2.0;
        for (order, &node) in row.iter().enumerate() {
            positions[node] = Position {
                x: offset + order as f64 * spacing.x_spacing,
                y: r as f64 * spacing.y_spacing,
            };
        }
    }

    positions
}

fn order_positions(ranks: &[Vec<usize>], n: usize) -> Vec<usize> {
    let mut pos = vec![0; n];
    for row in ranks {
        for (order, &node) in row.iter().enumerate() {
            pos[node] = order;
        }
    }
    pos
}

/// Mean position of `neighbors`; nodes without neighbors keep their slot.
fn barycenter(pos: &[usize], neighbors: &[usize], current: usize) -> f64 {
    if neighbors.is_empty() {
        return current as f64;
    }
    let sum: usize = neighbors.iter().map(|&nb| pos[nb]).sum();
    sum as f64 / neighbors.len() as f64
}

fn sweep_rank(row: &mut Vec<usize>, pos: &[usize], neighbors: &[Vec<usize>]) {
    let mut scored: Vec<(usize, f64)> = row
        .iter()
        .map(|&v| (v, barycenter(pos, &neighbors[v], pos[v])))
        .collect();
    scored.sort_by(|a, b| {
        a.1.partial_cmp(&b.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    *row = scored.into_iter().map(|(v, _)| v).collect();
}

/// Count pairwise crossings between edges that share a source rank and a
/// target rank.
fn count_crossings(ranks: &[Vec<usize>], graph: &RankGraph) -> usize {
    let n = graph.rank.len();
    let pos = order_positions(ranks, n);

    let mut edges: Vec<(usize, usize)> = Vec::new();
    for (target, preds) in graph.preds.iter().enumerate() {
        for &source in preds {
            edges.push((source, target));
        }
    }

    let mut crossings = 0;
    for (i, &(s1, t1)) in edges.iter().enumerate() {
        for &(s2, t2) in edges.iter().skip(i + 1) {
            if graph.rank[s1] != graph.rank[s2] || graph.rank[t1] != graph.rank[t2] {
                continue;
            }
            let (a, b) = (pos[s1].cmp(&pos[s2]), pos[t1].cmp(&pos[t2]));
            if (a == Ordering::Less && b == Ordering::Greater)
                || (a == Ordering::Greater && b == Ordering::Less)
            {
                crossings += 1;
            }
        }
    }
    crossings
}

fn minimize_crossings(ranks: &mut Vec<Vec<usize>>, graph: &RankGraph, max_sweeps: usize) {
    if ranks.len() <= 1 {
        return;
    }

    let n = graph.rank.len();
    let mut best = count_crossings(ranks, graph);
    let mut best_order = ranks.clone();

    for sweep in 0..max_sweeps {
        if best == 0 {
            break;
        }

        for r in 1..ranks.len() {
            let pos = order_positions(ranks, n);
            sweep_rank(&mut ranks[r], &pos, &graph.preds);
        }
        for r in (0..ranks.len() - 1).rev() {
            let pos = order_positions(ranks, n);
            sweep_rank(&mut ranks[r], &pos, &graph.succs);
        }

        let crossings = count_crossings(ranks, graph);
        debug!(sweep, crossings, best, "barycenter sweep");
        if crossings < best {
            best = crossings;
            best_order = ranks.clone();
        } else {
            break;
        }
    }

    *ranks = best_order;
}
