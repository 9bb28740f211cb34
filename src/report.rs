// src/report.rs

//! Plain-text renderings used by the CLI commands.

use std::fmt::Write as _;

use crate::analytics::{CategoryCompletion, CompletionSummary};
use crate::curriculum::RoadmapItem;
use crate::errors::Result;
use crate::layout::{assign_levels, RoadmapLayout};
use crate::progress::{resolved_status, ItemProgress, ProgressMap};

/// Items with their levels; children are indented and leveled within their
/// own sub-graph.
pub fn render_tree(items: &[RoadmapItem], progress: &ProgressMap) -> Result<String> {
    let mut out = String::new();
    render_level(&mut out, items, progress, 0)?;
    Ok(out)
}

fn render_level(
    out: &mut String,
    items: &[RoadmapItem],
    progress: &ProgressMap,
    depth: usize,
) -> Result<()> {
    let levels = assign_levels(items)?;
    for item in items {
        let _ = writeln!(
            out,
            "{:indent$}[L{}] {} - {} ({}) [{}]",
            "",
            levels.level_of(&item.id),
            item.id,
            item.title,
            item.category,
            resolved_status(progress, &item.id),
            indent = depth * 2,
        );
        if item.has_children() {
            render_level(out, &item.children, progress, depth + 1)?;
        }
    }
    Ok(())
}

/// One line per node: id, position, level, status, opacity.
pub fn render_layout(layout: &RoadmapLayout) -> String {
    let mut out = String::new();
    for node in &layout.nodes {
        let _ = writeln!(
            out,
            "{:<24} x={:>8.1} y={:>8.1} level={} status={} opacity={}",
            node.id,
            node.position.x,
            node.position.y,
            node.level,
            node.status,
            node.style.opacity,
        );
    }
    for edge in &layout.edges {
        let _ = writeln!(out, "{} -> {}", edge.source, edge.target);
    }
    out
}

pub fn render_list(items: &[&RoadmapItem], progress: &ProgressMap) -> String {
    let mut out = String::new();
    for item in items {
        let _ = writeln!(
            out,
            "{:<24} {:<12} {:<10} {}",
            item.id,
            resolved_status(progress, &item.id).as_str(),
            item.category,
            item.title,
        );
    }
    out
}

pub fn render_item(item: &RoadmapItem, record: &ItemProgress, dependents: &[&RoadmapItem]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", item.title, item.id);
    let _ = writeln!(out, "  category:     {}", item.category);
    if !item.description.is_empty() {
        let _ = writeln!(out, "  description:  {}", item.description);
    }
    if item.required_output {
        let _ = writeln!(out, "  requires an output URL");
    }
    if !item.dependencies.is_empty() {
        let _ = writeln!(out, "  depends on:   {}", item.dependencies.join(", "));
    }
    if !dependents.is_empty() {
        let ids: Vec<&str> = dependents.iter().map(|d| d.id.as_str()).collect();
        let _ = writeln!(out, "  required by:  {}", ids.join(", "));
    }
    for child in &item.children {
        let _ = writeln!(out, "  child:        {} - {}", child.id, child.title);
    }
    for tutorial in &item.tutorials {
        let _ = writeln!(out, "  tutorial:     {} <{}>", tutorial.title, tutorial.url);
    }
    let _ = writeln!(out, "  status:       {}", record.status);
    if let Some(reason) = &record.reason {
        let _ = writeln!(out, "  reason:       {}", reason);
    }
    if let Some(url) = &record.repo_url {
        let _ = writeln!(out, "  repo:         {}", url);
    }
    out
}

pub fn render_dashboard(overall: &CompletionSummary, by_category: &[CategoryCompletion]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Overall: {}% ({}/{})",
        overall.percentage, overall.completed, overall.total
    );
    for group in by_category {
        let _ = writeln!(
            out,
            "  {:<12} {:>3}% ({}/{})",
            group.category,
            group.summary.percentage,
            group.summary.completed,
            group.summary.total
        );
    }
    out
}
