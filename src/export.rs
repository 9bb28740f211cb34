// src/export.rs

//! Skill sheet: a Markdown report of completed items grouped by category.

use chrono::NaiveDate;
use tracing::debug;

use crate::curriculum::{flatten_one_level, RoadmapItem};
use crate::progress::{ItemProgress, ProgressMap};

pub const SKILL_SHEET_TITLE: &str = "# Skill Sheet - Roadmap Progress";
pub const NOTHING_COMPLETED: &str = "> No items have been completed yet.";

/// `roadmap-skills-YYYY-MM-DD.md`
pub fn skill_sheet_file_name(date: NaiveDate) -> String {
    format!("roadmap-skills-{}.md", date.format("%Y-%m-%d"))
}

/// Completed items among the top-level items and their direct children,
/// top-level items first.
pub fn completed_items<'a>(
    items: &'a [RoadmapItem],
    progress: &'a ProgressMap,
) -> Vec<(&'a RoadmapItem, &'a ItemProgress)> {
    flatten_one_level(items)
        .into_iter()
        .filter_map(|item| {
            progress
                .get(&item.id)
                .filter(|p| p.is_completed())
                .map(|p| (item, p))
        })
        .collect()
}

/// Render the skill sheet.
///
/// Sections follow `categories`; completed items whose category is not
/// listed are left out of the sections but still counted in the total.
pub fn generate_skill_sheet(
    items: &[RoadmapItem],
    progress: &ProgressMap,
    categories: &[String],
    date: NaiveDate,
) -> String {
    let mut out = String::new();
    out.push_str(SKILL_SHEET_TITLE);
    out.push_str("\n\n");
    out.push_str(&format!("Created: {}\n\n", date.format("%Y-%m-%d")));

    let completed = completed_items(items, progress);
    if completed.is_empty() {
        out.push_str(NOTHING_COMPLETED);
        out.push('\n');
        return out;
    }

    out.push_str(&format!("## Completed skills ({})\n\n", completed.len()));

    let mut dropped = completed.len();
    for category in categories {
        let in_category: Vec<_> = completed
            .iter()
            .filter(|(item, _)| item.category == *category)
            .collect();
        if in_category.is_empty() {
            continue;
        }
        dropped = dropped.saturating_sub(in_category.len());

        out.push_str(&format!("### {}\n\n", category));
        for (item, record) in in_category {
            push_item(&mut out, item, record);
        }
    }

    if dropped > 0 {
        debug!(dropped, "completed items outside the category list were skipped");
    }
    out
}

fn push_item(out: &mut String, item: &RoadmapItem, record: &ItemProgress) {
    out.push_str(&format!("#### {}\n\n", item.title));
    out.push_str(&format!("**Description**: {}\n\n", item.description));

    let reason = record.reason_text();
    if !reason.is_empty() {
        out.push_str(&format!("**Why / what I learned**:\n{}\n\n", reason));
    }

    let url = record.repo_url_text();
    if !url.is_empty() {
        out.push_str(&format!("**Output**: [{url}]({url})\n\n"));
    }

    out.push_str("---\n\n");
}
