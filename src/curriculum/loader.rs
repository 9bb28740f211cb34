// src/curriculum/loader.rs

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use crate::curriculum::graph::Curriculum;
use crate::curriculum::item::{flatten_one_level, RoadmapItem};
use crate::errors::{Result, RoadmapError};
use crate::fs::FileSystem;

/// On-disk wrapper: `[[item]]` tables in TOML, `{"items": [...]}` in JSON.
#[derive(Debug, Deserialize)]
struct CurriculumFile {
    #[serde(default, rename = "item", alias = "items")]
    items: Vec<RoadmapItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurriculumFormat {
    Toml,
    Json,
}

impl CurriculumFormat {
    /// `.json` selects JSON; everything else is read as TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => CurriculumFormat::Json,
            _ => CurriculumFormat::Toml,
        }
    }
}

/// Parse curriculum source text without structural validation.
pub fn parse_items(source: &str, format: CurriculumFormat) -> Result<Vec<RoadmapItem>> {
    let file: CurriculumFile = match format {
        CurriculumFormat::Toml => toml::from_str(source)?,
        CurriculumFormat::Json => serde_json::from_str(source).map_err(|e| {
            RoadmapError::ConfigError(format!("parsing curriculum JSON: {}", e))
        })?,
    };
    Ok(file.items)
}

/// Read, parse and validate the curriculum at `path`.
///
/// Categories that are not in `categories` are reported but accepted; the
/// analytics and export simply skip them.
pub fn load_curriculum(
    fs: &dyn FileSystem,
    path: &Path,
    categories: &[String],
) -> Result<Curriculum> {
    let source = fs.read_to_string(path)?;
    let curriculum = curriculum_from_source(&source, CurriculumFormat::from_path(path), categories)?;
    info!(
        ?path,
        items = curriculum.len(),
        "loaded curriculum"
    );
    Ok(curriculum)
}

/// Parse and validate curriculum text that was already read.
pub fn curriculum_from_source(
    source: &str,
    format: CurriculumFormat,
    categories: &[String],
) -> Result<Curriculum> {
    let items = parse_items(source, format)?;
    warn_unknown_categories(&items, categories);
    Curriculum::new(items)
}

pub fn warn_unknown_categories(items: &[RoadmapItem], categories: &[String]) {
    let known: HashSet<&str> = categories.iter().map(|c| c.as_str()).collect();
    let mut reported = HashSet::new();
    for item in flatten_one_level(items) {
        if !known.contains(item.category.as_str()) && reported.insert(item.category.as_str()) {
            warn!(
                item = %item.id,
                category = %item.category,
                "category is not in the configured list; it will be left out of grouped reports"
            );
        }
    }
}
