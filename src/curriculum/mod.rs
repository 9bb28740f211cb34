// src/curriculum/mod.rs

//! Curriculum graph model.
//!
//! - [`item`] defines `RoadmapItem` and its passthrough data.
//! - [`graph`] holds the validated graph and answers structural queries.
//! - [`validate`] runs the strict structural checks.
//! - [`loader`] reads curriculum data files (TOML or JSON).

pub mod graph;
pub mod item;
pub mod loader;
pub mod validate;

pub use graph::{build_index, dependents_of, Curriculum};
pub use item::{flatten_one_level, RoadmapItem, Tutorial};
pub use loader::{
    curriculum_from_source, load_curriculum, parse_items, warn_unknown_categories, CurriculumFormat,
};
