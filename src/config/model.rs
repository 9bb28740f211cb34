// src/config/model.rs

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::layout::LayoutSpacing;
use crate::types::{CountingMode, LayoutPolicy};

/// Category order used when nothing else is configured.
pub const DEFAULT_CATEGORIES: [&str; 8] = [
    "Basic",
    "Language",
    "Framework",
    "Tooling",
    "Backend",
    "Database",
    "Testing",
    "DevOps",
];

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [config]
/// curriculum = "data/roadmap.toml"
/// categories = ["Basic", "Language", "Framework"]
/// counting = "flattened"
/// layout_policy = "grouped"
///
/// [storage]
/// dir = ".roadmap"
/// key = "roadmap-checker-progress"
///
/// [layout]
/// x_spacing = 250.0
/// y_spacing = 150.0
/// ```
///
/// All sections are optional and have reasonable defaults.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawConfigFile {
    #[serde(default)]
    pub config: ConfigSection,

    #[serde(default)]
    pub storage: StorageSection,

    #[serde(default)]
    pub layout: LayoutSpacing,
}

/// Validated configuration. Construct through `TryFrom<RawConfigFile>`.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub config: ConfigSection,
    pub storage: StorageSection,
    pub layout: LayoutSpacing,
    /// Directory relative paths are resolved against (the config file's parent).
    base_dir: PathBuf,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(
        config: ConfigSection,
        storage: StorageSection,
        layout: LayoutSpacing,
    ) -> Self {
        Self {
            config,
            storage,
            layout,
            base_dir: PathBuf::from("."),
        }
    }

    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Curriculum file, resolved against the config directory.
    pub fn curriculum_path(&self) -> PathBuf {
        self.resolve(&self.config.curriculum)
    }

    /// Progress file: `<storage.dir>/<storage.key>.json`.
    pub fn progress_path(&self) -> PathBuf {
        self.resolve(&self.storage.dir)
            .join(format!("{}.json", self.storage.key))
    }

    pub fn categories(&self) -> &[String] {
        &self.config.categories
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }
}

/// `[config]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigSection {
    /// Curriculum data file (`.toml` or `.json`).
    #[serde(default = "default_curriculum")]
    pub curriculum: PathBuf,

    /// Ordered category list used for grouping in analytics, export and the
    /// grouped layout.
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,

    /// Whether analytics count children alongside their parent.
    #[serde(default)]
    pub counting: CountingMode,

    #[serde(default)]
    pub layout_policy: LayoutPolicy,
}

fn default_curriculum() -> PathBuf {
    PathBuf::from("data/roadmap.toml")
}

pub fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
}

impl Default for ConfigSection {
    fn default() -> Self {
        Self {
            curriculum: default_curriculum(),
            categories: default_categories(),
            counting: CountingMode::default(),
            layout_policy: LayoutPolicy::default(),
        }
    }
}

/// `[storage]` section: where the progress map is persisted.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageSection {
    #[serde(default = "default_storage_dir")]
    pub dir: PathBuf,

    /// Well-known key the progress map is stored under.
    #[serde(default = "default_storage_key")]
    pub key: String,
}

fn default_storage_dir() -> PathBuf {
    PathBuf::from(".roadmap")
}

fn default_storage_key() -> String {
    "roadmap-checker-progress".to_string()
}

impl Default for StorageSection {
    fn default() -> Self {
        Self {
            dir: default_storage_dir(),
            key: default_storage_key(),
        }
    }
}
