// src/config/validate.rs

use std::collections::HashSet;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{Result, RoadmapError};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::RoadmapError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.config, raw.storage, raw.layout))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_categories(cfg)?;
    validate_storage(cfg)?;
    validate_spacing(cfg)?;
    Ok(())
}

fn validate_categories(cfg: &RawConfigFile) -> Result<()> {
    if cfg.config.categories.is_empty() {
        return Err(RoadmapError::ConfigError(
            "[config].categories must list at least one category".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for category in cfg.config.categories.iter() {
        if category.trim().is_empty() {
            return Err(RoadmapError::ConfigError(
                "[config].categories contains an empty name".to_string(),
            ));
        }
        if !seen.insert(category.as_str()) {
            return Err(RoadmapError::ConfigError(format!(
                "[config].categories lists '{}' more than once",
                category
            )));
        }
    }
    Ok(())
}

fn validate_storage(cfg: &RawConfigFile) -> Result<()> {
    let key = cfg.storage.key.trim();
    if key.is_empty() {
        return Err(RoadmapError::ConfigError(
            "[storage].key must not be empty".to_string(),
        ));
    }
    if key.contains('/') || key.contains('\\') {
        return Err(RoadmapError::ConfigError(format!(
            "[storage].key must be a plain name, got '{}'",
            key
        )));
    }
    Ok(())
}

fn validate_spacing(cfg: &RawConfigFile) -> Result<()> {
    let l = &cfg.layout;
    let checks = [
        ("node_width", l.node_width),
        ("node_height", l.node_height),
        ("x_spacing", l.x_spacing),
        ("y_spacing", l.y_spacing),
    ];
    for (name, value) in checks {
        if !(value.is_finite() && value > 0.0) {
            return Err(RoadmapError::ConfigError(format!(
                "[layout].{} must be > 0 (got {})",
                name, value
            )));
        }
    }
    if !(l.node_gap.is_finite() && l.node_gap >= 0.0) || !(l.band_gap.is_finite() && l.band_gap >= 0.0) {
        return Err(RoadmapError::ConfigError(
            "[layout].node_gap and [layout].band_gap must be >= 0".to_string(),
        ));
    }
    Ok(())
}
