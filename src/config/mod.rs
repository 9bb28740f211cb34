// src/config/mod.rs

//! Configuration loading and validation for roadmap-checker.
//!
//! - `model.rs`: the TOML-backed data model.
//! - `loader.rs`: reading a config file from disk.
//! - `validate.rs`: turning a `RawConfigFile` into a checked `ConfigFile`.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path, load_or_default};
pub use model::{
    default_categories, ConfigFile, ConfigSection, RawConfigFile, StorageSection,
    DEFAULT_CATEGORIES,
};
