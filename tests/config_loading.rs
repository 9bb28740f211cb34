// tests/config_loading.rs

use std::io::Write;
use std::path::PathBuf;

use tempfile::{tempdir, NamedTempFile};

use roadmap_checker::config::{load_and_validate, load_or_default, DEFAULT_CATEGORIES};
use roadmap_checker::errors::RoadmapError;
use roadmap_checker::types::{CountingMode, LayoutPolicy};
use roadmap_checker_test_utils::builders::ConfigFileBuilder;

#[test]
fn empty_file_yields_defaults() {
    let file = NamedTempFile::new().unwrap();
    let cfg = load_and_validate(file.path()).unwrap();

    assert_eq!(cfg.categories().len(), DEFAULT_CATEGORIES.len());
    assert_eq!(cfg.categories()[0], "Basic");
    assert_eq!(cfg.config.counting, CountingMode::ParentOnly);
    assert_eq!(cfg.config.layout_policy, LayoutPolicy::Simple);
    assert_eq!(cfg.layout.x_spacing, 250.0);
    assert_eq!(cfg.layout.y_spacing, 150.0);
    assert_eq!(cfg.layout.node_width, 180.0);
}

#[test]
fn sections_are_parsed_and_paths_resolve_against_config_dir() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("Roadmap.toml");
    std::fs::write(
        &path,
        r#"
[config]
curriculum = "data/web.json"
categories = ["Basic", "Database"]
counting = "flattened"
layout_policy = "grouped"

[storage]
dir = "state"
key = "my-progress"

[layout]
x_spacing = 300.0
sweeps = 2
"#,
    )
    .unwrap();

    let cfg = load_and_validate(&path).unwrap();
    assert_eq!(cfg.categories(), &["Basic".to_string(), "Database".to_string()]);
    assert_eq!(cfg.config.counting, CountingMode::Flattened);
    assert_eq!(cfg.config.layout_policy, LayoutPolicy::Grouped);
    assert_eq!(cfg.layout.x_spacing, 300.0);
    assert_eq!(cfg.layout.y_spacing, 150.0);
    assert_eq!(cfg.layout.sweeps, 2);
    assert_eq!(cfg.curriculum_path(), dir.path().join("data/web.json"));
    assert_eq!(
        cfg.progress_path(),
        dir.path().join("state").join("my-progress.json")
    );
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = tempdir().unwrap();
    let cfg = load_or_default(dir.path().join("Roadmap.toml")).unwrap();
    assert_eq!(cfg.base_dir(), dir.path());
    assert_eq!(
        cfg.progress_path(),
        dir.path()
            .join(".roadmap")
            .join("roadmap-checker-progress.json")
    );
}

#[test]
fn explicit_missing_file_is_an_error() {
    let result = load_and_validate(PathBuf::from("/definitely/not/here/Roadmap.toml"));
    assert!(matches!(result, Err(RoadmapError::IoError(_))));
}

fn expect_config_error(contents: &str, needle: &str) {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", contents).unwrap();

    match load_and_validate(file.path()) {
        Err(RoadmapError::ConfigError(msg)) => {
            assert!(msg.contains(needle), "message {:?} lacks {:?}", msg, needle)
        }
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn empty_category_list_is_rejected() {
    expect_config_error("[config]\ncategories = []\n", "categories");
}

#[test]
fn duplicate_categories_are_rejected() {
    expect_config_error("[config]\ncategories = [\"Basic\", \"Basic\"]\n", "Basic");
}

#[test]
fn storage_key_must_be_a_plain_name() {
    expect_config_error("[storage]\nkey = \"a/b\"\n", "key");
    expect_config_error("[storage]\nkey = \"\"\n", "key");
}

#[test]
fn non_positive_spacing_is_rejected() {
    expect_config_error("[layout]\ny_spacing = 0.0\n", "y_spacing");
}

#[test]
fn unknown_counting_mode_is_a_toml_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "[config]\ncounting = \"sometimes\"\n").unwrap();
    assert!(matches!(
        load_and_validate(file.path()),
        Err(RoadmapError::TomlError(_))
    ));
}

#[test]
fn builder_produces_valid_config() {
    let cfg = ConfigFileBuilder::new()
        .categories(&["Basic"])
        .counting(CountingMode::Flattened)
        .layout_policy(LayoutPolicy::Layered)
        .build();
    assert_eq!(cfg.categories(), &["Basic".to_string()]);
    assert_eq!(cfg.config.layout_policy, LayoutPolicy::Layered);
}
