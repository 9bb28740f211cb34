// src/errors.rs

//! Crate-wide error type and result alias.

use std::fmt;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoadmapError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Item not found: {0}")]
    ItemNotFound(String),

    #[error("Duplicate item id: {0}")]
    DuplicateId(String),

    #[error("item '{item}' depends on unknown item '{dependency}'")]
    UnresolvedDependency { item: String, dependency: String },

    #[error("item '{0}' cannot depend on itself")]
    SelfDependency(String),

    #[error("Cycle detected in curriculum graph: {0}")]
    CyclicGraph(String),

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RoadmapError {
    /// Structural errors are raised while building or traversing the graph.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            RoadmapError::DuplicateId(_)
                | RoadmapError::UnresolvedDependency { .. }
                | RoadmapError::SelfDependency(_)
                | RoadmapError::CyclicGraph(_)
        )
    }
}

/// Which progress field a validation message refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressField {
    Status,
    Reason,
    RepoUrl,
}

impl ProgressField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProgressField::Status => "status",
            ProgressField::Reason => "reason",
            ProgressField::RepoUrl => "repoUrl",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: ProgressField,
    pub message: String,
}

/// Field-level messages collected while validating a progress record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: ProgressField, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// First message recorded for `field`, if any.
    pub fn message_for(&self, field: ProgressField) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field.as_str(), e.message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

pub type Result<T> = std::result::Result<T, RoadmapError>;
