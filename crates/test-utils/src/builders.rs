#![allow(dead_code)]

use roadmap_checker::config::{ConfigFile, RawConfigFile};
use roadmap_checker::curriculum::{Curriculum, RoadmapItem, Tutorial};
use roadmap_checker::progress::{ItemProgress, ProgressMap};
use roadmap_checker::types::{CountingMode, LayoutPolicy, Status};

/// Builder for `RoadmapItem`.
#[derive(Debug, Clone)]
pub struct ItemBuilder {
    item: RoadmapItem,
}

impl ItemBuilder {
    /// Item with title = id and category "Basic".
    pub fn new(id: &str) -> Self {
        Self {
            item: RoadmapItem {
                id: id.to_string(),
                title: id.to_string(),
                description: String::new(),
                required_output: false,
                dependencies: vec![],
                category: "Basic".to_string(),
                tutorials: vec![],
                children: vec![],
            },
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.item.title = title.to_string();
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.item.description = description.to_string();
        self
    }

    pub fn category(mut self, category: &str) -> Self {
        self.item.category = category.to_string();
        self
    }

    pub fn after(mut self, dep: &str) -> Self {
        self.item.dependencies.push(dep.to_string());
        self
    }

    pub fn required_output(mut self) -> Self {
        self.item.required_output = true;
        self
    }

    pub fn tutorial(mut self, title: &str, url: &str) -> Self {
        self.item.tutorials.push(Tutorial {
            title: title.to_string(),
            url: url.to_string(),
        });
        self
    }

    pub fn child(mut self, child: ItemBuilder) -> Self {
        self.item.children.push(child.build());
        self
    }

    pub fn build(self) -> RoadmapItem {
        self.item
    }
}

/// Builder for a validated `Curriculum`.
#[derive(Debug, Clone, Default)]
pub struct CurriculumBuilder {
    items: Vec<RoadmapItem>,
}

impl CurriculumBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn item(mut self, item: ItemBuilder) -> Self {
        self.items.push(item.build());
        self
    }

    pub fn items(&self) -> Vec<RoadmapItem> {
        self.items.clone()
    }

    pub fn build(self) -> Curriculum {
        Curriculum::new(self.items).expect("Failed to build valid curriculum from builder")
    }
}

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile::default(),
        }
    }

    pub fn categories(mut self, categories: &[&str]) -> Self {
        self.config.config.categories = categories.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn counting(mut self, mode: CountingMode) -> Self {
        self.config.config.counting = mode;
        self
    }

    pub fn layout_policy(mut self, policy: LayoutPolicy) -> Self {
        self.config.config.layout_policy = policy;
        self
    }

    pub fn storage_key(mut self, key: &str) -> Self {
        self.config.storage.key = key.to_string();
        self
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Progress map from `(id, status)` pairs. Completed records get a reason.
pub fn progress_of(entries: &[(&str, Status)]) -> ProgressMap {
    entries
        .iter()
        .map(|(id, status)| {
            let reason = (*status == Status::Completed).then(|| format!("finished {}", id));
            (
                id.to_string(),
                ItemProgress {
                    status: *status,
                    reason,
                    repo_url: None,
                },
            )
        })
        .collect()
}
