//! Small curricula shared across tests.

use roadmap_checker::curriculum::RoadmapItem;

use crate::builders::ItemBuilder;

/// `A`; `B` and `C` after `A`; `D` after both.
pub fn diamond() -> Vec<RoadmapItem> {
    vec![
        ItemBuilder::new("A").build(),
        ItemBuilder::new("B").after("A").build(),
        ItemBuilder::new("C").after("A").build(),
        ItemBuilder::new("D").after("B").after("C").build(),
    ]
}

/// A web curriculum with categories, descriptions and one nested item.
pub fn web_roadmap() -> Vec<RoadmapItem> {
    vec![
        ItemBuilder::new("html-css")
            .title("HTML & CSS")
            .description("Markup and styling basics")
            .category("Basic")
            .build(),
        ItemBuilder::new("git")
            .title("Git")
            .description("Version control")
            .category("Tooling")
            .build(),
        ItemBuilder::new("javascript")
            .title("JavaScript")
            .description("DOM, async, fetch")
            .category("Language")
            .after("html-css")
            .after("git")
            .child(
                ItemBuilder::new("js-basics")
                    .title("Basic Syntax")
                    .description("Variables and functions")
                    .category("Language"),
            )
            .child(
                ItemBuilder::new("js-async")
                    .title("Promises")
                    .description("async/await")
                    .category("Language")
                    .after("js-basics"),
            )
            .build(),
        ItemBuilder::new("react")
            .title("React")
            .description("Component based UI")
            .category("Framework")
            .required_output()
            .after("javascript")
            .build(),
        ItemBuilder::new("postgres")
            .title("PostgreSQL")
            .description("Relational database")
            .category("Database")
            .after("git")
            .build(),
    ]
}
