// tests/curriculum_graph.rs

use roadmap_checker::curriculum::{build_index, dependents_of, Curriculum};
use roadmap_checker::errors::RoadmapError;
use roadmap_checker_test_utils::builders::{CurriculumBuilder, ItemBuilder};
use roadmap_checker_test_utils::fixtures::{diamond, web_roadmap};
use roadmap_checker_test_utils::init_tracing;

#[test]
fn index_covers_top_level_items_and_direct_children() {
    init_tracing();
    let items = web_roadmap();
    let index = build_index(&items).unwrap();

    assert_eq!(index.len(), 7);
    assert!(index.contains_key("javascript"));
    assert!(index.contains_key("js-async"));
    assert_eq!(index["js-basics"].title, "Basic Syntax");
}

#[test]
fn index_rejects_duplicate_ids_across_levels() {
    let items = vec![
        ItemBuilder::new("git").build(),
        ItemBuilder::new("js").child(ItemBuilder::new("git")).build(),
    ];

    match build_index(&items) {
        Err(RoadmapError::DuplicateId(id)) => assert_eq!(id, "git"),
        other => panic!("expected DuplicateId, got {:?}", other),
    }
}

#[test]
fn resolve_finds_children_and_reports_missing_ids() {
    let curriculum = Curriculum::new(web_roadmap()).unwrap();

    assert_eq!(curriculum.resolve("react").unwrap().category, "Framework");
    assert_eq!(curriculum.resolve("js-async").unwrap().title, "Promises");

    match curriculum.resolve("rust") {
        Err(RoadmapError::ItemNotFound(id)) => assert_eq!(id, "rust"),
        other => panic!("expected ItemNotFound, got {:?}", other),
    }
}

#[test]
fn dependents_are_direct_only() {
    let items = diamond();
    let ids: Vec<&str> = dependents_of(&items, "A").iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["B", "C"]);

    let ids: Vec<&str> = dependents_of(&items, "B").iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["D"]);

    assert!(dependents_of(&items, "D").is_empty());
}

#[test]
fn dependents_include_children_in_scan() {
    let curriculum = Curriculum::new(web_roadmap()).unwrap();
    let ids: Vec<&str> = curriculum
        .dependents_of("js-basics")
        .iter()
        .map(|i| i.id.as_str())
        .collect();
    assert_eq!(ids, vec!["js-async"]);
}

#[test]
fn unresolved_dependency_fails_fast() {
    let items = vec![ItemBuilder::new("react").after("javascript").build()];

    match Curriculum::new(items) {
        Err(RoadmapError::UnresolvedDependency { item, dependency }) => {
            assert_eq!(item, "react");
            assert_eq!(dependency, "javascript");
        }
        other => panic!("expected UnresolvedDependency, got {:?}", other),
    }
}

#[test]
fn self_dependency_is_rejected() {
    let items = vec![ItemBuilder::new("loop").after("loop").build()];
    let err = Curriculum::new(items).unwrap_err();
    assert!(matches!(err, RoadmapError::SelfDependency(ref id) if id == "loop"));
    assert!(err.is_structural());
}

#[test]
fn cycles_are_rejected() {
    let items = vec![
        ItemBuilder::new("A").after("B").build(),
        ItemBuilder::new("B").after("A").build(),
    ];

    match Curriculum::new(items) {
        Err(RoadmapError::CyclicGraph(msg)) => {
            assert!(msg.contains("cycle detected"));
            assert!(msg.contains('A') || msg.contains('B'));
        }
        other => panic!("expected CyclicGraph, got {:?}", other),
    }
}

#[test]
fn children_may_depend_on_ancestor_items() {
    let curriculum = CurriculumBuilder::new()
        .item(ItemBuilder::new("git"))
        .item(
            ItemBuilder::new("ci")
                .after("git")
                .child(ItemBuilder::new("ci-actions").after("git")),
        )
        .build();

    let sub = curriculum.sub_curriculum("ci").unwrap();
    assert_eq!(sub.len(), 1);
    assert_eq!(sub.items()[0].id, "ci-actions");
}

#[test]
fn children_cannot_depend_on_unknown_items() {
    let items = vec![ItemBuilder::new("ci")
        .child(ItemBuilder::new("ci-actions").after("docker"))
        .build()];

    assert!(matches!(
        Curriculum::new(items),
        Err(RoadmapError::UnresolvedDependency { .. })
    ));
}

#[test]
fn sub_curriculum_of_unknown_item_fails() {
    let curriculum = Curriculum::new(diamond()).unwrap();
    assert!(matches!(
        curriculum.sub_curriculum("Z"),
        Err(RoadmapError::ItemNotFound(_))
    ));
}

#[test]
fn flattened_lists_parents_before_children() {
    let curriculum = Curriculum::new(web_roadmap()).unwrap();
    let ids: Vec<&str> = curriculum.flattened().iter().map(|i| i.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["html-css", "git", "javascript", "react", "postgres", "js-basics", "js-async"]
    );
}
