// tests/properties.rs

use std::collections::HashSet;

use proptest::prelude::*;

use roadmap_checker::analytics::overall_completion;
use roadmap_checker::curriculum::RoadmapItem;
use roadmap_checker::filter::{apply_filters, matches, FilterCriteria};
use roadmap_checker::layout::{assign_levels, compute_layout, LayoutSpacing};
use roadmap_checker::progress::{from_json_bytes, to_json_bytes, ItemProgress, ProgressMap};
use roadmap_checker::types::{CountingMode, LayoutPolicy, Status};
use roadmap_checker_test_utils::builders::ItemBuilder;

const CATEGORIES: [&str; 4] = ["Basic", "Language", "Database", "DevOps"];

// Acyclic by construction: item N may only depend on items 0..N-1.
fn dag_strategy(max_items: usize) -> impl Strategy<Value = Vec<RoadmapItem>> {
    (1..=max_items).prop_flat_map(|n| {
        (
            proptest::collection::vec(proptest::collection::vec(any::<usize>(), 0..4), n),
            proptest::collection::vec(0..CATEGORIES.len(), n),
        )
            .prop_map(move |(raw_deps, cats)| {
                raw_deps
                    .into_iter()
                    .zip(cats)
                    .enumerate()
                    .map(|(i, (potential, cat))| {
                        let mut builder =
                            ItemBuilder::new(&format!("item_{}", i)).category(CATEGORIES[cat]);
                        if i > 0 {
                            let deps: HashSet<usize> = potential.into_iter().map(|d| d % i).collect();
                            let mut deps: Vec<usize> = deps.into_iter().collect();
                            deps.sort();
                            for d in deps {
                                builder = builder.after(&format!("item_{}", d));
                            }
                        }
                        builder.build()
                    })
                    .collect()
            })
    })
}

fn status_strategy() -> impl Strategy<Value = Status> {
    prop_oneof![
        Just(Status::NotStarted),
        Just(Status::InProgress),
        Just(Status::Completed),
    ]
}

fn record_strategy() -> impl Strategy<Value = ItemProgress> {
    (
        status_strategy(),
        proptest::option::of("[a-z ]{0,12}"),
        proptest::option::of("https?://[a-z]{1,8}\\.com"),
    )
        .prop_map(|(status, reason, repo_url)| ItemProgress {
            status,
            reason,
            repo_url,
        })
}

fn progress_for(items: &[RoadmapItem], statuses: &[Status]) -> ProgressMap {
    items
        .iter()
        .zip(statuses.iter().cycle())
        .map(|(item, status)| {
            (
                item.id.clone(),
                ItemProgress {
                    status: *status,
                    reason: None,
                    repo_url: None,
                },
            )
        })
        .collect()
}

proptest! {
    #[test]
    fn levels_exceed_every_dependency(items in dag_strategy(12)) {
        let levels = assign_levels(&items).unwrap();
        for item in &items {
            for dep in &item.dependencies {
                prop_assert!(levels.level_of(&item.id) > levels.level_of(dep));
            }
            if item.dependencies.is_empty() {
                prop_assert_eq!(levels.level_of(&item.id), 0);
            }
        }
    }

    #[test]
    fn layout_is_deterministic(items in dag_strategy(10), policy_idx in 0..3usize) {
        let policy = [LayoutPolicy::Simple, LayoutPolicy::Grouped, LayoutPolicy::Layered][policy_idx];
        let spacing = LayoutSpacing::default();
        let first = compute_layout(&items, policy, &spacing).unwrap();
        let second = compute_layout(&items, policy, &spacing).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn completing_more_items_never_lowers_completion(
        items in dag_strategy(10),
        statuses in proptest::collection::vec(status_strategy(), 1..10),
        extra in any::<usize>(),
    ) {
        let mut progress = progress_for(&items, &statuses);
        let before = overall_completion(&items, &progress, CountingMode::ParentOnly);

        let target = &items[extra % items.len()].id;
        if let Some(record) = progress.get_mut(target) {
            record.status = Status::Completed;
            record.reason = Some("done".into());
        }
        let after = overall_completion(&items, &progress, CountingMode::ParentOnly);
        prop_assert!(after.percentage >= before.percentage);
        prop_assert!(after.completed >= before.completed);
    }

    #[test]
    fn status_and_category_filters_commute(
        items in dag_strategy(10),
        statuses in proptest::collection::vec(status_strategy(), 1..10),
        wanted_status in status_strategy(),
        wanted_cat in 0..CATEGORIES.len(),
    ) {
        let progress = progress_for(&items, &statuses);
        let by_status = FilterCriteria::new().status(wanted_status);
        let by_category = FilterCriteria::new().category(CATEGORIES[wanted_cat]);

        let a: Vec<&str> = apply_filters(&items, &progress, &by_status)
            .into_iter()
            .filter(|i| matches(i, &progress, &by_category))
            .map(|i| i.id.as_str())
            .collect();
        let b: Vec<&str> = apply_filters(&items, &progress, &by_category)
            .into_iter()
            .filter(|i| matches(i, &progress, &by_status))
            .map(|i| i.id.as_str())
            .collect();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn persistence_round_trip_is_identity(
        map in proptest::collection::btree_map("[a-z-]{1,10}", record_strategy(), 0..8)
    ) {
        let bytes = to_json_bytes(&map).unwrap();
        let reloaded = from_json_bytes(&bytes).unwrap();
        prop_assert_eq!(reloaded, map);
    }
}
