// tests/export_sheet.rs

use chrono::NaiveDate;
use roadmap_checker::config::default_categories;
use roadmap_checker::export::{
    completed_items, generate_skill_sheet, skill_sheet_file_name, NOTHING_COMPLETED,
};
use roadmap_checker::progress::{ItemProgress, ProgressMap};
use roadmap_checker::types::Status;
use roadmap_checker_test_utils::builders::{progress_of, ItemBuilder};
use roadmap_checker_test_utils::fixtures::web_roadmap;

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
}

fn completed(reason: &str, repo_url: Option<&str>) -> ItemProgress {
    ItemProgress {
        status: Status::Completed,
        reason: Some(reason.to_string()),
        repo_url: repo_url.map(str::to_string),
    }
}

#[test]
fn file_name_carries_the_date() {
    assert_eq!(skill_sheet_file_name(date()), "roadmap-skills-2024-03-09.md");
}

#[test]
fn nothing_completed_yields_notice() {
    let sheet = generate_skill_sheet(
        &web_roadmap(),
        &progress_of(&[("git", Status::InProgress)]),
        &default_categories(),
        date(),
    );
    assert!(sheet.contains("Created: 2024-03-09"));
    assert!(sheet.contains(NOTHING_COMPLETED));
    assert!(!sheet.contains("###"));
}

#[test]
fn database_item_with_reason_and_no_repo_link() {
    let items = vec![ItemBuilder::new("X")
        .title("PostgreSQL")
        .description("Relational database")
        .category("Database")
        .build()];
    let mut progress = ProgressMap::new();
    progress.insert("X".into(), completed("used for relational modeling", None));

    let sheet = generate_skill_sheet(&items, &progress, &default_categories(), date());

    assert!(sheet.contains("## Completed skills (1)"));
    assert!(sheet.contains("### Database"));
    assert!(sheet.contains("#### PostgreSQL"));
    assert!(sheet.contains("**Description**: Relational database"));
    assert!(sheet.contains("used for relational modeling"));
    assert!(!sheet.contains("**Output**"));
    assert!(sheet.trim_end().ends_with("---"));
}

#[test]
fn repo_url_is_rendered_as_link() {
    let mut progress = ProgressMap::new();
    progress.insert(
        "react".into(),
        completed("component model", Some("https://github.com/me/app")),
    );

    let sheet = generate_skill_sheet(&web_roadmap(), &progress, &default_categories(), date());
    assert!(sheet.contains("**Output**: [https://github.com/me/app](https://github.com/me/app)"));
}

#[test]
fn sections_follow_category_list_and_children_are_included() {
    let progress = progress_of(&[
        ("postgres", Status::Completed),
        ("js-basics", Status::Completed),
        ("html-css", Status::Completed),
    ]);
    let sheet = generate_skill_sheet(&web_roadmap(), &progress, &default_categories(), date());

    let basic = sheet.find("### Basic").unwrap();
    let language = sheet.find("### Language").unwrap();
    let database = sheet.find("### Database").unwrap();
    assert!(basic < language && language < database);
    assert!(sheet.contains("#### Basic Syntax"));
    assert!(!sheet.contains("### Tooling"));
}

#[test]
fn items_within_category_follow_flattened_order() {
    let progress = progress_of(&[
        ("js-async", Status::Completed),
        ("javascript", Status::Completed),
        ("js-basics", Status::Completed),
    ]);
    let sheet = generate_skill_sheet(&web_roadmap(), &progress, &default_categories(), date());

    let parent = sheet.find("#### JavaScript").unwrap();
    let basics = sheet.find("#### Basic Syntax").unwrap();
    let promises = sheet.find("#### Promises").unwrap();
    assert!(parent < basics && basics < promises);
}

#[test]
fn unlisted_categories_are_dropped_from_sections() {
    let items = vec![
        ItemBuilder::new("figma").category("Design").build(),
        ItemBuilder::new("git").category("Tooling").build(),
    ];
    let progress = progress_of(&[("figma", Status::Completed), ("git", Status::Completed)]);

    let sheet = generate_skill_sheet(&items, &progress, &default_categories(), date());
    assert!(!sheet.contains("Design"));
    assert!(sheet.contains("### Tooling"));
    assert_eq!(completed_items(&items, &progress).len(), 2);
}

#[test]
fn empty_reason_is_omitted() {
    let items = vec![ItemBuilder::new("git").category("Tooling").build()];
    let mut progress = ProgressMap::new();
    progress.insert(
        "git".into(),
        ItemProgress {
            status: Status::Completed,
            reason: Some(String::new()),
            repo_url: None,
        },
    );

    let sheet = generate_skill_sheet(&items, &progress, &default_categories(), date());
    assert!(!sheet.contains("**Why / what I learned**"));
}
