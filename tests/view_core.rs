// tests/view_core.rs

use std::path::Path;
use std::sync::Arc;

use tokio::sync::mpsc;

use roadmap_checker::config::default_categories;
use roadmap_checker::engine::{
    RecordingSink, Runtime, RuntimeEvent, ViewCommand, ViewCore, ViewOptions,
};
use roadmap_checker::fs::mock::MockFileSystem;
use roadmap_checker::fs::FileSystem;
use roadmap_checker::layout::style::{DIMMED_OPACITY, FULL_OPACITY};
use roadmap_checker::types::{LayoutPolicy, Status};
use roadmap_checker::watch::{curriculum_event, fingerprint, parse_input_line, progress_event};
use roadmap_checker_test_utils::builders::{progress_of, ItemBuilder};
use roadmap_checker_test_utils::fixtures::{diamond, web_roadmap};
use roadmap_checker_test_utils::{init_tracing, with_timeout};

fn loaded(fingerprint: &str, items: Vec<roadmap_checker::curriculum::RoadmapItem>) -> RuntimeEvent {
    RuntimeEvent::CurriculumLoaded {
        fingerprint: fingerprint.to_string(),
        items,
    }
}

fn frame_of(commands: &[ViewCommand]) -> &roadmap_checker::layout::RoadmapLayout {
    match commands {
        [ViewCommand::Frame(layout)] => layout,
        other => panic!("expected a single frame, got {:?}", other),
    }
}

#[test]
fn first_curriculum_produces_a_frame() {
    init_tracing();
    let mut core = ViewCore::new(ViewOptions::default());
    let step = core.step(loaded("h1", diamond()));

    assert!(step.keep_running);
    let layout = frame_of(&step.commands);
    assert_eq!(layout.nodes.len(), 4);
    assert_eq!(core.relayout_count(), 1);
}

#[test]
fn unchanged_fingerprint_skips_relayout() {
    let mut core = ViewCore::new(ViewOptions::default());
    core.step(loaded("h1", diamond()));

    let step = core.step(loaded("h1", diamond()));
    assert!(step.commands.is_empty());
    assert_eq!(core.relayout_count(), 1);

    let mut changed = diamond();
    changed.push(ItemBuilder::new("E").after("D").build());
    let step = core.step(loaded("h2", changed));
    assert_eq!(frame_of(&step.commands).nodes.len(), 5);
    assert_eq!(core.relayout_count(), 2);
}

#[test]
fn progress_change_recolors_without_relayout() {
    let mut core = ViewCore::new(ViewOptions::default());
    let step = core.step(loaded("h1", diamond()));
    let before = frame_of(&step.commands).positions().into_iter().map(|(_, p)| p).collect::<Vec<_>>();

    let step = core.step(RuntimeEvent::ProgressLoaded(progress_of(&[("A", Status::Completed)])));
    let layout = frame_of(&step.commands);
    assert_eq!(layout.node("A").unwrap().status, Status::Completed);
    let after = layout.positions().into_iter().map(|(_, p)| p).collect::<Vec<_>>();
    assert_eq!(before, after);
    assert_eq!(core.relayout_count(), 1);

    // Same map again: nothing to do.
    let step = core.step(RuntimeEvent::ProgressLoaded(progress_of(&[("A", Status::Completed)])));
    assert!(step.commands.is_empty());
}

#[test]
fn progress_before_curriculum_colours_first_frame() {
    let mut core = ViewCore::new(ViewOptions::default());
    let step = core.step(RuntimeEvent::ProgressLoaded(progress_of(&[("B", Status::InProgress)])));
    assert!(step.commands.is_empty());

    let step = core.step(loaded("h1", diamond()));
    assert_eq!(
        frame_of(&step.commands).node("B").unwrap().status,
        Status::InProgress
    );
}

#[test]
fn hover_and_leave_toggle_highlight() {
    let mut core = ViewCore::new(ViewOptions::default());
    core.step(loaded("h1", diamond()));

    let step = core.step(RuntimeEvent::NodeHovered("B".into()));
    let layout = frame_of(&step.commands);
    assert_eq!(layout.node("C").unwrap().style.opacity, DIMMED_OPACITY);
    assert_eq!(layout.node("D").unwrap().style.opacity, FULL_OPACITY);
    assert_eq!(core.focus(), Some("B"));

    // Hovering the same node again changes nothing.
    assert!(core.step(RuntimeEvent::NodeHovered("B".into())).commands.is_empty());

    let step = core.step(RuntimeEvent::HoverCleared);
    let layout = frame_of(&step.commands);
    assert!(layout.nodes.iter().all(|n| n.style.opacity == FULL_OPACITY));
    assert_eq!(core.focus(), None);
    assert_eq!(core.relayout_count(), 1);
}

#[test]
fn hover_on_unknown_node_is_ignored() {
    let mut core = ViewCore::new(ViewOptions::default());
    core.step(loaded("h1", diamond()));
    assert!(core.step(RuntimeEvent::NodeHovered("Z".into())).commands.is_empty());
    assert_eq!(core.focus(), None);
}

#[test]
fn focus_survives_relayout_when_item_remains() {
    let mut core = ViewCore::new(ViewOptions::default());
    core.step(loaded("h1", diamond()));
    core.step(RuntimeEvent::NodeHovered("A".into()));

    let mut changed = diamond();
    changed.push(ItemBuilder::new("E").build());
    let step = core.step(loaded("h2", changed));
    let layout = frame_of(&step.commands);
    assert_eq!(layout.node("E").unwrap().style.opacity, DIMMED_OPACITY);
    assert_eq!(core.focus(), Some("A"));

    let step = core.step(loaded("h3", vec![ItemBuilder::new("E").build()]));
    assert_eq!(frame_of(&step.commands).node("E").unwrap().style.opacity, FULL_OPACITY);
    assert_eq!(core.focus(), None);
}

#[test]
fn click_reports_detail_for_children_too() {
    let mut core = ViewCore::new(ViewOptions {
        policy: LayoutPolicy::Grouped,
        ..ViewOptions::default()
    });
    core.step(loaded("h1", web_roadmap()));
    core.step(RuntimeEvent::ProgressLoaded(progress_of(&[("js-basics", Status::Completed)])));

    let step = core.step(RuntimeEvent::NodeClicked("js-basics".into()));
    match step.commands.as_slice() {
        [ViewCommand::Detail(detail)] => {
            assert_eq!(detail.item.title, "Basic Syntax");
            assert_eq!(detail.progress.status, Status::Completed);
            assert_eq!(detail.dependents, vec!["js-async"]);
        }
        other => panic!("expected detail, got {:?}", other),
    }

    let step = core.step(RuntimeEvent::NodeClicked("nope".into()));
    assert!(matches!(step.commands.as_slice(), [ViewCommand::Error { .. }]));
}

#[test]
fn rejected_curriculum_keeps_previous_layout() {
    let mut core = ViewCore::new(ViewOptions::default());
    core.step(loaded("h1", diamond()));
    let step = core.step(RuntimeEvent::CurriculumRejected {
        reason: "cycle".into(),
    });
    assert!(matches!(step.commands.as_slice(), [ViewCommand::Error { message }] if message == "cycle"));
    assert_eq!(core.layout().unwrap().nodes.len(), 4);
}

#[test]
fn shutdown_stops_the_loop() {
    let mut core = ViewCore::new(ViewOptions::default());
    let step = core.step(RuntimeEvent::ShutdownRequested);
    assert!(!step.keep_running);
}

#[test]
fn frames_serialize_as_tagged_json() {
    let mut core = ViewCore::new(ViewOptions::default());
    let step = core.step(loaded("h1", diamond()));
    let json = serde_json::to_value(&step.commands[0]).unwrap();
    assert_eq!(json["type"], "frame");
    assert_eq!(json["nodes"][0]["id"], "A");

    let error = ViewCommand::Error {
        message: "boom".into(),
    };
    let json = serde_json::to_value(&error).unwrap();
    assert_eq!(json["type"], "error");
    assert_eq!(json["message"], "boom");
}

#[test]
fn input_lines_map_to_events() {
    assert_eq!(
        parse_input_line("click react").unwrap(),
        Some(RuntimeEvent::NodeClicked("react".into()))
    );
    assert_eq!(
        parse_input_line("  HOVER git ").unwrap(),
        Some(RuntimeEvent::NodeHovered("git".into()))
    );
    assert_eq!(parse_input_line("leave").unwrap(), Some(RuntimeEvent::HoverCleared));
    assert_eq!(parse_input_line("quit").unwrap(), Some(RuntimeEvent::ShutdownRequested));
    assert_eq!(parse_input_line("   ").unwrap(), None);
    assert!(parse_input_line("click").is_err());
    assert!(parse_input_line("dance now").is_err());
    assert!(parse_input_line("leave now").is_err());
}

#[test]
fn curriculum_event_fingerprints_contents() {
    let fs = MockFileSystem::new();
    let source = "[[item]]\nid = \"git\"\ntitle = \"Git\"\ncategory = \"Tooling\"\n";
    fs.add_file("roadmap.toml", source);

    match curriculum_event(&fs, Path::new("roadmap.toml"), &default_categories()) {
        RuntimeEvent::CurriculumLoaded { fingerprint: hash, items } => {
            assert_eq!(hash, fingerprint(source.as_bytes()));
            assert_eq!(items.len(), 1);
        }
        other => panic!("expected CurriculumLoaded, got {:?}", other),
    }
}

#[test]
fn invalid_curriculum_becomes_rejection() {
    let fs = MockFileSystem::new();
    fs.add_file(
        "roadmap.toml",
        "[[item]]\nid = \"a\"\ntitle = \"A\"\ncategory = \"Basic\"\ndependencies = [\"a\"]\n",
    );
    assert!(matches!(
        curriculum_event(&fs, Path::new("roadmap.toml"), &default_categories()),
        RuntimeEvent::CurriculumRejected { .. }
    ));
    assert!(matches!(
        curriculum_event(&fs, Path::new("missing.toml"), &default_categories()),
        RuntimeEvent::CurriculumRejected { .. }
    ));
}

#[test]
fn progress_event_tolerates_corrupt_file() {
    let fs = MockFileSystem::new();
    fs.add_file("progress.json", "oops");
    let shared: Arc<dyn FileSystem> = Arc::new(fs);
    assert_eq!(
        progress_event(shared, Path::new("progress.json")),
        RuntimeEvent::ProgressLoaded(Default::default())
    );
}

#[tokio::test]
async fn runtime_drives_core_until_shutdown() {
    init_tracing();
    let (tx, rx) = mpsc::channel(16);
    let runtime = Runtime::new(
        ViewCore::new(ViewOptions::default()),
        rx,
        RecordingSink::default(),
    );

    tx.send(loaded("h1", diamond())).await.unwrap();
    tx.send(RuntimeEvent::NodeHovered("A".into())).await.unwrap();
    tx.send(RuntimeEvent::NodeClicked("D".into())).await.unwrap();
    tx.send(RuntimeEvent::ShutdownRequested).await.unwrap();
    // Never processed: the loop stops at shutdown.
    tx.send(RuntimeEvent::HoverCleared).await.unwrap();

    let sink = with_timeout(runtime.run()).await.unwrap();
    assert_eq!(sink.commands.len(), 3);
    assert!(matches!(sink.commands[0], ViewCommand::Frame(_)));
    assert!(matches!(sink.commands[2], ViewCommand::Detail(_)));
}
