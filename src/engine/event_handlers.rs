// src/engine/event_handlers.rs

//! Event handling logic for the view core.

use serde::Serialize;
use tracing::{debug, warn};

use crate::curriculum::{dependents_of, flatten_one_level, RoadmapItem};
use crate::engine::core::ViewState;
use crate::layout::{apply_focus, apply_progress, compute_layout};
use crate::progress::{ItemProgress, ProgressMap};

/// Item plus its progress record, sent in response to a click.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemDetail {
    pub item: RoadmapItem,
    pub progress: ItemProgress,
    pub dependents: Vec<String>,
}

/// Command produced by the core, executed by the runtime shell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ViewCommand {
    /// Current layout, to be drawn.
    Frame(crate::layout::RoadmapLayout),
    Detail(ItemDetail),
    Error { message: String },
    RequestExit,
}

/// Decision returned by the core after handling a single event.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewStep {
    pub commands: Vec<ViewCommand>,
    pub keep_running: bool,
}

impl ViewStep {
    pub(crate) fn idle() -> Self {
        Self {
            commands: Vec::new(),
            keep_running: true,
        }
    }

    pub(crate) fn one(command: ViewCommand) -> Self {
        Self {
            commands: vec![command],
            keep_running: true,
        }
    }
}

fn frame(state: &ViewState) -> ViewStep {
    match &state.layout {
        Some(layout) => ViewStep::one(ViewCommand::Frame(layout.clone())),
        None => ViewStep::idle(),
    }
}

/// New curriculum contents.
///
/// Relayout happens only when the fingerprint differs from the one the
/// current layout was built from.
pub(crate) fn handle_curriculum_loaded(
    state: &mut ViewState,
    fingerprint: String,
    items: Vec<RoadmapItem>,
) -> ViewStep {
    if state.fingerprint.as_deref() == Some(fingerprint.as_str()) {
        debug!(%fingerprint, "curriculum unchanged; keeping layout");
        return ViewStep::idle();
    }

    let mut layout = match compute_layout(&items, state.options.policy, &state.options.spacing) {
        Ok(layout) => layout,
        Err(e) => {
            warn!(error = %e, "layout failed; keeping previous frame");
            return ViewStep::one(ViewCommand::Error {
                message: e.to_string(),
            });
        }
    };

    if let Some(focus) = state.focus.as_deref() {
        if layout.node(focus).is_none() {
            debug!(%focus, "focused item disappeared; clearing focus");
            state.focus = None;
        }
    }

    apply_progress(&mut layout, &state.progress);
    apply_focus(&mut layout, &items, state.focus.as_deref());

    state.items = items;
    state.fingerprint = Some(fingerprint);
    state.layout = Some(layout);
    state.relayouts += 1;
    debug!(relayouts = state.relayouts, "relayout complete");

    frame(state)
}

pub(crate) fn handle_curriculum_rejected(reason: String) -> ViewStep {
    warn!(%reason, "curriculum rejected; keeping previous frame");
    ViewStep::one(ViewCommand::Error { message: reason })
}

/// New progress map: recolor only.
pub(crate) fn handle_progress_loaded(state: &mut ViewState, progress: ProgressMap) -> ViewStep {
    if state.progress == progress {
        debug!("progress unchanged");
        return ViewStep::idle();
    }
    state.progress = progress;
    if let Some(layout) = state.layout.as_mut() {
        apply_progress(layout, &state.progress);
    }
    frame(state)
}

/// Hover: re-run the highlight pass with a new focus.
pub(crate) fn handle_hover(state: &mut ViewState, id: String) -> ViewStep {
    let Some(layout) = state.layout.as_mut() else {
        return ViewStep::idle();
    };
    if layout.node(&id).is_none() {
        debug!(item = %id, "hover on unknown node ignored");
        return ViewStep::idle();
    }
    if state.focus.as_deref() == Some(id.as_str()) {
        return ViewStep::idle();
    }
    apply_focus(layout, &state.items, Some(&id));
    state.focus = Some(id);
    frame(state)
}

pub(crate) fn handle_hover_cleared(state: &mut ViewState) -> ViewStep {
    if state.focus.take().is_none() {
        return ViewStep::idle();
    }
    if let Some(layout) = state.layout.as_mut() {
        apply_focus(layout, &state.items, None);
    }
    frame(state)
}

/// Click: report the item (top-level or direct child) with its record.
pub(crate) fn handle_click(state: &ViewState, id: String) -> ViewStep {
    let found = flatten_one_level(&state.items)
        .into_iter()
        .find(|item| item.id == id);

    match found {
        Some(item) => ViewStep::one(ViewCommand::Detail(ItemDetail {
            item: item.clone(),
            progress: state.progress.get(&id).cloned().unwrap_or_default(),
            dependents: dependents_of(&state.items, &id)
                .into_iter()
                .map(|d| d.id.clone())
                .collect(),
        })),
        None => ViewStep::one(ViewCommand::Error {
            message: format!("Item not found: {}", id),
        }),
    }
}
