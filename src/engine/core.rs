// src/engine/core.rs

//! Pure view state machine.
//!
//! [`ViewCore`] consumes [`RuntimeEvent`]s and returns [`ViewStep`]s. It has
//! no channels, no Tokio types and performs no IO, so it is tested directly.

use crate::curriculum::RoadmapItem;
use crate::engine::event_handlers::{
    handle_click, handle_curriculum_loaded, handle_curriculum_rejected, handle_hover,
    handle_hover_cleared, handle_progress_loaded, ViewStep,
};
use crate::engine::RuntimeEvent;
use crate::layout::{LayoutSpacing, RoadmapLayout};
use crate::progress::ProgressMap;
use crate::types::LayoutPolicy;

/// Layout settings used for every relayout.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewOptions {
    pub policy: LayoutPolicy,
    pub spacing: LayoutSpacing,
}

#[derive(Debug)]
pub(crate) struct ViewState {
    pub(crate) options: ViewOptions,
    pub(crate) items: Vec<RoadmapItem>,
    pub(crate) fingerprint: Option<String>,
    pub(crate) progress: ProgressMap,
    pub(crate) focus: Option<String>,
    pub(crate) layout: Option<RoadmapLayout>,
    pub(crate) relayouts: usize,
}

#[derive(Debug)]
pub struct ViewCore {
    state: ViewState,
}

impl ViewCore {
    pub fn new(options: ViewOptions) -> Self {
        Self {
            state: ViewState {
                options,
                items: Vec::new(),
                fingerprint: None,
                progress: ProgressMap::new(),
                focus: None,
                layout: None,
                relayouts: 0,
            },
        }
    }

    pub fn layout(&self) -> Option<&RoadmapLayout> {
        self.state.layout.as_ref()
    }

    pub fn focus(&self) -> Option<&str> {
        self.state.focus.as_deref()
    }

    /// How many times the geometry was recomputed.
    pub fn relayout_count(&self) -> usize {
        self.state.relayouts
    }

    pub fn step(&mut self, event: RuntimeEvent) -> ViewStep {
        match event {
            RuntimeEvent::CurriculumLoaded { fingerprint, items } => {
                handle_curriculum_loaded(&mut self.state, fingerprint, items)
            }
            RuntimeEvent::CurriculumRejected { reason } => handle_curriculum_rejected(reason),
            RuntimeEvent::ProgressLoaded(progress) => {
                handle_progress_loaded(&mut self.state, progress)
            }
            RuntimeEvent::NodeClicked(id) => handle_click(&self.state, id),
            RuntimeEvent::NodeHovered(id) => handle_hover(&mut self.state, id),
            RuntimeEvent::HoverCleared => handle_hover_cleared(&mut self.state),
            RuntimeEvent::ShutdownRequested => ViewStep {
                commands: Vec::new(),
                keep_running: false,
            },
        }
    }
}
