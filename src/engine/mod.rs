// src/engine/mod.rs

//! Event-driven view engine behind `watch` mode.
//!
//! Events come from the file watcher (curriculum or progress changed) and
//! from the presentation callbacks (click, hover, leave). The pure
//! [`ViewCore`] turns each event into commands; the async [`Runtime`]
//! shell reads events off a channel and hands commands to a [`ViewSink`].

use crate::curriculum::RoadmapItem;
use crate::progress::ProgressMap;

pub mod core;
pub mod event_handlers;
pub mod runtime;
pub mod sink;

pub use self::core::{ViewCore, ViewOptions};
pub use event_handlers::{ItemDetail, ViewCommand, ViewStep};
pub use runtime::Runtime;
pub use sink::{JsonLinesSink, RecordingSink, ViewSink};

/// Events flowing into the view runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum RuntimeEvent {
    /// The curriculum file was (re)read and passed structural validation.
    CurriculumLoaded {
        /// blake3 hex digest of the file contents.
        fingerprint: String,
        items: Vec<RoadmapItem>,
    },
    /// The curriculum file changed but could not be loaded.
    CurriculumRejected { reason: String },
    /// The progress file was (re)read.
    ProgressLoaded(ProgressMap),
    /// Node click: select an item for detail view.
    NodeClicked(String),
    /// Node hover: highlight the item's closure.
    NodeHovered(String),
    /// Pointer left the node: clear the highlight.
    HoverCleared,
    ShutdownRequested,
}
