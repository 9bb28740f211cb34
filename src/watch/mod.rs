// src/watch/mod.rs

//! File watching and stdin input for `watch` mode.
//!
//! - [`watcher`] wires `notify` to the runtime channel.
//! - [`event_handler`] rereads a changed file into a runtime event.
//! - [`hash`] fingerprints curriculum contents so unchanged saves do not
//!   trigger a relayout.
//! - [`input`] parses the click/hover/leave/quit line commands.

pub mod event_handler;
pub mod hash;
pub mod input;
pub mod path_utils;
pub mod watcher;

pub use event_handler::{curriculum_event, progress_event, WatchSources};
pub use hash::{fingerprint, fingerprint_file};
pub use input::{parse_input_line, spawn_line_reader, spawn_stdin_reader};
pub use watcher::{spawn_watcher, WatcherHandle};
