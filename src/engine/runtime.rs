// src/engine/runtime.rs

use std::fmt;

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::errors::Result;

use super::core::ViewCore;
use super::sink::ViewSink;
use super::{RuntimeEvent, ViewCommand};

/// Async shell around [`ViewCore`]: reads events from a channel and passes
/// the resulting commands to a [`ViewSink`].
pub struct Runtime<S: ViewSink> {
    core: ViewCore,
    event_rx: mpsc::Receiver<RuntimeEvent>,
    sink: S,
}

impl<S: ViewSink> fmt::Debug for Runtime<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Runtime")
            .field("core", &self.core)
            .finish_non_exhaustive()
    }
}

impl<S: ViewSink> Runtime<S> {
    pub fn new(core: ViewCore, event_rx: mpsc::Receiver<RuntimeEvent>, sink: S) -> Self {
        Self {
            core,
            event_rx,
            sink,
        }
    }

    /// Main event loop. Returns the sink once the loop ends.
    pub async fn run(mut self) -> Result<S> {
        info!("view runtime started");

        loop {
            let event = match self.event_rx.recv().await {
                Some(e) => e,
                None => {
                    info!("runtime event channel closed; exiting");
                    break;
                }
            };

            debug!(?event, "runtime received event");

            let step = self.core.step(event);
            for command in step.commands {
                self.execute_command(command)?;
            }

            if !step.keep_running {
                info!("core requested exit; stopping runtime");
                break;
            }
        }

        info!("runtime exiting");
        Ok(self.sink)
    }

    fn execute_command(&mut self, command: ViewCommand) -> Result<()> {
        match command {
            ViewCommand::RequestExit => {
                info!("core issued RequestExit command");
            }
            other => self.sink.emit(&other)?,
        }
        Ok(())
    }
}
