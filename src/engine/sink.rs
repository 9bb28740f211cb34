// src/engine/sink.rs

use std::io::Write;

use anyhow::{Context, Result};

use crate::engine::event_handlers::ViewCommand;

/// Where the runtime sends frames, details and errors.
pub trait ViewSink: Send {
    fn emit(&mut self, command: &ViewCommand) -> Result<()>;
}

/// Writes each command as one JSON object per line.
#[derive(Debug)]
pub struct JsonLinesSink<W: Write + Send> {
    out: W,
}

impl<W: Write + Send> JsonLinesSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> ViewSink for JsonLinesSink<W> {
    fn emit(&mut self, command: &ViewCommand) -> Result<()> {
        serde_json::to_writer(&mut self.out, command).context("serializing view command")?;
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        Ok(())
    }
}

/// Collects commands in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub commands: Vec<ViewCommand>,
}

impl ViewSink for RecordingSink {
    fn emit(&mut self, command: &ViewCommand) -> Result<()> {
        self.commands.push(command.clone());
        Ok(())
    }
}
