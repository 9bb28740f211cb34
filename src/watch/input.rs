// src/watch/input.rs

//! Line commands read from stdin in `watch` mode.
//!
//! ```text
//! click <id>
//! hover <id>
//! leave
//! quit
//! ```

use std::io::{self, BufRead, BufReader};
use std::thread;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::engine::RuntimeEvent;

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse_input_line(line: &str) -> Result<Option<RuntimeEvent>, String> {
    let mut parts = line.split_whitespace();
    let Some(command) = parts.next() else {
        return Ok(None);
    };
    let arg = parts.next();
    if parts.next().is_some() {
        return Err(format!("too many arguments: {}", line.trim()));
    }

    let event = match (command.to_lowercase().as_str(), arg) {
        ("click", Some(id)) => RuntimeEvent::NodeClicked(id.to_string()),
        ("hover", Some(id)) => RuntimeEvent::NodeHovered(id.to_string()),
        ("leave", None) => RuntimeEvent::HoverCleared,
        ("quit" | "exit", None) => RuntimeEvent::ShutdownRequested,
        ("click" | "hover", None) => return Err(format!("'{}' needs an item id", command)),
        _ => return Err(format!("unknown command: {}", line.trim())),
    };
    Ok(Some(event))
}

/// Forward stdin commands to the runtime.
///
/// Reads on a plain OS thread so a pending read never keeps the async
/// runtime from shutting down. EOF stops reading but does not end `watch`.
pub fn spawn_stdin_reader(runtime_tx: mpsc::Sender<RuntimeEvent>) -> thread::JoinHandle<()> {
    spawn_line_reader(BufReader::new(io::stdin()), runtime_tx)
}

/// Forward commands from any line source until EOF, a read error, or the
/// runtime going away.
pub fn spawn_line_reader<R>(
    reader: R,
    runtime_tx: mpsc::Sender<RuntimeEvent>,
) -> thread::JoinHandle<()>
where
    R: BufRead + Send + 'static,
{
    thread::spawn(move || {
        for line in reader.lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    warn!(error = %e, "failed to read commands; ignoring further input");
                    return;
                }
            };
            match parse_input_line(&line) {
                Ok(Some(event)) => {
                    if runtime_tx.blocking_send(event).is_err() {
                        return;
                    }
                }
                Ok(None) => {}
                Err(msg) => warn!("{}", msg),
            }
        }
        debug!("command input closed");
    })
}
