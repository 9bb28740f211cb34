// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::types::{CountingMode, LayoutPolicy, Status};

/// Command-line arguments for `roadmap-checker`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "roadmap-checker",
    version,
    about = "Track progress through a curriculum dependency graph.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// Default: `Roadmap.toml` in the current working directory; built-in
    /// defaults are used if that file does not exist.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `ROADMAP_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Validate the curriculum and print it with dependency levels.
    Check,

    /// Compute the layout of the curriculum (or of one item's children).
    Layout(LayoutArgs),

    /// List top-level items matching the filters.
    List(ListArgs),

    /// Show one item with its progress record.
    Show {
        /// Item id.
        id: String,
    },

    /// Update the progress of one item (validated).
    Set(SetArgs),

    /// Print overall and per-category completion.
    Dashboard {
        /// Count children as well (`flattened`) or top-level items only.
        #[arg(long, value_name = "MODE")]
        counting: Option<CountingMode>,
    },

    /// Write the skill sheet of completed items.
    ExportSheet {
        /// Output file. Default: `roadmap-skills-YYYY-MM-DD.md`.
        #[arg(long, value_name = "PATH", conflicts_with = "stdout")]
        output: Option<PathBuf>,

        /// Print to stdout instead of writing a file.
        #[arg(long)]
        stdout: bool,
    },

    /// Write the progress map to a JSON file.
    ExportProgress {
        /// Output file. Default: `roadmap-progress.json`.
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Replace all progress with the contents of an exported JSON file.
    Import {
        file: PathBuf,
    },

    /// Watch the curriculum and progress files, reading click/hover/leave/quit
    /// commands from stdin and printing frames as JSON lines.
    ///
    /// Closing stdin only stops command input; watching continues until
    /// `quit` or Ctrl-C.
    Watch,
}

#[derive(Debug, Clone, Args)]
pub struct LayoutArgs {
    /// Lay out the children of this item instead of the top level.
    #[arg(long, value_name = "ID")]
    pub item: Option<String>,

    /// Placement policy (simple, grouped, layered). Default from config.
    #[arg(long, value_name = "POLICY")]
    pub policy: Option<LayoutPolicy>,

    /// Highlight this item's closure.
    #[arg(long, value_name = "ID")]
    pub focus: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// Case-insensitive text to find in titles and descriptions.
    #[arg(long, short, value_name = "TEXT")]
    pub query: Option<String>,

    /// Keep only these categories (repeatable).
    #[arg(long = "category", value_name = "CATEGORY")]
    pub categories: Vec<String>,

    /// Keep only these statuses (repeatable).
    #[arg(long = "status", value_name = "STATUS")]
    pub statuses: Vec<Status>,
}

#[derive(Debug, Clone, Args)]
pub struct SetArgs {
    /// Item id.
    pub id: String,

    #[arg(long, value_name = "STATUS")]
    pub status: Option<Status>,

    /// Why the item was picked, or what was learned.
    #[arg(long, value_name = "TEXT")]
    pub reason: Option<String>,

    /// Link to the produced artifact.
    #[arg(long, value_name = "URL")]
    pub repo_url: Option<String>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
