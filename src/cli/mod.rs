//! CLI module for loglens.
//!
//! This module provides the command-line interface using Clap.

pub mod commands;
pub mod util;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Theme action for the themes subcommand.
#[derive(Debug, Clone, Copy, clap::ValueEnum, Default)]
pub enum ThemeAction {
    #[default]
    List,
    Preview,
}

/// loglens - Browse logs with inline JSON rendering.
#[derive(Parser)]
#[command(
    name = "loglens",
    version,
    about = "Browse logs with inline JSON rendering"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// CLI subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Render a log file with embedded JSON pretty-printed.
    Render {
        /// Input file (reads stdin if omitted or "-")
        file: Option<PathBuf>,
        /// Disable ANSI colors
        #[arg(long)]
        no_color: bool,
        /// Theme to render with (overrides config)
        #[arg(long)]
        theme: Option<String>,
    },
    /// List records from a log file.
    View {
        /// Input file (reads stdin if omitted or "-")
        file: Option<PathBuf>,
        /// Keep only one kind of record (all, info, error, debug, subsystem)
        #[arg(short, long)]
        kind: Option<String>,
        /// Case-insensitive search pattern
        #[arg(short, long)]
        search: Option<String>,
        /// Maximum number of records to list
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Export records from a log file into the export directory.
    Export {
        /// Input file (reads stdin if omitted or "-")
        file: Option<PathBuf>,
        /// Destination directory (overrides config)
        #[arg(long)]
        dir: Option<String>,
    },
    /// Apply retention policies to exported files.
    Prune {
        /// Show what would be done without doing it
        #[arg(long)]
        dry_run: bool,
        /// Delete all files
        #[arg(long)]
        all: bool,
        /// Delete files older than N days (e.g., "30d" or "30")
        #[arg(long, value_name = "DAYS")]
        older_than: Option<String>,
        /// Keep total size under limit (e.g., "500M", "1G")
        #[arg(long, value_name = "SIZE")]
        max_size: Option<String>,
        /// Always keep the N most recent files
        #[arg(long, value_name = "N")]
        keep_last: Option<usize>,
        /// Compress files instead of deleting
        #[arg(long)]
        compress: bool,
    },
    /// List or preview themes.
    Themes {
        /// Action to perform
        #[arg(value_enum, default_value = "list")]
        action: ThemeAction,
    },
    /// Show statistics over the export directory.
    Stats,
}

pub use commands::{
    cmd_export, cmd_prune, cmd_render, cmd_stats, cmd_themes, cmd_view,
};
pub use util::{build_renderer, expand_path, load_records, read_input};
