//! Utility functions for the CLI.

use crate::config::Config;
use crate::export;
use crate::internal;
use crate::level::Level;
use crate::record::LogRecord;
use crate::render::Renderer;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

/// Expands a path with tilde to the user's home directory.
#[must_use]
pub fn expand_path(path: &str) -> PathBuf {
    if path.starts_with('~')
        && let Some(user_dirs) = directories::UserDirs::new()
    {
        return PathBuf::from(path.replacen('~', user_dirs.home_dir().to_str().unwrap_or(""), 1));
    }
    PathBuf::from(path)
}

/// Reads input lines from a file, or from stdin when the path is absent
/// or "-".
///
/// # Errors
/// Fails when the file or stdin cannot be read.
pub fn read_input(file: Option<&Path>) -> Result<Vec<String>, crate::Error> {
    match file {
        Some(path) if path.as_os_str() != "-" => export::read_lines(path),
        _ => {
            internal::debug("CLI", "Reading from stdin");
            let mut lines = Vec::new();
            for line in io::stdin().lock().lines() {
                lines.push(line?);
            }
            Ok(lines)
        }
    }
}

/// Parses each non-empty line as an exported record, falling back to a bare
/// info record so arbitrary log files still load.
#[must_use]
pub fn load_records(lines: &[String]) -> Vec<LogRecord> {
    lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            export::parse_line(line)
                .unwrap_or_else(|| LogRecord::new(Level::Info, line.clone()))
        })
        .collect()
}

/// Builds a renderer from config.
#[must_use]
pub fn build_renderer(config: &Config) -> Renderer {
    Renderer::new()
        .colors(config.render.colors)
        .theme(config.parse_theme())
}
