//! Writes the currently visible records to a shareable plain-text file, and
//! reads such files back into records.

mod prune;

pub use prune::{
    ExportFileInfo, ExportStats, PruneOptions, PruneResult, format_size, parse_size, prune, stats,
};

use crate::error::Error;
use crate::internal;
use crate::level::Level;
use crate::record::LogRecord;
use chrono::{DateTime, Local, SecondsFormat};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use ulid::Ulid;

/// One export line: RFC 3339 timestamp, thread, level, subsystem, message.
#[must_use]
pub fn format_record(record: &LogRecord) -> String {
    format!(
        "{}: t={}: {}: {}: {}",
        record.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true),
        record.thread_id,
        record.level,
        record.subsystem,
        record.message
    )
}

/// All records joined by newlines, in input order.
#[must_use]
pub fn format_records(records: &[LogRecord]) -> String {
    records
        .iter()
        .map(format_record)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Inverts [`format_record`]. Returns `None` when `line` does not follow the
/// export format. Splitting is best effort at `": "` separators, so a
/// subsystem that itself contains `": "` mis-splits, its tail folding into
/// the message. A message that itself contains newlines spans several file
/// lines; only its first line parses back.
#[must_use]
pub fn parse_line(line: &str) -> Option<LogRecord> {
    let mut parts = line.splitn(5, ": ");
    let timestamp = DateTime::parse_from_rfc3339(parts.next()?)
        .ok()?
        .with_timezone(&Local);
    let thread_id = parts.next()?.strip_prefix("t=")?.parse().ok()?;
    let level = Level::from_str(parts.next()?).ok()?;
    let subsystem = parts.next()?;
    let message = parts.next()?;

    Some(
        LogRecord::new(level, message)
            .timestamp(timestamp)
            .thread_id(thread_id)
            .subsystem(subsystem),
    )
}

/// Lines of an exported file, in file order.
///
/// # Errors
/// Fails when the file cannot be read.
pub fn read_lines(path: &Path) -> Result<Vec<String>, Error> {
    let content = fs::read_to_string(path)?;
    Ok(content.lines().map(ToString::to_string).collect())
}

/// Writes record batches as `.log` files under a target directory.
#[derive(Debug, Clone)]
pub struct Exporter {
    dir: String,
    file_stem: String,
}

impl Default for Exporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Exporter {
    /// Targets the user data directory by default.
    #[must_use]
    pub fn new() -> Self {
        let dir = directories::ProjectDirs::from("", "", "loglens").map_or_else(
            || "exports".to_string(),
            |dirs| {
                dirs.state_dir()
                    .unwrap_or_else(|| dirs.data_dir())
                    .join("exports")
                    .to_string_lossy()
                    .into_owned()
            },
        );

        Self {
            dir,
            file_stem: "logs".to_string(),
        }
    }

    /// Sets the target directory. `~` expands at export time.
    #[must_use]
    pub fn dir(mut self, dir: impl Into<String>) -> Self {
        self.dir = dir.into();
        self
    }

    /// Sets the filename stem, `logs` by default.
    #[must_use]
    pub fn file_stem(mut self, stem: impl Into<String>) -> Self {
        self.file_stem = stem.into();
        self
    }

    /// Writes `records` to a fresh `{stem}-{ulid}.log` file and returns its
    /// path. The ULID suffix keeps repeated exports from clobbering each
    /// other.
    ///
    /// # Errors
    /// Fails when the directory cannot be created or the file not written.
    pub fn export(&self, records: &[LogRecord]) -> Result<PathBuf, Error> {
        let dir = self.resolve_dir();
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
            internal::debug("EXPORT", &format!("Created directory: {}", dir.display()));
        }

        let filename = format!(
            "{}-{}.log",
            self.file_stem,
            Ulid::new().to_string().to_lowercase()
        );
        let path = dir.join(filename);

        let mut content = format_records(records);
        if !content.is_empty() {
            content.push('\n');
        }
        fs::write(&path, content)?;

        internal::info(
            "EXPORT",
            &format!("Exported {} record(s) to {}", records.len(), path.display()),
        );
        Ok(path)
    }

    /// Resolved target directory with `~` expanded.
    #[must_use]
    pub fn resolve_dir(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.dir).into_owned())
    }
}
