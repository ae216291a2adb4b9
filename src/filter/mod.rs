//! Record filtering: the coarse kind picker, single-field refinement, and
//! case-insensitive message search.

use crate::error::Error;
use crate::level::Level;
use crate::record::LogRecord;
use chrono::{DateTime, Local};
use regex::{Regex, RegexBuilder};
use std::fmt;
use std::str::FromStr;

/// Coarse visibility picker, one segment per viewer tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogKind {
    /// Every record.
    #[default]
    All,
    /// Info-level records only.
    Info,
    /// Error-level records only.
    Error,
    /// Debug-level records only.
    Debug,
    /// Records belonging to the configured subsystem.
    Subsystem,
}

impl LogKind {
    /// Lowercase because shell commands and config use lowercase names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Info => "info",
            Self::Error => "error",
            Self::Debug => "debug",
            Self::Subsystem => "subsystem",
        }
    }

    /// Convenience for iteration in help output and tests.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::All,
            Self::Info,
            Self::Error,
            Self::Debug,
            Self::Subsystem,
        ]
    }

    /// Whether `record` is visible under this kind. `configured` is the
    /// viewer's subsystem setting; with none set, the subsystem kind keeps
    /// records whose subsystem is empty.
    #[must_use]
    pub fn matches(self, record: &LogRecord, configured: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Info => record.level == Level::Info,
            Self::Error => record.level == Level::Error,
            Self::Debug => record.level == Level::Debug,
            Self::Subsystem => record.subsystem == configured.unwrap_or(""),
        }
    }
}

impl fmt::Display for LogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "info" => Ok(Self::Info),
            "error" | "err" => Ok(Self::Error),
            "debug" => Ok(Self::Debug),
            "subsystem" | "sub" => Ok(Self::Subsystem),
            _ => Err(Error::InvalidFilter(format!("unknown kind: {s}"))),
        }
    }
}

/// Single-field refinement, matching records by exact equality on one
/// metadata field.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordFilter {
    Timestamp(DateTime<Local>),
    Category(String),
    Subsystem(String),
    Process(String),
    Thread(u64),
    ActivityId(u64),
    ProcessId(i32),
    Sender(String),
}

impl RecordFilter {
    #[must_use]
    pub fn matches(&self, record: &LogRecord) -> bool {
        match self {
            Self::Timestamp(ts) => record.timestamp == *ts,
            Self::Category(s) => record.category == *s,
            Self::Subsystem(s) => record.subsystem == *s,
            Self::Process(s) => record.process == *s,
            Self::Thread(id) => record.thread_id == *id,
            Self::ActivityId(id) => record.activity_id == *id,
            Self::ProcessId(id) => record.process_id == *id,
            Self::Sender(s) => record.sender == *s,
        }
    }

    /// Builds a filter from a shell-style `field value` pair. Timestamps
    /// parse as RFC 3339; numeric fields must parse as integers.
    pub fn parse(field: &str, value: &str) -> Result<Self, Error> {
        match field.to_lowercase().as_str() {
            "timestamp" => DateTime::parse_from_rfc3339(value)
                .map(|ts| Self::Timestamp(ts.with_timezone(&Local)))
                .map_err(|e| Error::InvalidFilter(format!("timestamp: {e}"))),
            "category" => Ok(Self::Category(value.to_string())),
            "subsystem" => Ok(Self::Subsystem(value.to_string())),
            "process" => Ok(Self::Process(value.to_string())),
            "thread" => value
                .parse()
                .map(Self::Thread)
                .map_err(|_| Error::InvalidFilter(format!("thread id: {value}"))),
            "activity" => value
                .parse()
                .map(Self::ActivityId)
                .map_err(|_| Error::InvalidFilter(format!("activity id: {value}"))),
            "pid" => value
                .parse()
                .map(Self::ProcessId)
                .map_err(|_| Error::InvalidFilter(format!("process id: {value}"))),
            "sender" => Ok(Self::Sender(value.to_string())),
            _ => Err(Error::InvalidFilter(format!("unknown field: {field}"))),
        }
    }
}

impl fmt::Display for RecordFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timestamp(ts) => write!(f, "timestamp: {}", ts.to_rfc3339()),
            Self::Category(s) => write!(f, "category: {s}"),
            Self::Subsystem(s) => write!(f, "subsystem: {s}"),
            Self::Process(s) => write!(f, "process: {s}"),
            Self::Thread(id) => write!(f, "thread: {id}"),
            Self::ActivityId(id) => write!(f, "activity: {id}"),
            Self::ProcessId(id) => write!(f, "pid: {id}"),
            Self::Sender(s) => write!(f, "sender: {s}"),
        }
    }
}

/// Case-insensitive message search. Patterns compile as regexes; an invalid
/// pattern degrades to a literal substring match, so construction never
/// fails.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pattern: String,
    regex: Option<Regex>,
}

impl SearchQuery {
    #[must_use]
    pub fn new(pattern: &str) -> Self {
        let regex =
            compile(pattern).or_else(|| compile(&regex::escape(pattern)));
        Self {
            pattern: pattern.to_string(),
            regex,
        }
    }

    /// An empty pattern matches everything.
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        if self.pattern.is_empty() {
            return true;
        }
        match &self.regex {
            Some(r) => r.is_match(text),
            None => text.to_lowercase().contains(&self.pattern.to_lowercase()),
        }
    }

    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

fn compile(pattern: &str) -> Option<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .ok()
}

/// Everything the viewer currently narrows the record list by.
#[derive(Debug, Clone, Default)]
pub struct FilterSet {
    pub kind: LogKind,
    /// Subsystem the [`LogKind::Subsystem`] tab pins to.
    pub subsystem: Option<String>,
    pub refine: Option<RecordFilter>,
    pub search: Option<SearchQuery>,
}

impl FilterSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether every active criterion keeps `record`.
    #[must_use]
    pub fn matches(&self, record: &LogRecord) -> bool {
        self.kind.matches(record, self.subsystem.as_deref())
            && self.refine.as_ref().is_none_or(|r| r.matches(record))
            && self
                .search
                .as_ref()
                .is_none_or(|q| q.is_match(&record.message))
    }

    /// Visible records in source order (oldest first). Presentation layers
    /// reverse the result when they want newest first.
    #[must_use]
    pub fn apply<'a>(&self, records: &'a [LogRecord]) -> Vec<&'a LogRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}
