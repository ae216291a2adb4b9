//! Log records and the sources that produce them. The viewer core never
//! collects logs itself; hosts hand records over through a [`LogSource`].

use crate::error::Error;
use crate::level::Level;
use chrono::{DateTime, Duration, Local};

/// One captured log entry with the metadata the viewer filters on.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub timestamp: DateTime<Local>,
    pub level: Level,
    pub message: String,
    pub category: String,
    pub subsystem: String,
    pub process: String,
    pub process_id: i32,
    pub thread_id: u64,
    pub activity_id: u64,
    pub sender: String,
}

impl LogRecord {
    /// A record stamped now, with empty metadata. The setters below fill in
    /// whatever the host knows.
    #[must_use]
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            level,
            message: message.into(),
            category: String::new(),
            subsystem: String::new(),
            process: String::new(),
            process_id: 0,
            thread_id: 0,
            activity_id: 0,
            sender: String::new(),
        }
    }

    #[must_use]
    pub fn timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }

    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    #[must_use]
    pub fn subsystem(mut self, subsystem: impl Into<String>) -> Self {
        self.subsystem = subsystem.into();
        self
    }

    #[must_use]
    pub fn process(mut self, process: impl Into<String>) -> Self {
        self.process = process.into();
        self
    }

    #[must_use]
    pub const fn process_id(mut self, process_id: i32) -> Self {
        self.process_id = process_id;
        self
    }

    #[must_use]
    pub const fn thread_id(mut self, thread_id: u64) -> Self {
        self.thread_id = thread_id;
        self
    }

    #[must_use]
    pub const fn activity_id(mut self, activity_id: u64) -> Self {
        self.activity_id = activity_id;
        self
    }

    #[must_use]
    pub fn sender(mut self, sender: impl Into<String>) -> Self {
        self.sender = sender.into();
        self
    }
}

/// Lookback window bounding a fetch. Anchored when constructed, so repeated
/// `contains` calls agree with each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    since: DateTime<Local>,
}

impl TimeWindow {
    /// Window reaching `seconds` back from now. Out-of-range values widen to
    /// the epoch instead of failing.
    #[must_use]
    pub fn last_seconds(seconds: i64) -> Self {
        let now = Local::now();
        let since = Duration::try_seconds(seconds)
            .and_then(|d| now.checked_sub_signed(d))
            .unwrap_or_else(|| DateTime::UNIX_EPOCH.with_timezone(&Local));
        Self { since }
    }

    /// Window starting at an explicit instant.
    #[must_use]
    pub const fn starting_at(since: DateTime<Local>) -> Self {
        Self { since }
    }

    #[must_use]
    pub const fn start(&self) -> DateTime<Local> {
        self.since
    }

    #[must_use]
    pub fn contains(&self, timestamp: DateTime<Local>) -> bool {
        timestamp >= self.since
    }
}

impl Default for TimeWindow {
    /// One hour, matching the viewer's default lookback.
    fn default() -> Self {
        Self::last_seconds(3600)
    }
}

/// Where records come from. `Send + Sync` so a source can sit behind a
/// shared reference in the host app.
pub trait LogSource: Send + Sync {
    /// Records inside `window`, oldest first, optionally restricted to one
    /// subsystem.
    fn fetch(
        &self,
        window: &TimeWindow,
        subsystem: Option<&str>,
    ) -> Result<Vec<LogRecord>, Error>;
}

/// In-memory source for hosts that collect records themselves, and for tests.
#[derive(Debug, Default)]
pub struct MemorySource {
    records: Vec<LogRecord>,
}

impl MemorySource {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn push(&mut self, record: LogRecord) {
        self.records.push(record);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl LogSource for MemorySource {
    fn fetch(
        &self,
        window: &TimeWindow,
        subsystem: Option<&str>,
    ) -> Result<Vec<LogRecord>, Error> {
        Ok(self
            .records
            .iter()
            .filter(|r| window.contains(r.timestamp))
            .filter(|r| subsystem.is_none_or(|s| r.subsystem == s))
            .cloned()
            .collect())
    }
}
