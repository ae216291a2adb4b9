//! Severity levels carried by log records and used to gate the viewer's own
//! diagnostics.

use std::fmt;
use std::str::FromStr;

/// Derives `Ord` so filters can compare a record's level against a configured
/// minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    /// Developer detail that would be too noisy outside of development.
    Debug = 0,
    /// Normal operational milestones.
    #[default]
    Info = 1,
    /// Notable events worth keeping even outside debugging sessions.
    Notice = 2,
    /// Failures that prevented an operation from completing.
    Error = 3,
    /// Process-threatening faults.
    Fault = 4,
}

impl Level {
    /// Lowercase, matching how levels are spelled in config files and CLI
    /// arguments.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Notice => "notice",
            Self::Error => "error",
            Self::Fault => "fault",
        }
    }

    /// Convenience for iteration in help output, shell completion, and tests.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::Debug,
            Self::Info,
            Self::Notice,
            Self::Error,
            Self::Fault,
        ]
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `FromStr` error carrying the rejected input, so callers can report which
/// level string was unrecognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "notice" => Ok(Self::Notice),
            "error" | "err" => Ok(Self::Error),
            "fault" | "fatal" => Ok(Self::Fault),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
