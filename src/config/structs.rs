//! Configuration struct definitions.

use serde::Deserialize;

/// General configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Minimum level for the crate's own diagnostics.
    pub level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            level: "error".to_string(),
        }
    }
}

/// Record source configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Lookback window in seconds.
    pub window_seconds: i64,
    /// Subsystem the subsystem tab pins to.
    pub subsystem: Option<String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            window_seconds: 3600,
            subsystem: None,
        }
    }
}

/// List presentation configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Show the most recent records first.
    pub newest_first: bool,
    /// Default number of list entries shown by the shell.
    pub list_limit: usize,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            newest_first: true,
            list_limit: 20,
        }
    }
}

/// Rendering configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Enable ANSI colors.
    pub colors: bool,
    /// Theme name.
    pub theme: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            colors: true,
            theme: "dracula".to_string(),
        }
    }
}

/// Export configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Target directory. `~` expands at export time.
    pub dir: String,
    /// Filename stem for export files.
    pub file_stem: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
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
}

/// Retention defaults, so `loglens prune` works without flags every time.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct PruneConfig {
    /// Maximum age in days (None = no age limit).
    pub max_age_days: Option<u32>,
    /// Maximum total size (e.g., "500M", "1G").
    pub max_total_size: Option<String>,
    /// Always keep the N most recent files.
    pub keep_last: Option<usize>,
}
