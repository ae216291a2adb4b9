//! TOML configuration loading.
//!
//! Separated from struct definitions so that the loading logic (file I/O,
//! fallback behavior) stays independent of the serde schema.

mod structs;

pub use structs::{
    ExportConfig, GeneralConfig, PruneConfig, RenderConfig, SourceConfig, ViewConfig,
};

use crate::internal;
use crate::level::Level;
use crate::render::Theme;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// A completely empty config file must still produce a working viewer:
/// `#[serde(default)]` on every field ensures zero-config works out of the box.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Internal diagnostics level applies to the whole crate, above any one subsystem.
    pub general: GeneralConfig,
    /// Where records come from: capture window and subsystem scoping.
    pub source: SourceConfig,
    /// Presentation order and list length for interactive browsing.
    pub view: ViewConfig,
    /// Colors and theme selection for rendered output.
    pub render: RenderConfig,
    /// Export destination and file naming.
    pub export: ExportConfig,
    /// Retention defaults so `loglens prune` works without flags every time.
    pub prune: PruneConfig,
    /// Per-role color overrides keyed by role name (`key`, `string`, `boolean`, ...).
    pub colors: HashMap<String, String>,
}

impl Config {
    /// Primary entry point. CLI and library consumers both load from the
    /// default platform config path.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined or TOML parsing hits a syntax error.
    pub fn load() -> Result<Self, crate::Error> {
        internal::debug("CONFIG", "Loading config from default location");
        let config_path = Self::get_config_path()?;
        let config = Self::load_from(&config_path)?;
        internal::info(
            "CONFIG",
            &format!("Config loaded from {}", config_path.display()),
        );
        Ok(config)
    }

    /// Loads configuration from an explicit path instead of the default location.
    ///
    /// A missing file is not an error: every field has a default, so absent
    /// config means default config.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            internal::debug("CONFIG", "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// XDG-compliant path under `~/.config/loglens/`.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory (unlikely on Linux).
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("loglens").join("loglens.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// Config stores level as a string for TOML ergonomics; this converts to
    /// the typed enum the diagnostics sink needs.
    #[must_use]
    pub fn parse_level(&self) -> Level {
        self.general.level.parse().unwrap_or(Level::Error)
    }

    /// Resolves the configured theme name and applies any `[colors]` overrides on top.
    ///
    /// Unknown names fall back to the default theme rather than failing the load.
    #[must_use]
    pub fn parse_theme(&self) -> Theme {
        let theme = self.render.theme.parse::<Theme>().unwrap_or_else(|_| {
            internal::notice(
                "CONFIG",
                &format!("Unknown theme '{}', using default", self.render.theme),
            );
            Theme::default()
        });
        theme.with_overrides(&self.colors)
    }
}
