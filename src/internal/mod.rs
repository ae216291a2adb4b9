//! Loglens's own diagnostic channel, bootstrapped early so config errors and
//! internal notices can be reported before the viewer is fully wired up.
//!
//! Uses `OnceLock` so the sink is initialized exactly once, even if
//! multiple entry points (CLI, FFI, tests) race to call `init`.

use crate::config::Config;
use crate::level::Level;
use crate::render::{Theme, colorize};
use std::sync::OnceLock;

static SINK: OnceLock<Sink> = OnceLock::new();

/// Stderr diagnostics sink. Viewer output goes to stdout; keeping
/// diagnostics on stderr means piped output stays clean.
struct Sink {
    min_level: Level,
    colors: bool,
    theme: Theme,
}

impl Sink {
    fn from_config(config: &Config) -> Self {
        Self {
            min_level: config.parse_level(),
            colors: config.render.colors,
            theme: config.parse_theme(),
        }
    }

    fn write(&self, level: Level, scope: &str, msg: &str) {
        if level < self.min_level {
            return;
        }
        let label = format!("[{}]", level.as_str());
        if self.colors {
            let color = self.theme.level_color(level);
            eprintln!("{} {scope}: {msg}", colorize(&label, color));
        } else {
            eprintln!("{label} {scope}: {msg}");
        }
    }
}

/// Fallback initializer that loads config itself, used when no caller provides one.
///
/// `OnceLock` guarantees only the first call takes effect; later calls are no-ops.
pub fn init() {
    let was_init = SINK.get().is_some();
    SINK.get_or_init(|| {
        let config = Config::load().unwrap_or_default();
        Sink::from_config(&config)
    });
    if !was_init {
        debug("INTERNAL", "Internal diagnostics ready");
    }
}

/// Preferred initializer; reuses the already-loaded config to avoid double I/O.
pub fn init_with_config(config: &Config) {
    let was_init = SINK.get().is_some();
    SINK.get_or_init(|| Sink::from_config(config));
    if !was_init {
        debug(
            "INTERNAL",
            &format!("Diagnostics level: {}", config.general.level),
        );
    }
}

/// Pre-init calls silently vanish rather than crashing, which keeps early
/// startup paths safe.
fn log(level: Level, scope: &str, msg: &str) {
    if let Some(sink) = SINK.get() {
        sink.write(level, scope, msg);
    }
}

/// Visible only when the diagnostics level includes Debug. Startup and
/// teardown detail.
pub fn debug(scope: &str, msg: &str) {
    log(Level::Debug, scope, msg);
}

/// Normal operational milestones: config loaded, export written, etc.
pub fn info(scope: &str, msg: &str) {
    log(Level::Info, scope, msg);
}

/// Non-fatal anomalies: unknown theme names, skipped files, etc.
pub fn notice(scope: &str, msg: &str) {
    log(Level::Notice, scope, msg);
}

/// Unrecoverable failures: I/O errors, invalid state, etc.
pub fn error(scope: &str, msg: &str) {
    log(Level::Error, scope, msg);
}
