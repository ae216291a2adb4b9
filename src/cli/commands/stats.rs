//! Stats command implementation.

use crate::cli::util::expand_path;
use crate::config::Config;
use crate::export::stats;
use crate::internal;
use std::process::ExitCode;

/// Handles `loglens stats`.
#[must_use]
pub fn cmd_stats(config: &Config) -> ExitCode {
    let dir = expand_path(&config.export.dir);

    match stats(&dir) {
        Ok(s) => {
            for line in s.summary() {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            internal::error("STATS", &format!("{e}"));
            ExitCode::FAILURE
        }
    }
}
