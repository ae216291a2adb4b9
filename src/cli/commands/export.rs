//! Export command implementation.

use crate::cli::util::{load_records, read_input};
use crate::config::Config;
use crate::export::Exporter;
use crate::internal;
use std::path::Path;
use std::process::ExitCode;

/// Handles `loglens export [<file>] [--dir <path>]`.
#[must_use]
pub fn cmd_export(file: Option<&Path>, dir: Option<&str>, config: &Config) -> ExitCode {
    let lines = match read_input(file) {
        Ok(lines) => lines,
        Err(e) => {
            internal::error("EXPORT", &format!("{e}"));
            return ExitCode::FAILURE;
        }
    };
    let records = load_records(&lines);
    if records.is_empty() {
        internal::notice("EXPORT", "No records to export");
        return ExitCode::SUCCESS;
    }

    // CLI flag wins over config so one-off runs don't require editing it.
    let target = dir.unwrap_or(config.export.dir.as_str());
    let exporter = Exporter::new()
        .dir(target)
        .file_stem(&config.export.file_stem);

    match exporter.export(&records) {
        Ok(path) => {
            println!("{}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            internal::error("EXPORT", &format!("{e}"));
            ExitCode::FAILURE
        }
    }
}
