//! View command implementation.

use crate::cli::util::{build_renderer, load_records, read_input};
use crate::config::Config;
use crate::filter::{FilterSet, LogKind, SearchQuery};
use crate::internal;
use crate::record::LogRecord;
use std::path::Path;
use std::process::ExitCode;

/// Handles `loglens view [<file>] [--kind <k>] [--search <p>] [--limit <n>]`.
#[must_use]
pub fn cmd_view(
    file: Option<&Path>,
    kind: Option<&str>,
    search: Option<&str>,
    limit: Option<usize>,
    config: &Config,
) -> ExitCode {
    let lines = match read_input(file) {
        Ok(lines) => lines,
        Err(e) => {
            internal::error("VIEW", &format!("{e}"));
            return ExitCode::FAILURE;
        }
    };
    let records = load_records(&lines);

    let mut filters = FilterSet::new();
    filters.subsystem.clone_from(&config.source.subsystem);
    if let Some(kind) = kind {
        match kind.parse::<LogKind>() {
            Ok(k) => filters.kind = k,
            Err(e) => {
                internal::error("VIEW", &format!("{e}"));
                return ExitCode::FAILURE;
            }
        }
    }
    if let Some(pattern) = search {
        filters.search = Some(SearchQuery::new(pattern));
    }

    let matched = filters.apply(&records);
    let limit = limit.unwrap_or(config.view.list_limit);
    let renderer = build_renderer(config);

    let selected: Vec<&LogRecord> = if config.view.newest_first {
        matched.iter().rev().take(limit).copied().collect()
    } else {
        matched.iter().take(limit).copied().collect()
    };

    for record in &selected {
        println!("{}", renderer.render_preview(record));
    }
    internal::info(
        "VIEW",
        &format!("{} of {} record(s) shown", selected.len(), records.len()),
    );
    ExitCode::SUCCESS
}
