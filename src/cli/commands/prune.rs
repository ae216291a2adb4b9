//! Export directories grow without bound. This command applies retention
//! policies (age, size, count) so users don't have to write cron scripts or
//! remember `find -delete`.

use crate::cli::util::expand_path;
use crate::config::Config;
use crate::export::{PruneOptions, prune};
use crate::internal;
use std::process::ExitCode;

/// Merges config defaults with CLI overrides. CLI flags always win so
/// one-off runs can deviate from the persistent config without editing it.
#[must_use]
#[allow(clippy::fn_params_excessive_bools)]
pub fn cmd_prune(
    dry_run: bool,
    all: bool,
    older_than: Option<&str>,
    max_size: Option<&str>,
    keep_last: Option<usize>,
    compress: bool,
    config: &Config,
) -> ExitCode {
    internal::debug(
        "PRUNE",
        &format!("dry_run={dry_run}, all={all}, compress={compress}"),
    );

    let mut options = PruneOptions::new()
        .dry_run(dry_run)
        .delete_all(all)
        .compress(compress);

    // Config provides the baseline retention policy.
    if let Some(days) = config.prune.max_age_days {
        internal::debug("PRUNE", &format!("Config: max_age_days={days}"));
        options = options.max_age_days(days);
    }
    if let Some(ref size) = config.prune.max_total_size {
        internal::debug("PRUNE", &format!("Config: max_total_size={size}"));
        options = options.max_total_size(size);
    }
    if let Some(keep) = config.prune.keep_last {
        internal::debug("PRUNE", &format!("Config: keep_last={keep}"));
        options = options.keep_last(keep);
    }

    // CLI flags take precedence.
    if let Some(days_str) = older_than {
        let Ok(days) = days_str.trim_end_matches('d').parse::<u32>() else {
            internal::error("PRUNE", &format!("Invalid --older-than value: {days_str}"));
            return ExitCode::FAILURE;
        };
        internal::debug("PRUNE", &format!("CLI override: max_age_days={days}"));
        options = options.max_age_days(days);
    }
    if let Some(size_str) = max_size {
        internal::debug("PRUNE", &format!("CLI override: max_size={size_str}"));
        options = options.max_total_size(size_str);
    }
    if let Some(n) = keep_last {
        internal::debug("PRUNE", &format!("CLI override: keep_last={n}"));
        options = options.keep_last(n);
    }

    let dir = expand_path(&config.export.dir);
    internal::debug("PRUNE", &format!("Export dir: {}", dir.display()));

    match prune(&dir, &options) {
        Ok(result) => {
            // Individual file failures shouldn't abort the whole run.
            for (path, err) in &result.failed {
                internal::notice("PRUNE", &format!("Failed to process {path}: {err}"));
            }
            for line in result.summary(dry_run) {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            internal::error("PRUNE", &format!("{e}"));
            ExitCode::FAILURE
        }
    }
}
