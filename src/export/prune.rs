//! Retention for the export directory. ULID-named exports accumulate one
//! file per share, so age, size, and count limits keep the directory from
//! growing until the disk fills.

use crate::error::Error;
use crate::internal;
use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use std::time::SystemTime;

/// All filters default to off so nothing gets deleted without explicit
/// opt-in.
#[derive(Debug, Clone, Default)]
pub struct PruneOptions {
    /// Expires files past an age threshold.
    pub max_age_days: Option<u32>,
    /// Caps total disk usage when age expiry alone isn't enough.
    pub max_total_size: Option<u64>,
    /// The N most recent files survive regardless of other filters.
    pub keep_last: Option<usize>,
    /// Removes every export without configuring individual filters.
    pub delete_all: bool,
    /// Preview mode: report what would happen, touch nothing.
    pub dry_run: bool,
    /// Gzip instead of delete, keeping content available.
    pub compress: bool,
}

impl PruneOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn max_age_days(mut self, days: u32) -> Self {
        self.max_age_days = Some(days);
        self
    }

    /// Accepts "500M"/"1G" notation, as config files and CLI args use.
    #[must_use]
    pub fn max_total_size(mut self, size: &str) -> Self {
        self.max_total_size = parse_size(size);
        self
    }

    #[must_use]
    pub const fn max_total_size_bytes(mut self, bytes: u64) -> Self {
        self.max_total_size = Some(bytes);
        self
    }

    #[must_use]
    pub const fn keep_last(mut self, n: usize) -> Self {
        self.keep_last = Some(n);
        self
    }

    #[must_use]
    pub const fn delete_all(mut self, delete: bool) -> Self {
        self.delete_all = delete;
        self
    }

    #[must_use]
    pub const fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    #[must_use]
    pub const fn compress(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }
}

/// Outcome of a prune pass, actual and dry-run tracked separately.
#[derive(Debug, Default)]
pub struct PruneResult {
    pub deleted: Vec<String>,
    pub freed: u64,
    pub would_delete: Vec<String>,
    pub would_free: u64,
    pub compressed: Vec<String>,
    pub compressed_saved: u64,
    pub would_compress: Vec<String>,
    pub would_compress_save: u64,
    /// Files that could not be processed, with the reason.
    pub failed: Vec<(String, String)>,
}

impl PruneResult {
    /// Unifies actual and dry-run counts so callers don't branch on mode.
    #[must_use]
    pub const fn count(&self) -> usize {
        if self.deleted.is_empty() {
            self.would_delete.len()
        } else {
            self.deleted.len()
        }
    }

    #[must_use]
    pub const fn bytes(&self) -> u64 {
        if self.freed == 0 {
            self.would_free
        } else {
            self.freed
        }
    }

    #[must_use]
    pub const fn compressed_count(&self) -> usize {
        if self.compressed.is_empty() {
            self.would_compress.len()
        } else {
            self.compressed.len()
        }
    }

    #[must_use]
    pub const fn compressed_bytes(&self) -> u64 {
        if self.compressed_saved == 0 {
            self.would_compress_save
        } else {
            self.compressed_saved
        }
    }

    /// Human-readable report lines for CLI and shell output.
    #[must_use]
    pub fn summary(&self, dry_run: bool) -> Vec<String> {
        let mut lines = Vec::new();

        let (deleted, freed, compressed, saved) = if dry_run {
            (
                &self.would_delete,
                self.would_free,
                &self.would_compress,
                self.would_compress_save,
            )
        } else {
            (&self.deleted, self.freed, &self.compressed, self.compressed_saved)
        };

        if !deleted.is_empty() {
            let verb = if dry_run { "Would delete" } else { "Deleted" };
            lines.push(format!(
                "{verb} {} file(s), freeing {}",
                deleted.len(),
                format_size(freed)
            ));
            for path in deleted {
                lines.push(format!("  {path}"));
            }
        }

        if !compressed.is_empty() {
            let verb = if dry_run { "Would compress" } else { "Compressed" };
            lines.push(format!(
                "{verb} {} file(s), saving {}",
                compressed.len(),
                format_size(saved)
            ));
            for path in compressed {
                lines.push(format!("  {path}"));
            }
        }

        if lines.is_empty() {
            lines.push("No files to process".to_string());
        }

        lines
    }
}

/// Per-file metadata gathered at scan time, so later actions don't re-stat.
#[derive(Debug, Clone)]
pub struct ExportFileInfo {
    pub path: String,
    pub size: u64,
    pub age_days: u64,
}

/// Directory inventory for the stats command.
#[derive(Debug, Default)]
pub struct ExportStats {
    pub total_files: usize,
    pub total_size: u64,
    pub oldest_file: Option<String>,
    pub newest_file: Option<String>,
    pub files: Vec<ExportFileInfo>,
}

impl ExportStats {
    /// Human-readable report lines for CLI and shell output.
    #[must_use]
    pub fn summary(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Total files: {}", self.total_files),
            format!("Total size:  {}", format_size(self.total_size)),
        ];

        if let Some(oldest) = &self.oldest_file {
            lines.push(format!("Oldest:      {oldest}"));
        }
        if let Some(newest) = &self.newest_file {
            lines.push(format!("Newest:      {newest}"));
        }

        for file in &self.files {
            let age = match file.age_days {
                0 => "today".to_string(),
                1 => "1 day".to_string(),
                n => format!("{n} days"),
            };
            lines.push(format!(
                "  {} ({}, {})",
                file.path,
                format_size(file.size),
                age
            ));
        }

        lines
    }
}

/// Single entry point for all retention policies. Combining age, count, and
/// size into one pass avoids multiple directory scans and conflicting
/// deletions.
///
/// # Errors
/// Directory scan or compression failures surface so callers can report
/// partial progress.
pub fn prune(dir: &Path, options: &PruneOptions) -> Result<PruneResult, Error> {
    internal::debug(
        "PRUNE",
        &format!(
            "Starting in {}: delete_all={}, dry_run={}, compress={}",
            dir.display(),
            options.delete_all,
            options.dry_run,
            options.compress
        ),
    );

    let mut result = PruneResult::default();

    if !dir.exists() {
        internal::debug("PRUNE", "Directory does not exist, nothing to prune");
        return Ok(result);
    }

    // Oldest first, so the least relevant exports go before newer ones.
    let mut files = collect_export_files(dir, SystemTime::now())?;
    files.sort_by_key(|f| std::cmp::Reverse(f.age_days));

    let mut protected: std::collections::HashSet<String> = std::collections::HashSet::new();
    if let Some(keep_n) = options.keep_last {
        let mut by_newest = files.clone();
        by_newest.sort_by_key(|f| f.age_days);
        for file in by_newest.iter().take(keep_n) {
            protected.insert(file.path.clone());
        }
    }

    for file in &files {
        if protected.contains(&file.path) {
            continue;
        }

        let age_match = options
            .max_age_days
            .is_some_and(|max| file.age_days > u64::from(max));

        if !(options.delete_all || age_match) {
            continue;
        }

        if options.compress {
            if options.dry_run {
                result.would_compress.push(file.path.clone());
                // Text logs typically halve under gzip.
                result.would_compress_save += file.size / 2;
            } else {
                match compress_file(Path::new(&file.path)) {
                    Ok(saved) => {
                        result.compressed.push(file.path.clone());
                        result.compressed_saved += saved;
                    }
                    Err(e) => {
                        result.failed.push((file.path.clone(), e.to_string()));
                    }
                }
            }
        } else if options.dry_run {
            result.would_delete.push(file.path.clone());
            result.would_free += file.size;
        } else if fs::remove_file(&file.path).is_ok() {
            result.deleted.push(file.path.clone());
            result.freed += file.size;
        }
    }

    // Size cap is a separate pass; age expiry alone may not get under it.
    if !options.compress
        && let Some(limit) = options.max_total_size
    {
        let remaining: Vec<_> = files
            .iter()
            .filter(|f| {
                !result.deleted.contains(&f.path)
                    && !result.would_delete.contains(&f.path)
                    && !protected.contains(&f.path)
            })
            .collect();

        let mut total: u64 = remaining.iter().map(|f| f.size).sum();

        for file in &remaining {
            if total <= limit {
                break;
            }
            if options.dry_run {
                result.would_delete.push(file.path.clone());
                result.would_free += file.size;
            } else if fs::remove_file(&file.path).is_ok() {
                result.deleted.push(file.path.clone());
                result.freed += file.size;
            }
            total = total.saturating_sub(file.size);
        }
    }

    internal::info(
        "PRUNE",
        &format!(
            "Prune complete: {} file(s), {} bytes freed",
            result.count() + result.compressed_count(),
            result.bytes() + result.compressed_bytes()
        ),
    );

    Ok(result)
}

/// Read-only counterpart of [`prune`]: same inventory, no deletions.
///
/// # Errors
/// Directory traversal may fail on permission issues.
pub fn stats(dir: &Path) -> Result<ExportStats, Error> {
    let mut stats = ExportStats::default();

    if !dir.exists() {
        return Ok(stats);
    }

    let files = collect_export_files(dir, SystemTime::now())?;

    stats.total_files = files.len();
    stats.total_size = files.iter().map(|f| f.size).sum();

    if let Some(oldest) = files.iter().max_by_key(|f| f.age_days) {
        stats.oldest_file = Some(oldest.path.clone());
    }
    if let Some(newest) = files.iter().min_by_key(|f| f.age_days) {
        stats.newest_file = Some(newest.path.clone());
    }

    stats.files = files;

    Ok(stats)
}

/// Exports live flat in one directory, so a single non-recursive scan of
/// `.log` entries covers everything.
fn collect_export_files(dir: &Path, now: SystemTime) -> Result<Vec<ExportFileInfo>, Error> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() || path.extension().is_none_or(|e| e != "log") {
            continue;
        }

        let Ok(meta) = fs::metadata(&path) else {
            continue;
        };

        let age_days = meta
            .modified()
            .ok()
            .and_then(|m| now.duration_since(m).ok())
            .map_or(0, |d| d.as_secs() / 86400);

        files.push(ExportFileInfo {
            path: path.display().to_string(),
            size: meta.len(),
            age_days,
        });
    }

    Ok(files)
}

/// In-place compression (create .gz, remove original) avoids staging the
/// whole file in memory. Returns bytes saved.
fn compress_file(path: &Path) -> Result<u64, Error> {
    let input = File::open(path)?;
    let original_size = input.metadata()?.len();
    let mut reader = BufReader::new(input);

    let gz_path = format!("{}.gz", path.display());
    let output = File::create(&gz_path)?;
    let writer = BufWriter::new(output);
    let mut encoder = GzEncoder::new(writer, Compression::default());

    let mut buffer = [0u8; 8192];
    loop {
        let bytes_read = reader.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        encoder.write_all(&buffer[..bytes_read])?;
    }
    encoder.finish()?;

    let compressed_size = fs::metadata(&gz_path)?.len();
    let saved = original_size.saturating_sub(compressed_size);

    // The .gz now holds the content; remove the original to free the space.
    fs::remove_file(path)?;

    Ok(saved)
}

/// Parses "500M"/"1G" notation into bytes.
#[must_use]
pub fn parse_size(s: &str) -> Option<u64> {
    let s = s.trim().to_uppercase();
    let (num_str, multiplier): (&str, f64) = if s.ends_with("GB") || s.ends_with('G') {
        (
            s.trim_end_matches("GB").trim_end_matches('G'),
            1024.0 * 1024.0 * 1024.0,
        )
    } else if s.ends_with("MB") || s.ends_with('M') {
        (
            s.trim_end_matches("MB").trim_end_matches('M'),
            1024.0 * 1024.0,
        )
    } else if s.ends_with("KB") || s.ends_with('K') {
        (s.trim_end_matches("KB").trim_end_matches('K'), 1024.0)
    } else {
        (s.as_str(), 1.0)
    };

    num_str.trim().parse::<f64>().ok().map(|n| {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let result = (n * multiplier) as u64;
        result
    })
}

/// Renders byte counts for terminal output.
#[must_use]
pub fn format_size(bytes: u64) -> String {
    #[allow(clippy::cast_precision_loss)]
    let bytes_f = bytes as f64;

    if bytes >= 1024 * 1024 * 1024 {
        format!("{:.2} GB", bytes_f / (1024.0 * 1024.0 * 1024.0))
    } else if bytes >= 1024 * 1024 {
        format!("{:.2} MB", bytes_f / (1024.0 * 1024.0))
    } else if bytes >= 1024 {
        format!("{:.2} KB", bytes_f / 1024.0)
    } else {
        format!("{bytes} B")
    }
}
