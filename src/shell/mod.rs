//! loglens interactive shell.
//!
//! A small REPL over a loaded record list: filter, search, inspect, export.

use crate::config::Config;
use crate::export::{self, Exporter, PruneOptions, prune, stats};
use crate::filter::{FilterSet, LogKind, RecordFilter, SearchQuery};
use crate::internal;
use crate::level::Level;
use crate::record::LogRecord;
use crate::render::{ALL_THEMES, Renderer, Theme};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{DefaultEditor, Editor};
use std::path::PathBuf;
use std::str::FromStr;

/// Everything a shell command can touch: the loaded records, the active
/// filters, and the renderer.
struct Session<'a> {
    config: &'a Config,
    records: Vec<LogRecord>,
    filters: FilterSet,
    renderer: Renderer,
    prompt: String,
}

/// Runs the interactive shell.
///
/// # Errors
/// Returns error message if the shell cannot be initialized.
pub fn run(config: &Config) -> Result<(), String> {
    internal::debug("SHELL", "Initializing shell...");

    internal::debug(
        "THEMES",
        &format!("Available: {} themes", ALL_THEMES.len()),
    );
    let theme = config.parse_theme();
    internal::debug("THEMES", &format!("Selected: {}", theme.name));

    let mut session = Session {
        config,
        records: Vec::new(),
        filters: FilterSet {
            subsystem: config.source.subsystem.clone(),
            ..FilterSet::new()
        },
        renderer: Renderer::new().colors(config.render.colors).theme(theme),
        prompt: theme.build_prompt(),
    };

    internal::debug("SHELL", "Initializing readline...");
    let mut rl: Editor<(), DefaultHistory> =
        DefaultEditor::new().map_err(|e| format!("Error creating editor: {e}"))?;

    let history_path = get_history_path();
    if let Some(path) = &history_path
        && rl.load_history(path).is_ok()
    {
        internal::debug("SHELL", "History loaded");
    }

    internal::debug("SHELL", "Shell ready");
    println!("loglens shell - type 'help' for commands, 'quit' to exit");

    loop {
        match rl.readline(&session.prompt) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(line);

                if !handle_command(&mut session, line) {
                    break;
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                break;
            }
            Err(e) => {
                internal::error("SHELL", &format!("Readline error: {e}"));
                break;
            }
        }
    }

    if let Some(path) = &history_path
        && rl.save_history(path).is_err()
    {
        internal::notice("SHELL", "Could not save history");
    }

    internal::info("SHELL", "Shell exited");
    Ok(())
}

fn handle_command(session: &mut Session, line: &str) -> bool {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.is_empty() {
        return true;
    }

    internal::debug("SHELL", &format!("Executing: {}", parts[0]));
    match parts[0] {
        "quit" | "exit" | "q" => false,
        "help" | "?" => {
            print_help();
            true
        }
        "load" => {
            cmd_load(session, &parts);
            true
        }
        "list" | "ls" => {
            cmd_list(session, &parts);
            true
        }
        "show" => {
            cmd_show(session, &parts);
            true
        }
        "kind" => {
            cmd_kind(session, &parts);
            true
        }
        "filter" => {
            cmd_filter(session, &parts);
            true
        }
        "search" => {
            cmd_search(session, &parts);
            true
        }
        "theme" => {
            cmd_theme(session, &parts);
            true
        }
        "themes" => {
            cmd_themes(&parts);
            true
        }
        "export" => {
            cmd_export(session, &parts);
            true
        }
        "stats" => {
            cmd_stats(session.config);
            true
        }
        "prune" => {
            cmd_prune(session.config, &parts);
            true
        }
        _ => {
            internal::error("SHELL", &format!("Unknown command: {}", parts[0]));
            internal::info("SHELL", "Type 'help' for available commands");
            true
        }
    }
}

/// Records passing the active filters, in presentation order. `list` and
/// `show` agree on numbering because both go through here.
fn visible<'a>(session: &'a Session) -> Vec<&'a LogRecord> {
    let mut view = session.filters.apply(&session.records);
    if session.config.view.newest_first {
        view.reverse();
    }
    view
}

fn cmd_load(session: &mut Session, parts: &[&str]) {
    let Some(path) = parts.get(1) else {
        internal::notice("SHELL", "Usage: load <file>");
        return;
    };
    let path = expand_path(path);

    match export::read_lines(&path) {
        Ok(lines) => {
            session.records = lines
                .iter()
                .filter(|line| !line.trim().is_empty())
                .map(|line| {
                    export::parse_line(line)
                        .unwrap_or_else(|| LogRecord::new(Level::Info, line.clone()))
                })
                .collect();
            println!(
                "Loaded {} record(s) from {}",
                session.records.len(),
                path.display()
            );
        }
        Err(e) => internal::error("SHELL", &format!("{e}")),
    }
}

fn cmd_list(session: &Session, parts: &[&str]) {
    let limit = parts
        .get(1)
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(session.config.view.list_limit);

    let view = visible(session);
    for (i, record) in view.iter().take(limit).enumerate() {
        println!("{:>4}  {}", i + 1, session.renderer.render_preview(record));
    }
    println!(
        "{} of {} record(s) shown",
        view.len().min(limit),
        session.records.len()
    );
}

fn cmd_show(session: &Session, parts: &[&str]) {
    let Some(index) = parts.get(1).and_then(|s| s.parse::<usize>().ok()) else {
        internal::notice("SHELL", "Usage: show <n>  (numbering from 'list')");
        return;
    };

    let view = visible(session);
    let Some(record) = index.checked_sub(1).and_then(|i| view.get(i)) else {
        internal::error("SHELL", &format!("No record {index}"));
        return;
    };

    println!("{}", session.renderer.render_record(record));
    for (name, value) in [
        ("category", record.category.as_str()),
        ("process", record.process.as_str()),
        ("sender", record.sender.as_str()),
    ] {
        if !value.is_empty() {
            println!("  {name}: {value}");
        }
    }
    if record.process_id != 0 {
        println!("  pid: {}", record.process_id);
    }
    if record.thread_id != 0 {
        println!("  thread: {}", record.thread_id);
    }
}

fn cmd_kind(session: &mut Session, parts: &[&str]) {
    let Some(name) = parts.get(1) else {
        println!("Kind: {}", session.filters.kind);
        let names: Vec<&str> = LogKind::all().iter().map(|k| k.as_str()).collect();
        println!("Available: {}", names.join(", "));
        return;
    };

    match LogKind::from_str(name) {
        Ok(kind) => {
            session.filters.kind = kind;
            println!("Kind: {kind}");
        }
        Err(e) => internal::error("SHELL", &format!("{e}")),
    }
}

fn cmd_filter(session: &mut Session, parts: &[&str]) {
    match parts.get(1).copied() {
        None => match &session.filters.refine {
            Some(filter) => println!("Filter: {filter}"),
            None => println!("No refinement filter"),
        },
        Some("clear") => {
            session.filters.refine = None;
            println!("Filter cleared");
        }
        Some(field) => {
            if parts.len() < 3 {
                internal::notice("SHELL", "Usage: filter <field> <value> | filter clear");
                return;
            }
            match RecordFilter::parse(field, &parts[2..].join(" ")) {
                Ok(filter) => {
                    println!("Filter: {filter}");
                    session.filters.refine = Some(filter);
                }
                Err(e) => internal::error("SHELL", &format!("{e}")),
            }
        }
    }
}

fn cmd_search(session: &mut Session, parts: &[&str]) {
    match parts.get(1).copied() {
        None => match &session.filters.search {
            Some(query) => println!("Search: {}", query.pattern()),
            None => println!("No search pattern"),
        },
        Some("clear") => {
            session.filters.search = None;
            println!("Search cleared");
        }
        Some(_) => {
            let pattern = parts[1..].join(" ");
            session.filters.search = Some(SearchQuery::new(&pattern));
            println!("Search: {pattern}");
        }
    }
}

fn cmd_theme(session: &mut Session, parts: &[&str]) {
    let Some(name) = parts.get(1) else {
        internal::notice("SHELL", "Usage: theme <name>");
        return;
    };

    match Theme::from_str(name) {
        Ok(theme) => {
            let theme = theme.with_overrides(&session.config.colors);
            session.renderer = session.renderer.clone().theme(theme);
            session.prompt = theme.build_prompt();
            println!("Theme: {}", theme.name);
        }
        Err(e) => internal::error("SHELL", &e),
    }
}

fn cmd_themes(parts: &[&str]) {
    match parts.get(1).copied() {
        Some("list") | None => {
            println!("Available themes:");
            for theme in ALL_THEMES {
                let marker = if *theme == Theme::default() {
                    " (default)"
                } else {
                    ""
                };
                println!("  {}{marker}", theme.name);
            }
        }
        Some("preview") => {
            println!("Theme previews:");
            for theme in ALL_THEMES {
                println!("  {}: {}", theme.name, theme.build_prompt());
            }
        }
        Some(name) => {
            internal::error("THEMES", &format!("Unknown subcommand: {name}"));
            internal::info("THEMES", "Usage: themes [list|preview]");
        }
    }
}

fn cmd_export(session: &Session, parts: &[&str]) {
    // Exports stay in source order so re-loading them keeps chronology.
    let records: Vec<LogRecord> = session
        .filters
        .apply(&session.records)
        .into_iter()
        .cloned()
        .collect();
    if records.is_empty() {
        internal::notice("SHELL", "No records to export");
        return;
    }

    let dir = parts
        .get(1)
        .copied()
        .unwrap_or(session.config.export.dir.as_str());
    let exporter = Exporter::new()
        .dir(dir)
        .file_stem(&session.config.export.file_stem);

    match exporter.export(&records) {
        Ok(path) => println!("Exported {} record(s) to {}", records.len(), path.display()),
        Err(e) => internal::error("EXPORT", &format!("{e}")),
    }
}

fn cmd_stats(config: &Config) {
    let dir = expand_path(&config.export.dir);
    match stats(&dir) {
        Ok(s) => {
            for line in s.summary() {
                println!("{line}");
            }
        }
        Err(e) => internal::error("STATS", &format!("{e}")),
    }
}

fn cmd_prune(config: &Config, parts: &[&str]) {
    let dry_run = parts.contains(&"--dry-run");
    let all = parts.contains(&"--all");

    internal::debug("PRUNE", &format!("dry_run={dry_run}, all={all}"));

    let mut options = PruneOptions::new().dry_run(dry_run).delete_all(all);

    if let Some(idx) = parts.iter().position(|&p| p == "--older-than")
        && let Some(days_str) = parts.get(idx + 1)
        && let Ok(days) = days_str.trim_end_matches('d').parse::<u32>()
    {
        internal::debug("PRUNE", &format!("max_age_days={days}"));
        options = options.max_age_days(days);
    }

    if let Some(idx) = parts.iter().position(|&p| p == "--max-size")
        && let Some(size_str) = parts.get(idx + 1)
    {
        internal::debug("PRUNE", &format!("max_size={size_str}"));
        options = options.max_total_size(size_str);
    }

    let dir = expand_path(&config.export.dir);
    internal::debug("PRUNE", &format!("Export dir: {}", dir.display()));

    match prune(&dir, &options) {
        Ok(result) => {
            for (path, err) in &result.failed {
                internal::notice("PRUNE", &format!("Failed to process {path}: {err}"));
            }
            for line in result.summary(dry_run) {
                println!("{line}");
            }
        }
        Err(e) => internal::error("PRUNE", &format!("{e}")),
    }
}

fn print_help() {
    println!(
        "Commands:
  load <file>                           Load records from a log file
  list [n]                              List records (newest first by default)
  show <n>                              Show one record with JSON expanded
  kind [all|info|error|debug|subsystem] Show or set the record kind
  filter <field> <value>                Refine by one field (timestamp,
                                        category, subsystem, process, thread,
                                        activity, pid, sender)
  filter clear                          Drop the refinement filter
  search <pattern>                      Case-insensitive message search
  search clear                          Drop the search pattern
  theme <name>                          Switch the active theme
  themes [list|preview]                 List or preview themes
  export [dir]                          Export the filtered records
  stats                                 Show export directory statistics
  prune [options]                       Clean up exported files
    --older-than <days>                 Delete files older than N days
    --max-size <size>                   Keep total size under limit
    --all                               Delete all files
    --dry-run                           Show what would be deleted
  help, ?                               Show this help
  quit, exit, q                         Exit shell"
    );
}

fn expand_path(path: &str) -> PathBuf {
    if path.starts_with('~')
        && let Some(user_dirs) = directories::UserDirs::new()
    {
        return PathBuf::from(path.replacen('~', user_dirs.home_dir().to_str().unwrap_or(""), 1));
    }
    PathBuf::from(path)
}

fn get_history_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "loglens")
        .map(|dirs| dirs.data_dir().join("shell_history"))
}
