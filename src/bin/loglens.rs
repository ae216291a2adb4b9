//! A single `loglens` binary that "just works": bare invocation drops into
//! the interactive shell, while subcommands support scriptable one-shot
//! operations.

use clap::Parser;
use loglens::cli::{
    Cli, Command, cmd_export, cmd_prune, cmd_render, cmd_stats, cmd_themes, cmd_view,
};
use loglens::config::Config;
use loglens::internal;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Config drives colors, themes, and export paths; load before anything
    // produces output.
    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Diagnostics must be ready before any command runs.
    internal::init_with_config(&config);

    let Some(command) = cli.command else {
        // Default to the interactive shell when invoked without arguments.
        return match loglens::shell::run(&config) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                internal::error("SHELL", &format!("Shell error: {e}"));
                ExitCode::FAILURE
            }
        };
    };

    match command {
        Command::Render {
            file,
            no_color,
            theme,
        } => cmd_render(file.as_deref(), no_color, theme.as_deref(), &config),
        Command::View {
            file,
            kind,
            search,
            limit,
        } => cmd_view(
            file.as_deref(),
            kind.as_deref(),
            search.as_deref(),
            limit,
            &config,
        ),
        Command::Export { file, dir } => cmd_export(file.as_deref(), dir.as_deref(), &config),
        Command::Prune {
            dry_run,
            all,
            older_than,
            max_size,
            keep_last,
            compress,
        } => cmd_prune(
            dry_run,
            all,
            older_than.as_deref(),
            max_size.as_deref(),
            keep_last,
            compress,
            &config,
        ),
        Command::Themes { action } => cmd_themes(action),
        Command::Stats => cmd_stats(&config),
    }
}
