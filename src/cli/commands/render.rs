//! The core one-shot operation: pipe any log through loglens and read it
//! with embedded JSON expanded and colorized.

use crate::cli::util::{build_renderer, read_input};
use crate::config::Config;
use crate::export;
use crate::internal;
use crate::render::Theme;
use std::path::Path;
use std::process::ExitCode;

/// Handles `loglens render [<file>] [--no-color] [--theme <name>]`.
#[must_use]
pub fn cmd_render(
    file: Option<&Path>,
    no_color: bool,
    theme: Option<&str>,
    config: &Config,
) -> ExitCode {
    let lines = match read_input(file) {
        Ok(lines) => lines,
        Err(e) => {
            internal::error("RENDER", &format!("{e}"));
            return ExitCode::FAILURE;
        }
    };

    let mut renderer = build_renderer(config);
    if no_color {
        renderer = renderer.colors(false);
    }
    if let Some(name) = theme {
        match name.parse::<Theme>() {
            Ok(t) => renderer = renderer.theme(t.with_overrides(&config.colors)),
            Err(e) => {
                internal::error("RENDER", &e);
                return ExitCode::FAILURE;
            }
        }
    }

    // Exported lines get the full record header; anything else renders as a
    // bare message so plain logs work too.
    for line in &lines {
        match export::parse_line(line) {
            Some(record) => println!("{}", renderer.render_record(&record)),
            None => println!("{}", renderer.render_message(line)),
        }
    }
    ExitCode::SUCCESS
}
