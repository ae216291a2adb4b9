//! Themes command implementation.

use crate::cli::ThemeAction;
use crate::render::{ALL_THEMES, Theme};
use std::process::ExitCode;

/// Handles `loglens themes [list|preview]`.
#[must_use]
pub fn cmd_themes(action: ThemeAction) -> ExitCode {
    match action {
        ThemeAction::List => {
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
        ThemeAction::Preview => {
            println!("Theme previews:");
            for theme in ALL_THEMES {
                println!("  {}: {}", theme.name, theme.build_prompt());
            }
        }
    }
    ExitCode::SUCCESS
}
