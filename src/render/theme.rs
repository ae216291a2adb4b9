//! Color themes: one palette per markup role and level, plus the gradient
//! used by the interactive shell prompt.

use super::color::Color;
use crate::level::Level;
use std::collections::HashMap;
use std::fmt::Write;
use std::str::FromStr;

/// All built-in themes.
pub const ALL_THEMES: &[Theme] = &[
    Theme::dracula(),
    Theme::nord(),
    Theme::gruvbox(),
    Theme::catppuccin(),
    Theme::matrix(),
];

/// Role and level palette driving every colorized byte the crate emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    /// JSON object keys.
    pub key: Color,
    /// String literal values.
    pub string: Color,
    /// `true` / `false` values.
    pub boolean: Color,
    /// Numbers, `null`, and inline openers.
    pub scalar: Color,
    /// Structural bracket lines.
    pub bracket: Color,
    /// Keyless value lines.
    pub text: Color,
    pub debug: Color,
    pub info: Color,
    pub notice: Color,
    pub error: Color,
    pub fault: Color,
    /// Per-character prompt gradient, one entry per character of `loglens>`.
    pub gradient: [Color; 8],
}

impl Theme {
    #[must_use]
    pub const fn dracula() -> Self {
        Self {
            name: "dracula",
            key: Color::cyan(),
            string: Color::yellow(),
            boolean: Color::teal(),
            scalar: Color::purple(),
            bracket: Color::gray(),
            text: Color::white(),
            debug: Color::blue(),
            info: Color::green(),
            notice: Color::yellow(),
            error: Color::red(),
            fault: Color::pink(),
            gradient: [
                Color::red(),
                Color::orange(),
                Color::yellow(),
                Color::green(),
                Color::cyan(),
                Color::purple(),
                Color::pink(),
                Color::red(),
            ],
        }
    }

    #[must_use]
    pub const fn nord() -> Self {
        Self {
            name: "nord",
            key: Color::new(136, 192, 208),     // frost
            string: Color::new(163, 190, 140),  // aurora green
            boolean: Color::new(143, 188, 187), // frost teal
            scalar: Color::new(180, 142, 173),  // aurora purple
            bracket: Color::new(76, 86, 106),   // polar night
            text: Color::new(216, 222, 233),    // snow storm
            debug: Color::new(94, 129, 172),
            info: Color::new(163, 190, 140),
            notice: Color::new(235, 203, 139),
            error: Color::new(191, 97, 106),
            fault: Color::new(208, 135, 112),
            gradient: [
                Color::new(191, 97, 106),
                Color::new(208, 135, 112),
                Color::new(235, 203, 139),
                Color::new(163, 190, 140),
                Color::new(136, 192, 208),
                Color::new(129, 161, 193),
                Color::new(94, 129, 172),
                Color::new(180, 142, 173),
            ],
        }
    }

    #[must_use]
    pub const fn gruvbox() -> Self {
        Self {
            name: "gruvbox",
            key: Color::new(131, 165, 152),     // blue
            string: Color::new(184, 187, 38),   // green
            boolean: Color::new(142, 192, 124), // aqua
            scalar: Color::new(211, 134, 155),  // purple
            bracket: Color::new(146, 131, 116), // gray
            text: Color::new(235, 219, 178),    // fg
            debug: Color::new(131, 165, 152),
            info: Color::new(184, 187, 38),
            notice: Color::new(250, 189, 47),
            error: Color::new(251, 73, 52),
            fault: Color::new(254, 128, 25),
            gradient: [
                Color::new(251, 73, 52),
                Color::new(254, 128, 25),
                Color::new(250, 189, 47),
                Color::new(184, 187, 38),
                Color::new(142, 192, 124),
                Color::new(131, 165, 152),
                Color::new(211, 134, 155),
                Color::new(251, 73, 52),
            ],
        }
    }

    #[must_use]
    pub const fn catppuccin() -> Self {
        Self {
            name: "catppuccin",
            key: Color::new(137, 180, 250),     // blue
            string: Color::new(249, 226, 175),  // yellow
            boolean: Color::new(148, 226, 213), // teal
            scalar: Color::new(203, 166, 247),  // mauve
            bracket: Color::new(108, 112, 134), // overlay
            text: Color::new(205, 214, 244),    // text
            debug: Color::new(137, 180, 250),
            info: Color::new(166, 227, 161),
            notice: Color::new(249, 226, 175),
            error: Color::new(243, 139, 168),
            fault: Color::new(250, 179, 135),
            gradient: [
                Color::new(243, 139, 168),
                Color::new(250, 179, 135),
                Color::new(249, 226, 175),
                Color::new(166, 227, 161),
                Color::new(148, 226, 213),
                Color::new(137, 180, 250),
                Color::new(203, 166, 247),
                Color::new(245, 194, 231),
            ],
        }
    }

    #[must_use]
    pub const fn matrix() -> Self {
        Self {
            name: "matrix",
            key: Color::new(0, 255, 65),
            string: Color::new(0, 230, 60),
            boolean: Color::new(0, 255, 65),
            scalar: Color::new(0, 205, 55),
            bracket: Color::new(0, 120, 35),
            text: Color::new(0, 180, 50),
            debug: Color::new(0, 155, 45),
            info: Color::new(0, 205, 55),
            notice: Color::new(0, 230, 60),
            error: Color::new(0, 255, 65),
            fault: Color::new(0, 255, 65),
            gradient: [
                Color::new(0, 255, 65),
                Color::new(0, 230, 60),
                Color::new(0, 205, 55),
                Color::new(0, 180, 50),
                Color::new(0, 155, 45),
                Color::new(0, 180, 50),
                Color::new(0, 205, 55),
                Color::new(0, 255, 65),
            ],
        }
    }

    /// All built-in theme names.
    #[must_use]
    pub fn list() -> Vec<&'static str> {
        ALL_THEMES.iter().map(|t| t.name).collect()
    }

    #[must_use]
    pub const fn level_color(&self, level: Level) -> Color {
        match level {
            Level::Debug => self.debug,
            Level::Info => self.info,
            Level::Notice => self.notice,
            Level::Error => self.error,
            Level::Fault => self.fault,
        }
    }

    /// Applies `role = "#RRGGBB"` overrides from config. Unknown role names
    /// are ignored.
    #[must_use]
    pub fn with_overrides(mut self, overrides: &HashMap<String, String>) -> Self {
        for (role, hex) in overrides {
            let color = Color::from_hex(hex);
            match role.as_str() {
                "key" => self.key = color,
                "string" => self.string = color,
                "boolean" => self.boolean = color,
                "scalar" => self.scalar = color,
                "bracket" => self.bracket = color,
                "text" => self.text = color,
                "debug" => self.debug = color,
                "info" => self.info = color,
                "notice" => self.notice = color,
                "error" => self.error = color,
                "fault" => self.fault = color,
                _ => {}
            }
        }
        self
    }

    /// Builds the colored shell prompt string.
    #[must_use]
    pub fn build_prompt(&self) -> String {
        let chars = ['l', 'o', 'g', 'l', 'e', 'n', 's', '>'];
        let mut prompt = String::new();

        for (i, c) in chars.iter().enumerate() {
            let color = self.gradient[i];
            let _ = write!(
                prompt,
                "\x1b[38;2;{};{};{}m{c}",
                color.r, color.g, color.b
            );
        }
        prompt.push_str("\x1b[0m "); // reset + space
        prompt
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dracula()
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dracula" => Ok(Self::dracula()),
            "nord" => Ok(Self::nord()),
            "gruvbox" => Ok(Self::gruvbox()),
            "catppuccin" => Ok(Self::catppuccin()),
            "matrix" => Ok(Self::matrix()),
            _ => Err(format!("Unknown theme: {s}")),
        }
    }
}
