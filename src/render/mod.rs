//! Turns records, segments, and classified lines into terminal text. The
//! same pipeline serves colorized and plain output, so detail views and
//! exports agree on content.

mod color;
mod theme;

pub use color::{Color, colorize};
pub use theme::{ALL_THEMES, Theme};

use crate::markup::{self, ClassifiedLine, LineRole, MessageSegment, ValueKind};
use crate::record::LogRecord;

/// Rendering front end. Built once from config, then reused per message.
#[derive(Debug, Clone)]
pub struct Renderer {
    colors: bool,
    theme: Theme,
}

impl Renderer {
    /// Colorized output with the default theme.
    #[must_use]
    pub fn new() -> Self {
        Self {
            colors: true,
            theme: Theme::default(),
        }
    }

    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.colors = enabled;
        self
    }

    #[must_use]
    pub const fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Extracts segments from `message` and renders them.
    #[must_use]
    pub fn render_message(&self, message: &str) -> String {
        self.render_segments(&markup::extract(message))
    }

    /// Text segments pass through verbatim; JSON segments render as their
    /// classified pretty form, always starting at a line start.
    #[must_use]
    pub fn render_segments(&self, segments: &[MessageSegment]) -> String {
        let mut out = String::new();
        let mut at_line_start = true;

        for segment in segments {
            match segment {
                MessageSegment::Text(t) => {
                    out.push_str(t);
                    at_line_start = t.ends_with('\n');
                }
                MessageSegment::Json { pretty, .. } => {
                    if !at_line_start {
                        out.push('\n');
                    }
                    out.push_str(&self.render_json(pretty));
                    at_line_start = false;
                }
            }
        }

        out
    }

    /// One classified line, colorized per role. Without colors the raw line
    /// passes through, so plain rendering reproduces the pretty text exactly.
    #[must_use]
    pub fn render_line(&self, line: &ClassifiedLine) -> String {
        if !self.colors {
            return line.text.clone();
        }

        let indent = " ".repeat(line.indent);
        match &line.role {
            LineRole::StructuralBracket => {
                format!("{indent}{}", colorize(line.text.trim(), self.theme.bracket))
            }
            LineRole::KeyValue { key, value, kind } => {
                let value_color = match kind {
                    ValueKind::StringLiteral => self.theme.string,
                    ValueKind::BooleanLiteral => self.theme.boolean,
                    ValueKind::OtherScalar => self.theme.scalar,
                };
                format!(
                    "{indent}{} {}",
                    colorize(key, self.theme.key),
                    colorize(value, value_color)
                )
            }
            LineRole::PlainValue => {
                format!("{indent}{}", colorize(line.text.trim(), self.theme.text))
            }
        }
    }

    /// Level-colored header line followed by the rendered message.
    #[must_use]
    pub fn render_record(&self, record: &LogRecord) -> String {
        let label = format!("[{}]", record.level.as_str().to_uppercase());
        let label = if self.colors {
            colorize(&label, self.theme.level_color(record.level))
        } else {
            label
        };

        let mut header = format!("{} {label}", record.timestamp.format("%Y-%m-%d %H:%M:%S"));
        if !record.subsystem.is_empty() {
            header.push(' ');
            header.push_str(&record.subsystem);
        }

        format!("{header}\n{}", self.render_message(&record.message))
    }

    /// Single-line list entry: timestamp, level, first message line.
    #[must_use]
    pub fn render_preview(&self, record: &LogRecord) -> String {
        let label = format!("[{}]", record.level.as_str().to_uppercase());
        let label = if self.colors {
            colorize(&label, self.theme.level_color(record.level))
        } else {
            label
        };

        let first = record.message.lines().next().unwrap_or("");
        let mut preview: String = first.chars().take(96).collect();
        if first.chars().count() > 96 {
            preview.push_str("...");
        }

        format!(
            "{} {label} {preview}",
            record.timestamp.format("%H:%M:%S")
        )
    }

    fn render_json(&self, pretty: &str) -> String {
        let lines = markup::classify(pretty);
        let mut out = String::new();
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(&self.render_line(line));
        }
        out
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
