//! Lexical per-line classification of pretty-printed JSON, so a renderer can
//! pick a color per role without re-parsing the value tree.

/// One line of pretty-printed JSON with its markup role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedLine {
    /// Raw line text, indentation included.
    pub text: String,
    /// Count of leading spaces, used for visual padding.
    pub indent: usize,
    /// Lexical role driving color selection.
    pub role: LineRole,
}

/// Role of a pretty-printed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineRole {
    /// First non-space character is `{`, `}`, `[` or `]`.
    StructuralBracket,
    /// A `"key": value` line.
    KeyValue {
        /// Key part, trailing colon kept.
        key: String,
        /// Value part, trimmed. May carry a trailing comma.
        value: String,
        /// Lexical kind of the value text.
        kind: ValueKind,
    },
    /// Keyless scalar line, e.g. an array element.
    PlainValue,
}

/// Lexical kind of a key-value line's value text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Starts with `"` and ends with `"` or `",`.
    StringLiteral,
    /// Exactly `true` or `false`, with or without a trailing comma.
    BooleanLiteral,
    /// Everything else: numbers, `null`, inline `{` / `[` openers.
    OtherScalar,
}

/// Classifies every line of `pretty`, one entry per line, in order.
///
/// The rules are lexical and contracted only for this crate's own
/// pretty-printer output. Splitting happens at the first colon of the
/// trimmed line, so a quoted key that itself contains a colon mis-splits.
#[must_use]
pub fn classify(pretty: &str) -> Vec<ClassifiedLine> {
    pretty.lines().map(classify_line).collect()
}

fn classify_line(line: &str) -> ClassifiedLine {
    let indent = line.bytes().take_while(|&b| b == b' ').count();
    let trimmed = line.trim();

    let role = if trimmed.starts_with(['{', '}', '[', ']']) {
        LineRole::StructuralBracket
    } else if let Some((key, value)) = trimmed.split_once(':') {
        let value = value.trim().to_string();
        let kind = classify_value(&value);
        LineRole::KeyValue {
            key: format!("{key}:"),
            value,
            kind,
        }
    } else {
        LineRole::PlainValue
    };

    ClassifiedLine {
        text: line.to_string(),
        indent,
        role,
    }
}

fn classify_value(value: &str) -> ValueKind {
    if value.starts_with('"') && (value.ends_with('"') || value.ends_with("\",")) {
        ValueKind::StringLiteral
    } else if matches!(value, "true" | "false" | "true," | "false,") {
        ValueKind::BooleanLiteral
    } else {
        ValueKind::OtherScalar
    }
}
