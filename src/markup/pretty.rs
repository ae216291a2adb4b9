//! Strict JSON pretty-printing for matched fragments.

use std::fmt;

/// Why a candidate fragment could not be rendered as JSON. Every variant
/// folds to literal-text fallback inside the extractor.
#[derive(Debug)]
pub enum MarkupError {
    /// Bracket nesting never returned to depth zero before end of input.
    Match,
    /// The candidate slice is not valid JSON.
    Parse(serde_json::Error),
    /// Serializing the parsed value back to text failed.
    Encode(serde_json::Error),
}

impl fmt::Display for MarkupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Match => write!(f, "unbalanced brackets"),
            Self::Parse(e) => write!(f, "invalid JSON: {e}"),
            Self::Encode(e) => write!(f, "encode failed: {e}"),
        }
    }
}

impl std::error::Error for MarkupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Match => None,
            Self::Parse(e) | Self::Encode(e) => Some(e),
        }
    }
}

/// Reformats a JSON value with two-space indentation and one key-value pair
/// per line. Object keys keep their source order, and the output is stable:
/// printing already-printed text returns it unchanged.
///
/// The parser is strict. Trailing commas, bare keys, and single quotes all
/// fail with [`MarkupError::Parse`].
pub fn pretty_print(source: &str) -> Result<String, MarkupError> {
    let value: serde_json::Value = serde_json::from_str(source).map_err(MarkupError::Parse)?;
    serde_json::to_string_pretty(&value).map_err(MarkupError::Encode)
}
