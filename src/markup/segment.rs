//! Splits a log message into ordered text and JSON segments so the same
//! parse result can serve both plain and colorized rendering.

use super::pretty::{MarkupError, pretty_print};

/// One ordered segment of a log message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageSegment {
    /// Verbatim run of text outside any JSON fragment.
    Text(String),
    /// A fragment that matched and parsed as JSON. `source` is the exact
    /// original slice; `pretty` is its reformatted form.
    Json {
        /// Pretty-printed form of the fragment.
        pretty: String,
        /// Exact slice of the original message, opener through closer.
        source: String,
    },
}

impl MessageSegment {
    /// The slice of the original message this segment covers. Concatenating
    /// `source_text` over a whole segment list reproduces the input exactly.
    #[must_use]
    pub fn source_text(&self) -> &str {
        match self {
            Self::Text(t) => t,
            Self::Json { source, .. } => source,
        }
    }

    #[must_use]
    pub const fn is_json(&self) -> bool {
        matches!(self, Self::Json { .. })
    }
}

/// Scans `message` left to right and returns its segments in input order.
///
/// A candidate fragment starts at `{` or `[` and ends where bracket nesting
/// returns to depth zero. Candidates that fail to match or parse fall back
/// to literal text: only the marker character is consumed, so a later valid
/// fragment is still found. Runs of text coalesce into single segments, so
/// the result never contains two adjacent `Text` entries or an empty one.
#[must_use]
pub fn extract(message: &str) -> Vec<MessageSegment> {
    let bytes = message.as_bytes();
    let mut segments = Vec::new();
    let mut text = String::new();
    let mut i = 0;

    while i < bytes.len() {
        let Some(start) = find_marker(bytes, i) else {
            text.push_str(&message[i..]);
            break;
        };
        text.push_str(&message[i..start]);

        if let Ok((pretty, end)) = attempt_fragment(message, start) {
            flush_text(&mut segments, &mut text);
            segments.push(MessageSegment::Json {
                pretty,
                source: message[start..end].to_string(),
            });
            i = end;
        } else {
            // Marker did not open a valid fragment. Keep it as text and
            // resume scanning at the next byte.
            text.push(char::from(bytes[start]));
            i = start + 1;
        }
    }

    flush_text(&mut segments, &mut text);
    segments
}

/// Position of the next fragment-start marker at or after `start`.
///
/// All scanner-significant bytes are ASCII, so walking raw bytes never
/// lands inside a multi-byte UTF-8 sequence.
fn find_marker(bytes: &[u8], start: usize) -> Option<usize> {
    bytes[start..]
        .iter()
        .position(|&b| b == b'{' || b == b'[')
        .map(|p| start + p)
}

/// Matches the candidate starting at `start` and pretty-prints it.
/// Returns the printed text and the end index (one past the closer).
fn attempt_fragment(message: &str, start: usize) -> Result<(String, usize), MarkupError> {
    let end = fragment_end(message.as_bytes(), start).ok_or(MarkupError::Match)?;
    let pretty = pretty_print(&message[start..end])?;
    Ok((pretty, end))
}

/// End index of the bracket-balanced candidate starting at `start`, which
/// must hold an opening bracket. Both bracket kinds share one depth counter;
/// brackets inside string literals are skipped, honoring backslash escapes.
fn fragment_end(bytes: &[u8], start: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    let mut i = start;

    while i < bytes.len() {
        let b = bytes[i];
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
        } else {
            match b {
                b'"' => in_string = true,
                b'{' | b'[' => depth += 1,
                b'}' | b']' => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(i + 1);
                    }
                }
                _ => {}
            }
        }
        i += 1;
    }

    None
}

fn flush_text(segments: &mut Vec<MessageSegment>, text: &mut String) {
    if !text.is_empty() {
        segments.push(MessageSegment::Text(std::mem::take(text)));
    }
}
