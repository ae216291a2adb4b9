//! Inline JSON markup: log messages often embed JSON fragments (request
//! bodies, API responses) inside ordinary text. This module splits a message
//! into ordered text and JSON segments, pretty-prints the JSON, and
//! classifies the printed lines so a renderer can color them per role.

mod classify;
mod pretty;
mod segment;

pub use classify::{ClassifiedLine, LineRole, ValueKind, classify};
pub use pretty::{MarkupError, pretty_print};
pub use segment::{MessageSegment, extract};
