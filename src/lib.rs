// Forbid unsafe code except when the ffi feature is enabled
#![cfg_attr(not(feature = "ffi"), forbid(unsafe_code))]

//! `loglens` - Embeddable log viewer core with inline JSON markup.
//!
//! A library for browsing application logs with support for:
//! - Splitting log messages into plain-text and embedded-JSON segments
//! - Strict, idempotent JSON pretty-printing with source key order
//! - Line classification for per-role syntax coloring
//! - Level, field, and search filtering over captured records
//! - Plain-text export with round-trip parsing and retention pruning
//! - Interactive shell mode
//! - C-ABI FFI bindings
//!
//! # Example
//!
//! ```
//! use loglens::markup::{MessageSegment, extract};
//!
//! let segments = extract("status: ok {\"code\":200}");
//!
//! assert_eq!(segments.len(), 2);
//! assert!(matches!(segments[0], MessageSegment::Text(_)));
//! assert!(segments[1].is_json());
//! ```
//!
//! # Features
//!
//! - `cli` (default): Enables command-line interface and interactive shell
//! - `ffi`: Enables C-ABI FFI bindings

// Core modules (always available)
pub mod config;
pub mod export;
pub mod filter;
pub mod internal;
pub mod level;
pub mod markup;
pub mod record;
pub mod render;

mod error;

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;

// Shell module (feature-gated)
#[cfg(feature = "cli")]
pub mod shell;

// FFI module (feature-gated)
#[cfg(feature = "ffi")]
pub mod ffi;

// Re-exports for convenience
pub use config::Config;
pub use error::Error;
pub use export::{
    ExportFileInfo, ExportStats, Exporter, PruneOptions, PruneResult, format_record,
    format_records, format_size, parse_line, parse_size, prune, read_lines, stats,
};
pub use filter::{FilterSet, LogKind, RecordFilter, SearchQuery};
pub use level::Level;
pub use markup::{
    ClassifiedLine, LineRole, MarkupError, MessageSegment, ValueKind, classify, extract,
    pretty_print,
};
pub use record::{LogRecord, LogSource, MemorySource, TimeWindow};
pub use render::{ALL_THEMES, Color, Renderer, Theme, colorize};

// FFI re-exports
#[cfg(feature = "ffi")]
pub use ffi::{
    loglens_markup, loglens_pretty_json, loglens_segment_count, loglens_string_free,
};
