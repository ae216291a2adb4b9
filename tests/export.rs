//! Tests for export formatting and round-trip parsing.

use chrono::{Local, TimeZone};
use loglens::Level;
use loglens::export::{Exporter, format_record, format_records, parse_line, read_lines};
use loglens::record::LogRecord;
use std::fs;
use tempfile::tempdir;

fn sample() -> LogRecord {
    let ts = Local.with_ymd_and_hms(2024, 3, 5, 14, 30, 0).unwrap();
    LogRecord::new(Level::Error, "request failed")
        .timestamp(ts)
        .thread_id(7)
        .subsystem("com.example.net")
}

#[test]
fn format_has_five_fields() {
    let line = format_record(&sample());
    let parts: Vec<&str> = line.splitn(5, ": ").collect();
    assert_eq!(parts.len(), 5);
    assert_eq!(parts[1], "t=7");
    assert_eq!(parts[2], "error");
    assert_eq!(parts[3], "com.example.net");
    assert_eq!(parts[4], "request failed");
}

#[test]
fn format_timestamp_is_rfc3339() {
    let line = format_record(&sample());
    let ts = line.split(": ").next().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(ts).is_ok());
}

#[test]
fn parse_line_inverts_format() {
    let original = sample();
    let parsed = parse_line(&format_record(&original)).unwrap();

    assert_eq!(parsed.timestamp, original.timestamp);
    assert_eq!(parsed.level, original.level);
    assert_eq!(parsed.thread_id, original.thread_id);
    assert_eq!(parsed.subsystem, original.subsystem);
    assert_eq!(parsed.message, original.message);
}

#[test]
fn parse_line_keeps_colons_in_message() {
    let record = sample().subsystem("s");
    let record = LogRecord {
        message: "status: ok: fine".to_string(),
        ..record
    };
    let parsed = parse_line(&format_record(&record)).unwrap();
    assert_eq!(parsed.message, "status: ok: fine");
}

#[test]
fn parse_line_truncates_subsystem_containing_separator() {
    let record = sample().subsystem("net: http");
    let parsed = parse_line(&format_record(&record)).unwrap();
    assert_eq!(parsed.subsystem, "net");
    assert_eq!(parsed.message, "http: request failed");
}

#[test]
fn parse_line_rejects_other_shapes() {
    assert!(parse_line("plain log line").is_none());
    assert!(parse_line("").is_none());
    assert!(parse_line("2024-03-05: t=x: error: s: m").is_none());
    assert!(parse_line("not-a-date: t=1: error: s: m").is_none());
}

#[test]
fn format_records_joins_lines() {
    let records = vec![sample(), sample()];
    let text = format_records(&records);
    assert_eq!(text.lines().count(), 2);
}

#[test]
fn export_writes_named_file() {
    let dir = tempdir().unwrap();
    let exporter = Exporter::new()
        .dir(dir.path().display().to_string())
        .file_stem("session");

    let path = exporter.export(&[sample()]).unwrap();

    assert!(path.exists());
    let name = path.file_name().unwrap().to_str().unwrap();
    assert!(name.starts_with("session-"));
    assert!(name.ends_with(".log"));

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.ends_with('\n'));
    assert_eq!(content.lines().count(), 1);
}

#[test]
fn export_creates_missing_directory() {
    let dir = tempdir().unwrap();
    let nested = dir.path().join("a").join("b");
    let exporter = Exporter::new().dir(nested.display().to_string());

    let path = exporter.export(&[sample()]).unwrap();
    assert!(path.starts_with(&nested));
    assert!(path.exists());
}

#[test]
fn exports_get_unique_names() {
    let dir = tempdir().unwrap();
    let exporter = Exporter::new().dir(dir.path().display().to_string());

    let first = exporter.export(&[sample()]).unwrap();
    let second = exporter.export(&[sample()]).unwrap();
    assert_ne!(first, second);
}

#[test]
fn read_lines_round_trips_export() {
    let dir = tempdir().unwrap();
    let exporter = Exporter::new().dir(dir.path().display().to_string());
    let records = vec![
        sample(),
        LogRecord::new(Level::Info, "second").thread_id(1),
    ];

    let path = exporter.export(&records).unwrap();
    let lines = read_lines(&path).unwrap();

    assert_eq!(lines.len(), 2);
    let parsed = parse_line(&lines[0]).unwrap();
    assert_eq!(parsed.message, "request failed");
    assert_eq!(parse_line(&lines[1]).unwrap().message, "second");
}

#[test]
fn empty_export_writes_empty_file() {
    let dir = tempdir().unwrap();
    let exporter = Exporter::new().dir(dir.path().display().to_string());

    let path = exporter.export(&[]).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "");
}
