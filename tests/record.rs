//! Tests for records, time windows, and sources.

use chrono::{Duration, Local};
use loglens::Level;
use loglens::record::{LogRecord, LogSource, MemorySource, TimeWindow};

#[test]
fn builder_fills_metadata() {
    let record = LogRecord::new(Level::Notice, "m")
        .category("ui")
        .subsystem("com.example.app")
        .process("example")
        .process_id(42)
        .thread_id(7)
        .activity_id(9)
        .sender("libexample.dylib");

    assert_eq!(record.level, Level::Notice);
    assert_eq!(record.category, "ui");
    assert_eq!(record.subsystem, "com.example.app");
    assert_eq!(record.process, "example");
    assert_eq!(record.process_id, 42);
    assert_eq!(record.thread_id, 7);
    assert_eq!(record.activity_id, 9);
    assert_eq!(record.sender, "libexample.dylib");
}

#[test]
fn new_record_has_empty_metadata() {
    let record = LogRecord::new(Level::Info, "m");
    assert!(record.category.is_empty());
    assert!(record.subsystem.is_empty());
    assert_eq!(record.process_id, 0);
}

#[test]
fn window_contains_recent_timestamps() {
    let window = TimeWindow::last_seconds(3600);
    assert!(window.contains(Local::now()));
    assert!(!window.contains(Local::now() - Duration::hours(2)));
}

#[test]
fn window_start_is_boundary() {
    let window = TimeWindow::last_seconds(60);
    assert!(window.contains(window.start()));
}

#[test]
fn huge_window_widens_instead_of_failing() {
    let window = TimeWindow::last_seconds(i64::MAX);
    assert!(window.contains(Local::now() - Duration::days(365 * 50)));
}

#[test]
fn default_window_is_one_hour() {
    let window = TimeWindow::default();
    assert!(window.contains(Local::now() - Duration::minutes(59)));
    assert!(!window.contains(Local::now() - Duration::minutes(61)));
}

#[test]
fn memory_source_fetch_respects_window() {
    let mut source = MemorySource::new();
    source.push(LogRecord::new(Level::Info, "old").timestamp(Local::now() - Duration::hours(3)));
    source.push(LogRecord::new(Level::Info, "recent"));

    let fetched = source.fetch(&TimeWindow::default(), None).unwrap();
    assert_eq!(fetched.len(), 1);
    assert_eq!(fetched[0].message, "recent");
}

#[test]
fn memory_source_fetch_filters_subsystem() {
    let mut source = MemorySource::new();
    source.push(LogRecord::new(Level::Info, "a").subsystem("com.example.app"));
    source.push(LogRecord::new(Level::Info, "b").subsystem("com.example.net"));
    source.push(LogRecord::new(Level::Info, "c"));

    let window = TimeWindow::default();
    let fetched = source.fetch(&window, Some("com.example.app")).unwrap();
    assert_eq!(fetched.len(), 1);
    assert_eq!(fetched[0].message, "a");

    // Without a subsystem the fetch returns everything in the window.
    assert_eq!(source.fetch(&window, None).unwrap().len(), 3);
}

#[test]
fn memory_source_len_tracks_pushes() {
    let mut source = MemorySource::new();
    assert!(source.is_empty());
    source.push(LogRecord::new(Level::Debug, "x"));
    assert_eq!(source.len(), 1);
}
