//! Tests for log level functionality.

use loglens::Level;

#[test]
fn level_ordering() {
    assert!(Level::Debug < Level::Info);
    assert!(Level::Info < Level::Notice);
    assert!(Level::Notice < Level::Error);
    assert!(Level::Error < Level::Fault);
}

#[test]
fn level_display() {
    assert_eq!(Level::Debug.to_string(), "debug");
    assert_eq!(Level::Info.to_string(), "info");
    assert_eq!(Level::Notice.to_string(), "notice");
    assert_eq!(Level::Error.to_string(), "error");
    assert_eq!(Level::Fault.to_string(), "fault");
}

#[test]
fn level_from_str() {
    assert_eq!("debug".parse::<Level>().unwrap(), Level::Debug);
    assert_eq!("INFO".parse::<Level>().unwrap(), Level::Info);
    assert_eq!("Notice".parse::<Level>().unwrap(), Level::Notice);
    assert_eq!("err".parse::<Level>().unwrap(), Level::Error);
    assert_eq!("fatal".parse::<Level>().unwrap(), Level::Fault);
}

#[test]
fn level_from_str_invalid() {
    assert!("invalid".parse::<Level>().is_err());
}

#[test]
fn level_default() {
    assert_eq!(Level::default(), Level::Info);
}

#[test]
fn level_all_is_ordered() {
    let all = Level::all();
    assert_eq!(all.len(), 5);
    assert!(all.windows(2).all(|w| w[0] < w[1]));
}
