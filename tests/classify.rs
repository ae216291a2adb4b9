//! Tests for pretty-printed line classification.

use loglens::markup::{LineRole, ValueKind, classify, pretty_print};

#[test]
fn brackets_are_structural() {
    let lines = classify("{\n  \"a\": 1\n}");
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0].role, LineRole::StructuralBracket);
    assert_eq!(lines[2].role, LineRole::StructuralBracket);
}

#[test]
fn closing_bracket_with_comma_is_structural() {
    let pretty = pretty_print(r#"{"a":[1],"b":2}"#).unwrap();
    let lines = classify(&pretty);
    // "  ],"
    assert_eq!(lines[3].role, LineRole::StructuralBracket);
}

#[test]
fn key_value_splits_at_first_colon() {
    let lines = classify("  \"url\": \"http://x/y\",");
    let LineRole::KeyValue { key, value, kind } = &lines[0].role else {
        panic!("expected key-value role");
    };
    assert_eq!(key, "\"url\":");
    assert_eq!(value, "\"http://x/y\",");
    assert_eq!(*kind, ValueKind::StringLiteral);
}

#[test]
fn string_values_classify_as_string() {
    for line in ["  \"k\": \"v\"", "  \"k\": \"v\","] {
        let lines = classify(line);
        let LineRole::KeyValue { kind, .. } = &lines[0].role else {
            panic!("expected key-value role");
        };
        assert_eq!(*kind, ValueKind::StringLiteral);
    }
}

#[test]
fn booleans_classify_as_boolean() {
    for line in ["  \"k\": true", "  \"k\": false,"] {
        let lines = classify(line);
        let LineRole::KeyValue { kind, .. } = &lines[0].role else {
            panic!("expected key-value role");
        };
        assert_eq!(*kind, ValueKind::BooleanLiteral);
    }
}

#[test]
fn numbers_and_null_classify_as_other() {
    for line in ["  \"k\": 42,", "  \"k\": 1.5", "  \"k\": null"] {
        let lines = classify(line);
        let LineRole::KeyValue { kind, .. } = &lines[0].role else {
            panic!("expected key-value role");
        };
        assert_eq!(*kind, ValueKind::OtherScalar);
    }
}

#[test]
fn object_opener_value_is_other() {
    // "key": { ... the value text is just the opener
    let lines = classify("  \"nested\": {");
    let LineRole::KeyValue { value, kind, .. } = &lines[0].role else {
        panic!("expected key-value role");
    };
    assert_eq!(value, "{");
    assert_eq!(*kind, ValueKind::OtherScalar);
}

#[test]
fn array_elements_are_plain_values() {
    let pretty = pretty_print(r#"[1,"two",false]"#).unwrap();
    let lines = classify(&pretty);
    assert_eq!(lines[1].role, LineRole::PlainValue);
    assert_eq!(lines[2].role, LineRole::PlainValue);
    // Booleans without a key still count as plain values.
    assert_eq!(lines[3].role, LineRole::PlainValue);
}

#[test]
fn indent_counts_leading_spaces() {
    let pretty = pretty_print(r#"{"outer":{"inner":1}}"#).unwrap();
    let lines = classify(&pretty);
    assert_eq!(lines[0].indent, 0);
    assert_eq!(lines[1].indent, 2);
    assert_eq!(lines[2].indent, 4);
}

#[test]
fn text_keeps_raw_line() {
    let lines = classify("  \"a\": 1");
    assert_eq!(lines[0].text, "  \"a\": 1");
}

#[test]
fn one_entry_per_line() {
    let pretty = pretty_print(r#"{"a":1,"b":[true],"c":"s"}"#).unwrap();
    assert_eq!(classify(&pretty).len(), pretty.lines().count());
}
