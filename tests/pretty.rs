//! Tests for strict JSON pretty-printing.

use loglens::markup::{MarkupError, pretty_print};

#[test]
fn object_uses_two_space_indent() {
    let pretty = pretty_print(r#"{"code":200,"ok":true}"#).unwrap();
    assert_eq!(pretty, "{\n  \"code\": 200,\n  \"ok\": true\n}");
}

#[test]
fn key_order_is_source_order() {
    let pretty = pretty_print(r#"{"z":1,"a":2,"m":3}"#).unwrap();
    let keys: Vec<&str> = pretty
        .lines()
        .filter_map(|l| l.trim().strip_prefix('"'))
        .filter_map(|l| l.split('"').next())
        .collect();
    assert_eq!(keys, vec!["z", "a", "m"]);
}

#[test]
fn nested_values_indent_deeper() {
    let pretty = pretty_print(r#"{"outer":{"inner":[1,2]}}"#).unwrap();
    assert_eq!(
        pretty,
        "{\n  \"outer\": {\n    \"inner\": [\n      1,\n      2\n    ]\n  }\n}"
    );
}

#[test]
fn pretty_printing_is_idempotent() {
    let once = pretty_print(r#"{"a":{"b":[true,null,"s"]},"c":1.5}"#).unwrap();
    let twice = pretty_print(&once).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn scalar_fragments_print() {
    assert_eq!(pretty_print("[]").unwrap(), "[]");
    assert_eq!(pretty_print("{}").unwrap(), "{}");
    assert_eq!(pretty_print("[1]").unwrap(), "[\n  1\n]");
}

#[test]
fn string_escapes_survive() {
    let pretty = pretty_print(r#"{"msg":"line\nbreak \"q\""}"#).unwrap();
    assert!(pretty.contains(r#""msg": "line\nbreak \"q\"""#));
}

#[test]
fn bare_keys_are_rejected() {
    assert!(matches!(
        pretty_print("{a:1}"),
        Err(MarkupError::Parse(_))
    ));
}

#[test]
fn single_quotes_are_rejected() {
    assert!(pretty_print("{'a': 1}").is_err());
}

#[test]
fn trailing_commas_are_rejected() {
    assert!(pretty_print(r#"{"a":1,}"#).is_err());
    assert!(pretty_print("[1,2,]").is_err());
}

#[test]
fn truncated_input_is_rejected() {
    assert!(pretty_print(r#"{"a":"#).is_err());
}

#[test]
fn trailing_garbage_is_rejected() {
    assert!(pretty_print(r#"{"a":1} extra"#).is_err());
}

#[test]
fn oversized_integers_become_lossy_floats() {
    let pretty = pretty_print(r#"{"n":1234567890123456789012345678901234567890}"#).unwrap();
    assert!(pretty.contains("1.2345678901234568e39"));
    assert_eq!(pretty_print(&pretty).unwrap(), pretty);
}

#[test]
fn numbers_past_float_range_are_rejected() {
    assert!(matches!(
        pretty_print(r#"{"n":1e309}"#),
        Err(MarkupError::Parse(_))
    ));
}

#[test]
fn unicode_strings_round_trip() {
    let pretty = pretty_print(r#"{"name":"日本語"}"#).unwrap();
    assert!(pretty.contains("日本語"));
    assert_eq!(pretty_print(&pretty).unwrap(), pretty);
}
