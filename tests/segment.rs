//! Tests for message segment extraction.

use loglens::markup::{MessageSegment, extract};

fn source_concat(segments: &[MessageSegment]) -> String {
    segments.iter().map(MessageSegment::source_text).collect()
}

#[test]
fn plain_text_is_one_segment() {
    let segments = extract("Server started on port 8080");
    assert_eq!(
        segments,
        vec![MessageSegment::Text(
            "Server started on port 8080".to_string()
        )]
    );
}

#[test]
fn empty_message_has_no_segments() {
    assert!(extract("").is_empty());
}

#[test]
fn pure_json_is_one_segment() {
    let segments = extract(r#"{"code":200}"#);
    assert_eq!(segments.len(), 1);
    assert!(segments[0].is_json());
    assert_eq!(segments[0].source_text(), r#"{"code":200}"#);
}

#[test]
fn text_then_json() {
    let segments = extract(r#"Request done: {"status":"ok"}"#);
    assert_eq!(segments.len(), 2);
    assert_eq!(
        segments[0],
        MessageSegment::Text("Request done: ".to_string())
    );
    assert!(segments[1].is_json());
}

#[test]
fn json_then_text() {
    let segments = extract(r#"{"a":1} trailing"#);
    assert_eq!(segments.len(), 2);
    assert!(segments[0].is_json());
    assert_eq!(segments[1], MessageSegment::Text(" trailing".to_string()));
}

#[test]
fn multiple_fragments_interleaved() {
    let segments = extract(r#"RESPONSE 200 Headers: {"ct":"json"} Body: {"ok":true} done"#);
    assert_eq!(segments.len(), 5);
    assert!(!segments[0].is_json());
    assert!(segments[1].is_json());
    assert!(!segments[2].is_json());
    assert!(segments[3].is_json());
    assert_eq!(segments[4], MessageSegment::Text(" done".to_string()));
}

#[test]
fn multiline_message_splits_around_fragment() {
    let segments =
        extract("RESPONSE: 200\nHeaders:\n{\"Content-Type\":\"application/json\"}\nBody done");
    assert_eq!(segments.len(), 3);
    assert_eq!(
        segments[0],
        MessageSegment::Text("RESPONSE: 200\nHeaders:\n".to_string())
    );
    let MessageSegment::Json { pretty, .. } = &segments[1] else {
        panic!("expected json segment");
    };
    assert!(pretty.contains("\"Content-Type\""));
    assert_eq!(segments[2], MessageSegment::Text("\nBody done".to_string()));
}

#[test]
fn array_of_objects_is_one_fragment() {
    let segments = extract("Body:\n[{\"id\":1},{\"id\":2}]");
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0], MessageSegment::Text("Body:\n".to_string()));
    let MessageSegment::Json { pretty, .. } = &segments[1] else {
        panic!("expected json segment");
    };
    assert_eq!(pretty.matches("\"id\"").count(), 2);
}

#[test]
fn array_fragment_extracts() {
    let segments = extract("ids [1, 2, 3] loaded");
    assert_eq!(segments.len(), 3);
    assert!(segments[1].is_json());
    assert_eq!(segments[1].source_text(), "[1, 2, 3]");
}

#[test]
fn unbalanced_fragment_stays_text() {
    let segments = extract("Not JSON: {missing:true");
    assert_eq!(
        segments,
        vec![MessageSegment::Text("Not JSON: {missing:true".to_string())]
    );
}

#[test]
fn balanced_but_invalid_json_stays_text() {
    // Balanced braces, but bare keys don't parse.
    let segments = extract("config {a:1} loaded");
    assert_eq!(
        segments,
        vec![MessageSegment::Text("config {a:1} loaded".to_string())]
    );
}

#[test]
fn failed_marker_does_not_hide_later_fragment() {
    // The bad opener consumes one character, so the inner array still
    // extracts.
    let segments = extract("a {bad [1,2] b");
    assert_eq!(segments.len(), 3);
    assert_eq!(segments[0], MessageSegment::Text("a {bad ".to_string()));
    assert!(segments[1].is_json());
    assert_eq!(segments[1].source_text(), "[1,2]");
    assert_eq!(segments[2], MessageSegment::Text(" b".to_string()));
}

#[test]
fn brackets_inside_strings_do_not_close() {
    let segments = extract(r#"{"msg":"brace } bracket ]"}"#);
    assert_eq!(segments.len(), 1);
    assert!(segments[0].is_json());
}

#[test]
fn escaped_quote_inside_string() {
    let segments = extract(r#"{"msg":"say \"hi\" {now}"}"#);
    assert_eq!(segments.len(), 1);
    assert!(segments[0].is_json());
}

#[test]
fn adjacent_fragments_have_no_text_between() {
    let segments = extract("{}[]");
    assert_eq!(segments.len(), 2);
    assert!(segments[0].is_json());
    assert!(segments[1].is_json());
}

#[test]
fn mixed_bracket_kinds_share_depth() {
    // The candidate starting at '{' closes at ']', which is not valid JSON,
    // so the whole run stays text.
    let segments = extract("{[}");
    assert_eq!(segments, vec![MessageSegment::Text("{[}".to_string())]);
}

#[test]
fn nested_json_extracts_as_one_fragment() {
    let segments = extract(r#"evt {"outer":{"inner":[1,{"deep":true}]}} end"#);
    assert_eq!(segments.len(), 3);
    assert!(segments[1].is_json());
    assert_eq!(
        segments[1].source_text(),
        r#"{"outer":{"inner":[1,{"deep":true}]}}"#
    );
}

#[test]
fn source_concat_reproduces_input() {
    let inputs = [
        "",
        "plain text only",
        r#"{"a":1}"#,
        r#"pre {"a":1} mid [2,3] post"#,
        "broken { fragment [1] {nope",
        r#"{"s":"}]"} tail"#,
        "unicode ✓ before {\"k\":\"v\"} after ✓",
    ];
    for input in inputs {
        assert_eq!(source_concat(&extract(input)), input, "input: {input}");
    }
}

#[test]
fn no_adjacent_text_segments() {
    let inputs = [
        "a {bad [1,2] b",
        "{{{",
        r#"x {"a":1} y {"b":2} z"#,
        "[[]] {oops",
    ];
    for input in inputs {
        let segments = extract(input);
        for pair in segments.windows(2) {
            assert!(
                pair[0].is_json() || pair[1].is_json(),
                "adjacent text segments for input: {input}"
            );
        }
        for segment in &segments {
            assert!(
                !segment.source_text().is_empty(),
                "empty segment for input: {input}"
            );
        }
    }
}

#[test]
fn multibyte_text_around_fragments() {
    let segments = extract("héllo {\"k\":1} wörld");
    assert_eq!(segments.len(), 3);
    assert_eq!(segments[0], MessageSegment::Text("héllo ".to_string()));
    assert_eq!(segments[2], MessageSegment::Text(" wörld".to_string()));
}

#[test]
fn pretty_field_is_pretty_printed() {
    let segments = extract(r#"{"b":1,"a":2}"#);
    let MessageSegment::Json { pretty, source } = &segments[0] else {
        panic!("expected json segment");
    };
    assert_eq!(source, r#"{"b":1,"a":2}"#);
    assert_eq!(pretty, "{\n  \"b\": 1,\n  \"a\": 2\n}");
}
