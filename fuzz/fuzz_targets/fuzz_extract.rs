#![no_main]
use libfuzzer_sys::fuzz_target;
use loglens::markup::{MessageSegment, extract};

fuzz_target!(|data: &str| {
    // Must not panic on any message
    let segments = extract(data);

    // Segment sources must concatenate back to the input
    let rebuilt: String = segments.iter().map(MessageSegment::source_text).collect();
    assert_eq!(rebuilt, data);

    // No empty segments, no adjacent text segments
    for segment in &segments {
        assert!(!segment.source_text().is_empty());
    }
    for pair in segments.windows(2) {
        assert!(pair[0].is_json() || pair[1].is_json());
    }
});
