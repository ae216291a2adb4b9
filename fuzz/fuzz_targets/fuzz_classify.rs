#![no_main]
use libfuzzer_sys::fuzz_target;
use loglens::markup::classify;

fuzz_target!(|data: &str| {
    // Must not panic on any text, not just pretty-printer output
    let lines = classify(data);
    assert_eq!(lines.len(), data.lines().count());
});
