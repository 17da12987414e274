#![no_main]

use libfuzzer_sys::fuzz_target;

use fibseq_core::input::{parse_anchor_value, parse_count, parse_movement, parse_ordinal};
use fibseq_core::MAX_COUNT;

fuzz_target!(|data: &[u8]| {
    let Ok(raw) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(count) = parse_count(raw) {
        assert!((1..=MAX_COUNT).contains(&count));
    }
    if let Ok(ordinal) = parse_ordinal(raw, 10) {
        assert!((1..=10).contains(&ordinal));
    }
    if let Ok(movement) = parse_movement(raw, 10) {
        assert!(movement != 0 && movement.abs() <= 10);
    }
    let _ = parse_anchor_value(raw);
});
