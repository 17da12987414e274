#![no_main]

use libfuzzer_sys::fuzz_target;

use fibseq_core::{extract_subrange, generate, SeqError};

fuzz_target!(|data: &[u8]| {
    if data.len() < 17 {
        return;
    }
    // 1 byte count, 8 bytes anchor index, 8 bytes signed length
    let count = usize::from(data[0] % 91) + 1;
    let anchor = u64::from_le_bytes(data[1..9].try_into().unwrap()) as usize;
    let length = i64::from_le_bytes(data[9..17].try_into().unwrap());

    let (seq, _) = generate(count).unwrap();
    match extract_subrange(&seq, anchor, length) {
        Ok(range) => {
            assert_eq!(range.len() as u64, length.unsigned_abs());
            let s = seq.as_slice();
            let start = if length > 0 {
                anchor
            } else {
                anchor + 1 - range.len()
            };
            assert_eq!(range.as_slice(), &s[start..start + range.len()]);
        }
        Err(SeqError::RangeBounds { requested, available, .. }) => {
            assert!(requested > available as u64);
        }
        Err(SeqError::IndexOutOfRange { index, len }) => {
            assert!(index >= len);
        }
        Err(SeqError::InvalidInput { .. }) => {}
        Err(e) => panic!("unexpected error: {e}"),
    }
});
