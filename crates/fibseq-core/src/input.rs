//! Parsing of raw text input into validated values.
//!
//! Every value is first read as a signed 32-bit integer.

use crate::constants::MAX_COUNT;
use crate::error::SeqError;
use crate::subrange::check_movement;

fn parse_i32(raw: &str) -> Option<i32> {
    raw.trim().parse().ok()
}

/// Parse an element count in `1..=MAX_COUNT`.
pub fn parse_count(raw: &str) -> Result<usize, SeqError> {
    parse_i32(raw)
        .and_then(|n| usize::try_from(n).ok())
        .filter(|&n| n >= 1)
        .ok_or_else(|| {
            SeqError::invalid(
                raw.trim(),
                format!("please enter a valid number in range from 1 to {MAX_COUNT}"),
            )
        })
}

/// Parse a 1-based ordinal for a sequence of `len` elements.
pub fn parse_ordinal(raw: &str, len: usize) -> Result<usize, SeqError> {
    let ordinal = parse_i32(raw).ok_or(SeqError::OutOfRange {
        ordinal: 0,
        max: len,
    })?;
    usize::try_from(ordinal)
        .ok()
        .filter(|&o| (1..=len).contains(&o))
        .ok_or(SeqError::OutOfRange {
            ordinal: i64::from(ordinal),
            max: len,
        })
}

/// Parse an anchor value.
pub fn parse_anchor_value(raw: &str) -> Result<i64, SeqError> {
    parse_i32(raw)
        .map(i64::from)
        .ok_or_else(|| SeqError::invalid(raw.trim(), "please enter a valid number"))
}

/// Parse a signed movement for a sequence of `len` elements.
pub fn parse_movement(raw: &str, len: usize) -> Result<i64, SeqError> {
    let movement = parse_i32(raw)
        .map(i64::from)
        .ok_or_else(|| SeqError::invalid(raw.trim(), "please enter a valid number"))?;
    check_movement(movement, len)?;
    Ok(movement)
}
