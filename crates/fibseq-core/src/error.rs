//! Error type shared by every sequence operation.

use std::fmt;

/// Direction a sub-range extends from its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards higher indices, starting at the anchor.
    Right,
    /// Towards lower indices, ending at the anchor.
    Left,
}

impl Direction {
    /// Direction implied by the sign of a movement.
    #[must_use]
    pub fn of(movement: i64) -> Self {
        if movement > 0 {
            Self::Right
        } else {
            Self::Left
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Right => f.write_str("right"),
            Self::Left => f.write_str("left"),
        }
    }
}

/// Error type for sequence operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeqError {
    /// Raw input could not be parsed or lies outside its declared range.
    #[error("invalid input {input:?}: {reason}")]
    InvalidInput { input: String, reason: String },

    /// The running sum no longer fits in a signed 64-bit accumulator.
    #[error("overflow occurred: sum exceeds i64 range at element {index}")]
    Overflow { index: usize },

    /// A 1-based ordinal lies outside the sequence.
    #[error("{ordinal} is out of range, expected a number from 1 to {max}")]
    OutOfRange { ordinal: i64, max: usize },

    /// A 0-based anchor index lies outside the sequence.
    #[error("anchor index {index} is out of range, expected an index from 0 to {last}", last = .len.saturating_sub(1))]
    IndexOutOfRange { index: usize, len: usize },

    /// The anchor value does not occur in the sequence.
    #[error("{0} is not a number from the fibonacci sequence")]
    ValueNotFound(i64),

    /// The requested sub-range runs past the end of the sequence.
    #[error(
        "out of range: {requested} elements requested to the {direction}, only {available} available"
    )]
    RangeBounds {
        direction: Direction,
        requested: u64,
        available: usize,
    },

    /// The anchor value is ambiguous and no tie-break was supplied.
    #[error("anchor value {0} occurs twice; choose the first or second occurrence")]
    TieBreakRequired(i64),

    /// A session step needs a generated sequence.
    #[error("no sequence generated yet")]
    NoSequence,

    /// A session step needs a resolved anchor.
    #[error("no anchor selected yet")]
    NoAnchor,
}

impl SeqError {
    pub(crate) fn invalid(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            input: input.into(),
            reason: reason.into(),
        }
    }
}
