//! Anchor resolution by value, with an explicit two-step tie-break.
//!
//! The value `1` appears twice in any sequence of three or more elements
//! (F(1) and F(2)). Instead of blocking on a prompt, [`resolve_anchor`]
//! returns a [`PendingAnchor`] that the caller resumes once it knows which
//! occurrence is meant.

use std::fmt;
use std::str::FromStr;

use crate::error::SeqError;
use crate::sequence::Sequence;

/// Which of two equal values to anchor on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TieBreak {
    First,
    Second,
}

impl FromStr for TieBreak {
    type Err = SeqError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first" | "1" | "y" | "yes" => Ok(Self::First),
            "second" | "2" | "n" | "no" => Ok(Self::Second),
            other => Err(SeqError::invalid(other, "expected first or second")),
        }
    }
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => f.write_str("first"),
            Self::Second => f.write_str("second"),
        }
    }
}

/// An anchor that needs a [`TieBreak`] before it has an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingAnchor {
    value: i64,
    first: usize,
    second: usize,
}

impl PendingAnchor {
    /// The ambiguous anchor value.
    #[must_use]
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Complete resolution with the caller's choice.
    #[must_use]
    pub fn resume(self, choice: TieBreak) -> usize {
        match choice {
            TieBreak::First => self.first,
            TieBreak::Second => self.second,
        }
    }
}

/// Outcome of the first resolution step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorResolution {
    Resolved(usize),
    TieBreakRequired(PendingAnchor),
}

/// Resolve `value` to its index in `seq`.
///
/// # Errors
///
/// [`SeqError::ValueNotFound`] if `value` is not in `seq`.
pub fn resolve_anchor(seq: &Sequence, value: i64) -> Result<AnchorResolution, SeqError> {
    let first = seq.position(value).ok_or(SeqError::ValueNotFound(value))?;

    if value == 1 && seq.get(first + 1) == Some(1) {
        tracing::debug!(value, "anchor needs a tie-break");
        return Ok(AnchorResolution::TieBreakRequired(PendingAnchor {
            value,
            first,
            second: first + 1,
        }));
    }

    tracing::debug!(value, index = first, "anchor resolved");
    Ok(AnchorResolution::Resolved(first))
}

/// Resolve `value` in one step, applying `tie_break` if one is needed.
///
/// # Errors
///
/// [`SeqError::ValueNotFound`] if `value` is not in `seq`,
/// [`SeqError::TieBreakRequired`] if `value` is ambiguous and `tie_break`
/// is `None`.
pub fn resolve_anchor_with(
    seq: &Sequence,
    value: i64,
    tie_break: Option<TieBreak>,
) -> Result<usize, SeqError> {
    match resolve_anchor(seq, value)? {
        AnchorResolution::Resolved(index) => Ok(index),
        AnchorResolution::TieBreakRequired(pending) => tie_break
            .map(|choice| pending.resume(choice))
            .ok_or(SeqError::TieBreakRequired(value)),
    }
}
