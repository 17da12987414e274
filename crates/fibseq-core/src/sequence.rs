//! Bounded sequence generation, statistics, and ordinal lookup.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_COUNT, MAX_REPRESENTABLE_LEN};
use crate::error::SeqError;
use crate::iterator::FibIterator;

/// An immutable, 0-indexed Fibonacci sequence of fixed length.
///
/// Deserializing goes through [`TryFrom<Vec<i64>>`], so only a valid prefix
/// of the Fibonacci sequence is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<i64>", into = "Vec<i64>")]
pub struct Sequence(Vec<i64>);

impl Sequence {
    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Element at a 0-based index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<i64> {
        self.0.get(index).copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }

    /// Index of the first element equal to `value`.
    #[must_use]
    pub fn position(&self, value: i64) -> Option<usize> {
        self.0.iter().position(|&v| v == value)
    }

    /// Whether `value` occurs anywhere in the sequence.
    #[must_use]
    pub fn contains(&self, value: i64) -> bool {
        self.0.contains(&value)
    }
}

impl From<Sequence> for Vec<i64> {
    fn from(seq: Sequence) -> Self {
        seq.0
    }
}

impl TryFrom<Vec<i64>> for Sequence {
    type Error = SeqError;

    /// Accept `values` only if they are a prefix of the Fibonacci sequence.
    fn try_from(values: Vec<i64>) -> Result<Self, Self::Error> {
        if values.is_empty() {
            return Err(SeqError::invalid("[]", "a sequence has at least one element"));
        }
        for ((index, expected), &actual) in FibIterator::new().zip(&values) {
            if expected != actual {
                return Err(SeqError::invalid(
                    actual.to_string(),
                    format!("element {index} should be {expected}"),
                ));
            }
        }
        if values.len() > MAX_REPRESENTABLE_LEN {
            return Err(SeqError::Overflow {
                index: MAX_REPRESENTABLE_LEN,
            });
        }
        Ok(Self(values))
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_joined(f, &self.0)
    }
}

/// Write values separated by commas, without spaces.
pub(crate) fn write_joined(f: &mut fmt::Formatter<'_>, values: &[i64]) -> fmt::Result {
    for (i, v) in values.iter().enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        write!(f, "{v}")?;
    }
    Ok(())
}

/// Aggregate statistics computed while generating a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceStats {
    /// Number of elements.
    pub count: usize,
    /// Sum of all elements.
    pub sum: i64,
    /// Number of even elements.
    pub even_count: usize,
    /// Number of odd elements.
    pub odd_count: usize,
}

/// Generate the first `count` Fibonacci numbers with their statistics.
///
/// `even_count` starts at 1 for F(0) and `odd_count` starts at 1 for F(1)
/// when `count > 1`; elements from index 2 onward are classified by parity.
///
/// # Errors
///
/// [`SeqError::InvalidInput`] if `count` is zero or exceeds [`MAX_COUNT`],
/// [`SeqError::Overflow`] if the running sum does not fit in an `i64`.
pub fn generate(count: usize) -> Result<(Sequence, SequenceStats), SeqError> {
    if count == 0 || count > MAX_COUNT {
        return Err(SeqError::invalid(
            count.to_string(),
            format!("expected a number in range from 1 to {MAX_COUNT}"),
        ));
    }

    let mut values = Vec::with_capacity(count.min(MAX_REPRESENTABLE_LEN + 1));
    let mut sum: i64 = 0;
    let mut even_count = 1;
    let mut odd_count = 0;

    for (index, value) in FibIterator::new().take(count) {
        sum = sum.checked_add(value).ok_or_else(|| {
            tracing::warn!(count, index, "running sum overflowed");
            SeqError::Overflow { index }
        })?;
        match index {
            0 => {}
            1 => odd_count = 1,
            _ if value % 2 == 0 => even_count += 1,
            _ => odd_count += 1,
        }
        values.push(value);
    }

    // The sum is at least as large as any element, so the iterator cannot
    // run dry before the sum overflows. Guard anyway.
    if values.len() < count {
        return Err(SeqError::Overflow {
            index: values.len(),
        });
    }

    tracing::debug!(count, sum, even_count, odd_count, "generated sequence");

    let stats = SequenceStats {
        count,
        sum,
        even_count,
        odd_count,
    };
    Ok((Sequence(values), stats))
}

/// Return the element at a 1-based `ordinal`.
///
/// # Errors
///
/// [`SeqError::OutOfRange`] unless `1 <= ordinal <= seq.len()`.
pub fn lookup_element(seq: &Sequence, ordinal: i64) -> Result<i64, SeqError> {
    let out_of_range = || SeqError::OutOfRange {
        ordinal,
        max: seq.len(),
    };
    let index = usize::try_from(ordinal)
        .ok()
        .and_then(|o| o.checked_sub(1))
        .ok_or_else(out_of_range)?;
    seq.get(index).ok_or_else(out_of_range)
}
