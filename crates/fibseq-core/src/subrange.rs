//! Contiguous sub-range extraction around an anchor index.

use std::fmt;

use crate::error::{Direction, SeqError};
use crate::sequence::{write_joined, Sequence};

/// A contiguous slice of a sequence, copied out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubRange(Vec<i64>);

impl SubRange {
    #[must_use]
    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SubRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_joined(f, &self.0)
    }
}

/// Check that `signed_length` is non-zero and no longer than the sequence.
///
/// # Errors
///
/// [`SeqError::InvalidInput`] otherwise.
pub fn check_movement(signed_length: i64, len: usize) -> Result<(), SeqError> {
    if signed_length == 0 {
        return Err(SeqError::invalid("0", "movement must not be zero"));
    }
    let fits = usize::try_from(signed_length.unsigned_abs()).is_ok_and(|abs| abs <= len);
    if !fits {
        return Err(SeqError::invalid(
            signed_length.to_string(),
            format!("movement must be between -{len} and {len}"),
        ));
    }
    Ok(())
}

/// Copy `|signed_length|` elements from `seq` starting at `anchor_index`.
///
/// A positive length copies rightward from the anchor; a negative length
/// copies the run that ends at the anchor, inclusive.
///
/// # Errors
///
/// [`SeqError::InvalidInput`] for a zero or oversized length,
/// [`SeqError::IndexOutOfRange`] if `anchor_index` is outside `seq`,
/// [`SeqError::RangeBounds`] if the run does not fit in that direction.
pub fn extract_subrange(
    seq: &Sequence,
    anchor_index: usize,
    signed_length: i64,
) -> Result<SubRange, SeqError> {
    let len = seq.len();
    check_movement(signed_length, len)?;
    if anchor_index >= len {
        return Err(SeqError::IndexOutOfRange {
            index: anchor_index,
            len,
        });
    }

    let direction = Direction::of(signed_length);
    let requested = signed_length.unsigned_abs();
    let available = match direction {
        Direction::Right => len - anchor_index,
        Direction::Left => anchor_index + 1,
    };
    // check_movement bounded `requested` by `len`, so it fits in usize.
    let count = usize::try_from(requested).unwrap_or(usize::MAX);
    if count > available {
        return Err(SeqError::RangeBounds {
            direction,
            requested,
            available,
        });
    }

    let start = match direction {
        Direction::Right => anchor_index,
        Direction::Left => anchor_index + 1 - count,
    };
    let values = seq.as_slice()[start..start + count].to_vec();
    tracing::debug!(anchor_index, signed_length, %direction, "extracted sub-range");
    Ok(SubRange(values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::generate;

    fn seq10() -> Sequence {
        generate(10).unwrap().0
    }

    #[test]
    fn rightward() {
        let range = extract_subrange(&seq10(), 4, 3).unwrap();
        assert_eq!(range.as_slice(), [3, 5, 8]);
        assert_eq!(range.to_string(), "3,5,8");
    }

    #[test]
    fn leftward() {
        let range = extract_subrange(&seq10(), 4, -3).unwrap();
        assert_eq!(range.as_slice(), [1, 2, 3]);
    }

    #[test]
    fn single_element_either_way() {
        assert_eq!(extract_subrange(&seq10(), 6, 1).unwrap().as_slice(), [8]);
        assert_eq!(extract_subrange(&seq10(), 6, -1).unwrap().as_slice(), [8]);
    }

    #[test]
    fn whole_sequence_both_ends() {
        let s = seq10();
        assert_eq!(extract_subrange(&s, 0, 10).unwrap().as_slice(), s.as_slice());
        assert_eq!(extract_subrange(&s, 9, -10).unwrap().as_slice(), s.as_slice());
    }

    #[test]
    fn right_bound_exceeded() {
        assert_eq!(
            extract_subrange(&seq10(), 4, 7),
            Err(SeqError::RangeBounds {
                direction: Direction::Right,
                requested: 7,
                available: 6,
            })
        );
    }

    #[test]
    fn left_bound_exceeded() {
        assert_eq!(
            extract_subrange(&seq10(), 4, -6),
            Err(SeqError::RangeBounds {
                direction: Direction::Left,
                requested: 6,
                available: 5,
            })
        );
    }

    #[test]
    fn zero_length_rejected() {
        assert!(matches!(
            extract_subrange(&seq10(), 4, 0),
            Err(SeqError::InvalidInput { .. })
        ));
    }

    #[test]
    fn length_longer_than_sequence_rejected() {
        for len in [11, -11, i64::MAX, i64::MIN] {
            assert!(matches!(
                extract_subrange(&seq10(), 4, len),
                Err(SeqError::InvalidInput { .. })
            ));
        }
    }

    #[test]
    fn anchor_outside_sequence() {
        let err = extract_subrange(&seq10(), 10, 1).unwrap_err();
        assert_eq!(err, SeqError::IndexOutOfRange { index: 10, len: 10 });
        assert_eq!(
            err.to_string(),
            "anchor index 10 is out of range, expected an index from 0 to 9"
        );

        assert_eq!(
            extract_subrange(&seq10(), usize::MAX, -1),
            Err(SeqError::IndexOutOfRange {
                index: usize::MAX,
                len: 10
            })
        );
    }
}
