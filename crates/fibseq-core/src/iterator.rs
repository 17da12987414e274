//! Lazy Fibonacci iterator over `i64` using the standard additive recurrence.

/// Lazy iterator over the Fibonacci sequence.
///
/// Yields `(index, F(index))` pairs starting from F(0) and stops after the
/// last value representable as `i64`.
///
/// # Example
/// ```
/// use fibseq_core::iterator::FibIterator;
/// let fibs: Vec<i64> = FibIterator::new().take(7).map(|(_, v)| v).collect();
/// assert_eq!(fibs, [0, 1, 1, 2, 3, 5, 8]);
/// ```
#[derive(Debug, Clone)]
pub struct FibIterator {
    current: Option<i64>,
    next: Option<i64>,
    index: usize,
}

impl FibIterator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: Some(0),
            next: Some(1),
            index: 0,
        }
    }
}

impl Default for FibIterator {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FibIterator {
    type Item = (usize, i64);

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.current?;
        let idx = self.index;
        let following = self.next.and_then(|n| value.checked_add(n));
        self.current = std::mem::replace(&mut self.next, following);
        self.index += 1;
        Some((idx, value))
    }
}

impl std::iter::FusedIterator for FibIterator {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_ten() {
        let vals: Vec<i64> = FibIterator::new().take(10).map(|(_, v)| v).collect();
        assert_eq!(vals, [0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);
    }

    #[test]
    fn yields_correct_indices() {
        let indices: Vec<usize> = FibIterator::new().take(5).map(|(i, _)| i).collect();
        assert_eq!(indices, [0, 1, 2, 3, 4]);
    }

    #[test]
    fn stops_at_last_representable_value() {
        let last = FibIterator::new().last().unwrap();
        // F(92) is the largest Fibonacci number that fits in i64.
        assert_eq!(last, (92, 7_540_113_804_746_346_429));
    }

    #[test]
    fn fused_after_exhaustion() {
        let mut iter = FibIterator::new();
        for _ in iter.by_ref() {}
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }
}
