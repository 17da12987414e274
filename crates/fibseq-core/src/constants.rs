//! Constants for sequence bounds and process exit codes.

/// Largest element count accepted by [`generate`](crate::sequence::generate).
///
/// Counts are entered as signed 32-bit integers, so the upper bound is
/// `i32::MAX`. In practice generation overflows long before this.
pub const MAX_COUNT: usize = i32::MAX as usize;

/// Longest sequence whose running sum still fits in an `i64`.
///
/// sum(F(0)..F(n-1)) = F(n+1) - 1, and F(92) - 1 is the last such value
/// below `i64::MAX`.
pub const MAX_REPRESENTABLE_LEN: usize = 91;

/// Process exit codes for the `fibseq` binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Input could not be parsed or was outside its declared range.
    pub const ERROR_INPUT: i32 = 2;
    /// The running sum overflowed.
    pub const ERROR_OVERFLOW: i32 = 3;
    /// An ordinal, anchor or sub-range fell outside the sequence.
    pub const ERROR_RANGE: i32 = 4;
    /// The anchor value is not a member of the sequence.
    pub const ERROR_NOT_FOUND: i32 = 5;
}
