//! # fibseq-core
//!
//! Core library for fibseq. Generates bounded Fibonacci sequences with
//! aggregate statistics, looks up elements by ordinal, resolves anchors by
//! value, and extracts contiguous sub-ranges around an anchor.

pub mod anchor;
pub mod constants;
pub mod error;
pub mod input;
pub mod iterator;
pub mod report;
pub mod sequence;
pub mod session;
pub mod subrange;

// Re-exports
pub use anchor::{resolve_anchor, resolve_anchor_with, AnchorResolution, PendingAnchor, TieBreak};
pub use constants::{exit_codes, MAX_COUNT, MAX_REPRESENTABLE_LEN};
pub use error::{Direction, SeqError};
pub use report::SequenceReport;
pub use sequence::{generate, lookup_element, Sequence, SequenceStats};
pub use session::{AnchorStep, Session};
pub use subrange::{extract_subrange, SubRange};
