//! Caller-held session state threaded between sequence operations.
//!
//! The steps must happen in order: generate, then anchor, then movement.
//! Each step validates against the current state and commits only on
//! success, so a failed step leaves the session as it was.

use crate::anchor::{resolve_anchor, AnchorResolution, PendingAnchor, TieBreak};
use crate::error::{Direction, SeqError};
use crate::report::SequenceReport;
use crate::sequence::{generate, lookup_element, Sequence, SequenceStats};
use crate::subrange::{check_movement, extract_subrange, SubRange};

/// Result of setting an anchor value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnchorStep {
    /// The anchor has an index. Carries the sub-range when a movement was
    /// already set.
    Resolved {
        index: usize,
        subrange: Option<SubRange>,
    },
    /// The value is ambiguous; call [`Session::choose`].
    NeedsTieBreak(PendingAnchor),
}

/// Sequence, anchor and movement carried between operations.
#[derive(Debug, Clone, Default)]
pub struct Session {
    generated: Option<(Sequence, SequenceStats)>,
    anchor: Option<usize>,
    movement: Option<i64>,
    pending: Option<PendingAnchor>,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a new sequence, replacing the old one and clearing the
    /// anchor and movement.
    pub fn generate(&mut self, count: usize) -> Result<&SequenceStats, SeqError> {
        let generated = generate(count)?;
        self.anchor = None;
        self.movement = None;
        self.pending = None;
        let (_, stats) = self.generated.insert(generated);
        Ok(&*stats)
    }

    #[must_use]
    pub fn sequence(&self) -> Option<&Sequence> {
        self.generated.as_ref().map(|(seq, _)| seq)
    }

    #[must_use]
    pub fn stats(&self) -> Option<&SequenceStats> {
        self.generated.as_ref().map(|(_, stats)| stats)
    }

    #[must_use]
    pub fn anchor_index(&self) -> Option<usize> {
        self.anchor
    }

    #[must_use]
    pub fn movement(&self) -> Option<i64> {
        self.movement
    }

    /// Direction of the last accepted movement.
    #[must_use]
    pub fn last_direction(&self) -> Option<Direction> {
        self.movement.map(Direction::of)
    }

    #[must_use]
    pub fn pending(&self) -> Option<&PendingAnchor> {
        self.pending.as_ref()
    }

    fn require_sequence(&self) -> Result<&Sequence, SeqError> {
        self.sequence().ok_or(SeqError::NoSequence)
    }

    /// Element at a 1-based ordinal.
    pub fn lookup(&self, ordinal: i64) -> Result<i64, SeqError> {
        lookup_element(self.require_sequence()?, ordinal)
    }

    /// Anchor on `value`. Re-extracts the sub-range if a movement is set.
    pub fn set_anchor(&mut self, value: i64) -> Result<AnchorStep, SeqError> {
        match resolve_anchor(self.require_sequence()?, value)? {
            AnchorResolution::Resolved(index) => self.commit_anchor(index),
            AnchorResolution::TieBreakRequired(pending) => {
                self.pending = Some(pending);
                Ok(AnchorStep::NeedsTieBreak(pending))
            }
        }
    }

    /// Complete a pending anchor with the caller's choice.
    pub fn choose(&mut self, choice: TieBreak) -> Result<AnchorStep, SeqError> {
        let pending = self.pending.ok_or(SeqError::NoAnchor)?;
        self.commit_anchor(pending.resume(choice))
    }

    fn commit_anchor(&mut self, index: usize) -> Result<AnchorStep, SeqError> {
        let subrange = match self.movement {
            Some(movement) => Some(extract_subrange(self.require_sequence()?, index, movement)?),
            None => None,
        };
        self.anchor = Some(index);
        self.pending = None;
        Ok(AnchorStep::Resolved { index, subrange })
    }

    /// Set the signed movement and extract the sub-range it selects.
    pub fn set_movement(&mut self, movement: i64) -> Result<SubRange, SeqError> {
        let seq = self.require_sequence()?;
        check_movement(movement, seq.len())?;
        let anchor = self.anchor.ok_or(SeqError::NoAnchor)?;
        let subrange = extract_subrange(seq, anchor, movement)?;
        self.movement = Some(movement);
        Ok(subrange)
    }

    /// Sub-range for the current anchor and movement, if both are set.
    pub fn subrange(&self) -> Result<Option<SubRange>, SeqError> {
        let seq = self.require_sequence()?;
        match (self.anchor, self.movement) {
            (Some(anchor), Some(movement)) => extract_subrange(seq, anchor, movement).map(Some),
            _ => Ok(None),
        }
    }

    /// JSON report for the current sequence.
    #[must_use]
    pub fn report(&self) -> Option<SequenceReport> {
        self.generated
            .as_ref()
            .map(|(seq, stats)| SequenceReport::new(seq, stats))
    }
}
