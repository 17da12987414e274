//! JSON report of a generated sequence.
//!
//! Field names are fixed for compatibility with existing consumers,
//! including the `fibonaciiJson` spelling.

use serde::{Deserialize, Serialize};

use crate::error::SeqError;
use crate::sequence::{Sequence, SequenceStats};

/// Serializable summary of a sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceReport {
    pub count: usize,
    pub sum: i64,
    #[serde(rename = "fibonaciiJson")]
    pub values: Vec<i64>,
}

impl SequenceReport {
    #[must_use]
    pub fn new(seq: &Sequence, stats: &SequenceStats) -> Self {
        Self {
            count: stats.count,
            sum: stats.sum,
            values: seq.as_slice().to_vec(),
        }
    }

    /// Render as indented JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse a report previously produced by [`to_json`](Self::to_json).
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }

    /// Check that the report describes a genuine sequence and matches its
    /// own `count` and `sum`.
    pub fn verify(&self) -> Result<Sequence, SeqError> {
        let seq = Sequence::try_from(self.values.clone())?;
        if seq.len() != self.count {
            return Err(SeqError::invalid(
                self.count.to_string(),
                format!("count does not match {} elements", seq.len()),
            ));
        }
        let actual: i64 = seq.as_slice().iter().sum();
        if actual != self.sum {
            return Err(SeqError::invalid(
                self.sum.to_string(),
                format!("sum should be {actual}"),
            ));
        }
        Ok(seq)
    }
}
