//! CLI result presenter.

use fibseq_core::{Direction, PendingAnchor, Sequence, SequenceReport, SequenceStats, SubRange};

use crate::output::stats_lines;
use crate::ui;

/// Trait for presenting session results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present a freshly generated sequence.
    fn present_sequence(&self, seq: &Sequence, stats: &SequenceStats, details: bool);

    /// Present a looked-up element.
    fn present_element(&self, ordinal: i64, value: i64);

    /// Present a resolved anchor.
    fn present_anchor(&self, value: i64, index: usize);

    /// Ask the user to pick between two equal values.
    fn present_tie_break(&self, pending: &PendingAnchor);

    /// Present an extracted sub-range.
    fn present_subrange(&self, movement: i64, range: &SubRange);

    /// Present the JSON report.
    fn present_report(&self, report: &SequenceReport);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Presenter that prints to the terminal.
pub struct CliPresenter {
    verbose: bool,
    quiet: bool,
}

impl CliPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Lines printed for a generated sequence.
    #[must_use]
    pub fn sequence_lines(&self, seq: &Sequence, stats: &SequenceStats, details: bool) -> Vec<String> {
        if self.quiet {
            return vec![seq.to_string()];
        }
        let mut lines = vec![ui::header("Sequence")];
        for (label, value) in stats_lines(stats, details || self.verbose) {
            lines.push(ui::field(label, &value));
        }
        lines.push(ui::field("Values", &seq.to_string()));
        lines
    }

    /// Lines printed for a sub-range.
    #[must_use]
    pub fn subrange_lines(&self, movement: i64, range: &SubRange) -> Vec<String> {
        if self.quiet {
            return vec![range.to_string()];
        }
        let mut lines = Vec::new();
        if self.verbose {
            let direction = Direction::of(movement);
            lines.push(ui::field(
                "Movement",
                &format!("{} to the {direction}", movement.unsigned_abs()),
            ));
        }
        lines.push(ui::field("Range", &range.to_string()));
        lines
    }
}

impl ResultPresenter for CliPresenter {
    fn present_sequence(&self, seq: &Sequence, stats: &SequenceStats, details: bool) {
        for line in self.sequence_lines(seq, stats, details) {
            println!("{line}");
        }
    }

    fn present_element(&self, ordinal: i64, value: i64) {
        if self.quiet {
            println!("{value}");
        } else {
            println!("{}", ui::field(&format!("#{ordinal}"), &value.to_string()));
        }
    }

    fn present_anchor(&self, value: i64, index: usize) {
        if self.verbose {
            println!("{}", ui::field("Anchor", &format!("{value} at index {index}")));
        }
    }

    fn present_tie_break(&self, pending: &PendingAnchor) {
        println!(
            "{}",
            ui::notice(&format!(
                "{} occurs twice: pick first or second",
                pending.value()
            ))
        );
    }

    fn present_subrange(&self, movement: i64, range: &SubRange) {
        for line in self.subrange_lines(movement, range) {
            println!("{line}");
        }
    }

    fn present_report(&self, report: &SequenceReport) {
        match report.to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => self.present_error(&format!("cannot serialize report: {e}")),
        }
    }

    fn present_error(&self, error: &str) {
        ui::print_error(error);
    }
}
