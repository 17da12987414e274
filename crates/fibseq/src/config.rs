//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use fibseq_core::TieBreak;

/// fibseq — Fibonacci sequence generator with anchored sub-ranges.
///
/// Inputs are taken as raw text and validated the same way in one-shot and
/// interactive mode.
#[derive(Parser, Debug)]
#[command(name = "fibseq", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Number of sequence elements to generate (1 to 2147483647).
    #[arg(
        short = 'n',
        long,
        env = "FIBSEQ_COUNT",
        allow_hyphen_values = true,
        required_unless_present_any = ["interactive", "completion"]
    )]
    pub count: Option<String>,

    /// Show the element at this 1-based position.
    #[arg(long, allow_hyphen_values = true)]
    pub ordinal: Option<String>,

    /// Anchor on this value from the sequence.
    #[arg(short, long, allow_hyphen_values = true)]
    pub anchor: Option<String>,

    /// Take |offset| elements right (positive) or left (negative) of the anchor.
    #[arg(long, requires = "anchor", allow_hyphen_values = true)]
    pub offset: Option<String>,

    /// Which occurrence to anchor on when the value appears twice.
    #[arg(long, value_enum)]
    pub pick: Option<Pick>,

    /// Print the sequence as a JSON report.
    #[arg(long)]
    pub json: bool,

    /// Write the JSON report to this file.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Quiet mode (only output raw values).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Show even/odd counts.
    #[arg(short, long)]
    pub details: bool,

    /// Read commands line by line instead of running once.
    #[arg(short, long)]
    pub interactive: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

/// Command-line spelling of [`TieBreak`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Pick {
    First,
    Second,
}

impl From<Pick> for TieBreak {
    fn from(pick: Pick) -> Self {
        match pick {
            Pick::First => Self::First,
            Pick::Second => Self::Second,
        }
    }
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
