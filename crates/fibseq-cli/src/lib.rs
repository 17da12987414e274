//! # fibseq-cli
//!
//! CLI output, styled presentation, and interactive command parsing.

pub mod output;
pub mod presenter;
pub mod prompt;
pub mod ui;

pub use presenter::{CliPresenter, ResultPresenter};
pub use prompt::{parse_command, Command, CommandError};
