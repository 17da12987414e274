//! Interactive command parsing and terminal prompts.

use std::io;

use console::Term;

use fibseq_core::{SeqError, TieBreak};

/// One line of interactive input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `gen <count>`
    Generate(String),
    /// `at <ordinal>`
    Lookup(String),
    /// `anchor <value>`
    Anchor(String),
    /// `move <offset>`
    Move(String),
    /// `pick first|second`
    Pick(String),
    /// `json`
    Json,
    /// `show`
    Show,
    /// `help`
    Help,
    /// `quit`
    Quit,
}

/// Error parsing an interactive line.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command {0:?}, type `help` for a list")]
    Unknown(String),

    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
}

/// Error asking for a tie-break on the terminal.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error(transparent)]
    Io(#[from] io::Error),

    /// No answer can be read: the terminal is not interactive or input ended.
    #[error(transparent)]
    Unanswered(#[from] SeqError),
}

/// Help text listing the interactive commands.
pub const HELP: &str = "\
gen <count>          generate a sequence of <count> elements
at <ordinal>         show the element at a 1-based position
anchor <value>       anchor on a value from the sequence
move <offset>        take |offset| elements right (+) or left (-) of the anchor
pick first|second    choose which 1 to anchor on
json                 print the sequence as JSON
show                 print the current sequence and range
help                 show this list
quit                 leave";

/// Parse a line into a [`Command`]. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let mut parts = line.split_whitespace();
    let Some(word) = parts.next() else {
        return Ok(None);
    };
    let arg = parts.next().map(str::to_string);

    let with_arg = |name: &'static str, make: fn(String) -> Command| {
        arg.clone()
            .map(make)
            .ok_or(CommandError::MissingArgument(name))
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "gen" | "generate" | "n" => with_arg("gen", Command::Generate)?,
        "at" | "ordinal" => with_arg("at", Command::Lookup)?,
        "anchor" | "start" => with_arg("anchor", Command::Anchor)?,
        "move" | "offset" => with_arg("move", Command::Move)?,
        "pick" => with_arg("pick", Command::Pick)?,
        "json" => Command::Json,
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

/// Ask on the terminal which occurrence of `value` to anchor on.
///
/// Re-asks until the answer parses. Gives up with
/// [`SeqError::TieBreakRequired`] when `term` is not a terminal or an empty
/// answer comes back.
pub fn ask_tie_break(term: &Term, value: i64) -> Result<TieBreak, PromptError> {
    if !term.is_term() {
        return Err(SeqError::TieBreakRequired(value).into());
    }
    loop {
        term.write_str(&format!(
            "{value} occurs twice. Select the first one? [y = first / n = second]: "
        ))?;
        let answer = term.read_line()?;
        if answer.trim().is_empty() {
            tracing::debug!(value, "no tie-break answer");
            return Err(SeqError::TieBreakRequired(value).into());
        }
        match answer.parse::<TieBreak>() {
            Ok(choice) => return Ok(choice),
            Err(e) => term.write_line(&e.to_string())?,
        }
    }
}
