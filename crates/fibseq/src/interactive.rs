//! Line-oriented interactive session.
//!
//! Each line is one command. Errors are reported and the session carries
//! on with its previous state.

use std::io::{self, BufRead, Write};

use fibseq_cli::prompt::{parse_command, Command, HELP};
use fibseq_cli::ResultPresenter;
use fibseq_core::input::{parse_anchor_value, parse_count, parse_movement, parse_ordinal};
use fibseq_core::{AnchorStep, SeqError, Session, TieBreak};

/// Read commands from `input` until end of input or `quit`.
///
/// Returns the final session state.
pub fn run_session<R: BufRead>(
    mut input: R,
    presenter: &dyn ResultPresenter,
    details: bool,
    show_prompt: bool,
) -> io::Result<Session> {
    let mut session = Session::new();
    let mut line = String::new();

    loop {
        if show_prompt {
            print!("fibseq> ");
            io::stdout().flush()?;
        }
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let command = match parse_command(&line) {
            Ok(Some(Command::Quit)) => break,
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                presenter.present_error(&e.to_string());
                continue;
            }
        };

        tracing::debug!(?command, "interactive command");
        if let Err(e) = apply(&mut session, command, presenter, details) {
            presenter.present_error(&e.to_string());
        }
    }

    Ok(session)
}

fn sequence_len(session: &Session) -> Result<usize, SeqError> {
    session
        .sequence()
        .map(fibseq_core::Sequence::len)
        .ok_or(SeqError::NoSequence)
}

fn apply(
    session: &mut Session,
    command: Command,
    presenter: &dyn ResultPresenter,
    details: bool,
) -> Result<(), SeqError> {
    match command {
        Command::Generate(raw) => {
            session.generate(parse_count(&raw)?)?;
            show_sequence(session, presenter, details);
        }
        Command::Lookup(raw) => {
            let ordinal = parse_ordinal(&raw, sequence_len(session)?)?;
            let ordinal = i64::try_from(ordinal).unwrap_or(i64::MAX);
            presenter.present_element(ordinal, session.lookup(ordinal)?);
        }
        Command::Anchor(raw) => {
            let value = parse_anchor_value(&raw)?;
            let step = session.set_anchor(value)?;
            show_anchor_step(session, value, &step, presenter);
        }
        Command::Pick(raw) => {
            let choice: TieBreak = raw.parse()?;
            let value = session.pending().ok_or(SeqError::NoAnchor)?.value();
            let step = session.choose(choice)?;
            show_anchor_step(session, value, &step, presenter);
        }
        Command::Move(raw) => {
            let movement = parse_movement(&raw, sequence_len(session)?)?;
            let range = session.set_movement(movement)?;
            presenter.present_subrange(movement, &range);
        }
        Command::Json => {
            let report = session.report().ok_or(SeqError::NoSequence)?;
            presenter.present_report(&report);
        }
        Command::Show => {
            sequence_len(session)?;
            show_sequence(session, presenter, details);
            if let (Some(movement), Some(range)) = (session.movement(), session.subrange()?) {
                presenter.present_subrange(movement, &range);
            }
        }
        Command::Help => println!("{HELP}"),
        Command::Quit => {}
    }
    Ok(())
}

fn show_sequence(session: &Session, presenter: &dyn ResultPresenter, details: bool) {
    if let (Some(seq), Some(stats)) = (session.sequence(), session.stats()) {
        presenter.present_sequence(seq, stats, details);
    }
}

fn show_anchor_step(
    session: &Session,
    value: i64,
    step: &AnchorStep,
    presenter: &dyn ResultPresenter,
) {
    match step {
        AnchorStep::Resolved { index, subrange } => {
            presenter.present_anchor(value, *index);
            if let (Some(movement), Some(range)) = (session.movement(), subrange) {
                presenter.present_subrange(movement, range);
            }
        }
        AnchorStep::NeedsTieBreak(pending) => presenter.present_tie_break(pending),
    }
}
