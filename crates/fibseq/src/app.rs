//! Application entry point and dispatch.

use std::io::IsTerminal;

use anyhow::{Context, Result};
use console::Term;

use fibseq_cli::output::write_report;
use fibseq_cli::prompt::{ask_tie_break, PromptError};
use fibseq_cli::{CliPresenter, ResultPresenter};
use fibseq_core::input::{parse_anchor_value, parse_count, parse_movement, parse_ordinal};
use fibseq_core::{AnchorStep, SeqError, Session, TieBreak};

use crate::config::AppConfig;
use crate::interactive::run_session;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        clap_complete::generate(shell, &mut cmd, "fibseq", &mut std::io::stdout());
        return Ok(());
    }

    let presenter = CliPresenter::new(config.verbose, config.quiet);

    if config.interactive {
        let stdin = std::io::stdin();
        let attended = stdin.is_terminal();
        run_session(stdin.lock(), &presenter, config.details, attended)?;
        return Ok(());
    }

    run_cli(config, &presenter)
}

fn run_cli(config: &AppConfig, presenter: &dyn ResultPresenter) -> Result<()> {
    let raw_count = config.count.as_deref().unwrap_or_default();
    let mut session = Session::new();
    session.generate(parse_count(raw_count)?)?;

    let report = session.report().ok_or(SeqError::NoSequence)?;
    let len = report.count;

    if config.json {
        presenter.present_report(&report);
    } else if let (Some(seq), Some(stats)) = (session.sequence(), session.stats()) {
        presenter.present_sequence(seq, stats, config.details);
    }

    if let Some(ref path) = config.output {
        write_report(path, &report)
            .with_context(|| format!("cannot write report to {}", path.display()))?;
    }

    if let Some(ref raw) = config.ordinal {
        let ordinal = i64::try_from(parse_ordinal(raw, len)?).unwrap_or(i64::MAX);
        presenter.present_element(ordinal, session.lookup(ordinal)?);
    }

    let Some(ref raw_anchor) = config.anchor else {
        return Ok(());
    };
    let value = parse_anchor_value(raw_anchor)?;
    let mut step = session.set_anchor(value)?;
    let index = loop {
        match step {
            AnchorStep::Resolved { index, .. } => break index,
            AnchorStep::NeedsTieBreak(pending) => {
                step = session.choose(pick_tie_break(config, pending.value())?)?;
            }
        }
    };
    presenter.present_anchor(value, index);

    if let Some(ref raw) = config.offset {
        let movement = parse_movement(raw, len)?;
        let range = session.set_movement(movement)?;
        presenter.present_subrange(movement, &range);
    }

    Ok(())
}

/// Take the tie-break from `--pick`, or ask when a user is at the terminal.
fn pick_tie_break(config: &AppConfig, value: i64) -> Result<TieBreak> {
    if let Some(pick) = config.pick {
        return Ok(pick.into());
    }
    if std::io::stdin().is_terminal() {
        return match ask_tie_break(&Term::stderr(), value) {
            Ok(choice) => Ok(choice),
            Err(PromptError::Unanswered(err)) => Err(err.into()),
            Err(PromptError::Io(err)) => Err(err).context("cannot read tie-break answer"),
        };
    }
    Err(SeqError::TieBreakRequired(value).into())
}
