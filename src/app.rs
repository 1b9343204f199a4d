//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - runs the interactive interview or the scripted quote
//! - prints offers through the report module

use std::io::{self, BufRead, Write};

use clap::Parser;

use crate::cli::{Command, QuoteArgs};
use crate::cli::prompt::Prompter;
use crate::domain::LoanRequest;
use crate::error::OfferError;
use crate::{logging, offer, report};

/// Entry point for the `offers` binary.
pub fn run() -> Result<(), OfferError> {
    // We want `offers` and `offers -v` to behave like `offers interactive`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of the
    // argv list before parsing. This preserves a clean clap structure while
    // retaining the requested UX.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);
    logging::init(cli.verbose);

    match cli.command {
        Command::Quote(args) => handle_quote(args),
        Command::Interactive => handle_interactive(),
        Command::Policy => handle_policy(),
    }
}

fn handle_quote(args: QuoteArgs) -> Result<(), OfferError> {
    let request = LoanRequest::new(args.period, args.income, args.costs, args.commitments)?;
    let offers = offer::generate_offers(&request);
    tracing::debug!(period = request.period_months, offers = offers.len(), "quote computed");
    println!("{}", report::render_offers(&offers));
    Ok(())
}

fn handle_interactive() -> Result<(), OfferError> {
    let stdin = io::stdin();
    interactive_session(stdin.lock(), io::stdout())
}

fn handle_policy() -> Result<(), OfferError> {
    println!("{}", report::render_policy_table());
    Ok(())
}

/// The full prompt-driven session over any reader/writer pair.
///
/// Kept generic so tests can drive a whole conversation through in-memory
/// buffers.
pub fn interactive_session<R: BufRead, W: Write>(input: R, mut output: W) -> Result<(), OfferError> {
    let collected = {
        let mut prompter = Prompter::new(input, &mut output);
        prompter.collect_request()?
    };
    let Some(request) = collected else {
        return Ok(());
    };
    let offers = offer::generate_offers(&request);
    tracing::debug!(period = request.period_months, offers = offers.len(), "interview completed");
    writeln!(output, "{}", report::render_offers(&offers))?;
    Ok(())
}

/// Rewrite argv so `offers` defaults to `offers interactive`.
///
/// Rules:
/// - `offers`                      -> `offers interactive`
/// - `offers -v`                   -> `offers interactive -v`
/// - `offers --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("interactive".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "quote" | "interactive" | "policy");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "interactive flags".
    if arg1.starts_with('-') {
        argv.insert(1, "interactive".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}
