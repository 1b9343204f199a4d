//! Command-line parsing for the credit offer calculator.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the calculation code.

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

pub mod prompt;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "offers", version, about = "Consumer credit offer calculator (PLN)")]
pub struct Cli {
    /// Log calculation diagnostics to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute offers from flags and print them (useful for scripting).
    Quote(QuoteArgs),
    /// Ask for the inputs on the terminal, then print offers.
    ///
    /// This is what a bare `offers` invocation runs.
    Interactive,
    /// Print the maturity band policy table.
    Policy,
}

/// Inputs for a non-interactive quote.
#[derive(Debug, Parser, Clone)]
pub struct QuoteArgs {
    /// Requested credit period in months (6 to 100).
    #[arg(short = 'p', long)]
    pub period: u32,

    /// Monthly net income in PLN.
    #[arg(short = 'i', long)]
    pub income: Decimal,

    /// Monthly living expenses in PLN.
    #[arg(short = 'c', long)]
    pub costs: Decimal,

    /// Existing monthly credit commitments in PLN.
    #[arg(long, default_value_t = Decimal::ZERO)]
    pub commitments: Decimal,
}
