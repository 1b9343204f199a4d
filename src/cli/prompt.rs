//! Interactive input collection.
//!
//! This is intentionally kept separate from clap parsing:
//! - clap handles structured flags/subcommands
//! - the prompter provides the "run `offers` and answer questions" UX
//!
//! Out-of-bounds answers are rejected with the same messages the scripted
//! mode prints, then the question is asked again. Only a closed or failing
//! terminal ends the interview early.

use std::io::{BufRead, Write};

use rust_decimal::Decimal;

use crate::domain::{LoanRequest, MAX_CREDIT_PERIOD, MIN_CREDIT_PERIOD};
use crate::error::OfferError;
use crate::report;

/// Asks the questions of a credit interview over any reader/writer pair
/// (locked stdin/stdout in production, in-memory buffers in tests).
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Run the full interview.
    ///
    /// Returns `Ok(None)` when the interview ends without a servable request
    /// (income below living expenses plus commitments); the explanation has
    /// already been written to the output in that case.
    pub fn collect_request(&mut self) -> Result<Option<LoanRequest>, OfferError> {
        let period = self.credit_period()?;
        let income = self.amount("Enter your monthly income (in PLN):", "monthly income")?;
        let costs = self.amount(
            "Enter your monthly living expenses (in PLN):",
            "monthly living expenses",
        )?;
        if costs > income {
            writeln!(self.output, "{}", OfferError::InsufficientIncome)?;
            return Ok(None);
        }
        let commitments = self.commitments()?;
        match LoanRequest::new(period, income, costs, commitments) {
            Ok(request) => Ok(Some(request)),
            Err(err @ OfferError::InsufficientIncome) => {
                writeln!(self.output, "{err}")?;
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    /// First question: the credit period, asked until it is within bounds.
    ///
    /// An out-of-range period also echoes the no-offer line, matching what a
    /// scripted run with the same period would conclude.
    pub fn credit_period(&mut self) -> Result<u32, OfferError> {
        loop {
            self.ask("Enter the credit period (in months):")?;
            let answer = self.answer()?;
            // Parsed wider than the return type so a negative period gets
            // the too-short rejection, not the unparseable one.
            let Ok(months) = answer.parse::<i64>() else {
                writeln!(self.output, "Invalid input: enter a whole number of months.")?;
                continue;
            };
            let err = if months < i64::from(MIN_CREDIT_PERIOD) {
                OfferError::PeriodTooShort
            } else if months > i64::from(MAX_CREDIT_PERIOD) {
                OfferError::PeriodTooLong
            } else {
                return Ok(months as u32);
            };
            writeln!(self.output, "{err}")?;
            writeln!(self.output, "{}", report::NO_OFFERS)?;
        }
    }

    /// Last question: commitments, asked until within the declared cap.
    pub fn commitments(&mut self) -> Result<Decimal, OfferError> {
        loop {
            let value = self.amount(
                "Enter your total monthly credit commitments (in PLN):",
                "monthly credit commitments",
            )?;
            match LoanRequest::validate_commitments(value) {
                Ok(()) => return Ok(value),
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
    }

    /// Ask for a non-negative amount in PLN until one parses.
    fn amount(&mut self, question: &str, field: &'static str) -> Result<Decimal, OfferError> {
        loop {
            self.ask(question)?;
            let answer = self.answer()?;
            let Ok(value) = answer.parse::<Decimal>() else {
                writeln!(self.output, "Invalid input: enter an amount in PLN.")?;
                continue;
            };
            match LoanRequest::validate_amount(field, value) {
                Ok(()) => return Ok(value),
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
    }

    fn ask(&mut self, question: &str) -> Result<(), OfferError> {
        writeln!(self.output, "{question}")?;
        self.output.flush()?;
        Ok(())
    }

    fn answer(&mut self) -> Result<String, OfferError> {
        let mut line = String::new();
        let bytes = self.input.read_line(&mut line)?;
        if bytes == 0 {
            return Err(OfferError::InputClosed);
        }
        Ok(line.trim().to_string())
    }
}
