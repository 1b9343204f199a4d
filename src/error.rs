//! Error type shared across the CLI and the calculator.
//!
//! Every variant renders the exact sentence shown to the user; `main` prints
//! the message to stderr and exits with [`OfferError::exit_code`]. The
//! interactive mode additionally reuses the validation variants as re-prompt
//! messages, so the two front-ends reject bad input with identical wording.

use thiserror::Error;

use crate::domain::{MAX_COMMITMENT, MAX_CREDIT_PERIOD, MIN_CREDIT_PERIOD};

#[derive(Debug, Error)]
pub enum OfferError {
    /// Requested period below the shortest the bank originates.
    #[error("The credit period is too short. The minimum period is {} months.", MIN_CREDIT_PERIOD)]
    PeriodTooShort,

    /// Requested period above the longest the bank originates.
    #[error("The credit period is too long. The maximum period is {} months.", MAX_CREDIT_PERIOD)]
    PeriodTooLong,

    /// A monetary input was negative. Carries the field name as printed.
    #[error("The {0} cannot be negative.")]
    NegativeAmount(&'static str),

    /// Declared commitments above the accepted cap.
    #[error("The total monthly credit commitments are too high. The maximum allowed is {} PLN.", MAX_COMMITMENT)]
    ExcessiveCommitments,

    /// Income does not cover living expenses plus commitments.
    #[error("Your monthly income is not sufficient to cover the living expenses and credit commitments.")]
    InsufficientIncome,

    /// Stdin closed while a prompt was still waiting for an answer.
    #[error("No input received.")]
    InputClosed,

    /// Terminal read or write failure.
    #[error("Failed to read or write the terminal: {0}")]
    Io(#[from] std::io::Error),
}

impl OfferError {
    /// Process exit code when the error aborts a run.
    ///
    /// 2 means the input was invalid (or stdin closed mid-interview),
    /// 3 means the request was valid but cannot be served,
    /// 4 means the terminal itself failed.
    pub fn exit_code(&self) -> u8 {
        match self {
            OfferError::PeriodTooShort
            | OfferError::PeriodTooLong
            | OfferError::NegativeAmount(_)
            | OfferError::ExcessiveCommitments
            | OfferError::InputClosed => 2,
            OfferError::InsufficientIncome => 3,
            OfferError::Io(_) => 4,
        }
    }
}
