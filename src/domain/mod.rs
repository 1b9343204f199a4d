//! Domain types used throughout the calculator.
//!
//! This module defines:
//!
//! - the credit policy constants and the [`MaturityBand`] table
//! - the validated [`LoanRequest`]
//! - the generated [`Offer`] values

pub mod types;

pub use types::*;
