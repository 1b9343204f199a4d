//! Mathematical utilities: decimal rounding rules and annuity payments.

pub mod annuity;

pub use annuity::*;
