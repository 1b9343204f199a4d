//! `credit-offers` library crate.
//!
//! The binary (`offers`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - modules are reusable (e.g., future web/API front-ends)
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod logging;
pub mod math;
pub mod offer;
pub mod report;
