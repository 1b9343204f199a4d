//! Reporting utilities: offer lines and the policy table.
//!
//! We keep formatting code in one place so:
//! - the calculation code stays clean and testable
//! - output changes are localized (the offer line wording is load-bearing
//!   for downstream scripts)

use crate::domain::{MAX_CREDIT_PERIOD, MaturityBand, Offer};

/// Printed when every band was filtered out. Not an error; the run still
/// exits successfully.
pub const NO_OFFERS: &str = "No credit offers available.";

/// One printable offer line.
pub fn offer_line(offer: &Offer) -> String {
    format!(
        "Offer for period {} months with {} interest rate: up to {} PLN at {} PLN/month",
        offer.period_label, offer.rate_label, offer.max_loan_amount, offer.max_monthly_payment
    )
}

/// The full report for a generation run: one line per offer in band order,
/// or the no-offer message.
pub fn render_offers(offers: &[Offer]) -> String {
    if offers.is_empty() {
        return NO_OFFERS.to_string();
    }
    offers.iter().map(offer_line).collect::<Vec<_>>().join("\n")
}

/// The maturity band table behind `offers policy`.
pub fn render_policy_table() -> String {
    let mut out = String::new();
    out.push_str("=== credit offer policy ===\n");
    out.push_str(&format!(
        "{:<8} {:>7} {:>10} {:>6}\n",
        "months", "horizon", "DTI limit", "rate"
    ));
    for band in MaturityBand::ALL {
        out.push_str(&format!(
            "{:<8} {:>7} {:>10} {:>6}\n",
            band.period_label(MAX_CREDIT_PERIOD),
            band.months(),
            band.dti_limit().to_string(),
            band.rate_label(),
        ));
    }
    out.trim_end().to_string()
}
