//! Offer generation over the maturity band table.
//!
//! Responsibilities:
//!
//! - select the band ladder for the requested period
//! - filter bands by the applicant's debt-to-income ratio
//! - derive each band's maximum loan and its amortized monthly payment
//! - drop offers below the minimum amount worth originating
//!
//! Everything here is a deterministic function of the request. Input
//! validation lives in [`LoanRequest::new`] and terminal concerns in the
//! cli/report modules.

use rust_decimal::Decimal;

use crate::domain::{LoanRequest, MaturityBand, Offer, MAX_CREDIT_AMOUNT, MIN_CREDIT_AMOUNT};
use crate::math::{annuity_payment, monthly_rate, round_half_up, to_money};

/// Generate every offer the policy allows for the request, ascending by band
/// upper bound. The result may be empty.
pub fn generate_offers(request: &LoanRequest) -> Vec<Offer> {
    let mut offers = Vec::new();
    let Some(dti) = debt_to_income(request) else {
        return offers;
    };

    for &band in MaturityBand::ladder_for(request.period_months) {
        if dti > band.dti_limit() {
            tracing::debug!(months = band.months(), %dti, "band skipped: DTI above limit");
            continue;
        }
        let max_loan = max_loan_amount(request, band);
        if max_loan < MIN_CREDIT_AMOUNT {
            tracing::debug!(months = band.months(), %max_loan, "band skipped: below minimum amount");
            continue;
        }
        let payment = annuity_payment(max_loan, monthly_rate(band.annual_rate()), band.months());
        offers.push(Offer {
            band,
            period_label: band.period_label(request.period_months),
            rate_label: band.rate_label(),
            max_loan_amount: to_money(max_loan),
            max_monthly_payment: to_money(payment),
        });
    }
    offers
}

/// Debt-to-income ratio of the request, rounded half-up to two decimals.
///
/// `None` when income is zero; no ratio is defined then and no band accepts
/// the request.
pub fn debt_to_income(request: &LoanRequest) -> Option<Decimal> {
    (request.monthly_costs + request.monthly_commitments)
        .checked_div(request.monthly_income)
        .map(|ratio| round_half_up(ratio, 2))
}

/// Largest loan the band allows: the payment capacity left at the band's DTI
/// limit, times the band horizon, capped by the policy maximum.
///
/// A product beyond `Decimal` range clamps to the policy cap when the
/// capacity is positive; a negative capacity is returned as-is, which is
/// below any floor.
pub fn max_loan_amount(request: &LoanRequest, band: MaturityBand) -> Decimal {
    let capacity = request.monthly_income * band.dti_limit()
        - request.monthly_costs
        - request.monthly_commitments;
    match capacity.checked_mul(Decimal::from(band.months())) {
        Some(total) => total.min(MAX_CREDIT_AMOUNT),
        None if capacity > Decimal::ZERO => MAX_CREDIT_AMOUNT,
        None => capacity,
    }
}
