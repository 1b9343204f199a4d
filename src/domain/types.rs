//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during offer generation
//! - rendered by the report module
//! - asserted against directly in tests

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::OfferError;

/// Shortest credit period the bank originates, in months.
pub const MIN_CREDIT_PERIOD: u32 = 6;
/// Longest credit period the bank originates, in months.
pub const MAX_CREDIT_PERIOD: u32 = 100;
/// Smallest loan worth originating, in PLN.
pub const MIN_CREDIT_AMOUNT: Decimal = dec!(5000);
/// Hard cap on any single loan, in PLN.
pub const MAX_CREDIT_AMOUNT: Decimal = dec!(150000);
/// Upper bound on declared monthly credit commitments, in PLN.
pub const MAX_COMMITMENT: Decimal = dec!(200000);

/// One maturity band of the credit policy.
///
/// Each band covers the periods from the previous band's bound (exclusive) up
/// to its own bound (inclusive) and carries its own DTI limit and annual
/// interest rate. The four variants double as the immutable policy table;
/// there is no runtime configuration of bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaturityBand {
    UpTo12,
    UpTo36,
    UpTo60,
    UpTo100,
}

impl MaturityBand {
    /// All bands, ascending by upper bound.
    pub const ALL: [MaturityBand; 4] = [
        MaturityBand::UpTo12,
        MaturityBand::UpTo36,
        MaturityBand::UpTo60,
        MaturityBand::UpTo100,
    ];

    /// The bands considered for a requested period: every band up to and
    /// including the one that contains the period.
    pub fn ladder_for(period_months: u32) -> &'static [MaturityBand] {
        use MaturityBand::*;
        match period_months {
            0..=12 => &[UpTo12],
            13..=36 => &[UpTo12, UpTo36],
            37..=60 => &[UpTo12, UpTo36, UpTo60],
            _ => &MaturityBand::ALL,
        }
    }

    /// Upper bound of the band in months, which is also the amortization
    /// horizon used for loans offered in this band.
    pub fn months(self) -> u32 {
        match self {
            MaturityBand::UpTo12 => 12,
            MaturityBand::UpTo36 => 36,
            MaturityBand::UpTo60 => 60,
            MaturityBand::UpTo100 => MAX_CREDIT_PERIOD,
        }
    }

    /// First month covered by the band.
    pub fn first_month(self) -> u32 {
        match self {
            MaturityBand::UpTo12 => MIN_CREDIT_PERIOD,
            MaturityBand::UpTo36 => 13,
            MaturityBand::UpTo60 => 37,
            MaturityBand::UpTo100 => 61,
        }
    }

    /// Highest debt-to-income ratio the bank accepts in this band.
    pub fn dti_limit(self) -> Decimal {
        match self {
            MaturityBand::UpTo12 | MaturityBand::UpTo36 => dec!(0.60),
            MaturityBand::UpTo60 => dec!(0.50),
            MaturityBand::UpTo100 => dec!(0.55),
        }
    }

    /// Nominal annual interest rate for loans in this band.
    pub fn annual_rate(self) -> Decimal {
        match self {
            MaturityBand::UpTo12 => dec!(0.02),
            _ => dec!(0.03),
        }
    }

    /// Interest rate as printed in offer lines.
    pub fn rate_label(self) -> &'static str {
        match self {
            MaturityBand::UpTo12 => "2%",
            _ => "3%",
        }
    }

    /// Months range an offer in this band is printed with, truncated to the
    /// requested period when the request ends inside the band. The first
    /// band always reads `6-12`.
    pub fn period_label(self, period_months: u32) -> String {
        match self {
            MaturityBand::UpTo12 => "6-12".to_string(),
            _ => format!("{}-{}", self.first_month(), self.months().min(period_months)),
        }
    }
}

/// A validated loan request.
///
/// [`LoanRequest::new`] is the intended constructor; it checks every bound
/// before building a request: period within range, amounts non-negative,
/// commitments within the cap, and income covering living expenses plus
/// commitments. Offer generation assumes requests came through that path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoanRequest {
    pub period_months: u32,
    pub monthly_income: Decimal,
    pub monthly_costs: Decimal,
    pub monthly_commitments: Decimal,
}

impl LoanRequest {
    /// Validate the four inputs, in input order, and build a request.
    pub fn new(
        period_months: u32,
        monthly_income: Decimal,
        monthly_costs: Decimal,
        monthly_commitments: Decimal,
    ) -> Result<Self, OfferError> {
        Self::validate_period(period_months)?;
        Self::validate_amount("monthly income", monthly_income)?;
        Self::validate_amount("monthly living expenses", monthly_costs)?;
        Self::validate_commitments(monthly_commitments)?;
        // A debt sum past the Decimal range cannot be covered by any
        // representable income.
        match monthly_costs.checked_add(monthly_commitments) {
            Some(debt) if debt <= monthly_income => Ok(Self {
                period_months,
                monthly_income,
                monthly_costs,
                monthly_commitments,
            }),
            _ => Err(OfferError::InsufficientIncome),
        }
    }

    /// Check a requested period against the range the bank originates.
    pub fn validate_period(period_months: u32) -> Result<(), OfferError> {
        if period_months < MIN_CREDIT_PERIOD {
            return Err(OfferError::PeriodTooShort);
        }
        if period_months > MAX_CREDIT_PERIOD {
            return Err(OfferError::PeriodTooLong);
        }
        Ok(())
    }

    /// Monetary inputs must not be negative. `field` is the name used in the
    /// rejection message.
    pub fn validate_amount(field: &'static str, value: Decimal) -> Result<(), OfferError> {
        if value < Decimal::ZERO {
            return Err(OfferError::NegativeAmount(field));
        }
        Ok(())
    }

    /// Commitments must be non-negative and within the declared cap.
    pub fn validate_commitments(value: Decimal) -> Result<(), OfferError> {
        Self::validate_amount("monthly credit commitments", value)?;
        if value > MAX_COMMITMENT {
            return Err(OfferError::ExcessiveCommitments);
        }
        Ok(())
    }
}

/// A single credit offer for one maturity band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Offer {
    /// Band the offer was generated from.
    pub band: MaturityBand,
    /// Months range as printed, e.g. `6-12` or `13-24`.
    pub period_label: String,
    /// Interest rate as printed, e.g. `2%`.
    pub rate_label: &'static str,
    /// Largest loan the band allows, in PLN at grosz precision.
    pub max_loan_amount: Decimal,
    /// Level monthly payment for that loan, in PLN at grosz precision.
    pub max_monthly_payment: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ladder_grows_with_the_requested_period() {
        assert_eq!(MaturityBand::ladder_for(6).len(), 1);
        assert_eq!(MaturityBand::ladder_for(12).len(), 1);
        assert_eq!(MaturityBand::ladder_for(13).len(), 2);
        assert_eq!(MaturityBand::ladder_for(36).len(), 2);
        assert_eq!(MaturityBand::ladder_for(37).len(), 3);
        assert_eq!(MaturityBand::ladder_for(60).len(), 3);
        assert_eq!(MaturityBand::ladder_for(61).len(), 4);
        assert_eq!(MaturityBand::ladder_for(100).len(), 4);
        assert_eq!(MaturityBand::ladder_for(100), &MaturityBand::ALL);
    }

    #[test]
    fn policy_table_matches_the_credit_policy() {
        use MaturityBand::*;
        assert_eq!(UpTo12.months(), 12);
        assert_eq!(UpTo36.months(), 36);
        assert_eq!(UpTo60.months(), 60);
        assert_eq!(UpTo100.months(), 100);

        assert_eq!(UpTo12.dti_limit(), dec!(0.60));
        assert_eq!(UpTo36.dti_limit(), dec!(0.60));
        assert_eq!(UpTo60.dti_limit(), dec!(0.50));
        assert_eq!(UpTo100.dti_limit(), dec!(0.55));

        assert_eq!(UpTo12.annual_rate(), dec!(0.02));
        assert_eq!(UpTo12.rate_label(), "2%");
        for band in [UpTo36, UpTo60, UpTo100] {
            assert_eq!(band.annual_rate(), dec!(0.03));
            assert_eq!(band.rate_label(), "3%");
        }
    }

    #[test]
    fn period_labels_truncate_to_the_requested_period() {
        assert_eq!(MaturityBand::UpTo12.period_label(8), "6-12");
        assert_eq!(MaturityBand::UpTo12.period_label(100), "6-12");
        assert_eq!(MaturityBand::UpTo36.period_label(24), "13-24");
        assert_eq!(MaturityBand::UpTo36.period_label(40), "13-36");
        assert_eq!(MaturityBand::UpTo60.period_label(48), "37-48");
        assert_eq!(MaturityBand::UpTo60.period_label(100), "37-60");
        assert_eq!(MaturityBand::UpTo100.period_label(73), "61-73");
        assert_eq!(MaturityBand::UpTo100.period_label(100), "61-100");
    }

    #[test]
    fn request_validation_checks_the_bounds() {
        assert!(matches!(
            LoanRequest::new(5, dec!(1000), dec!(0), dec!(0)),
            Err(OfferError::PeriodTooShort)
        ));
        assert!(matches!(
            LoanRequest::new(101, dec!(1000), dec!(0), dec!(0)),
            Err(OfferError::PeriodTooLong)
        ));
        assert!(matches!(
            LoanRequest::new(12, dec!(-1), dec!(0), dec!(0)),
            Err(OfferError::NegativeAmount("monthly income"))
        ));
        assert!(matches!(
            LoanRequest::new(12, dec!(1000), dec!(-0.01), dec!(0)),
            Err(OfferError::NegativeAmount("monthly living expenses"))
        ));
        assert!(matches!(
            LoanRequest::new(12, dec!(1000), dec!(0), dec!(200000.01)),
            Err(OfferError::ExcessiveCommitments)
        ));
        assert!(matches!(
            LoanRequest::new(12, dec!(1000), dec!(600), dec!(500)),
            Err(OfferError::InsufficientIncome)
        ));
    }

    #[test]
    fn request_validation_accepts_the_boundaries() {
        // Commitments exactly at the cap, income exactly consumed.
        let request = LoanRequest::new(6, dec!(250000), dec!(50000), dec!(200000)).unwrap();
        assert_eq!(request.period_months, 6);
        assert_eq!(request.monthly_commitments, dec!(200000));

        LoanRequest::new(100, dec!(1000), dec!(0), dec!(0)).unwrap();
    }

    #[test]
    fn debt_sums_beyond_decimal_range_are_rejected_not_panicked() {
        // costs + commitments cannot be represented, let alone covered.
        assert!(matches!(
            LoanRequest::new(12, Decimal::MAX, Decimal::MAX, dec!(200000)),
            Err(OfferError::InsufficientIncome)
        ));
        // At the representable edge the sum is exactly coverable.
        LoanRequest::new(12, Decimal::MAX, Decimal::MAX, dec!(0)).unwrap();
    }
}
