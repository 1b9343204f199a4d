//! Rounding rules and the amortized-payment computation.
//!
//! The arithmetic reproduces the bank's reference calculation, which rounds
//! half-up at three specific points and nowhere else:
//!
//! - the monthly interest rate (annual rate / 12) at [`RATE_SCALE`] digits
//! - the discount factor `1 / (1 + r)^months` at 2 decimals, *before* it is
//!   subtracted from one
//! - the final payment at 2 decimals
//!
//! The discount factor is rounded before the subtraction; moving that
//! rounding changes final payments, so the order here is load-bearing.

use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};
use rust_decimal_macros::dec;

/// Decimal places of every monetary output (grosz precision).
pub const MONEY_SCALE: u32 = 2;

/// Decimal places the monthly interest rate is kept at.
///
/// Ten digits hold the 2% and 3% annual rates exactly enough that no band's
/// discount factor moves by a grosz.
pub const RATE_SCALE: u32 = 10;

/// Round half-up (ties away from zero) to `dp` decimal places.
pub fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Round to grosz precision and force exactly two decimal places, so whole
/// amounts still render as `36000.00`.
pub fn to_money(value: Decimal) -> Decimal {
    let mut money = round_half_up(value, MONEY_SCALE);
    money.rescale(MONEY_SCALE);
    money
}

/// Monthly interest rate derived from an annual rate.
pub fn monthly_rate(annual_rate: Decimal) -> Decimal {
    round_half_up(annual_rate / dec!(12), RATE_SCALE)
}

/// Level monthly payment amortizing `principal` over `months` at the
/// per-month interest rate `rate`. `months` must be at least one.
///
/// A zero rate degrades to straight-line division.
pub fn annuity_payment(principal: Decimal, rate: Decimal, months: u32) -> Decimal {
    if rate.is_zero() {
        return round_half_up(principal / Decimal::from(months), MONEY_SCALE);
    }
    let growth = (Decimal::ONE + rate).powu(u64::from(months));
    let discount = round_half_up(Decimal::ONE / growth, MONEY_SCALE);
    round_half_up(principal * (Decimal::ONE - discount) / rate, MONEY_SCALE)
}
