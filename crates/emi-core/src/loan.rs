//! Fixed-payment loan math.
//!
//! Covers:
//! 1. **Monthly payment (EMI)** -- the level payment that fully amortizes a
//!    fixed-rate loan over its tenure.
//! 2. **Payment summary** -- principal, total interest, total amount paid.
//!
//! All arithmetic uses `rust_decimal::Decimal`. No `f64`.

use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use serde::{Deserialize, Serialize};

use crate::error::EmiError;
use crate::types::{LoanInput, Money};
use crate::EmiResult;

/// Headline figures for a loan: what the summary card shows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentSummary {
    pub principal: Money,
    pub monthly_payment: Money,
    pub total_interest: Money,
    pub total_payment: Money,
}

/// The fixed monthly payment for a fully amortizing fixed-rate loan.
///
/// Standard annuity formula `P * r * (1+r)^n / ((1+r)^n - 1)` with the
/// annual percentage rate converted to a monthly decimal rate. A zero rate
/// degenerates to an even split of the principal across all months.
pub fn monthly_payment(input: &LoanInput) -> EmiResult<Money> {
    input.validate()?;

    let months = Decimal::from(input.months());
    let rate = input.monthly_rate();

    if rate.is_zero() {
        return Ok(input.principal / months);
    }

    let one_plus_r = Decimal::ONE + rate;
    let factor = one_plus_r.powd(months);
    let annuity_factor = factor - Decimal::ONE;

    if annuity_factor.is_zero() {
        return Err(EmiError::DivisionByZero {
            context: "EMI annuity factor".into(),
        });
    }

    Ok(input.principal * rate * factor / annuity_factor)
}

/// Monthly payment plus the lifetime totals derived from it.
pub fn payment_summary(input: &LoanInput) -> EmiResult<PaymentSummary> {
    let payment = monthly_payment(input)?;
    let total_payment = payment * Decimal::from(input.months());

    Ok(PaymentSummary {
        principal: input.principal,
        monthly_payment: payment,
        total_interest: total_payment - input.principal,
        total_payment,
    })
}
