//! Input ranges for the calculator form.
//!
//! These are the slider bounds of the input form, owned by the shell.
//! The core computes whatever it is handed; clamping is opt-in here.

use emi_core::types::{LoanInput, Money, Rate};
use rust_decimal_macros::dec;

pub const PRINCIPAL_MIN: Money = dec!(100_000);
pub const PRINCIPAL_MAX: Money = dec!(5_000_000);
pub const RATE_MIN: Rate = dec!(1);
pub const RATE_MAX: Rate = dec!(20);
pub const TERM_MIN: u32 = 1;
pub const TERM_MAX: u32 = 30;

/// Clamp a loan into the form's documented ranges.
pub fn clamp(loan_input: &LoanInput) -> LoanInput {
    LoanInput {
        principal: loan_input.principal.clamp(PRINCIPAL_MIN, PRINCIPAL_MAX),
        annual_rate_pct: loan_input.annual_rate_pct.clamp(RATE_MIN, RATE_MAX),
        term_years: loan_input.term_years.clamp(TERM_MIN, TERM_MAX),
    }
}
