use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::EmiError;
use crate::EmiResult;

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as annual percentages (7.5 = 7.5% p.a.) unless a name
/// says otherwise.
pub type Rate = Decimal;

/// The three loan parameters every calculation takes. Immutable per
/// computation; owned by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanInput {
    pub principal: Money,
    /// Annual interest rate in percent (7.5 = 7.5% p.a.).
    pub annual_rate_pct: Rate,
    /// Tenure in whole years.
    pub term_years: u32,
}

impl LoanInput {
    pub fn new(principal: Money, annual_rate_pct: Rate, term_years: u32) -> Self {
        LoanInput {
            principal,
            annual_rate_pct,
            term_years,
        }
    }

    /// Annual percentage rate as a per-month decimal fraction.
    pub fn monthly_rate(&self) -> Rate {
        self.annual_rate_pct / dec!(12) / dec!(100)
    }

    /// Tenure in months.
    pub fn months(&self) -> u32 {
        self.term_years * 12
    }

    /// Boundary validation. Rejects nonsensical loan parameters before any
    /// arithmetic runs; a zero rate is allowed (even amortization).
    pub fn validate(&self) -> EmiResult<()> {
        if self.principal <= Decimal::ZERO {
            return Err(EmiError::InvalidInput {
                field: "principal".into(),
                reason: "Principal must be positive.".into(),
            });
        }
        if self.annual_rate_pct < Decimal::ZERO {
            return Err(EmiError::InvalidInput {
                field: "annual_rate_pct".into(),
                reason: "Interest rate must not be negative.".into(),
            });
        }
        if self.annual_rate_pct > dec!(100) {
            return Err(EmiError::InvalidInput {
                field: "annual_rate_pct".into(),
                reason: "Interest rate must not exceed 100%.".into(),
            });
        }
        if self.term_years == 0 {
            return Err(EmiError::InvalidInput {
                field: "term_years".into(),
                reason: "Tenure must be at least one year.".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn input(principal: Decimal, rate: Decimal, years: u32) -> LoanInput {
        LoanInput::new(principal, rate, years)
    }

    #[test]
    fn test_monthly_rate_conversion() {
        let loan = input(dec!(1_000_000), dec!(7.5), 5);
        assert_eq!(loan.monthly_rate(), dec!(0.00625));
        assert_eq!(loan.months(), 60);
    }

    #[test]
    fn test_validate_accepts_zero_rate() {
        assert!(input(dec!(500_000), dec!(0), 3).validate().is_ok());
    }

    #[test]
    fn test_reject_zero_principal() {
        assert!(input(dec!(0), dec!(7.5), 5).validate().is_err());
    }

    #[test]
    fn test_reject_negative_principal() {
        assert!(input(dec!(-100), dec!(7.5), 5).validate().is_err());
    }

    #[test]
    fn test_reject_negative_rate() {
        assert!(input(dec!(100_000), dec!(-1), 5).validate().is_err());
    }

    #[test]
    fn test_reject_rate_above_100() {
        assert!(input(dec!(100_000), dec!(100.5), 5).validate().is_err());
    }

    #[test]
    fn test_reject_zero_term() {
        assert!(input(dec!(100_000), dec!(7.5), 0).validate().is_err());
    }
}
