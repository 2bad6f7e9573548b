//! Indian-locale currency formatting.
//!
//! Fixed to INR with no fractional-unit display: amounts round to whole
//! rupees (half away from zero) and group digits the Indian way, last three
//! then pairs, e.g. `₹12,34,567`.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::types::Money;

/// Format an amount as whole rupees with Indian digit grouping.
pub fn format_inr(amount: Money) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let grouped = group_indian(&rounded.abs().to_string());

    if rounded < Decimal::ZERO {
        format!("-₹{grouped}")
    } else {
        format!("₹{grouped}")
    }
}

/// Indian grouping: the last three digits form one group, the rest split
/// into groups of two.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut pairs: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        pairs.push(&head[end - 2..end]);
        end -= 2;
    }
    pairs.push(&head[..end]);
    pairs.reverse();

    format!("{},{}", pairs.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_grouping_lakhs_and_crores() {
        assert_eq!(format_inr(dec!(1234567)), "₹12,34,567");
        assert_eq!(format_inr(dec!(100000)), "₹1,00,000");
        assert_eq!(format_inr(dec!(5000000)), "₹50,00,000");
        assert_eq!(format_inr(dec!(123456789)), "₹12,34,56,789");
    }

    #[test]
    fn test_no_grouping_below_four_digits() {
        assert_eq!(format_inr(dec!(0)), "₹0");
        assert_eq!(format_inr(dec!(999)), "₹999");
        assert_eq!(format_inr(dec!(1000)), "₹1,000");
    }

    #[test]
    fn test_rounds_to_whole_rupees() {
        assert_eq!(format_inr(dec!(20037.95)), "₹20,038");
        assert_eq!(format_inr(dec!(43957.49)), "₹43,957");
        assert_eq!(format_inr(dec!(999.4)), "₹999");
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        assert_eq!(format_inr(dec!(2.5)), "₹3");
        assert_eq!(format_inr(dec!(-2.5)), "-₹3");
        assert_eq!(format_inr(dec!(1499.5)), "₹1,500");
    }

    #[test]
    fn test_negative_amounts() {
        assert_eq!(format_inr(dec!(-1234567)), "-₹12,34,567");
        assert_eq!(format_inr(dec!(-42)), "-₹42");
    }

    #[test]
    fn test_rounding_can_introduce_a_group() {
        assert_eq!(format_inr(dec!(999.6)), "₹1,000");
        assert_eq!(format_inr(dec!(99999.5)), "₹1,00,000");
    }
}
