use chrono::NaiveDate;
use emi_core::format::format_inr;
use emi_core::loan::{monthly_payment, payment_summary};
use emi_core::schedule::generate_schedule;
use emi_core::types::LoanInput;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// EMI reference scenarios
// ===========================================================================

#[test]
fn test_emi_home_loan_reference() {
    // 10 lakh at 7.5% p.a. over 5 years.
    // r = 0.075/12 = 0.00625, n = 60, 1.00625^60 ~= 1.45329
    // EMI = 1,000,000 * 0.00625 * 1.45329 / 0.45329 ~= 20,038
    let loan = LoanInput::new(dec!(1_000_000), dec!(7.5), 5);
    let emi = monthly_payment(&loan).unwrap();
    assert_eq!(format_inr(emi), "₹20,038");
}

#[test]
fn test_emi_short_personal_loan_reference() {
    // 5 lakh at 10% p.a. over 1 year.
    // r = 0.0083333, n = 12, EMI ~= 43,958
    let loan = LoanInput::new(dec!(500_000), dec!(10), 1);
    let emi = monthly_payment(&loan).unwrap();
    assert_eq!(format_inr(emi), "₹43,958");
}

#[test]
fn test_summary_card_figures() {
    // Total payment = EMI * 60 ~= 1,202,277; interest ~= 202,277
    let loan = LoanInput::new(dec!(1_000_000), dec!(7.5), 5);
    let summary = payment_summary(&loan).unwrap();
    assert_eq!(format_inr(summary.principal), "₹10,00,000");
    assert_eq!(format_inr(summary.total_payment), "₹12,02,277");
    assert_eq!(format_inr(summary.total_interest), "₹2,02,277");
}

#[test]
fn test_zero_rate_loan_even_split() {
    // Interest-free loan splits the principal evenly across all months.
    let loan = LoanInput::new(dec!(360_000), dec!(0), 3);
    let summary = payment_summary(&loan).unwrap();
    assert_eq!(summary.monthly_payment, dec!(10_000));
    assert_eq!(summary.total_interest, Decimal::ZERO);
}

// ===========================================================================
// Schedule scenarios
// ===========================================================================

#[test]
fn test_five_year_schedule_end_to_end() {
    let loan = LoanInput::new(dec!(1_000_000), dec!(7.5), 5);
    let start = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();
    let schedule = generate_schedule(&loan, Some(start)).unwrap();

    assert_eq!(schedule.entry_count(), 60);
    assert_eq!(schedule.year_count(), 6);

    // First month: interest = 1,000,000 * 0.00625 = 6,250
    let first = &schedule.years[&2026][0];
    assert_eq!(first.month, "Aug");
    assert_eq!(first.interest, dec!(6250));
    assert!((first.principal_paid - dec!(13787.95)).abs() < dec!(0.5));

    // Final month retires the loan
    let last_balance = schedule.final_balance().unwrap();
    assert!(last_balance.abs() < dec!(0.01));
}

#[test]
fn test_one_year_schedule_spans_two_calendar_years() {
    let loan = LoanInput::new(dec!(500_000), dec!(10), 1);
    let start = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();
    let schedule = generate_schedule(&loan, Some(start)).unwrap();

    assert_eq!(schedule.entry_count(), 12);
    assert_eq!(schedule.year_count(), 2);
    assert_eq!(schedule.years[&2026].len(), 5);
    assert_eq!(schedule.years[&2027].len(), 7);
    assert!(schedule.final_balance().unwrap().abs() < dec!(0.01));
}

#[test]
fn test_years_iterate_in_ascending_order() {
    let loan = LoanInput::new(dec!(1_000_000), dec!(7.5), 5);
    let start = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();
    let schedule = generate_schedule(&loan, Some(start)).unwrap();

    let years: Vec<i32> = schedule.years.keys().copied().collect();
    assert_eq!(years, vec![2026, 2027, 2028, 2029, 2030, 2031]);
}

#[test]
fn test_interest_share_shrinks_over_the_loan() {
    // Early payments are interest-heavy, late payments principal-heavy.
    let loan = LoanInput::new(dec!(1_000_000), dec!(7.5), 5);
    let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
    let schedule = generate_schedule(&loan, Some(start)).unwrap();

    let first = &schedule.years[&2026][0];
    let last = &schedule.years[&2030][11];
    assert!(first.interest > last.interest);
    assert!(first.principal_paid < last.principal_paid);
}

#[test]
fn test_schedule_consistent_with_summary() {
    let loan = LoanInput::new(dec!(750_000), dec!(9.25), 4);
    let start = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
    let summary = payment_summary(&loan).unwrap();
    let schedule = generate_schedule(&loan, Some(start)).unwrap();

    let total_interest: Decimal = schedule.iter_months().map(|(_, e)| e.interest).sum();
    assert!((total_interest - summary.total_interest).abs() < dec!(0.01));
}

// ===========================================================================
// Boundary validation
// ===========================================================================

#[test]
fn test_invalid_parameters_fail_before_computation() {
    let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
    for loan in [
        LoanInput::new(dec!(0), dec!(7.5), 5),
        LoanInput::new(dec!(-500_000), dec!(7.5), 5),
        LoanInput::new(dec!(500_000), dec!(-1), 5),
        LoanInput::new(dec!(500_000), dec!(101), 5),
        LoanInput::new(dec!(500_000), dec!(7.5), 0),
    ] {
        assert!(monthly_payment(&loan).is_err());
        assert!(generate_schedule(&loan, Some(start)).is_err());
    }
}
