//! Unit tests for the SIP projection engine.

use super::*;
use crate::errors::{CalculatorError, Error, ValidationError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn input(contribution: Decimal, years: Decimal, rate: Decimal) -> SipProjectionInput {
    SipProjectionInput::new(contribution, years, rate)
}

// ============================================================================
// Closed form
// ============================================================================

#[test]
fn test_one_year_at_twelve_percent() {
    let result = projected_future_value(&input(dec!(5000), dec!(1), dec!(12))).unwrap();
    // 5000 * ((1.01^12 - 1) / 0.01) = 63412.515...
    assert_eq!(result.future_value, dec!(63413));
    assert!((result.future_value - dec!(63412)).abs() <= dec!(1));
    assert_eq!(result.months, 12);
    assert_eq!(result.total_invested, dec!(60000));
    assert_eq!(result.estimated_returns, dec!(3413));
}

#[test]
fn test_start_of_period_compounds_one_extra_month() {
    let due = input(dec!(5000), dec!(1), dec!(12)).with_timing(ContributionTiming::StartOfPeriod);
    let result = projected_future_value(&due).unwrap();
    assert_eq!(result.future_value, dec!(64047));
    assert_eq!(result.total_invested, dec!(60000));
}

#[test]
fn test_long_tenor() {
    let result = projected_future_value(&input(dec!(10000), dec!(10), dec!(12))).unwrap();
    assert_eq!(result.months, 120);
    assert_eq!(result.future_value, dec!(2300387));
}

#[test]
fn test_zero_rate_is_sum_of_contributions() {
    let result = projected_future_value(&input(dec!(1000), dec!(5), dec!(0))).unwrap();
    assert_eq!(result.future_value, dec!(60000));
    assert_eq!(result.estimated_returns, Decimal::ZERO);

    let due = input(dec!(1000), dec!(5), dec!(0)).with_timing(ContributionTiming::StartOfPeriod);
    assert_eq!(projected_future_value(&due).unwrap().future_value, dec!(60000));
}

#[test]
fn test_negative_rates() {
    let result = projected_future_value(&input(dec!(2000), dec!(1), dec!(-12))).unwrap();
    assert_eq!(result.future_value, dec!(22723));
    assert_eq!(result.estimated_returns, dec!(-1277));

    let floor = projected_future_value(&input(dec!(1000), dec!(1), dec!(-100))).unwrap();
    assert_eq!(floor.future_value, dec!(7776));
}

// ============================================================================
// Month rounding
// ============================================================================

#[test]
fn test_fractional_tenor_rounds_to_nearest_month() {
    let result = projected_future_value(&input(dec!(1000), dec!(1.5), dec!(12))).unwrap();
    assert_eq!(result.months, 18);
    assert_eq!(result.future_value, dec!(19615));

    // 0.05 years = 0.6 months -> 1 contribution
    let result = projected_future_value(&input(dec!(100), dec!(0.05), dec!(10))).unwrap();
    assert_eq!(result.months, 1);
    assert_eq!(result.future_value, dec!(100));

    // 1.0417 years = 12.5004 months -> 13
    let result = projected_future_value(&input(dec!(100), dec!(1.0417), dec!(0))).unwrap();
    assert_eq!(result.months, 13);
}

#[test]
fn test_tenor_shorter_than_half_a_month_is_rejected() {
    let err = projected_future_value(&input(dec!(100), dec!(0.04), dec!(10))).unwrap_err();
    assert!(err.is_invalid_input());
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_non_positive_contribution_is_rejected() {
    for contribution in [dec!(0), dec!(-500)] {
        let err = projected_future_value(&input(contribution, dec!(1), dec!(12))).unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::InvalidInput(_))
        ));
    }
}

#[test]
fn test_non_positive_tenor_is_rejected() {
    for years in [dec!(0), dec!(-1)] {
        let err = projected_future_value(&input(dec!(1000), years, dec!(12))).unwrap_err();
        assert!(err.is_invalid_input());
    }
}

#[test]
fn test_tenor_above_limit_is_rejected() {
    let err = projected_future_value(&input(dec!(1000), dec!(100.01), dec!(12))).unwrap_err();
    assert!(err.is_invalid_input());

    let err = projection_schedule(&input(dec!(1000), dec!(300000000), dec!(12))).unwrap_err();
    assert!(err.is_invalid_input());

    let longest = projection_schedule(&input(dec!(1000), dec!(100), dec!(0))).unwrap();
    assert_eq!(longest.len(), 100);
    assert_eq!(longest[99].projected_value, dec!(1200000));
}

#[test]
fn test_rate_below_minus_hundred_is_rejected() {
    let err = projected_future_value(&input(dec!(1000), dec!(1), dec!(-100.01))).unwrap_err();
    assert!(err.is_invalid_input());
}

#[test]
fn test_from_f64_rejects_non_finite() {
    assert!(SipProjectionInput::from_f64(f64::NAN, 1.0, 12.0)
        .unwrap_err()
        .is_invalid_input());
    assert!(SipProjectionInput::from_f64(1000.0, f64::INFINITY, 12.0)
        .unwrap_err()
        .is_invalid_input());
    assert!(SipProjectionInput::from_f64(1000.0, 1.0, f64::NEG_INFINITY)
        .unwrap_err()
        .is_invalid_input());

    let parsed = SipProjectionInput::from_f64(5000.0, 1.0, 12.0).unwrap();
    assert_eq!(
        projected_future_value(&parsed).unwrap().future_value,
        dec!(63413)
    );
}

#[test]
fn test_overflow_is_a_calculation_error() {
    let err = projected_future_value(&input(Decimal::MAX, dec!(50), dec!(12))).unwrap_err();
    assert!(matches!(err, Error::Calculation(CalculatorError::Overflow(_))));
}

#[test]
fn test_input_deserializes_with_default_timing() {
    let json = r#"{"monthlyContribution": 5000, "tenorYears": 1, "annualRatePercent": 12}"#;
    let parsed: SipProjectionInput = serde_json::from_str(json).unwrap();
    assert_eq!(parsed.contribution_timing, ContributionTiming::EndOfPeriod);
    assert_eq!(parsed.monthly_contribution, dec!(5000));
}

// ============================================================================
// Schedule
// ============================================================================

#[test]
fn test_schedule_whole_years() {
    let schedule = projection_schedule(&input(dec!(1000), dec!(2), dec!(12))).unwrap();
    assert_eq!(schedule.len(), 2);

    assert_eq!(schedule[0].year, 1);
    assert_eq!(schedule[0].months, 12);
    assert_eq!(schedule[0].invested, dec!(12000));
    assert_eq!(schedule[0].projected_value, dec!(12683));

    assert_eq!(schedule[1].year, 2);
    assert_eq!(schedule[1].months, 24);
    assert_eq!(schedule[1].invested, dec!(24000));
    assert_eq!(schedule[1].projected_value, dec!(26973));
}

#[test]
fn test_schedule_partial_final_year_matches_projection() {
    let plan = input(dec!(1000), dec!(1.5), dec!(12));
    let schedule = projection_schedule(&plan).unwrap();
    assert_eq!(schedule.len(), 2);
    assert_eq!(schedule[1].year, 2);
    assert_eq!(schedule[1].months, 18);

    let result = projected_future_value(&plan).unwrap();
    assert_eq!(schedule[1].projected_value, result.future_value);
    assert_eq!(schedule[1].invested, result.total_invested);
}

#[test]
fn test_schedule_shorter_than_a_year() {
    let schedule = projection_schedule(&input(dec!(500), dec!(0.5), dec!(0))).unwrap();
    assert_eq!(schedule.len(), 1);
    assert_eq!(schedule[0].year, 1);
    assert_eq!(schedule[0].months, 6);
    assert_eq!(schedule[0].projected_value, dec!(3000));
}

#[test]
fn test_schedule_rejects_invalid_input() {
    assert!(projection_schedule(&input(dec!(-1), dec!(1), dec!(12)))
        .unwrap_err()
        .is_invalid_input());
}
