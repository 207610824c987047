use log::{debug, error, warn};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};

use super::{ContributionTiming, SipProjectionInput, SipProjectionPoint, SipProjectionResult};
use crate::constants::{MAX_TENOR_YEARS, MIN_ANNUAL_RATE_PERCENT, MONTHS_PER_YEAR};
use crate::errors::{CalculatorError, Error, Result};

/// Projects the corpus of a SIP with monthly compounding.
///
/// With `r` the monthly rate and `n` the number of monthly contributions `c`:
///
/// * end of period: `c * ((1 + r)^n - 1) / r`
/// * start of period: `c * ((1 + r)^n - 1) * (1 + r) / r`
///
/// A zero rate takes the limit of both forms, `c * n`. The future value is
/// rounded to the nearest whole currency unit.
///
/// # Errors
///
/// Invalid input when the contribution or tenor is not positive, the tenor
/// rounds to zero months, or the annual rate is below -100%.
pub fn projected_future_value(input: &SipProjectionInput) -> Result<SipProjectionResult> {
    let months = validate(input)?;
    let monthly_rate = monthly_rate(input.annual_rate_percent);

    let future_value = round_to_unit(future_value_after(
        input.monthly_contribution,
        monthly_rate,
        months,
        input.contribution_timing,
    )?);
    let total_invested = invested_after(input.monthly_contribution, months)?;

    let result = SipProjectionResult {
        future_value,
        total_invested,
        estimated_returns: future_value - total_invested,
        months,
    };
    debug!(
        "SIP projection {} x {} months at {}% ({:?}): {}",
        input.monthly_contribution,
        months,
        input.annual_rate_percent,
        input.contribution_timing,
        result.future_value
    );
    Ok(result)
}

/// Year-by-year projection of a SIP. A tenor that is not a whole number of
/// years ends with a point for the partial year, whose value matches
/// [`projected_future_value`].
pub fn projection_schedule(input: &SipProjectionInput) -> Result<Vec<SipProjectionPoint>> {
    let months = validate(input)?;
    let monthly_rate = monthly_rate(input.annual_rate_percent);

    let mut checkpoints: Vec<u32> = (1..=months / MONTHS_PER_YEAR)
        .map(|year| year * MONTHS_PER_YEAR)
        .collect();
    if months % MONTHS_PER_YEAR != 0 {
        checkpoints.push(months);
    }

    checkpoints
        .into_iter()
        .enumerate()
        .map(|(index, elapsed)| -> Result<SipProjectionPoint> {
            let projected_value = round_to_unit(future_value_after(
                input.monthly_contribution,
                monthly_rate,
                elapsed,
                input.contribution_timing,
            )?);
            Ok(SipProjectionPoint {
                year: index as u32 + 1,
                months: elapsed,
                invested: invested_after(input.monthly_contribution, elapsed)?,
                projected_value,
            })
        })
        .collect()
}

/// Checks the input and returns the number of monthly contributions.
fn validate(input: &SipProjectionInput) -> Result<u32> {
    if input.monthly_contribution <= Decimal::ZERO {
        return Err(reject(format!(
            "monthly contribution must be positive, got {}",
            input.monthly_contribution
        )));
    }
    if input.tenor_years <= Decimal::ZERO {
        return Err(reject(format!(
            "tenor must be positive, got {} years",
            input.tenor_years
        )));
    }
    if input.tenor_years > Decimal::from(MAX_TENOR_YEARS) {
        return Err(reject(format!(
            "tenor cannot exceed {} years, got {}",
            MAX_TENOR_YEARS, input.tenor_years
        )));
    }
    if input.annual_rate_percent < MIN_ANNUAL_RATE_PERCENT {
        return Err(reject(format!(
            "annual rate cannot be below {}%, got {}%",
            MIN_ANNUAL_RATE_PERCENT, input.annual_rate_percent
        )));
    }

    let months = input
        .tenor_years
        .checked_mul(Decimal::from(MONTHS_PER_YEAR))
        .map(|m| m.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|m| m.to_u32())
        .ok_or_else(|| reject(format!("tenor of {} years is out of range", input.tenor_years)))?;
    if months == 0 {
        return Err(reject(format!(
            "tenor of {} years is shorter than one month",
            input.tenor_years
        )));
    }
    Ok(months)
}

fn reject(reason: String) -> Error {
    warn!("Rejected SIP projection input: {}", reason);
    Error::invalid_input(reason)
}

fn monthly_rate(annual_rate_percent: Decimal) -> Decimal {
    annual_rate_percent / Decimal::from(MONTHS_PER_YEAR) / Decimal::ONE_HUNDRED
}

/// Unrounded corpus after `months` contributions.
fn future_value_after(
    contribution: Decimal,
    monthly_rate: Decimal,
    months: u32,
    timing: ContributionTiming,
) -> Result<Decimal> {
    if monthly_rate.is_zero() {
        return invested_after(contribution, months);
    }

    let growth = Decimal::ONE + monthly_rate;
    let compounded = growth
        .checked_powi(i64::from(months))
        .ok_or_else(|| overflow(contribution, monthly_rate, months))?;

    let mut factor = (compounded - Decimal::ONE)
        .checked_div(monthly_rate)
        .ok_or_else(|| overflow(contribution, monthly_rate, months))?;
    if timing == ContributionTiming::StartOfPeriod {
        factor = factor
            .checked_mul(growth)
            .ok_or_else(|| overflow(contribution, monthly_rate, months))?;
    }

    contribution
        .checked_mul(factor)
        .ok_or_else(|| overflow(contribution, monthly_rate, months))
}

fn invested_after(contribution: Decimal, months: u32) -> Result<Decimal> {
    contribution
        .checked_mul(Decimal::from(months))
        .ok_or_else(|| overflow(contribution, Decimal::ZERO, months))
}

fn overflow(contribution: Decimal, monthly_rate: Decimal, months: u32) -> Error {
    error!(
        "SIP projection overflowed: contribution={}, monthly_rate={}, months={}",
        contribution, monthly_rate, months
    );
    CalculatorError::Overflow(format!(
        "projection of {} over {} months at a monthly rate of {} exceeds the supported range",
        contribution, months, monthly_rate
    ))
    .into()
}

fn round_to_unit(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}
