use log::{debug, error, warn};
use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

use super::TotalReturn;
use crate::errors::{CalculatorError, Error, Result};

/// Gain or loss in currency units. Negative when the position is under water.
pub fn absolute_return(total_invested: Decimal, current_value: Decimal) -> Decimal {
    current_value - total_invested
}

/// Return on invested capital, in percent.
///
/// A portfolio with nothing invested has no meaningful return, so a zero
/// `total_invested` yields 0 instead of a division error. The result keeps
/// full precision; rounding for display is the caller's concern.
///
/// # Errors
///
/// `Error::Calculation` when the percentage does not fit in a `Decimal`,
/// e.g. a few paise invested against a very large current value.
pub fn return_percentage(total_invested: Decimal, current_value: Decimal) -> Result<Decimal> {
    if total_invested.is_zero() {
        return Ok(Decimal::ZERO);
    }
    absolute_return(total_invested, current_value)
        .checked_div(total_invested)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .ok_or_else(|| overflow("return percentage", total_invested, current_value))
}

/// Absolute and percentage return in one value.
pub fn total_return(total_invested: Decimal, current_value: Decimal) -> Result<TotalReturn> {
    Ok(TotalReturn {
        amount: absolute_return(total_invested, current_value),
        percentage: return_percentage(total_invested, current_value)?,
    })
}

/// Yearly rate, in percent, at which `total_invested` compounds into
/// `current_value` over `years`.
///
/// Holding periods under a year are reported as the plain return percentage.
/// A position worth nothing has lost 100% a year.
pub fn compound_annual_growth_rate(
    total_invested: Decimal,
    current_value: Decimal,
    years: Decimal,
) -> Result<Decimal> {
    if total_invested.is_sign_negative() || current_value.is_sign_negative() {
        warn!(
            "Rejecting growth rate for negative totals: invested={}, current={}",
            total_invested, current_value
        );
        return Err(Error::invalid_input(format!(
            "totals cannot be negative, got invested={} current={}",
            total_invested, current_value
        )));
    }
    if years.is_sign_negative() && !years.is_zero() {
        return Err(Error::invalid_input(format!(
            "holding period cannot be negative, got {} years",
            years
        )));
    }

    if total_invested.is_zero() {
        return Ok(Decimal::ZERO);
    }
    if years < Decimal::ONE {
        return return_percentage(total_invested, current_value);
    }
    if current_value.is_zero() {
        return Ok(dec!(-100));
    }

    let rate = current_value
        .checked_div(total_invested)
        .and_then(|growth| growth.checked_powd(Decimal::ONE / years))
        .and_then(|factor| (factor - Decimal::ONE).checked_mul(Decimal::ONE_HUNDRED))
        .ok_or_else(|| overflow("annual growth rate", total_invested, current_value))?;
    debug!(
        "{} -> {} over {} years compounds at {}% a year",
        total_invested, current_value, years, rate
    );
    Ok(rate)
}

fn overflow(what: &str, total_invested: Decimal, current_value: Decimal) -> Error {
    error!(
        "Overflow computing {}: invested={}, current={}",
        what, total_invested, current_value
    );
    CalculatorError::Overflow(format!(
        "{} of {} invested against {} current exceeds the supported range",
        what, total_invested, current_value
    ))
    .into()
}
