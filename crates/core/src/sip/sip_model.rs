//! SIP projection models.

use log::warn;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// When in each month the contribution is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContributionTiming {
    /// Paid at the end of the month (ordinary annuity)
    #[default]
    EndOfPeriod,
    /// Paid at the start of the month and compounded for that month too (annuity due)
    StartOfPeriod,
}

/// Parameters of a SIP projection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SipProjectionInput {
    pub monthly_contribution: Decimal,
    /// Tenor in years; fractional tenors are rounded to whole months
    pub tenor_years: Decimal,
    /// Assumed annual return, in percent (12 means 12% a year)
    pub annual_rate_percent: Decimal,
    #[serde(default)]
    pub contribution_timing: ContributionTiming,
}

impl SipProjectionInput {
    pub fn new(
        monthly_contribution: Decimal,
        tenor_years: Decimal,
        annual_rate_percent: Decimal,
    ) -> Self {
        Self {
            monthly_contribution,
            tenor_years,
            annual_rate_percent,
            contribution_timing: ContributionTiming::default(),
        }
    }

    pub fn with_timing(mut self, contribution_timing: ContributionTiming) -> Self {
        self.contribution_timing = contribution_timing;
        self
    }

    /// Builds an input from raw UI numbers, rejecting NaN and infinities.
    pub fn from_f64(
        monthly_contribution: f64,
        tenor_years: f64,
        annual_rate_percent: f64,
    ) -> Result<Self> {
        Ok(Self::new(
            finite_decimal("monthlyContribution", monthly_contribution)?,
            finite_decimal("tenorYears", tenor_years)?,
            finite_decimal("annualRatePercent", annual_rate_percent)?,
        ))
    }
}

fn finite_decimal(field: &str, value: f64) -> Result<Decimal> {
    if !value.is_finite() {
        warn!("Rejecting non-finite SIP input {}={}", field, value);
        return Err(Error::invalid_input(format!(
            "{} must be a finite number, got {}",
            field, value
        )));
    }
    Decimal::from_f64(value)
        .ok_or_else(|| Error::invalid_input(format!("{} is out of range: {}", field, value)))
}

/// Outcome of a SIP projection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SipProjectionResult {
    /// Projected corpus, rounded to whole currency units
    pub future_value: Decimal,
    /// Contributions paid over the tenor
    pub total_invested: Decimal,
    /// `future_value - total_invested`
    pub estimated_returns: Decimal,
    /// Number of monthly contributions
    pub months: u32,
}

/// Projected position at the end of a year of the plan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SipProjectionPoint {
    /// 1-based plan year; the last point may cover a partial year
    pub year: u32,
    /// Months elapsed since the first contribution
    pub months: u32,
    pub invested: Decimal,
    pub projected_value: Decimal,
}
