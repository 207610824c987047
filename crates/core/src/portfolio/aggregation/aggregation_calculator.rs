use std::collections::BTreeMap;

use chrono::NaiveDate;
use log::{debug, error, warn};
use rust_decimal::Decimal;

use super::{FundAggregate, InvestmentTypeBreakdown, PortfolioAggregate};
use crate::constants::DAYS_PER_YEAR;
use crate::errors::{CalculatorError, Error, Result};
use crate::investments::{InvestmentRecord, InvestmentType};
use crate::portfolio::performance::compound_annual_growth_rate;

/// Sum of the capital contributed across `records`. Empty input yields 0.
pub fn total_invested(records: &[InvestmentRecord]) -> Result<Decimal> {
    sum_validated(records, |record| record.amount)
}

/// Sum of current values across `records`, counting a record without a
/// current value at its invested amount. Empty input yields 0.
pub fn current_total(records: &[InvestmentRecord]) -> Result<Decimal> {
    sum_validated(records, InvestmentRecord::effective_current_value)
}

/// Portfolio totals and returns for a record snapshot.
pub fn aggregate(records: &[InvestmentRecord]) -> Result<PortfolioAggregate> {
    let invested = total_invested(records)?;
    let current = current_total(records)?;
    let result = PortfolioAggregate::from_totals(invested, current)?;
    debug!(
        "Aggregated {} records: invested={}, current={}, return={} ({}%)",
        records.len(),
        result.total_invested,
        result.current_value,
        result.absolute_return,
        result.return_percentage
    );
    Ok(result)
}

/// Yearly growth rate of a snapshot as of `as_of`, in percent.
///
/// The whole invested amount is treated as held since the earliest
/// `investment_date`, so later SIP installments dilute the rate. Snapshots
/// younger than a year report their plain return percentage.
pub fn annualized_return(records: &[InvestmentRecord], as_of: NaiveDate) -> Result<Decimal> {
    let Some(first_investment) = records.iter().map(|record| record.investment_date).min() else {
        return Ok(Decimal::ZERO);
    };
    if as_of < first_investment {
        warn!(
            "Valuation date {} precedes first investment on {}",
            as_of, first_investment
        );
        return Err(Error::invalid_input(format!(
            "valuation date {} is before the first investment on {}",
            as_of, first_investment
        )));
    }

    let totals = aggregate(records)?;
    let days = (as_of - first_investment).num_days();
    let years = Decimal::from(days) / DAYS_PER_YEAR;
    compound_annual_growth_rate(totals.total_invested, totals.current_value, years)
}

/// Per-fund totals, ordered by fund id.
pub fn aggregate_by_fund(records: &[InvestmentRecord]) -> Result<Vec<FundAggregate>> {
    let mut by_fund: BTreeMap<&str, Vec<InvestmentRecord>> = BTreeMap::new();
    for record in records {
        by_fund
            .entry(record.fund_id.as_str())
            .or_default()
            .push(record.clone());
    }

    by_fund
        .into_iter()
        .map(|(fund_id, fund_records)| -> Result<FundAggregate> {
            Ok(FundAggregate {
                fund_id: fund_id.to_string(),
                record_count: fund_records.len(),
                aggregate: aggregate(&fund_records)?,
            })
        })
        .collect()
}

/// Totals for SIP installments and one-time purchases.
pub fn aggregate_by_investment_type(
    records: &[InvestmentRecord],
) -> Result<InvestmentTypeBreakdown> {
    let (sip, one_time): (Vec<InvestmentRecord>, Vec<InvestmentRecord>) = records
        .iter()
        .cloned()
        .partition(|record| record.investment_type == InvestmentType::Sip);

    Ok(InvestmentTypeBreakdown {
        sip: aggregate(&sip)?,
        one_time: aggregate(&one_time)?,
    })
}

/// Validates every record before summing, so an invalid snapshot never
/// produces a partial total.
fn sum_validated<F>(records: &[InvestmentRecord], value_of: F) -> Result<Decimal>
where
    F: Fn(&InvestmentRecord) -> Decimal,
{
    for record in records {
        record.validate()?;
    }

    records.iter().try_fold(Decimal::ZERO, |acc, record| {
        acc.checked_add(value_of(record)).ok_or_else(|| {
            error!("Overflow while summing record {} into {}", record.id, acc);
            Error::from(CalculatorError::Overflow(format!(
                "sum exceeds range at record {}",
                record.id
            )))
        })
    })
}
