use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::portfolio::performance::total_return;

/// Portfolio totals derived from a snapshot of investment records.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioAggregate {
    pub total_invested: Decimal,
    pub current_value: Decimal,
    /// `current_value - total_invested`
    pub absolute_return: Decimal,
    /// Absolute return as a percentage of `total_invested`, 0 when nothing is invested
    pub return_percentage: Decimal,
}

impl PortfolioAggregate {
    /// The aggregate of an empty snapshot.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_totals(total_invested: Decimal, current_value: Decimal) -> Result<Self> {
        let returns = total_return(total_invested, current_value)?;
        Ok(Self {
            total_invested,
            current_value,
            absolute_return: returns.amount,
            return_percentage: returns.percentage,
        })
    }
}

/// Totals for all records of a single fund.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FundAggregate {
    pub fund_id: String,
    pub record_count: usize,
    pub aggregate: PortfolioAggregate,
}

/// Totals split by how the capital was contributed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentTypeBreakdown {
    pub sip: PortfolioAggregate,
    pub one_time: PortfolioAggregate,
}
