//! Aggregation of investment records into portfolio totals.
//!
//! Totals are recomputed on demand from a record snapshot; nothing here is
//! stored or cached.

mod aggregation_calculator;
mod aggregation_model;

pub use aggregation_calculator::{
    aggregate, aggregate_by_fund, aggregate_by_investment_type, annualized_return,
    current_total, total_invested,
};
pub use aggregation_model::{FundAggregate, InvestmentTypeBreakdown, PortfolioAggregate};
