use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Undiscounted return of a portfolio or fund position.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TotalReturn {
    /// Current value minus invested capital
    pub amount: Decimal,
    /// `amount` as a percentage of invested capital
    pub percentage: Decimal,
}
