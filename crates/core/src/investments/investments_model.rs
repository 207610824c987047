//! Investment record domain models.

use chrono::NaiveDate;
use log::warn;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{errors::ValidationError, Error, Result};

/// How the capital of a record was contributed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvestmentType {
    /// One installment of a Systematic Investment Plan
    Sip,
    /// Lump-sum purchase
    OneTime,
}

/// A single investment into a fund.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentRecord {
    pub id: String,
    pub fund_id: String,
    pub investment_type: InvestmentType,
    /// Capital contributed on `investment_date`
    pub amount: Decimal,
    pub units: Decimal,
    pub investment_date: NaiveDate,
    /// Latest market value. When absent the record is assumed to carry no gain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_value: Option<Decimal>,
}

impl InvestmentRecord {
    /// Current value used for aggregation, falling back to the invested amount.
    pub fn effective_current_value(&self) -> Decimal {
        self.current_value.unwrap_or(self.amount)
    }

    /// Checks the monetary fields of an already typed record.
    pub fn validate(&self) -> Result<()> {
        ensure_non_negative(&self.id, "amount", self.amount)?;
        ensure_non_negative(&self.id, "units", self.units)?;
        if let Some(current_value) = self.current_value {
            ensure_non_negative(&self.id, "currentValue", current_value)?;
        }
        Ok(())
    }
}

/// Raw investment record as received from the UI or a JSON feed.
///
/// Numbers arrive as `f64` and may be NaN or infinite; converting into an
/// [`InvestmentRecord`] rejects those along with negative values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInvestmentRecord {
    pub id: Option<String>,
    pub fund_id: String,
    pub investment_type: InvestmentType,
    pub amount: f64,
    pub units: f64,
    pub investment_date: NaiveDate,
    pub current_value: Option<f64>,
}

impl TryFrom<NewInvestmentRecord> for InvestmentRecord {
    type Error = Error;

    fn try_from(new_record: NewInvestmentRecord) -> Result<Self> {
        if new_record.fund_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "fundId".to_string(),
            )));
        }

        let id = new_record
            .id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        let amount = decimal_from_f64(&id, "amount", new_record.amount)?;
        let units = decimal_from_f64(&id, "units", new_record.units)?;
        let current_value = new_record
            .current_value
            .map(|value| decimal_from_f64(&id, "currentValue", value))
            .transpose()?;

        let record = InvestmentRecord {
            id,
            fund_id: new_record.fund_id,
            investment_type: new_record.investment_type,
            amount,
            units,
            investment_date: new_record.investment_date,
            current_value,
        };
        record.validate()?;
        Ok(record)
    }
}

fn decimal_from_f64(record_id: &str, field: &str, value: f64) -> Result<Decimal> {
    if !value.is_finite() {
        warn!("Record {}: {} is not a finite number ({})", record_id, field, value);
        return Err(Error::invalid_input(format!(
            "{} of record {} must be a finite number, got {}",
            field, record_id, value
        )));
    }
    Decimal::from_f64(value).ok_or_else(|| {
        Error::invalid_input(format!(
            "{} of record {} is out of range: {}",
            field, record_id, value
        ))
    })
}

fn ensure_non_negative(record_id: &str, field: &str, value: Decimal) -> Result<()> {
    if value.is_sign_negative() && !value.is_zero() {
        warn!("Record {}: negative {} ({})", record_id, field, value);
        return Err(Error::invalid_input(format!(
            "{} of record {} cannot be negative, got {}",
            field, record_id, value
        )));
    }
    Ok(())
}
