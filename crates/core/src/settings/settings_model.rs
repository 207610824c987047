use crate::constants::{DISPLAY_DECIMAL_PRECISION, MAX_DECIMAL_SCALE};
use crate::errors::{Error, Result};
use crate::sip::{ContributionTiming, SipProjectionInput};
use log::{debug, warn};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Settings the host application can pass down to the calculators.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct CalculationSettings {
    /// Decimal places kept when a figure is rounded for display
    pub display_precision: u32,
    /// Timing used when a projection request does not say otherwise
    pub default_contribution_timing: ContributionTiming,
}

impl Default for CalculationSettings {
    fn default() -> Self {
        Self {
            display_precision: DISPLAY_DECIMAL_PRECISION,
            default_contribution_timing: ContributionTiming::default(),
        }
    }
}

impl CalculationSettings {
    /// Parses settings from a JSON document. Missing keys fall back to defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: CalculationSettings = serde_json::from_str(json)?;
        settings.validate()?;
        debug!("Loaded calculation settings: {:?}", settings);
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.display_precision > MAX_DECIMAL_SCALE {
            warn!(
                "Rejecting display precision {} (max {})",
                self.display_precision, MAX_DECIMAL_SCALE
            );
            return Err(Error::InvalidConfigValue(format!(
                "displayPrecision must be at most {}, got {}",
                MAX_DECIMAL_SCALE, self.display_precision
            )));
        }
        Ok(())
    }

    /// Rounds a computed figure (return percentage, amounts) for display.
    pub fn round_for_display(&self, value: Decimal) -> Decimal {
        value.round_dp_with_strategy(
            self.display_precision,
            RoundingStrategy::MidpointAwayFromZero,
        )
    }

    /// Builds a projection request using the configured contribution timing.
    pub fn projection_input(
        &self,
        monthly_contribution: Decimal,
        tenor_years: Decimal,
        annual_rate_percent: Decimal,
    ) -> SipProjectionInput {
        SipProjectionInput::new(monthly_contribution, tenor_years, annual_rate_percent)
            .with_timing(self.default_contribution_timing)
    }
}
