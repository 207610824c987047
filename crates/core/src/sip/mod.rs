//! SIP projection - future value of a fixed monthly contribution.

mod projection_calculator;
mod sip_model;

pub use projection_calculator::{projected_future_value, projection_schedule};
pub use sip_model::{
    ContributionTiming, SipProjectionInput, SipProjectionPoint, SipProjectionResult,
};

#[cfg(test)]
mod projection_calculator_tests;
