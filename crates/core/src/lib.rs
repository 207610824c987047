//! Fundfolio Core - portfolio and SIP calculations for the mutual fund app.
//!
//! Pure, synchronous functions over snapshots of investment records. Records
//! are owned by an external data source; display formatting is owned by the
//! UI layer.

pub mod constants;
pub mod errors;
pub mod investments;
pub mod portfolio;
pub mod settings;
pub mod sip;

pub use investments::*;
pub use portfolio::*;
pub use settings::CalculationSettings;
pub use sip::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
