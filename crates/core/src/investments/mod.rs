//! Investment records - the input snapshot the portfolio calculators work on.
//!
//! Records are created and mutated by an external data source. This module
//! only models them and validates raw input on the way in.

mod investments_model;

pub use investments_model::{InvestmentRecord, InvestmentType, NewInvestmentRecord};
