//! Calculation settings - display precision and projection defaults.

mod settings_model;

pub use settings_model::CalculationSettings;
