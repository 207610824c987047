//! Core error types for the Fundfolio calculation library.
//!
//! Every calculation validates its input before doing any arithmetic, so an
//! error is never the result of a partially applied computation.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the calculation library.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Calculation failed: {0}")]
    Calculation(#[from] CalculatorError),

    #[error("Failed to load configuration: {0}")]
    ConfigIO(String),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),
}

impl Error {
    /// Shorthand for the invalid input error raised by every calculator.
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Error::Validation(ValidationError::InvalidInput(reason.into()))
    }

    /// True when the error was caused by rejected caller input.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}

/// Errors raised while doing the arithmetic itself.
#[derive(Error, Debug)]
pub enum CalculatorError {
    #[error("Arithmetic overflow: {0}")]
    Overflow(String),

    #[error("Calculation failed: {0}")]
    Calculation(String),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::ConfigIO(err.to_string())
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
