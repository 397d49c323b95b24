//! Core error types.
//!
//! Recoverable conditions (bad input, missing rates, mixed currencies in a
//! checked operation) are reported through these types. Broken internal
//! invariants of the lot ledger are not: they panic.

use chrono::{DateTime, ParseError as ChronoParseError, Utc};
use std::num::ParseIntError;
use thiserror::Error;

use crate::fx::FxError;
use crate::money::MoneyError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the crate.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Money operation failed: {0}")]
    Money(#[from] MoneyError),

    #[error("Trades calculation failed: {0}")]
    Calculation(#[from] CalculatorError),

    #[error("Fx error: {0}")]
    Fx(#[from] FxError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),
}

/// Errors that occur while matching trades.
#[derive(Error, Debug)]
pub enum CalculatorError {
    #[error("Invalid trade data: {0}")]
    InvalidTrade(String),

    #[error("Trades for {instrument} are not in chronological order: {current} follows {previous}")]
    UnorderedTrades {
        instrument: String,
        previous: DateTime<Utc>,
        current: DateTime<Utc>,
    },
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Failed to parse number: {0}")]
    NumberParse(#[from] ParseIntError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse date/time: {0}")]
    DateTimeParse(#[from] ChronoParseError),
}

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateTimeParse(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
