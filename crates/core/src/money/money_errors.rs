use thiserror::Error;

use super::Currency;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Currency mismatch: {left:?} and {right:?}")]
    CurrencyMismatch { left: Currency, right: Currency },

    #[error("Currency '{0}' is not recognized")]
    UnknownCurrency(String),

    #[error("Division by zero amount")]
    DivisionByZero,
}
