use chrono::NaiveDate;
use thiserror::Error;

use crate::money::Currency;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FxError {
    #[error("No {currency:?} exchange rate on or before {date}")]
    RateNotFound { currency: Currency, date: NaiveDate },

    #[error("Invalid exchange rate: {0}")]
    InvalidRate(String),
}
