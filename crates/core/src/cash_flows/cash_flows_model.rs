use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;
use crate::trades::Ticker;

/// Dividend payment together with the tax withheld at source.
///
/// Withheld tax is a negative amount. A broker may reverse a payment, which
/// shows up as a dividend with zero amount and zero tax.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dividend {
    /// Broker's dividend type, e.g. "Ordinary Dividend"
    pub kind: String,
    pub ticker: Ticker,
    pub date: NaiveDate,
    pub amount: Money,
    pub tax: Money,
}

impl Dividend {
    pub fn is_reversed(&self) -> bool {
        self.amount.is_zero() && self.tax.is_zero()
    }
}

impl fmt::Display for Dividend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {} ({} tax:{})",
            self.ticker, self.date, self.amount, self.tax
        )
    }
}

/// Account fee not attached to a trade (market data, other fees).
///
/// Deductible from trading income of the same year, not from dividends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fee {
    pub date: NaiveDate,
    pub amount: Money,
    pub description: String,
}

impl fmt::Display for Fee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} {})", self.date, self.amount, self.description)
    }
}

/// Interest credited on the cash balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interest {
    pub date: NaiveDate,
    pub amount: Money,
    pub description: String,
}

impl fmt::Display for Interest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} {})", self.date, self.amount, self.description)
    }
}
