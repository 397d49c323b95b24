use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;

/// Instrument class. Same symbol in different classes is a different instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TickerKind {
    Stock,
    Option,
    Futures,
    Bond,
}

impl TickerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TickerKind::Stock => "Stock",
            TickerKind::Option => "Option",
            TickerKind::Futures => "Futures",
            TickerKind::Bond => "Bond",
        }
    }
}

impl fmt::Display for TickerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Instrument identity, resolved by the report parser before trades reach the calculator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticker {
    pub symbol: String,
    pub kind: TickerKind,
}

impl Ticker {
    pub fn new(symbol: impl Into<String>, kind: TickerKind) -> Self {
        Ticker {
            symbol: symbol.into(),
            kind,
        }
    }

    pub fn stock(symbol: impl Into<String>) -> Self {
        Ticker::new(symbol, TickerKind::Stock)
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.symbol, self.kind)
    }
}

/// Commission charged for an execution, as reported by the broker.
/// Fees are negative (or zero) amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "amount", rename_all = "camelCase")]
pub enum TradeFee {
    /// Fee for the whole execution
    Total(Money),
    /// Fee already normalized to a single unit
    PerUnit(Money),
}

impl TradeFee {
    pub fn money(&self) -> &Money {
        match self {
            TradeFee::Total(fee) | TradeFee::PerUnit(fee) => fee,
        }
    }
}

/// One brokerage execution.
///
/// Positive quantity acquires the instrument, negative quantity disposes of
/// it (or opens a short). `price` is the positive per-unit price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    pub ticker: Ticker,
    pub trade_date: DateTime<Utc>,
    pub settle_date: NaiveDate,
    pub quantity: i64,
    pub price: Money,
    pub fee: TradeFee,
}

impl Trade {
    fn units(&self) -> Decimal {
        Decimal::from(self.quantity.unsigned_abs())
    }

    /// Fee attributable to one unit of the trade.
    ///
    /// # Panics
    /// If a total fee is given for a zero quantity trade.
    pub fn fee_per_unit(&self) -> Money {
        match self.fee {
            TradeFee::PerUnit(fee) => fee,
            TradeFee::Total(fee) => Money::new(fee.amount() / self.units(), fee.currency()),
        }
    }

    /// Fee for the whole execution.
    pub fn total_fee(&self) -> Money {
        match self.fee {
            TradeFee::Total(fee) => fee,
            TradeFee::PerUnit(fee) => Money::new(fee.amount() * self.units(), fee.currency()),
        }
    }

    pub fn is_buy(&self) -> bool {
        self.quantity > 0
    }
}

/// One leg of a realized position.
///
/// Opening legs and the closing leg of a position share `group_id`. Realized
/// profit is reported on the closing leg only; opening legs carry zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinishedTrade {
    pub group_id: u32,
    pub ticker: Ticker,
    pub trade_date: DateTime<Utc>,
    pub settle_date: NaiveDate,
    pub quantity: i64,
    pub price: Money,
    pub fee_per_unit: Money,
    /// Gross amount of the leg, `abs(quantity) * price`
    pub total: Money,
    pub profit: Money,
}

/// Net open position left after all trades were matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioElement {
    pub ticker: Ticker,
    pub quantity: i64,
}

/// Output of a full matching pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradesAnalysis {
    pub finished_trades: Vec<FinishedTrade>,
    pub final_portfolio: Vec<PortfolioElement>,
}
