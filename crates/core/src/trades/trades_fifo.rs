use log::debug;
use std::collections::{BTreeMap, VecDeque};

use super::{PortfolioElement, Ticker, Trade};

/// Direction of a quantity: `-1` for disposals, `1` for acquisitions.
///
/// # Panics
/// Zero quantities never reach the ledger; passing one is a bug.
pub fn sign(value: i64) -> i64 {
    assert!(value != 0, "sign() called with a zero quantity");
    if value < 0 {
        -1
    } else {
        1
    }
}

/// Not yet offset part of a trade.
#[derive(Debug, Clone, PartialEq)]
pub struct Lot {
    pub trade: Trade,
    /// Signed quantity still open, same sign as `trade.quantity`
    pub quantity: i64,
}

/// Per-instrument FIFO queues of open lots.
///
/// A queue holds either long or short lots, never both at once.
#[derive(Debug, Default, Clone)]
pub struct TradesFifo {
    portfolio: BTreeMap<Ticker, VecDeque<Lot>>,
}

impl TradesFifo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a lot of `quantity` units of `trade`.
    ///
    /// # Panics
    /// If `quantity` disagrees in sign with `trade.quantity`, exceeds it in
    /// magnitude, or would mix signs within the instrument's queue.
    pub fn put(&mut self, quantity: i64, trade: &Trade) {
        assert_eq!(
            sign(quantity),
            sign(trade.quantity),
            "lot quantity {} disagrees with trade quantity {}",
            quantity,
            trade.quantity
        );
        assert!(
            quantity.abs() <= trade.quantity.abs(),
            "lot quantity {} exceeds trade quantity {}",
            quantity,
            trade.quantity
        );

        let queue = self.portfolio.entry(trade.ticker.clone()).or_default();
        if let Some(front) = queue.front() {
            assert_eq!(
                sign(quantity),
                sign(front.quantity),
                "cannot open a {} lot of {} on top of open {} lots",
                quantity,
                trade.ticker,
                front.quantity
            );
        }

        debug!("Opening lot of {} x {}", trade.ticker, quantity);
        queue.push_back(Lot {
            trade: trade.clone(),
            quantity,
        });
    }

    /// Offsets `quantity` against the oldest open lot of `ticker`.
    ///
    /// Returns the lot's originating trade together with the signed quantity
    /// taken from it (opposite in sign to `quantity`), or `None` if there is
    /// no open lot in the opposite direction.
    pub fn match_trade(&mut self, quantity: i64, ticker: &Ticker) -> Option<(Trade, i64)> {
        let queue = self.portfolio.get_mut(ticker)?;
        let front = queue.front_mut()?;
        let front_sign = sign(front.quantity);

        // only match BUY with SELL and vice versa
        if sign(quantity) == front_sign {
            return None;
        }

        let used = front_sign * quantity.abs().min(front.quantity.abs());
        if used == front.quantity {
            let lot = queue.pop_front()?;
            if queue.is_empty() {
                self.portfolio.remove(ticker);
            }
            return Some((lot.trade, used));
        }

        front.quantity -= used;
        Some((front.trade.clone(), used))
    }

    /// Open lots of `ticker`, oldest first.
    pub fn lots(&self, ticker: &Ticker) -> impl Iterator<Item = &Lot> {
        self.portfolio.get(ticker).into_iter().flatten()
    }

    pub fn is_empty(&self) -> bool {
        self.portfolio.values().all(VecDeque::is_empty)
    }

    /// Net open quantity per instrument, ordered by instrument, zero nets omitted.
    pub fn unmatched(&self) -> Vec<PortfolioElement> {
        self.portfolio
            .iter()
            .map(|(ticker, lots)| PortfolioElement {
                ticker: ticker.clone(),
                quantity: lots.iter().map(|lot| lot.quantity).sum(),
            })
            .filter(|element| element.quantity != 0)
            .collect()
    }
}
