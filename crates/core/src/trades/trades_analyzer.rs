use chrono::{DateTime, Utc};
use log::{debug, info};
use std::collections::HashMap;

use super::cost_calculator::compute_total_cost;
use super::trades_fifo::{sign, TradesFifo};
use super::{FinishedTrade, Ticker, Trade, TradesAnalysis};
use crate::errors::{CalculatorError, Result};
use crate::money::{Money, MoneyError};

/// Matches trades against open lots in FIFO order.
///
/// Trades must be fed in chronological order per instrument. Each trade
/// first offsets opposite-direction lots, oldest first; whatever is left
/// opens a new lot.
#[derive(Debug, Clone)]
pub struct TradesAnalyzer {
    fifo: TradesFifo,
    finished_trades: Vec<FinishedTrade>,
    next_group_id: u32,
    last_trade_dates: HashMap<Ticker, DateTime<Utc>>,
}

impl Default for TradesAnalyzer {
    fn default() -> Self {
        TradesAnalyzer {
            fifo: TradesFifo::new(),
            finished_trades: Vec::new(),
            next_group_id: 1,
            last_trade_dates: HashMap::new(),
        }
    }
}

impl TradesAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs a full matching pass over `trades`.
    pub fn analyze(trades: &[Trade]) -> Result<TradesAnalysis> {
        let mut analyzer = TradesAnalyzer::new();
        for trade in trades {
            analyzer.process_trade(trade)?;
        }
        Ok(analyzer.finish())
    }

    /// Realized legs emitted so far.
    pub fn finished_trades(&self) -> &[FinishedTrade] {
        &self.finished_trades
    }

    /// Consumes the analyzer, returning realized legs and the residual portfolio.
    pub fn finish(self) -> TradesAnalysis {
        let final_portfolio = self.fifo.unmatched();
        info!(
            "Matched {} realized legs, {} open positions remain",
            self.finished_trades.len(),
            final_portfolio.len()
        );
        TradesAnalysis {
            finished_trades: self.finished_trades,
            final_portfolio,
        }
    }

    /// Matches one trade against the ledger and stores its leftover as a new lot.
    pub fn process_trade(&mut self, trade: &Trade) -> Result<()> {
        self.validate_trade(trade)?;

        let fee_per_unit = trade.fee_per_unit();
        let mut quantity = trade.quantity;
        let mut total_profit: Option<Money> = None;

        while quantity != 0 {
            let Some((matched_trade, used)) = self.fifo.match_trade(quantity, &trade.ticker) else {
                break;
            };
            assert!(
                sign(used) != sign(quantity),
                "ledger matched {} against {} in the same direction",
                used,
                quantity
            );

            let matched_fee = matched_trade.fee_per_unit();
            self.finished_trades.push(FinishedTrade {
                group_id: self.next_group_id,
                ticker: trade.ticker.clone(),
                trade_date: matched_trade.trade_date,
                settle_date: matched_trade.settle_date,
                quantity: used,
                price: matched_trade.price,
                fee_per_unit: matched_fee,
                total: matched_trade.price.abs() * used.abs(),
                profit: Money::zero(trade.price.currency()),
            });

            let opening = compute_total_cost(used, &matched_trade.price, &matched_fee)?;
            let closing = compute_total_cost(-used, &trade.price, &fee_per_unit)?;
            let profit = opening.checked_add(&closing)?;
            total_profit = Some(match total_profit {
                None => profit,
                Some(total) => total.checked_add(&profit)?,
            });

            quantity -= -used;
        }

        if let Some(profit) = total_profit {
            let closed = trade.quantity - quantity;
            debug!(
                "Closed {} x {} in group {} with profit {}",
                trade.ticker, closed, self.next_group_id, profit
            );
            self.finished_trades.push(FinishedTrade {
                group_id: self.next_group_id,
                ticker: trade.ticker.clone(),
                trade_date: trade.trade_date,
                settle_date: trade.settle_date,
                quantity: closed,
                price: trade.price,
                fee_per_unit,
                total: trade.price.abs() * closed.abs(),
                profit,
            });
            self.next_group_id += 1;
        }

        if quantity != 0 {
            if total_profit.is_some() {
                debug!(
                    "Trade of {} flips the position, {} left open",
                    trade.ticker, quantity
                );
            }
            self.fifo.put(quantity, trade);
        }

        Ok(())
    }

    fn validate_trade(&mut self, trade: &Trade) -> Result<()> {
        if trade.quantity == 0 {
            return Err(CalculatorError::InvalidTrade(format!(
                "zero quantity trade of {} on {}",
                trade.ticker, trade.trade_date
            ))
            .into());
        }

        let currency = trade.price.currency();
        let fee_currency = trade.fee.money().currency();
        if fee_currency != currency {
            return Err(MoneyError::CurrencyMismatch {
                left: currency,
                right: fee_currency,
            }
            .into());
        }

        // open lots of the instrument must share the trade currency
        if let Some(lot) = self
            .fifo
            .lots(&trade.ticker)
            .find(|lot| lot.trade.price.currency() != currency)
        {
            return Err(MoneyError::CurrencyMismatch {
                left: lot.trade.price.currency(),
                right: currency,
            }
            .into());
        }

        if let Some(previous) = self.last_trade_dates.get(&trade.ticker) {
            if trade.trade_date < *previous {
                return Err(CalculatorError::UnorderedTrades {
                    instrument: trade.ticker.to_string(),
                    previous: *previous,
                    current: trade.trade_date,
                }
                .into());
            }
        }
        self.last_trade_dates
            .insert(trade.ticker.clone(), trade.trade_date);

        Ok(())
    }
}
