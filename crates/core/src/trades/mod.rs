//! Trades module - trade models, FIFO lot ledger and the matching engine.

mod cost_calculator;
mod trades_analyzer;
mod trades_fifo;
mod trades_model;


pub use cost_calculator::compute_total_cost;
pub use trades_analyzer::TradesAnalyzer;
pub use trades_fifo::{sign, Lot, TradesFifo};
pub use trades_model::{
    FinishedTrade, PortfolioElement, Ticker, TickerKind, Trade, TradeFee, TradesAnalysis,
};
