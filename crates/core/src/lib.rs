//! Taxlot Core - FIFO lot matching for brokerage trade executions.
//!
//! Turns a chronological stream of trades into realized (closed) positions
//! and the residual open portfolio, then expresses realized positions,
//! dividends, fees and interest in a base currency per tax year. Report
//! parsing, rate retrieval and rendering live outside this crate and talk to
//! it through the types and traits exported here.

pub mod cash_flows;
pub mod constants;
pub mod errors;
pub mod fx;
pub mod money;
pub mod report;
pub mod settings;
pub mod trades;

pub use cash_flows::{Dividend, Fee, Interest};
pub use money::{Currency, Money, Zero};
pub use trades::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
