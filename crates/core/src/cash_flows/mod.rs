//! Cash flows module - non-trade account events that are taxed or deducted.

mod cash_flows_model;

pub use cash_flows_model::{Dividend, Fee, Interest};
