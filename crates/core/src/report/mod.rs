//! Report module - realized trades and account cash flows expressed in the
//! base currency, grouped by tax year.

mod cash_flows_report;
mod dividends_report;
mod tax_report;
mod trades_report;


pub use cash_flows_report::{prepare_fees_report, prepare_interests_report, CashFlowReportRow};
pub use dividends_report::{prepare_dividends_report, DividendReportRow};
pub use tax_report::{DeclarationRow, DeclarationSource, TaxReport};
pub use trades_report::{
    prepare_trades_report, summarize_trades, tax_years, TradeReportRow, TradesSummary,
};
