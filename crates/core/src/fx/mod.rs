//! FX module - exchange-rate lookup used to express trade legs in a base currency.

mod fx_errors;
mod fx_traits;
mod rate_table;

pub use fx_errors::FxError;
pub use fx_traits::ExchangeRateProvider;
pub use rate_table::RateTable;
