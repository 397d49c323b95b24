//! Money module - currencies and currency-checked amounts.

mod currency;
mod money_errors;
mod money_model;

#[cfg(test)]
mod money_model_tests;

pub use currency::Currency;
pub use money_errors::MoneyError;
pub use money_model::{Money, Zero};
