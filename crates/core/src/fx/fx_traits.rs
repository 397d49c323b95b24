use chrono::NaiveDate;

use crate::errors::Result;
use crate::money::{Currency, Money};

/// Source of historical exchange rates into a single base currency.
///
/// Implementations are handed to the reporting code explicitly; there is no
/// process-wide default provider.
pub trait ExchangeRateProvider: Send + Sync {
    fn base_currency(&self) -> Currency;

    /// Amount of base currency paid for one unit of `currency` on `date`.
    fn get_rate(&self, currency: Currency, date: NaiveDate) -> Result<Money>;

    /// Converts `source` into the base currency at the rate of `date`.
    fn convert_to_base(&self, source: &Money, date: NaiveDate) -> Result<Money> {
        if source.currency() == self.base_currency() {
            return Ok(*source);
        }
        let rate = self.get_rate(source.currency(), date)?;
        Ok(source.convert(&rate))
    }
}
