use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashMap};

use super::{ExchangeRateProvider, FxError};
use crate::errors::Result;
use crate::money::{Currency, Money};

/// In-memory table of daily exchange rates into a base currency.
///
/// Official rates are not published for every calendar day, so a lookup
/// returns the latest rate on or before the requested date.
#[derive(Debug, Clone)]
pub struct RateTable {
    base_currency: Currency,
    /// Key: quoted currency, Value: date -> base-currency units per one unit
    rates: HashMap<Currency, BTreeMap<NaiveDate, Decimal>>,
}

impl RateTable {
    pub fn new(base_currency: Currency) -> Self {
        RateTable {
            base_currency,
            rates: HashMap::new(),
        }
    }

    /// Builds a table from `(currency, date, rate)` observations.
    pub fn with_rates<I>(base_currency: Currency, observations: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Currency, NaiveDate, Decimal)>,
    {
        let mut table = RateTable::new(base_currency);
        for (currency, date, rate) in observations {
            table.add_rate(currency, date, rate)?;
        }
        Ok(table)
    }

    /// Records the rate of `currency` on `date`, replacing an earlier value for that day.
    pub fn add_rate(&mut self, currency: Currency, date: NaiveDate, rate: Decimal) -> Result<()> {
        if currency == self.base_currency {
            return Err(FxError::InvalidRate(format!(
                "{:?} is the base currency and always has rate 1",
                currency
            ))
            .into());
        }
        if rate <= Decimal::ZERO {
            return Err(FxError::InvalidRate(format!(
                "{:?} rate {} on {} must be positive",
                currency, rate, date
            ))
            .into());
        }

        self.rates.entry(currency).or_default().insert(date, rate);
        Ok(())
    }

    /// Earliest date a rate is known for `currency`.
    pub fn first_date(&self, currency: Currency) -> Option<NaiveDate> {
        self.rates
            .get(&currency)
            .and_then(|history| history.keys().next().copied())
    }
}

impl ExchangeRateProvider for RateTable {
    fn base_currency(&self) -> Currency {
        self.base_currency
    }

    fn get_rate(&self, currency: Currency, date: NaiveDate) -> Result<Money> {
        if currency == self.base_currency {
            return Ok(Money::new(Decimal::ONE, self.base_currency));
        }

        let found = self
            .rates
            .get(&currency)
            .and_then(|history| history.range(..=date).next_back());

        match found {
            Some((rate_date, rate)) => {
                if *rate_date != date {
                    debug!(
                        "No {:?} rate for {}, using rate of {}",
                        currency, date, rate_date
                    );
                }
                Ok(Money::new(*rate, self.base_currency))
            }
            None => Err(FxError::RateNotFound { currency, date }.into()),
        }
    }
}
