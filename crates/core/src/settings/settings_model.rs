use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BASE_CURRENCY, DISPLAY_DECIMAL_PRECISION, RATE_DISPLAY_PRECISION};
use crate::errors::{Error, Result, ValidationError};
use crate::money::Currency;

/// Largest scale a `Decimal` can hold.
const MAX_PRECISION: u32 = 28;

/// Options of the report layer: which currency to convert into, how to
/// round for display, which tax years to show and whether reversed
/// dividends stay in the report.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportSettings {
    pub base_currency: Currency,
    pub display_precision: u32,
    pub rate_precision: u32,
    /// Empty means every year
    pub years: Vec<i32>,
    /// Keep dividends whose amount and tax were both reversed to zero
    pub keep_reversed_dividends: bool,
}

impl Default for ReportSettings {
    fn default() -> Self {
        ReportSettings {
            base_currency: DEFAULT_BASE_CURRENCY,
            display_precision: DISPLAY_DECIMAL_PRECISION,
            rate_precision: RATE_DISPLAY_PRECISION,
            years: Vec::new(),
            keep_reversed_dividends: false,
        }
    }
}

impl ReportSettings {
    /// Parses settings from JSON, filling omitted keys with defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings: ReportSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        for (key, value) in [
            ("displayPrecision", self.display_precision),
            ("ratePrecision", self.rate_precision),
        ] {
            if value > MAX_PRECISION {
                return Err(Error::InvalidConfigValue(format!(
                    "{} must be at most {}, got {}",
                    key, MAX_PRECISION, value
                )));
            }
        }
        Ok(())
    }

    /// Parses a comma separated year list such as `"2019, 2020"`.
    pub fn parse_years(value: &str) -> Result<Vec<i32>> {
        value
            .split(',')
            .map(str::trim)
            .filter(|year| !year.is_empty())
            .map(|year| {
                year.parse::<i32>()
                    .map_err(|e| Error::Validation(ValidationError::NumberParse(e)))
            })
            .collect()
    }

    pub fn includes_year(&self, year: i32) -> bool {
        self.years.is_empty() || self.years.contains(&year)
    }

    /// Fails unless rates are quoted in the configured base currency.
    pub fn ensure_base_currency(&self, rates_base: Currency) -> Result<()> {
        if rates_base != self.base_currency {
            return Err(Error::InvalidConfigValue(format!(
                "baseCurrency is {:?} but exchange rates are quoted in {:?}",
                self.base_currency, rates_base
            )));
        }
        Ok(())
    }
}
