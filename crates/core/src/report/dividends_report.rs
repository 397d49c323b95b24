use chrono::{Datelike, NaiveDate};
use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::cash_flows::Dividend;
use crate::errors::Result;
use crate::fx::ExchangeRateProvider;
use crate::money::{Money, MoneyError};
use crate::settings::ReportSettings;
use crate::trades::Ticker;

/// A dividend with amount and withheld tax in the base currency, both
/// converted at the rate of the payment date.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DividendReportRow {
    /// 1-based position in the report
    pub index: usize,
    pub ticker: Ticker,
    pub date: NaiveDate,
    pub tax_year: i32,
    pub rate: Money,
    pub amount: Money,
    pub amount_base: Money,
    pub tax_paid: Money,
    pub tax_paid_base: Money,
    /// Withheld tax in percent of the amount, `None` for a zero amount
    pub tax_rate: Option<Decimal>,
}

impl DividendReportRow {
    /// Copy of the row rounded for display.
    pub fn rounded(&self, settings: &ReportSettings) -> DividendReportRow {
        let digits = settings.display_precision;
        DividendReportRow {
            rate: self.rate.round(settings.rate_precision),
            amount: self.amount.round(digits),
            amount_base: self.amount_base.round(digits),
            tax_paid: self.tax_paid.round(digits),
            tax_paid_base: self.tax_paid_base.round(digits),
            ..self.clone()
        }
    }
}

fn tax_rate(dividend: &Dividend) -> Result<Option<Decimal>> {
    match dividend.tax.checked_div(&dividend.amount) {
        Ok(ratio) => Ok(Some((ratio * Decimal::ONE_HUNDRED).round_dp(2))),
        Err(MoneyError::DivisionByZero) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Expresses dividends in the provider's base currency.
///
/// Reversed dividends (zero amount and zero tax) are dropped unless
/// `keep_reversed` is set.
pub fn prepare_dividends_report(
    dividends: &[Dividend],
    rates: &dyn ExchangeRateProvider,
    keep_reversed: bool,
) -> Result<Vec<DividendReportRow>> {
    let mut rows = Vec::with_capacity(dividends.len());

    for dividend in dividends
        .iter()
        .filter(|dividend| keep_reversed || !dividend.is_reversed())
    {
        let rate = rates.get_rate(dividend.amount.currency(), dividend.date)?;
        rows.push(DividendReportRow {
            index: rows.len() + 1,
            ticker: dividend.ticker.clone(),
            date: dividend.date,
            tax_year: dividend.date.year(),
            rate,
            amount: dividend.amount,
            amount_base: dividend.amount.convert(&rate),
            tax_paid: dividend.tax,
            tax_paid_base: rates.convert_to_base(&dividend.tax, dividend.date)?,
            tax_rate: tax_rate(dividend)?,
        });
    }

    debug!(
        "Prepared {} of {} dividends for the report",
        rows.len(),
        dividends.len()
    );
    Ok(rows)
}
