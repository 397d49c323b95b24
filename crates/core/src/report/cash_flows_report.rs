use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::cash_flows::{Fee, Interest};
use crate::errors::Result;
use crate::fx::ExchangeRateProvider;
use crate::money::Money;
use crate::settings::ReportSettings;

/// A fee or interest accrual in the base currency, converted at the rate of
/// its date.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowReportRow {
    /// 1-based position in the report
    pub index: usize,
    pub date: NaiveDate,
    pub tax_year: i32,
    pub description: String,
    pub rate: Money,
    pub amount: Money,
    pub amount_base: Money,
}

impl CashFlowReportRow {
    /// Copy of the row rounded for display.
    pub fn rounded(&self, settings: &ReportSettings) -> CashFlowReportRow {
        CashFlowReportRow {
            rate: self.rate.round(settings.rate_precision),
            amount: self.amount.round(settings.display_precision),
            amount_base: self.amount_base.round(settings.display_precision),
            ..self.clone()
        }
    }
}

fn prepare_cash_flows_report<'a, I>(
    cash_flows: I,
    rates: &dyn ExchangeRateProvider,
) -> Result<Vec<CashFlowReportRow>>
where
    I: IntoIterator<Item = (NaiveDate, &'a Money, &'a str)>,
{
    cash_flows
        .into_iter()
        .enumerate()
        .map(|(i, (date, amount, description))| -> Result<CashFlowReportRow> {
            let rate = rates.get_rate(amount.currency(), date)?;
            Ok(CashFlowReportRow {
                index: i + 1,
                date,
                tax_year: date.year(),
                description: description.to_string(),
                rate,
                amount: *amount,
                amount_base: amount.convert(&rate),
            })
        })
        .collect()
}

/// Expresses account fees in the provider's base currency.
pub fn prepare_fees_report(
    fees: &[Fee],
    rates: &dyn ExchangeRateProvider,
) -> Result<Vec<CashFlowReportRow>> {
    prepare_cash_flows_report(
        fees.iter()
            .map(|fee| (fee.date, &fee.amount, fee.description.as_str())),
        rates,
    )
}

/// Expresses interest accruals in the provider's base currency.
pub fn prepare_interests_report(
    interests: &[Interest],
    rates: &dyn ExchangeRateProvider,
) -> Result<Vec<CashFlowReportRow>> {
    prepare_cash_flows_report(
        interests
            .iter()
            .map(|interest| (interest.date, &interest.amount, interest.description.as_str())),
        rates,
    )
}
