use chrono::{DateTime, Datelike, NaiveDate, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::errors::Result;
use crate::fx::ExchangeRateProvider;
use crate::money::Money;
use crate::settings::ReportSettings;
use crate::trades::{compute_total_cost, FinishedTrade, Ticker, TickerKind};

/// A realized leg with its cash flows expressed in the base currency.
///
/// Principal is converted at the settlement-date rate, fees at the
/// trade-date rate.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TradeReportRow {
    pub group_id: u32,
    pub ticker: Ticker,
    pub trade_date: DateTime<Utc>,
    pub settle_date: NaiveDate,
    /// Year the whole group is taxed in: latest settlement date of its legs
    pub tax_year: i32,
    pub quantity: i64,
    pub price: Money,
    pub fee_per_unit: Money,
    pub settle_rate: Money,
    pub fee_rate: Money,
    pub price_base: Money,
    pub fee_per_unit_base: Money,
    pub fee: Money,
    pub total: Money,
    pub total_base: Money,
    /// Realized profit of the group, set on the closing leg only
    pub profit_base: Money,
}

impl TradeReportRow {
    pub fn is_buy(&self) -> bool {
        self.quantity > 0
    }

    /// Copy of the row rounded for display.
    pub fn rounded(&self, settings: &ReportSettings) -> TradeReportRow {
        let digits = settings.display_precision;
        let rate_digits = settings.rate_precision;
        TradeReportRow {
            price: self.price.round(digits),
            fee_per_unit: self.fee_per_unit.round(rate_digits),
            settle_rate: self.settle_rate.round(rate_digits),
            fee_rate: self.fee_rate.round(rate_digits),
            price_base: self.price_base.round(digits),
            fee_per_unit_base: self.fee_per_unit_base.round(rate_digits),
            fee: self.fee.round(rate_digits),
            total: self.total.round(digits),
            total_base: self.total_base.round(digits),
            profit_base: self.profit_base.round(digits),
            ..self.clone()
        }
    }
}

/// Per instrument kind totals of one tax year, in the base currency.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TradesSummary {
    pub kind: TickerKind,
    /// Sum of buy legs (negative)
    pub expenses: Money,
    /// Sum of sell legs
    pub income: Money,
    pub profit: Money,
}

/// Expresses every realized leg in the provider's base currency and
/// attributes each group's profit to its closing leg.
pub fn prepare_trades_report(
    finished_trades: &[FinishedTrade],
    rates: &dyn ExchangeRateProvider,
) -> Result<Vec<TradeReportRow>> {
    let mut rows = Vec::with_capacity(finished_trades.len());

    for leg in finished_trades {
        let settle_rate = rates.get_rate(leg.price.currency(), leg.settle_date)?;
        let fee_rate = rates.get_rate(leg.fee_per_unit.currency(), leg.trade_date.date_naive())?;
        let price_base = leg.price.convert(&settle_rate);
        let fee_per_unit_base = leg.fee_per_unit.convert(&fee_rate);

        rows.push(TradeReportRow {
            group_id: leg.group_id,
            ticker: leg.ticker.clone(),
            trade_date: leg.trade_date,
            settle_date: leg.settle_date,
            tax_year: leg.settle_date.year(),
            quantity: leg.quantity,
            price: leg.price,
            fee_per_unit: leg.fee_per_unit,
            settle_rate,
            fee_rate,
            price_base,
            fee_per_unit_base,
            fee: leg.fee_per_unit * leg.quantity.abs(),
            total: compute_total_cost(leg.quantity, &leg.price, &leg.fee_per_unit)?,
            total_base: compute_total_cost(leg.quantity, &price_base, &fee_per_unit_base)?,
            profit_base: Money::zero(rates.base_currency()),
        });
    }

    let mut groups: BTreeMap<u32, Vec<usize>> = BTreeMap::new();
    for (index, row) in rows.iter().enumerate() {
        groups.entry(row.group_id).or_default().push(index);
    }

    for (group_id, indices) in groups {
        let tax_year = indices
            .iter()
            .map(|&i| rows[i].tax_year)
            .max()
            .unwrap_or_default();
        let profit = Money::sum(indices.iter().map(|&i| rows[i].total_base))?;

        for &i in &indices {
            rows[i].tax_year = tax_year;
        }
        if let (Some(&closing), Some(profit)) = (indices.last(), profit) {
            debug!("Group {} realized {} in {}", group_id, profit, tax_year);
            rows[closing].profit_base = profit;
        }
    }

    Ok(rows)
}

/// Distinct tax years present in the report, ascending.
pub fn tax_years(rows: &[TradeReportRow]) -> Vec<i32> {
    let mut years: Vec<i32> = rows.iter().map(|row| row.tax_year).collect();
    years.sort_unstable();
    years.dedup();
    years
}

/// Expenses, income and profit per instrument kind for `year`.
pub fn summarize_trades(rows: &[TradeReportRow], year: i32) -> Result<Vec<TradesSummary>> {
    let mut by_kind: BTreeMap<TickerKind, TradesSummary> = BTreeMap::new();

    for row in rows.iter().filter(|row| row.tax_year == year) {
        let summary = by_kind.entry(row.ticker.kind).or_insert_with(|| {
            let zero = Money::zero(row.total_base.currency());
            TradesSummary {
                kind: row.ticker.kind,
                expenses: zero,
                income: zero,
                profit: zero,
            }
        });
        if row.is_buy() {
            summary.expenses = summary.expenses.checked_add(&row.total_base)?;
        } else {
            summary.income = summary.income.checked_add(&row.total_base)?;
        }
    }

    by_kind
        .into_values()
        .map(|mut summary| -> Result<TradesSummary> {
            summary.profit = summary.income.checked_add(&summary.expenses)?;
            Ok(summary)
        })
        .collect()
}
