use log::info;
use serde::{Deserialize, Serialize};

use super::{
    prepare_dividends_report, prepare_fees_report, prepare_interests_report,
    prepare_trades_report, summarize_trades, CashFlowReportRow, DividendReportRow, TradeReportRow,
};
use crate::cash_flows::{Dividend, Fee, Interest};
use crate::errors::Result;
use crate::fx::ExchangeRateProvider;
use crate::money::Money;
use crate::settings::ReportSettings;
use crate::trades::FinishedTrade;

/// Income category of a line in the yearly tax declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeclarationSource {
    Dividends,
    Trades,
    Interests,
}

impl DeclarationSource {
    pub fn income_code(&self) -> u32 {
        match self {
            DeclarationSource::Dividends => 1010,
            DeclarationSource::Trades => 1530,
            DeclarationSource::Interests => 4800,
        }
    }

    /// Only trading income has deductible expenses.
    pub fn expense_code(&self) -> Option<u32> {
        match self {
            DeclarationSource::Trades => Some(201),
            _ => None,
        }
    }
}

/// One line of the yearly tax declaration, amounts in the base currency.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeclarationRow {
    pub source: DeclarationSource,
    pub income: Money,
    /// Deductible expenses as a positive amount
    pub expenses: Money,
    /// Tax already withheld at source, as reported by the broker
    pub tax_paid: Money,
}

impl DeclarationRow {
    pub fn rounded(&self, settings: &ReportSettings) -> DeclarationRow {
        let digits = settings.display_precision;
        DeclarationRow {
            source: self.source,
            income: self.income.round(digits),
            expenses: self.expenses.round(digits),
            tax_paid: self.tax_paid.round(digits),
        }
    }
}

/// Every report section of one account, converted to the base currency.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TaxReport {
    pub trades: Vec<TradeReportRow>,
    pub dividends: Vec<DividendReportRow>,
    pub fees: Vec<CashFlowReportRow>,
    pub interests: Vec<CashFlowReportRow>,
}

fn sum_or_zero<I>(values: I, zero: Money) -> Result<Money>
where
    I: IntoIterator<Item = Money>,
{
    Ok(Money::sum(values)?.unwrap_or(zero))
}

impl TaxReport {
    /// Builds all sections. `rates` must be quoted in `settings.base_currency`.
    pub fn prepare(
        finished_trades: &[FinishedTrade],
        dividends: &[Dividend],
        fees: &[Fee],
        interests: &[Interest],
        rates: &dyn ExchangeRateProvider,
        settings: &ReportSettings,
    ) -> Result<TaxReport> {
        settings.ensure_base_currency(rates.base_currency())?;

        let report = TaxReport {
            trades: prepare_trades_report(finished_trades, rates)?,
            dividends: prepare_dividends_report(
                dividends,
                rates,
                settings.keep_reversed_dividends,
            )?,
            fees: prepare_fees_report(fees, rates)?,
            interests: prepare_interests_report(interests, rates)?,
        };
        info!(
            "Prepared report: {} trade legs, {} dividends, {} fees, {} interests",
            report.trades.len(),
            report.dividends.len(),
            report.fees.len(),
            report.interests.len()
        );
        Ok(report)
    }

    /// Tax years present in any section and selected by `settings`, ascending.
    pub fn years(&self, settings: &ReportSettings) -> Vec<i32> {
        let mut years: Vec<i32> = self
            .trades
            .iter()
            .map(|row| row.tax_year)
            .chain(self.dividends.iter().map(|row| row.tax_year))
            .chain(self.fees.iter().map(|row| row.tax_year))
            .chain(self.interests.iter().map(|row| row.tax_year))
            .filter(|year| settings.includes_year(*year))
            .collect();
        years.sort_unstable();
        years.dedup();
        years
    }

    /// Declaration lines for `year`.
    ///
    /// A line is present when its section has any rows at all, even if none
    /// fall into `year`. Account fees are added to trading expenses.
    pub fn declaration(&self, year: i32, settings: &ReportSettings) -> Result<Vec<DeclarationRow>> {
        let zero = Money::zero(settings.base_currency);
        let mut rows = Vec::new();

        if !self.dividends.is_empty() {
            let of_year: Vec<&DividendReportRow> = self
                .dividends
                .iter()
                .filter(|row| row.tax_year == year)
                .collect();
            rows.push(DeclarationRow {
                source: DeclarationSource::Dividends,
                income: sum_or_zero(of_year.iter().map(|row| row.amount_base), zero)?,
                expenses: zero,
                tax_paid: sum_or_zero(of_year.iter().map(|row| row.tax_paid_base), zero)?,
            });
        }

        if !self.trades.is_empty() {
            let summary = summarize_trades(&self.trades, year)?;
            let mut expenses =
                sum_or_zero(summary.iter().map(|kind| kind.expenses), zero)?.abs();
            if !self.fees.is_empty() {
                let fees = sum_or_zero(
                    self.fees
                        .iter()
                        .filter(|row| row.tax_year == year)
                        .map(|row| row.amount_base),
                    zero,
                )?;
                expenses = expenses.checked_add(&fees.abs())?;
            }
            rows.push(DeclarationRow {
                source: DeclarationSource::Trades,
                income: sum_or_zero(summary.iter().map(|kind| kind.income), zero)?,
                expenses,
                tax_paid: zero,
            });
        }

        if !self.interests.is_empty() {
            rows.push(DeclarationRow {
                source: DeclarationSource::Interests,
                income: sum_or_zero(
                    self.interests
                        .iter()
                        .filter(|row| row.tax_year == year)
                        .map(|row| row.amount_base),
                    zero,
                )?,
                expenses: zero,
                tax_paid: zero,
            });
        }

        Ok(rows)
    }
}
