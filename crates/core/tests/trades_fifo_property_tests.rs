//! Property-based integration tests for FIFO trade matching.
//!
//! Random chronological trade streams over a few instruments are fed to the
//! analyzer and the realized legs are checked against quantity and cash
//! flow invariants, using the `proptest` crate for case generation.

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashMap};
use taxlot_core::{
    compute_total_cost, Currency, FinishedTrade, Money, Ticker, Trade, TradeFee, TradesAnalyzer,
};

// =============================================================================
// Generators
// =============================================================================

const SYMBOLS: [&str; 3] = ["AAA", "BBB", "CCC"];

/// Generates a nonzero signed quantity.
fn arb_quantity() -> impl Strategy<Value = i64> {
    prop_oneof![-60i64..=-1, 1i64..=60]
}

/// Generates one execution as (symbol index, quantity, price in cents, fee in cents per unit).
fn arb_execution() -> impl Strategy<Value = (usize, i64, i64, i64)> {
    (0..SYMBOLS.len(), arb_quantity(), 1i64..100_000, 0i64..100)
}

/// Generates a chronological trade stream, one execution per day.
fn arb_trades(max_count: usize) -> impl Strategy<Value = Vec<Trade>> {
    proptest::collection::vec(arb_execution(), 0..=max_count).prop_map(|executions| {
        let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        executions
            .into_iter()
            .enumerate()
            .map(|(day, (symbol, quantity, price, fee))| {
                let trade_day = start + Duration::days(day as i64);
                Trade {
                    ticker: Ticker::stock(SYMBOLS[symbol]),
                    trade_date: Utc.from_utc_datetime(&trade_day.and_hms_opt(0, 0, 0).unwrap()),
                    settle_date: trade_day + Duration::days(2),
                    quantity,
                    price: Money::new(Decimal::new(price, 2), Currency::USD),
                    fee: TradeFee::PerUnit(Money::new(Decimal::new(-fee, 2), Currency::USD)),
                }
            })
            .collect()
    })
}

fn groups(finished: &[FinishedTrade]) -> BTreeMap<u32, Vec<&FinishedTrade>> {
    let mut by_group: BTreeMap<u32, Vec<&FinishedTrade>> = BTreeMap::new();
    for leg in finished {
        by_group.entry(leg.group_id).or_default().push(leg);
    }
    by_group
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Net traded quantity per instrument equals its residual position.
    #[test]
    fn prop_quantity_is_conserved_per_instrument(trades in arb_trades(40)) {
        let analysis = TradesAnalyzer::analyze(&trades).unwrap();

        let mut expected: HashMap<Ticker, i64> = HashMap::new();
        for trade in &trades {
            *expected.entry(trade.ticker.clone()).or_default() += trade.quantity;
        }

        for element in &analysis.final_portfolio {
            prop_assert_ne!(element.quantity, 0);
            prop_assert_eq!(expected.get(&element.ticker).copied(), Some(element.quantity));
        }
        let open = expected.values().filter(|quantity| **quantity != 0).count();
        prop_assert_eq!(open, analysis.final_portfolio.len());
    }

    /// Opening legs of a group offset its closing leg exactly.
    #[test]
    fn prop_group_legs_offset_each_other(trades in arb_trades(40)) {
        let analysis = TradesAnalyzer::analyze(&trades).unwrap();

        for (group_id, legs) in groups(&analysis.finished_trades) {
            prop_assert!(legs.len() >= 2, "group {} has a single leg", group_id);
            let (opening, closing) = legs.split_at(legs.len() - 1);
            let closing = closing[0];

            let opened: i64 = opening.iter().map(|leg| leg.quantity).sum();
            prop_assert_eq!(opened, -closing.quantity);
            for leg in opening {
                prop_assert!(leg.quantity.signum() == -closing.quantity.signum());
                prop_assert!(leg.profit.is_zero());
                prop_assert_eq!(&leg.ticker, &closing.ticker);
            }
        }
    }

    /// Lots are consumed oldest first and never after the trade closing them.
    #[test]
    fn prop_opening_legs_follow_fifo_order(trades in arb_trades(40)) {
        let analysis = TradesAnalyzer::analyze(&trades).unwrap();

        for legs in groups(&analysis.finished_trades).values() {
            let (opening, closing) = legs.split_at(legs.len() - 1);
            for pair in opening.windows(2) {
                prop_assert!(pair[0].trade_date <= pair[1].trade_date);
            }
            for leg in opening {
                prop_assert!(leg.trade_date <= closing[0].trade_date);
            }
        }
    }

    /// Realized profit is the net cash flow of all legs in the group.
    #[test]
    fn prop_profit_is_net_cash_flow_of_group(trades in arb_trades(40)) {
        let analysis = TradesAnalyzer::analyze(&trades).unwrap();

        for legs in groups(&analysis.finished_trades).values() {
            let mut cash_flow = Money::zero(Currency::USD);
            for leg in legs {
                let cost = compute_total_cost(leg.quantity, &leg.price, &leg.fee_per_unit).unwrap();
                cash_flow = cash_flow + cost;
            }
            prop_assert_eq!(legs[legs.len() - 1].profit, cash_flow);
        }
    }

    /// Group ids start at one and increase without gaps in emission order.
    #[test]
    fn prop_group_ids_are_sequential(trades in arb_trades(40)) {
        let analysis = TradesAnalyzer::analyze(&trades).unwrap();

        let mut expected = 0;
        for leg in &analysis.finished_trades {
            if leg.group_id != expected {
                prop_assert_eq!(leg.group_id, expected + 1);
                expected += 1;
            }
        }
    }

    /// Matching the same stream twice yields identical results.
    #[test]
    fn prop_matching_is_deterministic(trades in arb_trades(40)) {
        let first = TradesAnalyzer::analyze(&trades).unwrap();
        let second = TradesAnalyzer::analyze(&trades).unwrap();

        prop_assert_eq!(first, second);
    }
}
