use crate::money::{Money, MoneyError};

/// Signed cash flow of trading `quantity` units, fees included.
///
/// Buys (`quantity > 0`) yield a negative amount: price plus fees paid out.
/// Sells yield a positive amount: proceeds reduced by fees. The sign of
/// `fee_per_unit` is ignored.
pub fn compute_total_cost(
    quantity: i64,
    unit_price: &Money,
    fee_per_unit: &Money,
) -> Result<Money, MoneyError> {
    let pieces = quantity.abs();
    let fee = fee_per_unit.abs() * pieces;
    let gross = *unit_price * pieces;

    if quantity > 0 {
        return Ok(-gross.checked_add(&fee)?);
    }
    gross.checked_sub(&fee)
}
