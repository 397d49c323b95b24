use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use super::{Currency, MoneyError};

/// Currency-less additive identity.
///
/// Lets folds start without knowing the currency of the values they add up:
/// `Zero + m == m`, `m - Zero == m`, `Zero - m == -m`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Zero;

/// An immutable amount tagged with its currency.
///
/// Binary operations between two values require the same currency. The
/// `checked_*` methods report a mismatch as [`MoneyError::CurrencyMismatch`];
/// the operator forms (`+`, `-`, `<`, `>`) treat it as a programming error
/// and panic. `==` across currencies is simply `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Money { amount, currency }
    }

    pub fn zero(currency: Currency) -> Self {
        Money::new(Decimal::ZERO, currency)
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    pub fn abs(&self) -> Money {
        Money::new(self.amount.abs(), self.currency)
    }

    /// Rounds half-to-even to `digits` decimal places.
    pub fn round(&self, digits: u32) -> Money {
        Money::new(self.amount.round_dp(digits), self.currency)
    }

    /// Applies an exchange rate expressed as target-currency units per one
    /// unit of `self`. Amounts already in the rate's currency pass through.
    pub fn convert(&self, rate: &Money) -> Money {
        if self.currency == rate.currency {
            return *self;
        }
        Money::new(self.amount * rate.amount, rate.currency)
    }

    fn ensure_same_currency(&self, other: &Money) -> Result<(), MoneyError> {
        if self.currency != other.currency {
            return Err(MoneyError::CurrencyMismatch {
                left: self.currency,
                right: other.currency,
            });
        }
        Ok(())
    }

    pub fn checked_add(&self, other: &Money) -> Result<Money, MoneyError> {
        self.ensure_same_currency(other)?;
        Ok(Money::new(self.amount + other.amount, self.currency))
    }

    pub fn checked_sub(&self, other: &Money) -> Result<Money, MoneyError> {
        self.ensure_same_currency(other)?;
        Ok(Money::new(self.amount - other.amount, self.currency))
    }

    pub fn checked_cmp(&self, other: &Money) -> Result<Ordering, MoneyError> {
        self.ensure_same_currency(other)?;
        Ok(self.amount.cmp(&other.amount))
    }

    /// Dimensionless ratio of two amounts in the same currency.
    pub fn checked_div(&self, other: &Money) -> Result<Decimal, MoneyError> {
        self.ensure_same_currency(other)?;
        if other.amount.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        Ok(self.amount / other.amount)
    }

    /// Adds up `values`, failing on the first currency mismatch.
    /// Returns `None` for an empty input.
    pub fn sum<I>(values: I) -> Result<Option<Money>, MoneyError>
    where
        I: IntoIterator<Item = Money>,
    {
        values.into_iter().try_fold(None, |acc: Option<Money>, value| {
            match acc {
                None => Ok(Some(value)),
                Some(total) => total.checked_add(&value).map(Some),
            }
        })
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.currency)
    }
}

impl PartialOrd for Money {
    /// # Panics
    /// On a currency mismatch, like the arithmetic operators.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(unwrap_or_panic(self.checked_cmp(other)))
    }
}

fn unwrap_or_panic<T>(result: Result<T, MoneyError>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => panic!("{}", e),
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        unwrap_or_panic(self.checked_add(&rhs))
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        unwrap_or_panic(self.checked_sub(&rhs))
    }
}

impl Add<Zero> for Money {
    type Output = Money;

    fn add(self, _rhs: Zero) -> Money {
        self
    }
}

impl Add<Money> for Zero {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        rhs
    }
}

impl Sub<Zero> for Money {
    type Output = Money;

    fn sub(self, _rhs: Zero) -> Money {
        self
    }
}

impl Sub<Money> for Zero {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        -rhs
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Money {
        Money::new(-self.amount, self.currency)
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, rhs: i64) -> Money {
        Money::new(self.amount * Decimal::from(rhs), self.currency)
    }
}

impl Mul<Money> for i64 {
    type Output = Money;

    fn mul(self, rhs: Money) -> Money {
        rhs * self
    }
}

impl Div<i64> for Money {
    type Output = Money;

    fn div(self, rhs: i64) -> Money {
        Money::new(self.amount / Decimal::from(rhs), self.currency)
    }
}
