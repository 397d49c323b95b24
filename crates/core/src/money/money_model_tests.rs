#[cfg(test)]
mod tests {
    use crate::money::{Currency, Money, MoneyError, Zero};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::cmp::Ordering;

    fn usd(amount: Decimal) -> Money {
        Money::new(amount, Currency::USD)
    }

    fn rub(amount: Decimal) -> Money {
        Money::new(amount, Currency::RUB)
    }

    #[test]
    fn test_equality_and_ordering() {
        let usd1 = usd(dec!(1));
        let usd7 = usd(dec!(7));
        let rub1 = rub(dec!(1));
        let rub3 = rub(dec!(3));

        assert_ne!(usd1, rub1);
        assert_ne!(usd1, usd7);
        assert_eq!(usd1, usd(dec!(1.00)));

        assert!(rub1 < rub3);
        assert_eq!(
            rub1.checked_cmp(&usd7),
            Err(MoneyError::CurrencyMismatch {
                left: Currency::RUB,
                right: Currency::USD,
            })
        );
        assert_eq!(rub3.checked_cmp(&rub1), Ok(Ordering::Greater));
    }

    #[test]
    #[should_panic(expected = "Currency mismatch")]
    fn test_ordering_across_currencies_panics() {
        let _ = usd(dec!(1)) < rub(dec!(7));
    }

    #[test]
    fn test_add_and_sub_same_currency() {
        let r = usd(dec!(1)) + usd(dec!(7));
        assert_eq!(r.amount(), dec!(8));
        assert_eq!(r.currency(), Currency::USD);

        let r = rub(dec!(5)) - rub(dec!(3));
        assert_eq!(r.amount(), dec!(2));
        assert_eq!(r.currency(), Currency::RUB);
    }

    #[test]
    fn test_checked_add_rejects_mixed_currencies() {
        let err = usd(dec!(1)).checked_add(&rub(dec!(3))).unwrap_err();
        assert!(matches!(err, MoneyError::CurrencyMismatch { .. }));
        assert!(usd(dec!(1)).checked_sub(&rub(dec!(3))).is_err());
    }

    #[test]
    #[should_panic(expected = "Currency mismatch")]
    fn test_operator_add_panics_on_mixed_currencies() {
        let _ = usd(dec!(1)) + rub(dec!(1));
    }

    #[test]
    #[should_panic(expected = "Currency mismatch")]
    fn test_operator_sub_panics_on_mixed_currencies() {
        let _ = rub(dec!(1)) - usd(dec!(1));
    }

    #[test]
    fn test_zero_identity_on_both_sides() {
        let rub3 = rub(dec!(3));

        assert_eq!(rub3 + Zero, rub3);
        assert_eq!(Zero + rub3, rub3);
        assert_eq!(rub3 - Zero, rub3);

        let r = Zero - rub3;
        assert_eq!(r.amount(), dec!(-3));
        assert_eq!(r, -1 * rub3);
    }

    #[test]
    fn test_decimal_addition_is_exact() {
        let m = usd(dec!(0.3));
        let total = m + m + m;
        assert_eq!(total.amount(), dec!(0.9));
    }

    #[test]
    fn test_scalar_multiplication_and_division() {
        let price = usd(dec!(4.2));
        assert_eq!(price * 100, usd(dec!(420)));
        assert_eq!(100 * price, usd(dec!(420)));
        assert_eq!(usd(dec!(-0.9)) / 9, usd(dec!(-0.1)));
    }

    #[test]
    fn test_money_ratio() {
        let ratio = usd(dec!(3)).checked_div(&usd(dec!(4))).unwrap();
        assert_eq!(ratio, dec!(0.75));
        assert!(usd(dec!(3)).checked_div(&rub(dec!(4))).is_err());
        assert_eq!(
            usd(dec!(3)).checked_div(&usd(dec!(0))),
            Err(MoneyError::DivisionByZero)
        );
    }

    #[test]
    fn test_convert() {
        let rate = rub(dec!(77.7325));
        let converted = usd(dec!(10.98)).convert(&rate);
        assert_eq!(converted.amount(), dec!(853.50285));
        assert_eq!(converted.currency(), Currency::RUB);

        // Already in the rate's currency: returned unchanged
        let source = rub(dec!(858.3066));
        assert_eq!(source.convert(&rate), source);
    }

    #[test]
    fn test_round_half_even() {
        assert_eq!(usd(dec!(2.345)).round(2), usd(dec!(2.34)));
        assert_eq!(usd(dec!(2.355)).round(2), usd(dec!(2.36)));
        assert_eq!(usd(dec!(-5.5)).round(0).currency(), Currency::USD);
    }

    #[test]
    fn test_sum() {
        let total = Money::sum(vec![usd(dec!(1)), usd(dec!(2.5)), usd(dec!(-0.5))]).unwrap();
        assert_eq!(total, Some(usd(dec!(3))));
        assert_eq!(Money::sum(Vec::new()).unwrap(), None);
        assert!(Money::sum(vec![usd(dec!(1)), rub(dec!(1))]).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(usd(dec!(12.5)).to_string(), "12.5$");
        assert_eq!(rub(dec!(3)).to_string(), "3₽");
    }

    #[test]
    fn test_abs_and_neg() {
        assert_eq!(usd(dec!(-1.5)).abs(), usd(dec!(1.5)));
        assert_eq!(-usd(dec!(1.5)), usd(dec!(-1.5)));
        assert!(usd(dec!(0)).is_zero());
    }
}
