use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::MoneyError;

/// Static metadata attached to every supported currency.
struct CurrencyInfo {
    code: &'static str,
    symbol: &'static str,
    aliases: &'static [&'static str],
    /// ISO 4217 numeric code
    iso_numeric_code: &'static str,
    /// Identifier of the currency in the Central Bank of Russia rates feed.
    /// Empty for the rouble itself.
    cbr_code: &'static str,
}

const USD: CurrencyInfo = CurrencyInfo {
    code: "USD",
    symbol: "$",
    aliases: &["USD", "$"],
    iso_numeric_code: "840",
    cbr_code: "R01235",
};

const RUB: CurrencyInfo = CurrencyInfo {
    code: "RUB",
    symbol: "₽",
    aliases: &["RUB", "RUR", "₽"],
    iso_numeric_code: "643",
    cbr_code: "",
};

const EUR: CurrencyInfo = CurrencyInfo {
    code: "EUR",
    symbol: "€",
    aliases: &["EUR", "€"],
    iso_numeric_code: "978",
    cbr_code: "R01239",
};

const GBP: CurrencyInfo = CurrencyInfo {
    code: "GBP",
    symbol: "£",
    aliases: &["GBP", "£"],
    iso_numeric_code: "826",
    cbr_code: "R01035",
};

const CHF: CurrencyInfo = CurrencyInfo {
    code: "CHF",
    symbol: "CHF",
    aliases: &["CHF"],
    iso_numeric_code: "756",
    cbr_code: "R01775",
};

const CAD: CurrencyInfo = CurrencyInfo {
    code: "CAD",
    symbol: "CAD",
    aliases: &["CAD"],
    iso_numeric_code: "124",
    cbr_code: "R01350",
};

const HKD: CurrencyInfo = CurrencyInfo {
    code: "HKD",
    symbol: "HKD",
    aliases: &["HKD"],
    iso_numeric_code: "344",
    cbr_code: "R01200",
};

const CNY: CurrencyInfo = CurrencyInfo {
    code: "CNY",
    symbol: "CNY",
    aliases: &["CNY"],
    iso_numeric_code: "156",
    cbr_code: "R01375",
};

/// Closed set of currencies the calculator understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Currency {
    USD,
    RUB,
    EUR,
    GBP,
    CHF,
    CAD,
    HKD,
    CNY,
}

impl Currency {
    pub const ALL: [Currency; 8] = [
        Currency::USD,
        Currency::RUB,
        Currency::EUR,
        Currency::GBP,
        Currency::CHF,
        Currency::CAD,
        Currency::HKD,
        Currency::CNY,
    ];

    fn info(&self) -> &'static CurrencyInfo {
        match self {
            Currency::USD => &USD,
            Currency::RUB => &RUB,
            Currency::EUR => &EUR,
            Currency::GBP => &GBP,
            Currency::CHF => &CHF,
            Currency::CAD => &CAD,
            Currency::HKD => &HKD,
            Currency::CNY => &CNY,
        }
    }

    /// Resolves a broker-report currency label (ISO code or symbol).
    pub fn parse(value: &str) -> std::result::Result<Currency, MoneyError> {
        let value = value.trim();
        Currency::ALL
            .into_iter()
            .find(|currency| currency.info().aliases.contains(&value))
            .ok_or_else(|| MoneyError::UnknownCurrency(value.to_string()))
    }

    pub fn code(&self) -> &'static str {
        self.info().code
    }

    pub fn symbol(&self) -> &'static str {
        self.info().symbol
    }

    pub fn aliases(&self) -> &'static [&'static str] {
        self.info().aliases
    }

    pub fn iso_numeric_code(&self) -> &'static str {
        self.info().iso_numeric_code
    }

    pub fn cbr_code(&self) -> &'static str {
        self.info().cbr_code
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Currency {
    type Err = MoneyError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Currency::parse(s)
    }
}
