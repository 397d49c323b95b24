use crate::money::Currency;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Decimal precision for displaying exchange rates
pub const RATE_DISPLAY_PRECISION: u32 = 4;

/// Currency reports are converted into unless configured otherwise
pub const DEFAULT_BASE_CURRENCY: Currency = Currency::RUB;
