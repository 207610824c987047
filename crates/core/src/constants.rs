use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Highest scale a `Decimal` can carry
pub const MAX_DECIMAL_SCALE: u32 = 28;

/// Compounding periods per year for SIP projections
pub const MONTHS_PER_YEAR: u32 = 12;

/// Longest SIP tenor accepted for projection, in years
pub const MAX_TENOR_YEARS: u32 = 100;

/// Lowest accepted annual rate, in percent. Below this a month would wipe out
/// more than the principal.
pub const MIN_ANNUAL_RATE_PERCENT: Decimal = dec!(-100);

/// Average year length used when annualizing returns
pub const DAYS_PER_YEAR: Decimal = dec!(365.25);
