//! Money rounding shared by the reports and error messages.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of fractional digits money values are shown with.
pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// Rounds `amount` half away from zero to two decimal places.
///
/// The returned value always carries a scale of two, so its `Display`
/// output has exactly two fractional digits.
///
/// # Example
///
/// ```
/// use facturator::models::round_money;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_money(Decimal::new(2200, 0)).to_string(), "2200.00");
/// assert_eq!(round_money(Decimal::new(13125, 3)).to_string(), "13.13");
/// ```
pub fn round_money(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(
        MONEY_DECIMAL_PLACES,
        RoundingStrategy::MidpointAwayFromZero,
    );
    rounded.rescale(MONEY_DECIMAL_PLACES);
    rounded
}
