//! Core data models for the billing calculator.
//!
//! This module contains the domain models used throughout the crate.

mod amount;
mod calculation_result;
mod month;
mod time_input;

pub use amount::{MONEY_DECIMAL_PLACES, round_money};
pub use calculation_result::CalculationResult;
pub use month::{
    MonthSpecifier, YEAR_MONTH_SEPARATOR, days_in_month, is_leap_year, parse_month,
};
pub use time_input::TimeInput;
