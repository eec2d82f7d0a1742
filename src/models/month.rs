//! Month specifiers and the Gregorian calendar helpers behind them.
//!
//! A month can be billed either as `MM` (a month of the reference year) or
//! `YYYY-MM` (a month of an explicit year). The reference year is always
//! passed in by the caller, so parsing never reads the clock.

use std::fmt;

use serde::Serialize;

use crate::error::{BillingError, BillingResult};

/// Separator between the year and the month in `YYYY-MM`.
pub const YEAR_MONTH_SEPARATOR: char = '-';

const YEAR_DIGITS: usize = 4;
const MAX_MONTH_DIGITS: usize = 2;

/// Returns true if `year` is a Gregorian leap year.
///
/// # Example
///
/// ```
/// use facturator::models::is_leap_year;
///
/// assert!(is_leap_year(2000));
/// assert!(!is_leap_year(1900));
/// assert!(is_leap_year(2024));
/// ```
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in `month` of `year`, or 0 if `month` is
/// outside 1-12.
///
/// # Example
///
/// ```
/// use facturator::models::days_in_month;
///
/// assert_eq!(days_in_month(2, 2024), 29);
/// assert_eq!(days_in_month(2, 2023), 28);
/// assert_eq!(days_in_month(13, 2024), 0);
/// ```
pub fn days_in_month(month: u32, year: i32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// A parsed month to bill, with its resolved year and day count.
///
/// Only [`parse_month`] creates these; the fields are read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthSpecifier {
    raw_input: String,
    year: i32,
    month: u32,
    day_count: u32,
}

impl MonthSpecifier {
    /// Returns the specifier exactly as it was supplied.
    pub fn raw_input(&self) -> &str {
        &self.raw_input
    }

    /// Returns the resolved year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month number (1-12).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Returns the number of days in the month (28-31).
    pub fn day_count(&self) -> u32 {
        self.day_count
    }
}

impl fmt::Display for MonthSpecifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} días)", self.raw_input, self.day_count)
    }
}

/// Parses a month specifier.
///
/// Accepted formats, tried in this order:
/// 1. `YYYY-MM`: a four digit year and a one or two digit month.
/// 2. `MM`: a one or two digit month of `reference_year`.
///
/// # Errors
///
/// - [`BillingError::InvalidMonth`] if the format matches but the month is
///   outside 1-12.
/// - [`BillingError::InvalidFormat`] if neither format matches.
///
/// # Example
///
/// ```
/// use facturator::models::parse_month;
///
/// let february = parse_month("2024-02", 2030)?;
/// assert_eq!((february.year(), february.month(), february.day_count()), (2024, 2, 29));
///
/// let march = parse_month("3", 2030)?;
/// assert_eq!((march.year(), march.day_count()), (2030, 31));
/// # Ok::<(), facturator::error::BillingError>(())
/// ```
pub fn parse_month(input: &str, reference_year: i32) -> BillingResult<MonthSpecifier> {
    let invalid_format = || BillingError::InvalidFormat {
        input: input.to_string(),
    };

    let (year, month_digits) = match input.split_once(YEAR_MONTH_SEPARATOR) {
        Some((year_digits, month_digits))
            if year_digits.len() == YEAR_DIGITS
                && is_ascii_digits(year_digits)
                && is_month_digits(month_digits) =>
        {
            let year = year_digits.parse::<i32>().map_err(|_| invalid_format())?;
            (year, month_digits)
        }
        None if is_month_digits(input) => (reference_year, input),
        _ => return Err(invalid_format()),
    };

    let month = month_digits.parse::<u32>().map_err(|_| invalid_format())?;
    if !(1..=12).contains(&month) {
        return Err(BillingError::InvalidMonth {
            input: input.to_string(),
            month,
        });
    }

    Ok(MonthSpecifier {
        raw_input: input.to_string(),
        year,
        month,
        day_count: days_in_month(month, year),
    })
}

fn is_ascii_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn is_month_digits(s: &str) -> bool {
    s.len() <= MAX_MONTH_DIGITS && is_ascii_digits(s)
}
