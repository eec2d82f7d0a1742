//! Calculation result model.
//!
//! This module contains the [`CalculationResult`] type that captures the
//! outcome of a billing calculation: the parsed months, the raw totals of
//! each input category, the grand total in hours and the billed amount.

use rust_decimal::Decimal;
use serde::Serialize;

use super::MonthSpecifier;

/// The complete result of a billing calculation.
///
/// `total_weeks`, `total_days` and `total_hours` are the plain sums of the
/// corresponding inputs, before any unit conversion. `total_time` is the
/// grand total in hours once weeks, days and months have been converted.
///
/// # Example
///
/// ```
/// use facturator::models::CalculationResult;
/// use rust_decimal::Decimal;
///
/// let result = CalculationResult {
///     month_details: vec![],
///     total_weeks: 0,
///     total_days: 8,
///     total_hours: 0,
///     total_time: 64,
///     total_amount: Decimal::new(880, 0),
///     currency: "EUR".to_string(),
/// };
/// assert_eq!(result.total_month_days(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalculationResult {
    /// Parsed month specifiers, in input order.
    pub month_details: Vec<MonthSpecifier>,
    /// Sum of all week inputs.
    pub total_weeks: i64,
    /// Sum of all day inputs.
    pub total_days: i64,
    /// Sum of all hour inputs.
    pub total_hours: i64,
    /// Grand total in hours after unit conversion.
    pub total_time: i64,
    /// `total_time` multiplied by the hourly rate.
    pub total_amount: Decimal,
    /// Currency label, exactly as supplied.
    pub currency: String,
}

impl CalculationResult {
    /// Returns the number of days covered by the billed months.
    pub fn total_month_days(&self) -> i64 {
        self.month_details
            .iter()
            .map(|month| i64::from(month.day_count()))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::parse_month;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_sample_result() -> CalculationResult {
        CalculationResult {
            month_details: vec![
                parse_month("2024-01", 2026).unwrap(),
                parse_month("2024-02", 2026).unwrap(),
            ],
            total_weeks: 1,
            total_days: 3,
            total_hours: 4,
            total_time: 548,
            total_amount: dec("7535.00"),
            currency: "U$S".to_string(),
        }
    }

    #[test]
    fn test_total_month_days_sums_day_counts() {
        let result = create_sample_result();
        assert_eq!(result.total_month_days(), 60);
    }

    #[test]
    fn test_result_serialization() {
        let result = create_sample_result();
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["total_time"], 548);
        assert_eq!(json["total_amount"], "7535.00");
        assert_eq!(json["currency"], "U$S");
        assert_eq!(json["month_details"][1]["raw_input"], "2024-02");
        assert_eq!(json["month_details"][1]["day_count"], 29);
    }
}
