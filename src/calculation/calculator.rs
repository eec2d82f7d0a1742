//! Billing calculation.
//!
//! This module provides [`BillingCalculator`], which validates a
//! [`TimeInput`], converts every time unit into hours and prices the total
//! at the configured hourly rate.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::config::RateConfig;
use crate::error::{BillingError, BillingResult};
use crate::models::{CalculationResult, MonthSpecifier, TimeInput, parse_month};

/// Computes billable amounts against a borrowed [`RateConfig`].
///
/// The calculator never mutates the configuration and keeps no state of its
/// own beyond the reference year used to resolve `MM` month specifiers.
/// Rates are read from the configuration on every call.
///
/// # Example
///
/// ```
/// use facturator::calculation::BillingCalculator;
/// use facturator::config::RateConfig;
/// use facturator::models::TimeInput;
/// use rust_decimal::Decimal;
///
/// let config = RateConfig::default();
/// let calculator = BillingCalculator::new(&config, 2026);
///
/// let input = TimeInput {
///     days: vec![5, 3],
///     ..TimeInput::default()
/// };
/// let result = calculator.calculate(&input, "EUR")?;
///
/// assert_eq!(result.total_time, 64);
/// assert_eq!(result.total_amount, Decimal::new(880, 0));
/// # Ok::<(), facturator::error::BillingError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BillingCalculator<'a> {
    config: &'a RateConfig,
    reference_year: i32,
}

impl<'a> BillingCalculator<'a> {
    /// Creates a calculator over `config`.
    ///
    /// `reference_year` is the year assigned to month specifiers given
    /// without one (`MM`).
    pub fn new(config: &'a RateConfig, reference_year: i32) -> Self {
        Self {
            config,
            reference_year,
        }
    }

    /// Returns the configuration rates are read from.
    pub fn config(&self) -> &'a RateConfig {
        self.config
    }

    /// Returns the year used for `MM` month specifiers.
    pub fn reference_year(&self) -> i32 {
        self.reference_year
    }

    /// Parses a month specifier against this calculator's reference year.
    pub fn parse_month(&self, input: &str) -> BillingResult<MonthSpecifier> {
        parse_month(input, self.reference_year)
    }

    /// Validates a time input without calculating anything.
    ///
    /// Hours, days and weeks must be non-negative and every month specifier
    /// must parse. Categories are checked in that order and elements in
    /// input order; the first violation is returned.
    ///
    /// # Errors
    ///
    /// - [`BillingError::InvalidInput`] for a negative hour, day or week
    /// - [`BillingError::InvalidFormat`] or [`BillingError::InvalidMonth`]
    ///   for a month specifier that does not parse
    pub fn validate_input(&self, input: &TimeInput) -> BillingResult<()> {
        ensure_non_negative("hours", &input.hours)?;
        ensure_non_negative("days", &input.days)?;
        ensure_non_negative("weeks", &input.weeks)?;

        for month in &input.months {
            self.parse_month(month)?;
        }

        Ok(())
    }

    /// Calculates the billable amount for `input`.
    ///
    /// The input is fully validated before anything is aggregated, so an
    /// error never comes with a partial result. `currency` is copied into
    /// the result verbatim.
    ///
    /// The grand total in hours is
    /// `hours + days * hours_per_day + weeks * weekly_hours
    /// + Σ month_days * hours_per_day`, priced at the current hourly rate.
    ///
    /// # Errors
    ///
    /// Any error from [`validate_input`](Self::validate_input), or
    /// [`BillingError::CalculationError`] if a total overflows.
    pub fn calculate(&self, input: &TimeInput, currency: &str) -> BillingResult<CalculationResult> {
        if let Err(err) = self.validate_input(input) {
            warn!(error = %err, "rejected time input");
            return Err(err);
        }

        let month_details = input
            .months
            .iter()
            .map(|month| self.parse_month(month))
            .collect::<BillingResult<Vec<_>>>()?;

        let total_hours = checked_sum(&input.hours, "total hours")?;
        let total_days = checked_sum(&input.days, "total days")?;
        let total_weeks = checked_sum(&input.weeks, "total weeks")?;
        let month_days: i64 = month_details
            .iter()
            .map(|month| i64::from(month.day_count()))
            .sum();

        let hours_per_day = self.config.hours_per_day();
        let weekly_hours = self.config.weekly_hours();

        let total_time = [
            Ok(total_hours),
            in_hours(total_days, hours_per_day, "day hours"),
            in_hours(total_weeks, weekly_hours, "week hours"),
            in_hours(month_days, hours_per_day, "month hours"),
        ]
        .into_iter()
        .try_fold(0i64, |acc, hours| {
            acc.checked_add(hours?)
                .ok_or_else(|| BillingError::overflow("total time"))
        })?;

        let hourly_rate = self.config.hourly_rate();
        let total_amount = Decimal::from(total_time)
            .checked_mul(hourly_rate)
            .ok_or_else(|| BillingError::overflow("total amount"))?;

        debug!(
            months = month_details.len(),
            total_hours,
            total_days,
            total_weeks,
            total_time,
            hourly_rate = %hourly_rate,
            total_amount = %total_amount,
            currency,
            "calculation complete"
        );

        Ok(CalculationResult {
            month_details,
            total_weeks,
            total_days,
            total_hours,
            total_time,
            total_amount,
            currency: currency.to_string(),
        })
    }
}

fn ensure_non_negative(field: &str, values: &[i64]) -> BillingResult<()> {
    match values.iter().find(|value| **value < 0) {
        Some(value) => Err(BillingError::InvalidInput {
            field: field.to_string(),
            value: *value,
        }),
        None => Ok(()),
    }
}

fn checked_sum(values: &[i64], what: &str) -> BillingResult<i64> {
    values
        .iter()
        .try_fold(0i64, |acc, value| acc.checked_add(*value))
        .ok_or_else(|| BillingError::overflow(what))
}

fn in_hours(count: i64, hours_per_unit: i64, what: &str) -> BillingResult<i64> {
    count
        .checked_mul(hours_per_unit)
        .ok_or_else(|| BillingError::overflow(what))
}
