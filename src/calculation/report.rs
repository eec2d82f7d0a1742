//! Human-readable reports.
//!
//! Formatting only builds strings; printing is left to the caller. Money
//! values are always shown with two decimal places.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::error::BillingResult;
use crate::models::{CalculationResult, round_money};

use super::calculator::BillingCalculator;

/// Key of the hourly rate in [`BillingCalculator::quick_rates`].
pub const HOURLY: &str = "hourly";
/// Key of the daily rate in [`BillingCalculator::quick_rates`].
pub const DAILY: &str = "daily";
/// Key of the weekly rate in [`BillingCalculator::quick_rates`].
pub const WEEKLY: &str = "weekly";
/// Key of the monthly rate in [`BillingCalculator::quick_rates`].
pub const MONTHLY: &str = "monthly";

impl BillingCalculator<'_> {
    /// Renders a calculation result as a breakdown followed by a summary.
    ///
    /// Breakdown lines for months, weeks, days and loose hours only appear
    /// when that part of the input is nonzero.
    ///
    /// # Example
    ///
    /// ```
    /// use facturator::calculation::BillingCalculator;
    /// use facturator::config::RateConfig;
    /// use facturator::models::TimeInput;
    ///
    /// let config = RateConfig::default();
    /// let calculator = BillingCalculator::new(&config, 2026);
    /// let input = TimeInput { weeks: vec![2], ..TimeInput::default() };
    /// let result = calculator.calculate(&input, "EUR")?;
    ///
    /// let report = calculator.format_result(&result);
    /// assert!(report.contains("  Semanas: 2 × 40 horas = 80 horas\n"));
    /// assert!(report.contains("  TOTAL A FACTURAR: EUR 1100.00\n"));
    /// # Ok::<(), facturator::error::BillingError>(())
    /// ```
    pub fn format_result(&self, result: &CalculationResult) -> String {
        let config = self.config();
        let hours_per_day = config.hours_per_day();
        let weekly_hours = config.weekly_hours();

        let mut output = String::new();
        output.push_str("=== CÁLCULO DE FACTURACIÓN ===\n\n");
        output.push_str("Desglose de tiempo trabajado:\n");

        if !result.month_details.is_empty() {
            let parts: Vec<String> = result
                .month_details
                .iter()
                .map(ToString::to_string)
                .collect();
            let month_days = result.total_month_days();
            output.push_str(&format!(
                "  Meses: {} = {} días × {} horas = {} horas\n",
                parts.join(", "),
                month_days,
                hours_per_day,
                month_days.saturating_mul(hours_per_day)
            ));
        }

        if result.total_weeks != 0 {
            output.push_str(&format!(
                "  Semanas: {} × {} horas = {} horas\n",
                result.total_weeks,
                weekly_hours,
                result.total_weeks.saturating_mul(weekly_hours)
            ));
        }

        if result.total_days != 0 {
            output.push_str(&format!(
                "  Días: {} × {} horas = {} horas\n",
                result.total_days,
                hours_per_day,
                result.total_days.saturating_mul(hours_per_day)
            ));
        }

        if result.total_hours != 0 {
            output.push_str(&format!(
                "  Horas adicionales: {} horas\n",
                result.total_hours
            ));
        }

        output.push_str("\nRESUMEN:\n");
        output.push_str(&format!("  Total de horas: {}\n", result.total_time));
        output.push_str(&format!(
            "  Tarifa por hora: {} {}\n",
            result.currency,
            round_money(config.hourly_rate())
        ));
        output.push_str(&format!(
            "  TOTAL A FACTURAR: {} {}\n",
            result.currency,
            round_money(result.total_amount)
        ));

        output
    }

    /// Renders the base configuration and the four derived rates.
    pub fn format_rates(&self, currency: &str) -> String {
        let config = self.config();
        let rates = config.rates();

        let mut output = String::new();
        output.push_str("=== TABLA DE TARIFAS ===\n\n");
        output.push_str("Configuración base:\n");
        output.push_str(&format!(
            "  Salario mensual: {} {}\n",
            currency,
            round_money(config.monthly_salary())
        ));
        output.push_str(&format!("  Horas semanales: {}\n", config.weekly_hours()));
        output.push_str(&format!("  Días laborales: {}\n", config.work_days()));
        output.push_str(&format!("  Horas por día: {}\n", config.hours_per_day()));
        output.push_str(&format!("  Moneda: {}\n", currency));
        output.push_str("\nTarifas calculadas:\n");
        output.push_str(&format!("  Por hora: {} {}\n", currency, round_money(rates.hourly)));
        output.push_str(&format!("  Por día: {} {}\n", currency, round_money(rates.daily)));
        output.push_str(&format!("  Por semana: {} {}\n", currency, round_money(rates.weekly)));
        output.push_str(&format!(
            "  Por mes: {} {}\n",
            currency,
            round_money(config.monthly_salary())
        ));
        output.push('\n');

        output
    }

    /// Returns the current hourly, daily, weekly and monthly rates.
    ///
    /// The currency is accepted for symmetry with the other reports and
    /// does not affect the values. The monthly rate is the salary itself.
    pub fn quick_rates(&self, _currency: &str) -> BTreeMap<&'static str, Decimal> {
        let config = self.config();
        let rates = config.rates();

        BTreeMap::from([
            (HOURLY, rates.hourly),
            (DAILY, rates.daily),
            (WEEKLY, rates.weekly),
            (MONTHLY, config.monthly_salary()),
        ])
    }

    /// Renders a one-line summary of the hours and amount for one month.
    ///
    /// # Errors
    ///
    /// Returns the parse error if `input` is not a valid month specifier.
    ///
    /// # Example
    ///
    /// ```
    /// use facturator::calculation::BillingCalculator;
    /// use facturator::config::RateConfig;
    ///
    /// let config = RateConfig::default();
    /// let calculator = BillingCalculator::new(&config, 2026);
    ///
    /// assert_eq!(
    ///     calculator.month_summary("2024-02", "U$S")?,
    ///     "2024-02: 29 días × 8 horas = 232 horas → U$S 3190.00"
    /// );
    /// # Ok::<(), facturator::error::BillingError>(())
    /// ```
    pub fn month_summary(&self, input: &str, currency: &str) -> BillingResult<String> {
        let month = self.parse_month(input)?;
        let hours_per_day = self.config().hours_per_day();
        let hours = i64::from(month.day_count()).saturating_mul(hours_per_day);
        let amount = Decimal::from(hours).saturating_mul(self.config().hourly_rate());

        Ok(format!(
            "{}: {} días × {} horas = {} horas → {} {}",
            input,
            month.day_count(),
            hours_per_day,
            hours,
            currency,
            round_money(amount)
        ))
    }
}
