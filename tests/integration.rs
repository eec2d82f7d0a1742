//! Integration tests for the billing calculator.
//!
//! This test suite covers the library end to end:
//! - Rate derivation from the default and loaded configurations
//! - Calculations mixing hours, days, weeks and months
//! - Leap-year handling for month specifiers
//! - Text and JSON rendering of results
//! - Error cases

use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;

use facturator::calculation::{BillingCalculator, DAILY, HOURLY, MONTHLY, WEEKLY};
use facturator::config::{ConfigLoader, RateConfig};
use facturator::error::BillingError;
use facturator::models::TimeInput;

// =============================================================================
// Test Helpers
// =============================================================================

const REFERENCE_YEAR: i32 = 2026;

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn load_test_config() -> RateConfig {
    ConfigLoader::load("./config/facturator.yaml").expect("Failed to load config")
}

fn input(hours: &[i64], days: &[i64], weeks: &[i64], months: &[&str]) -> TimeInput {
    TimeInput {
        hours: hours.to_vec(),
        days: days.to_vec(),
        weeks: weeks.to_vec(),
        months: months.iter().map(|m| m.to_string()).collect(),
    }
}

// =============================================================================
// Rates
// =============================================================================

#[test]
fn test_loaded_config_hourly_rate() {
    let config = load_test_config();

    assert_eq!(config.monthly_hours(), 160);
    assert_eq!(config.hourly_rate(), decimal("13.75"));
}

#[test]
fn test_salary_change_is_visible_in_next_calculator() {
    let mut config = load_test_config();
    config.set_monthly_salary(decimal("4800")).unwrap();

    let calculator = BillingCalculator::new(&config, REFERENCE_YEAR);
    let rates = calculator.quick_rates("U$S");

    assert_eq!(rates[HOURLY], decimal("30"));
    assert_eq!(rates[DAILY], decimal("240"));
    assert_eq!(rates[WEEKLY], decimal("1200"));
    assert_eq!(rates[MONTHLY], decimal("4800"));
}

#[test]
fn test_rates_table_lists_every_rate() {
    let config = load_test_config();
    let calculator = BillingCalculator::new(&config, REFERENCE_YEAR);

    let table = calculator.format_rates("EUR");

    assert!(table.contains("  Salario mensual: EUR 2200.00\n"));
    assert!(table.contains("  Por hora: EUR 13.75\n"));
    assert!(table.contains("  Por día: EUR 110.00\n"));
    assert!(table.contains("  Por semana: EUR 550.00\n"));
    assert!(table.contains("  Por mes: EUR 2200.00\n"));
}

// =============================================================================
// Calculations
// =============================================================================

#[test]
fn test_days_in_euros() {
    let config = load_test_config();
    let calculator = BillingCalculator::new(&config, REFERENCE_YEAR);

    let result = calculator.calculate(&input(&[], &[5, 3], &[], &[]), "EUR").unwrap();

    assert_eq!(result.total_time, 64);
    assert_eq!(result.total_amount, decimal("64") * config.hourly_rate());
    assert_eq!(result.currency, "EUR");
}

#[test]
fn test_every_unit_combined() {
    let config = load_test_config();
    let calculator = BillingCalculator::new(&config, REFERENCE_YEAR);

    let result = calculator
        .calculate(&input(&[4], &[3], &[1], &["2024-01"]), "U$S")
        .unwrap();

    assert_eq!(result.total_time, 316);
    assert_eq!(result.total_amount, decimal("4345.00"));
}

#[test]
fn test_leap_february_bills_an_extra_day() {
    let config = load_test_config();
    let calculator = BillingCalculator::new(&config, REFERENCE_YEAR);

    let leap = calculator.calculate(&input(&[], &[], &[], &["2024-02"]), "U$S").unwrap();
    let common = calculator.calculate(&input(&[], &[], &[], &["2023-02"]), "U$S").unwrap();

    assert_eq!(leap.total_time - common.total_time, 8);
    assert_eq!(leap.month_details[0].day_count(), 29);
    assert_eq!(common.month_details[0].day_count(), 28);
}

#[test]
fn test_bare_month_uses_reference_year() {
    let config = load_test_config();

    let in_leap_year = BillingCalculator::new(&config, 2028)
        .calculate(&input(&[], &[], &[], &["02"]), "U$S")
        .unwrap();
    let in_common_year = BillingCalculator::new(&config, 2027)
        .calculate(&input(&[], &[], &[], &["02"]), "U$S")
        .unwrap();

    assert_eq!(in_leap_year.month_details[0].year(), 2028);
    assert_eq!(in_leap_year.total_time, 29 * 8);
    assert_eq!(in_common_year.total_time, 28 * 8);
}

#[test]
fn test_report_for_months_and_days() {
    let config = load_test_config();
    let calculator = BillingCalculator::new(&config, REFERENCE_YEAR);

    let result = calculator
        .calculate(&input(&[], &[5], &[], &["2024-01"]), "U$S")
        .unwrap();
    let report = calculator.format_result(&result);

    assert!(report.starts_with("=== CÁLCULO DE FACTURACIÓN ===\n"));
    assert!(report.contains("  Meses: 2024-01 (31 días) = 31 días × 8 horas = 248 horas\n"));
    assert!(report.contains("  Días: 5 × 8 horas = 40 horas\n"));
    assert!(report.contains("  Total de horas: 288\n"));
    assert!(report.contains("  TOTAL A FACTURAR: U$S 3960.00\n"));
}

#[test]
fn test_result_serializes_to_json() {
    let config = load_test_config();
    let calculator = BillingCalculator::new(&config, REFERENCE_YEAR);

    let result = calculator
        .calculate(&input(&[2], &[], &[], &["2024-02"]), "XYZ")
        .unwrap();
    let json: Value = serde_json::to_value(&result).unwrap();

    assert_eq!(json["total_time"], 234);
    assert_eq!(json["currency"], "XYZ");
    assert_eq!(json["month_details"][0]["year"], 2024);
    assert_eq!(json["month_details"][0]["month"], 2);
    assert_eq!(
        Decimal::from_str(json["total_amount"].as_str().unwrap()).unwrap(),
        decimal("3217.50")
    );
}

#[test]
fn test_month_summary_for_specific_month() {
    let config = load_test_config();
    let calculator = BillingCalculator::new(&config, REFERENCE_YEAR);

    assert_eq!(
        calculator.month_summary("2024-01", "U$S").unwrap(),
        "2024-01: 31 días × 8 horas = 248 horas → U$S 3410.00"
    );
}

// =============================================================================
// Error Cases
// =============================================================================

#[test]
fn test_invalid_month_format_fails_whole_calculation() {
    let config = load_test_config();
    let calculator = BillingCalculator::new(&config, REFERENCE_YEAR);

    let result = calculator.calculate(&input(&[8], &[], &[], &["invalid"]), "U$S");

    match result {
        Err(BillingError::InvalidFormat { input }) => assert_eq!(input, "invalid"),
        other => panic!("Expected InvalidFormat, got {:?}", other),
    }
}

#[test]
fn test_month_out_of_range_fails() {
    let config = load_test_config();
    let calculator = BillingCalculator::new(&config, REFERENCE_YEAR);

    for month in ["13", "2024-13", "2024-0"] {
        let result = calculator.calculate(&input(&[], &[], &[], &[month]), "U$S");
        assert!(
            matches!(result, Err(BillingError::InvalidMonth { .. })),
            "Expected InvalidMonth for {}, got {:?}",
            month,
            result
        );
    }
}

#[test]
fn test_negative_weeks_fail_validation() {
    let config = load_test_config();
    let calculator = BillingCalculator::new(&config, REFERENCE_YEAR);
    let bad = input(&[1], &[1], &[-2], &[]);

    let validated = calculator.validate_input(&bad);
    let calculated = calculator.calculate(&bad, "U$S");

    assert_eq!(validated.unwrap_err().to_string(), "weeks cannot be negative: -2");
    assert!(calculated.is_err());
}

#[test]
fn test_non_positive_salary_is_rejected() {
    let mut config = load_test_config();

    let err = config.set_monthly_salary(decimal("0")).unwrap_err();

    assert!(matches!(err, BillingError::InvalidConfig { .. }));
    assert_eq!(config.hourly_rate(), decimal("13.75"));
}
