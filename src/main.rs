use anyhow::{Context, Result};
use chrono::{Datelike, Local};
use clap::{CommandFactory, Parser};
use tracing::info;

mod cli;

use facturator::calculation::BillingCalculator;
use facturator::config::{ConfigLoader, RateConfig};
use facturator::error::BillingResult;
use facturator::init_tracing;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    init_tracing();

    // Version needs neither configuration nor calculator.
    if args.version {
        print_version();
        return Ok(());
    }

    let config = load_config(&args).context("configuration error")?;

    // The only place the clock is read; the library takes the year as input.
    let reference_year = Local::now().year();
    let calculator = BillingCalculator::new(&config, reference_year);
    let currency = args
        .currency
        .as_deref()
        .unwrap_or_else(|| config.default_currency());

    if args.rates {
        print!("{}", calculator.format_rates(currency));
        return Ok(());
    }

    if let Some(month) = &args.month_summary {
        let summary = calculator
            .month_summary(month, currency)
            .context("calculation error")?;
        println!("{}", summary);
        return Ok(());
    }

    let input = args.time_input();
    if input.is_empty() {
        cli::Cli::command().print_help()?;
        return Ok(());
    }

    info!(reference_year, currency, "calculating billing amount");
    let result = calculator
        .calculate(&input, currency)
        .context("calculation error")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", calculator.format_result(&result));
    }

    Ok(())
}

/// Builds the rate configuration from the optional file and flag overrides.
fn load_config(args: &cli::Cli) -> BillingResult<RateConfig> {
    let mut config = match &args.config {
        Some(path) => ConfigLoader::load(path)?,
        None => RateConfig::default(),
    };

    if let Some(salary) = args.salary {
        config.set_monthly_salary(salary)?;
    }
    if let Some(hours) = args.weekly_hours {
        config.set_weekly_hours(hours)?;
    }
    if let Some(hours) = args.hours_per_day {
        config.set_hours_per_day(hours)?;
    }

    config.validate()?;
    Ok(config)
}

fn print_version() {
    println!("Facturator v{}", env!("CARGO_PKG_VERSION"));
    println!(
        "Build Time: {}",
        option_env!("FACTURATOR_BUILD_TIME").unwrap_or("unknown")
    );
    println!(
        "Git Commit: {}",
        option_env!("FACTURATOR_GIT_COMMIT").unwrap_or("unknown")
    );
    println!("Rust {}", env!("CARGO_PKG_RUST_VERSION"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn args(list: &[&str]) -> cli::Cli {
        cli::Cli::try_parse_from(std::iter::once("facturator").chain(list.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_load_config_defaults_without_flags() {
        let config = load_config(&args(&[])).unwrap();
        assert_eq!(config, RateConfig::default());
    }

    #[test]
    fn test_load_config_applies_overrides() {
        let config = load_config(&args(&["--salary", "3200", "--hours-per-day", "10"])).unwrap();

        assert_eq!(config.hourly_rate(), Decimal::new(20, 0));
        assert_eq!(config.daily_rate(), Decimal::new(200, 0));
    }

    #[test]
    fn test_load_config_rejects_invalid_override() {
        let err = load_config(&args(&["--weekly-hours", "0"])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid configuration: weekly hours must be positive, got: 0"
        );
    }

    #[test]
    fn test_load_config_reads_file() {
        let config = load_config(&args(&["--config", "./config/facturator.yaml"])).unwrap();
        assert_eq!(config.default_currency(), "U$S");
    }
}
