use clap::{ArgAction, Parser};
use rust_decimal::Decimal;
use std::path::PathBuf;

use facturator::models::TimeInput;

const LONG_ABOUT: &str = "=== CALCULADORA DE FACTURACIÓN ===

Calculates billing amounts from hours, days, weeks and months.
Time periods can be combined in a single calculation.

Examples:
  facturator -h 120                    # 120 hours
  facturator -d 15                     # 15 days
  facturator -s 2                      # 2 weeks
  facturator -m 02                     # February of the current year
  facturator -m 2024-02                # February 2024 (29 days)
  facturator -m 01 -d 5                # January + 5 additional days
  facturator -s 2 -d 3 -h 4            # 2 weeks + 3 days + 4 hours
  facturator -d 15 --currency EUR      # 15 days in euros
  facturator -m 2024-01 -m 2024-02     # Multiple months

Month formats:
  MM                                   # Month of the current year
  YYYY-MM                              # Month of a specific year";

#[derive(Parser, Debug)]
#[command(
    name = "facturator",
    about = "Billing calculator",
    long_about = LONG_ABOUT,
    disable_help_flag = true,
    disable_version_flag = true,
    allow_negative_numbers = true
)]
pub struct Cli {
    /// Add worked hours (repeatable or comma separated)
    #[arg(short = 'h', long, value_delimiter = ',')]
    pub hours: Vec<i64>,

    /// Add worked days (repeatable or comma separated)
    #[arg(short = 'd', long, value_delimiter = ',')]
    pub days: Vec<i64>,

    /// Add worked weeks (repeatable or comma separated)
    #[arg(short = 's', long, value_delimiter = ',')]
    pub weeks: Vec<i64>,

    /// Add months in MM or YYYY-MM format (repeatable or comma separated)
    #[arg(short = 'm', long, value_delimiter = ',')]
    pub months: Vec<String>,

    /// Currency label [default: the configured currency, U$S]
    #[arg(long)]
    pub currency: Option<String>,

    /// Show the rate table
    #[arg(long)]
    pub rates: bool,

    /// Show the hours and amount for a single month
    #[arg(long, value_name = "MONTH")]
    pub month_summary: Option<String>,

    /// Print the calculation result as JSON
    #[arg(long)]
    pub json: bool,

    /// Configuration file with the base billing parameters
    #[arg(short, long, env = "FACTURATOR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the monthly salary
    #[arg(long)]
    pub salary: Option<Decimal>,

    /// Override the weekly hours
    #[arg(long)]
    pub weekly_hours: Option<i64>,

    /// Override the hours per day
    #[arg(long)]
    pub hours_per_day: Option<i64>,

    /// Show version information
    #[arg(long)]
    pub version: bool,

    /// Show this help message
    #[arg(short = '?', long, action = ArgAction::Help)]
    pub help: Option<bool>,
}

impl Cli {
    /// Collects the time arguments into a calculator input.
    pub fn time_input(&self) -> TimeInput {
        TimeInput {
            hours: self.hours.clone(),
            days: self.days.clone(),
            weeks: self.weeks.clone(),
            months: self.months.clone(),
        }
    }
}
