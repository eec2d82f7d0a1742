//! Rate configuration types.
//!
//! [`BaseRates`] is the plain record of billing parameters (it is what the
//! YAML loader deserializes), [`DerivedRates`] is what [`derive_rates`]
//! computes from it, and [`RateConfig`] is the validated, caller-owned
//! configuration handed to the calculator.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{BillingError, BillingResult};
use crate::models::round_money;

/// Default monthly salary.
pub const DEFAULT_MONTHLY_SALARY: Decimal = Decimal::from_parts(220_000, 0, 0, false, 2);
/// Default contracted hours per week.
pub const DEFAULT_WEEKLY_HOURS: i64 = 40;
/// Default working days per week.
pub const DEFAULT_WORK_DAYS: i64 = 5;
/// Default hours billed per worked day.
pub const DEFAULT_HOURS_PER_DAY: i64 = 8;
/// Default number of weeks a month is billed as.
pub const DEFAULT_WEEKS_PER_MONTH: i64 = 4;
/// Default currency label.
pub const DEFAULT_CURRENCY: &str = "U$S";

/// Base billing parameters.
///
/// Missing keys in a configuration file fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseRates {
    /// Monthly salary the rates are derived from.
    pub monthly_salary: Decimal,
    /// Hours worked in a week.
    pub weekly_hours: i64,
    /// Working days in a week.
    pub work_days: i64,
    /// Hours billed for a single day.
    pub hours_per_day: i64,
    /// Weeks a month is billed as.
    pub weeks_per_month: i64,
    /// Currency label used when none is given.
    pub default_currency: String,
}

impl Default for BaseRates {
    fn default() -> Self {
        Self {
            monthly_salary: DEFAULT_MONTHLY_SALARY,
            weekly_hours: DEFAULT_WEEKLY_HOURS,
            work_days: DEFAULT_WORK_DAYS,
            hours_per_day: DEFAULT_HOURS_PER_DAY,
            weeks_per_month: DEFAULT_WEEKS_PER_MONTH,
            default_currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

/// Rates derived from a set of [`BaseRates`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DerivedRates {
    /// `weekly_hours * weeks_per_month`.
    pub monthly_hours: i64,
    /// `monthly_salary / monthly_hours`.
    pub hourly: Decimal,
    /// `hourly * hours_per_day`.
    pub daily: Decimal,
    /// `hourly * weekly_hours`.
    pub weekly: Decimal,
}

/// Derives the hourly, daily and weekly rates from base parameters.
///
/// A zero `monthly_hours` (only reachable with unvalidated input) yields
/// zero rates.
///
/// # Example
///
/// ```
/// use facturator::config::{derive_rates, BaseRates};
/// use rust_decimal::Decimal;
///
/// let rates = derive_rates(&BaseRates::default());
/// assert_eq!(rates.monthly_hours, 160);
/// assert_eq!(rates.hourly, Decimal::new(1375, 2));
/// assert_eq!(rates.daily, Decimal::new(110, 0));
/// ```
pub fn derive_rates(base: &BaseRates) -> DerivedRates {
    let monthly_hours = base.weekly_hours.saturating_mul(base.weeks_per_month);
    let hourly = base
        .monthly_salary
        .checked_div(Decimal::from(monthly_hours))
        .unwrap_or(Decimal::ZERO);

    DerivedRates {
        monthly_hours,
        hourly,
        daily: hourly.saturating_mul(Decimal::from(base.hours_per_day)),
        weekly: hourly.saturating_mul(Decimal::from(base.weekly_hours)),
    }
}

/// The billing configuration the calculator reads its rates from.
///
/// A `RateConfig` is always valid: it can only be built through
/// [`RateConfig::default`] or [`RateConfig::from_base`], and every setter
/// rejects values that would break an invariant. Derived rates are computed
/// from the base fields on every read, so they can never go stale after a
/// setter runs.
///
/// # Example
///
/// ```
/// use facturator::config::RateConfig;
/// use rust_decimal::Decimal;
///
/// let mut config = RateConfig::default();
/// assert_eq!(config.hourly_rate(), Decimal::new(1375, 2));
///
/// config.set_monthly_salary(Decimal::new(3200, 0))?;
/// assert_eq!(config.hourly_rate(), Decimal::new(20, 0));
/// # Ok::<(), facturator::error::BillingError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RateConfig {
    base: BaseRates,
}

impl RateConfig {
    /// Builds a configuration from explicit base parameters.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant as [`BillingError::InvalidConfig`].
    pub fn from_base(base: BaseRates) -> BillingResult<Self> {
        let config = Self { base };
        config.validate()?;
        debug!(config = %config, "rate configuration built");
        Ok(config)
    }

    /// Checks every base field against its invariant.
    ///
    /// Fields are checked in the order salary, weekly hours, hours per day,
    /// work days, weeks per month, currency; the first failure is returned.
    pub fn validate(&self) -> BillingResult<()> {
        let base = &self.base;
        if base.monthly_salary <= Decimal::ZERO {
            return Err(BillingError::invalid_config("monthly salary must be positive"));
        }
        if base.weekly_hours <= 0 {
            return Err(BillingError::invalid_config("weekly hours must be positive"));
        }
        if base.hours_per_day <= 0 {
            return Err(BillingError::invalid_config("hours per day must be positive"));
        }
        if base.work_days <= 0 {
            return Err(BillingError::invalid_config("work days must be positive"));
        }
        if base.weeks_per_month <= 0 {
            return Err(BillingError::invalid_config("weeks per month must be positive"));
        }
        if base.default_currency.is_empty() {
            return Err(BillingError::invalid_config("default currency cannot be empty"));
        }
        Ok(())
    }

    /// Updates the monthly salary.
    ///
    /// # Errors
    ///
    /// [`BillingError::InvalidConfig`] if `salary` is not positive; the
    /// configuration is left untouched.
    pub fn set_monthly_salary(&mut self, salary: Decimal) -> BillingResult<()> {
        if salary <= Decimal::ZERO {
            return Err(BillingError::invalid_config(format!(
                "monthly salary must be positive, got: {}",
                round_money(salary)
            )));
        }
        self.base.monthly_salary = salary;
        debug!(monthly_salary = %salary, hourly_rate = %self.hourly_rate(), "monthly salary updated");
        Ok(())
    }

    /// Updates the weekly hours.
    ///
    /// # Errors
    ///
    /// [`BillingError::InvalidConfig`] if `hours` is not positive.
    pub fn set_weekly_hours(&mut self, hours: i64) -> BillingResult<()> {
        if hours <= 0 {
            return Err(BillingError::invalid_config(format!(
                "weekly hours must be positive, got: {hours}"
            )));
        }
        self.base.weekly_hours = hours;
        debug!(weekly_hours = hours, hourly_rate = %self.hourly_rate(), "weekly hours updated");
        Ok(())
    }

    /// Updates the hours billed per day.
    ///
    /// # Errors
    ///
    /// [`BillingError::InvalidConfig`] if `hours` is not positive.
    pub fn set_hours_per_day(&mut self, hours: i64) -> BillingResult<()> {
        if hours <= 0 {
            return Err(BillingError::invalid_config(format!(
                "hours per day must be positive, got: {hours}"
            )));
        }
        self.base.hours_per_day = hours;
        debug!(hours_per_day = hours, daily_rate = %self.daily_rate(), "hours per day updated");
        Ok(())
    }

    /// Returns the base parameters.
    pub fn base(&self) -> &BaseRates {
        &self.base
    }

    /// Returns the monthly salary.
    pub fn monthly_salary(&self) -> Decimal {
        self.base.monthly_salary
    }

    /// Returns the weekly hours.
    pub fn weekly_hours(&self) -> i64 {
        self.base.weekly_hours
    }

    /// Returns the working days per week.
    pub fn work_days(&self) -> i64 {
        self.base.work_days
    }

    /// Returns the hours billed per day.
    pub fn hours_per_day(&self) -> i64 {
        self.base.hours_per_day
    }

    /// Returns the weeks a month is billed as.
    pub fn weeks_per_month(&self) -> i64 {
        self.base.weeks_per_month
    }

    /// Returns the default currency label.
    pub fn default_currency(&self) -> &str {
        &self.base.default_currency
    }

    /// Returns the rates derived from the current base parameters.
    pub fn rates(&self) -> DerivedRates {
        derive_rates(&self.base)
    }

    /// Returns the hours in a billed month.
    pub fn monthly_hours(&self) -> i64 {
        self.rates().monthly_hours
    }

    /// Returns the current hourly rate.
    pub fn hourly_rate(&self) -> Decimal {
        self.rates().hourly
    }

    /// Returns the current daily rate.
    pub fn daily_rate(&self) -> Decimal {
        self.rates().daily
    }

    /// Returns the current weekly rate.
    pub fn weekly_rate(&self) -> Decimal {
        self.rates().weekly
    }
}

impl fmt::Display for RateConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BillingConfig{{MonthlySalary: {}, WeeklyHours: {}, HoursPerDay: {}, Currency: {}}}",
            round_money(self.base.monthly_salary),
            self.base.weekly_hours,
            self.base.hours_per_day,
            self.base.default_currency
        )
    }
}
