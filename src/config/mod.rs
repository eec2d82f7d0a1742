//! Billing configuration for the calculator.
//!
//! This module provides the caller-owned [`RateConfig`], the pure
//! [`derive_rates`] function that turns base parameters into hourly, daily
//! and weekly rates, and a YAML [`ConfigLoader`].
//!
//! # Example
//!
//! ```no_run
//! use facturator::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/facturator.yaml").unwrap();
//! println!("Hourly rate: {}", config.hourly_rate());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    BaseRates, DEFAULT_CURRENCY, DEFAULT_HOURS_PER_DAY, DEFAULT_MONTHLY_SALARY,
    DEFAULT_WEEKLY_HOURS, DEFAULT_WEEKS_PER_MONTH, DEFAULT_WORK_DAYS, DerivedRates, RateConfig,
    derive_rates,
};
