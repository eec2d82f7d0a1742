//! Calculation logic for the billing calculator.
//!
//! This module contains the [`BillingCalculator`], which validates time
//! input, converts months, weeks and days into hours and prices the total,
//! together with the text reports rendered from its results and rates.

mod calculator;
mod report;

pub use calculator::BillingCalculator;
pub use report::{DAILY, HOURLY, MONTHLY, WEEKLY};
