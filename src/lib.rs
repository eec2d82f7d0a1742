//! Billing calculator for hourly, daily, weekly and monthly work.
//!
//! This crate derives hourly, daily and weekly rates from a monthly salary
//! and prices worked time (loose hours, days, weeks and calendar months)
//! at those rates.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initializes tracing for the command-line binary.
///
/// The filter comes from `RUST_LOG` and defaults to `error`. Logs go to
/// stderr so they never mix with a report printed on stdout.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}
