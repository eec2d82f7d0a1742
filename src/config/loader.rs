//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for reading a
//! [`RateConfig`] from a YAML file.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{BillingError, BillingResult};

use super::types::{BaseRates, RateConfig};

/// Loads billing configuration from YAML.
///
/// Every key is optional; missing keys keep their default value. The
/// loaded values are validated before a [`RateConfig`] is returned.
///
/// # File Format
///
/// ```text
/// monthly_salary: "2200.00"
/// weekly_hours: 40
/// work_days: 5
/// hours_per_day: 8
/// weeks_per_month: 4
/// default_currency: "U$S"
/// ```
///
/// # Example
///
/// ```no_run
/// use facturator::config::ConfigLoader;
///
/// let config = ConfigLoader::load("./config/facturator.yaml")?;
/// println!("Hourly rate: {}", config.hourly_rate());
/// # Ok::<(), facturator::error::BillingError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads and validates the configuration file at `path`.
    ///
    /// # Errors
    ///
    /// - [`BillingError::ConfigNotFound`] if the file cannot be read
    /// - [`BillingError::ConfigParseError`] if it is not valid YAML for
    ///   the expected fields
    /// - [`BillingError::InvalidConfig`] if a value breaks an invariant
    pub fn load<P: AsRef<Path>>(path: P) -> BillingResult<RateConfig> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| BillingError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = Self::from_yaml_str(&content, &path_str)?;
        info!(path = %path_str, config = %config, "loaded billing configuration");
        Ok(config)
    }

    /// Parses and validates configuration from YAML text.
    ///
    /// `source` names where the text came from and is only used in error
    /// messages.
    pub fn from_yaml_str(content: &str, source: &str) -> BillingResult<RateConfig> {
        // An empty document deserializes as null rather than as an empty map.
        let base = if content.trim().is_empty() {
            BaseRates::default()
        } else {
            serde_yaml::from_str::<BaseRates>(content).map_err(|e| {
                BillingError::ConfigParseError {
                    path: source.to_string(),
                    message: e.to_string(),
                }
            })?
        };
        debug!(source, ?base, "parsed base rates");

        RateConfig::from_base(base)
    }
}
