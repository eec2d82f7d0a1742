//! Error types for the billing calculator.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition that can stop a rate derivation or a calculation.

use thiserror::Error;

/// The main error type for the billing calculator.
///
/// All library operations return this error type. Every variant is a
/// terminal validation error: nothing is retried and no partial result is
/// produced.
///
/// # Example
///
/// ```
/// use facturator::error::BillingError;
///
/// let error = BillingError::InvalidFormat {
///     input: "march".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "invalid month format: march (use MM or YYYY-MM)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BillingError {
    /// A base configuration field violates its invariant.
    #[error("invalid configuration: {message}")]
    InvalidConfig {
        /// A description of the violated invariant.
        message: String,
    },

    /// A month specifier matches neither `MM` nor `YYYY-MM`.
    #[error("invalid month format: {input} (use MM or YYYY-MM)")]
    InvalidFormat {
        /// The raw specifier as supplied.
        input: String,
    },

    /// A month specifier is well formed but its month is outside 1-12.
    #[error("invalid month '{input}': {month} (must be 1-12)")]
    InvalidMonth {
        /// The raw specifier as supplied.
        input: String,
        /// The out-of-range month number.
        month: u32,
    },

    /// A time quantity is negative.
    #[error("{field} cannot be negative: {value}")]
    InvalidInput {
        /// The input category ("hours", "days" or "weeks").
        field: String,
        /// The offending value.
        value: i64,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

impl BillingError {
    /// Builds an [`BillingError::InvalidConfig`] from any message.
    pub(crate) fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Builds an overflow [`BillingError::CalculationError`] for `what`.
    pub(crate) fn overflow(what: &str) -> Self {
        Self::CalculationError {
            message: format!("{what} overflowed"),
        }
    }
}

/// A type alias for Results that return BillingError.
pub type BillingResult<T> = Result<T, BillingError>;
