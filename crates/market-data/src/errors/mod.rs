//! Error types and retry classification for the market data crate.
//!
//! This module provides:
//! - [`MarketDataError`]: The main error enum for all oracle operations
//! - [`RetryClass`]: Classification for determining retry behavior

mod retry;

pub use retry::RetryClass;

use thiserror::Error;

/// Errors that can occur while fetching a price from an oracle.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The oracle answered but carried no USD rate for the currency.
    #[error("Currency not found: {0}")]
    CurrencyNotFound(String),

    /// The oracle rate limited the request (HTTP 429).
    #[error("Rate limited: {provider}")]
    RateLimited {
        /// The provider that rate limited the request
        provider: String,
    },

    /// The request to the oracle timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// The oracle returned a non-success status, or an unreadable body
    /// (`status: None`).
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// HTTP status, when the failure came with one
        status: Option<u16>,
        /// The error message from the provider
        message: String,
    },

    /// The rate was present but is not a usable price.
    #[error("Validation failed: {message}")]
    ValidationFailed {
        /// Description of the validation failure
        message: String,
    },

    /// A network error occurred while communicating with the oracle.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl MarketDataError {
    /// Returns the retry classification for this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use ledgerscope_market_data::errors::{MarketDataError, RetryClass};
    ///
    /// let error = MarketDataError::RateLimited { provider: "EXCHANGE_RATES".to_string() };
    /// assert_eq!(error.retry_class(), RetryClass::WithBackoff);
    ///
    /// let error = MarketDataError::CurrencyNotFound("XYZ".to_string());
    /// assert_eq!(error.retry_class(), RetryClass::Never);
    /// ```
    pub fn retry_class(&self) -> RetryClass {
        match self {
            Self::CurrencyNotFound(_) | Self::ValidationFailed { .. } => RetryClass::Never,

            Self::RateLimited { .. } | Self::Timeout { .. } | Self::Network(_) => {
                RetryClass::WithBackoff
            }

            // No status means the body was unreadable; a retry will not fix it.
            Self::ProviderError { status, .. } => match status {
                Some(code) if *code >= 500 => RetryClass::WithBackoff,
                _ => RetryClass::Never,
            },
        }
    }
}
