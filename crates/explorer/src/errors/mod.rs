//! Error types for the explorer client.
//!
//! Only the transport step of a lookup can fail. Classifying a response never
//! fails, and an identifier the explorer does not know is a successful
//! [`ResolvedResource::NotFound`](crate::ResolvedResource::NotFound), not an
//! error.

use std::fmt;

use ledgerscope_market_data::{MarketDataError, RetryClass};
use thiserror::Error;

/// Boxed cause attached to a [`ExplorerError::FetchFailure`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, ExplorerError>;

/// Which step of a fetch went wrong.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FetchFailureKind {
    /// Connection, DNS, TLS or body read failure.
    Transport,
    /// The request did not complete in time.
    Timeout,
    /// The service answered with a non-2xx status.
    Status(u16),
    /// The body was not the JSON shape expected.
    Decode,
}

impl fmt::Display for FetchFailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport => write!(f, "transport error"),
            Self::Timeout => write!(f, "timed out"),
            Self::Status(code) => write!(f, "HTTP {}", code),
            Self::Decode => write!(f, "malformed response body"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ExplorerError {
    /// The request could not be completed or its answer could not be read.
    #[error("Fetch failed for {target}: {kind}")]
    FetchFailure {
        /// URL (or oracle id) the request was sent to
        target: String,
        kind: FetchFailureKind,
        #[source]
        source: Option<BoxError>,
    },

    /// Caller supplied a negative offset or a non-positive limit.
    #[error("Invalid pagination: {field} = {value}")]
    InvalidPagination { field: &'static str, value: i64 },

    #[error("Invalid configuration value: {0}")]
    InvalidConfig(String),
}

impl ExplorerError {
    pub fn fetch(
        target: impl Into<String>,
        kind: FetchFailureKind,
        source: impl Into<BoxError>,
    ) -> Self {
        Self::FetchFailure {
            target: target.into(),
            kind,
            source: Some(source.into()),
        }
    }

    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, Self::FetchFailure { .. })
    }

    /// The fetch failure kind, if this is a fetch failure.
    pub fn fetch_kind(&self) -> Option<FetchFailureKind> {
        match self {
            Self::FetchFailure { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Returns the retry classification for this error.
    ///
    /// The explorer client never retries; this tells the caller whether a
    /// retry could help.
    ///
    /// ```
    /// use ledgerscope_explorer::errors::{ExplorerError, FetchFailureKind};
    /// use ledgerscope_market_data::RetryClass;
    ///
    /// let error = ExplorerError::fetch("http://host/explorer/hash/ab", FetchFailureKind::Status(503), "unavailable");
    /// assert_eq!(error.retry_class(), RetryClass::WithBackoff);
    ///
    /// let error = ExplorerError::InvalidPagination { field: "limit", value: 0 };
    /// assert_eq!(error.retry_class(), RetryClass::Never);
    /// ```
    pub fn retry_class(&self) -> RetryClass {
        match self {
            Self::FetchFailure { kind, .. } => match kind {
                FetchFailureKind::Transport | FetchFailureKind::Timeout => RetryClass::WithBackoff,
                FetchFailureKind::Status(code) if *code == 429 || *code >= 500 => {
                    RetryClass::WithBackoff
                }
                FetchFailureKind::Status(_) | FetchFailureKind::Decode => RetryClass::Never,
            },
            Self::InvalidPagination { .. } | Self::InvalidConfig(_) => RetryClass::Never,
        }
    }

    /// Wrap an oracle error as a fetch failure, keeping it as the source.
    pub fn from_market_data(target: impl Into<String>, error: MarketDataError) -> Self {
        let kind = match &error {
            MarketDataError::Timeout { .. } => FetchFailureKind::Timeout,
            MarketDataError::RateLimited { .. } => FetchFailureKind::Status(429),
            MarketDataError::ProviderError {
                status: Some(code), ..
            } => FetchFailureKind::Status(*code),
            MarketDataError::Network(_) => FetchFailureKind::Transport,
            MarketDataError::ProviderError { status: None, .. }
            | MarketDataError::CurrencyNotFound(_)
            | MarketDataError::ValidationFailed { .. } => FetchFailureKind::Decode,
        };
        Self::fetch(target, kind, error)
    }
}
