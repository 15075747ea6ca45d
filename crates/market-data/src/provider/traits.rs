//! Price provider trait definitions.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::Quote;

/// Quote currency every explorer dashboard renders prices in.
pub const USD: &str = "USD";

/// Trait for price oracles.
///
/// Implement this trait to plug a different oracle into the explorer's
/// market query. Each call is independent: implementations hold no state
/// that a concurrent call could observe.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use ledgerscope_market_data::{MarketDataError, PriceProvider, Quote};
///
/// struct FixedOracle;
///
/// #[async_trait]
/// impl PriceProvider for FixedOracle {
///     fn id(&self) -> &'static str {
///         "FIXED"
///     }
///
///     async fn get_rate(&self, base: &str, quote: &str) -> Result<Quote, MarketDataError> {
///         Ok(Quote::new(chrono::Utc::now(), base.to_string(), quote.to_string(), 1.into(), "FIXED"))
///     }
/// }
/// ```
#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// Unique identifier for this provider, used for logging and errors.
    fn id(&self) -> &'static str;

    /// Fetch the price of one unit of `base` expressed in `quote`.
    ///
    /// # Arguments
    ///
    /// * `base` - The asset being priced (e.g., "BTC", "ETH")
    /// * `quote` - The currency to express the price in (e.g., "USD")
    async fn get_rate(&self, base: &str, quote: &str) -> Result<Quote, MarketDataError>;

    /// Fetch the USD price of one unit of `base`.
    async fn get_usd_rate(&self, base: &str) -> Result<Quote, MarketDataError> {
        self.get_rate(base, USD).await
    }
}
