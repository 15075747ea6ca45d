//! Exchange-rates price oracle.
//!
//! Fetches spot rates from an `/exchange-rates?currency=XXX` endpoint in the
//! shape served by the Coinbase public API:
//!
//! ```json
//! { "data": { "currency": "BTC", "rates": { "USD": "64123.45", "EUR": "59001.10" } } }
//! ```
//!
//! Rates are decimal strings and are parsed straight into [`Decimal`] so no
//! precision is lost through a float round trip.

use std::collections::HashMap;
use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use reqwest::{Client, StatusCode};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::errors::MarketDataError;
use crate::models::Quote;
use crate::provider::PriceProvider;

/// Provider ID constant
const PROVIDER_ID: &str = "EXCHANGE_RATES";

/// Public oracle used when no other is configured.
pub const DEFAULT_ORACLE_URL: &str = "https://api.coinbase.com/v2";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
struct ExchangeRatesResponse {
    data: ExchangeRatesData,
}

#[derive(Debug, Deserialize)]
struct ExchangeRatesData {
    #[allow(dead_code)]
    #[serde(default)]
    currency: Option<String>,
    #[serde(default)]
    rates: HashMap<String, String>,
}

/// Price oracle backed by an exchange-rates endpoint.
///
/// # Example
///
/// ```ignore
/// use ledgerscope_market_data::{ExchangeRatesProvider, PriceProvider};
///
/// let oracle = ExchangeRatesProvider::new("https://api.coinbase.com/v2");
/// let quote = oracle.get_usd_rate("BTC").await?;
/// ```
#[derive(Debug, Clone)]
pub struct ExchangeRatesProvider {
    client: Client,
    base_url: String,
}

impl ExchangeRatesProvider {
    /// Create a provider for the oracle at `base_url` with the default timeout.
    pub fn new(base_url: &str) -> Self {
        Self::with_timeout(base_url, REQUEST_TIMEOUT)
    }

    /// Create a provider whose requests give up after `timeout`.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self::with_client(base_url, client)
    }

    /// Create a provider sharing an existing HTTP client.
    pub fn with_client(base_url: &str, client: Client) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// The oracle base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn rates_url(&self, base: &str) -> String {
        format!(
            "{}/exchange-rates?currency={}",
            self.base_url,
            urlencoding::encode(base)
        )
    }

    fn parse_rate(raw: &str) -> Result<Decimal, MarketDataError> {
        let raw = raw.trim();
        let price = Decimal::from_str(raw)
            .or_else(|_| Decimal::from_scientific(raw))
            .map_err(|e| MarketDataError::ValidationFailed {
                message: format!("Invalid rate '{}': {}", raw, e),
            })?;

        if price <= Decimal::ZERO {
            return Err(MarketDataError::ValidationFailed {
                message: format!("Non-positive rate '{}'", raw),
            });
        }

        Ok(price)
    }
}

impl Default for ExchangeRatesProvider {
    fn default() -> Self {
        Self::new(DEFAULT_ORACLE_URL)
    }
}

#[async_trait]
impl PriceProvider for ExchangeRatesProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_rate(&self, base: &str, quote: &str) -> Result<Quote, MarketDataError> {
        let url = self.rates_url(base);
        debug!("Fetching {} rate for {} from {}", quote, base, url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                MarketDataError::Timeout {
                    provider: PROVIDER_ID.to_string(),
                }
            } else {
                MarketDataError::Network(e)
            }
        })?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(MarketDataError::RateLimited {
                provider: PROVIDER_ID.to_string(),
            });
        }
        if !status.is_success() {
            return Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                status: Some(status.as_u16()),
                message: format!("HTTP {}", status),
            });
        }

        let body: ExchangeRatesResponse =
            response
                .json()
                .await
                .map_err(|e| MarketDataError::ProviderError {
                    provider: PROVIDER_ID.to_string(),
                    status: None,
                    message: e.to_string(),
                })?;

        let raw = body
            .data
            .rates
            .get(quote)
            .ok_or_else(|| MarketDataError::CurrencyNotFound(format!("{}/{}", base, quote)))?;

        let price = Self::parse_rate(raw)?;

        Ok(Quote::new(
            Utc::now(),
            base.to_string(),
            quote.to_string(),
            price,
            PROVIDER_ID,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::RetryClass;
    use rust_decimal_macros::dec;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn oracle_with(status: u16, body: serde_json::Value) -> (MockServer, ExchangeRatesProvider) {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/exchange-rates"))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&server)
            .await;
        let provider = ExchangeRatesProvider::new(&server.uri());
        (server, provider)
    }

    #[test]
    fn test_provider_id() {
        let provider = ExchangeRatesProvider::default();
        assert_eq!(provider.id(), "EXCHANGE_RATES");
        assert_eq!(provider.base_url(), DEFAULT_ORACLE_URL);
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let provider = ExchangeRatesProvider::new("https://oracle.test/v2/");
        assert_eq!(
            provider.rates_url("ETH"),
            "https://oracle.test/v2/exchange-rates?currency=ETH"
        );
    }

    #[test]
    fn test_parse_rate() {
        assert_eq!(ExchangeRatesProvider::parse_rate("64123.45").unwrap(), dec!(64123.45));
        assert_eq!(ExchangeRatesProvider::parse_rate(" 3100.5 ").unwrap(), dec!(3100.5));
        assert!(ExchangeRatesProvider::parse_rate("abc").is_err());
        assert!(ExchangeRatesProvider::parse_rate("0").is_err());
        assert!(ExchangeRatesProvider::parse_rate("-1.5").is_err());
    }

    #[tokio::test]
    async fn test_get_usd_rate() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/exchange-rates"))
            .and(query_param("currency", "BTC"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": { "currency": "BTC", "rates": { "USD": "64123.45", "EUR": "59001.10" } }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let provider = ExchangeRatesProvider::new(&server.uri());
        let quote = provider.get_usd_rate("BTC").await.unwrap();

        assert_eq!(quote.price, dec!(64123.45));
        assert_eq!(quote.base, "BTC");
        assert_eq!(quote.quote, "USD");
        assert_eq!(quote.source, PROVIDER_ID);
    }

    #[tokio::test]
    async fn test_missing_quote_currency() {
        let (_server, provider) = oracle_with(
            200,
            json!({ "data": { "currency": "ETH", "rates": { "EUR": "2900.00" } } }),
        )
        .await;

        let err = provider.get_usd_rate("ETH").await.unwrap_err();
        assert!(matches!(err, MarketDataError::CurrencyNotFound(ref pair) if pair == "ETH/USD"));
        assert_eq!(err.retry_class(), RetryClass::Never);
    }

    #[tokio::test]
    async fn test_rate_limited() {
        let (_server, provider) = oracle_with(429, json!({ "errors": [] })).await;

        let err = provider.get_usd_rate("BTC").await.unwrap_err();
        assert!(matches!(err, MarketDataError::RateLimited { .. }));
    }

    #[tokio::test]
    async fn test_server_error() {
        let (_server, provider) = oracle_with(500, json!({})).await;

        let err = provider.get_usd_rate("BTC").await.unwrap_err();
        match err {
            MarketDataError::ProviderError { status, .. } => assert_eq!(status, Some(500)),
            other => panic!("Expected ProviderError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/exchange-rates"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let provider = ExchangeRatesProvider::new(&server.uri());
        let err = provider.get_usd_rate("BTC").await.unwrap_err();
        assert!(matches!(err, MarketDataError::ProviderError { status: None, .. }));
    }
}
