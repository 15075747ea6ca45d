//! Auxiliary Market/Swap Query.
//!
//! Dashboard data that has nothing to do with hash resolution:
//! - [`MarketQuery::quote_price`]: USD price of an external asset from the
//!   price oracle. Failures propagate, there is no sensible default price.
//! - [`MarketQuery::fetch_swap_snapshot`]: aggregate swap/pool snapshot from
//!   the explorer's `/explorer/swap`. Failures are logged and degrade to
//!   `None` so dashboards still render.
//!
//! Calls share no state and may run concurrently with each other and with
//! hash lookups.

use std::sync::Arc;

use ledgerscope_market_data::{ExchangeRatesProvider, PriceProvider};
use log::warn;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::ExplorerConfig;
use crate::environment::{EnvironmentLocator, HostContext, ServiceEndpoint};
use crate::errors::{ExplorerError, Result};
use crate::resolver::HostSupplier;
use crate::transport::{HttpTransport, ReqwestTransport};

/// Path of the swap snapshot resource.
const SWAP_PATH: &str = "/explorer/swap";

/// Opaque aggregate pool/price data for dashboards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SwapSnapshot(Value);

impl SwapSnapshot {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_inner(self) -> Value {
        self.0
    }

    /// Top-level field lookup.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}

pub struct MarketQuery<T = ReqwestTransport> {
    locator: EnvironmentLocator,
    host: HostSupplier,
    transport: T,
    oracle: Arc<dyn PriceProvider>,
}

impl MarketQuery<ReqwestTransport> {
    /// Query over reqwest. The oracle shares the transport's client.
    pub fn new(config: &ExplorerConfig) -> Self {
        let transport = ReqwestTransport::new(config.request_timeout());
        let oracle =
            ExchangeRatesProvider::with_client(&config.oracle_url, transport.client().clone());
        Self::from_parts(config, transport, Arc::new(oracle))
    }
}

impl<T: HttpTransport> MarketQuery<T> {
    pub fn with_transport(config: &ExplorerConfig, transport: T) -> Self {
        let oracle =
            ExchangeRatesProvider::with_timeout(&config.oracle_url, config.request_timeout());
        Self::from_parts(config, transport, Arc::new(oracle))
    }

    fn from_parts(config: &ExplorerConfig, transport: T, oracle: Arc<dyn PriceProvider>) -> Self {
        Self {
            locator: EnvironmentLocator::new(&config.base_url, config.ports.clone()),
            host: Arc::new(HostContext::from_env),
            transport,
            oracle,
        }
    }

    pub fn with_oracle(mut self, oracle: Arc<dyn PriceProvider>) -> Self {
        self.oracle = oracle;
        self
    }

    pub fn with_host_context(self, host: HostContext) -> Self {
        self.with_host_supplier(move || host.clone())
    }

    pub fn with_host_supplier<F>(mut self, supplier: F) -> Self
    where
        F: Fn() -> HostContext + Send + Sync + 'static,
    {
        self.host = Arc::new(supplier);
        self
    }

    /// Id of the oracle backing [`quote_price`](Self::quote_price).
    pub fn oracle_id(&self) -> &'static str {
        self.oracle.id()
    }

    pub fn endpoint(&self) -> ServiceEndpoint {
        self.locator.base_url(&(self.host)())
    }

    /// USD price of one unit of `currency` (e.g. "BTC", "ETH").
    pub async fn quote_price(&self, currency: &str) -> Result<Decimal> {
        self.oracle
            .get_usd_rate(currency)
            .await
            .map(|quote| quote.price)
            .map_err(|e| {
                ExplorerError::from_market_data(format!("{}:{}", self.oracle.id(), currency), e)
            })
    }

    /// Swap snapshot for the current environment, or `None` if it could not
    /// be fetched or parsed.
    pub async fn fetch_swap_snapshot(&self) -> Option<SwapSnapshot> {
        let url = self.endpoint().url(SWAP_PATH);
        match self.try_fetch_swap_snapshot(&url).await {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                warn!("Swap snapshot unavailable: {}", e);
                None
            }
        }
    }

    async fn try_fetch_swap_snapshot(&self, url: &str) -> Result<SwapSnapshot> {
        self.transport.get(url).await?.into_json(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::PortTable;
    use crate::errors::FetchFailureKind;
    use async_trait::async_trait;
    use ledgerscope_market_data::{MarketDataError, Quote};
    use rust_decimal_macros::dec;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn fixed_quote(base: &str, price: Decimal) -> Quote {
        Quote::new(Default::default(), base.to_string(), "USD", price, "FIXED")
    }

    struct FixedOracle(Option<Decimal>);

    #[async_trait]
    impl PriceProvider for FixedOracle {
        fn id(&self) -> &'static str {
            "FIXED"
        }

        async fn get_rate(
            &self,
            base: &str,
            _quote: &str,
        ) -> std::result::Result<Quote, MarketDataError> {
            match self.0 {
                Some(price) => Ok(fixed_quote(base, price)),
                None => Err(MarketDataError::Timeout {
                    provider: "FIXED".to_string(),
                }),
            }
        }
    }

    fn config_for(server: &MockServer) -> ExplorerConfig {
        let port = server.address().port();
        ExplorerConfig {
            base_url: "http://127.0.0.1".to_string(),
            ports: PortTable {
                staging: port,
                test: port,
                dev: port,
                main: port,
            },
            oracle_url: server.uri(),
            request_timeout_ms: 2_000,
        }
    }

    #[tokio::test]
    async fn test_fetch_swap_snapshot() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/explorer/swap"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "central_prices": { "BTC": { "min_bid_estimated": 0.1 } },
                "pools": []
            })))
            .expect(1)
            .mount(&server)
            .await;

        let market = MarketQuery::new(&config_for(&server)).with_host_context(HostContext::new("localhost"));
        let snapshot = market.fetch_swap_snapshot().await.unwrap();

        assert_eq!(snapshot.get("pools"), Some(&json!([])));
        assert!(snapshot.as_value().get("central_prices").is_some());
    }

    #[tokio::test]
    async fn test_swap_snapshot_failure_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/explorer/swap"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let market = MarketQuery::new(&config_for(&server)).with_host_context(HostContext::new("localhost"));

        assert!(market.fetch_swap_snapshot().await.is_none());
    }

    #[tokio::test]
    async fn test_swap_snapshot_malformed_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/explorer/swap"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{truncated"))
            .mount(&server)
            .await;

        let market = MarketQuery::new(&config_for(&server)).with_host_context(HostContext::new("localhost"));

        assert!(market.fetch_swap_snapshot().await.is_none());
    }

    #[tokio::test]
    async fn test_quote_price_from_oracle() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/exchange-rates"))
            .and(query_param("currency", "ETH"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": { "currency": "ETH", "rates": { "USD": "3120.77" } }
            })))
            .mount(&server)
            .await;

        let market = MarketQuery::new(&config_for(&server));

        assert_eq!(market.quote_price("ETH").await.unwrap(), dec!(3120.77));
    }

    #[tokio::test]
    async fn test_quote_price_failure_propagates() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/exchange-rates"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let market = MarketQuery::new(&config_for(&server));
        let err = market.quote_price("BTC").await.unwrap_err();

        assert!(err.is_fetch_failure());
        assert_eq!(err.fetch_kind(), Some(FetchFailureKind::Status(500)));
    }

    #[test]
    fn test_default_oracle_is_exchange_rates() {
        let config = ExplorerConfig {
            oracle_url: "http://127.0.0.1:9/v2".to_string(),
            ..ExplorerConfig::default()
        };

        assert_eq!(MarketQuery::new(&config).oracle_id(), "EXCHANGE_RATES");
        let transport = ReqwestTransport::default();
        assert_eq!(MarketQuery::with_transport(&config, transport).oracle_id(), "EXCHANGE_RATES");
    }

    #[tokio::test]
    async fn test_custom_oracle() {
        let server = MockServer::start().await;
        let market = MarketQuery::new(&config_for(&server))
            .with_oracle(Arc::new(FixedOracle(Some(dec!(42.5)))));
        assert_eq!(market.quote_price("BTC").await.unwrap(), dec!(42.5));

        let market = MarketQuery::new(&config_for(&server)).with_oracle(Arc::new(FixedOracle(None)));
        let err = market.quote_price("BTC").await.unwrap_err();
        assert_eq!(err.fetch_kind(), Some(FetchFailureKind::Timeout));
    }
}
