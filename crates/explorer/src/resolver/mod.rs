//! Hash Resolver.
//!
//! Turns a user-typed identifier into a [`ResolvedResource`]:
//!
//! ```text
//! identifier + Pagination
//!        |  validate / default (offset 0, limit 25)
//!        v
//! EnvironmentLocator::base_url(host)   (unless an endpoint override is given)
//!        |
//!        v
//! GET {base}:{port}/explorer/hash/{identifier}?offset=..&limit=..
//!        |
//!        v
//! classify(envelope)  ->  ResolvedResource | NotFound
//! ```
//!
//! A failed request is an error; an unknown identifier is `NotFound`. The two
//! are never conflated. Each call builds its own endpoint and request, so
//! concurrent calls need no coordination (and are not deduplicated).

mod traits;

pub use traits::HashSearch;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;

use crate::config::ExplorerConfig;
use crate::envelope::{classify, ResolvedResource, ResourceEnvelope};
use crate::environment::{EnvironmentLocator, HostContext, ServiceEndpoint};
use crate::errors::{ExplorerError, FetchFailureKind, Result};
use crate::models::{Pagination, PaginationWindow};
use crate::transport::{HttpTransport, ReqwestTransport};

/// Produces the current host context. Called once per request.
pub type HostSupplier = Arc<dyn Fn() -> HostContext + Send + Sync>;

/// Path prefix of the hash lookup resource.
const HASH_PATH: &str = "/explorer/hash/";

/// Render the lookup URL. The identifier is percent-encoded as a single path
/// segment; offset and limit are the only query parameters.
pub fn hash_url(endpoint: &ServiceEndpoint, identifier: &str, window: &PaginationWindow) -> String {
    endpoint.url(&format!(
        "{}{}?{}",
        HASH_PATH,
        urlencoding::encode(identifier),
        window.query_string()
    ))
}

/// Explorer service client implementing [`HashSearch`].
///
/// # Example
///
/// ```ignore
/// use ledgerscope_explorer::{ExplorerClient, ExplorerConfig, HashSearch, HostContext};
///
/// let client = ExplorerClient::new(&ExplorerConfig::from_env())
///     .with_host_context(HostContext::new("staging.explorer.example.com"));
/// let resolved = client.resolve("a1b2c3", None, None).await?;
/// ```
pub struct ExplorerClient<T = ReqwestTransport> {
    locator: EnvironmentLocator,
    host: HostSupplier,
    transport: T,
}

impl ExplorerClient<ReqwestTransport> {
    /// Client over reqwest, using the configured request timeout.
    pub fn new(config: &ExplorerConfig) -> Self {
        Self::with_transport(config, ReqwestTransport::new(config.request_timeout()))
    }
}

impl<T: HttpTransport> ExplorerClient<T> {
    /// Client over a caller-provided transport. The host context defaults to
    /// [`HostContext::from_env`].
    pub fn with_transport(config: &ExplorerConfig, transport: T) -> Self {
        Self {
            locator: EnvironmentLocator::new(&config.base_url, config.ports.clone()),
            host: Arc::new(HostContext::from_env),
            transport,
        }
    }

    /// Pin the host context to a fixed value.
    pub fn with_host_context(self, host: HostContext) -> Self {
        self.with_host_supplier(move || host.clone())
    }

    /// Read the host context from `supplier` on every request.
    pub fn with_host_supplier<F>(mut self, supplier: F) -> Self
    where
        F: Fn() -> HostContext + Send + Sync + 'static,
    {
        self.host = Arc::new(supplier);
        self
    }

    pub fn locator(&self) -> &EnvironmentLocator {
        &self.locator
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Endpoint for the current host context.
    pub fn endpoint(&self) -> ServiceEndpoint {
        self.locator.base_url(&(self.host)())
    }

    /// Like [`HashSearch::resolve`], but gives up after `timeout` with a
    /// `FetchFailure { kind: Timeout }`. Nothing is left behind on expiry.
    pub async fn resolve_with_timeout(
        &self,
        identifier: &str,
        pagination: Option<Pagination>,
        timeout: Duration,
    ) -> Result<ResolvedResource> {
        let url = self.request_url(identifier, pagination, None)?;
        let envelope = tokio::time::timeout(timeout, self.fetch_envelope(&url))
            .await
            .map_err(|e| ExplorerError::fetch(url.as_str(), FetchFailureKind::Timeout, e))??;
        Ok(Self::finish(envelope, identifier))
    }

    fn request_url(
        &self,
        identifier: &str,
        pagination: Option<Pagination>,
        endpoint_override: Option<ServiceEndpoint>,
    ) -> Result<String> {
        let window = pagination.unwrap_or_default().window()?;
        let endpoint = endpoint_override.unwrap_or_else(|| self.endpoint());
        Ok(hash_url(&endpoint, identifier, &window))
    }

    async fn fetch_envelope(&self, url: &str) -> Result<ResourceEnvelope> {
        self.transport.get(url).await?.into_json(url)
    }

    fn finish(envelope: ResourceEnvelope, identifier: &str) -> ResolvedResource {
        let resolved = classify(envelope, identifier);
        debug!("Resolved '{}' as {}", identifier, resolved.label());
        resolved
    }
}

#[async_trait]
impl<T: HttpTransport> HashSearch for ExplorerClient<T> {
    async fn resolve(
        &self,
        identifier: &str,
        pagination: Option<Pagination>,
        endpoint_override: Option<ServiceEndpoint>,
    ) -> Result<ResolvedResource> {
        let url = self.request_url(identifier, pagination, endpoint_override)?;
        let envelope = self.fetch_envelope(&url).await?;
        Ok(Self::finish(envelope, identifier))
    }
}
