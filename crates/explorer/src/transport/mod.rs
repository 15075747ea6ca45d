//! HTTP transport seam.
//!
//! The resolver only needs "GET this URL and hand me status + body". The
//! [`HttpTransport`] trait is that contract; [`ReqwestTransport`] is the
//! default implementation. Retries, if wanted, belong in a transport wrapper,
//! never in the resolver.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use serde::de::DeserializeOwned;

use crate::errors::{ExplorerError, FetchFailureKind, Result};

/// Default timeout for API requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Maximum number of body characters kept in error messages.
const ERROR_BODY_PREVIEW: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parse a 2xx body as JSON.
    ///
    /// Non-2xx statuses and unparseable bodies are both fetch failures.
    pub fn into_json<T: DeserializeOwned>(self, url: &str) -> Result<T> {
        if !self.is_success() {
            let preview: String = self.body.chars().take(ERROR_BODY_PREVIEW).collect();
            return Err(ExplorerError::fetch(
                url,
                FetchFailureKind::Status(self.status),
                format!("HTTP {}: {}", self.status, preview),
            ));
        }

        serde_json::from_str(&self.body)
            .map_err(|e| ExplorerError::fetch(url, FetchFailureKind::Decode, e))
    }
}

/// A fetch-capable HTTP client.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Issue a single GET. Transport-level failures (connect, TLS, timeout,
    /// body read) are returned as [`ExplorerError::FetchFailure`]; any HTTP
    /// status is returned as a response.
    async fn get(&self, url: &str) -> Result<HttpResponse>;
}

#[async_trait]
impl<T: HttpTransport + ?Sized> HttpTransport for Arc<T> {
    async fn get(&self, url: &str) -> Result<HttpResponse> {
        (**self).get(url).await
    }
}

/// [`HttpTransport`] over a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self { client }
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse> {
        debug!("[Explorer] GET {}", url);

        let response = self.client.get(url).send().await.map_err(|e| {
            let kind = if e.is_timeout() {
                FetchFailureKind::Timeout
            } else {
                FetchFailureKind::Transport
            };
            ExplorerError::fetch(url, kind, e)
        })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ExplorerError::fetch(url, FetchFailureKind::Transport, e))?;

        Ok(HttpResponse { status, body })
    }
}
