//! Client configuration.
//!
//! Values come from the embedding application (`ExplorerConfig` is serde
//! friendly) or from the process environment, with `.env` support through
//! `dotenvy`.

use std::str::FromStr;
use std::time::Duration;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::environment::PortTable;
use crate::errors::{ExplorerError, Result};

/// Production explorer base (scheme + host) used when none is configured.
pub const DEFAULT_BASE_URL: &str = "https://explorer.ledgerscope.io";

pub use ledgerscope_market_data::provider::exchange_rates::DEFAULT_ORACLE_URL;

const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Scheme and host of the explorer service, without a port.
    pub base_url: String,
    pub ports: PortTable,
    /// Base of the price oracle serving `/exchange-rates`.
    pub oracle_url: String,
    pub request_timeout_ms: u64,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            ports: PortTable::default(),
            oracle_url: DEFAULT_ORACLE_URL.to_string(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }
}

impl ExplorerConfig {
    /// Load from the environment, falling back to defaults for unset or
    /// unparseable values.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        // Lenient mode only warns, so this cannot fail.
        Self::load(|key| std::env::var(key).ok(), false).unwrap_or_default()
    }

    /// Load from the environment, rejecting values that do not parse.
    pub fn try_from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Strictly load from an arbitrary key lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::load(lookup, true)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    fn load<F>(lookup: F, strict: bool) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let ports = PortTable {
            staging: parse_var(&lookup, "EXPLORER_PORT_STAGING", defaults.ports.staging, strict)?,
            test: parse_var(&lookup, "EXPLORER_PORT_TEST", defaults.ports.test, strict)?,
            dev: parse_var(&lookup, "EXPLORER_PORT_DEV", defaults.ports.dev, strict)?,
            main: parse_var(&lookup, "EXPLORER_PORT_MAIN", defaults.ports.main, strict)?,
        };

        Ok(Self {
            base_url: lookup("EXPLORER_BASE_URL")
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(defaults.base_url),
            ports,
            oracle_url: lookup("EXPLORER_ORACLE_URL")
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(defaults.oracle_url),
            request_timeout_ms: parse_var(
                &lookup,
                "EXPLORER_REQUEST_TIMEOUT_MS",
                defaults.request_timeout_ms,
                strict,
            )?,
        })
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T, strict: bool) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + std::fmt::Display,
{
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };
    match raw.trim().parse::<T>() {
        Ok(value) => Ok(value),
        Err(_) if strict => Err(ExplorerError::InvalidConfig(format!("{}={}", key, raw))),
        Err(_) => {
            warn!("Ignoring invalid {}='{}', using {}", key, raw, default);
            Ok(default)
        }
    }
}
