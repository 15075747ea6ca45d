//! Environment Locator.
//!
//! Maps the host the client is running under (a browser origin, an embedding
//! application's configured host, ...) to the explorer service endpoint of the
//! matching deployment. The host is always passed in as a [`HostContext`]
//! value; nothing here reads ambient state.
//!
//! # Marker precedence
//!
//! The host name is matched by case-sensitive substring containment, first
//! match wins:
//!
//! | Marker in host | Environment |
//! |----------------|-------------|
//! | `staging` | [`DeploymentEnvironment::Staging`] |
//! | `test` | [`DeploymentEnvironment::Test`] |
//! | `dev`, `localhost` | [`DeploymentEnvironment::Dev`] |
//! | (none) | [`DeploymentEnvironment::Main`] |

use serde::{Deserialize, Serialize};

/// Environment variable read by [`HostContext::from_env`].
pub const HOST_ENV_VAR: &str = "EXPLORER_HOST";

/// Ordered marker table; see the module docs.
const ENVIRONMENT_MARKERS: [(&str, DeploymentEnvironment); 4] = [
    ("staging", DeploymentEnvironment::Staging),
    ("test", DeploymentEnvironment::Test),
    ("dev", DeploymentEnvironment::Dev),
    ("localhost", DeploymentEnvironment::Dev),
];

/// The runtime host the client is embedded in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct HostContext {
    host: String,
}

impl HostContext {
    pub fn new(host: impl Into<String>) -> Self {
        Self { host: host.into() }
    }

    /// Default supplier for production use: the `EXPLORER_HOST` variable,
    /// or an empty host (which selects mainnet) when it is unset.
    pub fn from_env() -> Self {
        Self::new(std::env::var(HOST_ENV_VAR).unwrap_or_default())
    }

    pub fn host(&self) -> &str {
        &self.host
    }
}

/// Deployment a host belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentEnvironment {
    Staging,
    Test,
    Dev,
    Main,
}

impl DeploymentEnvironment {
    /// Select the deployment for a host name. Never fails: hosts without a
    /// marker are mainnet.
    pub fn from_host(host: &str) -> Self {
        ENVIRONMENT_MARKERS
            .iter()
            .find(|(marker, _)| host.contains(marker))
            .map(|(_, env)| *env)
            .unwrap_or(Self::Main)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Staging => "staging",
            Self::Test => "test",
            Self::Dev => "dev",
            Self::Main => "main",
        }
    }
}

/// Explorer API port per deployment.
///
/// Defaults are each network's port offset plus the explorer API slot (6).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortTable {
    pub staging: u16,
    pub test: u16,
    pub dev: u16,
    pub main: u16,
}

impl Default for PortTable {
    fn default() -> Self {
        Self {
            staging: 16386,
            test: 16286,
            dev: 16486,
            main: 16186,
        }
    }
}

impl PortTable {
    pub fn port_for(&self, environment: DeploymentEnvironment) -> u16 {
        match environment {
            DeploymentEnvironment::Staging => self.staging,
            DeploymentEnvironment::Test => self.test,
            DeploymentEnvironment::Dev => self.dev,
            DeploymentEnvironment::Main => self.main,
        }
    }
}

/// Scheme + host prefix and the port of the explorer service.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServiceEndpoint {
    base: String,
    port: u16,
}

impl ServiceEndpoint {
    /// `base` is a scheme and host such as `https://explorer.example.com`.
    pub fn new(base: &str, port: u16) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
            port,
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Render `{base}:{port}{path}`. `path` must start with `/`.
    pub fn url(&self, path: &str) -> String {
        format!("{}:{}{}", self.base, self.port, path)
    }
}

/// Pure mapping from a [`HostContext`] to a [`ServiceEndpoint`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentLocator {
    base: String,
    ports: PortTable,
}

impl EnvironmentLocator {
    pub fn new(base: &str, ports: PortTable) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
            ports,
        }
    }

    pub fn ports(&self) -> &PortTable {
        &self.ports
    }

    pub fn environment(&self, host: &HostContext) -> DeploymentEnvironment {
        DeploymentEnvironment::from_host(host.host())
    }

    /// Endpoint for the deployment `host` belongs to. Computed fresh on every
    /// call.
    pub fn base_url(&self, host: &HostContext) -> ServiceEndpoint {
        let environment = self.environment(host);
        let endpoint = ServiceEndpoint::new(&self.base, self.ports.port_for(environment));
        log::debug!(
            "Host '{}' maps to {} explorer at {}:{}",
            host.host(),
            environment.as_str(),
            endpoint.base(),
            endpoint.port()
        );
        endpoint
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locator() -> EnvironmentLocator {
        EnvironmentLocator::new(
            "https://explorer.example.com",
            PortTable {
                staging: 1001,
                test: 1002,
                dev: 1003,
                main: 1004,
            },
        )
    }

    #[test]
    fn test_marker_selection() {
        let cases = [
            ("staging.explorer.example.com", DeploymentEnvironment::Staging),
            ("test.explorer.example.com", DeploymentEnvironment::Test),
            ("dev.explorer.example.com", DeploymentEnvironment::Dev),
            ("localhost", DeploymentEnvironment::Dev),
            ("localhost:3000", DeploymentEnvironment::Dev),
            ("explorer.example.com", DeploymentEnvironment::Main),
            ("", DeploymentEnvironment::Main),
        ];
        for (host, expected) in cases {
            assert_eq!(DeploymentEnvironment::from_host(host), expected, "{host}");
        }
    }

    #[test]
    fn test_marker_order() {
        // staging is checked before test
        assert_eq!(
            DeploymentEnvironment::from_host("test-staging.example.com"),
            DeploymentEnvironment::Staging
        );
        // test is checked before dev
        assert_eq!(
            DeploymentEnvironment::from_host("dev-test.example.com"),
            DeploymentEnvironment::Test
        );
    }

    #[test]
    fn test_marker_match_is_case_sensitive() {
        assert_eq!(
            DeploymentEnvironment::from_host("STAGING.example.com"),
            DeploymentEnvironment::Main
        );
    }

    #[test]
    fn test_base_url_uses_port_table() {
        let locator = locator();

        let staging = locator.base_url(&HostContext::new("staging.explorer.example.com"));
        assert_eq!(staging.port(), 1001);
        assert_eq!(staging.base(), "https://explorer.example.com");

        let dev = locator.base_url(&HostContext::new("localhost"));
        assert_eq!(dev.port(), 1003);

        let main = locator.base_url(&HostContext::new("explorer.example.com"));
        assert_eq!(main.port(), 1004);
    }

    #[test]
    fn test_default_ports_are_distinct() {
        let ports = PortTable::default();
        let mut all = vec![ports.staging, ports.test, ports.dev, ports.main];
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), 4);
    }

    #[test]
    fn test_endpoint_url() {
        let endpoint = ServiceEndpoint::new("http://127.0.0.1/", 8080);
        assert_eq!(
            endpoint.url("/explorer/swap"),
            "http://127.0.0.1:8080/explorer/swap"
        );
    }

    #[test]
    fn test_port_table_partial_deserialize() {
        let ports: PortTable = serde_json::from_str(r#"{"dev": 9000}"#).unwrap();
        assert_eq!(ports.dev, 9000);
        assert_eq!(ports.main, PortTable::default().main);
    }
}
