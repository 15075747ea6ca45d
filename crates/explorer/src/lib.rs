//! Ledgerscope Explorer Client
//!
//! Resolves an opaque identifier typed into the block explorer (a transaction
//! hash, an address, a peer or node key, an external txid, ...) into the kind
//! of ledger resource it names, and fetches the detail for it from the
//! explorer service of the deployment the client runs under.
//!
//! # Architecture
//!
//! ```text
//!  UI ──> HashSearch::resolve(identifier, pagination)
//!              │
//!              ├──> EnvironmentLocator::base_url(host)   (host → port)
//!              │
//!              ├──> HttpTransport::get(/explorer/hash/{id}?offset&limit)
//!              │
//!              └──> envelope::classify(body)  ──> ResolvedResource
//!
//!  Dashboard ──> MarketQuery::{quote_price, fetch_swap_snapshot}
//! ```
//!
//! # Core Types
//!
//! - [`ExplorerClient`] / [`HashSearch`] - The identifier resolution contract
//! - [`ResolvedResource`] - Tagged result, including `NotFound`
//! - [`EnvironmentLocator`] / [`HostContext`] - Host → service endpoint
//! - [`MarketQuery`] - Price quotes and the swap snapshot
//! - [`ExplorerConfig`] - Base URL, port table, oracle and timeout settings
//! - [`ExplorerError`] - `FetchFailure` and `InvalidPagination`

pub mod config;
pub mod envelope;
pub mod environment;
pub mod errors;
pub mod market;
pub mod models;
pub mod resolver;
pub mod transport;

pub use config::ExplorerConfig;
pub use envelope::{classify, ResolvedResource, ResourceEnvelope, ResourceKind};
pub use environment::{
    DeploymentEnvironment, EnvironmentLocator, HostContext, PortTable, ServiceEndpoint,
};
pub use errors::{ExplorerError, FetchFailureKind, Result};
pub use market::{MarketQuery, SwapSnapshot};
pub use models::{Pagination, PaginationWindow};
pub use resolver::{hash_url, ExplorerClient, HashSearch, HostSupplier};
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport};
