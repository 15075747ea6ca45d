//! Query contract exposed to the UI layer.

use async_trait::async_trait;

use crate::envelope::ResolvedResource;
use crate::environment::ServiceEndpoint;
use crate::errors::Result;
use crate::models::Pagination;

/// Resolve an identifier typed into the explorer search box.
///
/// Implementations must:
/// - reject explicit negative offsets / non-positive limits with
///   `InvalidPagination` before any I/O,
/// - return `Ok(NotFound(identifier))` when the service knows nothing about
///   the identifier,
/// - return `FetchFailure` when the request fails or the answer is unreadable.
#[async_trait]
pub trait HashSearch: Send + Sync {
    /// # Arguments
    ///
    /// * `identifier` - Opaque, user-supplied hash / address / key
    /// * `pagination` - Paging for list-shaped payloads (defaults: offset 0, limit 25)
    /// * `endpoint_override` - Skip environment detection and use this endpoint
    async fn resolve(
        &self,
        identifier: &str,
        pagination: Option<Pagination>,
        endpoint_override: Option<ServiceEndpoint>,
    ) -> Result<ResolvedResource>;
}
