//! Explorer models
//!
//! - `pagination` - Caller paging input and the validated window sent on the wire
//! - `resources` - Typed views of the detailed resources the explorer returns

mod pagination;
mod resources;

pub use pagination::{Pagination, PaginationWindow, DEFAULT_LIMIT, DEFAULT_OFFSET};
pub use resources::{
    BriefTransaction, BriefUtxoEntry, DetailedAddress, DetailedInput, DetailedObservation,
    DetailedObservationMetadata, DetailedOutput, DetailedPartyEvent, DetailedPeer,
    DetailedPeerNode, DetailedTransaction, DetailedTrust, ExternalTxidInfo, NodeSignerDetailed,
    PeerSignerDetailed, TransactionSwapInfo,
};
