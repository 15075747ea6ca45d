//! Resource Envelope Decoder.
//!
//! The explorer answers a hash lookup with a JSON object carrying at most one
//! populated resource key. The decoder turns it into a [`ResolvedResource`]
//! by checking the keys in a fixed order, so a response that populates more
//! than one key still resolves deterministically:
//!
//! ```text
//! transaction > address > observation > peer > peer_node > external_txid_info
//! ```
//!
//! No populated key is a normal outcome and yields
//! [`ResolvedResource::NotFound`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The resource kinds a hash can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Transaction,
    Address,
    Observation,
    Peer,
    PeerNode,
    ExternalTxidInfo,
}

impl ResourceKind {
    /// Classification order. Earlier kinds win when several keys are set.
    pub const PRECEDENCE: [ResourceKind; 6] = [
        ResourceKind::Transaction,
        ResourceKind::Address,
        ResourceKind::Observation,
        ResourceKind::Peer,
        ResourceKind::PeerNode,
        ResourceKind::ExternalTxidInfo,
    ];

    /// JSON key carrying this kind in a response envelope.
    pub fn key(self) -> &'static str {
        match self {
            Self::Transaction => "transaction",
            Self::Address => "address",
            Self::Observation => "observation",
            Self::Peer => "peer",
            Self::PeerNode => "peer_node",
            Self::ExternalTxidInfo => "external_txid_info",
        }
    }
}

/// Raw decoded response body of a hash lookup.
///
/// Only a JSON object decodes; arrays, scalars and `null` are rejected.
/// `null` and absent keys both become `None`; unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct ResourceEnvelope {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observation: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peer: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peer_node: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_txid_info: Option<Value>,
}

impl From<Map<String, Value>> for ResourceEnvelope {
    fn from(mut body: Map<String, Value>) -> Self {
        let mut field = |kind: ResourceKind| body.remove(kind.key()).filter(|v| !v.is_null());
        Self {
            transaction: field(ResourceKind::Transaction),
            address: field(ResourceKind::Address),
            observation: field(ResourceKind::Observation),
            peer: field(ResourceKind::Peer),
            peer_node: field(ResourceKind::PeerNode),
            external_txid_info: field(ResourceKind::ExternalTxidInfo),
        }
    }
}

impl ResourceEnvelope {
    pub fn from_value(value: Value) -> serde_json::Result<Self> {
        serde_json::from_value(value)
    }

    pub fn payload(&self, kind: ResourceKind) -> Option<&Value> {
        self.slot(kind).as_ref()
    }

    /// Kinds with a payload, in precedence order.
    pub fn populated(&self) -> Vec<ResourceKind> {
        ResourceKind::PRECEDENCE
            .into_iter()
            .filter(|kind| self.payload(*kind).is_some())
            .collect()
    }

    fn slot(&self, kind: ResourceKind) -> &Option<Value> {
        match kind {
            ResourceKind::Transaction => &self.transaction,
            ResourceKind::Address => &self.address,
            ResourceKind::Observation => &self.observation,
            ResourceKind::Peer => &self.peer,
            ResourceKind::PeerNode => &self.peer_node,
            ResourceKind::ExternalTxidInfo => &self.external_txid_info,
        }
    }

    fn take(&mut self, kind: ResourceKind) -> Option<Value> {
        match kind {
            ResourceKind::Transaction => self.transaction.take(),
            ResourceKind::Address => self.address.take(),
            ResourceKind::Observation => self.observation.take(),
            ResourceKind::Peer => self.peer.take(),
            ResourceKind::PeerNode => self.peer_node.take(),
            ResourceKind::ExternalTxidInfo => self.external_txid_info.take(),
        }
    }
}

/// Outcome of resolving an identifier. Built fresh per lookup and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedResource {
    Transaction(Value),
    Address(Value),
    Observation(Value),
    Peer(Value),
    PeerNode(Value),
    ExternalTxidInfo(Value),
    /// Nothing matched; carries the identifier that was looked up.
    NotFound(String),
}

impl ResolvedResource {
    fn from_kind(kind: ResourceKind, payload: Value) -> Self {
        match kind {
            ResourceKind::Transaction => Self::Transaction(payload),
            ResourceKind::Address => Self::Address(payload),
            ResourceKind::Observation => Self::Observation(payload),
            ResourceKind::Peer => Self::Peer(payload),
            ResourceKind::PeerNode => Self::PeerNode(payload),
            ResourceKind::ExternalTxidInfo => Self::ExternalTxidInfo(payload),
        }
    }

    /// `None` for [`NotFound`](Self::NotFound).
    pub fn kind(&self) -> Option<ResourceKind> {
        match self {
            Self::Transaction(_) => Some(ResourceKind::Transaction),
            Self::Address(_) => Some(ResourceKind::Address),
            Self::Observation(_) => Some(ResourceKind::Observation),
            Self::Peer(_) => Some(ResourceKind::Peer),
            Self::PeerNode(_) => Some(ResourceKind::PeerNode),
            Self::ExternalTxidInfo(_) => Some(ResourceKind::ExternalTxidInfo),
            Self::NotFound(_) => None,
        }
    }

    pub fn payload(&self) -> Option<&Value> {
        match self {
            Self::Transaction(v)
            | Self::Address(v)
            | Self::Observation(v)
            | Self::Peer(v)
            | Self::PeerNode(v)
            | Self::ExternalTxidInfo(v) => Some(v),
            Self::NotFound(_) => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Label for logs: the envelope key, or `not_found`.
    pub fn label(&self) -> &'static str {
        self.kind().map(ResourceKind::key).unwrap_or("not_found")
    }

    /// Decode the payload into one of the typed views in [`crate::models`].
    ///
    /// Returns `None` for `NotFound`.
    pub fn decode<T: DeserializeOwned>(&self) -> Option<serde_json::Result<T>> {
        self.payload().map(|v| T::deserialize(v))
    }
}

/// Classify an envelope. Never fails.
pub fn classify(mut envelope: ResourceEnvelope, identifier: &str) -> ResolvedResource {
    for kind in ResourceKind::PRECEDENCE {
        if let Some(payload) = envelope.take(kind) {
            return ResolvedResource::from_kind(kind, payload);
        }
    }
    ResolvedResource::NotFound(identifier.to_string())
}
