//! Client read-query payload types.
//!
//! The shapes exchanged between the (out-of-scope) transport and the
//! resolver layer: one request/response pair per query kind, a shared
//! [`Status`] code, and the tagged unions the dispatcher routes on.
//! Identifier fields are raw strings — caller input is untrusted until it
//! is classified against a store.

use catena_types::{Batch, Block};
use serde::{Deserialize, Serialize};

/// Response status shared by every read query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    /// The query resolved; the payload is populated.
    Ok,
    /// The request payload could not be decoded or validated, or the
    /// service itself failed. Never produced by a well-formed request
    /// against a healthy store.
    InternalError,
    /// The chain has no head yet — no origin block has been committed.
    NotReady,
    /// The caller-supplied head identifier names no stored block.
    NoRoot,
    /// Nothing the caller asked for exists within the applicable scope.
    NoResource,
    /// The identifier names a resource of the wrong kind.
    InvalidId,
}

/// The closed set of read-query kinds the dispatcher routes on.
///
/// New resource families (transactions, state entries) are added as new
/// variants with their own payload pair, never by subclassing a handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestKind {
    BatchList,
    BatchGet,
    BlockList,
    BlockGet,
}

// ── Batch queries ────────────────────────────────────────────────────────

/// List batches in chain order, optionally anchored and filtered.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct BatchListRequest {
    /// Anchor block for the query; defaults to the current chain head.
    #[serde(default)]
    pub head_id: Option<String>,
    /// Wanted batch identifiers, in the order the caller wants them back.
    /// Empty means list everything in scope.
    #[serde(default)]
    pub batch_ids: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchListResponse {
    pub status: Status,
    /// The resolved anchor; present on `Ok` and on the
    /// nothing-matched-in-scope failure past anchor resolution, never on
    /// any other status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub batches: Vec<Batch>,
}

impl BatchListResponse {
    /// Empty-payload response for a failed resolution.
    pub fn failure(status: Status, head_id: Option<String>) -> Self {
        Self {
            status,
            head_id,
            batches: Vec::new(),
        }
    }
}

/// Fetch a single batch by identifier, independent of chain position.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BatchGetRequest {
    pub batch_id: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchGetResponse {
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch: Option<Batch>,
}

impl BatchGetResponse {
    /// Empty-payload response for a failed resolution.
    pub fn failure(status: Status) -> Self {
        Self {
            status,
            batch: None,
        }
    }
}

// ── Block queries ────────────────────────────────────────────────────────

/// List blocks newest-first, optionally anchored and filtered.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct BlockListRequest {
    /// Anchor block for the query; defaults to the current chain head.
    #[serde(default)]
    pub head_id: Option<String>,
    /// Wanted block identifiers, in the order the caller wants them back.
    /// Empty means list everything in scope.
    #[serde(default)]
    pub block_ids: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockListResponse {
    pub status: Status,
    /// The resolved anchor; present on `Ok` and on the
    /// nothing-matched-in-scope failure past anchor resolution, never on
    /// any other status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub blocks: Vec<Block>,
}

impl BlockListResponse {
    /// Empty-payload response for a failed resolution.
    pub fn failure(status: Status, head_id: Option<String>) -> Self {
        Self {
            status,
            head_id,
            blocks: Vec::new(),
        }
    }
}

/// Fetch a single block by identifier, independent of chain position.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BlockGetRequest {
    pub block_id: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockGetResponse {
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block: Option<Block>,
}

impl BlockGetResponse {
    /// Empty-payload response for a failed resolution.
    pub fn failure(status: Status) -> Self {
        Self {
            status,
            block: None,
        }
    }
}

// ── Dispatch unions ──────────────────────────────────────────────────────

/// A decoded read request, tagged by kind.
#[derive(Clone, Debug)]
pub enum ClientRequest {
    BatchList(BatchListRequest),
    BatchGet(BatchGetRequest),
    BlockList(BlockListRequest),
    BlockGet(BlockGetRequest),
}

impl ClientRequest {
    /// The kind tag the dispatcher routes on.
    pub fn kind(&self) -> RequestKind {
        match self {
            ClientRequest::BatchList(_) => RequestKind::BatchList,
            ClientRequest::BatchGet(_) => RequestKind::BatchGet,
            ClientRequest::BlockList(_) => RequestKind::BlockList,
            ClientRequest::BlockGet(_) => RequestKind::BlockGet,
        }
    }
}

/// A resolved read response, tagged by kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClientResponse {
    BatchList(BatchListResponse),
    BatchGet(BatchGetResponse),
    BlockList(BlockListResponse),
    BlockGet(BlockGetResponse),
}

impl ClientResponse {
    /// The kind of request this response answers.
    pub fn kind(&self) -> RequestKind {
        match self {
            ClientResponse::BatchList(_) => RequestKind::BatchList,
            ClientResponse::BatchGet(_) => RequestKind::BatchGet,
            ClientResponse::BlockList(_) => RequestKind::BlockList,
            ClientResponse::BlockGet(_) => RequestKind::BlockGet,
        }
    }

    /// The status carried by any response variant.
    pub fn status(&self) -> Status {
        match self {
            ClientResponse::BatchList(r) => r.status,
            ClientResponse::BatchGet(r) => r.status,
            ClientResponse::BlockList(r) => r.status,
            ClientResponse::BlockGet(r) => r.status,
        }
    }

    /// The empty `INTERNAL_ERROR` response for a request kind — the shape
    /// answered when a payload cannot be decoded, the dispatcher is handed
    /// a mismatched variant, or resolution fails outside the request
    /// taxonomy. Carries no payload and no anchor.
    pub fn internal_error(kind: RequestKind) -> Self {
        match kind {
            RequestKind::BatchList => ClientResponse::BatchList(BatchListResponse::failure(
                Status::InternalError,
                None,
            )),
            RequestKind::BatchGet => {
                ClientResponse::BatchGet(BatchGetResponse::failure(Status::InternalError))
            }
            RequestKind::BlockList => ClientResponse::BlockList(BlockListResponse::failure(
                Status::InternalError,
                None,
            )),
            RequestKind::BlockGet => {
                ClientResponse::BlockGet(BlockGetResponse::failure(Status::InternalError))
            }
        }
    }
}
