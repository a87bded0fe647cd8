//! Batch query resolvers.

use std::sync::Arc;

use catena_messages::{
    BatchGetResponse, BatchListResponse, ClientRequest, ClientResponse, RequestKind, Status,
};
use catena_store::ChainStore;
use catena_types::{Batch, BatchId, BlockId};
use tracing::{debug, warn};

use crate::{
    collect_batches, filter_by_ids, resolve_anchor, ChainWalk, ClientResolver, QueryError,
};

/// Lists batches in chain order: anchor, walk, flatten, filter.
pub struct BatchListResolver {
    store: Arc<dyn ChainStore + Send + Sync>,
}

impl BatchListResolver {
    pub fn new(store: Arc<dyn ChainStore + Send + Sync>) -> Self {
        Self { store }
    }

    /// The anchor id (once resolution got that far) and the batches in
    /// scope, restricted to `batch_ids` when non-empty.
    fn list(
        &self,
        head_id: Option<&str>,
        batch_ids: &[String],
    ) -> (Option<String>, Result<Vec<Batch>, QueryError>) {
        let anchor = match resolve_anchor(self.store.as_ref(), head_id) {
            Ok(block) => block,
            Err(e) => return (None, Err(e)),
        };
        let anchor_id = anchor.id.to_string();
        let collected = collect_batches(ChainWalk::new(self.store.as_ref(), anchor))
            .and_then(|batches| filter_by_ids(batches, batch_ids));
        (Some(anchor_id), collected)
    }
}

impl ClientResolver for BatchListResolver {
    fn kind(&self) -> RequestKind {
        RequestKind::BatchList
    }

    fn resolve(&self, request: &ClientRequest) -> ClientResponse {
        let ClientRequest::BatchList(req) = request else {
            return ClientResponse::internal_error(self.kind());
        };
        match self.list(req.head_id.as_deref(), &req.batch_ids) {
            (head_id, Ok(batches)) => {
                debug!(
                    head = head_id.as_deref().unwrap_or(""),
                    returned = batches.len(),
                    "batch list resolved"
                );
                ClientResponse::BatchList(BatchListResponse {
                    status: Status::Ok,
                    head_id,
                    batches,
                })
            }
            // Broken links and backend faults fall outside the request
            // taxonomy; they answer the same empty shape as every other
            // internal failure, resolved anchor included.
            (_, Err(e)) if e.status() == Status::InternalError => {
                warn!(error = %e, "batch list failed internally");
                ClientResponse::internal_error(self.kind())
            }
            (head_id, Err(e)) => {
                debug!(status = ?e.status(), error = %e, "batch list failed");
                ClientResponse::BatchList(BatchListResponse::failure(e.status(), head_id))
            }
        }
    }
}

/// Fetches one batch by identifier, independent of chain scope.
pub struct BatchGetResolver {
    store: Arc<dyn ChainStore + Send + Sync>,
}

impl BatchGetResolver {
    pub fn new(store: Arc<dyn ChainStore + Send + Sync>) -> Self {
        Self { store }
    }

    fn get(&self, id: &str) -> Result<Batch, QueryError> {
        // A block identifier is a caller mistake, classified before the
        // lookup can conclude plain absence.
        if self.store.contains_block_id(&BlockId::new(id))? {
            return Err(QueryError::InvalidId(id.to_owned()));
        }
        self.store
            .get_batch(&BatchId::new(id))?
            .ok_or(QueryError::NoResource)
    }
}

impl ClientResolver for BatchGetResolver {
    fn kind(&self) -> RequestKind {
        RequestKind::BatchGet
    }

    fn resolve(&self, request: &ClientRequest) -> ClientResponse {
        let ClientRequest::BatchGet(req) = request else {
            return ClientResponse::internal_error(self.kind());
        };
        ClientResponse::BatchGet(match self.get(&req.batch_id) {
            Ok(batch) => {
                debug!(batch = %batch.id, "batch get resolved");
                BatchGetResponse {
                    status: Status::Ok,
                    batch: Some(batch),
                }
            }
            Err(e) => {
                debug!(batch = %req.batch_id, status = ?e.status(), "batch get failed");
                BatchGetResponse::failure(e.status())
            }
        })
    }
}
