//! Block query resolvers.

use std::sync::Arc;

use catena_messages::{
    BlockGetResponse, BlockListResponse, ClientRequest, ClientResponse, RequestKind, Status,
};
use catena_store::ChainStore;
use catena_types::{BatchId, Block, BlockId};
use tracing::{debug, warn};

use crate::{
    collect_blocks, filter_by_ids, resolve_anchor, ChainWalk, ClientResolver, QueryError,
};

/// Lists blocks newest-first: anchor, walk, filter.
pub struct BlockListResolver {
    store: Arc<dyn ChainStore + Send + Sync>,
}

impl BlockListResolver {
    pub fn new(store: Arc<dyn ChainStore + Send + Sync>) -> Self {
        Self { store }
    }

    fn list(
        &self,
        head_id: Option<&str>,
        block_ids: &[String],
    ) -> (Option<String>, Result<Vec<Block>, QueryError>) {
        let anchor = match resolve_anchor(self.store.as_ref(), head_id) {
            Ok(block) => block,
            Err(e) => return (None, Err(e)),
        };
        let anchor_id = anchor.id.to_string();
        let collected = collect_blocks(ChainWalk::new(self.store.as_ref(), anchor))
            .and_then(|blocks| filter_by_ids(blocks, block_ids));
        (Some(anchor_id), collected)
    }
}

impl ClientResolver for BlockListResolver {
    fn kind(&self) -> RequestKind {
        RequestKind::BlockList
    }

    fn resolve(&self, request: &ClientRequest) -> ClientResponse {
        let ClientRequest::BlockList(req) = request else {
            return ClientResponse::internal_error(self.kind());
        };
        match self.list(req.head_id.as_deref(), &req.block_ids) {
            (head_id, Ok(blocks)) => {
                debug!(
                    head = head_id.as_deref().unwrap_or(""),
                    returned = blocks.len(),
                    "block list resolved"
                );
                ClientResponse::BlockList(BlockListResponse {
                    status: Status::Ok,
                    head_id,
                    blocks,
                })
            }
            // Broken links and backend faults fall outside the request
            // taxonomy; they answer the same empty shape as every other
            // internal failure, resolved anchor included.
            (_, Err(e)) if e.status() == Status::InternalError => {
                warn!(error = %e, "block list failed internally");
                ClientResponse::internal_error(self.kind())
            }
            (head_id, Err(e)) => {
                debug!(status = ?e.status(), error = %e, "block list failed");
                ClientResponse::BlockList(BlockListResponse::failure(e.status(), head_id))
            }
        }
    }
}

/// Fetches one block by identifier, independent of chain scope.
pub struct BlockGetResolver {
    store: Arc<dyn ChainStore + Send + Sync>,
}

impl BlockGetResolver {
    pub fn new(store: Arc<dyn ChainStore + Send + Sync>) -> Self {
        Self { store }
    }

    fn get(&self, id: &str) -> Result<Block, QueryError> {
        // A batch identifier is a caller mistake, classified before the
        // lookup can conclude plain absence.
        if self.store.contains_batch_id(&BatchId::new(id))? {
            return Err(QueryError::InvalidId(id.to_owned()));
        }
        self.store
            .get_block(&BlockId::new(id))?
            .ok_or(QueryError::NoResource)
    }
}

impl ClientResolver for BlockGetResolver {
    fn kind(&self) -> RequestKind {
        RequestKind::BlockGet
    }

    fn resolve(&self, request: &ClientRequest) -> ClientResponse {
        let ClientRequest::BlockGet(req) = request else {
            return ClientResponse::internal_error(self.kind());
        };
        ClientResponse::BlockGet(match self.get(&req.block_id) {
            Ok(block) => {
                debug!(block = %block.id, "block get resolved");
                BlockGetResponse {
                    status: Status::Ok,
                    block: Some(block),
                }
            }
            Err(e) => {
                debug!(block = %req.block_id, status = ?e.status(), "block get failed");
                BlockGetResponse::failure(e.status())
            }
        })
    }
}
