//! Behavioral tests for the four read-query resolvers, driven through the
//! `ClientResolver` seam against an in-memory chain store.
//!
//! The shared fixture is a three-block chain, newest last:
//!     B-0 (origin, batch b-0) ← B-1 (batch b-1) ← B-2 (batch b-2, head)
//! where each batch `b-N` carries a single transaction `t-N`.

use std::sync::Arc;

use catena_messages::{
    BatchGetRequest, BatchGetResponse, BatchListRequest, BatchListResponse, BlockGetRequest,
    BlockGetResponse, BlockListRequest, BlockListResponse, ClientRequest, ClientResponse, Status,
};
use catena_queries::{
    BatchGetResolver, BatchListResolver, BlockGetResolver, BlockListResolver, ClientResolver,
};
use catena_store::{ChainStore, StoreError};
use catena_store_memory::MemoryChainStore;
use catena_types::{Batch, BatchId, Block, BlockId, Transaction};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn make_batch(n: usize) -> Batch {
    Batch::new(
        format!("b-{n}"),
        vec![Transaction::new(format!("t-{n}"), format!("payload-{n}").into_bytes())],
    )
}

fn three_block_store() -> Arc<MemoryChainStore> {
    let store = MemoryChainStore::new();
    for n in 0..3 {
        let previous = (n > 0).then(|| BlockId::new(format!("B-{}", n - 1)));
        store
            .commit_block(Block::new(format!("B-{n}"), previous, vec![make_batch(n)]))
            .expect("fixture chain commits cleanly");
    }
    Arc::new(store)
}

fn batch_list(head_id: Option<&str>, ids: &[&str]) -> ClientRequest {
    ClientRequest::BatchList(BatchListRequest {
        head_id: head_id.map(String::from),
        batch_ids: ids.iter().map(|s| s.to_string()).collect(),
    })
}

fn block_list(head_id: Option<&str>, ids: &[&str]) -> ClientRequest {
    ClientRequest::BlockList(BlockListRequest {
        head_id: head_id.map(String::from),
        block_ids: ids.iter().map(|s| s.to_string()).collect(),
    })
}

fn batch_get(id: &str) -> ClientRequest {
    ClientRequest::BatchGet(BatchGetRequest {
        batch_id: id.to_string(),
    })
}

fn block_get(id: &str) -> ClientRequest {
    ClientRequest::BlockGet(BlockGetRequest {
        block_id: id.to_string(),
    })
}

fn expect_batch_list(response: ClientResponse) -> BatchListResponse {
    match response {
        ClientResponse::BatchList(r) => r,
        other => panic!("expected a batch list response, got {other:?}"),
    }
}

fn expect_batch_get(response: ClientResponse) -> BatchGetResponse {
    match response {
        ClientResponse::BatchGet(r) => r,
        other => panic!("expected a batch get response, got {other:?}"),
    }
}

fn expect_block_list(response: ClientResponse) -> BlockListResponse {
    match response {
        ClientResponse::BlockList(r) => r,
        other => panic!("expected a block list response, got {other:?}"),
    }
}

fn expect_block_get(response: ClientResponse) -> BlockGetResponse {
    match response {
        ClientResponse::BlockGet(r) => r,
        other => panic!("expected a block get response, got {other:?}"),
    }
}

fn batch_ids(response: &BatchListResponse) -> Vec<&str> {
    response.batches.iter().map(|b| b.id.as_str()).collect()
}

fn block_ids(response: &BlockListResponse) -> Vec<&str> {
    response.blocks.iter().map(|b| b.id.as_str()).collect()
}

/// Store whose every read fails, standing in for a corrupt backend.
struct FailingStore;

impl ChainStore for FailingStore {
    fn chain_head_id(&self) -> Result<Option<BlockId>, StoreError> {
        Err(StoreError::Backend("simulated backend fault".into()))
    }

    fn get_block(&self, _id: &BlockId) -> Result<Option<Block>, StoreError> {
        Err(StoreError::Backend("simulated backend fault".into()))
    }

    fn get_batch(&self, _id: &BatchId) -> Result<Option<Batch>, StoreError> {
        Err(StoreError::Backend("simulated backend fault".into()))
    }

    fn contains_block_id(&self, _id: &BlockId) -> Result<bool, StoreError> {
        Err(StoreError::Backend("simulated backend fault".into()))
    }

    fn contains_batch_id(&self, _id: &BatchId) -> Result<bool, StoreError> {
        Err(StoreError::Backend("simulated backend fault".into()))
    }
}

// ---------------------------------------------------------------------------
// 1. Batch list
// ---------------------------------------------------------------------------

#[test]
fn batch_list_returns_full_chain_in_chain_order() {
    let resolver = BatchListResolver::new(three_block_store());
    let response = expect_batch_list(resolver.resolve(&batch_list(None, &[])));

    assert_eq!(response.status, Status::Ok);
    assert_eq!(response.head_id.as_deref(), Some("B-2"));
    assert_eq!(batch_ids(&response), vec!["b-2", "b-1", "b-0"]);
    assert_eq!(response.batches[0].transactions[0].id.as_str(), "t-2");
}

#[test]
fn batch_list_on_uninitialized_chain_is_not_ready() {
    let resolver = BatchListResolver::new(Arc::new(MemoryChainStore::new()));
    let response = expect_batch_list(resolver.resolve(&batch_list(None, &[])));

    assert_eq!(response.status, Status::NotReady);
    assert_eq!(response.head_id, None);
    assert!(response.batches.is_empty());
}

#[test]
fn batch_list_with_head_restricts_scope() {
    let resolver = BatchListResolver::new(three_block_store());
    let response = expect_batch_list(resolver.resolve(&batch_list(Some("B-1"), &[])));

    assert_eq!(response.status, Status::Ok);
    assert_eq!(response.head_id.as_deref(), Some("B-1"));
    assert_eq!(batch_ids(&response), vec!["b-1", "b-0"]);
}

#[test]
fn batch_list_with_unknown_head_has_no_root() {
    let resolver = BatchListResolver::new(three_block_store());
    let response = expect_batch_list(resolver.resolve(&batch_list(Some("bad"), &[])));

    assert_eq!(response.status, Status::NoRoot);
    assert_eq!(response.head_id, None);
    assert!(response.batches.is_empty());
}

#[test]
fn batch_list_filtered_ids_come_back_in_caller_order() {
    let resolver = BatchListResolver::new(three_block_store());
    let response = expect_batch_list(resolver.resolve(&batch_list(None, &["b-0", "b-2"])));

    assert_eq!(response.status, Status::Ok);
    assert_eq!(response.head_id.as_deref(), Some("B-2"));
    assert_eq!(batch_ids(&response), vec!["b-0", "b-2"]);
}

#[test]
fn batch_list_with_only_unknown_ids_is_no_resource() {
    let resolver = BatchListResolver::new(three_block_store());
    let response = expect_batch_list(resolver.resolve(&batch_list(None, &["bad", "also-bad"])));

    assert_eq!(response.status, Status::NoResource);
    // The anchor had already resolved, so it is still reported.
    assert_eq!(response.head_id.as_deref(), Some("B-2"));
    assert!(response.batches.is_empty());
}

#[test]
fn batch_list_skips_unknown_ids_among_good_ones() {
    let resolver = BatchListResolver::new(three_block_store());
    let response = expect_batch_list(resolver.resolve(&batch_list(None, &["bad", "b-1"])));

    assert_eq!(response.status, Status::Ok);
    assert_eq!(response.head_id.as_deref(), Some("B-2"));
    assert_eq!(batch_ids(&response), vec!["b-1"]);
}

#[test]
fn batch_list_combines_head_and_ids() {
    let resolver = BatchListResolver::new(three_block_store());
    let response = expect_batch_list(resolver.resolve(&batch_list(Some("B-1"), &["b-0"])));

    assert_eq!(response.status, Status::Ok);
    assert_eq!(response.head_id.as_deref(), Some("B-1"));
    assert_eq!(batch_ids(&response), vec!["b-0"]);
}

#[test]
fn batch_list_ids_newer_than_head_are_out_of_scope() {
    let resolver = BatchListResolver::new(three_block_store());
    let response = expect_batch_list(resolver.resolve(&batch_list(Some("B-0"), &["b-1", "b-2"])));

    // b-1 and b-2 exist in the store but not below the requested anchor.
    assert_eq!(response.status, Status::NoResource);
    assert_eq!(response.head_id.as_deref(), Some("B-0"));
    assert!(response.batches.is_empty());
}

#[test]
fn batch_list_store_fault_is_internal_error() {
    let resolver = BatchListResolver::new(Arc::new(FailingStore));
    let response = expect_batch_list(resolver.resolve(&batch_list(None, &[])));

    assert_eq!(response.status, Status::InternalError);
    assert_eq!(response.head_id, None);
    assert!(response.batches.is_empty());
}

// ---------------------------------------------------------------------------
// 2. Batch get
// ---------------------------------------------------------------------------

#[test]
fn batch_get_returns_the_batch() {
    let resolver = BatchGetResolver::new(three_block_store());
    let response = expect_batch_get(resolver.resolve(&batch_get("b-1")));

    assert_eq!(response.status, Status::Ok);
    let batch = response.batch.expect("OK response carries the batch");
    assert_eq!(batch.id.as_str(), "b-1");
    assert_eq!(batch.transactions[0].id.as_str(), "t-1");
}

#[test]
fn batch_get_unknown_id_is_no_resource() {
    let resolver = BatchGetResolver::new(three_block_store());
    let response = expect_batch_get(resolver.resolve(&batch_get("bad")));

    assert_eq!(response.status, Status::NoResource);
    assert_eq!(response.batch, None);
}

#[test]
fn batch_get_with_block_id_is_invalid_id() {
    let resolver = BatchGetResolver::new(three_block_store());
    let response = expect_batch_get(resolver.resolve(&batch_get("B-1")));

    assert_eq!(response.status, Status::InvalidId);
    assert_eq!(response.batch, None);
}

#[test]
fn batch_get_store_fault_is_internal_error() {
    let resolver = BatchGetResolver::new(Arc::new(FailingStore));
    let response = expect_batch_get(resolver.resolve(&batch_get("b-1")));

    assert_eq!(response.status, Status::InternalError);
    assert_eq!(response.batch, None);
}

// ---------------------------------------------------------------------------
// 3. Block list
// ---------------------------------------------------------------------------

#[test]
fn block_list_returns_chain_newest_first() {
    let resolver = BlockListResolver::new(three_block_store());
    let response = expect_block_list(resolver.resolve(&block_list(None, &[])));

    assert_eq!(response.status, Status::Ok);
    assert_eq!(response.head_id.as_deref(), Some("B-2"));
    assert_eq!(block_ids(&response), vec!["B-2", "B-1", "B-0"]);
}

#[test]
fn block_list_on_uninitialized_chain_is_not_ready() {
    let resolver = BlockListResolver::new(Arc::new(MemoryChainStore::new()));
    let response = expect_block_list(resolver.resolve(&block_list(None, &[])));

    assert_eq!(response.status, Status::NotReady);
    assert_eq!(response.head_id, None);
    assert!(response.blocks.is_empty());
}

#[test]
fn block_list_with_head_restricts_scope() {
    let resolver = BlockListResolver::new(three_block_store());
    let response = expect_block_list(resolver.resolve(&block_list(Some("B-1"), &[])));

    assert_eq!(response.status, Status::Ok);
    assert_eq!(response.head_id.as_deref(), Some("B-1"));
    assert_eq!(block_ids(&response), vec!["B-1", "B-0"]);
}

#[test]
fn block_list_with_unknown_head_has_no_root() {
    let resolver = BlockListResolver::new(three_block_store());
    let response = expect_block_list(resolver.resolve(&block_list(Some("bad"), &[])));

    assert_eq!(response.status, Status::NoRoot);
    assert_eq!(response.head_id, None);
    assert!(response.blocks.is_empty());
}

#[test]
fn block_list_filtered_ids_come_back_in_caller_order() {
    let resolver = BlockListResolver::new(three_block_store());
    let response = expect_block_list(resolver.resolve(&block_list(None, &["B-0", "B-2"])));

    assert_eq!(response.status, Status::Ok);
    assert_eq!(response.head_id.as_deref(), Some("B-2"));
    assert_eq!(block_ids(&response), vec!["B-0", "B-2"]);
}

#[test]
fn block_list_with_only_unknown_ids_is_no_resource() {
    let resolver = BlockListResolver::new(three_block_store());
    let response = expect_block_list(resolver.resolve(&block_list(None, &["bad", "also-bad"])));

    assert_eq!(response.status, Status::NoResource);
    assert_eq!(response.head_id.as_deref(), Some("B-2"));
    assert!(response.blocks.is_empty());
}

#[test]
fn block_list_ids_newer_than_head_are_out_of_scope() {
    let resolver = BlockListResolver::new(three_block_store());
    let response = expect_block_list(resolver.resolve(&block_list(Some("B-0"), &["B-2"])));

    assert_eq!(response.status, Status::NoResource);
    assert_eq!(response.head_id.as_deref(), Some("B-0"));
    assert!(response.blocks.is_empty());
}

// ---------------------------------------------------------------------------
// 4. Block get
// ---------------------------------------------------------------------------

#[test]
fn block_get_returns_the_block() {
    let resolver = BlockGetResolver::new(three_block_store());
    let response = expect_block_get(resolver.resolve(&block_get("B-1")));

    assert_eq!(response.status, Status::Ok);
    let block = response.block.expect("OK response carries the block");
    assert_eq!(block.id.as_str(), "B-1");
    assert_eq!(block.previous_id, Some(BlockId::new("B-0")));
    assert_eq!(block.batches[0].id.as_str(), "b-1");
}

#[test]
fn block_get_unknown_id_is_no_resource() {
    let resolver = BlockGetResolver::new(three_block_store());
    let response = expect_block_get(resolver.resolve(&block_get("bad")));

    assert_eq!(response.status, Status::NoResource);
    assert_eq!(response.block, None);
}

#[test]
fn block_get_with_batch_id_is_invalid_id() {
    let resolver = BlockGetResolver::new(three_block_store());
    let response = expect_block_get(resolver.resolve(&block_get("b-1")));

    assert_eq!(response.status, Status::InvalidId);
    assert_eq!(response.block, None);
}

#[test]
fn block_get_store_fault_is_internal_error() {
    let resolver = BlockGetResolver::new(Arc::new(FailingStore));
    let response = expect_block_get(resolver.resolve(&block_get("B-1")));

    assert_eq!(response.status, Status::InternalError);
    assert_eq!(response.block, None);
}

// ---------------------------------------------------------------------------
// 5. Resolution order across stages
// ---------------------------------------------------------------------------

#[test]
fn explicit_head_wins_over_missing_chain_head() {
    // A store that has blocks but reports no head exercises the rule that
    // an explicit anchor never consults the chain head pointer.
    struct HeadlessStore(MemoryChainStore);

    impl ChainStore for HeadlessStore {
        fn chain_head_id(&self) -> Result<Option<BlockId>, StoreError> {
            Ok(None)
        }
        fn get_block(&self, id: &BlockId) -> Result<Option<Block>, StoreError> {
            self.0.get_block(id)
        }
        fn get_batch(&self, id: &BatchId) -> Result<Option<Batch>, StoreError> {
            self.0.get_batch(id)
        }
        fn contains_block_id(&self, id: &BlockId) -> Result<bool, StoreError> {
            self.0.contains_block_id(id)
        }
        fn contains_batch_id(&self, id: &BatchId) -> Result<bool, StoreError> {
            self.0.contains_batch_id(id)
        }
    }

    let inner = MemoryChainStore::new();
    inner
        .commit_block(Block::new("B-0", None, vec![make_batch(0)]))
        .unwrap();
    let resolver = BatchListResolver::new(Arc::new(HeadlessStore(inner)));

    let response = expect_batch_list(resolver.resolve(&batch_list(Some("B-0"), &[])));
    assert_eq!(response.status, Status::Ok);
    assert_eq!(batch_ids(&response), vec!["b-0"]);

    let response = expect_batch_list(resolver.resolve(&batch_list(None, &[])));
    assert_eq!(response.status, Status::NotReady);
}

#[test]
fn wrong_kind_id_beats_not_found() {
    // An id in the wrong namespace is a caller mistake even though the
    // batch lookup itself would simply miss.
    let resolver = BatchGetResolver::new(three_block_store());

    let as_batch = expect_batch_get(resolver.resolve(&batch_get("B-0")));
    assert_eq!(as_batch.status, Status::InvalidId);

    let resolver = BlockGetResolver::new(three_block_store());
    let as_block = expect_block_get(resolver.resolve(&block_get("b-0")));
    assert_eq!(as_block.status, Status::InvalidId);
}

#[test]
fn store_fault_after_anchor_answers_a_bare_internal_error() {
    // The anchor resolves, then the predecessor read fails mid-walk. The
    // response is the same empty INTERNAL_ERROR shape as every other
    // internal failure: no anchor, no payload.
    struct FaultyWalkStore {
        head: Block,
    }

    impl ChainStore for FaultyWalkStore {
        fn chain_head_id(&self) -> Result<Option<BlockId>, StoreError> {
            Ok(Some(self.head.id.clone()))
        }

        fn get_block(&self, id: &BlockId) -> Result<Option<Block>, StoreError> {
            Ok((id == &self.head.id).then(|| self.head.clone()))
        }

        fn get_batch(&self, _id: &BatchId) -> Result<Option<Batch>, StoreError> {
            Ok(None)
        }

        fn contains_block_id(&self, id: &BlockId) -> Result<bool, StoreError> {
            Ok(id == &self.head.id)
        }

        fn contains_batch_id(&self, _id: &BatchId) -> Result<bool, StoreError> {
            Ok(false)
        }

        fn predecessor_of(&self, _block: &Block) -> Result<Option<BlockId>, StoreError> {
            Err(StoreError::Backend("simulated backend fault".into()))
        }
    }

    let store: Arc<dyn ChainStore + Send + Sync> = Arc::new(FaultyWalkStore {
        head: Block::new("B-1", Some(BlockId::new("B-0")), vec![make_batch(1)]),
    });

    let resolver = BatchListResolver::new(Arc::clone(&store));
    let response = expect_batch_list(resolver.resolve(&batch_list(None, &[])));
    assert_eq!(response.status, Status::InternalError);
    assert_eq!(response.head_id, None);
    assert!(response.batches.is_empty());

    let resolver = BlockListResolver::new(store);
    let response = expect_block_list(resolver.resolve(&block_list(None, &[])));
    assert_eq!(response.status, Status::InternalError);
    assert_eq!(response.head_id, None);
    assert!(response.blocks.is_empty());
}
