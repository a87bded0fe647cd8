//! In-memory chain store.
//!
//! Backs the query layer in tests, tooling, and demos. A single mutex
//! guards the block map, the batch index, and the head pointer together,
//! so a commit is atomic with respect to concurrent readers and a reader
//! never observes a torn head update.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use catena_store::{ChainStore, StoreError};
use catena_types::{Batch, BatchId, Block, BlockId};

/// A [`ChainStore`] backed by in-memory maps.
///
/// A freshly constructed store has no chain head; the head appears when
/// the origin block is committed and advances with every later commit.
/// [`commit_block`](MemoryChainStore::commit_block) is the only mutator
/// and enforces the append-only chain discipline, so the store invariants
/// the query layer relies on hold by construction.
pub struct MemoryChainStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    /// block id string → block
    blocks: HashMap<String, Block>,
    /// batch id string → id of the committing block
    batch_index: HashMap<String, BlockId>,
    /// Current newest block; absent until the origin is committed.
    head: Option<BlockId>,
}

impl Inner {
    /// Whether `id` is already taken in either namespace.
    fn id_in_use(&self, id: &str) -> bool {
        self.blocks.contains_key(id) || self.batch_index.contains_key(id)
    }
}

impl MemoryChainStore {
    /// Create an empty store with no chain head (the uninitialized-chain
    /// state: list queries against the default head answer `NOT_READY`).
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner::default()),
        }
    }

    /// Append a block to the chain.
    ///
    /// The first committed block must be an origin block (no predecessor);
    /// every later block must name the current head as its predecessor.
    /// Block and batch identifiers must be fresh across both namespaces.
    /// On success the head pointer and both maps are updated under one
    /// lock.
    pub fn commit_block(&self, block: Block) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap();

        match (&inner.head, &block.previous_id) {
            (None, Some(previous)) => {
                return Err(StoreError::Gap(format!(
                    "block {} links previous {previous} but the store is empty",
                    block.id
                )));
            }
            (Some(head), _) if block.is_origin() => {
                return Err(StoreError::Gap(format!(
                    "origin block {} committed to a chain headed by {head}",
                    block.id
                )));
            }
            (Some(head), Some(previous)) if previous != head => {
                return Err(StoreError::Gap(format!(
                    "block {} links previous {previous} but the chain head is {head}",
                    block.id
                )));
            }
            _ => {}
        }

        let mut fresh = HashSet::new();
        for id in
            std::iter::once(block.id.as_str()).chain(block.batch_ids().map(BatchId::as_str))
        {
            if inner.id_in_use(id) || !fresh.insert(id) {
                return Err(StoreError::Duplicate(id.to_owned()));
            }
        }

        for batch in &block.batches {
            inner
                .batch_index
                .insert(batch.id.as_str().to_owned(), block.id.clone());
        }
        inner.head = Some(block.id.clone());
        inner.blocks.insert(block.id.as_str().to_owned(), block);
        Ok(())
    }

    /// Number of committed blocks.
    pub fn block_count(&self) -> usize {
        self.inner.lock().unwrap().blocks.len()
    }
}

impl Default for MemoryChainStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ChainStore for MemoryChainStore {
    fn chain_head_id(&self) -> Result<Option<BlockId>, StoreError> {
        Ok(self.inner.lock().unwrap().head.clone())
    }

    fn get_block(&self, id: &BlockId) -> Result<Option<Block>, StoreError> {
        Ok(self.inner.lock().unwrap().blocks.get(id.as_str()).cloned())
    }

    fn get_batch(&self, id: &BatchId) -> Result<Option<Batch>, StoreError> {
        let inner = self.inner.lock().unwrap();
        let Some(block_id) = inner.batch_index.get(id.as_str()) else {
            return Ok(None);
        };
        let block = inner.blocks.get(block_id.as_str()).ok_or_else(|| {
            StoreError::Corruption(format!(
                "batch {id} indexed under missing block {block_id}"
            ))
        })?;
        block
            .batches
            .iter()
            .find(|b| &b.id == id)
            .cloned()
            .map(Some)
            .ok_or_else(|| {
                StoreError::Corruption(format!(
                    "batch {id} indexed under block {block_id} but not committed there"
                ))
            })
    }

    fn contains_block_id(&self, id: &BlockId) -> Result<bool, StoreError> {
        Ok(self.inner.lock().unwrap().blocks.contains_key(id.as_str()))
    }

    fn contains_batch_id(&self, id: &BatchId) -> Result<bool, StoreError> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .batch_index
            .contains_key(id.as_str()))
    }
}
