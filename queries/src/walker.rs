//! Backward chain traversal and resource collection.

use catena_store::ChainStore;
use catena_types::{Batch, Block};

use crate::QueryError;

/// Lazy newest-first walk from an anchor block down to the origin.
///
/// Yields the anchor first, then each predecessor, and stops after the
/// origin. Every construction is an independent walk over the same
/// immutable snapshot; the walk reads the store one predecessor at a time
/// and never mutates it. A predecessor link naming a missing block ends
/// the walk with [`QueryError::BrokenChain`].
pub struct ChainWalk<'a> {
    store: &'a dyn ChainStore,
    next: Option<Block>,
    failed: bool,
}

impl<'a> ChainWalk<'a> {
    /// Start a walk at `anchor`, which is yielded first.
    pub fn new(store: &'a dyn ChainStore, anchor: Block) -> Self {
        Self {
            store,
            next: Some(anchor),
            failed: false,
        }
    }

    fn predecessor(&self, current: &Block) -> Result<Option<Block>, QueryError> {
        let Some(previous_id) = self.store.predecessor_of(current)? else {
            return Ok(None);
        };
        match self.store.get_block(&previous_id)? {
            Some(block) => Ok(Some(block)),
            None => Err(QueryError::BrokenChain {
                block: current.id.to_string(),
                missing: previous_id.to_string(),
            }),
        }
    }
}

impl Iterator for ChainWalk<'_> {
    type Item = Result<Block, QueryError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let current = self.next.take()?;
        match self.predecessor(&current) {
            Ok(next) => {
                self.next = next;
                Some(Ok(current))
            }
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

/// Flatten walked blocks into **chain order**: newest block first, and
/// within each block, the block's own committed batch order. This is the
/// default result ordering when no identifier filter is supplied.
pub fn collect_batches(walk: ChainWalk<'_>) -> Result<Vec<Batch>, QueryError> {
    let mut batches = Vec::new();
    for block in walk {
        batches.extend(block?.batches);
    }
    Ok(batches)
}

/// The walked blocks themselves, newest first.
pub fn collect_blocks(walk: ChainWalk<'_>) -> Result<Vec<Block>, QueryError> {
    walk.collect()
}
