//! Blocks — hash-linked containers of committed batches.

use serde::{Deserialize, Serialize};

use crate::batch::Batch;
use crate::id::{BatchId, BlockId};

/// A committed block in the append-only chain.
///
/// Each block names its predecessor, forming a backward-linked chain that
/// terminates at the origin block (the only block with no predecessor).
/// The batches a block commits are embedded in committed order. Immutable
/// once stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub id: BlockId,
    /// Predecessor link; `None` only for the origin block.
    pub previous_id: Option<BlockId>,
    /// Committed batches, in intra-block order.
    pub batches: Vec<Batch>,
}

impl Block {
    /// Build a block from its identifier, predecessor link, and batches.
    pub fn new(
        id: impl Into<BlockId>,
        previous_id: Option<BlockId>,
        batches: Vec<Batch>,
    ) -> Self {
        Self {
            id: id.into(),
            previous_id,
            batches,
        }
    }

    /// Whether this is the origin block (no predecessor).
    pub fn is_origin(&self) -> bool {
        self.previous_id.is_none()
    }

    /// Identifiers of the batches this block commits, in committed order.
    pub fn batch_ids(&self) -> impl Iterator<Item = &BatchId> {
        self.batches.iter().map(|b| &b.id)
    }
}
