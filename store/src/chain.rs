//! Chain storage trait.

use catena_types::{Batch, BatchId, Block, BlockId};

use crate::StoreError;

/// Read access to an append-only, hash-linked chain of blocks.
///
/// A store presents one consistent snapshot per call: the head pointer,
/// when present, always names a stored block, and every batch identifier
/// maps to exactly one block for the lifetime of the store. Absence of a
/// record is data (`Ok(None)`), not an error; `Err` is reserved for
/// backend faults.
pub trait ChainStore {
    /// Identifier of the current chain head, or `None` when no origin
    /// block has been committed yet.
    fn chain_head_id(&self) -> Result<Option<BlockId>, StoreError>;

    /// Retrieve a block by identifier.
    fn get_block(&self, id: &BlockId) -> Result<Option<Block>, StoreError>;

    /// Retrieve a batch by identifier, wherever it was committed.
    fn get_batch(&self, id: &BatchId) -> Result<Option<Batch>, StoreError>;

    /// Whether an identifier names a stored block.
    fn contains_block_id(&self, id: &BlockId) -> Result<bool, StoreError>;

    /// Whether an identifier names a stored batch.
    fn contains_batch_id(&self, id: &BatchId) -> Result<bool, StoreError>;

    /// Identifier of the block preceding `block`, or `None` for the
    /// origin.
    ///
    /// The default implementation reads the block's embedded predecessor
    /// link; backends that keep a separate link index may override it.
    fn predecessor_of(&self, block: &Block) -> Result<Option<BlockId>, StoreError> {
        Ok(block.previous_id.clone())
    }
}
