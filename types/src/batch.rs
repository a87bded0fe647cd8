//! Batches — transaction bundles committed into blocks.

use serde::{Deserialize, Serialize};

use crate::id::{BatchId, TransactionId};

/// A bundle of transactions committed atomically into one block.
///
/// A batch is owned by exactly one block and keeps its position within that
/// block's committed sequence. Immutable once stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Batch {
    pub id: BatchId,
    pub transactions: Vec<Transaction>,
}

impl Batch {
    /// Build a batch from its identifier and transactions.
    pub fn new(id: impl Into<BatchId>, transactions: Vec<Transaction>) -> Self {
        Self {
            id: id.into(),
            transactions,
        }
    }
}

/// A single transaction carried inside a batch. The payload is opaque to
/// the read layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub payload: Vec<u8>,
}

impl Transaction {
    /// Build a transaction from its identifier and payload bytes.
    pub fn new(id: impl Into<TransactionId>, payload: Vec<u8>) -> Self {
        Self {
            id: id.into(),
            payload,
        }
    }
}
