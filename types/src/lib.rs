//! Fundamental types for the catena read-query layer.
//!
//! This crate defines the records every other crate works with: opaque
//! string identifiers and the immutable chain records (blocks, batches,
//! transactions). Nothing here touches storage or the wire; those concerns
//! live in `catena-store` and `catena-messages`.

pub mod batch;
pub mod block;
pub mod id;

pub use batch::{Batch, Transaction};
pub use block::Block;
pub use id::{BatchId, BlockId, TransactionId};
