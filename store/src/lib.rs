//! Abstract chain storage for the catena read-query layer.
//!
//! Every storage backend (in-memory for tests and tooling, LMDB or another
//! engine in a full node) implements [`ChainStore`]. The query layer
//! depends only on this trait.

pub mod chain;
pub mod error;

pub use chain::ChainStore;
pub use error::StoreError;
