//! Client read-query resolution over an append-only block chain.
//!
//! A list-style query runs a fixed pipeline: resolve the anchor block
//! ([`scope`]), walk the chain backward from it ([`walker`]), collect the
//! resources in chain order, optionally restrict and re-order them by the
//! caller's identifier list ([`filter`]), and classify the outcome
//! ([`error`]). Get-style queries skip the pipeline and resolve a single
//! identifier directly against the store.
//!
//! Every resolver is read-only, keeps all intermediate state request-local,
//! and answers exactly one status per request.

pub mod batch;
pub mod block;
pub mod error;
pub mod filter;
pub mod resolver;
pub mod scope;
pub mod walker;

pub use batch::{BatchGetResolver, BatchListResolver};
pub use block::{BlockGetResolver, BlockListResolver};
pub use error::QueryError;
pub use filter::{filter_by_ids, Keyed};
pub use resolver::ClientResolver;
pub use scope::resolve_anchor;
pub use walker::{collect_batches, collect_blocks, ChainWalk};
