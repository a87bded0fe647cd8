//! The read-query failure taxonomy.

use catena_messages::Status;
use catena_store::StoreError;
use thiserror::Error;

/// Why a read query could not be resolved.
///
/// Failures are reported, never recovered: a request resolves atomically
/// to exactly one status, with no retries inside the query layer. Given
/// the same store contents, the same request always fails the same way.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The chain has no head — no origin block committed yet.
    #[error("chain has no head; the store is not initialized")]
    NotReady,

    /// A caller-supplied head identifier names no stored block.
    #[error("head {0} does not resolve to a block")]
    NoRoot(String),

    /// Nothing the caller asked for exists within the applicable scope.
    #[error("no matching resource in scope")]
    NoResource,

    /// The identifier names a resource of the wrong kind.
    #[error("{0} names a resource of the wrong kind")]
    InvalidId(String),

    /// A predecessor link names a block the store does not have. Cannot
    /// happen in a store honoring the chain invariants.
    #[error("chain broken at {block}: predecessor {missing} not found")]
    BrokenChain { block: String, missing: String },

    /// The storage backend failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl QueryError {
    /// The response status this failure classifies to.
    ///
    /// `BrokenChain` and backend faults fall outside the request-level
    /// taxonomy and classify as `INTERNAL_ERROR`.
    pub fn status(&self) -> Status {
        match self {
            QueryError::NotReady => Status::NotReady,
            QueryError::NoRoot(_) => Status::NoRoot,
            QueryError::NoResource => Status::NoResource,
            QueryError::InvalidId(_) => Status::InvalidId,
            QueryError::BrokenChain { .. } | QueryError::Store(_) => Status::InternalError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_covers_the_taxonomy() {
        assert_eq!(QueryError::NotReady.status(), Status::NotReady);
        assert_eq!(QueryError::NoRoot("bad".into()).status(), Status::NoRoot);
        assert_eq!(QueryError::NoResource.status(), Status::NoResource);
        assert_eq!(QueryError::InvalidId("B-1".into()).status(), Status::InvalidId);
        assert_eq!(
            QueryError::BrokenChain {
                block: "B-2".into(),
                missing: "B-1".into(),
            }
            .status(),
            Status::InternalError
        );
        assert_eq!(
            QueryError::Store(StoreError::Backend("disk".into())).status(),
            Status::InternalError
        );
    }
}
