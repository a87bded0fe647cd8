use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// An identifier was reused across the block/batch namespaces.
    #[error("duplicate identifier: {0}")]
    Duplicate(String),

    /// A committed block does not extend the current chain.
    #[error("block gap: {0}")]
    Gap(String),

    #[error("storage backend error: {0}")]
    Backend(String),

    #[error("stored chain data is corrupted: {0}")]
    Corruption(String),
}
