//! Anchor resolution — which block a list query is evaluated against.

use catena_store::{ChainStore, StoreError};
use catena_types::{Block, BlockId};

use crate::QueryError;

/// Resolve the anchor block for a list-style query.
///
/// With no explicit head, the current chain head anchors the query; an
/// uninitialized store fails with [`QueryError::NotReady`]. An explicit
/// head must name a stored block, or the query fails with
/// [`QueryError::NoRoot`]. Read-only; no side effects.
pub fn resolve_anchor(
    store: &dyn ChainStore,
    head_id: Option<&str>,
) -> Result<Block, QueryError> {
    match head_id {
        Some(raw) => {
            let id = BlockId::new(raw);
            store
                .get_block(&id)?
                .ok_or_else(|| QueryError::NoRoot(raw.to_owned()))
        }
        None => {
            let head = store.chain_head_id()?.ok_or(QueryError::NotReady)?;
            store.get_block(&head)?.ok_or_else(|| {
                // The head pointer must always name a stored block.
                QueryError::Store(StoreError::Corruption(format!(
                    "chain head {head} names no stored block"
                )))
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catena_store_memory::MemoryChainStore;
    use catena_types::Block;

    fn seeded_store() -> MemoryChainStore {
        let store = MemoryChainStore::new();
        store
            .commit_block(Block::new("B-0", None, vec![]))
            .unwrap();
        store
            .commit_block(Block::new("B-1", Some(BlockId::new("B-0")), vec![]))
            .unwrap();
        store
    }

    #[test]
    fn default_head_is_the_chain_head() {
        let store = seeded_store();
        let anchor = resolve_anchor(&store, None).unwrap();
        assert_eq!(anchor.id, BlockId::new("B-1"));
    }

    #[test]
    fn explicit_head_is_used_verbatim() {
        let store = seeded_store();
        let anchor = resolve_anchor(&store, Some("B-0")).unwrap();
        assert_eq!(anchor.id, BlockId::new("B-0"));
    }

    #[test]
    fn uninitialized_store_is_not_ready() {
        let store = MemoryChainStore::new();
        let err = resolve_anchor(&store, None).unwrap_err();
        assert!(matches!(err, QueryError::NotReady), "got {err}");
    }

    #[test]
    fn unknown_explicit_head_has_no_root() {
        let store = seeded_store();
        let err = resolve_anchor(&store, Some("bad")).unwrap_err();
        assert!(matches!(err, QueryError::NoRoot(id) if id == "bad"));
    }

    #[test]
    fn explicit_head_beats_not_ready() {
        // An explicit-but-unknown head on an empty store is a NoRoot
        // failure, not NotReady: the head pointer is never consulted.
        let store = MemoryChainStore::new();
        let err = resolve_anchor(&store, Some("B-9")).unwrap_err();
        assert!(matches!(err, QueryError::NoRoot(_)), "got {err}");
    }
}
