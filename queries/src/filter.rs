//! Order-preserving identifier filtering over collected resources.

use std::collections::HashMap;

use catena_types::{Batch, Block};

use crate::QueryError;

/// A resource addressable by its string identifier.
pub trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for Batch {
    fn key(&self) -> &str {
        self.id.as_str()
    }
}

impl Keyed for Block {
    fn key(&self) -> &str {
        self.id.as_str()
    }
}

/// Restrict `resources` to the identifiers in `wanted`.
///
/// The output follows the order of `wanted`, not the order of
/// `resources`; identifiers with no in-scope match are skipped without
/// comment. An empty `wanted` list means no filtering at all, while a
/// non-empty list matching nothing is [`QueryError::NoResource`].
pub fn filter_by_ids<R>(resources: Vec<R>, wanted: &[String]) -> Result<Vec<R>, QueryError>
where
    R: Keyed + Clone,
{
    if wanted.is_empty() {
        return Ok(resources);
    }

    let by_id: HashMap<&str, &R> = resources.iter().map(|r| (r.key(), r)).collect();
    let found: Vec<R> = wanted
        .iter()
        .filter_map(|id| by_id.get(id.as_str()).map(|&r| r.clone()))
        .collect();

    if found.is_empty() {
        return Err(QueryError::NoResource);
    }
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batches(ids: &[&str]) -> Vec<Batch> {
        ids.iter().map(|id| Batch::new(*id, vec![])).collect()
    }

    fn ids(batches: &[Batch]) -> Vec<&str> {
        batches.iter().map(|b| b.id.as_str()).collect()
    }

    fn wanted(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_filter_keeps_everything() {
        let filtered = filter_by_ids(batches(&["b-2", "b-1", "b-0"]), &[]).unwrap();
        assert_eq!(ids(&filtered), vec!["b-2", "b-1", "b-0"]);
    }

    #[test]
    fn output_follows_caller_order() {
        let filtered =
            filter_by_ids(batches(&["b-2", "b-1", "b-0"]), &wanted(&["b-0", "b-2"])).unwrap();
        assert_eq!(ids(&filtered), vec!["b-0", "b-2"]);
    }

    #[test]
    fn unmatched_ids_are_silently_skipped() {
        let filtered =
            filter_by_ids(batches(&["b-1", "b-0"]), &wanted(&["no-such", "b-1"])).unwrap();
        assert_eq!(ids(&filtered), vec!["b-1"]);
    }

    #[test]
    fn nothing_matching_is_no_resource() {
        let err = filter_by_ids(batches(&["b-0"]), &wanted(&["bad", "worse"])).unwrap_err();
        assert!(matches!(err, QueryError::NoResource));
    }

    #[test]
    fn repeated_ids_repeat_the_resource() {
        let filtered = filter_by_ids(batches(&["b-0"]), &wanted(&["b-0", "b-0"])).unwrap();
        assert_eq!(ids(&filtered), vec!["b-0", "b-0"]);
    }

    #[test]
    fn blocks_filter_the_same_way() {
        let blocks = vec![
            Block::new("B-1", None, vec![]),
            Block::new("B-0", None, vec![]),
        ];
        let filtered = filter_by_ids(blocks, &wanted(&["B-0"])).unwrap();
        assert_eq!(filtered[0].id.as_str(), "B-0");
    }
}
