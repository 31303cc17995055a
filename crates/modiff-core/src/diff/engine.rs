//! Snapshot diff computation engine.
//!
//! The core entry point is [`compute_diff`], which accepts the normalized
//! entities of two snapshots and produces a [`DiffResult`].

use crate::diff::model::{DiffResult, UpdatedEntity};
use crate::model::Entity;
use std::collections::HashMap;

/// Build an id → position lookup. Later entries overwrite earlier ones, so a
/// duplicated id resolves to its last occurrence.
fn index_by_id(entities: &[Entity]) -> HashMap<&str, usize> {
    entities
        .iter()
        .enumerate()
        .map(|(pos, e)| (e.id.as_str(), pos))
        .collect()
}

/// True if `pos` is the winning occurrence of its id in `index`.
fn is_winner(index: &HashMap<&str, usize>, id: &str, pos: usize) -> bool {
    index.get(id) == Some(&pos)
}

/// Compute the added/removed/updated classification between two snapshots.
///
/// - in `new` only → `added`
/// - in both, versions differ → `updated` (carrying both entities)
/// - in both, versions equal → omitted
/// - in `old` only → `removed`
///
/// `added` and `updated` follow the iteration order of `new`; `removed`
/// follows the iteration order of `old`. Runs in O(n + m) and has no error
/// paths: callers normalize optional fields before calling.
pub fn compute_diff(old: &[Entity], new: &[Entity]) -> DiffResult {
    let old_index = index_by_id(old);
    let new_index = index_by_id(new);

    let mut result = DiffResult::default();

    for (pos, after) in new.iter().enumerate() {
        if !is_winner(&new_index, &after.id, pos) {
            continue;
        }
        match old_index.get(after.id.as_str()) {
            None => result.added.push(after.clone()),
            Some(&old_pos) => {
                let before = &old[old_pos];
                if before.version != after.version {
                    result.updated.push(UpdatedEntity {
                        before: before.clone(),
                        after: after.clone(),
                    });
                }
            }
        }
    }

    for (pos, before) in old.iter().enumerate() {
        if !is_winner(&old_index, &before.id, pos) {
            continue;
        }
        if !new_index.contains_key(before.id.as_str()) {
            result.removed.push(before.clone());
        }
    }

    tracing::debug!(
        old_len = old.len(),
        new_len = new.len(),
        added = result.added.len(),
        removed = result.removed.len(),
        updated = result.updated.len(),
        "computed diff"
    );

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn e(id: &str, name: &str, version: &str) -> Entity {
        Entity::new(id, name, version)
    }

    #[test]
    fn test_reference_example() {
        let old = vec![e("1", "A", "1.0"), e("2", "B", "2.0")];
        let new = vec![e("2", "B", "2.1"), e("3", "C", "1.0")];

        let diff = compute_diff(&old, &new);

        assert_eq!(diff.added, vec![e("3", "C", "1.0")]);
        assert_eq!(diff.removed, vec![e("1", "A", "1.0")]);
        assert_eq!(
            diff.updated,
            vec![UpdatedEntity {
                before: e("2", "B", "2.0"),
                after: e("2", "B", "2.1"),
            }]
        );
    }

    #[test]
    fn test_identical_is_empty() {
        let old = vec![e("1", "A", "1.0"), e("2", "B", "2.0")];
        assert!(compute_diff(&old, &old).is_empty());
    }

    #[test]
    fn test_empty_inputs() {
        assert!(compute_diff(&[], &[]).is_empty());

        let only = vec![e("1", "A", "1")];
        assert_eq!(compute_diff(&[], &only).added, only);
        assert_eq!(compute_diff(&only, &[]).removed, only);
    }

    #[test]
    fn test_rename_with_same_version_is_not_a_change() {
        let old = vec![e("1", "Old Name", "1.0")];
        let new = vec![e("1", "New Name", "1.0")];
        assert!(compute_diff(&old, &new).is_empty());
    }

    #[test]
    fn test_versions_are_opaque() {
        // "1.0" and "1.00" are different tokens, even if semantically equal
        let old = vec![e("1", "A", "1.0")];
        let new = vec![e("1", "A", "1.00")];
        assert_eq!(compute_diff(&old, &new).updated.len(), 1);
    }

    #[test]
    fn test_output_follows_input_order() {
        let old = vec![e("z", "Z", "1"), e("a", "A", "1"), e("m", "M", "1")];
        let new = vec![e("q", "Q", "1"), e("m", "M", "2"), e("b", "B", "1")];

        let diff = compute_diff(&old, &new);

        let added: Vec<&str> = diff.added.iter().map(|x| x.id.as_str()).collect();
        let removed: Vec<&str> = diff.removed.iter().map(|x| x.id.as_str()).collect();
        assert_eq!(added, vec!["q", "b"]);
        assert_eq!(removed, vec!["z", "a"]);
    }

    #[test]
    fn test_duplicate_ids_last_wins() {
        let old = vec![e("1", "A", "1.0"), e("1", "A", "2.0")];
        let new = vec![e("1", "A", "2.0"), e("2", "B", "1"), e("2", "B", "1")];

        let diff = compute_diff(&old, &new);

        // old "1" resolves to v2.0, which matches new "1"
        assert!(diff.updated.is_empty());
        // "2" appears once despite the duplicate
        assert_eq!(diff.added, vec![e("2", "B", "1")]);
        assert!(diff.removed.is_empty());
    }
}
