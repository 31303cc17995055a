//! Diff engine property and scenario tests.
//!
//! All tests operate on in-memory entity lists (no I/O).

use modiff_core::diff::compute_diff;
use modiff_core::model::{Entity, ParentRef, RawRecord, Snapshot};
use proptest::prelude::*;
use std::collections::BTreeSet;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn e(id: &str, name: &str, version: &str) -> Entity {
    Entity::new(id, name, version)
}

/// Unique ids, so every generated snapshot satisfies the unique-key invariant.
fn unique_ids(max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set("[a-z0-9]{1,6}", 0..max).prop_map(|s| s.into_iter().collect())
}

fn snapshot_strategy() -> impl Strategy<Value = Vec<Entity>> {
    unique_ids(24).prop_flat_map(|ids| {
        let n = ids.len();
        (
            Just(ids),
            prop::collection::vec("[0-9]\\.[0-9]", n..=n),
        )
            .prop_map(|(ids, versions)| {
                ids.into_iter()
                    .zip(versions)
                    .map(|(id, v)| Entity::new(id.clone(), format!("mod {id}"), v))
                    .collect()
            })
    })
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn test_reference_example_from_changelog() {
    let old = vec![e("1", "A", "1.0"), e("2", "B", "2.0")];
    let new = vec![e("2", "B", "2.1"), e("3", "C", "1.0")];

    let diff = compute_diff(&old, &new);

    assert_eq!(diff.added, vec![e("3", "C", "1.0")]);
    assert_eq!(diff.removed, vec![e("1", "A", "1.0")]);
    assert_eq!(diff.updated.len(), 1);
    assert_eq!(diff.updated[0].before, e("2", "B", "2.0"));
    assert_eq!(diff.updated[0].after, e("2", "B", "2.1"));
}

#[test]
fn test_new_file_of_same_mod_is_an_update() {
    // Two revisions point at different files of the same parent mod
    let old_records = vec![RawRecord {
        id: Some("file-100".into()),
        name: Some("skyui_5_1.7z".into()),
        version: Some("5.1".into()),
        parent: Some(ParentRef {
            id: Some("12604".into()),
            name: Some("SkyUI".into()),
        }),
    }];
    let new_records = vec![RawRecord {
        id: Some("file-200".into()),
        name: Some("skyui_5_2.7z".into()),
        version: Some("5.2".into()),
        parent: Some(ParentRef {
            id: Some("12604".into()),
            name: Some("SkyUI".into()),
        }),
    }];

    let old = Snapshot::from_records("myslug", 1, &old_records);
    let new = Snapshot::from_records("myslug", 2, &new_records);
    let diff = compute_diff(&old.entities, &new.entities);

    assert!(diff.added.is_empty());
    assert!(diff.removed.is_empty());
    assert_eq!(diff.updated.len(), 1);
    assert_eq!(diff.updated[0].after.name, "SkyUI");
}

#[test]
fn test_change_count() {
    let old = vec![e("1", "A", "1"), e("2", "B", "1")];
    let new = vec![e("2", "B", "2"), e("3", "C", "1"), e("4", "D", "1")];
    assert_eq!(compute_diff(&old, &new).change_count(), 4);
}

#[test]
fn test_diff_serializes_to_json() {
    let old = vec![e("1", "A", "1.0")];
    let new = vec![e("1", "A", "1.1")];
    let json = serde_json::to_value(compute_diff(&old, &new)).unwrap();
    assert_eq!(json["updated"][0]["before"]["version"], "1.0");
    assert_eq!(json["updated"][0]["after"]["version"], "1.1");
    assert_eq!(json["added"], serde_json::json!([]));
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_disjoint_snapshots_are_all_added_and_removed(ids in unique_ids(30)) {
        let (old_ids, new_ids): (Vec<_>, Vec<_>) =
            ids.iter().enumerate().partition(|(i, _)| i % 2 == 0);
        let old: Vec<Entity> = old_ids.iter().map(|(_, id)| e(id, id, "1")).collect();
        let new: Vec<Entity> = new_ids.iter().map(|(_, id)| e(id, id, "1")).collect();

        let diff = compute_diff(&old, &new);

        prop_assert_eq!(&diff.added, &new);
        prop_assert_eq!(&diff.removed, &old);
        prop_assert!(diff.updated.is_empty());
    }

    #[test]
    fn prop_diff_with_itself_is_empty(snap in snapshot_strategy()) {
        prop_assert!(compute_diff(&snap, &snap).is_empty());
    }

    #[test]
    fn prop_classification_matches_set_semantics(
        old in snapshot_strategy(),
        new in snapshot_strategy(),
    ) {
        let diff = compute_diff(&old, &new);

        let old_ids: BTreeSet<&str> = old.iter().map(|x| x.id.as_str()).collect();
        let new_ids: BTreeSet<&str> = new.iter().map(|x| x.id.as_str()).collect();

        let expected_added: Vec<&Entity> =
            new.iter().filter(|x| !old_ids.contains(x.id.as_str())).collect();
        let expected_removed: Vec<&Entity> =
            old.iter().filter(|x| !new_ids.contains(x.id.as_str())).collect();
        prop_assert_eq!(diff.added.iter().collect::<Vec<_>>(), expected_added);
        prop_assert_eq!(diff.removed.iter().collect::<Vec<_>>(), expected_removed);

        for after in &new {
            let before = old.iter().find(|x| x.id == after.id);
            let hits = diff.updated.iter().filter(|u| u.after.id == after.id).count();
            match before {
                Some(b) if b.version != after.version => {
                    prop_assert_eq!(hits, 1);
                    let u = diff.updated.iter().find(|u| u.after.id == after.id).unwrap();
                    prop_assert_eq!(&u.before, b);
                    prop_assert_eq!(&u.after, after);
                }
                _ => prop_assert_eq!(hits, 0),
            }
        }
    }
}
