//! Shared test doubles for engine integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::num::NonZeroUsize;

use async_trait::async_trait;
use modiff_core::errors::{ModiffError, Result};
use modiff_core::model::{ParentRef, RawRecord};
use modiff_engine::commands::CommandContext;
use modiff_engine::fetch::RevisionSource;

/// In-memory revision source keyed by (collection, revision).
/// Unknown keys fail with a Remote error.
#[derive(Default)]
pub struct FakeSource {
    revisions: HashMap<(String, u32), Vec<RawRecord>>,
    calls: AtomicUsize,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_revision(mut self, collection: &str, revision: u32, records: Vec<RawRecord>) -> Self {
        self.revisions.insert((collection.to_string(), revision), records);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RevisionSource for FakeSource {
    async fn fetch_revision(&self, collection_id: &str, revision: u32) -> Result<Vec<RawRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.revisions
            .get(&(collection_id.to_string(), revision))
            .cloned()
            .ok_or_else(|| ModiffError::Remote {
                collection_id: collection_id.to_string(),
                revision,
                payload: r#"[{"message":"Revision not found"}]"#.to_string(),
            })
    }
}

/// A mod file linked to a parent mod
pub fn mod_file(mod_id: &str, mod_name: &str, version: &str) -> RawRecord {
    RawRecord {
        id: Some(format!("file-{mod_id}-{version}")),
        name: Some(format!("{mod_name}-{version}.7z")),
        version: Some(version.to_string()),
        parent: Some(ParentRef {
            id: Some(mod_id.to_string()),
            name: Some(mod_name.to_string()),
        }),
    }
}

pub fn context(source: Arc<dyn RevisionSource>, limit: usize) -> CommandContext {
    CommandContext {
        source,
        chunk_limit: NonZeroUsize::new(limit).unwrap(),
    }
}

/// A source holding the reference revisions 1 and 2 of `myslug`
pub fn reference_source() -> FakeSource {
    FakeSource::new()
        .with_revision(
            "myslug",
            1,
            vec![mod_file("1", "A", "1.0"), mod_file("2", "B", "2.0")],
        )
        .with_revision(
            "myslug",
            2,
            vec![mod_file("2", "B", "2.1"), mod_file("3", "C", "1.0")],
        )
}
