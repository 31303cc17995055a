use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::raw::RawRecord;

/// Snapshot - a collection's contents at one revision
///
/// Produced once per fetch and never mutated. Entity order is the order the
/// revision source returned the records in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub collection_id: String,
    pub revision: u32,
    pub entities: Vec<Entity>,
}

impl Snapshot {
    /// Normalize fetched records into a snapshot, dropping records that
    /// cannot be keyed.
    pub fn from_records(
        collection_id: impl Into<String>,
        revision: u32,
        records: &[RawRecord],
    ) -> Self {
        let collection_id = collection_id.into();
        let entities: Vec<Entity> = records.iter().filter_map(RawRecord::normalize).collect();

        let excluded = records.len() - entities.len();
        if excluded > 0 {
            tracing::debug!(
                collection_id = %collection_id,
                revision,
                excluded,
                "dropped records without a usable id"
            );
        }

        Self {
            collection_id,
            revision,
            entities,
        }
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
