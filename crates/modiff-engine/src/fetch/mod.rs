//! Revision sources: where collection snapshots come from.

pub mod nexus;

use async_trait::async_trait;
use modiff_core::errors::Result;
use modiff_core::model::RawRecord;

pub use nexus::NexusClient;

/// Fetch the records of one collection revision.
///
/// Implementations return records in the order the upstream lists them and
/// leave normalization to the caller.
#[async_trait]
pub trait RevisionSource: Send + Sync {
    /// # Errors
    ///
    /// Returns `ModiffError::Remote` carrying the upstream error payload
    /// verbatim when the transport fails or upstream reports an error.
    async fn fetch_revision(&self, collection_id: &str, revision: u32) -> Result<Vec<RawRecord>>;
}
