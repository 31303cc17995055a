//! Diff output types.
//!
//! All types implement `Debug, Clone, Serialize, Deserialize, PartialEq` so a
//! diff can be emitted as JSON as well as rendered as text.

use serde::{Deserialize, Serialize};

use crate::model::Entity;

/// The classified difference between two snapshots.
///
/// Ephemeral: exists only for the duration of one report.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DiffResult {
    /// Entities present in the new snapshot but not the old one
    pub added: Vec<Entity>,
    /// Entities present in the old snapshot but not the new one
    pub removed: Vec<Entity>,
    /// Entities present in both with a different version
    pub updated: Vec<UpdatedEntity>,
}

impl DiffResult {
    /// True when no entity was added, removed, or updated
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.updated.is_empty()
    }

    /// Total number of classified changes
    pub fn change_count(&self) -> usize {
        self.added.len() + self.removed.len() + self.updated.len()
    }
}

/// Old and new state of an entity whose version changed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdatedEntity {
    pub before: Entity,
    pub after: Entity,
}
