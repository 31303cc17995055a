//! Fetched records before normalization.
//!
//! A collection revision lists files; most files link to a parent mod. The
//! parent is the stable identity across revisions (a new file of the same mod
//! is an update, not an add/remove pair), so it wins over the file's own
//! identity whenever it is present.

use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// Version token used when a record carries no version
pub const UNKNOWN_VERSION: &str = "unknown";

/// Optional link from a record to the item it belongs to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentRef {
    pub id: Option<String>,
    pub name: Option<String>,
}

/// A record as returned by a revision source, with every field optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    pub id: Option<String>,
    pub name: Option<String>,
    pub version: Option<String>,
    pub parent: Option<ParentRef>,
}

impl RawRecord {
    /// Normalize into an [`Entity`], or `None` when the record cannot be keyed.
    ///
    /// - id: parent id, else own id; neither → excluded
    /// - name: parent name, else own name, else the chosen id
    /// - version: own version, else [`UNKNOWN_VERSION`]
    ///
    /// Blank strings count as absent.
    pub fn normalize(&self) -> Option<Entity> {
        let parent = self.parent.as_ref();

        let id = parent
            .and_then(|p| present(&p.id))
            .or_else(|| present(&self.id))?;

        let name = parent
            .and_then(|p| present(&p.name))
            .or_else(|| present(&self.name))
            .unwrap_or(id);

        let version = present(&self.version).unwrap_or(UNKNOWN_VERSION);

        Some(Entity::new(id, name, version))
    }
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.trim().is_empty())
}
