use serde::{Deserialize, Serialize};

/// Entity - one item (a mod) within a collection snapshot
///
/// Entities are immutable value records. Two entities describe the same item
/// when their `id` fields are equal; `version` is an opaque token compared
/// only for equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entity {
    /// Opaque identifier, compared as text
    pub id: String,

    /// Display name
    pub name: String,

    /// Opaque version token
    pub version: String,
}

impl Entity {
    /// Create a new Entity
    pub fn new(id: impl Into<String>, name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            version: version.into(),
        }
    }
}
