pub mod entity;
pub mod raw;
pub mod snapshot;

pub use entity::Entity;
pub use raw::{ParentRef, RawRecord};
pub use snapshot::Snapshot;
