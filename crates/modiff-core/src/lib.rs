//! modiff core - pure logic for collection revision diffs
//!
//! This crate holds everything that does not touch the network:
//! - Entity model and normalization of fetched records
//! - The diff engine (added / removed / updated classification)
//! - The changelog report renderer
//! - Character-safe chunking of long reports
//! - The error and logging facilities shared by the other crates

pub mod chunk;
pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod model;

// Re-export commonly used types
pub use chunk::chunk_text;
pub use diff::{compute_diff, render_report, DiffResult, UpdatedEntity};
pub use errors::{ExError, ExErrorKind, ModiffError, Result};
pub use model::{Entity, ParentRef, RawRecord, Snapshot};
