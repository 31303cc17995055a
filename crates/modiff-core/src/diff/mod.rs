//! Revision diff engine.
//!
//! Compares the entities of two collection snapshots and classifies each as
//! added, removed, or updated, then renders the result as chat text.
//!
//! ## Entry point
//!
//! ```
//! use modiff_core::diff::{compute_diff, render_report};
//! use modiff_core::model::Entity;
//!
//! let old = vec![Entity::new("1", "A", "1.0")];
//! let new = vec![Entity::new("1", "A", "1.1")];
//! let diff = compute_diff(&old, &new);
//! let text = render_report("myslug", 1, 2, &diff);
//! assert!(text.contains("A: v1.0 → v1.1"));
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: identical inputs produce identical output. `added` and
//!   `updated` follow the order of the new snapshot, `removed` the order of
//!   the old one. Nothing is re-sorted.
//! - **Opaque versions**: versions are compared for equality only.
//! - **Last wins**: duplicate ids within one snapshot resolve to the
//!   later-indexed entry.

pub mod engine;
pub mod model;
pub mod report;

pub use engine::compute_diff;
pub use model::{DiffResult, UpdatedEntity};
pub use report::render_report;
