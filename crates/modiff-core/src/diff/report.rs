//! Human-readable changelog renderer for revision diffs.

use crate::diff::model::DiffResult;
use crate::model::Entity;

/// Line emitted when both revisions hold the same entities at the same versions.
pub const NO_DIFFERENCES: &str = "No differences between these revisions.";

/// Render the chat report for a [`DiffResult`].
///
/// Header first, then the non-empty sections in fixed order: new, removed,
/// updated. With nothing to report the header is followed by
/// [`NO_DIFFERENCES`]. The output may be arbitrarily long; chunking is the
/// reporter's job.
pub fn render_report(collection_id: &str, rev_a: u32, rev_b: u32, diff: &DiffResult) -> String {
    let mut out = String::new();

    // Header
    out.push_str(&format!(
        "Collection `{collection_id}`: revision {rev_a} → revision {rev_b}\n"
    ));

    if diff.is_empty() {
        out.push('\n');
        out.push_str(NO_DIFFERENCES);
        out.push('\n');
        return out;
    }

    if !diff.added.is_empty() {
        out.push_str(&format!("\nNew ({}):\n", diff.added.len()));
        for entity in &diff.added {
            push_entity_line(&mut out, entity);
        }
    }

    if !diff.removed.is_empty() {
        out.push_str(&format!("\nRemoved ({}):\n", diff.removed.len()));
        for entity in &diff.removed {
            push_entity_line(&mut out, entity);
        }
    }

    if !diff.updated.is_empty() {
        out.push_str(&format!("\nUpdated ({}):\n", diff.updated.len()));
        for change in &diff.updated {
            out.push_str(&format!(
                "- {}: v{} → v{}\n",
                change.after.name, change.before.version, change.after.version
            ));
        }
    }

    out
}

fn push_entity_line(out: &mut String, entity: &Entity) {
    out.push_str(&format!("- {} (v{})\n", entity.name, entity.version));
}
