//! User-facing text for failed commands.
//!
//! Operators get the full error in the logs; chat users get one of these.

use modiff_core::errors::ModiffError;

use crate::commands::USAGE;

/// Short reply for a failed command
pub fn user_message(err: &ModiffError) -> String {
    match err {
        ModiffError::Usage { reason } => format!("{}\n{}", reason, USAGE),
        ModiffError::Remote {
            collection_id,
            revision,
            ..
        } => format!(
            "Could not fetch revision {} of collection `{}`. Please try again later.",
            revision, collection_id
        ),
        _ => "Something went wrong while handling that command. Please try again later."
            .to_string(),
    }
}
