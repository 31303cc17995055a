//! Splitting of long report text into transport-sized segments.
//!
//! Chat transports reject messages above a fixed size, so a report is cut
//! into contiguous segments of at most `limit` characters. Lengths are
//! counted in Unicode scalar values, and cuts always land on a character
//! boundary.

use std::num::NonZeroUsize;

/// Discord's hard message maximum, in characters
pub const TRANSPORT_MAX_CHARS: usize = 2000;

/// Default segment size, below [`TRANSPORT_MAX_CHARS`] to leave room for
/// enclosing formatting
pub const DEFAULT_CHUNK_LIMIT: usize = 1900;

/// Split `text` into contiguous, non-overlapping segments of at most `limit`
/// characters each.
///
/// Concatenating the result yields `text` exactly. An empty input yields no
/// segments. For a text of `L` characters the result has `ceil(L / limit)`
/// segments.
pub fn chunk_text(text: &str, limit: NonZeroUsize) -> Vec<String> {
    let limit = limit.get();
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut count = 0;

    for (byte_pos, _) in text.char_indices() {
        if count == limit {
            chunks.push(text[start..byte_pos].to_string());
            start = byte_pos;
            count = 0;
        }
        count += 1;
    }

    if start < text.len() {
        chunks.push(text[start..].to_string());
    }

    chunks
}
