//! Reply channels and in-order delivery of chunked reports.

pub mod discord;
pub mod memory;
pub mod stdout;

use std::num::NonZeroUsize;
use std::time::Instant;

use async_trait::async_trait;
use modiff_core::chunk::chunk_text;
use modiff_core::errors::{ModiffError, Result};
use modiff_core::{log_op_end, log_op_error, log_op_start};
use thiserror::Error;

pub use discord::DiscordChannel;
pub use memory::MemoryChannel;
pub use stdout::StdoutChannel;

/// A single message could not be sent
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct SendError(pub String);

/// Where replies go. The only operation the core needs.
#[async_trait]
pub trait ReplyChannel: Send + Sync {
    async fn send(&self, text: &str) -> std::result::Result<(), SendError>;
}

/// Chunk `text` and send each chunk in order, awaiting every send before the
/// next.
///
/// Returns the number of chunks sent. Empty text sends nothing. The first
/// failed send stops delivery; chunks already sent stay sent.
///
/// # Errors
///
/// `ModiffError::Delivery` carrying how many chunks went out before the
/// failure.
pub async fn deliver(
    text: &str,
    limit: NonZeroUsize,
    channel: &dyn ReplyChannel,
) -> Result<usize> {
    let start = Instant::now();
    let chunks = chunk_text(text, limit);
    let total = chunks.len();
    log_op_start!("deliver", chunk_count = total);

    for (delivered, chunk) in chunks.iter().enumerate() {
        if let Err(e) = channel.send(chunk).await {
            let err = ModiffError::Delivery {
                delivered,
                total,
                message: e.to_string(),
            };
            log_op_error!(
                "deliver",
                err.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            return Err(err);
        }
    }

    log_op_end!(
        "deliver",
        duration_ms = start.elapsed().as_millis() as u64,
        chunk_count = total
    );
    Ok(total)
}
