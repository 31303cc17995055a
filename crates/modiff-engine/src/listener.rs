//! Line-oriented command listener.
//!
//! Reads chat lines from any async reader and handles each as its own task.
//! Tasks share only the immutable [`CommandContext`] and the reply channel,
//! and are reaped as they finish.

use std::sync::Arc;

use modiff_core::errors::{ModiffError, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::task::{JoinError, JoinSet};

use crate::commands::{respond, CommandContext, CommandOutcome};
use crate::reply::ReplyChannel;

/// Totals for one listening session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListenSummary {
    pub replied: usize,
    pub failed: usize,
}

/// Handle every line of `input` until EOF, then wait for in-flight commands.
///
/// Finished commands are collected as they complete, so only in-flight
/// commands are held while the input stays open.
///
/// # Errors
///
/// `ModiffError::Internal` only if reading the input itself fails. Command
/// failures are answered in the channel and counted, never returned.
pub async fn listen<R>(
    input: R,
    ctx: Arc<CommandContext>,
    channel: Arc<dyn ReplyChannel>,
) -> Result<ListenSummary>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    let mut tasks = JoinSet::new();
    let mut summary = ListenSummary::default();
    let mut input_open = true;

    loop {
        tokio::select! {
            // next_line is cancel safe
            next = lines.next_line(), if input_open => {
                let next = next.map_err(|e| ModiffError::Internal {
                    message: format!("failed to read command input: {}", e),
                })?;
                match next {
                    Some(line) if line.trim().is_empty() => {}
                    Some(line) => {
                        let ctx = Arc::clone(&ctx);
                        let channel = Arc::clone(&channel);
                        tasks.spawn(async move { respond(&ctx, &line, channel.as_ref()).await });
                    }
                    None => input_open = false,
                }
            }
            Some(joined) = tasks.join_next(), if !tasks.is_empty() => {
                summary.record(joined);
                tracing::debug!(
                    op = "listen",
                    in_flight = tasks.len(),
                    replied = summary.replied,
                    failed = summary.failed,
                    "command finished"
                );
            }
            else => break,
        }
    }

    tracing::info!(
        replied = summary.replied,
        failed = summary.failed,
        "listener input closed"
    );
    Ok(summary)
}

impl ListenSummary {
    fn record(&mut self, joined: std::result::Result<CommandOutcome, JoinError>) {
        match joined {
            Ok(CommandOutcome::Ignored) => {}
            Ok(CommandOutcome::Replied { .. }) => self.replied += 1,
            Ok(CommandOutcome::Failed(_)) => self.failed += 1,
            Err(e) => {
                tracing::error!(error = %e, "command task panicked");
                self.failed += 1;
            }
        }
    }
}
