//! Running a diff command end to end.

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Instant;

use modiff_core::diff::{compute_diff, render_report, DiffResult};
use modiff_core::errors::{ModiffError, Result};
use modiff_core::model::Snapshot;
use modiff_core::{log_op_end, log_op_error, log_op_start};
use modiff_core_types::RequestId;
use serde::Serialize;
use tracing::Instrument;

use crate::commands::parse::DiffCommand;
use crate::fetch::RevisionSource;
use crate::frontend::user_message;
use crate::reply::{deliver, ReplyChannel};

/// Collaborators shared by every command. Immutable; commands share nothing
/// else.
pub struct CommandContext {
    pub source: Arc<dyn RevisionSource>,
    pub chunk_limit: NonZeroUsize,
}

/// The diff of one command, with enough context to render or serialize it
#[derive(Debug, Clone, Serialize)]
pub struct DiffReport {
    pub collection_id: String,
    pub from_revision: u32,
    pub to_revision: u32,
    pub diff: DiffResult,
}

impl DiffReport {
    /// Render the chat changelog text
    pub fn render(&self) -> String {
        render_report(
            &self.collection_id,
            self.from_revision,
            self.to_revision,
            &self.diff,
        )
    }
}

/// How a single chat line was handled
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    /// Not a diff command; nothing was sent
    Ignored,
    /// The report went out in `chunks` messages
    Replied { chunks: usize },
    /// The command failed. For anything but a delivery failure the user was
    /// sent a short explanation.
    Failed(ModiffError),
}

/// Fetch both revisions concurrently, normalize and diff them.
///
/// # Errors
///
/// `ModiffError::Remote` if either fetch fails; no partial diff is produced.
pub async fn run_diff(cmd: &DiffCommand, source: &dyn RevisionSource) -> Result<DiffReport> {
    let (old_records, new_records) = tokio::try_join!(
        source.fetch_revision(&cmd.collection_id, cmd.from_revision),
        source.fetch_revision(&cmd.collection_id, cmd.to_revision),
    )?;

    let old = Snapshot::from_records(&cmd.collection_id, cmd.from_revision, &old_records);
    let new = Snapshot::from_records(&cmd.collection_id, cmd.to_revision, &new_records);

    Ok(DiffReport {
        collection_id: cmd.collection_id.clone(),
        from_revision: cmd.from_revision,
        to_revision: cmd.to_revision,
        diff: compute_diff(&old.entities, &new.entities),
    })
}

async fn run_and_deliver(
    ctx: &CommandContext,
    cmd: &DiffCommand,
    channel: &dyn ReplyChannel,
) -> Result<usize> {
    let report = run_diff(cmd, ctx.source.as_ref()).await?;
    deliver(&report.render(), ctx.chunk_limit, channel).await
}

/// Handle one chat line and reply on `channel`.
///
/// Lines that are not diff commands are ignored without logging. Errors
/// never escape: they are logged with full detail and, unless the channel
/// itself is what failed, answered with a short user-facing message.
pub async fn respond(ctx: &CommandContext, line: &str, channel: &dyn ReplyChannel) -> CommandOutcome {
    let Some(parsed) = DiffCommand::parse_line(line).transpose() else {
        return CommandOutcome::Ignored;
    };
    handle(ctx, line, parsed, channel).await
}

/// Run an already parsed command and reply on `channel`, with the same
/// logging and error replies as [`respond`].
pub async fn respond_to(
    ctx: &CommandContext,
    cmd: &DiffCommand,
    channel: &dyn ReplyChannel,
) -> CommandOutcome {
    handle(ctx, &cmd.to_string(), Ok(cmd.clone()), channel).await
}

async fn handle(
    ctx: &CommandContext,
    line: &str,
    parsed: Result<DiffCommand>,
    channel: &dyn ReplyChannel,
) -> CommandOutcome {
    let request_id = RequestId::new();
    let span = tracing::info_span!("command", request_id = %request_id);

    async {
        let start = Instant::now();
        log_op_start!("handle_command", line = line);

        let result = match &parsed {
            Ok(cmd) => run_and_deliver(ctx, cmd, channel).await,
            Err(err) => Err(err.clone()),
        };

        match result {
            Ok(chunks) => {
                log_op_end!(
                    "handle_command",
                    duration_ms = start.elapsed().as_millis() as u64,
                    chunk_count = chunks
                );
                CommandOutcome::Replied { chunks }
            }
            Err(err) => {
                log_op_error!(
                    "handle_command",
                    err.clone(),
                    duration_ms = start.elapsed().as_millis() as u64
                );
                if !matches!(err, ModiffError::Delivery { .. }) {
                    if let Err(reply_err) =
                        deliver(&user_message(&err), ctx.chunk_limit, channel).await
                    {
                        tracing::warn!(error = %reply_err, "could not send error reply");
                    }
                }
                CommandOutcome::Failed(err)
            }
        }
    }
    .instrument(span)
    .await
}
