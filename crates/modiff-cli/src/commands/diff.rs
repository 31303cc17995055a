//! Diff command
//!
//! Usage: modiff diff <COLLECTION> <REVISION_A> <REVISION_B> [--format text|json]
//!        [--discord-channel <ID>]

use std::path::Path;
use std::sync::Arc;

use clap::{Args, ValueEnum};
use modiff_core::errors::ModiffError;
use modiff_engine::commands::{respond_to, run_diff, CommandContext, CommandOutcome, DiffCommand};
use modiff_engine::fetch::NexusClient;

use super::Answered;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Chat changelog, chunked like a chat reply
    Text,
    /// The structured diff as JSON on stdout
    Json,
}

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// Collection slug followed by the two revision numbers
    #[arg(value_name = "ARGS")]
    pub args: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Post the text report to this Discord channel instead of stdout
    #[arg(long)]
    pub discord_channel: Option<String>,
}

/// Execute diff command
pub async fn execute(args: DiffArgs, config_path: Option<&Path>) -> anyhow::Result<()> {
    // Reject malformed commands before reading config or touching the network
    let command = DiffCommand::from_args(&args.args)?;

    let config = super::load_config(config_path)?;
    let http = super::http_client(&config)?;
    let channel = super::reply_channel(&config, args.discord_channel.as_deref(), http.clone())?;
    let source = NexusClient::new(&config.nexus, http);

    match args.format {
        OutputFormat::Text => {
            let ctx = CommandContext {
                source: Arc::new(source),
                chunk_limit: config.chunk_limit,
            };
            match respond_to(&ctx, &command, channel.as_ref()).await {
                CommandOutcome::Failed(err @ ModiffError::Delivery { .. }) => Err(err.into()),
                CommandOutcome::Failed(err) => Err(Answered(err.kind()).into()),
                CommandOutcome::Replied { .. } | CommandOutcome::Ignored => Ok(()),
            }
        }
        OutputFormat::Json => {
            let report = run_diff(&command, &source).await?;
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
    }
}
