//! Listen command
//!
//! Usage: modiff listen [--discord-channel <ID>]
//!
//! Each stdin line is one chat message. Diff commands are answered as they
//! complete; everything else is ignored. Runs until stdin closes.

use std::path::Path;
use std::sync::Arc;

use clap::Args;
use modiff_engine::commands::CommandContext;
use modiff_engine::fetch::NexusClient;
use modiff_engine::listener::listen;
use tokio::io::BufReader;

#[derive(Debug, Args)]
pub struct ListenArgs {
    /// Reply in this Discord channel instead of stdout
    #[arg(long)]
    pub discord_channel: Option<String>,
}

/// Execute listen command
pub async fn execute(args: ListenArgs, config_path: Option<&Path>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;
    let http = super::http_client(&config)?;
    let channel = super::reply_channel(&config, args.discord_channel.as_deref(), http.clone())?;

    let ctx = Arc::new(CommandContext {
        source: Arc::new(NexusClient::new(&config.nexus, http)),
        chunk_limit: config.chunk_limit,
    });

    listen(BufReader::new(tokio::io::stdin()), ctx, channel).await?;
    Ok(())
}
