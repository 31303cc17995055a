//! Subcommands and the setup they share.

pub mod diff;
pub mod listen;

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use modiff_core::errors::{ExErrorKind, ModiffError, Result};
use modiff_core::logging_facility;
use modiff_engine::config::AppConfig;
use modiff_engine::reply::{DiscordChannel, ReplyChannel, StdoutChannel};

/// A failed command that was already logged and answered on the reply
/// channel; only the exit status is left to report.
#[derive(Debug, thiserror::Error)]
#[error("command failed ({})", .0.code())]
pub(crate) struct Answered(pub ExErrorKind);

/// Load configuration and start logging with its profile
pub(crate) fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    let config = AppConfig::load(path)?;
    logging_facility::init(config.log_profile);
    Ok(config)
}

pub(crate) fn http_client(config: &AppConfig) -> anyhow::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(config.request_timeout)
        .build()
        .context("failed to build HTTP client")
}

/// Stdout unless a Discord channel id is given
pub(crate) fn reply_channel(
    config: &AppConfig,
    discord_channel: Option<&str>,
    http: reqwest::Client,
) -> Result<Arc<dyn ReplyChannel>> {
    let Some(channel_id) = discord_channel else {
        return Ok(Arc::new(StdoutChannel));
    };

    let token = config.discord.bot_token.clone().ok_or_else(|| {
        ModiffError::config(
            "discord.bot_token is required with --discord-channel (set MODIFF_DISCORD__BOT_TOKEN)",
        )
    })?;

    Ok(Arc::new(DiscordChannel::new(
        &config.discord,
        token,
        channel_id,
        http,
    )))
}
