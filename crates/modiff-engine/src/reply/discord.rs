//! Discord channel replies over the REST API.

use async_trait::async_trait;
use modiff_core_types::Sensitive;
use reqwest::Client;
use serde_json::json;

use super::{ReplyChannel, SendError};
use crate::config::DiscordConfig;

/// Posts each message to one Discord text channel as the bot user
pub struct DiscordChannel {
    http: Client,
    messages_url: String,
    bot_token: Sensitive<String>,
}

impl DiscordChannel {
    pub fn new(
        config: &DiscordConfig,
        bot_token: Sensitive<String>,
        channel_id: &str,
        http: Client,
    ) -> Self {
        Self {
            http,
            messages_url: format!(
                "{}/channels/{}/messages",
                config.api_url.trim_end_matches('/'),
                channel_id
            ),
            bot_token,
        }
    }

    pub fn messages_url(&self) -> &str {
        &self.messages_url
    }
}

#[async_trait]
impl ReplyChannel for DiscordChannel {
    async fn send(&self, text: &str) -> Result<(), SendError> {
        let response = self
            .http
            .post(&self.messages_url)
            .header("Authorization", format!("Bot {}", self.bot_token.expose()))
            .json(&json!({ "content": text }))
            .send()
            .await
            .map_err(|e| SendError(format!("request failed: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        Err(SendError(format!("HTTP {}: {}", status.as_u16(), body)))
    }
}
