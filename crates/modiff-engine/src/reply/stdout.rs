use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

use super::{ReplyChannel, SendError};

/// Writes each message to stdout, followed by a newline
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutChannel;

#[async_trait]
impl ReplyChannel for StdoutChannel {
    async fn send(&self, text: &str) -> Result<(), SendError> {
        let mut line = String::with_capacity(text.len() + 1);
        line.push_str(text);
        if !text.ends_with('\n') {
            line.push('\n');
        }

        let mut out = tokio::io::stdout();
        out.write_all(line.as_bytes())
            .await
            .map_err(|e| SendError(format!("stdout write failed: {}", e)))?;
        out.flush()
            .await
            .map_err(|e| SendError(format!("stdout flush failed: {}", e)))
    }
}
