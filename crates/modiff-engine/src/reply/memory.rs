use std::sync::Mutex;

use async_trait::async_trait;

use super::{ReplyChannel, SendError};

/// Records sent messages in memory. Optionally rejects the message at a
/// given zero-based index, and every message after it.
#[derive(Debug, Default)]
pub struct MemoryChannel {
    sent: Mutex<Vec<String>>,
    fail_at: Option<usize>,
}

impl MemoryChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// A channel whose `index`-th send fails
    pub fn failing_at(index: usize) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_at: Some(index),
        }
    }

    /// Messages successfully sent so far, in order
    pub fn messages(&self) -> Vec<String> {
        self.sent.lock().map(|m| m.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl ReplyChannel for MemoryChannel {
    async fn send(&self, text: &str) -> Result<(), SendError> {
        let mut sent = self
            .sent
            .lock()
            .map_err(|_| SendError("memory channel poisoned".to_string()))?;
        if self.fail_at.is_some_and(|i| sent.len() >= i) {
            return Err(SendError(format!("rejected message {}", sent.len())));
        }
        sent.push(text.to_string());
        Ok(())
    }
}
