//! Scripted chat assistant.
//!
//! No language model anywhere: a reply is drawn uniformly at random from a
//! fixed list and appended after the same fixed delay every other simulated
//! action uses. The assistant never reads the question.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;

use crate::domain::{ChatMessage, Sender};
use crate::errors::AppResult;
use crate::infra::ChatRepository;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Everything the "AI" is capable of saying
pub(crate) const CANNED_REPLIES: &[&str] = &[
    "I've reviewed the recent activity and nothing unusual stands out.",
    "There are a few transactions with elevated fraud scores worth a look.",
    "Your fraud rate is trending slightly below last month.",
    "I'd recommend reviewing the flagged transactions in your dashboard.",
    "The latest upload has been scored; high-risk rows are marked.",
    "Consider generating a risk assessment report for a deeper view.",
    "All monitored channels look healthy right now.",
    "I've noted a cluster of similar amounts; it may be worth verifying.",
];

/// Chat service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ChatService: Send + Sync {
    /// The scoped conversation, oldest first
    async fn history(&self, scope: Option<i64>) -> AppResult<Vec<ChatMessage>>;

    /// Append the user's message; a canned reply follows after the delay.
    /// Returns the user message (the reply is not part of the response).
    async fn send(&self, scope: Option<i64>, body: String) -> AppResult<ChatMessage>;
}

/// Concrete implementation over the in-memory chat log
pub struct ChatBoard {
    chat: Arc<dyn ChatRepository>,
    delay: Duration,
}

impl ChatBoard {
    pub fn new(chat: Arc<dyn ChatRepository>, delay: Duration) -> Self {
        Self { chat, delay }
    }
}

#[async_trait]
impl ChatService for ChatBoard {
    async fn history(&self, scope: Option<i64>) -> AppResult<Vec<ChatMessage>> {
        self.chat.list(scope).await
    }

    async fn send(&self, scope: Option<i64>, body: String) -> AppResult<ChatMessage> {
        let message = self.chat.append(scope, Sender::User, body).await?;

        let chat = self.chat.clone();
        let delay = self.delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let reply = pick_reply().to_string();
            if let Err(e) = chat.append(scope, Sender::Assistant, reply).await {
                tracing::error!(error = %e, "Scripted reply failed");
            }
        });

        Ok(message)
    }
}

fn pick_reply() -> &'static str {
    let mut rng = rand::thread_rng();
    CANNED_REPLIES[rng.gen_range(0..CANNED_REPLIES.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replies_come_from_the_script() {
        for _ in 0..20 {
            assert!(CANNED_REPLIES.contains(&pick_reply()));
        }
    }
}
