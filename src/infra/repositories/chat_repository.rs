//! Chat log repository over the in-memory dataset.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::{ChatMessage, Sender};
use crate::errors::AppResult;
use crate::infra::dataset::Dataset;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Chat repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ChatRepository: Send + Sync {
    /// Scoped conversation, oldest first.
    /// `None` = the super_admin conversation; `Some(client_id)` = that client's.
    async fn list(&self, scope: Option<i64>) -> AppResult<Vec<ChatMessage>>;

    /// Append a message stamped with the current time
    async fn append(
        &self,
        client_id: Option<i64>,
        sender: Sender,
        body: String,
    ) -> AppResult<ChatMessage>;

    /// Remove a client's conversation; returns how many messages were removed
    async fn delete_by_client(&self, client_id: i64) -> AppResult<usize>;
}

/// Concrete implementation backed by the shared dataset
pub struct ChatStore {
    dataset: Arc<Dataset>,
}

impl ChatStore {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }
}

#[async_trait]
impl ChatRepository for ChatStore {
    async fn list(&self, scope: Option<i64>) -> AppResult<Vec<ChatMessage>> {
        let chat = self.dataset.chat.read().await;
        Ok(chat
            .iter()
            .filter(|m| m.client_id == scope)
            .cloned()
            .collect())
    }

    async fn append(
        &self,
        client_id: Option<i64>,
        sender: Sender,
        body: String,
    ) -> AppResult<ChatMessage> {
        let record = ChatMessage {
            id: self.dataset.next_chat_id(),
            client_id,
            sender,
            body,
            sent_at: Utc::now(),
        };
        self.dataset.chat.write().await.push(record.clone());
        Ok(record)
    }

    async fn delete_by_client(&self, client_id: i64) -> AppResult<usize> {
        let mut chat = self.dataset.chat.write().await;
        let before = chat.len();
        chat.retain(|m| m.client_id != Some(client_id));
        Ok(before - chat.len())
    }
}
