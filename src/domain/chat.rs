//! Chat message entity for the scripted assistant widget.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Who wrote a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Assistant,
}

/// One entry in the two-party chat log
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatMessage {
    pub id: i64,
    /// Client the conversation belongs to; `None` for super_admin chats
    pub client_id: Option<i64>,
    pub sender: Sender,
    pub body: String,
    pub sent_at: DateTime<Utc>,
}
