//! Transient flash notifications.
//!
//! Every mutating action pushes a flash; entries expire a fixed number of
//! seconds after creation and are pruned lazily on read.

use std::sync::Mutex;
use std::time::{Duration, Instant};

use serde::Serialize;
use utoipa::ToSchema;

use crate::config::FLASH_TTL_SECONDS;

/// Severity of a flash message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum FlashLevel {
    Success,
    Info,
    Warning,
    Danger,
}

/// Flash entry as returned to the console
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FlashView {
    pub level: FlashLevel,
    pub message: String,
}

struct Flash {
    level: FlashLevel,
    message: String,
    created: Instant,
}

/// In-memory store of not-yet-expired flash messages
pub struct FlashStore {
    ttl: Duration,
    entries: Mutex<Vec<Flash>>,
}

impl FlashStore {
    pub fn new() -> Self {
        Self::with_ttl(Duration::from_secs(FLASH_TTL_SECONDS))
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(Vec::new()),
        }
    }

    /// Record a flash message
    pub fn push(&self, level: FlashLevel, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(?level, %message, "Flash");
        self.entries.lock().expect("flash lock poisoned").push(Flash {
            level,
            message,
            created: Instant::now(),
        });
    }

    /// All messages still inside their display window; expired ones are dropped
    pub fn active(&self) -> Vec<FlashView> {
        let mut entries = self.entries.lock().expect("flash lock poisoned");
        entries.retain(|f| f.created.elapsed() < self.ttl);
        entries
            .iter()
            .map(|f| FlashView {
                level: f.level,
                message: f.message.clone(),
            })
            .collect()
    }
}

impl Default for FlashStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_expire_after_the_ttl() {
        let store = FlashStore::with_ttl(Duration::from_millis(30));
        store.push(FlashLevel::Success, "Client approved");
        assert_eq!(store.active().len(), 1);

        std::thread::sleep(Duration::from_millis(40));
        assert!(store.active().is_empty());
    }

    #[test]
    fn active_returns_messages_in_insertion_order() {
        let store = FlashStore::new();
        store.push(FlashLevel::Info, "first");
        store.push(FlashLevel::Danger, "second");

        let active = store.active();
        assert_eq!(active.len(), 2);
        assert_eq!(active[0].message, "first");
        assert_eq!(active[1].level, FlashLevel::Danger);
    }
}
