//! Durable session slot.
//!
//! Exactly one "current user" exists at a time. The snapshot is serialized
//! to a single JSON file: written on login, removed on logout, read once at
//! process start. The snapshot is not rewritten when the underlying user
//! record is mutated later, so the two copies can drift apart — a quirk the
//! console inherits deliberately.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::domain::User;
use crate::errors::{AppError, AppResult};

/// Holds the nullable current user and mirrors it to disk
pub struct SessionStore {
    path: PathBuf,
    current: RwLock<Option<User>>,
}

impl SessionStore {
    /// Open the store, restoring any snapshot left by a previous run.
    /// A malformed or unreadable file is treated as "not logged in".
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let current = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => {
                    tracing::info!(email = %user.email, "Restored session snapshot");
                    Some(user)
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Discarding malformed session snapshot");
                    None
                }
            },
            Err(_) => None,
        };

        Self {
            path,
            current: RwLock::new(current),
        }
    }

    /// The current user, if any
    pub fn current(&self) -> Option<User> {
        self.current.read().expect("session lock poisoned").clone()
    }

    /// Write the snapshot: in memory first, then the durable file
    pub fn set(&self, user: &User) -> AppResult<()> {
        *self.current.write().expect("session lock poisoned") = Some(user.clone());

        let raw = serde_json::to_string_pretty(user)
            .map_err(|e| AppError::internal(format!("Session serialize failed: {}", e)))?;
        fs::write(&self.path, raw)
            .map_err(|e| AppError::internal(format!("Session write failed: {}", e)))?;
        Ok(())
    }

    /// Clear the slot and remove the durable file
    pub fn clear(&self) -> AppResult<()> {
        *self.current.write().expect("session lock poisoned") = None;

        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::internal(format!("Session remove failed: {}", e))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Permissions, Role};

    fn sample_user() -> User {
        User {
            id: 1,
            email: "admin@fraudplatform.com".to_string(),
            name: "Platform Admin".to_string(),
            role: Role::SuperAdmin,
            client_id: None,
            is_approved: true,
            last_login: None,
            department: None,
            position: None,
            permissions: Permissions::all(),
        }
    }

    fn temp_path(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("fraudboard-session-{}-{}.json", tag, std::process::id()))
    }

    #[test]
    fn snapshot_survives_a_reopen() {
        let path = temp_path("reopen");
        let store = SessionStore::open(&path);
        store.set(&sample_user()).unwrap();

        let reopened = SessionStore::open(&path);
        let restored = reopened.current().expect("snapshot restored");
        assert_eq!(restored.id, 1);
        assert_eq!(restored.email, "admin@fraudplatform.com");

        reopened.clear().unwrap();
        assert!(reopened.current().is_none());
        assert!(!path.exists());
    }

    #[test]
    fn clear_is_idempotent_without_a_file() {
        let path = temp_path("idempotent");
        let store = SessionStore::open(&path);
        assert!(store.current().is_none());
        store.clear().unwrap();
        store.clear().unwrap();
    }

    #[test]
    fn malformed_snapshot_is_discarded() {
        let path = temp_path("malformed");
        fs::write(&path, "{ not json").unwrap();
        let store = SessionStore::open(&path);
        assert!(store.current().is_none());
        fs::remove_file(&path).ok();
    }
}
