//! User repository over the in-memory dataset.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::{Permissions, Role, User};
use crate::errors::{AppError, AppResult};
use crate::infra::dataset::Dataset;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Fields of a user row about to be appended
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub role: Role,
    pub client_id: Option<i64>,
    pub is_approved: bool,
    pub department: Option<String>,
    pub position: Option<String>,
    pub permissions: Permissions,
}

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;

    /// Lookup by email, case-insensitive (the uniqueness key)
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    async fn list(&self) -> AppResult<Vec<User>>;

    async fn list_by_client(&self, client_id: i64) -> AppResult<Vec<User>>;

    async fn count(&self) -> AppResult<usize>;

    /// Append a new user with a freshly assigned id
    async fn create(&self, user: NewUser) -> AppResult<User>;

    /// Stamp last_login and return the updated record
    async fn record_login(&self, id: i64, date: NaiveDate) -> AppResult<User>;

    /// Approve every pending user of a client; returns how many changed
    async fn approve_pending_for_client(&self, client_id: i64) -> AppResult<usize>;

    /// Remove exactly one user
    async fn delete(&self, id: i64) -> AppResult<()>;

    /// Remove all users of a client; returns how many were removed
    async fn delete_by_client(&self, client_id: i64) -> AppResult<usize>;
}

/// Concrete implementation backed by the shared dataset
pub struct UserStore {
    dataset: Arc<Dataset>,
}

impl UserStore {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        let users = self.dataset.users.read().await;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let users = self.dataset.users.read().await;
        Ok(users
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        Ok(self.dataset.users.read().await.clone())
    }

    async fn list_by_client(&self, client_id: i64) -> AppResult<Vec<User>> {
        let users = self.dataset.users.read().await;
        Ok(users
            .iter()
            .filter(|u| u.client_id == Some(client_id))
            .cloned()
            .collect())
    }

    async fn count(&self) -> AppResult<usize> {
        Ok(self.dataset.users.read().await.len())
    }

    async fn create(&self, user: NewUser) -> AppResult<User> {
        let record = User {
            id: self.dataset.next_user_id(),
            email: user.email,
            name: user.name,
            role: user.role,
            client_id: user.client_id,
            is_approved: user.is_approved,
            last_login: None,
            department: user.department,
            position: user.position,
            permissions: user.permissions,
        };
        self.dataset.users.write().await.push(record.clone());
        Ok(record)
    }

    async fn record_login(&self, id: i64, date: NaiveDate) -> AppResult<User> {
        let mut users = self.dataset.users.write().await;
        let user = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(AppError::NotFound)?;
        user.last_login = Some(date);
        Ok(user.clone())
    }

    async fn approve_pending_for_client(&self, client_id: i64) -> AppResult<usize> {
        let mut users = self.dataset.users.write().await;
        let mut changed = 0;
        for user in users
            .iter_mut()
            .filter(|u| u.client_id == Some(client_id) && !u.is_approved)
        {
            user.is_approved = true;
            changed += 1;
        }
        Ok(changed)
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let mut users = self.dataset.users.write().await;
        let before = users.len();
        users.retain(|u| u.id != id);
        if users.len() == before {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    async fn delete_by_client(&self, client_id: i64) -> AppResult<usize> {
        let mut users = self.dataset.users.write().await;
        let before = users.len();
        users.retain(|u| u.client_id != Some(client_id));
        Ok(before - users.len())
    }
}
