//! Client repository over the in-memory dataset.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::Client;
use crate::errors::{AppError, AppResult};
use crate::infra::dataset::Dataset;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Fields of a client row about to be appended
#[derive(Debug, Clone)]
pub struct NewClient {
    pub name: String,
    pub industry: String,
    pub is_approved: bool,
    pub registration_date: NaiveDate,
}

/// Client repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ClientRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Client>>;

    async fn list(&self) -> AppResult<Vec<Client>>;

    async fn count(&self) -> AppResult<usize>;

    /// Append a new client with a freshly assigned id
    async fn create(&self, client: NewClient) -> AppResult<Client>;

    /// Toggle the approval flag and return the updated record
    async fn set_approved(&self, id: i64, approved: bool) -> AppResult<Client>;

    /// Remove exactly one client (callers handle the cascade)
    async fn delete(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation backed by the shared dataset
pub struct ClientStore {
    dataset: Arc<Dataset>,
}

impl ClientStore {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }
}

#[async_trait]
impl ClientRepository for ClientStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Client>> {
        let clients = self.dataset.clients.read().await;
        Ok(clients.iter().find(|c| c.id == id).cloned())
    }

    async fn list(&self) -> AppResult<Vec<Client>> {
        Ok(self.dataset.clients.read().await.clone())
    }

    async fn count(&self) -> AppResult<usize> {
        Ok(self.dataset.clients.read().await.len())
    }

    async fn create(&self, client: NewClient) -> AppResult<Client> {
        let record = Client {
            id: self.dataset.next_client_id(),
            name: client.name,
            industry: client.industry,
            is_approved: client.is_approved,
            registration_date: client.registration_date,
        };
        self.dataset.clients.write().await.push(record.clone());
        Ok(record)
    }

    async fn set_approved(&self, id: i64, approved: bool) -> AppResult<Client> {
        let mut clients = self.dataset.clients.write().await;
        let client = clients
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(AppError::NotFound)?;
        client.is_approved = approved;
        Ok(client.clone())
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let mut clients = self.dataset.clients.write().await;
        let before = clients.len();
        clients.retain(|c| c.id != id);
        if clients.len() == before {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}
