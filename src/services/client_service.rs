//! Client management service.
//!
//! Approval cascades to the client's pending users; deletion cascades to
//! everything scoped to the client (users, transactions, reports, chat).

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::Client;
use crate::errors::AppResult;
use crate::infra::{
    ChatRepository, ClientRepository, FlashLevel, FlashStore, NewClient, ReportRepository,
    TransactionRepository, UserRepository,
};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Client management trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ClientService: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Client>>;

    /// Operator-added clients start approved (unlike self-registrations)
    async fn add(&self, name: String, industry: String) -> AppResult<Client>;

    /// Approve the client and every pending user belonging to it
    async fn approve(&self, id: i64) -> AppResult<Client>;

    /// Revoke approval for the client only; its users keep their flags
    async fn disapprove(&self, id: i64) -> AppResult<Client>;

    /// Delete the client and everything scoped to it
    async fn delete(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation over the in-memory repositories
pub struct ClientManager {
    clients: Arc<dyn ClientRepository>,
    users: Arc<dyn UserRepository>,
    transactions: Arc<dyn TransactionRepository>,
    reports: Arc<dyn ReportRepository>,
    chat: Arc<dyn ChatRepository>,
    flash: Arc<FlashStore>,
}

impl ClientManager {
    pub fn new(
        clients: Arc<dyn ClientRepository>,
        users: Arc<dyn UserRepository>,
        transactions: Arc<dyn TransactionRepository>,
        reports: Arc<dyn ReportRepository>,
        chat: Arc<dyn ChatRepository>,
        flash: Arc<FlashStore>,
    ) -> Self {
        Self {
            clients,
            users,
            transactions,
            reports,
            chat,
            flash,
        }
    }
}

#[async_trait]
impl ClientService for ClientManager {
    async fn list(&self) -> AppResult<Vec<Client>> {
        self.clients.list().await
    }

    async fn add(&self, name: String, industry: String) -> AppResult<Client> {
        let client = self
            .clients
            .create(NewClient {
                name,
                industry,
                is_approved: true,
                registration_date: Utc::now().date_naive(),
            })
            .await?;

        self.flash
            .push(FlashLevel::Success, format!("Client {} added", client.name));
        Ok(client)
    }

    async fn approve(&self, id: i64) -> AppResult<Client> {
        let client = self.clients.set_approved(id, true).await?;
        let approved_users = self.users.approve_pending_for_client(id).await?;

        tracing::info!(client = id, users = approved_users, "Client approved");
        self.flash.push(
            FlashLevel::Success,
            format!(
                "{} approved ({} pending user(s) activated)",
                client.name, approved_users
            ),
        );
        Ok(client)
    }

    async fn disapprove(&self, id: i64) -> AppResult<Client> {
        let client = self.clients.set_approved(id, false).await?;
        self.flash
            .push(FlashLevel::Warning, format!("{} suspended", client.name));
        Ok(client)
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        self.clients.delete(id).await?;
        let users = self.users.delete_by_client(id).await?;
        let transactions = self.transactions.delete_by_client(id).await?;
        let reports = self.reports.delete_by_client(id).await?;
        let messages = self.chat.delete_by_client(id).await?;

        tracing::info!(
            client = id,
            users,
            transactions,
            reports,
            messages,
            "Client deleted with cascade"
        );
        self.flash
            .push(FlashLevel::Success, "Client and its data removed");
        Ok(())
    }
}
