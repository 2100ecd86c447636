//! View router.
//!
//! One renderer parametrized by role and section replaces the original
//! console's per-page rendering routines. Data fetch goes through the
//! repositories; shaping lives in `models`. Aggregates are linear scans,
//! recomputed on every call, never cached.

mod models;

use std::str::FromStr;
use std::sync::Arc;

pub use models::{
    ChatView, ClientRow, ClientsView, DashboardView, ReportsView, StaffView, UploadView, View,
};

use crate::config::RECENT_LIST_LIMIT;
use crate::domain::{Role, User, UserResponse};
use crate::errors::{AppError, AppResult};
use crate::infra::{
    ChatRepository, ClientRepository, ReportRepository, TransactionRepository, UserRepository,
};

/// Console sections a user can navigate to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Dashboard,
    Clients,
    Staff,
    Reports,
    Upload,
    Chat,
}

impl FromStr for Section {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dashboard" => Ok(Section::Dashboard),
            "clients" => Ok(Section::Clients),
            "staff" => Ok(Section::Staff),
            "reports" => Ok(Section::Reports),
            "upload" => Ok(Section::Upload),
            "chat" => Ok(Section::Chat),
            other => Err(AppError::BadRequest(format!("Unknown section: {}", other))),
        }
    }
}

/// Role/section-keyed view renderer
pub struct Renderer {
    clients: Arc<dyn ClientRepository>,
    users: Arc<dyn UserRepository>,
    transactions: Arc<dyn TransactionRepository>,
    reports: Arc<dyn ReportRepository>,
    chat: Arc<dyn ChatRepository>,
}

impl Renderer {
    pub fn new(
        clients: Arc<dyn ClientRepository>,
        users: Arc<dyn UserRepository>,
        transactions: Arc<dyn TransactionRepository>,
        reports: Arc<dyn ReportRepository>,
        chat: Arc<dyn ChatRepository>,
    ) -> Self {
        Self {
            clients,
            users,
            transactions,
            reports,
            chat,
        }
    }

    /// Render one section for the given user, enforcing section access
    pub async fn render(&self, actor: &User, section: Section) -> AppResult<View> {
        authorize(actor, section)?;
        let scope = actor.scope();

        match section {
            Section::Dashboard => Ok(View::Dashboard(self.dashboard(scope).await?)),
            Section::Clients => Ok(View::Clients(self.clients_overview().await?)),
            Section::Staff => Ok(View::Staff(self.staff(scope).await?)),
            Section::Reports => Ok(View::Reports(ReportsView {
                reports: self.reports.list(scope).await?,
            })),
            Section::Upload => Ok(View::Upload(self.upload(scope).await?)),
            Section::Chat => Ok(View::Chat(ChatView {
                messages: self.chat.list(scope).await?,
            })),
        }
    }

    /// Dashboard aggregates; platform-wide when `scope` is None
    pub async fn dashboard(&self, scope: Option<i64>) -> AppResult<DashboardView> {
        let transactions = self.transactions.list(scope).await?;
        let transaction_count = transactions.len();
        let flagged_count = transactions.iter().filter(|t| t.is_fraud).count();
        let total_amount = transactions.iter().map(|t| t.amount).sum();
        let fraud_rate_pct = if transaction_count == 0 {
            0.0
        } else {
            round1(flagged_count as f64 / transaction_count as f64 * 100.0)
        };

        let (total_clients, pending_clients, user_count) = match scope {
            None => {
                let clients = self.clients.list().await?;
                let pending = clients.iter().filter(|c| !c.is_approved).count();
                (Some(clients.len()), Some(pending), self.users.count().await?)
            }
            Some(client_id) => (None, None, self.users.list_by_client(client_id).await?.len()),
        };

        let recent_transactions = transactions
            .iter()
            .take(RECENT_LIST_LIMIT)
            .cloned()
            .collect();
        let recent_reports = self
            .reports
            .list(scope)
            .await?
            .into_iter()
            .take(RECENT_LIST_LIMIT)
            .collect();

        Ok(DashboardView {
            client_id: scope,
            total_clients,
            pending_clients,
            user_count,
            transaction_count,
            flagged_count,
            fraud_rate_pct,
            total_amount,
            recent_transactions,
            recent_reports,
        })
    }

    async fn clients_overview(&self) -> AppResult<ClientsView> {
        let clients = self.clients.list().await?;
        let users = self.users.list().await?;
        let transactions = self.transactions.list(None).await?;

        let rows = clients
            .into_iter()
            .map(|client| {
                let user_count = users
                    .iter()
                    .filter(|u| u.client_id == Some(client.id))
                    .count();
                let transaction_count = transactions
                    .iter()
                    .filter(|t| t.client_id == client.id)
                    .count();
                ClientRow {
                    id: client.id,
                    name: client.name,
                    industry: client.industry,
                    is_approved: client.is_approved,
                    registration_date: client.registration_date,
                    user_count,
                    transaction_count,
                }
            })
            .collect();

        Ok(ClientsView { clients: rows })
    }

    async fn staff(&self, scope: Option<i64>) -> AppResult<StaffView> {
        let members = match scope {
            Some(client_id) => self.users.list_by_client(client_id).await?,
            None => self.users.list().await?,
        };
        Ok(StaffView {
            members: members.into_iter().map(UserResponse::from).collect(),
        })
    }

    async fn upload(&self, scope: Option<i64>) -> AppResult<UploadView> {
        let recent_imports = self
            .transactions
            .list(scope)
            .await?
            .into_iter()
            .take(RECENT_LIST_LIMIT)
            .collect();
        Ok(UploadView {
            client_id: scope,
            recent_imports,
        })
    }
}

/// Section access by role; wrong role gets 403
fn authorize(actor: &User, section: Section) -> AppResult<()> {
    let allowed = match section {
        Section::Clients => actor.role.is_super_admin(),
        Section::Staff => actor.role != Role::Staff,
        Section::Upload => actor.role != Role::Staff || actor.permissions.upload,
        Section::Reports => actor.role != Role::Staff || actor.permissions.reports,
        Section::Dashboard => actor.permissions.dashboard,
        Section::Chat => true,
    };

    if allowed {
        Ok(())
    } else {
        Err(AppError::Forbidden)
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_parse_from_path_segments() {
        assert_eq!(Section::from_str("dashboard").unwrap(), Section::Dashboard);
        assert_eq!(Section::from_str("clients").unwrap(), Section::Clients);
        assert!(Section::from_str("payroll").is_err());
    }

    #[test]
    fn fraud_rate_rounds_to_one_decimal() {
        assert_eq!(round1(1.0 / 3.0 * 100.0), 33.3);
        assert_eq!(round1(0.0), 0.0);
    }
}
