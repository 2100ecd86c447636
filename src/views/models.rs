//! View models returned by the renderer.
//!
//! Each struct is the JSON shape of one console section, computed fresh on
//! every request by linear scans over the dataset.

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{ChatMessage, Report, Transaction, UserResponse};

/// Rendered content for one section, tagged by section name
#[derive(Debug, Serialize, ToSchema)]
#[serde(tag = "section", rename_all = "snake_case")]
pub enum View {
    Dashboard(DashboardView),
    Clients(ClientsView),
    Staff(StaffView),
    Reports(ReportsView),
    Upload(UploadView),
    Chat(ChatView),
}

/// Aggregates for the landing dashboard.
///
/// Platform-wide for super_admin (`client_id` = None); filtered to one
/// client for everyone else.
#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardView {
    pub client_id: Option<i64>,
    /// Platform scope only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_clients: Option<usize>,
    /// Platform scope only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_clients: Option<usize>,
    pub user_count: usize,
    pub transaction_count: usize,
    pub flagged_count: usize,
    /// flagged / total * 100, zero when there are no transactions
    pub fraud_rate_pct: f64,
    pub total_amount: f64,
    pub recent_transactions: Vec<Transaction>,
    pub recent_reports: Vec<Report>,
}

/// One row of the manage-clients page
#[derive(Debug, Serialize, ToSchema)]
pub struct ClientRow {
    pub id: i64,
    pub name: String,
    pub industry: String,
    pub is_approved: bool,
    pub registration_date: chrono::NaiveDate,
    pub user_count: usize,
    pub transaction_count: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ClientsView {
    pub clients: Vec<ClientRow>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StaffView {
    pub members: Vec<UserResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReportsView {
    pub reports: Vec<Report>,
}

/// The upload page shows where fabricated rows will land plus the
/// most recent imports
#[derive(Debug, Serialize, ToSchema)]
pub struct UploadView {
    pub client_id: Option<i64>,
    pub recent_imports: Vec<Transaction>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ChatView {
    pub messages: Vec<ChatMessage>,
}
