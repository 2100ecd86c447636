//! In-memory sample dataset.
//!
//! All four collections (plus the chat log) live in process memory, seeded
//! from hard-coded literals at startup and mutated in place. Nothing here is
//! re-persisted; only the current-user snapshot crosses a durable boundary
//! (see `infra::session`).
//!
//! Ids come from per-collection monotonic counters seeded past the literals,
//! so a delete can never cause a later insert to reuse an id.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::NaiveDate;
use tokio::sync::RwLock;

use crate::domain::{ChatMessage, Client, Permissions, Report, ReportKind, Role, Transaction, User};

/// Shared mutable application dataset
pub struct Dataset {
    pub clients: RwLock<Vec<Client>>,
    pub users: RwLock<Vec<User>>,
    pub transactions: RwLock<Vec<Transaction>>,
    pub reports: RwLock<Vec<Report>>,
    pub chat: RwLock<Vec<ChatMessage>>,
    next_client_id: AtomicI64,
    next_user_id: AtomicI64,
    next_transaction_id: AtomicI64,
    next_report_id: AtomicI64,
    next_chat_id: AtomicI64,
}

impl Dataset {
    /// An empty dataset, used by tests that build their own fixtures
    pub fn empty() -> Self {
        Self {
            clients: RwLock::new(Vec::new()),
            users: RwLock::new(Vec::new()),
            transactions: RwLock::new(Vec::new()),
            reports: RwLock::new(Vec::new()),
            chat: RwLock::new(Vec::new()),
            next_client_id: AtomicI64::new(1),
            next_user_id: AtomicI64::new(1),
            next_transaction_id: AtomicI64::new(1),
            next_report_id: AtomicI64::new(1),
            next_chat_id: AtomicI64::new(1),
        }
    }

    /// The demo dataset every server start begins from
    pub fn seeded() -> Self {
        let clients = seed_clients();
        let users = seed_users();
        let transactions = seed_transactions();
        let reports = seed_reports();

        let dataset = Self {
            next_client_id: AtomicI64::new(next_id(clients.iter().map(|c| c.id))),
            next_user_id: AtomicI64::new(next_id(users.iter().map(|u| u.id))),
            next_transaction_id: AtomicI64::new(next_id(transactions.iter().map(|t| t.id))),
            next_report_id: AtomicI64::new(next_id(reports.iter().map(|r| r.id))),
            next_chat_id: AtomicI64::new(1),
            clients: RwLock::new(clients),
            users: RwLock::new(users),
            transactions: RwLock::new(transactions),
            reports: RwLock::new(reports),
            chat: RwLock::new(Vec::new()),
        };

        tracing::debug!("Sample dataset seeded");
        dataset
    }

    pub fn next_client_id(&self) -> i64 {
        self.next_client_id.fetch_add(1, Ordering::Relaxed)
    }

    pub fn next_user_id(&self) -> i64 {
        self.next_user_id.fetch_add(1, Ordering::Relaxed)
    }

    pub fn next_transaction_id(&self) -> i64 {
        self.next_transaction_id.fetch_add(1, Ordering::Relaxed)
    }

    pub fn next_report_id(&self) -> i64 {
        self.next_report_id.fetch_add(1, Ordering::Relaxed)
    }

    pub fn next_chat_id(&self) -> i64 {
        self.next_chat_id.fetch_add(1, Ordering::Relaxed)
    }
}

fn next_id(ids: impl Iterator<Item = i64>) -> i64 {
    ids.max().unwrap_or(0) + 1
}

/// Seed-literal date; the literals below are all valid
fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

fn seed_clients() -> Vec<Client> {
    vec![
        Client {
            id: 1,
            name: "Acme Retail".to_string(),
            industry: "Retail".to_string(),
            is_approved: true,
            registration_date: date(2024, 11, 3),
        },
        Client {
            id: 2,
            name: "Northwind Logistics".to_string(),
            industry: "Logistics".to_string(),
            is_approved: true,
            registration_date: date(2025, 1, 17),
        },
        Client {
            id: 3,
            name: "Helios Energy".to_string(),
            industry: "Energy".to_string(),
            is_approved: false,
            registration_date: date(2025, 6, 2),
        },
    ]
}

fn seed_users() -> Vec<User> {
    vec![
        User {
            id: 1,
            email: "admin@fraudplatform.com".to_string(),
            name: "Platform Admin".to_string(),
            role: Role::SuperAdmin,
            client_id: None,
            is_approved: true,
            last_login: Some(date(2025, 7, 28)),
            department: None,
            position: None,
            permissions: Permissions::all(),
        },
        User {
            id: 2,
            email: "dana@acmeretail.com".to_string(),
            name: "Dana Whitfield".to_string(),
            role: Role::ClientAdmin,
            client_id: Some(1),
            is_approved: true,
            last_login: Some(date(2025, 7, 30)),
            department: None,
            position: None,
            permissions: Permissions::all(),
        },
        User {
            id: 3,
            email: "omar@acmeretail.com".to_string(),
            name: "Omar Haddad".to_string(),
            role: Role::Staff,
            client_id: Some(1),
            is_approved: true,
            last_login: None,
            department: Some("Finance".to_string()),
            position: Some("Analyst".to_string()),
            permissions: Permissions {
                dashboard: true,
                upload: true,
                reports: false,
                export: false,
            },
        },
        User {
            id: 4,
            email: "lena@northwindlog.com".to_string(),
            name: "Lena Brooks".to_string(),
            role: Role::ClientAdmin,
            client_id: Some(2),
            is_approved: true,
            last_login: Some(date(2025, 7, 14)),
            department: None,
            position: None,
            permissions: Permissions::all(),
        },
        // Admin of the still-pending Helios Energy client
        User {
            id: 5,
            email: "sven@heliosenergy.com".to_string(),
            name: "Sven Okafor".to_string(),
            role: Role::ClientAdmin,
            client_id: Some(3),
            is_approved: false,
            last_login: None,
            department: None,
            position: None,
            permissions: Permissions::all(),
        },
    ]
}

fn seed_transactions() -> Vec<Transaction> {
    vec![
        Transaction {
            id: 1,
            client_id: 1,
            amount: 129.99,
            date: date(2025, 7, 21),
            description: "POS purchase - downtown store".to_string(),
            category: Some("retail".to_string()),
            is_fraud: false,
            fraud_score: 0.04,
        },
        Transaction {
            id: 2,
            client_id: 1,
            amount: 4890.00,
            date: date(2025, 7, 22),
            description: "Bulk gift card purchase".to_string(),
            category: Some("retail".to_string()),
            is_fraud: true,
            fraud_score: 0.93,
        },
        Transaction {
            id: 3,
            client_id: 1,
            amount: 56.10,
            date: date(2025, 7, 23),
            description: "Online order #88412".to_string(),
            category: Some("ecommerce".to_string()),
            is_fraud: false,
            fraud_score: 0.11,
        },
        Transaction {
            id: 4,
            client_id: 1,
            amount: 2150.75,
            date: date(2025, 7, 26),
            description: "Refund reversal".to_string(),
            category: Some("refund".to_string()),
            is_fraud: true,
            fraud_score: 0.87,
        },
        Transaction {
            id: 5,
            client_id: 2,
            amount: 18300.00,
            date: date(2025, 7, 19),
            description: "Freight invoice FL-2209".to_string(),
            category: Some("invoice".to_string()),
            is_fraud: false,
            fraud_score: 0.22,
        },
        Transaction {
            id: 6,
            client_id: 2,
            amount: 740.00,
            date: date(2025, 7, 24),
            description: "Fuel surcharge settlement".to_string(),
            category: Some("fuel".to_string()),
            is_fraud: false,
            fraud_score: 0.08,
        },
        Transaction {
            id: 7,
            client_id: 2,
            amount: 9999.99,
            date: date(2025, 7, 27),
            description: "Duplicate carrier payout".to_string(),
            category: Some("payout".to_string()),
            is_fraud: true,
            fraud_score: 0.81,
        },
        Transaction {
            id: 8,
            client_id: 2,
            amount: 310.45,
            date: date(2025, 7, 29),
            description: "Warehouse supplies".to_string(),
            category: Some("supplies".to_string()),
            is_fraud: false,
            fraud_score: 0.05,
        },
    ]
}

fn seed_reports() -> Vec<Report> {
    vec![
        Report {
            id: 1,
            name: "Q2 Fraud Analysis".to_string(),
            kind: ReportKind::FraudAnalysis,
            date: date(2025, 7, 1),
            client_id: Some(1),
        },
        Report {
            id: 2,
            name: "June Transaction Summary".to_string(),
            kind: ReportKind::TransactionSummary,
            date: date(2025, 7, 3),
            client_id: Some(2),
        },
        Report {
            id: 3,
            name: "Platform Risk Assessment".to_string(),
            kind: ReportKind::RiskAssessment,
            date: date(2025, 7, 10),
            client_id: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_counters_start_past_the_literals() {
        let dataset = Dataset::seeded();
        assert_eq!(dataset.next_client_id(), 4);
        assert_eq!(dataset.next_user_id(), 6);
        assert_eq!(dataset.next_transaction_id(), 9);
        assert_eq!(dataset.next_report_id(), 4);
    }

    #[test]
    fn ids_stay_unique_after_interleaved_deletes() {
        let dataset = Dataset::seeded();
        // Simulate delete of the highest user id, then allocate twice:
        // the freed id must not be handed out again.
        let first = dataset.next_user_id();
        let second = dataset.next_user_id();
        assert_eq!(first, 5 + 1);
        assert_eq!(second, 5 + 2);
    }

    #[tokio::test]
    async fn seed_contains_the_demo_admin() {
        let dataset = Dataset::seeded();
        let users = dataset.users.read().await;
        let admin = users
            .iter()
            .find(|u| u.email == "admin@fraudplatform.com")
            .expect("seed admin present");
        assert_eq!(admin.id, 1);
        assert!(admin.is_approved);
        assert_eq!(admin.role, Role::SuperAdmin);
    }
}
