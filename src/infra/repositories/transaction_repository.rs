//! Transaction repository over the in-memory dataset.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::Transaction;
use crate::errors::AppResult;
use crate::infra::dataset::Dataset;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Fields of a transaction row about to be appended
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub client_id: i64,
    pub amount: f64,
    pub date: NaiveDate,
    pub description: String,
    pub category: Option<String>,
    pub is_fraud: bool,
    pub fraud_score: f64,
}

/// Transaction repository trait for dependency injection.
///
/// `scope` of `None` means platform-wide; `Some(client_id)` filters
/// to one client's rows.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait TransactionRepository: Send + Sync {
    /// Scoped rows, most recent (highest id) first
    async fn list(&self, scope: Option<i64>) -> AppResult<Vec<Transaction>>;

    /// Append a new transaction with a freshly assigned id
    async fn create(&self, transaction: NewTransaction) -> AppResult<Transaction>;

    /// Remove all rows of a client; returns how many were removed
    async fn delete_by_client(&self, client_id: i64) -> AppResult<usize>;
}

/// Concrete implementation backed by the shared dataset
pub struct TransactionStore {
    dataset: Arc<Dataset>,
}

impl TransactionStore {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }
}

#[async_trait]
impl TransactionRepository for TransactionStore {
    async fn list(&self, scope: Option<i64>) -> AppResult<Vec<Transaction>> {
        let transactions = self.dataset.transactions.read().await;
        let mut rows: Vec<Transaction> = transactions
            .iter()
            .filter(|t| scope.map_or(true, |client_id| t.client_id == client_id))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(rows)
    }

    async fn create(&self, transaction: NewTransaction) -> AppResult<Transaction> {
        let record = Transaction {
            id: self.dataset.next_transaction_id(),
            client_id: transaction.client_id,
            amount: transaction.amount,
            date: transaction.date,
            description: transaction.description,
            category: transaction.category,
            is_fraud: transaction.is_fraud,
            fraud_score: transaction.fraud_score,
        };
        self.dataset.transactions.write().await.push(record.clone());
        Ok(record)
    }

    async fn delete_by_client(&self, client_id: i64) -> AppResult<usize> {
        let mut transactions = self.dataset.transactions.write().await;
        let before = transactions.len();
        transactions.retain(|t| t.client_id != client_id);
        Ok(before - transactions.len())
    }
}
