//! Simulated transaction upload.
//!
//! The named file is never opened. A fixed timer stands in for parsing and
//! ingestion; when it fires, one or two transactions with randomized fields
//! are appended to the dataset and a completion flash is pushed.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use rand::Rng;

use crate::domain::User;
use crate::errors::{AppError, AppResult};
use crate::infra::{ClientRepository, FlashLevel, FlashStore, NewTransaction, TransactionRepository};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Categories stamped onto fabricated transactions
const UPLOAD_CATEGORIES: &[&str] = &["retail", "ecommerce", "invoice", "payout", "refund"];

/// Fraud scores at or above this mark the fabricated row as fraud
const FRAUD_FLAG_THRESHOLD: f64 = 0.8;

/// Upload simulation trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UploadService: Send + Sync {
    /// Accept an "upload" for processing; returns the client the
    /// fabricated transactions will belong to. The append happens after
    /// the configured delay.
    async fn ingest(
        &self,
        actor: &User,
        file_name: &str,
        client_id: Option<i64>,
    ) -> AppResult<i64>;
}

/// Concrete implementation over the in-memory repositories
pub struct UploadSimulator {
    transactions: Arc<dyn TransactionRepository>,
    clients: Arc<dyn ClientRepository>,
    flash: Arc<FlashStore>,
    delay: Duration,
}

impl UploadSimulator {
    pub fn new(
        transactions: Arc<dyn TransactionRepository>,
        clients: Arc<dyn ClientRepository>,
        flash: Arc<FlashStore>,
        delay: Duration,
    ) -> Self {
        Self {
            transactions,
            clients,
            flash,
            delay,
        }
    }
}

#[async_trait]
impl UploadService for UploadSimulator {
    async fn ingest(
        &self,
        actor: &User,
        file_name: &str,
        client_id: Option<i64>,
    ) -> AppResult<i64> {
        // Client-bound users always ingest into their own client; the
        // operator must name one explicitly.
        let client_id = actor.client_id.or(client_id).ok_or_else(|| {
            AppError::BadRequest("No client specified for the upload".to_string())
        })?;

        if self.clients.find_by_id(client_id).await?.is_none() {
            return Err(AppError::NotFound);
        }

        self.flash.push(
            FlashLevel::Info,
            format!("{} received, processing transactions", file_name),
        );

        let transactions = self.transactions.clone();
        let flash = self.flash.clone();
        let delay = self.delay;
        let file_name = file_name.to_string();

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let rows = fabricate_rows(client_id, &file_name);
            let count = rows.len();
            for row in rows {
                if let Err(e) = transactions.create(row).await {
                    tracing::error!(error = %e, "Simulated ingest failed");
                    return;
                }
            }

            tracing::info!(client = client_id, count, file = %file_name, "Upload processed");
            flash.push(
                FlashLevel::Success,
                format!("{}: {} transaction(s) imported", file_name, count),
            );
        });

        Ok(client_id)
    }
}

/// Randomized rows standing in for parsed file content
fn fabricate_rows(client_id: i64, file_name: &str) -> Vec<NewTransaction> {
    let mut rng = rand::thread_rng();
    let count = rng.gen_range(1..=2);
    let today = Utc::now().date_naive();

    (0..count)
        .map(|_| {
            let amount = (rng.gen_range(10.0..5000.0_f64) * 100.0).round() / 100.0;
            let fraud_score = (rng.gen::<f64>() * 100.0).round() / 100.0;
            let category = UPLOAD_CATEGORIES[rng.gen_range(0..UPLOAD_CATEGORIES.len())];
            NewTransaction {
                client_id,
                amount,
                date: today,
                description: format!("Imported from {}", file_name),
                category: Some(category.to_string()),
                is_fraud: fraud_score >= FRAUD_FLAG_THRESHOLD,
                fraud_score,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fabricated_rows_stay_in_bounds() {
        for _ in 0..50 {
            let rows = fabricate_rows(1, "q3.csv");
            assert!((1..=2).contains(&rows.len()));
            for row in rows {
                assert!(row.amount >= 0.0);
                assert!((0.0..=1.0).contains(&row.fraud_score));
                assert_eq!(row.is_fraud, row.fraud_score >= FRAUD_FLAG_THRESHOLD);
                assert_eq!(row.client_id, 1);
            }
        }
    }
}
