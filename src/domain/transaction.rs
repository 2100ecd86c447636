//! Transaction domain entity.
//!
//! Fraud fields are cosmetic sample values; nothing in the system
//! computes them from transaction content.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A monetary transaction belonging to a client
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Transaction {
    pub id: i64,
    pub client_id: i64,
    /// Amount, always >= 0
    pub amount: f64,
    pub date: NaiveDate,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub is_fraud: bool,
    /// Cosmetic score in [0, 1]
    pub fraud_score: f64,
}
