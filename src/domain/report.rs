//! Report domain entity.
//!
//! Reports are catalog rows only; every download serves the same
//! canned PDF blob.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Report categories offered by the console
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    FraudAnalysis,
    TransactionSummary,
    RiskAssessment,
    Performance,
    Compliance,
}

impl ReportKind {
    /// Every kind, for random selection during simulated generation
    pub const ALL: [ReportKind; 5] = [
        ReportKind::FraudAnalysis,
        ReportKind::TransactionSummary,
        ReportKind::RiskAssessment,
        ReportKind::Performance,
        ReportKind::Compliance,
    ];

    /// Human-readable label used when naming generated reports
    pub fn label(&self) -> &'static str {
        match self {
            ReportKind::FraudAnalysis => "Fraud Analysis",
            ReportKind::TransactionSummary => "Transaction Summary",
            ReportKind::RiskAssessment => "Risk Assessment",
            ReportKind::Performance => "Performance",
            ReportKind::Compliance => "Compliance",
        }
    }
}

/// A generated (or seeded) report row
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Report {
    pub id: i64,
    pub name: String,
    pub kind: ReportKind,
    pub date: NaiveDate,
    /// `None` for platform-wide reports
    pub client_id: Option<i64>,
}
