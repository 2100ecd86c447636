//! Report repository over the in-memory dataset.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::{Report, ReportKind};
use crate::errors::AppResult;
use crate::infra::dataset::Dataset;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Fields of a report row about to be appended
#[derive(Debug, Clone)]
pub struct NewReport {
    pub name: String,
    pub kind: ReportKind,
    pub date: NaiveDate,
    pub client_id: Option<i64>,
}

/// Report repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ReportRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Report>>;

    /// Scoped rows, most recent (highest id) first.
    /// `None` = every report; `Some(client_id)` = that client's reports only.
    async fn list(&self, scope: Option<i64>) -> AppResult<Vec<Report>>;

    /// Append a new report with a freshly assigned id
    async fn create(&self, report: NewReport) -> AppResult<Report>;

    /// Remove all reports scoped to a client; returns how many were removed
    async fn delete_by_client(&self, client_id: i64) -> AppResult<usize>;
}

/// Concrete implementation backed by the shared dataset
pub struct ReportStore {
    dataset: Arc<Dataset>,
}

impl ReportStore {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }
}

#[async_trait]
impl ReportRepository for ReportStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Report>> {
        let reports = self.dataset.reports.read().await;
        Ok(reports.iter().find(|r| r.id == id).cloned())
    }

    async fn list(&self, scope: Option<i64>) -> AppResult<Vec<Report>> {
        let reports = self.dataset.reports.read().await;
        let mut rows: Vec<Report> = reports
            .iter()
            .filter(|r| scope.map_or(true, |client_id| r.client_id == Some(client_id)))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(rows)
    }

    async fn create(&self, report: NewReport) -> AppResult<Report> {
        let record = Report {
            id: self.dataset.next_report_id(),
            name: report.name,
            kind: report.kind,
            date: report.date,
            client_id: report.client_id,
        };
        self.dataset.reports.write().await.push(record.clone());
        Ok(record)
    }

    async fn delete_by_client(&self, client_id: i64) -> AppResult<usize> {
        let mut reports = self.dataset.reports.write().await;
        let before = reports.len();
        reports.retain(|r| r.client_id != Some(client_id));
        Ok(before - reports.len())
    }
}
