//! Simulated report generation and download.
//!
//! Generation appends a catalog row with a randomly chosen kind after a
//! fixed delay. Downloads serve one constant PDF blob no matter which
//! report was requested — the bytes are not derived from any data.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chrono::Utc;
use rand::Rng;

use crate::domain::{Report, ReportKind};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::{FlashLevel, FlashStore, NewReport, ReportRepository};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// The one PDF every download serves, base64-encoded
const CANNED_REPORT_PDF: &str = "\
JVBERi0xLjQKMSAwIG9iajw8L1R5cGUvQ2F0YWxvZy9QYWdlcyAyIDAgUj4+ZW5kb2JqCjIgMCBv\
Ymo8PC9UeXBlL1BhZ2VzL0tpZHNbMyAwIFJdL0NvdW50IDE+PmVuZG9iagozIDAgb2JqPDwvVHlw\
ZS9QYWdlL1BhcmVudCAyIDAgUi9NZWRpYUJveFswIDAgNjEyIDc5Ml0vQ29udGVudHMgNCAwIFI+\
PmVuZG9iago0IDAgb2JqPDwvTGVuZ3RoIDQ0Pj5zdHJlYW0KQlQgL0YxIDI0IFRmIDcyIDcyMCBU\
ZCAoRnJhdWQgUmVwb3J0KSBUaiBFVAplbmRzdHJlYW0KZW5kb2JqCnhyZWYKMCA1CjAwMDAwMDAw\
MDAgNjU1MzUgZiAKdHJhaWxlcjw8L1NpemUgNS9Sb290IDEgMCBSPj4Kc3RhcnR4cmVmCjAKJSVF\
T0YK";

/// A report file ready to hand to the browser
#[derive(Debug, Clone)]
pub struct ReportDownload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Report service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ReportService: Send + Sync {
    /// Scoped catalog, most recent first
    async fn list(&self, scope: Option<i64>) -> AppResult<Vec<Report>>;

    /// Kick off simulated generation; the row appears after the delay
    async fn generate(&self, scope: Option<i64>) -> AppResult<()>;

    /// The canned blob, named after the requested report row
    async fn download(&self, id: i64) -> AppResult<ReportDownload>;
}

/// Concrete implementation over the in-memory repositories
pub struct ReportDesk {
    reports: Arc<dyn ReportRepository>,
    flash: Arc<FlashStore>,
    delay: Duration,
}

impl ReportDesk {
    pub fn new(reports: Arc<dyn ReportRepository>, flash: Arc<FlashStore>, delay: Duration) -> Self {
        Self {
            reports,
            flash,
            delay,
        }
    }
}

#[async_trait]
impl ReportService for ReportDesk {
    async fn list(&self, scope: Option<i64>) -> AppResult<Vec<Report>> {
        self.reports.list(scope).await
    }

    async fn generate(&self, scope: Option<i64>) -> AppResult<()> {
        self.flash.push(FlashLevel::Info, "Generating report...");

        let reports = self.reports.clone();
        let flash = self.flash.clone();
        let delay = self.delay;

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let kind = random_kind();
            let today = Utc::now().date_naive();
            let report = NewReport {
                name: format!("{} - {}", kind.label(), today.format("%b %d %Y")),
                kind,
                date: today,
                client_id: scope,
            };

            match reports.create(report).await {
                Ok(report) => {
                    tracing::info!(report = report.id, kind = ?report.kind, "Report generated");
                    flash.push(FlashLevel::Success, format!("{} is ready", report.name));
                }
                Err(e) => tracing::error!(error = %e, "Simulated report generation failed"),
            }
        });

        Ok(())
    }

    async fn download(&self, id: i64) -> AppResult<ReportDownload> {
        let report = self.reports.find_by_id(id).await?.ok_or_not_found()?;

        let bytes = BASE64
            .decode(CANNED_REPORT_PDF)
            .map_err(|e| AppError::internal(format!("Canned PDF decode failed: {}", e)))?;

        Ok(ReportDownload {
            file_name: format!("{}.pdf", report.name),
            bytes,
        })
    }
}

fn random_kind() -> ReportKind {
    let mut rng = rand::thread_rng();
    ReportKind::ALL[rng.gen_range(0..ReportKind::ALL.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canned_blob_is_a_pdf() {
        let bytes = BASE64.decode(CANNED_REPORT_PDF).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn random_kind_is_drawn_from_the_catalog() {
        for _ in 0..20 {
            assert!(ReportKind::ALL.contains(&random_kind()));
        }
    }
}
