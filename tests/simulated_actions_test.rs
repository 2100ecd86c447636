//! Simulated action tests: upload ingestion, report generation/download,
//! scripted chat. Delays are shrunk so the timers fire inside the test.

use std::sync::Arc;
use std::time::Duration;

use fraudboard::domain::{Permissions, Role, Sender, User};
use fraudboard::errors::AppError;
use fraudboard::infra::{
    ChatStore, ClientStore, Dataset, FlashStore, ReportStore, TransactionStore,
};
use fraudboard::services::{
    ChatBoard, ChatService, ReportDesk, ReportService, UploadService, UploadSimulator,
};

const TEST_DELAY: Duration = Duration::from_millis(10);

/// Long enough for a 10ms timer to have fired
async fn settle() {
    tokio::time::sleep(Duration::from_millis(120)).await;
}

fn actor(role: Role, client_id: Option<i64>) -> User {
    User {
        id: 42,
        email: "actor@example.com".to_string(),
        name: "Actor".to_string(),
        role,
        client_id,
        is_approved: true,
        last_login: None,
        department: None,
        position: None,
        permissions: Permissions::all(),
    }
}

#[tokio::test]
async fn upload_appends_fabricated_transactions_after_the_delay() {
    let dataset = Arc::new(Dataset::seeded());
    let service = UploadSimulator::new(
        Arc::new(TransactionStore::new(dataset.clone())),
        Arc::new(ClientStore::new(dataset.clone())),
        Arc::new(FlashStore::new()),
        TEST_DELAY,
    );

    let before = dataset.transactions.read().await.len();
    let client_id = service
        .ingest(&actor(Role::ClientAdmin, Some(1)), "q3.csv", None)
        .await
        .expect("upload accepted");
    assert_eq!(client_id, 1);

    // Nothing lands until the timer fires
    assert_eq!(dataset.transactions.read().await.len(), before);

    settle().await;
    let transactions = dataset.transactions.read().await;
    let added = transactions.len() - before;
    assert!((1..=2).contains(&added), "1-2 fabricated rows, got {}", added);

    let newest = transactions.iter().max_by_key(|t| t.id).unwrap();
    assert_eq!(newest.client_id, 1);
    assert!(newest.amount >= 0.0);
    assert!((0.0..=1.0).contains(&newest.fraud_score));
    assert!(newest.description.contains("q3.csv"));
}

#[tokio::test]
async fn operator_uploads_need_an_explicit_client() {
    let dataset = Arc::new(Dataset::seeded());
    let service = UploadSimulator::new(
        Arc::new(TransactionStore::new(dataset.clone())),
        Arc::new(ClientStore::new(dataset)),
        Arc::new(FlashStore::new()),
        TEST_DELAY,
    );
    let admin = actor(Role::SuperAdmin, None);

    let result = service.ingest(&admin, "q3.csv", None).await;
    assert!(matches!(result.unwrap_err(), AppError::BadRequest(_)));

    let result = service.ingest(&admin, "q3.csv", Some(999)).await;
    assert!(matches!(result.unwrap_err(), AppError::NotFound));

    assert_eq!(service.ingest(&admin, "q3.csv", Some(2)).await.unwrap(), 2);
}

#[tokio::test]
async fn generated_reports_appear_after_the_delay_with_a_catalog_kind() {
    let dataset = Arc::new(Dataset::seeded());
    let service = ReportDesk::new(
        Arc::new(ReportStore::new(dataset.clone())),
        Arc::new(FlashStore::new()),
        TEST_DELAY,
    );

    let before = dataset.reports.read().await.len();
    service.generate(Some(2)).await.unwrap();
    assert_eq!(dataset.reports.read().await.len(), before);

    settle().await;
    let reports = dataset.reports.read().await;
    assert_eq!(reports.len(), before + 1);

    let newest = reports.iter().max_by_key(|r| r.id).unwrap();
    assert_eq!(newest.client_id, Some(2));
    assert!(newest.name.contains(newest.kind.label()));
}

#[tokio::test]
async fn every_download_serves_the_same_pdf_blob() {
    let dataset = Arc::new(Dataset::seeded());
    let service = ReportDesk::new(
        Arc::new(ReportStore::new(dataset)),
        Arc::new(FlashStore::new()),
        TEST_DELAY,
    );

    let first = service.download(1).await.unwrap();
    let second = service.download(2).await.unwrap();

    assert!(first.bytes.starts_with(b"%PDF"));
    assert_eq!(first.bytes, second.bytes, "blob never varies by report");
    assert_ne!(first.file_name, second.file_name, "file name tracks the row");
    assert!(first.file_name.ends_with(".pdf"));

    let missing = service.download(999).await;
    assert!(matches!(missing.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn chat_reply_is_scripted_and_scoped() {
    let dataset = Arc::new(Dataset::seeded());
    let service = ChatBoard::new(Arc::new(ChatStore::new(dataset.clone())), TEST_DELAY);

    let message = service
        .send(Some(1), "How risky was last week?".to_string())
        .await
        .unwrap();
    assert_eq!(message.sender, Sender::User);
    assert_eq!(message.client_id, Some(1));

    settle().await;
    let history = service.history(Some(1)).await.unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].sender, Sender::User);
    assert_eq!(history[1].sender, Sender::Assistant);
    assert!(!history[1].body.is_empty());

    // Another client's conversation stays empty
    assert!(service.history(Some(2)).await.unwrap().is_empty());
}
