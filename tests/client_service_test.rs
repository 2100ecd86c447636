//! Client lifecycle tests: approval cascade and delete cascade.

use std::sync::Arc;

use fraudboard::domain::Sender;
use fraudboard::errors::AppError;
use fraudboard::infra::{
    ChatRepository, ChatStore, ClientStore, Dataset, FlashStore, ReportStore, TransactionStore,
    UserStore,
};
use fraudboard::services::{ClientManager, ClientService};

fn build_service(dataset: Arc<Dataset>) -> ClientManager {
    ClientManager::new(
        Arc::new(ClientStore::new(dataset.clone())),
        Arc::new(UserStore::new(dataset.clone())),
        Arc::new(TransactionStore::new(dataset.clone())),
        Arc::new(ReportStore::new(dataset.clone())),
        Arc::new(ChatStore::new(dataset)),
        Arc::new(FlashStore::new()),
    )
}

#[tokio::test]
async fn approving_a_client_activates_its_pending_users() {
    let dataset = Arc::new(Dataset::seeded());
    let service = build_service(dataset.clone());

    // Helios Energy (id 3) is pending, as is its admin (user 5)
    let client = service.approve(3).await.expect("client exists");
    assert!(client.is_approved);

    let users = dataset.users.read().await;
    let sven = users.iter().find(|u| u.id == 5).unwrap();
    assert!(sven.is_approved, "pending user approved with the client");

    // Already-approved users elsewhere are untouched
    assert!(users.iter().filter(|u| u.is_approved).count() >= 5);
}

#[tokio::test]
async fn disapproving_touches_only_the_client() {
    let dataset = Arc::new(Dataset::seeded());
    let service = build_service(dataset.clone());

    let client = service.disapprove(1).await.unwrap();
    assert!(!client.is_approved);

    let users = dataset.users.read().await;
    // Acme's users keep their own approval flags
    assert!(users.iter().find(|u| u.id == 2).unwrap().is_approved);
    assert!(users.iter().find(|u| u.id == 3).unwrap().is_approved);
}

#[tokio::test]
async fn deleting_a_client_cascades_to_everything_it_owns() {
    let dataset = Arc::new(Dataset::seeded());
    let chat = ChatStore::new(dataset.clone());
    chat.append(Some(1), Sender::User, "hello".to_string())
        .await
        .unwrap();
    chat.append(Some(2), Sender::User, "other client".to_string())
        .await
        .unwrap();

    let service = build_service(dataset.clone());
    service.delete(1).await.expect("client exists");

    assert!(dataset.clients.read().await.iter().all(|c| c.id != 1));
    assert!(dataset
        .users
        .read()
        .await
        .iter()
        .all(|u| u.client_id != Some(1)));
    assert!(dataset
        .transactions
        .read()
        .await
        .iter()
        .all(|t| t.client_id != 1));
    assert!(dataset
        .reports
        .read()
        .await
        .iter()
        .all(|r| r.client_id != Some(1)));
    assert!(dataset
        .chat
        .read()
        .await
        .iter()
        .all(|m| m.client_id != Some(1)));

    // Other clients' data survives
    assert!(dataset
        .transactions
        .read()
        .await
        .iter()
        .any(|t| t.client_id == 2));
    assert_eq!(dataset.chat.read().await.len(), 1);
}

#[tokio::test]
async fn deleting_an_unknown_client_is_not_found() {
    let dataset = Arc::new(Dataset::seeded());
    let service = build_service(dataset);

    let result = service.delete(999).await;
    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn operator_added_clients_start_approved_with_fresh_ids() {
    let dataset = Arc::new(Dataset::seeded());
    let service = build_service(dataset.clone());

    let client = service
        .add("Juniper Health".to_string(), "Healthcare".to_string())
        .await
        .unwrap();

    assert_eq!(client.id, 4, "ids continue past the seed literals");
    assert!(client.is_approved);
    assert_eq!(dataset.clients.read().await.len(), 4);
}
