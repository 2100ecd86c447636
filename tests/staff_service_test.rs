//! Staff management tests over the real in-memory stores.

use std::sync::Arc;

use fraudboard::domain::{Permissions, Role, User};
use fraudboard::errors::AppError;
use fraudboard::infra::{Dataset, FlashStore, UserStore};
use fraudboard::services::{AddStaff, StaffManager, StaffService};

fn build_service(dataset: Arc<Dataset>) -> StaffManager {
    StaffManager::new(
        Arc::new(UserStore::new(dataset)),
        Arc::new(FlashStore::new()),
    )
}

fn add_request(email: &str) -> AddStaff {
    AddStaff {
        name: "New Analyst".to_string(),
        email: email.to_string(),
        password: "SecurePass123!".to_string(),
        confirm_password: "SecurePass123!".to_string(),
        department: Some("Finance".to_string()),
        position: Some("Analyst".to_string()),
        permissions: None,
    }
}

fn client_admin(client_id: i64) -> User {
    User {
        id: 2,
        email: "dana@acmeretail.com".to_string(),
        name: "Dana Whitfield".to_string(),
        role: Role::ClientAdmin,
        client_id: Some(client_id),
        is_approved: true,
        last_login: None,
        department: None,
        position: None,
        permissions: Permissions::all(),
    }
}

#[tokio::test]
async fn mismatched_passwords_are_rejected() {
    let dataset = Arc::new(Dataset::seeded());
    let service = build_service(dataset.clone());

    let mut request = add_request("new@acmeretail.com");
    request.confirm_password = "Different123!".to_string();

    let result = service.add(1, request).await;
    assert!(matches!(result.unwrap_err(), AppError::Validation(_)));
    assert_eq!(dataset.users.read().await.len(), 5, "nothing appended");
}

#[tokio::test]
async fn duplicate_email_is_a_conflict() {
    let dataset = Arc::new(Dataset::seeded());
    let service = build_service(dataset.clone());

    let result = service.add(1, add_request("omar@acmeretail.com")).await;
    assert!(matches!(result.unwrap_err(), AppError::Conflict(_)));
    assert_eq!(dataset.users.read().await.len(), 5);
}

#[tokio::test]
async fn valid_staff_member_gets_a_fresh_id_and_default_permissions() {
    let dataset = Arc::new(Dataset::seeded());
    let service = build_service(dataset.clone());

    let user = service
        .add(1, add_request("new@acmeretail.com"))
        .await
        .expect("valid staff add");

    assert_eq!(user.id, 6, "ids continue past the seed literals");
    assert_eq!(user.role, Role::Staff);
    assert_eq!(user.client_id, Some(1));
    assert!(user.is_approved);
    assert!(user.permissions.dashboard);
    assert!(!user.permissions.export, "everything beyond dashboard is opt-in");
    assert_eq!(dataset.users.read().await.len(), 6);
}

#[tokio::test]
async fn deleting_a_staff_member_removes_exactly_that_user() {
    let dataset = Arc::new(Dataset::seeded());
    let service = build_service(dataset.clone());

    service
        .delete(&client_admin(1), 3)
        .await
        .expect("own staff member");

    let users = dataset.users.read().await;
    assert_eq!(users.len(), 4);
    assert!(users.iter().all(|u| u.id != 3));
    // Everyone else is untouched
    for id in [1, 2, 4, 5] {
        assert!(users.iter().any(|u| u.id == id));
    }
}

#[tokio::test]
async fn staff_of_another_client_are_out_of_reach() {
    let dataset = Arc::new(Dataset::seeded());
    let service = build_service(dataset.clone());

    // Dana (client 1) cannot reach a staff account moved under client 2
    {
        let mut users = dataset.users.write().await;
        users.iter_mut().find(|u| u.id == 3).unwrap().client_id = Some(2);
    }

    let result = service.delete(&client_admin(1), 3).await;
    assert!(matches!(result.unwrap_err(), AppError::Forbidden));
    assert_eq!(dataset.users.read().await.len(), 5);
}

#[tokio::test]
async fn only_staff_accounts_can_be_deleted_here() {
    let dataset = Arc::new(Dataset::seeded());
    let service = build_service(dataset);

    // User 2 is a client_admin, not staff
    let result = service.delete(&client_admin(1), 2).await;
    assert!(matches!(result.unwrap_err(), AppError::BadRequest(_)));

    let missing = build_service(Arc::new(Dataset::empty()))
        .delete(&client_admin(1), 3)
        .await;
    assert!(matches!(missing.unwrap_err(), AppError::NotFound));
}
