//! Login / registration / logout flow tests over the real in-memory stores.

use std::path::PathBuf;
use std::sync::Arc;

use fraudboard::domain::Role;
use fraudboard::errors::AppError;
use fraudboard::infra::{ClientStore, Dataset, FlashStore, SessionStore, UserStore};
use fraudboard::services::{AuthService, Authenticator, Registration};

fn session_path(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "fraudboard-auth-test-{}-{}.json",
        tag,
        std::process::id()
    ))
}

fn build_auth(dataset: Arc<Dataset>, tag: &str) -> (Authenticator, Arc<SessionStore>, PathBuf) {
    let path = session_path(tag);
    // Stale file from an earlier run would leak a session into the test
    std::fs::remove_file(&path).ok();

    let session = Arc::new(SessionStore::open(&path));
    let auth = Authenticator::new(
        Arc::new(UserStore::new(dataset.clone())),
        Arc::new(ClientStore::new(dataset)),
        session.clone(),
        Arc::new(FlashStore::new()),
    );
    (auth, session, path)
}

#[tokio::test]
async fn login_with_seeded_admin_sets_the_session_slot() {
    let dataset = Arc::new(Dataset::seeded());
    let (auth, session, path) = build_auth(dataset, "admin-login");

    let user = auth
        .login("admin@fraudplatform.com", "any-password-at-all")
        .await
        .expect("approved user logs in");

    assert_eq!(user.id, 1);
    assert_eq!(user.role, Role::SuperAdmin);
    assert!(user.last_login.is_some());

    let snapshot = session.current().expect("slot written");
    assert_eq!(snapshot.id, 1);

    std::fs::remove_file(path).ok();
}

#[tokio::test]
async fn login_never_checks_the_password() {
    let dataset = Arc::new(Dataset::seeded());
    let (auth, _session, path) = build_auth(dataset, "any-password");

    // Two different passwords both succeed for the same account
    assert!(auth.login("dana@acmeretail.com", "first").await.is_ok());
    assert!(auth.login("dana@acmeretail.com", "second").await.is_ok());

    std::fs::remove_file(path).ok();
}

#[tokio::test]
async fn unapproved_user_is_told_to_wait_and_gets_no_session() {
    let dataset = Arc::new(Dataset::seeded());
    let (auth, session, path) = build_auth(dataset, "pending");

    let result = auth.login("sven@heliosenergy.com", "password").await;
    assert!(matches!(result.unwrap_err(), AppError::PendingApproval));
    assert!(session.current().is_none());

    std::fs::remove_file(path).ok();
}

#[tokio::test]
async fn unknown_email_is_invalid_credentials() {
    let dataset = Arc::new(Dataset::seeded());
    let (auth, _session, path) = build_auth(dataset, "unknown");

    let result = auth.login("nobody@example.com", "password").await;
    assert!(matches!(result.unwrap_err(), AppError::InvalidCredentials));

    std::fs::remove_file(path).ok();
}

#[tokio::test]
async fn duplicate_registration_creates_nothing() {
    let dataset = Arc::new(Dataset::seeded());
    let (auth, _session, path) = build_auth(dataset.clone(), "duplicate");

    let result = auth
        .register(Registration {
            company_name: "Shadow Corp".to_string(),
            industry: "Retail".to_string(),
            name: "Imposter".to_string(),
            email: "ADMIN@fraudplatform.com".to_string(),
        })
        .await;

    assert!(matches!(result.unwrap_err(), AppError::Conflict(_)));
    assert_eq!(dataset.users.read().await.len(), 5);
    assert_eq!(dataset.clients.read().await.len(), 3);

    std::fs::remove_file(path).ok();
}

#[tokio::test]
async fn registration_creates_a_pending_client_admin_and_no_session() {
    let dataset = Arc::new(Dataset::seeded());
    let (auth, session, path) = build_auth(dataset.clone(), "register");

    let user = auth
        .register(Registration {
            company_name: "Juniper Health".to_string(),
            industry: "Healthcare".to_string(),
            name: "Priya Nair".to_string(),
            email: "priya@juniperhealth.com".to_string(),
        })
        .await
        .expect("registration succeeds");

    assert_eq!(user.role, Role::ClientAdmin);
    assert!(!user.is_approved);
    assert!(session.current().is_none(), "registration never logs in");

    let clients = dataset.clients.read().await;
    let client = clients
        .iter()
        .find(|c| c.name == "Juniper Health")
        .expect("client row created");
    assert!(!client.is_approved);
    assert_eq!(user.client_id, Some(client.id));

    std::fs::remove_file(path).ok();
}

#[tokio::test]
async fn first_registration_on_an_empty_platform_becomes_the_operator() {
    let dataset = Arc::new(Dataset::empty());
    let (auth, _session, path) = build_auth(dataset, "bootstrap");

    let user = auth
        .register(Registration {
            company_name: "Founding Co".to_string(),
            industry: "Finance".to_string(),
            name: "First User".to_string(),
            email: "founder@example.com".to_string(),
        })
        .await
        .expect("bootstrap registration succeeds");

    assert_eq!(user.role, Role::SuperAdmin);
    assert!(user.is_approved);

    std::fs::remove_file(path).ok();
}

#[tokio::test]
async fn logout_clears_the_slot() {
    let dataset = Arc::new(Dataset::seeded());
    let (auth, session, path) = build_auth(dataset, "logout");

    auth.login("admin@fraudplatform.com", "x").await.unwrap();
    assert!(session.current().is_some());

    auth.logout().unwrap();
    assert!(session.current().is_none());
    assert!(!path.exists());
}
