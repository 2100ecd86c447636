//! View renderer tests: aggregates, scoping and section access.

use std::sync::Arc;

use fraudboard::domain::{Permissions, Role, User};
use fraudboard::errors::AppError;
use fraudboard::infra::{
    ChatStore, ClientStore, Dataset, ReportStore, TransactionStore, UserStore,
};
use fraudboard::views::{Renderer, Section, View};

fn build_renderer(dataset: Arc<Dataset>) -> Renderer {
    Renderer::new(
        Arc::new(ClientStore::new(dataset.clone())),
        Arc::new(UserStore::new(dataset.clone())),
        Arc::new(TransactionStore::new(dataset.clone())),
        Arc::new(ReportStore::new(dataset.clone())),
        Arc::new(ChatStore::new(dataset)),
    )
}

fn user(role: Role, client_id: Option<i64>, permissions: Permissions) -> User {
    User {
        id: 99,
        email: "viewer@example.com".to_string(),
        name: "Viewer".to_string(),
        role,
        client_id,
        is_approved: true,
        last_login: None,
        department: None,
        position: None,
        permissions,
    }
}

#[tokio::test]
async fn platform_dashboard_aggregates_the_whole_dataset() {
    let renderer = build_renderer(Arc::new(Dataset::seeded()));
    let admin = user(Role::SuperAdmin, None, Permissions::all());

    let view = renderer.render(&admin, Section::Dashboard).await.unwrap();
    let View::Dashboard(dashboard) = view else {
        panic!("dashboard section renders a dashboard view");
    };

    assert_eq!(dashboard.client_id, None);
    assert_eq!(dashboard.total_clients, Some(3));
    assert_eq!(dashboard.pending_clients, Some(1));
    assert_eq!(dashboard.user_count, 5);
    assert_eq!(dashboard.transaction_count, 8);
    assert_eq!(dashboard.flagged_count, 3);
    // 3 flagged of 8 = 37.5%
    assert_eq!(dashboard.fraud_rate_pct, 37.5);
    assert_eq!(dashboard.recent_transactions.len(), 5);
    // Most recent (highest id) first
    assert_eq!(dashboard.recent_transactions[0].id, 8);
}

#[tokio::test]
async fn client_dashboard_is_filtered_to_the_users_client() {
    let renderer = build_renderer(Arc::new(Dataset::seeded()));
    let dana = user(Role::ClientAdmin, Some(1), Permissions::all());

    let view = renderer.render(&dana, Section::Dashboard).await.unwrap();
    let View::Dashboard(dashboard) = view else {
        panic!("dashboard section renders a dashboard view");
    };

    assert_eq!(dashboard.client_id, Some(1));
    assert_eq!(dashboard.total_clients, None, "no platform counts for clients");
    assert_eq!(dashboard.user_count, 2, "Acme has two users");
    assert_eq!(dashboard.transaction_count, 4);
    assert_eq!(dashboard.flagged_count, 2);
    assert_eq!(dashboard.fraud_rate_pct, 50.0);
    assert!(dashboard
        .recent_transactions
        .iter()
        .all(|t| t.client_id == 1));
}

#[tokio::test]
async fn empty_dataset_reports_a_zero_fraud_rate() {
    let renderer = build_renderer(Arc::new(Dataset::empty()));
    let admin = user(Role::SuperAdmin, None, Permissions::all());

    let view = renderer.render(&admin, Section::Dashboard).await.unwrap();
    let View::Dashboard(dashboard) = view else {
        panic!("dashboard section renders a dashboard view");
    };
    assert_eq!(dashboard.transaction_count, 0);
    assert_eq!(dashboard.fraud_rate_pct, 0.0);
}

#[tokio::test]
async fn clients_section_is_super_admin_only() {
    let renderer = build_renderer(Arc::new(Dataset::seeded()));
    let dana = user(Role::ClientAdmin, Some(1), Permissions::all());

    let result = renderer.render(&dana, Section::Clients).await;
    assert!(matches!(result.unwrap_err(), AppError::Forbidden));
}

#[tokio::test]
async fn clients_overview_carries_per_client_counts() {
    let renderer = build_renderer(Arc::new(Dataset::seeded()));
    let admin = user(Role::SuperAdmin, None, Permissions::all());

    let view = renderer.render(&admin, Section::Clients).await.unwrap();
    let View::Clients(overview) = view else {
        panic!("clients section renders the overview");
    };

    let acme = overview.clients.iter().find(|c| c.id == 1).unwrap();
    assert_eq!(acme.user_count, 2);
    assert_eq!(acme.transaction_count, 4);

    let helios = overview.clients.iter().find(|c| c.id == 3).unwrap();
    assert!(!helios.is_approved);
    assert_eq!(helios.transaction_count, 0);
}

#[tokio::test]
async fn staff_section_is_closed_to_staff_role() {
    let renderer = build_renderer(Arc::new(Dataset::seeded()));
    let staff = user(Role::Staff, Some(1), Permissions::all());

    let result = renderer.render(&staff, Section::Staff).await;
    assert!(matches!(result.unwrap_err(), AppError::Forbidden));
}

#[tokio::test]
async fn upload_section_respects_the_permission_flag() {
    let renderer = build_renderer(Arc::new(Dataset::seeded()));

    let without = user(Role::Staff, Some(1), Permissions::default());
    let result = renderer.render(&without, Section::Upload).await;
    assert!(matches!(result.unwrap_err(), AppError::Forbidden));

    let with = user(
        Role::Staff,
        Some(1),
        Permissions {
            dashboard: true,
            upload: true,
            reports: false,
            export: false,
        },
    );
    assert!(renderer.render(&with, Section::Upload).await.is_ok());
}

#[tokio::test]
async fn reports_view_is_scoped_by_client() {
    let renderer = build_renderer(Arc::new(Dataset::seeded()));
    let lena = user(Role::ClientAdmin, Some(2), Permissions::all());

    let view = renderer.render(&lena, Section::Reports).await.unwrap();
    let View::Reports(reports) = view else {
        panic!("reports section renders the catalog");
    };

    assert_eq!(reports.reports.len(), 1);
    assert_eq!(reports.reports[0].client_id, Some(2));
}
