//! Application route configuration.

use axum::{extract::State, middleware, response::Json, routing::get, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::view_handler::{dashboard, notifications};
use super::handlers::{
    auth_routes, chat_routes, client_routes, report_routes, staff_routes, transaction_routes,
    upload_routes, view_routes,
};
use super::middleware::session_middleware;
use super::openapi::ApiDoc;
use super::AppState;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    // Everything behind the session slot; an empty slot means 401
    let protected = Router::new()
        .route("/dashboard", get(dashboard))
        .route("/notifications", get(notifications))
        .nest("/views", view_routes())
        .nest("/clients", client_routes())
        .nest("/staff", staff_routes())
        .nest("/transactions", transaction_routes())
        .nest("/uploads", upload_routes())
        .nest("/reports", report_routes())
        .nest("/chat", chat_routes())
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            session_middleware,
        ));

    Router::new()
        // Landing + health (no session required)
        .route("/", get(root))
        .route("/health", get(health))
        // OpenAPI Swagger UI documentation
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Public authentication routes
        .nest("/auth", auth_routes())
        .merge(protected)
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Fraud platform demo console"
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    session_active: bool,
}

/// Health check endpoint. There is no database or cache to probe; the
/// only stateful dependency worth reporting is the session slot.
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        session_active: state.session.current().is_some(),
    })
}
