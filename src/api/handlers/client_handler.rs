//! Client management handlers (super_admin only).

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{delete, get, post},
    Extension, Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::{require_super_admin, CurrentUser};
use crate::api::AppState;
use crate::domain::ClientResponse;
use crate::errors::AppResult;
use crate::types::{Created, NoContent};

/// New client request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AddClientRequest {
    #[validate(length(min = 1, message = "Client name is required"))]
    #[schema(example = "Helios Energy")]
    pub name: String,
    #[validate(length(min = 1, message = "Industry is required"))]
    #[schema(example = "Energy")]
    pub industry: String,
}

/// Create client management routes
pub fn client_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_clients).post(add_client))
        .route("/:id/approve", post(approve_client))
        .route("/:id/disapprove", post(disapprove_client))
        .route("/:id", delete(delete_client))
}

/// List every client on the platform
#[utoipa::path(
    get,
    path = "/clients",
    tag = "Clients",
    responses(
        (status = 200, description = "All clients", body = [ClientResponse]),
        (status = 403, description = "Requires super_admin")
    )
)]
pub async fn list_clients(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> AppResult<Json<Vec<ClientResponse>>> {
    require_super_admin(&user)?;
    let clients = state.client_service.list().await?;
    Ok(Json(clients.into_iter().map(ClientResponse::from).collect()))
}

/// Add a client (operator-added clients start approved)
#[utoipa::path(
    post,
    path = "/clients",
    tag = "Clients",
    request_body = AddClientRequest,
    responses(
        (status = 201, description = "Client added", body = ClientResponse),
        (status = 403, description = "Requires super_admin")
    )
)]
pub async fn add_client(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    ValidatedJson(payload): ValidatedJson<AddClientRequest>,
) -> AppResult<Created<ClientResponse>> {
    require_super_admin(&user)?;
    let client = state
        .client_service
        .add(payload.name, payload.industry)
        .await?;
    Ok(Created(ClientResponse::from(client)))
}

/// Approve a client; its pending users are activated too
#[utoipa::path(
    post,
    path = "/clients/{id}/approve",
    tag = "Clients",
    params(("id" = i64, Path, description = "Client id")),
    responses(
        (status = 200, description = "Client approved", body = ClientResponse),
        (status = 404, description = "No such client")
    )
)]
pub async fn approve_client(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> AppResult<Json<ClientResponse>> {
    require_super_admin(&user)?;
    let client = state.client_service.approve(id).await?;
    Ok(Json(ClientResponse::from(client)))
}

/// Suspend a client (users keep their own flags)
#[utoipa::path(
    post,
    path = "/clients/{id}/disapprove",
    tag = "Clients",
    params(("id" = i64, Path, description = "Client id")),
    responses(
        (status = 200, description = "Client suspended", body = ClientResponse),
        (status = 404, description = "No such client")
    )
)]
pub async fn disapprove_client(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> AppResult<Json<ClientResponse>> {
    require_super_admin(&user)?;
    let client = state.client_service.disapprove(id).await?;
    Ok(Json(ClientResponse::from(client)))
}

/// Delete a client along with its users, transactions, reports and chat
#[utoipa::path(
    delete,
    path = "/clients/{id}",
    tag = "Clients",
    params(("id" = i64, Path, description = "Client id")),
    responses(
        (status = 204, description = "Client and scoped data removed"),
        (status = 404, description = "No such client")
    )
)]
pub async fn delete_client(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> AppResult<NoContent> {
    require_super_admin(&user)?;
    state.client_service.delete(id).await?;
    Ok(NoContent)
}
