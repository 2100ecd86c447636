//! Simulated upload handler.

use axum::{extract::State, routing::post, Extension, Router};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::Role;
use crate::errors::{AppError, AppResult};
use crate::types::Accepted;

/// Upload request; only the name travels, never the content
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UploadRequest {
    #[validate(length(min = 1, message = "File name is required"))]
    #[schema(example = "q3_transactions.csv")]
    pub file_name: String,
    /// Target client, required only when the operator uploads
    pub client_id: Option<i64>,
}

/// Create upload routes
pub fn upload_routes() -> Router<AppState> {
    Router::new().route("/", post(upload))
}

/// Accept a simulated upload; fabricated transactions appear after the delay
#[utoipa::path(
    post,
    path = "/uploads",
    tag = "Uploads",
    request_body = UploadRequest,
    responses(
        (status = 202, description = "Upload accepted for processing"),
        (status = 400, description = "No client specified"),
        (status = 403, description = "Missing upload permission"),
        (status = 404, description = "No such client")
    )
)]
pub async fn upload(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    ValidatedJson(payload): ValidatedJson<UploadRequest>,
) -> AppResult<Accepted> {
    if user.role == Role::Staff && !user.permissions.upload {
        return Err(AppError::Forbidden);
    }

    let client_id = state
        .upload_service
        .ingest(&user, &payload.file_name, payload.client_id)
        .await?;

    Ok(Accepted(format!(
        "{} accepted; transactions for client {} will appear shortly",
        payload.file_name, client_id
    )))
}
