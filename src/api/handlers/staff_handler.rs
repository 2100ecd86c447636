//! Staff management handlers (client_admin, or the operator).

use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::{delete, get},
    Extension, Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::{require_team_manager, CurrentUser};
use crate::api::AppState;
use crate::domain::{Permissions, UserResponse};
use crate::errors::{AppError, AppResult};
use crate::services::AddStaff;
use crate::types::{Created, NoContent};

/// New staff member request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AddStaffRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Omar Haddad")]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "omar@acmeretail.com")]
    pub email: String,
    /// Password (minimum 8 characters; validated then discarded)
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    #[schema(example = "SecurePass123!", min_length = 8)]
    pub password: String,
    /// Must match `password`
    #[validate(must_match(other = "password", message = "Passwords do not match"))]
    #[schema(example = "SecurePass123!")]
    pub confirm_password: String,
    #[schema(example = "Finance")]
    pub department: Option<String>,
    #[schema(example = "Analyst")]
    pub position: Option<String>,
    /// Feature flags; defaults to dashboard-only when omitted
    pub permissions: Option<Permissions>,
    /// Target client, required only when the operator adds staff
    pub client_id: Option<i64>,
}

/// Query parameters for the staff list
#[derive(Debug, Deserialize)]
pub struct StaffQuery {
    /// Operator-only filter; client_admins are always scoped to their own client
    pub client_id: Option<i64>,
}

/// Create staff management routes
pub fn staff_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_staff).post(add_staff))
        .route("/:id", delete(delete_staff))
}

/// List team members
#[utoipa::path(
    get,
    path = "/staff",
    tag = "Staff",
    responses(
        (status = 200, description = "Team members", body = [UserResponse]),
        (status = 403, description = "Staff role cannot manage the team")
    )
)]
pub async fn list_staff(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Query(query): Query<StaffQuery>,
) -> AppResult<Json<Vec<UserResponse>>> {
    require_team_manager(&user)?;
    let client_id = user
        .client_id
        .or(query.client_id)
        .ok_or_else(|| AppError::BadRequest("No client specified".to_string()))?;

    let members = state.staff_service.list(client_id).await?;
    Ok(Json(members.into_iter().map(UserResponse::from).collect()))
}

/// Add an approved staff member to a client team
#[utoipa::path(
    post,
    path = "/staff",
    tag = "Staff",
    request_body = AddStaffRequest,
    responses(
        (status = 201, description = "Staff member added", body = UserResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Email already registered")
    )
)]
pub async fn add_staff(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    ValidatedJson(payload): ValidatedJson<AddStaffRequest>,
) -> AppResult<Created<UserResponse>> {
    require_team_manager(&user)?;
    let client_id = user
        .client_id
        .or(payload.client_id)
        .ok_or_else(|| AppError::BadRequest("No client specified".to_string()))?;

    let staff = state
        .staff_service
        .add(
            client_id,
            AddStaff {
                name: payload.name,
                email: payload.email,
                password: payload.password,
                confirm_password: payload.confirm_password,
                department: payload.department,
                position: payload.position,
                permissions: payload.permissions,
            },
        )
        .await?;

    Ok(Created(UserResponse::from(staff)))
}

/// Remove one staff member
#[utoipa::path(
    delete,
    path = "/staff/{id}",
    tag = "Staff",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 204, description = "Staff member removed"),
        (status = 403, description = "Outside the caller's client"),
        (status = 404, description = "No such user")
    )
)]
pub async fn delete_staff(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> AppResult<NoContent> {
    require_team_manager(&user)?;
    state.staff_service.delete(&user, id).await?;
    Ok(NoContent)
}
