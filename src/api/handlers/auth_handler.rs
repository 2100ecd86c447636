//! Authentication handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::UserResponse;
use crate::errors::{AppError, AppResult};
use crate::services::Registration;
use crate::types::ApiResponse;

/// Company + admin registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    /// Tenant organization name
    #[validate(length(min = 1, message = "Company name is required"))]
    #[schema(example = "Acme Retail")]
    pub company_name: String,
    /// Tenant industry
    #[validate(length(min = 1, message = "Industry is required"))]
    #[schema(example = "Retail")]
    pub industry: String,
    /// Administrator display name
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Dana Whitfield")]
    pub name: String,
    /// Administrator email address
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "dana@acmeretail.com")]
    pub email: String,
    /// Password (minimum 8 characters; stored nowhere)
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    #[schema(example = "SecurePass123!", min_length = 8)]
    pub password: String,
    /// Must match `password`
    #[validate(must_match(other = "password", message = "Passwords do not match"))]
    #[schema(example = "SecurePass123!")]
    pub confirm_password: String,
}

/// Login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    /// User email address
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "admin@fraudplatform.com")]
    pub email: String,
    /// Any non-empty password is accepted
    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "anything")]
    pub password: String,
}

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/me", get(me))
}

/// Register a new client and its administrator
#[utoipa::path(
    post,
    path = "/auth/register",
    tag = "Authentication",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Registration received; account pending approval", body = UserResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Email already registered")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let user = state
        .auth_service
        .register(Registration {
            company_name: payload.company_name,
            industry: payload.industry,
            name: payload.name,
            email: payload.email,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// Log in by email; writes the durable session snapshot
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = UserResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Invalid credentials"),
        (status = 403, description = "Account pending approval")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<UserResponse>> {
    let user = state
        .auth_service
        .login(&payload.email, &payload.password)
        .await?;

    Ok(Json(UserResponse::from(user)))
}

/// Log out; clears the durable session snapshot
#[utoipa::path(
    post,
    path = "/auth/logout",
    tag = "Authentication",
    responses((status = 200, description = "Session cleared"))
)]
pub async fn logout(State(state): State<AppState>) -> AppResult<Json<ApiResponse<()>>> {
    state.auth_service.logout()?;
    Ok(Json(ApiResponse::message("Logged out")))
}

/// The persisted current-user snapshot
#[utoipa::path(
    get,
    path = "/auth/me",
    tag = "Authentication",
    responses(
        (status = 200, description = "Current user", body = UserResponse),
        (status = 401, description = "Not logged in")
    )
)]
pub async fn me(State(state): State<AppState>) -> AppResult<Json<UserResponse>> {
    let user = state.auth_service.current_user().ok_or(AppError::Unauthorized)?;
    Ok(Json(UserResponse::from(user)))
}
