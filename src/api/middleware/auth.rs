//! Session authentication middleware.
//!
//! There are no tokens: the single durable session slot *is* the session.
//! The middleware reads the persisted snapshot and injects it into request
//! extensions; an empty slot means nobody is logged in.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::api::AppState;
use crate::domain::{Role, User};
use crate::errors::AppError;

/// The logged-in user, as captured by the session snapshot
#[derive(Clone, Debug)]
pub struct CurrentUser(pub User);

impl CurrentUser {
    pub fn is_super_admin(&self) -> bool {
        self.0.role.is_super_admin()
    }
}

/// Session middleware.
///
/// Loads the current-user snapshot from the durable slot and injects it
/// into the request extensions. Note the snapshot may lag behind the
/// users collection; mutations after login do not refresh it.
pub async fn session_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = state.session.current().ok_or(AppError::Unauthorized)?;

    request.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(request).await)
}

/// Require the platform operator role
pub fn require_super_admin(user: &User) -> Result<(), AppError> {
    if user.role.is_super_admin() {
        Ok(())
    } else {
        Err(AppError::Forbidden)
    }
}

/// Require a role that manages a client team (client_admin, or the
/// operator acting on any client)
pub fn require_team_manager(user: &User) -> Result<(), AppError> {
    match user.role {
        Role::SuperAdmin | Role::ClientAdmin => Ok(()),
        Role::Staff => Err(AppError::Forbidden),
    }
}
