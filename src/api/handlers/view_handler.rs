//! Section rendering handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Extension, Router,
};

use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::errors::AppResult;
use crate::infra::FlashView;
use crate::views::{Section, View};

/// Create view routes
pub fn view_routes() -> Router<AppState> {
    Router::new().route("/:section", get(render_section))
}

/// Render one console section for the logged-in user
#[utoipa::path(
    get,
    path = "/views/{section}",
    tag = "Views",
    params(("section" = String, Path, description = "dashboard | clients | staff | reports | upload | chat")),
    responses(
        (status = 200, description = "Rendered section content"),
        (status = 400, description = "Unknown section"),
        (status = 401, description = "Not logged in"),
        (status = 403, description = "Section not available to this role")
    )
)]
pub async fn render_section(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(section): Path<String>,
) -> AppResult<Json<View>> {
    let section: Section = section.parse()?;
    let view = state.views.render(&user, section).await?;
    Ok(Json(view))
}

/// Render the role-appropriate dashboard (alias of /views/dashboard)
#[utoipa::path(
    get,
    path = "/dashboard",
    tag = "Views",
    responses(
        (status = 200, description = "Dashboard aggregates"),
        (status = 401, description = "Not logged in")
    )
)]
pub async fn dashboard(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> AppResult<Json<View>> {
    let view = state.views.render(&user, Section::Dashboard).await?;
    Ok(Json(view))
}

/// Flash messages still inside their display window
#[utoipa::path(
    get,
    path = "/notifications",
    tag = "Views",
    responses(
        (status = 200, description = "Active flash messages", body = [FlashView]),
        (status = 401, description = "Not logged in")
    )
)]
pub async fn notifications(State(state): State<AppState>) -> Json<Vec<FlashView>> {
    Json(state.flash.active())
}
