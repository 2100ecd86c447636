//! Report catalog, simulated generation and canned download.

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, HeaderValue},
    response::{IntoResponse, Json, Response},
    routing::get,
    Extension, Router,
};

use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::{Report, Role};
use crate::errors::{AppError, AppResult};
use crate::types::Accepted;

/// Create report routes
pub fn report_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_reports).post(generate_report))
        .route("/:id/download", get(download_report))
}

/// List reports visible to the caller
#[utoipa::path(
    get,
    path = "/reports",
    tag = "Reports",
    responses(
        (status = 200, description = "Scoped report catalog", body = [Report]),
        (status = 403, description = "Missing reports permission")
    )
)]
pub async fn list_reports(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> AppResult<Json<Vec<Report>>> {
    if user.role == Role::Staff && !user.permissions.reports {
        return Err(AppError::Forbidden);
    }
    let reports = state.report_service.list(user.scope()).await?;
    Ok(Json(reports))
}

/// Kick off simulated generation; the row appears after the delay
#[utoipa::path(
    post,
    path = "/reports",
    tag = "Reports",
    responses(
        (status = 202, description = "Report generation started"),
        (status = 403, description = "Missing reports permission")
    )
)]
pub async fn generate_report(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> AppResult<Accepted> {
    if user.role == Role::Staff && !user.permissions.reports {
        return Err(AppError::Forbidden);
    }
    state.report_service.generate(user.scope()).await?;
    Ok(Accepted("Report generation started".to_string()))
}

/// Download a report. Every download serves the same canned PDF blob;
/// only the file name varies.
#[utoipa::path(
    get,
    path = "/reports/{id}/download",
    tag = "Reports",
    params(("id" = i64, Path, description = "Report id")),
    responses(
        (status = 200, description = "The canned PDF bytes"),
        (status = 403, description = "Missing export permission"),
        (status = 404, description = "No such report")
    )
)]
pub async fn download_report(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> AppResult<Response> {
    if user.role == Role::Staff && !user.permissions.export {
        return Err(AppError::Forbidden);
    }

    let download = state.report_service.download(id).await?;

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/pdf"),
    );
    let disposition = format!("attachment; filename=\"{}\"", download.file_name);
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_str(&disposition)
            .map_err(|e| AppError::internal(format!("Bad file name: {}", e)))?,
    );

    Ok((headers, download.bytes).into_response())
}
