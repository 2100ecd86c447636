//! Transaction list handler.

use axum::{
    extract::{Query, State},
    response::Json,
    routing::get,
    Extension, Router,
};

use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::config::MAX_TRANSACTION_ROWS;
use crate::domain::Transaction;
use crate::errors::AppResult;
use crate::types::{Paginated, PaginationParams};

/// Create transaction routes
pub fn transaction_routes() -> Router<AppState> {
    Router::new().route("/", get(list_transactions))
}

/// Scoped transactions, most recent first, capped at 200 rows
#[utoipa::path(
    get,
    path = "/transactions",
    tag = "Transactions",
    params(
        ("page" = Option<u64>, Query, description = "1-indexed page"),
        ("per_page" = Option<u64>, Query, description = "Rows per page")
    ),
    responses(
        (status = 200, description = "Paginated transactions"),
        (status = 401, description = "Not logged in")
    )
)]
pub async fn list_transactions(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Query(pagination): Query<PaginationParams>,
) -> AppResult<Json<Paginated<Transaction>>> {
    let mut rows = state.transactions.list(user.scope()).await?;
    rows.truncate(MAX_TRANSACTION_ROWS);
    Ok(Json(pagination.slice(rows)))
}
