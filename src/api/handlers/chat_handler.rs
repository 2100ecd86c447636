//! Scripted assistant chat handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::get,
    Extension, Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::ChatMessage;
use crate::errors::AppResult;

/// Outgoing chat message
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SendMessageRequest {
    #[validate(length(min = 1, message = "Message is required"))]
    #[schema(example = "How risky was last week?")]
    pub message: String,
}

/// Create chat routes
pub fn chat_routes() -> Router<AppState> {
    Router::new().route("/", get(history).post(send_message))
}

/// The caller's conversation, oldest first
#[utoipa::path(
    get,
    path = "/chat",
    tag = "Chat",
    responses(
        (status = 200, description = "Conversation messages", body = [ChatMessage]),
        (status = 401, description = "Not logged in")
    )
)]
pub async fn history(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> AppResult<Json<Vec<ChatMessage>>> {
    let messages = state.chat_service.history(user.scope()).await?;
    Ok(Json(messages))
}

/// Send a message; the scripted reply lands after the delay
#[utoipa::path(
    post,
    path = "/chat",
    tag = "Chat",
    request_body = SendMessageRequest,
    responses(
        (status = 201, description = "Message appended; reply follows", body = ChatMessage),
        (status = 400, description = "Empty message")
    )
)]
pub async fn send_message(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    ValidatedJson(payload): ValidatedJson<SendMessageRequest>,
) -> AppResult<(StatusCode, Json<ChatMessage>)> {
    let message = state
        .chat_service
        .send(user.scope(), payload.message)
        .await?;
    Ok((StatusCode::CREATED, Json(message)))
}
