use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

/// Standard API response wrapper (consistent response format)
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
        }
    }
}

impl ApiResponse<()> {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
        }
    }
}

/// Created response helper (common pattern for POST endpoints)
pub struct Created<T: Serialize>(pub T);

impl<T: Serialize> IntoResponse for Created<T> {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::CREATED, Json(ApiResponse::success(self.0))).into_response()
    }
}

/// Accepted response helper for simulated work: the request is valid but
/// the visible effect lands only after the fixed delay
pub struct Accepted(pub String);

impl IntoResponse for Accepted {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::ACCEPTED, Json(ApiResponse::message(self.0))).into_response()
    }
}

/// No content response helper (common pattern for DELETE endpoints)
pub struct NoContent;

impl IntoResponse for NoContent {
    fn into_response(self) -> axum::response::Response {
        StatusCode::NO_CONTENT.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_carries_data_without_a_message() {
        let response = ApiResponse::success("payload");
        assert!(response.success);
        assert_eq!(response.data.unwrap(), "payload");
        assert!(response.message.is_none());
    }

    #[test]
    fn with_message_carries_both() {
        let response = ApiResponse::with_message(42, "Operation completed");
        assert_eq!(response.data.unwrap(), 42);
        assert_eq!(response.message.unwrap(), "Operation completed");
    }

    #[test]
    fn message_only_has_no_data() {
        let response = ApiResponse::message("Logged out");
        assert!(response.data.is_none());
        assert_eq!(response.message.unwrap(), "Logged out");
    }

    #[test]
    fn helper_wrappers_map_to_status_codes() {
        assert_eq!(Created("row").into_response().status(), StatusCode::CREATED);
        assert_eq!(
            Accepted("queued".to_string()).into_response().status(),
            StatusCode::ACCEPTED
        );
        assert_eq!(NoContent.into_response().status(), StatusCode::NO_CONTENT);
    }
}
