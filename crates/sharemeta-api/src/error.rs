use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errors rendered as JSON responses
///
/// Metadata routes never fail for a matched thread id; these cover requests
/// that never reach a share handler.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Route not found: {0}")]
    RouteNotFound(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::RouteNotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_not_found_status() {
        let response = ApiError::RouteNotFound("/nope".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_display() {
        let err = ApiError::RouteNotFound("/share//metadata".to_string());
        assert_eq!(err.to_string(), "Route not found: /share//metadata");
    }
}
