//! Error types for the Ledger API.
//!
//! ## Rendering
//! ```text
//! handler ──► Err(ApiError) ──► IntoResponse
//!                                  │  status + JSON body (path empty)
//!                                  │  ApiError stashed in response extensions
//!                                  ▼
//!                       attach_request_path (outermost middleware)
//!                                  │  re-renders the body with the request path
//!                                  ▼
//!             { status, error, message, path, timestamp }
//! ```
//! Handlers never see the request path; the middleware fills it in for
//! every error, including extractor rejections and the 404/405 fallbacks.
//! `path` reads `uri=<request path>`, e.g. `uri=/api/profit/shipments/999`.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{SecondsFormat, Utc};
use ledger_core::CoreError;
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

/// Message for any unknown route or missing element without a specific message.
pub const GENERIC_NOT_FOUND: &str = "The requested resource was not found";

/// The only message a 500 ever carries.
pub const GENERIC_INTERNAL: &str = "An unexpected error occurred";

/// Ledger API errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    MethodNotAllowed(String),

    /// Detail is logged, never sent.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message as the client sees it.
    pub fn public_message(&self) -> &str {
        match self {
            ApiError::NotFound(msg)
            | ApiError::BadRequest(msg)
            | ApiError::MethodNotAllowed(msg) => msg,
            ApiError::Internal(_) => GENERIC_INTERNAL,
        }
    }

    /// JSON body for a request to `path`.
    pub fn body(&self, path: &str) -> ErrorBody {
        let status = self.status();
        ErrorBody {
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or("Unknown").to_string(),
            message: self.public_message().to_string(),
            path: format!("uri={path}"),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    fn render(&self, path: &str) -> Response {
        (self.status(), Json(self.body(path))).into_response()
    }
}

/// Wire form of every error response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub status: u16,
    pub error: String,
    pub message: String,
    pub path: String,
    pub timestamp: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Internal(detail) => error!(%detail, "Request failed"),
            ApiError::BadRequest(msg) => warn!(%msg, "Rejected request"),
            ApiError::NotFound(_) | ApiError::MethodNotAllowed(_) => {}
        }

        let mut response = self.render("");
        response.extensions_mut().insert(self);
        response
    }
}

/// Outermost middleware: stamps the request path into error bodies.
pub async fn attach_request_path(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_string();
    let response = next.run(request).await;

    match response.extensions().get::<ApiError>() {
        Some(err) => err.render(&path),
        None => response,
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NotFound { .. } => ApiError::NotFound(err.to_string()),
            CoreError::Validation(e) => ApiError::BadRequest(e.to_string()),
            CoreError::Storage(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

/// Result type for handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use ledger_core::ValidationError;

    #[test]
    fn test_core_not_found_maps_to_404() {
        let err = ApiError::from(CoreError::not_found("Shipment", 999));

        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.public_message(), "Shipment not found with id : '999'");
    }

    #[test]
    fn test_validation_maps_to_400() {
        let err = ApiError::from(CoreError::from(ValidationError::IncomeAndCostNotPositive));

        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.public_message(), "Income and Cost cannot both be 0");
    }

    #[test]
    fn test_storage_detail_is_hidden() {
        let err = ApiError::from(CoreError::storage("disk I/O error"));

        let body = err.body("/api/profit/shipments");
        assert_eq!(body.status, 500);
        assert_eq!(body.error, "Internal Server Error");
        assert_eq!(body.message, "An unexpected error occurred");
        assert!(!body.message.contains("disk"));
    }

    #[test]
    fn test_body_fields() {
        let body = ApiError::NotFound(GENERIC_NOT_FOUND.to_string()).body("/nope");

        assert_eq!(body.status, 404);
        assert_eq!(body.error, "Not Found");
        assert_eq!(body.message, "The requested resource was not found");
        assert_eq!(body.path, "uri=/nope");
        assert!(chrono::DateTime::parse_from_rfc3339(&body.timestamp).is_ok());
    }

    #[test]
    fn test_method_not_allowed_body() {
        let body = ApiError::MethodNotAllowed("Request method 'PUT' is not supported".into())
            .body("/api/profit/shipments");

        assert_eq!(body.status, 405);
        assert_eq!(body.error, "Method Not Allowed");
        assert_eq!(body.message, "Request method 'PUT' is not supported");
    }

    #[test]
    fn test_body_serializes_flat() {
        let body = ApiError::BadRequest("bad".into()).body("/x");
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["status"], 400);
        assert_eq!(json["error"], "Bad Request");
        assert_eq!(json["message"], "bad");
        assert_eq!(json["path"], "uri=/x");
        assert!(json["timestamp"].is_string());
    }
}
