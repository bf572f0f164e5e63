//! API error handling
//!
//! Backend failures of every kind resolve to a structured JSON response; no
//! storage or CRM fault is allowed to tear down the process or escape as an
//! opaque body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use domain_contact::BackendError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("CRM error: {0}")]
    CrmUpstream(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            ApiError::CrmUpstream(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "crm_error", msg),
            ApiError::Storage(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "storage_error", msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg),
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<BackendError> for ApiError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::Validation { message } => ApiError::BadRequest(message),
            e @ BackendError::NotFound { .. } => ApiError::NotFound(e.to_string()),
            e @ BackendError::Upstream { .. } => ApiError::CrmUpstream(e.to_string()),
            e @ BackendError::Connection { .. } | e @ BackendError::Storage { .. } => {
                ApiError::Storage(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_contact::ContactOperation;

    #[test]
    fn validation_errors_become_bad_requests() {
        let err = ApiError::from(BackendError::validation("bad selector"));
        assert!(matches!(err, ApiError::BadRequest(msg) if msg == "bad selector"));
    }

    #[test]
    fn upstream_errors_keep_the_operation_label() {
        let err = ApiError::from(BackendError::upstream(
            ContactOperation::Update,
            "503 Service Unavailable",
        ));
        match err {
            ApiError::CrmUpstream(msg) => {
                assert!(msg.contains("updating"));
                assert!(msg.contains("503"));
            }
            other => panic!("expected CrmUpstream, got {other:?}"),
        }
    }

    #[test]
    fn connection_and_storage_faults_collapse_to_storage() {
        assert!(matches!(
            ApiError::from(BackendError::connection("pool exhausted")),
            ApiError::Storage(_)
        ));
        assert!(matches!(
            ApiError::from(BackendError::storage("syntax error")),
            ApiError::Storage(_)
        ));
    }
}
