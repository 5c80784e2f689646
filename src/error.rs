use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use std::fmt;

use crate::domain::entities::ContentType;
use crate::domain::repositories::StoreError;

/// Repository operation names, used in errors, logs, and metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ListAll,
    GetOne,
    ListByRelation,
}

impl Operation {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ListAll => "list_all",
            Self::GetOne => "get_one",
            Self::ListByRelation => "list_by_relation",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned by [`crate::application::services::ContentRepository`].
///
/// A store-side not-found never appears here; it is reported as an empty list
/// or `None`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ContentError {
    /// Any remote failure other than not-found.
    #[error("failed to fetch {content_type} ({operation}): {source}")]
    FetchFailure {
        operation: Operation,
        content_type: ContentType,
        #[source]
        source: StoreError,
    },

    /// The caller broke a precondition; no remote call was made.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl ContentError {
    pub fn fetch(operation: Operation, content_type: ContentType, source: StoreError) -> Self {
        Self::FetchFailure {
            operation,
            content_type,
            source,
        }
    }

    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, Self::FetchFailure { .. })
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    NotFound { message: String, details: Value },
    Upstream { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn upstream(message: impl Into<String>, details: Value) -> Self {
        Self::Upstream {
            message: message.into(),
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message,
                details,
            ),
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message, details)
            }
            AppError::Upstream { message, details } => {
                (StatusCode::BAD_GATEWAY, "upstream_error", message, details)
            }
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<ContentError> for AppError {
    fn from(e: ContentError) -> Self {
        match e {
            ContentError::FetchFailure {
                operation,
                content_type,
                source,
            } => AppError::upstream(
                format!("Failed to fetch {content_type}"),
                json!({
                    "operation": operation.as_str(),
                    "content_type": content_type.as_str(),
                    "reason": source.code(),
                }),
            ),
            ContentError::InvalidRequest(message) => AppError::bad_request(message, json!({})),
        }
    }
}
