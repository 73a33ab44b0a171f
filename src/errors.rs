//! # Error Handling
//!
//! Two error types live here:
//!
//! - [`CatalogError`]: why the record file could not be loaded. It never reaches
//!   a client directly; at start-up it degrades to an empty catalog, on reload it
//!   becomes an [`ApiError::Internal`].
//! - [`ApiError`]: what a handler returns. It maps to an HTTP status and a
//!   sanitized `{"error": "..."}` body, and logs internal details through
//!   `tracing`.
//!
//! Data irregularities inside records (missing fields, unparsable numbers) are
//! not errors at all; the filtering predicates absorb them.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use compound_catalog::ApiError;
//!
//! async fn handler(Path(id): Path<i64>) -> Result<Json<Record>, ApiError> {
//!     let record = catalog
//!         .lookup(id)
//!         .ok_or_else(|| ApiError::not_found("Compound", Some(id.to_string())))?;
//!     Ok(Json(record.record.clone()))
//! }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to read or decode the record file.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("record file not found at {}", .0.display())]
    NotFound(PathBuf),
    #[error("failed to read record file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse record file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// API error type with automatic logging and sanitized responses
#[derive(Debug)]
pub enum ApiError {
    /// 404 Not Found - Resource doesn't exist
    NotFound {
        /// Resource type (e.g., "Compound")
        resource: String,
        /// Optional ID that wasn't found
        id: Option<String>,
    },

    /// 500 Internal Server Error - details logged, never sent to the client
    Internal {
        /// User-facing generic message
        message: String,
        /// Internal error details (logged, not sent to user)
        internal: Option<String>,
    },
}

impl ApiError {
    /// Create a 404 Not Found error
    ///
    /// # Example
    /// ```rust,ignore
    /// return Err(ApiError::not_found("Compound", Some(id.to_string())));
    /// ```
    pub fn not_found(resource: impl Into<String>, id: Option<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
            id,
        }
    }

    /// Create a 500 Internal Server Error
    pub fn internal(message: impl Into<String>, internal: Option<String>) -> Self {
        Self::Internal {
            message: message.into(),
            internal,
        }
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the user-facing error message (sanitized)
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound { resource, id } => {
                if let Some(id) = id {
                    format!("{resource} with ID '{id}' not found")
                } else {
                    format!("{resource} not found")
                }
            }
            Self::Internal { message, .. } => message.clone(),
        }
    }

    /// Log internal error details (not sent to user)
    fn log_internal(&self) {
        match self {
            Self::Internal {
                internal: Some(details),
                ..
            } => {
                tracing::error!(details = %details, "Internal error occurred");
            }
            _ => {
                tracing::debug!(
                    error = %self.user_message(),
                    status = %self.status_code(),
                    "API error"
                );
            }
        }
    }
}

/// Error response sent to users (sanitized)
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.log_internal();

        let status = self.status_code();
        let response = ErrorResponse {
            error: self.user_message(),
        };

        (status, Json(response)).into_response()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl std::error::Error for ApiError {}

/// A failed reload surfaces as a generic 500; the cause is only logged.
impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        Self::Internal {
            message: "Internal server error".to_string(),
            internal: Some(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_with_id() {
        let err = ApiError::not_found("Compound", Some("123".to_string()));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.user_message(), "Compound with ID '123' not found");
    }

    #[test]
    fn test_not_found_without_id() {
        let err = ApiError::not_found("Compound", None);
        assert_eq!(err.user_message(), "Compound not found");
    }

    #[test]
    fn test_internal_error_hides_details() {
        let err = ApiError::internal("Internal server error", Some("disk on fire".to_string()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.user_message(), "Internal server error");
        assert!(!err.to_string().contains("disk"));
    }

    #[test]
    fn test_catalog_error_becomes_sanitized_internal() {
        let catalog_err = CatalogError::NotFound(PathBuf::from("/srv/secret/data.json"));
        let err: ApiError = catalog_err.into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.user_message().contains("/srv/secret"));
    }

    #[test]
    fn test_catalog_error_messages_name_the_path() {
        let err = CatalogError::NotFound(PathBuf::from("static/data.json"));
        assert_eq!(err.to_string(), "record file not found at static/data.json");
    }

    #[test]
    fn test_error_trait() {
        let err = ApiError::not_found("Compound", None);
        let _: &dyn std::error::Error = &err;
    }
}
