//! Typed error handling for the order-tracking service
//!
//! Every fallible operation in the crate returns [`AppError`], so callers can
//! match on the category instead of inspecting strings.
//!
//! # Error Categories
//!
//! - [`ValidationError`]: malformed or missing request fields (400)
//! - [`NotFoundError`]: unknown customer or order identifier (404)
//! - [`ConstraintViolation`]: uniqueness or referential-integrity violation (409)
//! - [`StorageError`]: backend failures (500)
//!
//! # Example
//!
//! ```rust,ignore
//! match service.get(id).await {
//!     Ok(summary) => println!("{:?}", summary),
//!     Err(AppError::NotFound(NotFoundError::Order(id))) => println!("no order {}", id),
//!     Err(e) => eprintln!("other error: {}", e),
//! }
//! ```

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Crate-wide result alias
pub type Result<T, E = AppError> = std::result::Result<T, E>;

/// The main error type of the service
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Caller sent a malformed or incomplete request
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Referenced customer or order does not exist
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// Store-level uniqueness or foreign-key violation
    #[error(transparent)]
    Constraint(#[from] ConstraintViolation),

    /// Storage backend failure
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Should not happen in normal operation
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl AppError {
    /// Shorthand for a field-level validation failure
    pub fn field(field: &str, message: &str) -> Self {
        AppError::Validation(ValidationError::Field {
            field: field.to_string(),
            message: message.to_string(),
        })
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Constraint(_) => StatusCode::CONFLICT,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Constraint(_) => "CONSTRAINT_VIOLATION",
            AppError::Storage(_) => "STORAGE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Whether the caller is at fault (4xx)
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            AppError::Validation(ValidationError::Field { field, .. }) => {
                Some(serde_json::json!({ "field": field }))
            }
            AppError::NotFound(e) => Some(serde_json::json!({
                "entity_type": e.entity_type(),
                "id": e.id()
            })),
            AppError::Constraint(ConstraintViolation::DuplicateEmail { email }) => {
                Some(serde_json::json!({ "email": email }))
            }
            AppError::Constraint(ConstraintViolation::UnknownCustomer { customer_id }) => {
                Some(serde_json::json!({ "customer_id": customer_id }))
            }
            _ => None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.error_code(), error = %self, "request failed");
        } else {
            tracing::warn!(code = self.error_code(), error = %self, "request rejected");
        }
        (status, Json(self.to_response())).into_response()
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors related to input validation
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// A single field failed a check; displays as the bare message
    #[error("{message}")]
    Field { field: String, message: String },

    /// Request body could not be decoded
    #[error("Invalid JSON: {message}")]
    InvalidJson { message: String },

    /// Path parameter could not be decoded
    #[error("Invalid path parameter: {message}")]
    InvalidPath { message: String },
}

// =============================================================================
// Not Found Errors
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NotFoundError {
    #[error("Customer not found: {0}")]
    Customer(i64),

    #[error("Order not found: {0}")]
    Order(i64),
}

impl NotFoundError {
    pub fn entity_type(&self) -> &'static str {
        match self {
            NotFoundError::Customer(_) => "customer",
            NotFoundError::Order(_) => "order",
        }
    }

    pub fn id(&self) -> i64 {
        match self {
            NotFoundError::Customer(id) | NotFoundError::Order(id) => *id,
        }
    }
}

// =============================================================================
// Constraint Violations
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ConstraintViolation {
    #[error("Customer email already exists: {email}")]
    DuplicateEmail { email: String },

    #[error("Order references unknown customer: {customer_id}")]
    UnknownCustomer { customer_id: i64 },
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors related to storage backends
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("{backend} query error: {message}")]
    Query { backend: String, message: String },

    #[error("Transaction error: {message}")]
    Transaction { message: String },

    /// A stored row could not be turned back into a domain value
    #[error("Corrupt stored data: {message}")]
    Corrupt { message: String },

    #[error("Failed to acquire store lock: {message}")]
    Lock { message: String },
}

// =============================================================================
// Conversions
// =============================================================================

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Validation(ValidationError::InvalidJson {
            message: err.to_string(),
        })
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(ValidationError::InvalidJson {
            message: rejection.body_text(),
        })
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Validation(ValidationError::InvalidPath {
            message: rejection.body_text(),
        })
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

#[cfg(feature = "postgres")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Storage(StorageError::Query {
            backend: "postgres".to_string(),
            message: err.to_string(),
        })
    }
}
