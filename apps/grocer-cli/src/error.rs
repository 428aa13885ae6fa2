//! # API Error Type
//!
//! Unified error type for CLI commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Grocer                                 │
//! │                                                                         │
//! │  grocer delete 9                                                        │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Store Error? ─── StoreError::IndexOutOfRange ────┐             │  │
//! │  │         │                                         │             │  │
//! │  │         ▼                                         ▼             │  │
//! │  │  Validation Error? ─── CoreError::InvalidInput ── ApiError ────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  stderr: error [NOT_FOUND]: No item at position 9 (list has 3 items)    │
//! │  exit status 1                                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use grocer_core::{CoreError, ValidationError};
use grocer_store::StoreError;

/// Error returned from CLI commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "Invalid input: quantity must be positive"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,
}

/// Error codes for command failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Position doesn't exist in the list
    NotFound,

    /// Input validation failed
    ValidationError,

    /// The data file is not a valid inventory
    DataCorruption,

    /// The data file couldn't be read or written
    StorageError,

    /// Internal error
    Internal,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::DataCorruption => "DATA_CORRUPTION",
            ErrorCode::StorageError => "STORAGE_ERROR",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error for a list position.
    pub fn not_found(index: usize, len: usize) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("No item at position {} (list has {} items)", index, len),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts store errors to API errors.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::IndexOutOfRange { index, len } => ApiError::not_found(index, len),
            StoreError::InvalidInput(e) => ApiError::validation(format!("Invalid input: {}", e)),
            e @ StoreError::DataCorruption { .. } => {
                tracing::error!(error = %e, "Data file is corrupted");
                ApiError::new(ErrorCode::DataCorruption, e.to_string())
            }
            e @ StoreError::Io { .. } => {
                tracing::error!(error = %e, "Data file I/O failed");
                ApiError::new(ErrorCode::StorageError, e.to_string())
            }
        }
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::IndexOutOfRange { index, len } => ApiError::not_found(index, len),
            CoreError::InvalidInput(e) => ApiError::validation(format!("Invalid input: {}", e)),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        CoreError::from(err).into()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_out_of_range_is_not_found() {
        let err: ApiError = StoreError::IndexOutOfRange { index: 9, len: 3 }.into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.to_string(), "[NOT_FOUND] No item at position 9 (list has 3 items)");
    }

    #[test]
    fn test_store_failures_keep_their_codes() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ApiError = StoreError::Io {
            path: "/tmp/grocery_data.json".into(),
            source: io,
        }
        .into();
        assert_eq!(err.code, ErrorCode::StorageError);

        let err: ApiError = StoreError::InvalidInput(ValidationError::Required {
            field: "name".to_string(),
        })
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_validation_mapping() {
        let err: ApiError = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "Invalid input: quantity must be positive");
    }

    #[test]
    fn test_serialized_shape() {
        let err = ApiError::validation("bad");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json, serde_json::json!({ "code": "VALIDATION_ERROR", "message": "bad" }));
    }
}
