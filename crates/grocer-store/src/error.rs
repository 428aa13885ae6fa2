//! # Store Error Types
//!
//! Error types for data file operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error / CoreError                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds the file path and categorization      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in app) ← Code + message for the user                       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use grocer_core::{CoreError, ValidationError};
use thiserror::Error;

/// Data file operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The data file exists but is not a well-formed inventory.
    ///
    /// ## When This Occurs
    /// - Invalid JSON (hand edit, truncated write)
    /// - Valid JSON of the wrong shape (object instead of list, missing field)
    /// - An item breaking the item rules (blank name, zero price)
    #[error("Data file {} is corrupted: {source}", .path.display())]
    DataCorruption {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Replace/remove targeted a position past the end of the list.
    #[error("Index {index} is out of range for inventory of {len} items")]
    IndexOutOfRange { index: usize, len: usize },

    /// Item rules violated.
    ///
    /// Items reach the store already validated, so store operations don't
    /// raise this themselves; it keeps `From<CoreError>` a complete mapping.
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    /// Reading or writing the file failed.
    ///
    /// ## When This Occurs
    /// - Permission denied
    /// - Parent directory missing
    /// - Disk full
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn corruption(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        StoreError::DataCorruption {
            path: path.into(),
            source,
        }
    }
}

/// Convert inventory rule violations to StoreError.
impl From<CoreError> for StoreError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::IndexOutOfRange { index, len } => StoreError::IndexOutOfRange { index, len },
            CoreError::InvalidInput(e) => StoreError::InvalidInput(e),
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
