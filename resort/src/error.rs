//! Error types for the resort library.
//!
//! This module provides the error hierarchy for every operation on the
//! reservation store, using `thiserror` for ergonomic error handling.

use thiserror::Error;

use crate::status::{ManualStatus, Status};

/// Result type alias for operations that may fail with a resort error.
///
/// # Examples
///
/// ```
/// use resort::{Error, Result};
///
/// fn example_operation() -> Result<i64> {
///     Ok(8000)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the resort library.
///
/// No variant is fatal to the process: callers display the message to the
/// operator and keep running.
#[derive(Debug, Error)]
pub enum Error {
    /// A required field was missing or malformed.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A reservation with the same id is already in the store.
    #[error("reservation ID '{id}' already exists, please use a unique ID")]
    DuplicateId {
        /// The id that collided.
        id: String,
    },

    /// The requested resource was not found.
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },

    /// A manual status change is not permitted from the current status.
    #[error("cannot change status from {from} to {to}: {reason}")]
    IllegalTransition {
        /// The status the reservation currently has.
        from: Status,
        /// The manual status that was requested.
        to: ManualStatus,
        /// Operator-facing explanation.
        reason: String,
    },

    /// Writing the snapshot failed. The in-memory change is kept.
    #[error("failed to save reservations: {details}")]
    Persistence {
        /// Details about the failure.
        details: String,
    },

    /// The snapshot file could not be read back.
    #[error("reservation data could not be loaded: {details}")]
    LoadCorruption {
        /// Details about the corruption.
        details: String,
    },

    /// The operator credentials did not match.
    #[error("invalid username or password")]
    AuthenticationFailed,

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An unsupported schema version was encountered.
    #[error("unsupported schema version: expected {expected}, found {found}")]
    UnsupportedSchemaVersion {
        /// The expected schema version.
        expected: i32,
        /// The schema version found in the database.
        found: i32,
    },
}

impl From<crate::reservation::FieldError> for Error {
    fn from(err: crate::reservation::FieldError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

impl Error {
    /// Check if error rejects operator input (missing field, bad dates,
    /// duplicate id).
    ///
    /// # Examples
    ///
    /// ```
    /// use resort::Error;
    ///
    /// let err = Error::DuplicateId { id: "R1".to_string() };
    /// assert!(err.is_validation());
    /// ```
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. } | Self::DuplicateId { .. })
    }

    /// Check if error indicates an unknown reservation id.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
