//! Contact backend errors
//!
//! `BackendError` is the unified error type both backend adapters return, so
//! the HTTP layer maps outcomes to responses without knowing which backend
//! ran the operation.

use std::fmt;

use thiserror::Error;

/// The four contact operations, used to label upstream failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactOperation {
    Create,
    Read,
    Update,
    Delete,
}

impl fmt::Display for ContactOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactOperation::Create => f.write_str("creating"),
            ContactOperation::Read => f.write_str("retrieving"),
            ContactOperation::Update => f.write_str("updating"),
            ContactOperation::Delete => f.write_str("deleting"),
        }
    }
}

/// Errors a contact backend can produce.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The requested contact does not exist in the selected backend.
    #[error("{entity} with id '{id}' not found")]
    NotFound { entity: String, id: String },

    /// The request was rejected before reaching any backend.
    #[error("{message}")]
    Validation { message: String },

    /// The CRM call failed: connect error, non-2xx response, or a body that
    /// could not be decoded. Not distinguished by cause and never retried.
    #[error("Error {operation} contact in CRM: {message}")]
    Upstream {
        operation: ContactOperation,
        message: String,
    },

    /// The relational store could not be reached.
    #[error("Connection error: {message}")]
    Connection { message: String },

    /// A relational query failed.
    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl BackendError {
    pub fn not_found(entity: &str, id: impl fmt::Display) -> Self {
        BackendError::NotFound {
            entity: entity.to_string(),
            id: id.to_string(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        BackendError::Validation {
            message: message.into(),
        }
    }

    pub fn upstream(operation: ContactOperation, message: impl Into<String>) -> Self {
        BackendError::Upstream {
            operation,
            message: message.into(),
        }
    }

    pub fn connection(message: impl Into<String>) -> Self {
        BackendError::Connection {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        BackendError::Storage {
            message: message.into(),
        }
    }

    /// True when the error means the contact does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, BackendError::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_error_names_the_failing_operation() {
        let err = BackendError::upstream(ContactOperation::Create, "connection refused");
        let text = err.to_string();
        assert!(text.contains("creating"));
        assert!(text.contains("connection refused"));

        let err = BackendError::upstream(ContactOperation::Delete, "503 Service Unavailable");
        assert!(err.to_string().contains("deleting"));
    }

    #[test]
    fn not_found_carries_entity_and_id() {
        let err = BackendError::not_found("Contact", 42);
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Contact with id '42' not found");
    }
}
