//! Validation error type

use serde::{Deserialize, Serialize};

/// Error produced when a field value fails its rule.
///
/// Carries the user-facing message of the first failing clause. Always
/// recoverable and always local to a single field; the form never aborts
/// on one of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Human-readable message shown next to the field.
    pub message: String,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
