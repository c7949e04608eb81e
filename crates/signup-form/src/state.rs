// File: src/state.rs
// Purpose: Per-field controller state

use serde::{Deserialize, Serialize};
use signup_validation::ValidationError;

/// Live state of one field controller.
///
/// `touched` flips to true exactly once, on the first blur, and never
/// reverts. `error` is only surfaced while `touched` is set: a pristine
/// field stays quiet no matter what its value currently looks like, so the
/// user never sees red while still typing for the first time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldState {
    /// Current raw text.
    pub value: String,
    /// The field has lost focus at least once.
    pub touched: bool,
    /// The field currently holds focus.
    pub focused: bool,
    /// Secure-entry visibility toggle.
    pub show_password: bool,
    /// Outcome of the most recent validation run.
    pub error: Option<ValidationError>,
}

impl FieldState {
    /// Error to display. None while pristine, whatever the cached error says.
    pub fn displayed_error(&self) -> Option<&ValidationError> {
        if self.touched {
            self.error.as_ref()
        } else {
            None
        }
    }

    /// Touched, error-free, and non-empty.
    pub fn is_success(&self) -> bool {
        self.touched && self.error.is_none() && !self.value.is_empty()
    }
}
