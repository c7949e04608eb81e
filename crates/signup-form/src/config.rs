// File: src/config.rs
// Purpose: Per-field behavior switches, mirroring the screen's field props

use serde::{Deserialize, Serialize};

/// Behavior switches for one field controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Re-run the rule on every keystroke once the field is touched.
    /// Off by default: such fields only refresh their error on blur.
    pub validate_on_change: bool,
    /// Surface the success state once touched, valid, and non-empty.
    pub show_success_state: bool,
    /// A disabled field ignores events and always renders as disabled.
    pub disabled: bool,
    /// Secure text entry (passwords); enables the visibility toggle.
    pub secure_entry: bool,
    /// Hard cap on accepted input length, in characters.
    pub max_length: Option<usize>,
}

impl FieldConfig {
    /// Creates a config with the default switches.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable re-validation on change (builder).
    pub fn with_validate_on_change(mut self, on: bool) -> Self {
        self.validate_on_change = on;
        self
    }

    /// Enable or suppress the success state (builder).
    pub fn with_show_success_state(mut self, on: bool) -> Self {
        self.show_success_state = on;
        self
    }

    /// Disable the field (builder).
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Mark the field as secure entry (builder).
    pub fn with_secure_entry(mut self, secure: bool) -> Self {
        self.secure_entry = secure;
        self
    }

    /// Cap accepted input length in characters (builder).
    pub fn with_max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            validate_on_change: false,
            show_success_state: true,
            disabled: false,
            secure_entry: false,
            max_length: None,
        }
    }
}
