// File: src/form.rs
// Purpose: Form-level state aggregate with reducer-style transitions

use serde::{Deserialize, Serialize};
use signup_validation::{
    validate_age, validate_confirm_password, validate_email, validate_full_name,
    validate_password, validate_phone, ValidationError,
};

use crate::config::FieldConfig;
use crate::display::DisplayCategory;
use crate::field::FieldName;
use crate::state::FieldState;

/// One field's configuration plus live state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Field {
    pub config: FieldConfig,
    pub state: FieldState,
}

/// Whole-form error. Deliberately coarse: a rejected submit carries one
/// generic message, never per-field detail. The fields themselves keep the
/// detailed messages.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Por favor completa todos los campos correctamente")]
    Invalid,
}

/// Payload assembled from a form that passed every rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub full_name: String,
    /// Folded to lowercase during validation.
    pub email: String,
    pub phone: String,
    pub age: u32,
    pub password: String,
}

/// Aggregate state of the whole signup form, keyed by field name.
///
/// All mutation goes through the transition methods (`on_change`, `on_blur`,
/// `on_focus`), which makes the state machine testable with no rendering
/// environment around it. Validation is synchronous and completes before a
/// transition returns.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormState {
    full_name: Field,
    email: Field,
    phone: Field,
    age: Field,
    password: Field,
    confirm_password: Field,
}

impl FormState {
    /// Creates a form with every field empty, pristine, and default-configured.
    pub fn new() -> Self {
        Self::default()
    }

    fn entry(&self, field: FieldName) -> &Field {
        match field {
            FieldName::FullName => &self.full_name,
            FieldName::Email => &self.email,
            FieldName::Phone => &self.phone,
            FieldName::Age => &self.age,
            FieldName::Password => &self.password,
            FieldName::ConfirmPassword => &self.confirm_password,
        }
    }

    fn entry_mut(&mut self, field: FieldName) -> &mut Field {
        match field {
            FieldName::FullName => &mut self.full_name,
            FieldName::Email => &mut self.email,
            FieldName::Phone => &mut self.phone,
            FieldName::Age => &mut self.age,
            FieldName::Password => &mut self.password,
            FieldName::ConfirmPassword => &mut self.confirm_password,
        }
    }

    // --- Configuration ---

    /// Current config of a field.
    pub fn config(&self, field: FieldName) -> &FieldConfig {
        &self.entry(field).config
    }

    /// Replaces a field's config.
    pub fn set_config(&mut self, field: FieldName, config: FieldConfig) {
        self.entry_mut(field).config = config;
    }

    /// Replaces a field's config (builder).
    pub fn with_config(mut self, field: FieldName, config: FieldConfig) -> Self {
        self.set_config(field, config);
        self
    }

    // --- Queries ---

    /// Current raw text of a field.
    pub fn value(&self, field: FieldName) -> &str {
        &self.entry(field).state.value
    }

    /// Full state of a field.
    pub fn state(&self, field: FieldName) -> &FieldState {
        &self.entry(field).state
    }

    /// Error to display for a field. Always None while the field is pristine.
    pub fn error(&self, field: FieldName) -> Option<&ValidationError> {
        self.entry(field).state.displayed_error()
    }

    /// Display category for a field.
    pub fn display(&self, field: FieldName) -> DisplayCategory {
        let entry = self.entry(field);
        DisplayCategory::derive(&entry.config, &entry.state)
    }

    /// Rule outcome over the field's current raw value, ignoring touched
    /// state and the cached error.
    pub fn is_field_valid(&self, field: FieldName) -> bool {
        self.validate_value(field).is_ok()
    }

    /// True while the screen should show the field's helper text instead of
    /// error or success feedback: not yet touched, no displayed error.
    pub fn helper_visible(&self, field: FieldName) -> bool {
        let state = &self.entry(field).state;
        !state.touched && state.displayed_error().is_none()
    }

    /// Conjunction of every field's rule over current raw values. An
    /// untouched invalid field still blocks submission.
    pub fn is_form_valid(&self) -> bool {
        FieldName::ALL.iter().all(|f| self.validate_value(*f).is_ok())
    }

    // --- Transitions ---

    /// Records a keystroke. The new text always lands in the field's value;
    /// the rule only re-runs when the field is already touched and its
    /// config opted into validate-on-change.
    pub fn on_change(&mut self, field: FieldName, text: impl Into<String>) {
        if self.entry(field).config.disabled {
            return;
        }

        let mut text = text.into();
        let entry = self.entry_mut(field);
        if let Some(max) = entry.config.max_length {
            if text.chars().count() > max {
                text = text.chars().take(max).collect();
            }
        }
        entry.state.value = text;

        if entry.state.touched && entry.config.validate_on_change {
            let verdict = self.validate_value(field);
            self.entry_mut(field).state.error = verdict.err();
        }
    }

    /// Loses focus. The first blur flips the field to touched; every blur
    /// re-runs the rule against the current value.
    pub fn on_blur(&mut self, field: FieldName) {
        if self.entry(field).config.disabled {
            return;
        }

        let state = &mut self.entry_mut(field).state;
        state.touched = true;
        state.focused = false;

        let verdict = self.validate_value(field);
        tracing::debug!("Field {} blurred, valid: {}", field, verdict.is_ok());
        self.entry_mut(field).state.error = verdict.err();
    }

    /// Gains focus. Presentational only: touched and error are untouched.
    pub fn on_focus(&mut self, field: FieldName) {
        if self.entry(field).config.disabled {
            return;
        }
        self.entry_mut(field).state.focused = true;
    }

    /// Flips the secure-entry visibility toggle. Ignored on fields without
    /// secure entry.
    pub fn toggle_password_visibility(&mut self, field: FieldName) {
        let entry = self.entry_mut(field);
        if entry.config.secure_entry {
            entry.state.show_password = !entry.state.show_password;
        }
    }

    // --- Submission ---

    /// Re-validates every field from current raw values and assembles the
    /// registration payload. Any failing field collapses into the single
    /// whole-form error; the side effect of a successful submit belongs to
    /// the caller.
    pub fn submit(&self) -> Result<Registration, FormError> {
        if !self.is_form_valid() {
            tracing::debug!("Submit rejected, form invalid");
            return Err(FormError::Invalid);
        }

        let email =
            validate_email(self.value(FieldName::Email)).map_err(|_| FormError::Invalid)?;
        let age = self
            .value(FieldName::Age)
            .parse()
            .map_err(|_| FormError::Invalid)?;

        tracing::debug!("Submit accepted");
        Ok(Registration {
            full_name: self.value(FieldName::FullName).to_string(),
            email,
            phone: self.value(FieldName::Phone).to_string(),
            age,
            password: self.value(FieldName::Password).to_string(),
        })
    }

    /// Runs the field's rule against its current raw value. The
    /// confirm-password rule reads the password value current at this
    /// instant, never a snapshot.
    fn validate_value(&self, field: FieldName) -> Result<(), ValidationError> {
        let text = self.value(field);
        match field {
            FieldName::FullName => validate_full_name(text),
            FieldName::Email => validate_email(text).map(|_| ()),
            FieldName::Phone => validate_phone(text),
            FieldName::Age => validate_age(text),
            FieldName::Password => validate_password(text),
            FieldName::ConfirmPassword => {
                validate_confirm_password(text, self.value(FieldName::Password))
            }
        }
    }
}
