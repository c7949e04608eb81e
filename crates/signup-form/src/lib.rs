// Signup Form - field controllers and form-level state for the signup screen
// State machine and validity derivation only; rendering stays with the caller

pub mod config;
pub mod display;
pub mod field;
pub mod form;
pub mod state;

pub use config::FieldConfig;
pub use display::DisplayCategory;
pub use field::FieldName;
pub use form::{Field, FormError, FormState, Registration};
pub use state::FieldState;

// Re-export the rule set so screens depend on a single crate
pub use signup_validation as validation;
pub use signup_validation::ValidationError;
