//! Phone validation

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ValidationError;

/// Digits, `+`, whitespace, parentheses, and dashes.
static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9+\s()-]+$").unwrap());

/// Validates a phone number: at least 10 characters drawn from digits,
/// `+`, whitespace, parentheses, and dashes.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if phone.chars().count() < 10 {
        return Err(ValidationError::new(
            "El teléfono debe tener al menos 10 dígitos",
        ));
    }
    if !PHONE_PATTERN.is_match(phone) {
        return Err(ValidationError::new("Formato de teléfono inválido"));
    }

    Ok(())
}
