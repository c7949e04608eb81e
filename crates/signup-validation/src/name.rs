//! Full-name validation

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ValidationError;

/// Letters (any alphabet, so accented names pass) and whitespace only.
static NAME_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\p{L}\s]+$").unwrap());

/// Validates a full name: 2 to 50 characters, letters and spaces only.
pub fn validate_full_name(name: &str) -> Result<(), ValidationError> {
    let len = name.chars().count();

    if len < 2 {
        return Err(ValidationError::new(
            "El nombre debe tener al menos 2 caracteres",
        ));
    }
    if len > 50 {
        return Err(ValidationError::new(
            "El nombre no puede exceder 50 caracteres",
        ));
    }
    if !NAME_PATTERN.is_match(name) {
        return Err(ValidationError::new("Solo se permiten letras y espacios"));
    }

    Ok(())
}
