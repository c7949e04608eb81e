//! Username validation
//!
//! Not wired into the six-field signup form; kept as a library rule for the
//! account screens that share this crate.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ValidationError;

/// Lowercase alphanumerics and underscores, starting with a letter.
static USERNAME_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z][a-z0-9_]*$").unwrap());

/// Validates a username: 3 to 20 characters, lowercase letters, digits, and
/// underscores, starting with a letter.
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    let len = username.chars().count();

    if len < 3 {
        return Err(ValidationError::new(
            "El nombre de usuario debe tener al menos 3 caracteres",
        ));
    }
    if len > 20 {
        return Err(ValidationError::new(
            "El nombre de usuario no puede exceder 20 caracteres",
        ));
    }
    if !USERNAME_PATTERN.is_match(username) {
        return Err(ValidationError::new(
            "Solo minúsculas, números y guiones bajos. Debe comenzar con letra",
        ));
    }

    Ok(())
}
