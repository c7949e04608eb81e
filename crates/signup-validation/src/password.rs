//! Password validation

use crate::error::ValidationError;

/// Validates password strength: 8+ characters with at least one uppercase
/// letter, one lowercase letter, one digit, and one character outside the
/// alphanumeric set.
///
/// The regex crate doesn't support lookaheads, so the character classes are
/// checked manually.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() < 8 {
        return Err(ValidationError::new(
            "La contraseña debe tener al menos 8 caracteres",
        ));
    }
    if !password.chars().any(|c| c.is_uppercase()) {
        return Err(ValidationError::new("Debe contener al menos una mayúscula"));
    }
    if !password.chars().any(|c| c.is_lowercase()) {
        return Err(ValidationError::new("Debe contener al menos una minúscula"));
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(ValidationError::new("Debe contener al menos un número"));
    }
    if !password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        return Err(ValidationError::new(
            "Debe contener al menos un carácter especial",
        ));
    }

    Ok(())
}

/// Compares the confirmation against the password value current at call
/// time. Taking both values as arguments means there is no captured copy of
/// the password that could go stale between keystrokes.
pub fn passwords_match(confirm: &str, password: &str) -> bool {
    confirm == password
}

/// Validates the confirmation field against the current password.
pub fn validate_confirm_password(confirm: &str, password: &str) -> Result<(), ValidationError> {
    if confirm.is_empty() {
        return Err(ValidationError::new("Por favor confirma tu contraseña"));
    }
    if !passwords_match(confirm, password) {
        return Err(ValidationError::new("Las contraseñas no coinciden"));
    }

    Ok(())
}
