//! Email validation

use crate::error::ValidationError;

/// Validates basic email format
///
/// Checks for:
/// - Contains exactly one '@' symbol
/// - Has content before and after '@'
/// - Has at least one '.' in domain part
/// - Minimum length requirements
pub fn is_valid_email(email: &str) -> bool {
    if email.len() < 3 {
        return false;
    }

    let parts: Vec<&str> = email.split('@').collect();

    // Must have exactly one @ symbol
    if parts.len() != 2 {
        return false;
    }

    let local = parts[0];
    let domain = parts[1];

    // Local part validation
    if local.is_empty() || local.len() > 64 {
        return false;
    }

    // Domain part validation
    if domain.is_empty() || domain.len() > 255 {
        return false;
    }

    // Domain must have at least one dot
    if !domain.contains('.') {
        return false;
    }

    // Domain can't start or end with dot or hyphen
    if domain.starts_with('.')
        || domain.ends_with('.')
        || domain.starts_with('-')
        || domain.ends_with('-')
    {
        return false;
    }

    // Check for consecutive dots
    if domain.contains("..") {
        return false;
    }

    // Basic character validation for local part
    let valid_local_chars =
        |c: char| c.is_alphanumeric() || c == '.' || c == '_' || c == '%' || c == '-' || c == '+';

    if !local.chars().all(valid_local_chars) {
        return false;
    }

    // Basic character validation for domain
    let valid_domain_chars = |c: char| c.is_alphanumeric() || c == '.' || c == '-';

    if !domain.chars().all(valid_domain_chars) {
        return false;
    }

    // TLD must be at least 2 characters
    if let Some(last_dot_pos) = domain.rfind('.') {
        let tld = &domain[last_dot_pos + 1..];
        if tld.len() < 2 {
            return false;
        }
    }

    true
}

/// Validates an email address and returns it folded to lowercase.
///
/// The lowercased value is what every later consumer sees; the raw input is
/// never used past this point.
pub fn validate_email(email: &str) -> Result<String, ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::new("El email es requerido"));
    }
    if !is_valid_email(email) {
        return Err(ValidationError::new("Por favor ingresa un email válido"));
    }

    Ok(email.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("test.user@example.co.uk"));
        assert!(is_valid_email("user+tag@example.com"));
        assert!(is_valid_email("user_name@example-domain.com"));
        assert!(is_valid_email("user%filter@example.com"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("@"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("user@example..com"));
        assert!(!is_valid_email("not-an-email"));
    }

    #[test]
    fn test_required_message_on_empty() {
        let err = validate_email("").unwrap_err();
        assert_eq!(err.message, "El email es requerido");
    }

    #[test]
    fn test_format_message_on_invalid() {
        let err = validate_email("not-an-email").unwrap_err();
        assert_eq!(err.message, "Por favor ingresa un email válido");
    }

    #[test]
    fn test_accepted_value_is_lowercased() {
        let normalized = validate_email("USER@Example.com").unwrap();
        assert_eq!(normalized, "user@example.com");
    }
}
