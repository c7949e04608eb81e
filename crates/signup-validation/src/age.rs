//! Age validation

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ValidationError;

static AGE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());

/// Validates an age: ASCII digits only, then an inclusive 18 to 120 range.
///
/// The range check never runs when the digit check fails.
pub fn validate_age(age: &str) -> Result<(), ValidationError> {
    if !AGE_PATTERN.is_match(age) {
        return Err(ValidationError::new("Solo se permiten números"));
    }

    // An all-digit string that overflows is simply way out of range
    let value: u64 = age
        .parse()
        .map_err(|_| ValidationError::new("Debes ser mayor de 18 años"))?;

    if !(18..=120).contains(&value) {
        return Err(ValidationError::new("Debes ser mayor de 18 años"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_bounds_are_inclusive() {
        assert!(validate_age("18").is_ok());
        assert!(validate_age("25").is_ok());
        assert!(validate_age("120").is_ok());

        let err = validate_age("17").unwrap_err();
        assert_eq!(err.message, "Debes ser mayor de 18 años");

        let err = validate_age("121").unwrap_err();
        assert_eq!(err.message, "Debes ser mayor de 18 años");
    }

    #[test]
    fn test_non_digits_fail_before_range() {
        let err = validate_age("12a").unwrap_err();
        assert_eq!(err.message, "Solo se permiten números");

        let err = validate_age("").unwrap_err();
        assert_eq!(err.message, "Solo se permiten números");

        let err = validate_age("-5").unwrap_err();
        assert_eq!(err.message, "Solo se permiten números");
    }

    #[test]
    fn test_overflowing_digit_string_is_out_of_range() {
        let err = validate_age("99999999999999999999").unwrap_err();
        assert_eq!(err.message, "Debes ser mayor de 18 años");
    }
}
