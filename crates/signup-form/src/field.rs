// File: src/field.rs
// Purpose: Field identity for the signup form

use serde::{Deserialize, Serialize};

/// Identity of a signup form field. Selects which rule applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldName {
    FullName,
    Email,
    Phone,
    Age,
    Password,
    ConfirmPassword,
}

impl FieldName {
    /// Every field of the signup form, in screen order.
    pub const ALL: [FieldName; 6] = [
        FieldName::FullName,
        FieldName::Email,
        FieldName::Phone,
        FieldName::Age,
        FieldName::Password,
        FieldName::ConfirmPassword,
    ];

    /// Wire name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::FullName => "full_name",
            FieldName::Email => "email",
            FieldName::Phone => "phone",
            FieldName::Age => "age",
            FieldName::Password => "password",
            FieldName::ConfirmPassword => "confirm_password",
        }
    }
}

impl std::fmt::Display for FieldName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_covers_every_field_once() {
        assert_eq!(FieldName::ALL.len(), 6);
        for (i, field) in FieldName::ALL.iter().enumerate() {
            assert!(!FieldName::ALL[..i].contains(field));
        }
    }

    #[test]
    fn test_display_uses_wire_names() {
        assert_eq!(FieldName::FullName.to_string(), "full_name");
        assert_eq!(FieldName::ConfirmPassword.to_string(), "confirm_password");
    }
}
