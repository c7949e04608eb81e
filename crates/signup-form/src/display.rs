// File: src/display.rs
// Purpose: Derived display category consumed by the rendering layer

use serde::{Deserialize, Serialize};

use crate::config::FieldConfig;
use crate::state::FieldState;

/// Presentational verdict for one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayCategory {
    Disabled,
    Invalid,
    Valid,
    Focused,
    Default,
}

impl DisplayCategory {
    /// Derives the category from config and state.
    ///
    /// Strict precedence: disabled, then a displayed error, then success
    /// (only when the config opts in), then focus, then the resting state.
    pub fn derive(config: &FieldConfig, state: &FieldState) -> Self {
        if config.disabled {
            return DisplayCategory::Disabled;
        }
        if state.displayed_error().is_some() {
            return DisplayCategory::Invalid;
        }
        if state.is_success() && config.show_success_state {
            return DisplayCategory::Valid;
        }
        if state.focused {
            return DisplayCategory::Focused;
        }
        DisplayCategory::Default
    }
}

impl std::fmt::Display for DisplayCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DisplayCategory::Disabled => write!(f, "disabled"),
            DisplayCategory::Invalid => write!(f, "invalid"),
            DisplayCategory::Valid => write!(f, "valid"),
            DisplayCategory::Focused => write!(f, "focused"),
            DisplayCategory::Default => write!(f, "default"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use signup_validation::ValidationError;

    fn touched_with_error() -> FieldState {
        FieldState {
            value: "bad".to_string(),
            touched: true,
            error: Some(ValidationError::new("Formato de teléfono inválido")),
            ..Default::default()
        }
    }

    #[test]
    fn test_disabled_wins_over_everything() {
        let config = FieldConfig::new().with_disabled(true);
        let category = DisplayCategory::derive(&config, &touched_with_error());
        assert_eq!(category, DisplayCategory::Disabled);
    }

    #[test]
    fn test_error_wins_over_focus() {
        let mut state = touched_with_error();
        state.focused = true;
        let category = DisplayCategory::derive(&FieldConfig::default(), &state);
        assert_eq!(category, DisplayCategory::Invalid);
    }

    #[test]
    fn test_success_requires_opt_in() {
        let state = FieldState {
            value: "ok".to_string(),
            touched: true,
            ..Default::default()
        };
        let shown = DisplayCategory::derive(&FieldConfig::default(), &state);
        assert_eq!(shown, DisplayCategory::Valid);

        let muted = FieldConfig::new().with_show_success_state(false);
        assert_eq!(
            DisplayCategory::derive(&muted, &state),
            DisplayCategory::Default
        );
    }

    #[test]
    fn test_focused_and_resting_states() {
        let mut state = FieldState::default();
        assert_eq!(
            DisplayCategory::derive(&FieldConfig::default(), &state),
            DisplayCategory::Default
        );

        state.focused = true;
        assert_eq!(
            DisplayCategory::derive(&FieldConfig::default(), &state),
            DisplayCategory::Focused
        );
    }

    #[test]
    fn test_touched_valid_but_empty_is_not_success() {
        let state = FieldState {
            touched: true,
            ..Default::default()
        };
        assert_eq!(
            DisplayCategory::derive(&FieldConfig::default(), &state),
            DisplayCategory::Default
        );
    }
}
