//! Error types for rule configuration.
//!
//! Ticking an item and selecting a rule never fail. Errors only occur
//! when building or loading a rule table, and are represented by the
//! `RuleError` enum.

use thiserror::Error;

/// Format an optional bracket bound, using infinity for open ends.
fn format_bound(bound: &Option<i64>, open: &str) -> String {
    match bound {
        Some(value) => value.to_string(),
        None => String::from(open),
    }
}

/// Errors that can occur while configuring update rules.
///
/// # Examples
///
/// ```rust
/// use gilded_rose::RuleError;
///
/// let err = RuleError::UnknownCategory("Elixir".to_string());
/// println!("{}", err); // "Unknown item category: Elixir"
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RuleError {
    /// A name did not match any routed category.
    ///
    /// Only strict parsing reports this; rule selection falls back
    /// to ordinary decay instead.
    #[error("Unknown item category: {0}")]
    UnknownCategory(String),

    /// A rule was registered for a name that already has one.
    #[error("Rule already registered for: {0}")]
    DuplicateCategory(String),

    /// A threshold bracket whose lower bound exceeds its upper bound.
    #[error(
        "Invalid bracket: [{}, {}]",
        format_bound(.lower, "-inf"),
        format_bound(.upper, "+inf")
    )]
    InvalidBracket {
        lower: Option<i64>,
        upper: Option<i64>,
    },

    /// An improving rule was given no brackets at all.
    #[error("Threshold table has no brackets")]
    EmptyThresholdTable,

    /// Rule configuration could not be parsed.
    #[error("Invalid rule configuration: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for RuleError {
    fn from(err: serde_json::Error) -> Self {
        RuleError::InvalidConfig(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RuleError::DuplicateCategory("Aged Brie".to_string());
        assert!(err.to_string().contains("Aged Brie"));
    }

    #[test]
    fn test_invalid_bracket_display() {
        let err = RuleError::InvalidBracket {
            lower: Some(5),
            upper: None,
        };
        assert_eq!(err.to_string(), "Invalid bracket: [5, +inf]");

        let err = RuleError::InvalidBracket {
            lower: Some(3),
            upper: Some(-2),
        };
        assert_eq!(err.to_string(), "Invalid bracket: [3, -2]");
    }

    #[test]
    fn test_from_json_error() {
        let err: RuleError = serde_json::from_str::<u8>("not json").unwrap_err().into();
        assert!(matches!(err, RuleError::InvalidConfig(_)));
    }
}
