//! Validation error types

use std::fmt;

/// Validation error for incoming catalog data
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Required field was not supplied
    Missing { field: &'static str },

    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Field exceeds maximum length
    TooLong { field: &'static str, max: usize },

    /// Value is present but unusable (e.g. negative price)
    Invalid { field: &'static str, reason: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "{} is required", field),
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
            Self::Invalid { field, reason } => write!(f, "{}: {}", field, reason),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Unwrap an optional request field, reporting it as missing.
pub(crate) fn required<T>(value: Option<T>, field: &'static str) -> Result<T, ValidationError> {
    value.ok_or(ValidationError::Missing { field })
}

/// Bound a free-text field, keeping it exactly as sent.
///
/// Whitespace-only text counts as empty.
pub(crate) fn non_empty_text(
    value: &str,
    field: &'static str,
    max: usize,
) -> Result<String, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }

    Ok(value.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::TooLong {
            field: "title",
            max: 256,
        };
        assert_eq!(
            err.to_string(),
            "title exceeds maximum length of 256 characters"
        );
        assert_eq!(
            ValidationError::Missing { field: "categoryId" }.to_string(),
            "categoryId is required"
        );
    }

    #[test]
    fn surrounding_whitespace_is_kept() {
        assert_eq!(non_empty_text("  Books ", "name", 10).unwrap(), "  Books ");
    }

    #[test]
    fn whitespace_only_is_empty() {
        let err = non_empty_text("   ", "name", 10).unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "name" });
    }

    #[test]
    fn length_counts_chars_not_bytes() {
        // 4 chars, 8 bytes
        assert!(non_empty_text("ßßßß", "name", 4).is_ok());
        assert!(non_empty_text("ßßßßß", "name", 4).is_err());
    }
}
