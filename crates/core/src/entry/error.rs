use thiserror::Error;

/// Business-rule violations detected before any store access.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name cannot be empty")]
    EmptyName,
    #[error("Name cannot exceed 255 characters")]
    NameTooLong,
    #[error("Value must be non-negative")]
    NegativeValue,
    #[error("Entry ID must be positive")]
    NonPositiveId,
    #[error("Entry ID cannot be empty")]
    BlankId,
    #[error("Limit must be between 1 and 1000")]
    LimitOutOfRange,
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        assert_eq!(ValidationError::EmptyName.to_string(), "Name cannot be empty");
        assert_eq!(
            ValidationError::NegativeValue.to_string(),
            "Value must be non-negative"
        );
        assert_eq!(
            ValidationError::LimitOutOfRange.to_string(),
            "Limit must be between 1 and 1000"
        );
    }

    #[test]
    fn test_missing_field_display() {
        assert_eq!(
            ValidationError::MissingField("id").to_string(),
            "Missing required field: id"
        );
    }
}
