use super::ValidationError;

/// Maximum number of characters allowed in an entry name.
pub const MAX_NAME_LENGTH: usize = 255;

/// Listing limit used when the caller does not provide one.
pub const DEFAULT_LIST_LIMIT: usize = 100;

/// Largest listing limit a caller may request.
pub const MAX_LIST_LIMIT: usize = 1000;

/// Validates an entry name and returns it trimmed.
///
/// The length check applies to the name as supplied, before trimming.
pub fn validate_name(name: &str) -> Result<String, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::NameTooLong);
    }
    Ok(trimmed.to_string())
}

/// Validates that an entry value is not negative.
pub fn validate_value(value: i64) -> Result<i64, ValidationError> {
    if value < 0 {
        return Err(ValidationError::NegativeValue);
    }
    Ok(value)
}

/// Validates a listing limit against `1..=MAX_LIST_LIMIT`.
pub fn validate_limit(limit: i64) -> Result<usize, ValidationError> {
    match usize::try_from(limit) {
        Ok(limit) if (1..=MAX_LIST_LIMIT).contains(&limit) => Ok(limit),
        _ => Err(ValidationError::LimitOutOfRange),
    }
}
