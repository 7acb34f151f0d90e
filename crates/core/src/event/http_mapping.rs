//! Pure functions for mapping error kinds to HTTP-style status codes.

/// The failure classes a handler can report to its caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A caller-supplied value broke a business rule.
    InvalidArgument,
    /// The event did not match the expected shape.
    SchemaInvalid,
    /// The addressed entry does not exist.
    NotFound,
    /// Anything else. Details stay in the logs.
    Internal,
}

/// Maps an [`ErrorKind`] to a status code.
///
/// - `InvalidArgument` -> 400 (Bad Request)
/// - `SchemaInvalid` -> 400 (Bad Request)
/// - `NotFound` -> 404 (Not Found)
/// - `Internal` -> 500 (Internal Server Error)
///
/// # Examples
///
/// ```
/// use bball_core::event::{error_kind_to_status_code, ErrorKind};
///
/// assert_eq!(error_kind_to_status_code(ErrorKind::NotFound), 404);
/// ```
pub fn error_kind_to_status_code(kind: ErrorKind) -> u16 {
    match kind {
        ErrorKind::InvalidArgument => 400,
        ErrorKind::SchemaInvalid => 400,
        ErrorKind::NotFound => 404,
        ErrorKind::Internal => 500,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_maps_to_400() {
        assert_eq!(error_kind_to_status_code(ErrorKind::InvalidArgument), 400);
    }

    #[test]
    fn test_schema_invalid_maps_to_400() {
        assert_eq!(error_kind_to_status_code(ErrorKind::SchemaInvalid), 400);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        assert_eq!(error_kind_to_status_code(ErrorKind::NotFound), 404);
    }

    #[test]
    fn test_internal_maps_to_500() {
        assert_eq!(error_kind_to_status_code(ErrorKind::Internal), 500);
    }
}
