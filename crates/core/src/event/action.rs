use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Diagnostic action that makes the items handler fail the invocation on
/// purpose, so the runtime's retry and dead-letter handling can be exercised.
///
/// It is deliberately not an [`Action`] variant.
pub const TEST_FAILURE_ACTION: &str = "test_failure";

/// An action the items handler can dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Create,
    Get,
    List,
    Update,
    Delete,
}

impl Action {
    /// Every dispatchable action, in schema order.
    pub const ALL: [Action; 5] = [
        Action::Create,
        Action::Get,
        Action::List,
        Action::Update,
        Action::Delete,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Action::Create => "create",
            Action::Get => "get",
            Action::List => "list",
            Action::Update => "update",
            Action::Delete => "delete",
        }
    }

    /// Returns true if the action addresses a single entry by `data.id`.
    pub fn requires_id(self) -> bool {
        matches!(self, Action::Get | Action::Update | Action::Delete)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The action string did not name a dispatchable action.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown action: {0}")]
pub struct UnknownAction(pub String);

impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| UnknownAction(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_actions() {
        for action in Action::ALL {
            assert_eq!(action.as_str().parse::<Action>(), Ok(action));
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("Create".parse::<Action>().is_err());
    }

    #[test]
    fn test_test_failure_is_not_an_action() {
        let err = TEST_FAILURE_ACTION.parse::<Action>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown action: test_failure");
    }

    #[test]
    fn test_requires_id() {
        assert!(!Action::Create.requires_id());
        assert!(!Action::List.requires_id());
        assert!(Action::Get.requires_id());
        assert!(Action::Update.requires_id());
        assert!(Action::Delete.requires_id());
    }
}
