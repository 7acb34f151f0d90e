use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use super::http_mapping::{error_kind_to_status_code, ErrorKind};

/// Message returned for every unexpected failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Message returned when the addressed entry does not exist.
pub const NOT_FOUND_MESSAGE: &str = "Entry not found";

/// The envelope returned for every invocation.
///
/// `body` is a JSON document encoded as a string, holding `data`, `message`
/// or `error`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl Response {
    /// Builds a response from a status code and a JSON body.
    pub fn new(status_code: u16, body: &Value) -> Self {
        Self {
            status_code,
            body: body.to_string(),
        }
    }

    /// A 200 response with an optional message and optional data.
    pub fn ok(message: Option<&str>, data: Option<Value>) -> Self {
        let mut body = Map::new();
        if let Some(message) = message {
            body.insert("message".to_string(), Value::String(message.to_string()));
        }
        if let Some(data) = data {
            body.insert("data".to_string(), data);
        }
        Self::new(200, &Value::Object(body))
    }

    /// An error response for the given kind.
    ///
    /// `Internal` always carries the generic message so that no detail leaks.
    pub fn error(kind: ErrorKind, message: impl Into<String>) -> Self {
        let message = match kind {
            ErrorKind::Internal => INTERNAL_ERROR_MESSAGE.to_string(),
            _ => message.into(),
        };
        Self::new(error_kind_to_status_code(kind), &json!({ "error": message }))
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::error(ErrorKind::InvalidArgument, message)
    }

    pub fn not_found() -> Self {
        Self::error(ErrorKind::NotFound, NOT_FOUND_MESSAGE)
    }

    pub fn internal() -> Self {
        Self::error(ErrorKind::Internal, INTERNAL_ERROR_MESSAGE)
    }

    /// Decodes the body back into JSON.
    pub fn body_json(&self) -> serde_json::Result<Value> {
        serde_json::from_str(&self.body)
    }

    pub fn is_success(&self) -> bool {
        self.status_code == 200
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_with_message_and_data() {
        let response = Response::ok(Some("Entry created successfully"), Some(json!({"id": 1})));

        assert_eq!(response.status_code, 200);
        assert_eq!(
            response.body_json().unwrap(),
            json!({"message": "Entry created successfully", "data": {"id": 1}})
        );
    }

    #[test]
    fn test_ok_with_data_only() {
        let response = Response::ok(None, Some(json!([])));
        let body = response.body_json().unwrap();

        assert!(body.get("message").is_none());
        assert_eq!(body["data"], json!([]));
    }

    #[test]
    fn test_internal_never_leaks_detail() {
        let response = Response::error(ErrorKind::Internal, "connection refused on 10.0.0.4");

        assert_eq!(response.status_code, 500);
        assert_eq!(
            response.body_json().unwrap(),
            json!({"error": "Internal server error"})
        );
    }

    #[test]
    fn test_not_found() {
        let response = Response::not_found();
        assert_eq!(response.status_code, 404);
        assert_eq!(response.body_json().unwrap()["error"], "Entry not found");
    }

    #[test]
    fn test_envelope_uses_status_code_key() {
        let value = serde_json::to_value(Response::bad_request("nope")).unwrap();

        assert_eq!(value["statusCode"], 400);
        assert!(value["body"].is_string());
    }
}
