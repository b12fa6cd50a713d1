//! The canonical response record.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Header name carried by every response record.
pub const CONTENT_TYPE: &str = "Content-Type";

/// Every canned route answers with JSON.
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Transport-independent response record produced by the dispatcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers; always includes `Content-Type`.
    pub headers: HashMap<String, String>,
    /// Response body. JSON-encoded text when the content type is
    /// `application/json`.
    pub body: String,
}

impl FunctionResponse {
    /// Build a JSON response with the given status.
    ///
    /// `Value::to_string` is infallible, so this constructor is total.
    pub fn json(status: u16, payload: &Value) -> Self {
        let mut headers = HashMap::new();
        headers.insert(CONTENT_TYPE.to_string(), CONTENT_TYPE_JSON.to_string());
        Self {
            status,
            headers,
            body: payload.to_string(),
        }
    }

    /// Add or replace a header.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name.to_string(), value.to_string());
        self
    }

    /// The 500 response used when producing a response fails.
    pub fn internal_error(message: &str) -> Self {
        Self::json(500, &json!({ "error": message }))
    }
}
