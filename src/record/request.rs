//! The canonical request record.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// HTTP verbs the adapter distinguishes.
///
/// Normalization never fails: anything outside this set degrades to the
/// documented default `GET`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
    Options,
}

impl Method {
    /// Parse a method name. Unknown names normalize to `GET`.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_uppercase().as_str() {
            "POST" => Method::Post,
            "PUT" => Method::Put,
            "DELETE" => Method::Delete,
            "PATCH" => Method::Patch,
            "HEAD" => Method::Head,
            "OPTIONS" => Method::Options,
            _ => Method::Get,
        }
    }

    /// Canonical uppercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Patch => "PATCH",
            Method::Head => "HEAD",
            Method::Options => "OPTIONS",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transport-independent request record handed to the dispatcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FunctionRequest {
    /// Request method; `GET` when absent.
    pub method: Method,
    /// Request path, always starting with `/`.
    pub path: String,
    /// Decoded query parameters. Insertion order is irrelevant.
    pub query: HashMap<String, String>,
    /// Header names and values as received from the transport.
    pub headers: HashMap<String, String>,
    /// Raw body text, possibly empty.
    pub body: String,
}

impl Default for FunctionRequest {
    fn default() -> Self {
        Self {
            method: Method::Get,
            path: "/".to_string(),
            query: HashMap::new(),
            headers: HashMap::new(),
            body: String::new(),
        }
    }
}

impl FunctionRequest {
    /// Parsed JSON object form of the body.
    ///
    /// Invariant: always a valid map, possibly empty — a parse failure is
    /// converted here, never surfaced to the caller.
    pub fn body_data(&self) -> Map<String, Value> {
        parse_body(&self.body).unwrap_or_default()
    }
}

/// Why a request body did not yield a JSON object.
#[derive(Debug, Error)]
pub enum BodyParseError {
    #[error("body is not valid JSON: {0}")]
    Invalid(#[from] serde_json::Error),
    #[error("body is valid JSON but not an object")]
    NotAnObject,
}

/// Typed body-parse outcome. Only a JSON object counts as parsed; the
/// accessor on [`FunctionRequest`] converts failures to an empty map.
pub fn parse_body(body: &str) -> Result<Map<String, Value>, BodyParseError> {
    if body.is_empty() {
        return Ok(Map::new());
    }
    match serde_json::from_str::<Value>(body)? {
        Value::Object(map) => Ok(map),
        _ => Err(BodyParseError::NotAnObject),
    }
}

/// Normalize a path so it always begins with `/`.
pub fn normalize_path(path: &str) -> String {
    if path.is_empty() {
        "/".to_string()
    } else if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}
