//! One-shot invocation mode.
//!
//! # Data Flow
//! ```text
//! stdin (entire input, one JSON envelope)
//!     → normalize_envelope (defaults for anything missing, never fails)
//!     → dispatch (same pure function as server mode)
//!     → one JSON document on stdout: {"status", "headers", "body"}
//! ```
//!
//! # Design Decisions
//! - stdout carries nothing but the response document; logs go to stderr
//! - Any failure while producing the document renders the 500 document
//!   instead, and the process exits normally
//! - The hosting platform owns process lifecycle and timeouts; there is
//!   no retry or suspension here

use std::collections::HashMap;
use std::io::{self, Read, Write};

use serde_json::{json, Map, Value};
use thiserror::Error;

use crate::dispatch::{dispatch, RouteTable};
use crate::record::{normalize_path, FunctionRequest, Method};

/// Transport-level failures of the one-shot runner.
///
/// These are the only conditions that escape: everything recoverable is
/// normalized into a response document first.
#[derive(Debug, Error)]
pub enum InvokeError {
    #[error("failed to read request from stdin: {0}")]
    Input(#[source] io::Error),
    #[error("failed to write response to stdout: {0}")]
    Output(#[source] io::Error),
}

/// Handle exactly one invocation on the process's stdin/stdout.
pub fn run(routes: &RouteTable) -> Result<(), InvokeError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with(stdin.lock(), stdout.lock(), routes)
}

/// Same as [`run`], over arbitrary reader/writer pairs.
pub fn run_with<R: Read, W: Write>(
    mut input: R,
    mut output: W,
    routes: &RouteTable,
) -> Result<(), InvokeError> {
    let mut raw = Vec::new();
    input.read_to_end(&mut raw).map_err(InvokeError::Input)?;
    let text = String::from_utf8_lossy(&raw);

    let document = render(&text, routes);
    writeln!(output, "{document}").map_err(InvokeError::Output)?;
    output.flush().map_err(InvokeError::Output)
}

/// Produce the response document. A failure anywhere in the pipeline is
/// converted here into the 500 document; this function is total.
fn render(input: &str, routes: &RouteTable) -> String {
    match try_render(input, routes) {
        Ok(document) => document,
        Err(err) => {
            tracing::error!(error = %err, "Invocation failed, answering 500");
            error_document(&err.to_string())
        }
    }
}

fn try_render(input: &str, routes: &RouteTable) -> Result<String, serde_json::Error> {
    let request = normalize_envelope(input);
    let response = dispatch(&request, routes);
    serde_json::to_string(&response)
}

/// The 500 document required by the invocation protocol. Built from
/// literals, so rendering it cannot itself fail.
fn error_document(message: &str) -> String {
    json!({
        "status": 500,
        "headers": { "Content-Type": "application/json" },
        "body": json!({ "error": message }).to_string(),
    })
    .to_string()
}

/// Normalize the stdin JSON envelope into a request record.
///
/// Absent, empty, or malformed input degrades to all-default fields —
/// this never fails. Fields: `method`, `path`, `query`, `headers`, `body`.
pub fn normalize_envelope(input: &str) -> FunctionRequest {
    let envelope = match serde_json::from_str::<Value>(input) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    };

    FunctionRequest {
        method: envelope
            .get("method")
            .and_then(Value::as_str)
            .map(Method::from_name)
            .unwrap_or_default(),
        path: normalize_path(envelope.get("path").and_then(Value::as_str).unwrap_or("/")),
        query: string_map(envelope.get("query")),
        headers: string_map(envelope.get("headers")),
        body: envelope
            .get("body")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
    }
}

/// Extract a string→string mapping; non-object values and non-string
/// entries are dropped.
fn string_map(value: Option<&Value>) -> HashMap<String, String> {
    value
        .and_then(Value::as_object)
        .map(|map| {
            map.iter()
                .filter_map(|(key, value)| value.as_str().map(|s| (key.clone(), s.to_string())))
                .collect()
        })
        .unwrap_or_default()
}
