//! Integration tests for one-shot mode: the stdin → stdout protocol.

use edgefn::config::FunctionConfig;
use edgefn::dispatch::RouteTable;
use edgefn::invoke;
use serde_json::{json, Value};

fn routes() -> RouteTable {
    RouteTable::from_config(&FunctionConfig::default())
}

/// Run one invocation over in-memory buffers and parse the output document.
fn invoke_once(input: &str) -> Value {
    let mut output = Vec::new();
    invoke::run_with(input.as_bytes(), &mut output, &routes()).unwrap();

    let text = String::from_utf8(output).unwrap();
    assert!(text.ends_with('\n'), "document is newline-terminated");
    assert_eq!(text.trim_end().lines().count(), 1, "exactly one document");
    serde_json::from_str(text.trim_end()).unwrap()
}

fn body_of(document: &Value) -> Value {
    serde_json::from_str(document["body"].as_str().expect("body is a string"))
        .expect("body is JSON text")
}

#[test]
fn empty_stdin_defaults_to_get_root() {
    let document = invoke_once("");
    assert_eq!(document["status"], 200);
    assert_eq!(document["headers"]["Content-Type"], "application/json");

    let body = body_of(&document);
    assert_eq!(body["message"], "Hello from edgefn!");
    assert_eq!(body["path"], "/");
    assert_eq!(body["method"], "GET");
}

#[test]
fn malformed_stdin_behaves_like_empty_stdin() {
    let document = invoke_once("{not json");
    assert_eq!(document["status"], 200);
    assert_eq!(body_of(&document)["path"], "/");
}

#[test]
fn full_envelope_drives_the_users_route() {
    let envelope = json!({
        "method": "POST",
        "path": "/users",
        "headers": { "Content-Type": "application/json" },
        "body": r#"{"name":"Zoe"}"#,
    });

    let document = invoke_once(&envelope.to_string());
    assert_eq!(document["status"], 201);

    let body = body_of(&document);
    assert_eq!(body["message"], "User created");
    assert_eq!(body["data"], json!({ "name": "Zoe" }));
}

#[test]
fn user_detail_id_is_a_string() {
    let envelope = json!({ "path": "/users/42" });
    let document = invoke_once(&envelope.to_string());
    assert_eq!(document["status"], 200);
    assert_eq!(body_of(&document)["id"], "42");
}

#[test]
fn unmatched_path_produces_a_404_document() {
    let envelope = json!({ "path": "/nope" });
    let document = invoke_once(&envelope.to_string());
    assert_eq!(document["status"], 404);
    assert_eq!(body_of(&document)["error"], "Not found");
}

#[test]
fn health_matches_the_canned_object() {
    let envelope = json!({ "path": "/health" });
    let document = invoke_once(&envelope.to_string());
    assert_eq!(document["status"], 200);
    assert_eq!(
        body_of(&document),
        json!({ "status": "healthy", "service": "edgefn" })
    );
}

#[test]
fn write_failures_surface_as_invoke_errors() {
    struct Broken;

    impl std::io::Write for Broken {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("pipe closed"))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let err = invoke::run_with("".as_bytes(), Broken, &routes())
        .expect_err("broken pipe must not succeed");
    assert!(matches!(err, invoke::InvokeError::Output(_)));
}
