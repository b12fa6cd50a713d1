//! The pure dispatcher: request record in, response record out.

use serde_json::{json, Value};

use crate::dispatch::routes::RouteTable;
use crate::record::{FunctionRequest, FunctionResponse, Method};

/// Map a request record to a response record.
///
/// Matching is evaluated in a fixed order, first match wins:
/// root aliases, users collection, user detail prefix, health, 404.
/// No I/O and no state — both entry modes call this same function.
pub fn dispatch(request: &FunctionRequest, routes: &RouteTable) -> FunctionResponse {
    let path = request.path.as_str();

    if routes.is_root_alias(path) {
        return FunctionResponse::json(
            200,
            &json!({
                "message": routes.greeting(),
                "path": path,
                "method": request.method.as_str(),
            }),
        );
    }

    if path == routes.users_path() {
        return users_collection(request);
    }

    if let Some(id) = routes.user_detail_id(path) {
        return FunctionResponse::json(
            200,
            &json!({
                "id": id,
                "name": format!("User {id}"),
                "path": path,
            }),
        );
    }

    if path == routes.health_path() {
        return FunctionResponse::json(
            200,
            &json!({
                "status": "healthy",
                "service": routes.service_name(),
            }),
        );
    }

    FunctionResponse::json(
        404,
        &json!({
            "error": "Not found",
            "path": path,
        }),
    )
}

fn users_collection(request: &FunctionRequest) -> FunctionResponse {
    match request.method {
        Method::Get => FunctionResponse::json(
            200,
            &json!({
                "users": [
                    { "id": 1, "name": "Alice" },
                    { "id": 2, "name": "Bob" },
                ],
            }),
        ),
        Method::Post => FunctionResponse::json(
            201,
            &json!({
                "message": "User created",
                "data": Value::Object(request.body_data()),
            }),
        ),
        // The source system left other methods undefined; answer 405
        // instead of falling through to 404.
        other => FunctionResponse::json(
            405,
            &json!({
                "error": "Method not allowed",
                "method": other.as_str(),
            }),
        )
        .with_header("Allow", "GET, POST"),
    }
}
