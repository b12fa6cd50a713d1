//! Response-side glue for server mode.
//!
//! # Responsibilities
//! - Convert the canonical response record into an axum response
//! - Map invalid record data to safe fallbacks instead of panicking

use axum::body::Body;
use axum::http::{header::HeaderName, header::HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::record::FunctionResponse;

/// Convert a response record into the framework response.
///
/// Header entries that are not representable on the wire are skipped with
/// a warning; the dispatcher only emits well-formed ones.
pub fn into_http_response(record: FunctionResponse) -> Response {
    let status =
        StatusCode::from_u16(record.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let mut builder = Response::builder().status(status);
    for (name, value) in &record.headers {
        match (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            (Ok(name), Ok(value)) => builder = builder.header(name, value),
            _ => tracing::warn!(header = %name, "Skipping unrepresentable response header"),
        }
    }

    builder
        .body(Body::from(record.body))
        .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn record_fields_map_onto_the_response() {
        let record = FunctionResponse::json(201, &json!({ "ok": true }));
        let response = into_http_response(record);

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.headers()["content-type"], "application/json");
    }

    #[test]
    fn out_of_range_status_degrades_to_500() {
        let mut record = FunctionResponse::json(200, &json!({}));
        record.status = 17;
        assert_eq!(
            into_http_response(record).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
