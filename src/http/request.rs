//! Request-side glue for server mode.
//!
//! # Responsibilities
//! - Generate a unique request ID as early as possible (UUID v4)
//! - Normalize the framework request into the canonical record
//!
//! # Design Decisions
//! - Request ID is a tower layer so it covers every route uniformly
//! - Normalization is verbatim extraction; defaults only fill absences
//! - Header names arrive lowercased from the HTTP stack and are passed
//!   through as received; the dispatcher never inspects them

use std::collections::HashMap;
use std::task::{Context, Poll};

use axum::http::{header::HeaderValue, request::Parts, Request};
use tower::{Layer, Service};
use uuid::Uuid;

use crate::record::{normalize_path, FunctionRequest, Method};

/// Header carrying the per-request correlation ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Inserts an `x-request-id` header when the client did not send one.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestIdLayer;

impl<S> Layer<S> for RequestIdLayer {
    type Service = RequestIdService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RequestIdService { inner }
    }
}

#[derive(Debug, Clone)]
pub struct RequestIdService<S> {
    inner: S,
}

impl<S, B> Service<Request<B>> for RequestIdService<S>
where
    S: Service<Request<B>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<B>) -> Self::Future {
        if !req.headers().contains_key(X_REQUEST_ID) {
            if let Ok(value) = HeaderValue::from_str(&Uuid::new_v4().to_string()) {
                req.headers_mut().insert(X_REQUEST_ID, value);
            }
        }
        self.inner.call(req)
    }
}

/// Normalize an axum request (already split into parts + buffered body)
/// into the canonical record.
pub fn normalize_request(parts: &Parts, body: &[u8]) -> FunctionRequest {
    let query: HashMap<String, String> = parts
        .uri
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default();

    let headers: HashMap<String, String> = parts
        .headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();

    FunctionRequest {
        method: Method::from_name(parts.method.as_str()),
        path: normalize_path(parts.uri.path()),
        query,
        headers,
        body: String::from_utf8_lossy(body).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    fn parts_for(uri: &str, method: &str) -> Parts {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("X-Custom", "abc")
            .body(Body::empty())
            .expect("valid test request");
        request.into_parts().0
    }

    #[test]
    fn extracts_method_path_and_query() {
        let parts = parts_for("http://host/users?limit=2&page=1", "POST");
        let record = normalize_request(&parts, b"{}");

        assert_eq!(record.method, Method::Post);
        assert_eq!(record.path, "/users");
        assert_eq!(record.query["limit"], "2");
        assert_eq!(record.query["page"], "1");
        assert_eq!(record.body, "{}");
    }

    #[test]
    fn header_names_arrive_lowercased_from_the_stack() {
        let parts = parts_for("http://host/", "GET");
        let record = normalize_request(&parts, b"");
        assert_eq!(record.headers["x-custom"], "abc");
    }

    #[test]
    fn unknown_methods_normalize_to_get() {
        let parts = parts_for("http://host/", "TRACE");
        let record = normalize_request(&parts, b"");
        assert_eq!(record.method, Method::Get);
    }
}
