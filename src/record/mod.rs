//! Canonical request/response records.
//!
//! # Data Flow
//! ```text
//! Transport-specific input (axum request, or stdin JSON envelope)
//!     → normalization (http/request.rs or invoke)
//!     → FunctionRequest (transport-independent)
//!     → dispatch
//!     → FunctionResponse (transport-independent)
//!     → serialization back to the transport
//! ```
//!
//! # Design Decisions
//! - Records are plain serde data, no transport types leak through
//! - Constructed fresh per invocation, consumed synchronously, discarded
//! - Body JSON parsing is a typed outcome; failure converts to an empty map

pub mod request;
pub mod response;

pub use request::{normalize_path, parse_body, BodyParseError, FunctionRequest, Method};
pub use response::{FunctionResponse, CONTENT_TYPE, CONTENT_TYPE_JSON};
