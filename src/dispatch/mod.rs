//! Dispatch subsystem.
//!
//! # Data Flow
//! ```text
//! FunctionRequest (method, path, query, headers, body)
//!     → routes.rs (exact / prefix path matching)
//!     → handler.rs (canned payload for the matched route)
//!     → FunctionResponse
//!
//! Route Compilation (at startup):
//!     FunctionConfig (service name, route prefix)
//!     → RouteTable (precomputed paths, immutable)
//! ```
//!
//! # Design Decisions
//! - Dispatch is a pure function: no I/O, no mutation, no retained state
//! - Exact and prefix string matching only, evaluated in a fixed order
//! - First match wins; no match is a well-formed 404, not an error

pub mod handler;
pub mod routes;

pub use handler::dispatch;
pub use routes::RouteTable;
