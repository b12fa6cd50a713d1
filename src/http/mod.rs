//! HTTP server mode.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (axum setup, middleware, graceful shutdown)
//!     → request.rs (request ID, normalize into FunctionRequest)
//!     → dispatch (pure routing)
//!     → response.rs (FunctionResponse → axum response)
//!     → Send to client
//! ```
//!
//! # Design Decisions
//! - One catch-all handler; the dispatcher owns path matching
//! - Router and state are constructed explicitly at startup, no globals
//! - Concurrency is delegated to tokio/axum, bounded by a limit layer

pub mod request;
pub mod response;
pub mod server;

pub use request::{RequestIdLayer, X_REQUEST_ID};
pub use server::HttpServer;
