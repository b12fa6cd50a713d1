//! edgefn — a dual-mode HTTP function adapter.
//!
//! The same pure dispatcher serves two transports:
//!
//! ```text
//!                        ┌──────────────────────────────────────────────┐
//!                        │                   EDGEFN                      │
//!                        │                                               │
//!   HTTP request         │  ┌─────────┐   ┌───────────┐   ┌──────────┐  │
//!   ─────────────────────┼─▶│  http   │──▶│  record   │──▶│ dispatch │  │
//!                        │  │ server  │   │ normalize │   │  (pure)  │  │
//!                        │  └─────────┘   └───────────┘   └────┬─────┘  │
//!                        │                                     │        │
//!   stdin JSON envelope  │  ┌─────────┐   ┌───────────┐        │        │
//!   ─────────────────────┼─▶│ invoke  │──▶│  record   │────────┤        │
//!   (one shot)           │  │ runner  │   │ normalize │        │        │
//!                        │  └─────────┘   └───────────┘        ▼        │
//!                        │                              ┌────────────┐  │
//!   response ◀───────────┼──────────────────────────────│  response  │  │
//!   (wire / stdout)      │                              │   record   │  │
//!                        │                              └────────────┘  │
//!                        │                                               │
//!                        │  Cross-cutting: config, observability         │
//!                        └──────────────────────────────────────────────┘
//! ```
//!
//! Server mode is a long-lived axum listener; one-shot mode reads a single
//! JSON request envelope from stdin and writes a single JSON response
//! document to stdout, the contract used by hosting platforms that spawn
//! the function as a subprocess per request.

// Core pipeline
pub mod dispatch;
pub mod record;

// Entry modes
pub mod http;
pub mod invoke;

// Cross-cutting concerns
pub mod config;
pub mod observability;

pub use config::FunctionConfig;
pub use dispatch::{dispatch, RouteTable};
pub use http::HttpServer;
pub use record::{FunctionRequest, FunctionResponse};
