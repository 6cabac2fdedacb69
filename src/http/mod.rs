//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! inbound request
//!     → server.rs (router, trace and timeout layers)
//!     → handler.rs (origin gate, table selection, upstream call)
//!     → response.rs (envelope, CORS headers)
//!     → send to client
//! ```

pub mod handler;
pub mod response;
pub mod server;

pub use server::{AppState, HttpServer};
