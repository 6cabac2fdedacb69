//! Origin-gated read proxy for the Airtable REST API.
//!
//! Accepts a GET request from a browser-based client, checks the
//! caller's origin against a configured allow-list, forwards one read
//! query to Airtable with a server-held credential, and relays the
//! records back inside a `{success, records}` envelope with CORS
//! headers. The credential never reaches the caller.

pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod security;
pub mod upstream;

pub use config::ProxyConfig;
pub use error::ProxyError;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
