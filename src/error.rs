//! Error taxonomy for the forwarding flow.

use axum::http::StatusCode;
use thiserror::Error;

/// Everything that can go wrong while handling a forwarded request.
///
/// `OriginRejected` is raised before any upstream call is made; every
/// other variant is terminal for the invocation and collapses to the
/// same client-visible shape.
#[derive(Debug, Error)]
pub enum ProxyError {
    /// Requesting origin absent or not on the allow-list.
    #[error("Access denied")]
    OriginRejected,

    /// Airtable answered with a non-success status.
    #[error("Airtable API error. Status: {0}")]
    UpstreamStatus(u16),

    /// The outbound call did not complete within the configured timeout.
    #[error("Airtable request timed out after {0}s")]
    Timeout(u64),

    /// The outbound call failed below the HTTP layer (DNS, connect, TLS).
    #[error("Airtable request failed: {0}")]
    Network(reqwest::Error),

    /// Airtable returned a body that could not be parsed as JSON.
    #[error("Airtable response was not valid JSON: {0}")]
    Parse(reqwest::Error),
}

impl ProxyError {
    /// Client-visible status code. Origin rejection is the only non-500.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ProxyError::OriginRejected => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
