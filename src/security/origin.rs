//! Origin allow-list enforcement.
//!
//! # Design Decisions
//! - Prefix matching, so an allowed site matches with or without a path
//! - Fail closed: a request with no origin and no referer is denied
//! - No upstream call is ever made for a rejected request

use axum::http::HeaderMap;

/// Prefix allow-list for browser origins.
#[derive(Debug, Clone)]
pub struct OriginPolicy {
    allowed: Vec<String>,
}

impl OriginPolicy {
    /// Build a policy from configured origin prefixes.
    pub fn new(allowed: Vec<String>) -> Self {
        Self { allowed }
    }

    /// True iff `origin` starts with one of the allowed prefixes.
    ///
    /// The empty string never matches, so requests that carry neither an
    /// `origin` nor a `referer` header are denied.
    pub fn is_allowed(&self, origin: &str) -> bool {
        !origin.is_empty() && self.allowed.iter().any(|prefix| origin.starts_with(prefix))
    }
}

/// The caller's origin: the `origin` header, falling back to `referer`.
///
/// Headers that are absent or not valid UTF-8 yield the empty string,
/// which the policy rejects.
pub fn request_origin(headers: &HeaderMap) -> &str {
    headers
        .get("origin")
        .or_else(|| headers.get("referer"))
        .and_then(|value| value.to_str().ok())
        .unwrap_or("")
}
