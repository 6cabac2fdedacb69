//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Fail fast on absent credentials instead of letting every request
//!   surface a confusing upstream 401
//! - Validate value ranges and URL/address shapes
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function over the assembled config
//! - Runs after the environment overlay, before the config is accepted

use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

use crate::config::schema::ProxyConfig;

/// A single semantic problem with the configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required setting is absent.
    #[error("missing required setting: {0}")]
    MissingField(&'static str),

    /// A setting is present but unusable.
    #[error("invalid setting {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}

/// Validate the assembled configuration, collecting every problem.
pub fn validate_config(config: &ProxyConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.upstream.api_key.is_empty() {
        errors.push(ValidationError::MissingField(
            "upstream.api_key (set AIRTABLE_API_KEY)",
        ));
    }
    if config.upstream.base_id.is_empty() {
        errors.push(ValidationError::MissingField(
            "upstream.base_id (set AIRTABLE_BASE_ID)",
        ));
    }
    if config.upstream.max_records == 0 {
        errors.push(ValidationError::Invalid {
            field: "upstream.max_records",
            reason: "must be at least 1".to_string(),
        });
    }
    if config.upstream.timeout_secs == 0 {
        errors.push(ValidationError::Invalid {
            field: "upstream.timeout_secs",
            reason: "must be at least 1".to_string(),
        });
    }
    match Url::parse(&config.upstream.api_url) {
        Ok(url) if url.cannot_be_a_base() => errors.push(ValidationError::Invalid {
            field: "upstream.api_url",
            reason: "must be an http(s) URL".to_string(),
        }),
        Ok(_) => {}
        Err(e) => errors.push(ValidationError::Invalid {
            field: "upstream.api_url",
            reason: e.to_string(),
        }),
    }

    if config.cors.allowed_origins.is_empty() {
        errors.push(ValidationError::Invalid {
            field: "cors.allowed_origins",
            reason: "at least one allowed origin prefix is required".to_string(),
        });
    }
    for origin in &config.cors.allowed_origins {
        if !origin.starts_with("http://") && !origin.starts_with("https://") {
            errors.push(ValidationError::Invalid {
                field: "cors.allowed_origins",
                reason: format!("{origin:?} must start with http:// or https://"),
            });
        }
    }

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::Invalid {
            field: "listener.bind_address",
            reason: "not a valid socket address".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
