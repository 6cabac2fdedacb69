//! Configuration loading from disk and the process environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::ProxyConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable carrying the Airtable bearer credential.
pub const ENV_API_KEY: &str = "AIRTABLE_API_KEY";
/// Environment variable carrying the Airtable base identifier.
pub const ENV_BASE_ID: &str = "AIRTABLE_BASE_ID";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

/// Load configuration, overlay environment credentials, and validate.
///
/// With no path the built-in defaults are used, so a deployment can run
/// on environment variables alone.
pub fn load_config(path: Option<&Path>) -> Result<ProxyConfig, ConfigError> {
    let mut config = match path {
        Some(path) => toml::from_str(&fs::read_to_string(path)?)?,
        None => ProxyConfig::default(),
    };

    apply_env_overrides(&mut config, |name| std::env::var(name).ok());

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Overlay process-environment credentials onto the file configuration.
///
/// The lookup is injected so tests can exercise the overlay without
/// touching the real environment.
pub fn apply_env_overrides<F>(config: &mut ProxyConfig, get: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(key) = get(ENV_API_KEY).filter(|v| !v.is_empty()) {
        config.upstream.api_key = key;
    }
    if let Some(base_id) = get(ENV_BASE_ID).filter(|v| !v.is_empty()) {
        config.upstream.base_id = base_id;
    }
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_credentials_override_file_values() {
        let mut config: ProxyConfig = toml::from_str(
            r#"
            [upstream]
            api_key = "file-key"
            base_id = "file-base"
            "#,
        )
        .unwrap();

        apply_env_overrides(&mut config, |name| match name {
            ENV_API_KEY => Some("env-key".to_string()),
            _ => None,
        });

        assert_eq!(config.upstream.api_key, "env-key");
        assert_eq!(config.upstream.base_id, "file-base");
    }

    #[test]
    fn empty_env_values_are_ignored() {
        let mut config = ProxyConfig::default();
        config.upstream.api_key = "file-key".to_string();

        apply_env_overrides(&mut config, |_| Some(String::new()));

        assert_eq!(config.upstream.api_key, "file-key");
    }

    #[test]
    fn minimal_file_parses_with_defaults() {
        let config: ProxyConfig = toml::from_str(
            r#"
            [upstream]
            max_records = 300

            [cors]
            allowed_origins = ["https://example.com"]
            "#,
        )
        .unwrap();

        assert_eq!(config.upstream.max_records, 300);
        assert_eq!(config.upstream.default_table, "Case 1");
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
    }
}
