//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize, or built-in defaults)
//!     → loader.rs (environment overlay: AIRTABLE_API_KEY, AIRTABLE_BASE_ID)
//!     → validation.rs (semantic checks, all errors collected)
//!     → ProxyConfig (validated, immutable for the process lifetime)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no hot reload
//! - All fields have defaults so a deployment can run on env vars alone
//! - Credentials are required and checked at startup, not at request time

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError, ENV_API_KEY, ENV_BASE_ID};
pub use schema::{CorsConfig, ListenerConfig, ObservabilityConfig, ProxyConfig, UpstreamConfig};
pub use validation::{validate_config, ValidationError};
