//! Airtable REST API client.
//!
//! # Responsibilities
//! - Build record-list URLs (path-encoded table name, record cap)
//! - Attach the bearer credential to outbound requests
//! - Map upstream failures onto the proxy error taxonomy
//!
//! # Design Decisions
//! - One reqwest client per process; connection pooling comes with it
//! - Explicit request timeout; timeouts are a distinct error kind
//! - A non-success upstream status is an error, never forwarded verbatim

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use url::Url;

use crate::config::{UpstreamConfig, ValidationError};
use crate::error::ProxyError;

/// Read-only client for the Airtable REST API.
///
/// Holds the bearer credential server-side. The credential leaves the
/// process only in the `Authorization` header of outbound requests.
#[derive(Debug, Clone)]
pub struct AirtableClient {
    http: Client,
    api_url: Url,
    base_id: String,
    api_key: String,
    max_records: u32,
    timeout_secs: u64,
}

impl AirtableClient {
    /// Build a client from upstream settings.
    pub fn new(config: &UpstreamConfig) -> Result<Self, ValidationError> {
        let api_url = Url::parse(&config.api_url).map_err(|e| ValidationError::Invalid {
            field: "upstream.api_url",
            reason: e.to_string(),
        })?;
        if api_url.cannot_be_a_base() {
            return Err(ValidationError::Invalid {
                field: "upstream.api_url",
                reason: "must be an http(s) URL".to_string(),
            });
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ValidationError::Invalid {
                field: "upstream",
                reason: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            http,
            api_url,
            base_id: config.base_id.clone(),
            api_key: config.api_key.clone(),
            max_records: config.max_records,
            timeout_secs: config.timeout_secs,
        })
    }

    /// URL listing records of `table`, capped at the configured count.
    ///
    /// The table name is percent-encoded as a single path segment, so
    /// `Case 1` becomes `Case%201`.
    fn record_list_url(&self, table: &str) -> Url {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .expect("api_url is a base URL")
            .extend(["v0", self.base_id.as_str(), table]);
        url.query_pairs_mut()
            .append_pair("maxRecords", &self.max_records.to_string());
        url
    }

    /// Fetch records from `table`.
    ///
    /// Returns the upstream `records` field untouched, or `None` when
    /// the body carries no such field. Callers see the field exactly as
    /// Airtable produced it; no shape validation is applied.
    pub async fn list_records(&self, table: &str) -> Result<Option<Value>, ProxyError> {
        let url = self.record_list_url(table);

        let response = self
            .http
            .get(url)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProxyError::Timeout(self.timeout_secs)
                } else {
                    ProxyError::Network(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProxyError::UpstreamStatus(status.as_u16()));
        }

        let mut body: Value = response.json().await.map_err(|e| {
            if e.is_timeout() {
                ProxyError::Timeout(self.timeout_secs)
            } else if e.is_decode() {
                ProxyError::Parse(e)
            } else {
                ProxyError::Network(e)
            }
        })?;

        Ok(body.get_mut("records").map(Value::take))
    }
}
