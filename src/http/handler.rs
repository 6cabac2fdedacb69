//! The forwarding handler.
//!
//! One linear flow with two exit branches: origin rejection, or
//! success-or-failure after forwarding. Nothing is retried and nothing
//! is held across invocations.

use std::time::Instant;

use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;

use crate::http::response;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::security::origin::request_origin;

/// Query parameters accepted by the records endpoint.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Table to read; the configured default applies when absent.
    pub table: Option<String>,
}

/// Forward one read query to Airtable.
pub async fn list_records(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
    headers: HeaderMap,
) -> Response {
    let start = Instant::now();

    let origin = request_origin(&headers);
    if !state.origins.is_allowed(origin) {
        tracing::warn!(origin = %origin, "Origin rejected");
        metrics::record_request("origin_rejected", 403, start);
        return response::rejected(origin, state.echo_origin_on_reject);
    }

    let table = params.table.as_deref().unwrap_or(&state.default_table);

    match state.airtable.list_records(table).await {
        Ok(records) => {
            tracing::debug!(table = %table, "Records fetched");
            metrics::record_request("success", 200, start);
            response::success(records)
        }
        Err(err) => {
            tracing::error!(table = %table, error = %err, "Airtable fetch failed");
            let status = err.status_code().as_u16();
            metrics::record_request("upstream_failure", status, start);
            response::failure(&err)
        }
    }
}

/// CORS preflight for the records endpoint.
pub async fn preflight() -> Response {
    (
        StatusCode::OK,
        [
            (
                header::ACCESS_CONTROL_ALLOW_ORIGIN,
                HeaderValue::from_static("*"),
            ),
            (
                header::ACCESS_CONTROL_ALLOW_METHODS,
                HeaderValue::from_static("GET, OPTIONS"),
            ),
            (
                header::ACCESS_CONTROL_ALLOW_HEADERS,
                HeaderValue::from_static("content-type"),
            ),
            (
                header::ACCESS_CONTROL_MAX_AGE,
                HeaderValue::from_static("86400"),
            ),
        ],
    )
        .into_response()
}

/// Liveness probe.
pub async fn health() -> Response {
    Json(serde_json::json!({ "status": "ok" })).into_response()
}
