//! Client-facing response envelope.
//!
//! Every response carries `Content-Type: application/json` and an
//! `Access-Control-Allow-Origin` header. The success and failure paths
//! send the wildcard origin; the rejection path can echo the requesting
//! origin instead (see `CorsConfig::echo_origin_on_reject`). The
//! wildcard on the success path is looser than the entry gate, matching
//! the observed behavior of the service this proxy stands in for.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use serde_json::Value;

use crate::error::ProxyError;

/// Body shape shared by every proxy response.
///
/// Success: `{"success":true,"records":…}`. Failure:
/// `{"success":false,"error":"…"}`. Absent fields are omitted entirely,
/// so a success with no upstream `records` field is just
/// `{"success":true}`.
#[derive(Debug, Serialize)]
pub struct Envelope {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// 200 with the upstream records passed through unmodified.
pub fn success(records: Option<Value>) -> Response {
    reply(
        StatusCode::OK,
        wildcard(),
        Envelope {
            success: true,
            records,
            error: None,
        },
    )
}

/// 403 for a caller whose origin failed the allow-list.
pub fn rejected(origin: &str, echo_origin: bool) -> Response {
    let allow_origin = if echo_origin {
        HeaderValue::from_str(origin).unwrap_or_else(|_| wildcard())
    } else {
        wildcard()
    };
    let err = ProxyError::OriginRejected;
    reply(
        err.status_code(),
        allow_origin,
        Envelope {
            success: false,
            records: None,
            error: Some(err.to_string()),
        },
    )
}

/// 500 for any upstream, network, timeout, or parse failure.
pub fn failure(err: &ProxyError) -> Response {
    reply(
        err.status_code(),
        wildcard(),
        Envelope {
            success: false,
            records: None,
            error: Some(err.to_string()),
        },
    )
}

fn wildcard() -> HeaderValue {
    HeaderValue::from_static("*")
}

fn reply(status: StatusCode, allow_origin: HeaderValue, body: Envelope) -> Response {
    (
        status,
        [(header::ACCESS_CONTROL_ALLOW_ORIGIN, allow_origin)],
        Json(body),
    )
        .into_response()
}
