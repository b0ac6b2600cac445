//! Shared HTTP error mapping for the remote clients.

use std::time::Duration;

use reqwest::StatusCode;
use serde::Deserialize;

use quadrant_core::error::QuadrantError;

/// Error bodies as returned by the services we talk to. InstantDB uses
/// `message`, the Telegram Bot API uses `description`.
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

pub(crate) fn map_http_error(status: StatusCode, body: String) -> QuadrantError {
    let message = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(|wrapper| wrapper.message.or(wrapper.description))
        .unwrap_or(body);

    QuadrantError::remote(Some(status.as_u16()), message)
}

/// Maps a failure to send or read a request. The URL is stripped from the
/// message since Bot API URLs embed the token.
pub(crate) fn map_transport_error(
    service: &str,
    err: reqwest::Error,
    timeout: Duration,
) -> QuadrantError {
    if err.is_timeout() {
        return QuadrantError::timeout(format!("{service} request"), timeout.as_millis() as u64);
    }
    QuadrantError::remote(
        err.status().map(|s| s.as_u16()),
        format!("{service} request failed: {}", err.without_url()),
    )
}
