//! API-boundary error types.
//!
//! Every failure a handler can return is one of the variants below.
//! Upstream clients convert transport failures into `ApiError::Upstream`
//! before they reach a handler; no raw `reqwest::Error` crosses that line.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// Maximum length of a diagnostic message carried in an error payload.
pub const MAX_DIAGNOSTIC_LEN: usize = 200;

/// How an upstream call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamKind {
    /// Connection, DNS, TLS or body-read failure.
    Transport,
    /// The upstream answered with a non-2xx status.
    Status(u16),
    /// The per-call deadline elapsed.
    Timeout,
}

impl std::fmt::Display for UpstreamKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UpstreamKind::Transport   => write!(f, "transport"),
            UpstreamKind::Status(code) => write!(f, "status {}", code),
            UpstreamKind::Timeout     => write!(f, "timeout"),
        }
    }
}

#[derive(Debug)]
pub enum ApiError {
    /// Malformed caller input, rejected before any external effect.
    Validation(String),

    /// Authorization gate failure on forum writes.
    Forbidden(String),

    /// An upstream API could not serve the request.
    Upstream {
        source: String,
        kind: UpstreamKind,
        message: String,
    },

    /// Persistence failure.
    Store(String),

    /// Process configuration problem (bad bind address, client build failure).
    Config(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Validation(msg) => write!(f, "invalid input: {}", msg),
            ApiError::Forbidden(msg) => write!(f, "forbidden: {}", msg),
            ApiError::Upstream { source, kind, message } => {
                write!(f, "{} unavailable ({}): {}", source, kind, message)
            }
            ApiError::Store(msg) => write!(f, "store error: {}", msg),
            ApiError::Config(msg) => write!(f, "configuration error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    pub fn upstream(source: &str, kind: UpstreamKind, message: impl AsRef<str>) -> Self {
        ApiError::Upstream {
            source: source.to_string(),
            kind,
            message: truncate_msg(message.as_ref(), MAX_DIAGNOSTIC_LEN),
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_)   => StatusCode::BAD_REQUEST,
            ApiError::Forbidden(_)    => StatusCode::FORBIDDEN,
            ApiError::Upstream { .. } => StatusCode::BAD_GATEWAY,
            ApiError::Store(_)        => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Config(_)       => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(serde_json::json!({ "detail": self.to_string() }));
        (status, body).into_response()
    }
}

/// Cut a diagnostic string down to `max` bytes on a char boundary.
pub fn truncate_msg(msg: &str, max: usize) -> String {
    if msg.len() <= max {
        return msg.to_string();
    }
    let mut end = max;
    while !msg.is_char_boundary(end) {
        end -= 1;
    }
    msg[..end].to_string()
}
