//! Per-request failures and their mapping to caller responses.
//!
//! # Design Decisions
//! - Every failure produces a plain-text response; nothing is swallowed
//! - The body carries the whole source chain so the OS-level cause
//!   (e.g. "Connection refused") reaches the browser
//! - CORS headers are added by the outer middleware, not here

use std::error::Error as StdError;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

pub const TEXT_PLAIN_UTF8: &str = "text/plain; charset=utf-8";

/// Error raised while relaying a single request.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// Connect, DNS, TLS, timeout or premature close talking to the upstream.
    #[error("upstream request failed")]
    Upstream(#[source] reqwest::Error),
    /// The caller's request body could not be read in full.
    #[error("failed to read request body")]
    RequestBody(#[source] axum::Error),
}

impl RelayError {
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::Upstream(_) => StatusCode::BAD_GATEWAY,
            RelayError::RequestBody(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let message = match &self {
            RelayError::Upstream(e) => format!("Proxy error: {}", error_chain(e)),
            RelayError::RequestBody(e) => format!("Bad request: {}", error_chain(e)),
        };
        (
            self.status(),
            [(header::CONTENT_TYPE, TEXT_PLAIN_UTF8)],
            message,
        )
            .into_response()
    }
}

/// Render an error and all of its sources as "outer: inner: root".
pub fn error_chain(err: &(dyn StdError + 'static)) -> String {
    let mut rendered = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        // Some wrappers repeat their source's message verbatim.
        if !rendered.ends_with(&text) {
            rendered.push_str(": ");
            rendered.push_str(&text);
        }
        source = cause.source();
    }
    rendered
}
