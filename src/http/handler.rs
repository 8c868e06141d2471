//! Request dispatch.
//!
//! # Data Flow
//! ```text
//! OPTIONS <any>           → 204, empty body
//! POST <route.path>       → buffer body → UpstreamClient::forward → stream response back
//! anything else           → 404, plain-text hint
//! ```
//!
//! CORS headers are attached by `cors_middleware` around all three branches.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    extract::{Request, State},
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
};
use futures_util::TryStreamExt;

use crate::http::error::{error_chain, RelayError, TEXT_PLAIN_UTF8};
use crate::http::upstream::UpstreamClient;

/// Shared, immutable handler state.
#[derive(Debug, Clone)]
pub struct RelayState {
    pub upstream: UpstreamClient,
    pub route_path: Arc<str>,
}

impl RelayState {
    pub fn new(upstream: UpstreamClient, route_path: impl Into<Arc<str>>) -> Self {
        Self {
            upstream,
            route_path: route_path.into(),
        }
    }

    fn is_forward_route(&self, request: &Request) -> bool {
        // The whole request target must match; a query string is not tolerated.
        request.method() == Method::POST
            && request
                .uri()
                .path_and_query()
                .is_some_and(|target| target.as_str() == &*self.route_path)
    }

    fn not_found_message(&self) -> String {
        format!(
            "Not Found. POST {} to proxy to dashscope.",
            self.route_path
        )
    }
}

/// Single entry point for every method and path.
pub async fn relay_handler(State(state): State<RelayState>, request: Request) -> Response {
    if request.method() == Method::OPTIONS {
        return StatusCode::NO_CONTENT.into_response();
    }

    if !state.is_forward_route(&request) {
        tracing::debug!(
            method = %request.method(),
            uri = %request.uri(),
            "No route matched"
        );
        return (
            StatusCode::NOT_FOUND,
            [(header::CONTENT_TYPE, TEXT_PLAIN_UTF8)],
            state.not_found_message(),
        )
            .into_response();
    }

    match forward(&state, request).await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!(error = %error_chain(&e), "Relay failed");
            e.into_response()
        }
    }
}

async fn forward(state: &RelayState, request: Request) -> Result<Response, RelayError> {
    let (parts, body) = request.into_parts();
    let authorization = parts.headers.get(header::AUTHORIZATION).cloned();

    let body = to_bytes(body, usize::MAX)
        .await
        .map_err(RelayError::RequestBody)?;

    tracing::debug!(
        upstream = %state.upstream.url(),
        body_len = body.len(),
        has_authorization = authorization.is_some(),
        "Forwarding request"
    );

    let upstream = state.upstream.forward(authorization, body).await?;

    let status = upstream.status();
    let content_type = upstream
        .headers()
        .get(header::CONTENT_TYPE)
        .cloned()
        .unwrap_or_else(|| HeaderValue::from_static("application/json"));

    tracing::debug!(status = %status, "Upstream responded");

    let stream = upstream.bytes_stream().inspect_err(|e| {
        tracing::warn!(error = %e, "Upstream body stream ended with error");
    });

    Ok((
        status,
        [(header::CONTENT_TYPE, content_type)],
        Body::from_stream(stream),
    )
        .into_response())
}
