//! CORS header policy.
//!
//! Every response leaving the relay, including preflight, not-found and
//! upstream failures, carries the same four headers. The allowed origin is
//! the caller's `Origin` reflected verbatim, or `*` when there is none.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{
        header::{
            InvalidHeaderValue, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_MAX_AGE, ORIGIN,
        },
        HeaderMap, HeaderValue,
    },
    middleware::Next,
    response::Response,
};

use crate::config::CorsConfig;

/// Precomputed CORS header values.
#[derive(Debug, Clone)]
pub struct CorsPolicy {
    allow_methods: HeaderValue,
    allow_headers: HeaderValue,
    max_age: HeaderValue,
}

impl CorsPolicy {
    pub fn from_config(config: &CorsConfig) -> Result<Self, InvalidHeaderValue> {
        Ok(Self {
            allow_methods: HeaderValue::from_str(&config.allow_methods)?,
            allow_headers: HeaderValue::from_str(&config.allow_headers)?,
            max_age: HeaderValue::from(config.max_age_secs),
        })
    }

    /// The `Access-Control-Allow-Origin` value for a request carrying `origin`.
    pub fn allow_origin(origin: Option<&HeaderValue>) -> HeaderValue {
        match origin {
            Some(value) if !value.is_empty() => value.clone(),
            _ => HeaderValue::from_static("*"),
        }
    }

    /// Write the four CORS headers into `headers`, replacing any existing values.
    pub fn apply(&self, origin: Option<&HeaderValue>, headers: &mut HeaderMap) {
        headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, Self::allow_origin(origin));
        headers.insert(ACCESS_CONTROL_ALLOW_METHODS, self.allow_methods.clone());
        headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, self.allow_headers.clone());
        headers.insert(ACCESS_CONTROL_MAX_AGE, self.max_age.clone());
    }
}

impl Default for CorsPolicy {
    fn default() -> Self {
        Self {
            allow_methods: HeaderValue::from_static("POST, OPTIONS"),
            allow_headers: HeaderValue::from_static("Authorization, Content-Type"),
            max_age: HeaderValue::from_static("86400"),
        }
    }
}

/// Middleware attaching the CORS headers to whatever the inner service returns.
pub async fn cors_middleware(
    State(policy): State<Arc<CorsPolicy>>,
    request: Request,
    next: Next,
) -> Response {
    let origin = request.headers().get(ORIGIN).cloned();
    let mut response = next.run(request).await;
    policy.apply(origin.as_ref(), response.headers_mut());
    response
}
