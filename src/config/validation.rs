//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the upstream URL is absolute http(s) with a host
//! - Check paths and header values are usable as-is
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RelayConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use axum::http::HeaderValue;
use url::Url;

use crate::config::schema::RelayConfig;

/// A single semantic problem with the configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("listener.bind_address `{0}` is not a socket address")]
    BindAddress(String),
    #[error("upstream.base_url `{url}` is invalid: {reason}")]
    UpstreamUrl { url: String, reason: String },
    #[error("{field} `{value}` must start with '/'")]
    RelativePath { field: &'static str, value: String },
    #[error("{field} `{value}` is not a valid header value")]
    HeaderValue { field: &'static str, value: String },
    #[error("upstream.timeout_secs must be greater than zero")]
    ZeroTimeout,
}

/// Validate a configuration, collecting every error.
pub fn validate_config(config: &RelayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if let Err(reason) = check_upstream_url(&config.upstream.base_url) {
        errors.push(ValidationError::UpstreamUrl {
            url: config.upstream.base_url.clone(),
            reason,
        });
    }

    for (field, value) in [
        ("upstream.path", &config.upstream.path),
        ("route.path", &config.route.path),
    ] {
        if !value.starts_with('/') {
            errors.push(ValidationError::RelativePath {
                field,
                value: value.clone(),
            });
        }
    }

    for (field, value) in [
        ("cors.allow_methods", &config.cors.allow_methods),
        ("cors.allow_headers", &config.cors.allow_headers),
    ] {
        if HeaderValue::from_str(value).is_err() {
            errors.push(ValidationError::HeaderValue {
                field,
                value: value.clone(),
            });
        }
    }

    if config.upstream.timeout_secs == Some(0) {
        errors.push(ValidationError::ZeroTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_upstream_url(raw: &str) -> Result<(), String> {
    let url = Url::parse(raw).map_err(|e| e.to_string())?;
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(format!("unsupported scheme `{}`", other)),
    }
    if url.host_str().is_none() {
        return Err("missing host".to_string());
    }
    Ok(())
}
