//! Outbound client for the single upstream endpoint.
//!
//! # Responsibilities
//! - Build the fixed upstream URL once at startup
//! - Issue exactly one POST per forwarded request (no retries)
//! - Hand the response back unread so the body can be streamed
//!
//! # Design Decisions
//! - System proxy variables are ignored; the relay talks to the upstream directly
//! - No timeout unless `upstream.timeout_secs` is configured
//! - Dropping the returned response closes the upstream connection

use axum::{
    body::Bytes,
    http::{header, HeaderValue},
};
use reqwest::{Client, Response};
use url::Url;

use crate::config::UpstreamConfig;
use crate::http::error::RelayError;

/// Error building the upstream client.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamSetupError {
    #[error("invalid upstream URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// HTTP client bound to one upstream URL.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http_client: Client,
    url: Url,
}

impl UpstreamClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self, UpstreamSetupError> {
        let url = Url::parse(&config.base_url)?.join(&config.path)?;

        let mut builder = Client::builder().no_proxy();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build()?;

        tracing::info!(
            upstream = %url,
            timeout_secs = ?config.timeout_secs,
            "Upstream client ready"
        );

        Ok(Self { http_client, url })
    }

    /// The full upstream URL requests are sent to.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Send `body` upstream with the caller's `Authorization` value.
    ///
    /// A missing credential is sent as an empty header rather than omitted.
    /// Resolves once the upstream response headers arrive.
    pub async fn forward(
        &self,
        authorization: Option<HeaderValue>,
        body: Bytes,
    ) -> Result<Response, RelayError> {
        let authorization = authorization.unwrap_or_else(|| HeaderValue::from_static(""));

        self.http_client
            .post(self.url.clone())
            .header(header::AUTHORIZATION, authorization)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::CONTENT_LENGTH, body.len())
            .body(body)
            .send()
            .await
            .map_err(RelayError::Upstream)
    }
}
