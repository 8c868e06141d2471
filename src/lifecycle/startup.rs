//! Startup orchestration.
//!
//! # Responsibilities
//! - Resolve and validate configuration
//! - Build the server, then bind the listener
//! - Announce the listening address on the console
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - The server is built before binding so a bad config never holds the port

use std::net::SocketAddr;
use std::path::Path;

use tokio::net::TcpListener;

use crate::config::{loader::resolve_config, ConfigError, RelayConfig};
use crate::http::{RelayServer, ServerError};
use crate::net::{self, ListenerError};

/// Any failure that prevents the relay from starting.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("server setup error: {0}")]
    Server(#[from] ServerError),
    #[error(transparent)]
    Listener(#[from] ListenerError),
    #[error("failed to read local address: {0}")]
    LocalAddr(std::io::Error),
}

/// Load the configuration from `path` (or defaults).
pub fn load(path: Option<&Path>) -> Result<RelayConfig, StartupError> {
    Ok(resolve_config(path)?)
}

/// Build the server and bind its listener.
pub async fn prepare(config: RelayConfig) -> Result<(RelayServer, TcpListener), StartupError> {
    let listener_config = config.listener.clone();
    let server = RelayServer::new(config)?;
    let listener = net::bind(&listener_config).await?;
    Ok((server, listener))
}

/// The URL a browser on this machine should use for the relay.
pub fn local_url(addr: SocketAddr) -> String {
    format!("http://localhost:{}", addr.port())
}

/// The two console lines shown once the relay is listening.
pub fn banner(addr: SocketAddr, route_path: &str) -> [String; 2] {
    let url = local_url(addr);
    [
        format!("CORS relay listening on {}", url),
        format!(
            "Keep this window open, then set the page's proxy address to {} (POST {}).",
            url, route_path
        ),
    ]
}

/// Print the banner for a bound listener.
pub fn announce(listener: &TcpListener, route_path: &str) -> Result<(), StartupError> {
    let addr = listener.local_addr().map_err(StartupError::LocalAddr)?;
    for line in banner(addr, route_path) {
        println!("{}", line);
    }
    tracing::info!(address = %addr, "Relay ready");
    Ok(())
}
