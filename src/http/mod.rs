//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → cors.rs (origin captured, headers attached on the way out)
//!     → handler.rs (preflight / forward / not-found)
//!     → upstream.rs (single POST to the fixed upstream)
//!     → response body streamed back to the caller
//! ```

pub mod cors;
pub mod error;
pub mod handler;
pub mod server;
pub mod upstream;

pub use cors::CorsPolicy;
pub use error::RelayError;
pub use server::{RelayServer, ServerError, X_REQUEST_ID};
pub use upstream::UpstreamClient;
