//! Local CORS relay.
//!
//! Accepts browser requests, answers CORS preflights itself and forwards
//! `POST <route.path>` to one fixed upstream endpoint, streaming the upstream
//! response back with CORS headers attached.
//!
//! ```text
//!  Browser ──▶ net::listener ──▶ http::server ──▶ http::cors ──▶ http::handler
//!                                                                   │
//!  Browser ◀── streamed body ◀── http::cors ◀── http::upstream ◀────┘ ──▶ Upstream
//! ```

// Core subsystems
pub mod config;
pub mod http;
pub mod net;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::RelayConfig;
pub use http::RelayServer;
pub use lifecycle::Shutdown;
