//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! optional TOML file (--config)
//!     → loader.rs (parse & deserialize, defaults for every field)
//!     → validation.rs (semantic checks)
//!     → RelayConfig (validated, immutable)
//!     → shared via Arc with the HTTP server
//! ```
//!
//! # Design Decisions
//! - Config is built once at startup and never mutated
//! - Defaults reproduce the stock relay: port 3123, DashScope upstream
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{
    CorsConfig, ListenerConfig, ObservabilityConfig, RelayConfig, RouteConfig, UpstreamConfig,
};
pub use validation::{validate_config, ValidationError};
