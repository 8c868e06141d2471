//! Network layer subsystem.
//!
//! Binding is the only network concern the relay owns; per-connection
//! concurrency is left to `axum::serve`, which spawns one task per connection.

pub mod listener;

pub use listener::{bind, ListenerError};
