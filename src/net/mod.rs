//! Networking modules for the backend REST boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the HTTP endpoints, `types` defines the shared wire schema,
//! `error` is the typed failure surface, `refresh` serializes token
//! refreshes, and `authed` combines them into bearer calls with one
//! refresh retry.

pub mod api;
pub mod authed;
pub mod error;
pub mod refresh;
pub mod types;
