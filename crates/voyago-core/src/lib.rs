//! Shared plumbing for Voyago services.
//!
//! Framework-facing helpers only: configuration loading, health handlers,
//! request-id middleware, serde helpers, and tracing setup. Domain types
//! live in each service.

pub mod config;
pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
