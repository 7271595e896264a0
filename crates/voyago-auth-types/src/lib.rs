//! Identity types shared across Voyago services.
//!
//! Provides the `IdentityHeaders` extractor resource services use to read
//! the caller identity injected by the gateway.

pub mod identity;
