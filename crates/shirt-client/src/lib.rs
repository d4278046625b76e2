//! HTTP client for the Shodan API endpoints SHIRT uses.
//!
//! This crate provides the [`ShodanClient`] for host lookups and
//! hostname searches. Responses are returned as opaque JSON values and
//! never reshaped.

mod client;
pub mod api;

pub use client::{ShodanClient, ShodanClientBuilder};
pub use shirt_core::{Result, ShirtError};
