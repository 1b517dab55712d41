//! HTTP client module
//!
//! Provides the request client used by every conformance check.

mod client;

pub use client::{ApiClient, Body, RequestOutcome, TransportError};
