//! Check execution
//!
//! Sequential runner and the connectivity preflight.

mod runner;

pub use runner::{CheckRunner, PreflightResult};
