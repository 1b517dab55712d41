//! Data models for the conformance runner
//!
//! This module contains all data structures used throughout the application.

mod check;
mod resource;

pub use check::{Check, CheckResult, CheckStatus, RunSummary};
pub use resource::{room_id, room_no, room_status, ResourceCache, ResourceKind};
