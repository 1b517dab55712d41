//! Check catalog and result models
//!
//! Defines the conformance checks, their results, and the run summary.

#![allow(dead_code)]

use serde::{Deserialize, Serialize};
use std::fmt;

/// All 9 conformance checks, in execution order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Check {
    // Rooms (1-2)
    ListRooms,
    SearchRooms,

    // Reservations (3-4)
    ListReservations,
    CreateReservation,

    // Bookings (5-6)
    ListBookings,
    CreateBooking,

    // Error handling (7-8)
    InvalidBooking,
    UnknownEndpoint,

    // Consistency (9)
    CrossResourceConsistency,
}

impl Check {
    /// Get check number (1-9)
    pub fn number(&self) -> u8 {
        match self {
            Check::ListRooms => 1,
            Check::SearchRooms => 2,
            Check::ListReservations => 3,
            Check::CreateReservation => 4,
            Check::ListBookings => 5,
            Check::CreateBooking => 6,
            Check::InvalidBooking => 7,
            Check::UnknownEndpoint => 8,
            Check::CrossResourceConsistency => 9,
        }
    }

    /// Get check name
    pub fn name(&self) -> &'static str {
        match self {
            Check::ListRooms => "GET /api/rooms",
            Check::SearchRooms => "GET /api/rooms with search",
            Check::ListReservations => "GET /api/reserve",
            Check::CreateReservation => "POST /api/reserve",
            Check::ListBookings => "GET /api/book",
            Check::CreateBooking => "POST /api/book",
            Check::InvalidBooking => "POST /api/book with invalid data",
            Check::UnknownEndpoint => "GET /api/nonexistent",
            Check::CrossResourceConsistency => "Data consistency check",
        }
    }

    /// Get the suite this check belongs to
    pub fn suite(&self) -> &'static str {
        match self {
            Check::ListRooms | Check::SearchRooms => "Rooms API",
            Check::ListReservations | Check::CreateReservation => "Reservations API",
            Check::ListBookings | Check::CreateBooking => "Bookings API",
            Check::InvalidBooking | Check::UnknownEndpoint => "Error Handling",
            Check::CrossResourceConsistency => "Consistency",
        }
    }

    /// One-line description for `list --detailed`
    pub fn description(&self) -> &'static str {
        match self {
            Check::ListRooms => "Room listing returns a list; caches it for later checks",
            Check::SearchRooms => "Room listing accepts a search query parameter",
            Check::ListReservations => "Reservation listing returns a list",
            Check::CreateReservation => "Creates a reservation for the first available room",
            Check::ListBookings => "Booking listing returns a list",
            Check::CreateBooking => "Creates a booking for the first available room",
            Check::InvalidBooking => "Incomplete booking payload is rejected with 400",
            Check::UnknownEndpoint => "Unknown endpoint answers 404",
            Check::CrossResourceConsistency => "Reports room status counts against listings",
        }
    }

    /// Whether this check reads previously cached room listings
    pub fn needs_room_cache(&self) -> bool {
        matches!(
            self,
            Check::SearchRooms | Check::CreateReservation | Check::CreateBooking
        )
    }

    /// Get all checks in execution order
    pub fn all() -> Vec<Check> {
        vec![
            Check::ListRooms,
            Check::SearchRooms,
            Check::ListReservations,
            Check::CreateReservation,
            Check::ListBookings,
            Check::CreateBooking,
            Check::InvalidBooking,
            Check::UnknownEndpoint,
            Check::CrossResourceConsistency,
        ]
    }

    /// Parse from check number
    pub fn from_number(n: u8) -> Option<Check> {
        match n {
            1 => Some(Check::ListRooms),
            2 => Some(Check::SearchRooms),
            3 => Some(Check::ListReservations),
            4 => Some(Check::CreateReservation),
            5 => Some(Check::ListBookings),
            6 => Some(Check::CreateBooking),
            7 => Some(Check::InvalidBooking),
            8 => Some(Check::UnknownEndpoint),
            9 => Some(Check::CrossResourceConsistency),
            _ => None,
        }
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Check {}: {}", self.number(), self.name())
    }
}

/// Check execution status
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Pass,
    Fail,
    Skip,
}

impl CheckStatus {
    pub fn symbol(&self) -> &'static str {
        match self {
            CheckStatus::Pass => "✓",
            CheckStatus::Fail => "✗",
            CheckStatus::Skip => "○",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, CheckStatus::Pass)
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckStatus::Pass => write!(f, "PASS"),
            CheckStatus::Fail => write!(f, "FAIL"),
            CheckStatus::Skip => write!(f, "SKIP"),
        }
    }
}

/// Result of a single check execution
///
/// Immutable once created; one result per attempted API call or
/// consistency check.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CheckResult {
    pub check: Check,
    pub status: CheckStatus,
    pub duration_ms: u64,
    pub detail: Option<String>,
}

impl CheckResult {
    pub fn pass(check: Check, duration_ms: u64) -> Self {
        Self {
            check,
            status: CheckStatus::Pass,
            duration_ms,
            detail: None,
        }
    }

    pub fn fail(check: Check, duration_ms: u64, detail: impl Into<String>) -> Self {
        Self {
            check,
            status: CheckStatus::Fail,
            duration_ms,
            detail: Some(detail.into()),
        }
    }

    pub fn skip(check: Check, reason: impl Into<String>) -> Self {
        Self {
            check,
            status: CheckStatus::Skip,
            duration_ms: 0,
            detail: Some(reason.into()),
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn passed(&self) -> bool {
        self.status.is_success()
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} [{}ms]",
            self.status.symbol(),
            self.check,
            self.duration_ms
        )?;
        if let Some(detail) = &self.detail {
            write!(f, " - {detail}")?;
        }
        Ok(())
    }
}

/// Summary of one conformance run
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunSummary {
    pub base_url: String,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub total_duration_ms: u64,
    pub results: Vec<CheckResult>,
}

impl RunSummary {
    pub fn new(base_url: impl Into<String>, results: Vec<CheckResult>) -> Self {
        let total = results.len();
        let passed = results
            .iter()
            .filter(|r| r.status == CheckStatus::Pass)
            .count();
        let failed = results
            .iter()
            .filter(|r| r.status == CheckStatus::Fail)
            .count();
        let skipped = results
            .iter()
            .filter(|r| r.status == CheckStatus::Skip)
            .count();
        let total_duration_ms = results.iter().map(|r| r.duration_ms).sum();

        Self {
            base_url: base_url.into(),
            total,
            passed,
            failed,
            skipped,
            total_duration_ms,
            results,
        }
    }

    pub fn pass_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.passed as f64 / self.total as f64) * 100.0
        }
    }

    /// True when nothing failed; skipped checks do not count against the run
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Conformance run against {}", self.base_url)?;
        writeln!(f, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━")?;
        for result in &self.results {
            writeln!(f, "  {result}")?;
        }
        writeln!(f, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━")?;
        writeln!(
            f,
            "Total: {} | Pass: {} | Fail: {} | Skip: {}",
            self.total, self.passed, self.failed, self.skipped
        )?;
        writeln!(
            f,
            "Pass Rate: {:.1}% | Duration: {}ms",
            self.pass_rate(),
            self.total_duration_ms
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_numbers() {
        assert_eq!(Check::ListRooms.number(), 1);
        assert_eq!(Check::CrossResourceConsistency.number(), 9);
    }

    #[test]
    fn test_check_from_number_round_trip() {
        for check in Check::all() {
            assert_eq!(Check::from_number(check.number()), Some(check));
        }
        assert_eq!(Check::from_number(0), None);
        assert_eq!(Check::from_number(10), None);
    }

    #[test]
    fn test_all_checks() {
        let all = Check::all();
        assert_eq!(all.len(), 9);
        // Declared order matters: creation checks run after the listing
        // that populates the cache they depend on.
        let rooms_pos = all.iter().position(|c| *c == Check::ListRooms).unwrap();
        let create_pos = all
            .iter()
            .position(|c| *c == Check::CreateReservation)
            .unwrap();
        assert!(rooms_pos < create_pos);
    }

    #[test]
    fn test_needs_room_cache() {
        assert!(Check::CreateBooking.needs_room_cache());
        assert!(!Check::UnknownEndpoint.needs_room_cache());
    }

    #[test]
    fn test_result_creation() {
        let result = CheckResult::pass(Check::ListRooms, 12).with_detail("Retrieved 5 rooms");
        assert!(result.passed());
        assert_eq!(result.detail.as_deref(), Some("Retrieved 5 rooms"));
    }

    #[test]
    fn test_run_summary_counts_match_log() {
        let results = vec![
            CheckResult::pass(Check::ListRooms, 10),
            CheckResult::fail(Check::CreateBooking, 5, "no available room"),
            CheckResult::skip(Check::UnknownEndpoint, "skipped by configuration"),
        ];

        let summary = RunSummary::new("http://localhost:3000", results);
        assert_eq!(summary.total, summary.results.len());
        assert_eq!(
            summary.passed,
            summary.results.iter().filter(|r| r.passed()).count()
        );
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.skipped, 1);
        assert!(!summary.all_passed());
    }

    #[test]
    fn test_all_passed_ignores_skips() {
        let results = vec![
            CheckResult::pass(Check::ListRooms, 10),
            CheckResult::skip(Check::SearchRooms, "skipped by configuration"),
        ];
        let summary = RunSummary::new("http://localhost:3000", results);
        assert!(summary.all_passed());
    }
}
