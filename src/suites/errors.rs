//! Error-handling checks
//!
//! Both checks assert an exact status code, not a range: a 500 on the
//! malformed booking counts as a plain failed assertion.

use serde_json::{json, Value};

use crate::http::{ApiClient, RequestOutcome};
use crate::models::{Check, CheckResult};

/// Check 7: a deliberately incomplete booking payload must be rejected
/// with exactly 400
pub async fn invalid_booking(client: &ApiClient) -> CheckResult {
    let outcome = client.post("book", &invalid_booking_payload()).await;
    expect_exact_status(Check::InvalidBooking, &outcome, 400)
}

/// Check 8: a nonexistent endpoint must answer exactly 404
pub async fn unknown_endpoint(client: &ApiClient) -> CheckResult {
    let outcome = client.get("nonexistent").await;
    expect_exact_status(Check::UnknownEndpoint, &outcome, 404)
}

/// Booking payload with empty required guest fields and a syntactically
/// invalid room reference
fn invalid_booking_payload() -> Value {
    json!({
        "bookingInfo": {
            "guest": {
                "name": "",
                "phone": ""
            },
            "roomId": "invalid_id"
        }
    })
}

fn expect_exact_status(check: Check, outcome: &RequestOutcome, expected: u16) -> CheckResult {
    if outcome.status == expected {
        CheckResult::pass(check, outcome.duration_ms)
            .with_detail(format!("Status: {}", outcome.status))
    } else {
        CheckResult::fail(
            check,
            outcome.duration_ms,
            format!("Status: {}, Expected {}", outcome.status, expected),
        )
    }
}
