//! Cross-resource consistency check
//!
//! Re-fetches all three listings and reports room status counts alongside
//! reservation and booking counts. This is a report, not a referential
//! integrity proof: identifiers are not cross-validated.

use serde_json::Value;

use crate::http::ApiClient;
use crate::models::{room_status, Check, CheckResult, ResourceKind};

/// Check 9: fetch rooms, reservations, and bookings and report their counts
pub async fn cross_resource(client: &ApiClient) -> CheckResult {
    let rooms = client.get(ResourceKind::Rooms.endpoint()).await;
    let reservations = client.get(ResourceKind::Reservations.endpoint()).await;
    let bookings = client.get(ResourceKind::Bookings.endpoint()).await;

    let duration_ms = rooms.duration_ms + reservations.duration_ms + bookings.duration_ms;

    if !(rooms.success && reservations.success && bookings.success) {
        return CheckResult::fail(
            Check::CrossResourceConsistency,
            duration_ms,
            "Could not fetch all required data",
        );
    }

    let room_records = rooms.body.as_sequence().unwrap_or(&[]);
    let (reserved, occupied) = partition_by_status(room_records);
    let reservation_count = reservations.body.as_sequence().map_or(0, |s| s.len());
    let booking_count = bookings.body.as_sequence().map_or(0, |s| s.len());

    CheckResult::pass(Check::CrossResourceConsistency, duration_ms).with_detail(format!(
        "Reserved rooms: {reserved}, Occupied: {occupied}, \
         Reservations: {reservation_count}, Bookings: {booking_count}"
    ))
}

/// Count rooms in RESERVED and OCCUPIED status
fn partition_by_status(rooms: &[Value]) -> (usize, usize) {
    let reserved = rooms
        .iter()
        .filter(|r| room_status(r) == Some("RESERVED"))
        .count();
    let occupied = rooms
        .iter()
        .filter(|r| room_status(r) == Some("OCCUPIED"))
        .count();
    (reserved, occupied)
}
