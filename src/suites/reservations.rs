//! Reservations API checks
//!
//! Check 4 synthesizes a nested reservation payload from the first cached
//! available room. Guest names carry a time-based suffix so repeated runs
//! against the same server do not collide.

use chrono::{DateTime, Duration, Utc};
use serde_json::{json, Value};

use crate::http::ApiClient;
use crate::models::{room_no, Check, CheckResult, ResourceCache};

use super::no_available_room;

/// Check 4: create a reservation for the first available room
pub async fn create_reservation(client: &ApiClient, cache: &ResourceCache) -> CheckResult {
    let Some(room) = cache.first_available_room() else {
        return no_available_room(Check::CreateReservation);
    };

    let payload = reservation_payload(room, Utc::now());
    let outcome = client.post("reserve", &payload).await;

    if outcome.success {
        let created = outcome
            .body
            .field("success")
            .and_then(Value::as_bool)
            .unwrap_or(false);
        CheckResult::pass(Check::CreateReservation, outcome.duration_ms)
            .with_detail(format!("Status: {}, Created: {}", outcome.status, created))
    } else {
        CheckResult::fail(
            Check::CreateReservation,
            outcome.duration_ms,
            format!(
                "Status: {}, Response: {}",
                outcome.status,
                outcome.body.summary()
            ),
        )
    }
}

/// Build the nested reservation payload for a room record
///
/// Stay window is now+1 day to now+3 days; payment fields are fixed
/// placeholders the server accepts for a walk-in guest.
pub fn reservation_payload(room: &Value, now: DateTime<Utc>) -> Value {
    json!({
        "payload": {
            "guest": {
                "name": format!("Test Guest {}", now.format("%H%M%S")),
                "phone": "+1234567890",
                "ota": "WALKING_GUEST"
            },
            "room": {
                "roomNo": room_no(room),
                "arrival": (now + Duration::days(1)).to_rfc3339(),
                "departure": (now + Duration::days(3)).to_rfc3339(),
                "roomDetails": "Reservation created by conformance run"
            },
            "payment": {
                "bookingFee": 0,
                "sst": 0,
                "tourismTax": 0,
                "fnfDiscount": 0
            },
            "reservationDate": now.to_rfc3339()
        }
    })
}
