//! Bookings API checks
//!
//! Check 6 builds a bookingInfo payload referencing the backend id of the
//! first cached available room. Like reservations, guest names and the
//! reference id get time-based suffixes.

use chrono::{DateTime, Duration, Utc};
use serde_json::{json, Value};

use crate::http::ApiClient;
use crate::models::{room_id, Check, CheckResult, ResourceCache};

use super::no_available_room;

/// Check 6: create a booking for the first available room
pub async fn create_booking(client: &ApiClient, cache: &ResourceCache) -> CheckResult {
    let Some(room) = cache.first_available_room() else {
        return no_available_room(Check::CreateBooking);
    };

    let payload = booking_payload(room, Utc::now());
    let outcome = client.post("book", &payload).await;

    if outcome.success {
        let message = outcome
            .body
            .field("message")
            .and_then(Value::as_str)
            .unwrap_or("no message");
        CheckResult::pass(Check::CreateBooking, outcome.duration_ms)
            .with_detail(format!("Status: {}, Message: {}", outcome.status, message))
    } else {
        CheckResult::fail(
            Check::CreateBooking,
            outcome.duration_ms,
            format!(
                "Status: {}, Response: {}",
                outcome.status,
                outcome.body.summary()
            ),
        )
    }
}

/// Build the bookingInfo payload for a room record
///
/// Stay window is now+1 day to now+2 days with fixed placeholder payment
/// amounts; the room is referenced by its backend id.
pub fn booking_payload(room: &Value, now: DateTime<Utc>) -> Value {
    json!({
        "bookingInfo": {
            "guest": {
                "name": format!("Test Booking Guest {}", now.format("%H%M%S")),
                "phone": "+1987654321",
                "refId": format!("TEST-{}", now.format("%Y%m%d%H%M%S")),
                "otas": "WALKING_GUEST",
                "status": "RESERVED"
            },
            "stay": {
                "arrival": (now + Duration::days(1)).to_rfc3339(),
                "departure": (now + Duration::days(2)).to_rfc3339(),
                "adults": 2,
                "children": 0
            },
            "payment": {
                "roomPrice": 150,
                "subtotal": 150,
                "paidAmount": 0,
                "dueAmount": 150,
                "paymentMethod": "Cash",
                "remarks": "Booking created by conformance run"
            },
            "roomId": room_id(room)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_room() -> Value {
        json!({"roomNo": "102", "roomStatus": "AVAILABLE", "_id": "abc123"})
    }

    #[test]
    fn test_payload_references_room_id() {
        let payload = booking_payload(&sample_room(), Utc::now());
        assert_eq!(payload["bookingInfo"]["roomId"], "abc123");
    }

    #[test]
    fn test_payload_ref_id_is_time_based() {
        let now = Utc.with_ymd_and_hms(2024, 5, 4, 14, 30, 15).unwrap();
        let payload = booking_payload(&sample_room(), now);

        assert_eq!(
            payload["bookingInfo"]["guest"]["refId"],
            "TEST-20240504143015"
        );
        assert_eq!(
            payload["bookingInfo"]["guest"]["name"],
            "Test Booking Guest 143015"
        );
    }

    #[test]
    fn test_payload_stay_and_payment() {
        let now = Utc.with_ymd_and_hms(2024, 5, 4, 12, 0, 0).unwrap();
        let payload = booking_payload(&sample_room(), now);

        let stay = &payload["bookingInfo"]["stay"];
        assert!(stay["arrival"].as_str().unwrap().starts_with("2024-05-05"));
        assert!(stay["departure"].as_str().unwrap().starts_with("2024-05-06"));
        assert_eq!(stay["adults"], 2);

        let payment = &payload["bookingInfo"]["payment"];
        assert_eq!(payment["subtotal"], 150);
        assert_eq!(payment["dueAmount"], 150);
        assert_eq!(payment["paymentMethod"], "Cash");
    }
}
