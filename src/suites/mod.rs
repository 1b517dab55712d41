//! Conformance check implementations
//!
//! ## Suites
//!
//! ### Rooms API (1-2)
//! - Room listing
//! - Room listing with search query
//!
//! ### Reservations API (3-4)
//! - Reservation listing
//! - Reservation creation
//!
//! ### Bookings API (5-6)
//! - Booking listing
//! - Booking creation
//!
//! ### Error Handling (7-8)
//! - Invalid booking payload rejected with 400
//! - Unknown endpoint answers 404
//!
//! ### Consistency (9)
//! - Cross-resource status report

mod bookings;
mod consistency;
mod errors;
mod reservations;
mod rooms;

pub use bookings::booking_payload;
pub use reservations::reservation_payload;

use crate::http::{ApiClient, RequestOutcome};
use crate::models::{Check, CheckResult, ResourceCache, ResourceKind};
use serde_json::Value;

/// Run a single check against the server
///
/// Listing checks write into the cache; creation checks and the search
/// check read from it. Execution order is the caller's responsibility.
pub async fn run_check(
    check: Check,
    client: &ApiClient,
    cache: &mut ResourceCache,
) -> CheckResult {
    match check {
        Check::ListRooms => listing_check(check, ResourceKind::Rooms, client, cache).await,
        Check::SearchRooms => rooms::search_rooms(client, cache).await,
        Check::ListReservations => {
            listing_check(check, ResourceKind::Reservations, client, cache).await
        }
        Check::CreateReservation => reservations::create_reservation(client, cache).await,
        Check::ListBookings => listing_check(check, ResourceKind::Bookings, client, cache).await,
        Check::CreateBooking => bookings::create_booking(client, cache).await,
        Check::InvalidBooking => errors::invalid_booking(client).await,
        Check::UnknownEndpoint => errors::unknown_endpoint(client).await,
        Check::CrossResourceConsistency => consistency::cross_resource(client).await,
    }
}

/// GET a collection, require a list-shaped body, and cache it
async fn listing_check(
    check: Check,
    kind: ResourceKind,
    client: &ApiClient,
    cache: &mut ResourceCache,
) -> CheckResult {
    let outcome = client.get(kind.endpoint()).await;

    match evaluate_listing(&outcome, kind) {
        Ok((records, detail)) => {
            cache.store(kind, records);
            CheckResult::pass(check, outcome.duration_ms).with_detail(detail)
        }
        Err(detail) => CheckResult::fail(check, outcome.duration_ms, detail),
    }
}

/// Decide whether a listing outcome passes; returns the records to cache
/// and the detail string on success
fn evaluate_listing(
    outcome: &RequestOutcome,
    kind: ResourceKind,
) -> Result<(Vec<Value>, String), String> {
    if !outcome.success {
        return Err(format!(
            "Status: {}, Response: {}",
            outcome.status,
            outcome.body.summary()
        ));
    }

    match outcome.body.as_sequence() {
        Some(items) => {
            let detail = format!("Retrieved {} {}", items.len(), kind.name());
            Ok((items.to_vec(), detail))
        }
        None => Err(format!(
            "Expected a list of {}, got {} body",
            kind.name(),
            outcome.body.kind()
        )),
    }
}

/// Failing result for a creation check that found nothing to work with;
/// no network call is made in this case
fn no_available_room(check: Check) -> CheckResult {
    CheckResult::fail(check, 0, "no available room")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::Body;
    use serde_json::json;

    fn outcome(status: u16, body: Body) -> RequestOutcome {
        RequestOutcome {
            success: status < 400,
            status,
            body,
            duration_ms: 3,
        }
    }

    #[test]
    fn test_evaluate_listing_pass() {
        let body = Body::decode(r#"[{"roomNo":"101","roomStatus":"AVAILABLE","_id":"r1"}]"#);
        let (records, detail) =
            evaluate_listing(&outcome(200, body), ResourceKind::Rooms).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(detail, "Retrieved 1 rooms");
    }

    #[test]
    fn test_evaluate_listing_rejects_mapping_body() {
        let body = Body::decode(r#"{"message":"ok"}"#);
        let err = evaluate_listing(&outcome(200, body), ResourceKind::Bookings).unwrap_err();
        assert!(err.contains("Expected a list of bookings"));
    }

    #[test]
    fn test_evaluate_listing_rejects_error_status() {
        let body = Body::decode(r#"{"error":"boom"}"#);
        let err =
            evaluate_listing(&outcome(500, body), ResourceKind::Reservations).unwrap_err();
        assert!(err.contains("Status: 500"));
    }

    #[test]
    fn test_no_available_room_detail() {
        let result = no_available_room(Check::CreateBooking);
        assert!(!result.passed());
        assert_eq!(result.detail.as_deref(), Some("no available room"));
        assert_eq!(result.duration_ms, 0);
    }

    #[tokio::test]
    async fn test_creation_checks_skip_network_without_available_room() {
        // Port 9 is discard; the client is never used when the cache has
        // no available room, so these return without any I/O.
        let client = ApiClient::new("http://127.0.0.1:9", 10).unwrap();
        let mut cache = ResourceCache::new();
        cache.store(
            ResourceKind::Rooms,
            vec![json!({"roomNo": "101", "roomStatus": "OCCUPIED", "_id": "r1"})],
        );

        let reservation = run_check(Check::CreateReservation, &client, &mut cache).await;
        assert_eq!(reservation.detail.as_deref(), Some("no available room"));

        let booking = run_check(Check::CreateBooking, &client, &mut cache).await;
        assert_eq!(booking.detail.as_deref(), Some("no available room"));
    }
}
