//! Rooms API checks
//!
//! Check 2: the plain listing is handled by the shared listing check; this
//! module adds the search-parameter variant, which validates that the query
//! channel is accepted rather than filtering correctness.

use crate::http::ApiClient;
use crate::models::{room_no, Check, CheckResult, ResourceCache};

/// Check 2: re-issue the rooms GET with a search query built from the
/// first cached room
pub async fn search_rooms(client: &ApiClient, cache: &ResourceCache) -> CheckResult {
    let Some(needle) = cache.rooms().first().and_then(room_no) else {
        return CheckResult::fail(Check::SearchRooms, 0, "no cached room to search for");
    };
    let needle = needle.to_string();

    let outcome = client
        .get_with_query("rooms", &[("search", needle.clone())])
        .await;

    if outcome.success {
        let found = outcome.body.as_sequence().map_or(0, |items| items.len());
        CheckResult::pass(Check::SearchRooms, outcome.duration_ms)
            .with_detail(format!("Found {found} rooms for '{needle}'"))
    } else {
        CheckResult::fail(
            Check::SearchRooms,
            outcome.duration_ms,
            format!(
                "Status: {}, Response: {}",
                outcome.status,
                outcome.body.summary()
            ),
        )
    }
}
