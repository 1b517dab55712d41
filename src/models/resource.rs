//! Resource kinds and the discovered-resource cache
//!
//! Listing checks store what they fetched here; later checks read it to
//! synthesize dependent payloads. Lifetime is one run of the suite.

#![allow(dead_code)]

use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// Resource collections exposed by the hotel API
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Rooms,
    Reservations,
    Bookings,
}

impl ResourceKind {
    /// Endpoint path segment under /api/
    pub fn endpoint(&self) -> &'static str {
        match self {
            ResourceKind::Rooms => "rooms",
            ResourceKind::Reservations => "reserve",
            ResourceKind::Bookings => "book",
        }
    }

    /// Plural display name used in detail strings
    pub fn name(&self) -> &'static str {
        match self {
            ResourceKind::Rooms => "rooms",
            ResourceKind::Reservations => "reservations",
            ResourceKind::Bookings => "bookings",
        }
    }

    pub fn all() -> Vec<ResourceKind> {
        vec![
            ResourceKind::Rooms,
            ResourceKind::Reservations,
            ResourceKind::Bookings,
        ]
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Most recently fetched listing per resource kind
///
/// Overwritten on each successful listing GET. Not a general-purpose store:
/// the records are kept as raw JSON values because only a couple of fields
/// are ever read back.
#[derive(Clone, Debug, Default)]
pub struct ResourceCache {
    records: HashMap<ResourceKind, Vec<Value>>,
}

impl ResourceCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the cached listing for a resource kind
    pub fn store(&mut self, kind: ResourceKind, records: Vec<Value>) {
        self.records.insert(kind, records);
    }

    /// Cached records for a kind, empty if never fetched
    pub fn get(&self, kind: ResourceKind) -> &[Value] {
        self.records.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn rooms(&self) -> &[Value] {
        self.get(ResourceKind::Rooms)
    }

    /// First cached room whose roomStatus is AVAILABLE
    pub fn first_available_room(&self) -> Option<&Value> {
        self.rooms()
            .iter()
            .find(|room| room_status(room) == Some("AVAILABLE"))
    }
}

/// roomNo field of a room record
pub fn room_no(room: &Value) -> Option<&str> {
    room.get("roomNo").and_then(Value::as_str)
}

/// roomStatus field of a room record
pub fn room_status(room: &Value) -> Option<&str> {
    room.get("roomStatus").and_then(Value::as_str)
}

/// Backend identifier of a room record
pub fn room_id(room: &Value) -> Option<&str> {
    room.get("_id").and_then(Value::as_str)
}
