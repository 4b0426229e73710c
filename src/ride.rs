//! Ride offers as delivered by the ride-listing endpoint.
//!
//! Field names follow the wire format (snake_case keys, RFC 3339
//! timestamps). Fetching the records is left to the caller.

use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::camera::{self, CameraPosition};
use crate::geo::Coordinate;
use crate::polyline;
use crate::traits::Stop;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaypointType {
    PickUp,
    DropOff,
}

impl WaypointType {
    /// Label shown next to the stop on the route screen.
    pub fn display_name(&self) -> &'static str {
        match self {
            WaypointType::PickUp => "Pick up",
            WaypointType::DropOff => "Drop off",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub address: String,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }
}

/// A stop along a ride. Identity is the `id` alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Waypoint {
    pub id: i64,
    pub location: Location,
    pub waypoint_type: WaypointType,
}

impl PartialEq for Waypoint {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Waypoint {}

impl Hash for Waypoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Stop for Waypoint {
    fn kind(&self) -> WaypointType {
        self.waypoint_type
    }

    fn coordinate(&self) -> Coordinate {
        self.location.coordinate()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ride {
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub estimated_earnings_cents: i64,
    pub estimated_ride_miles: f64,
    pub estimated_ride_minutes: i64,
    pub commute_ride_miles: f64,
    pub commute_ride_minutes: i64,
    /// Desirability of the offer; higher is better.
    pub score: f64,
    pub ordered_waypoints: Vec<Waypoint>,
    pub overview_polyline: String,
    #[serde(default)]
    pub trip_uuid: Option<String>,
    #[serde(default)]
    pub uuid: Option<String>,
}

impl Ride {
    /// Prefers the trip identifier over the offer identifier.
    pub fn id(&self) -> Option<&str> {
        self.trip_uuid.as_deref().or(self.uuid.as_deref())
    }

    /// First pickup in route order.
    pub fn start_waypoint(&self) -> Option<&Waypoint> {
        self.ordered_waypoints
            .iter()
            .find(|w| w.waypoint_type == WaypointType::PickUp)
    }

    /// Last drop-off in route order.
    pub fn end_waypoint(&self) -> Option<&Waypoint> {
        self.ordered_waypoints
            .iter()
            .rev()
            .find(|w| w.waypoint_type == WaypointType::DropOff)
    }

    pub fn start_address(&self) -> Option<&str> {
        self.start_waypoint().map(|w| w.location.address.as_str())
    }

    pub fn end_address(&self) -> Option<&str> {
        self.end_waypoint().map(|w| w.location.address.as_str())
    }

    /// Estimated earnings in dollars.
    pub fn estimated_earnings(&self) -> f64 {
        self.estimated_earnings_cents as f64 / 100.0
    }

    /// Earnings as US currency text, e.g. `$15.00`.
    pub fn formatted_earnings(&self) -> String {
        let cents = self.estimated_earnings_cents.unsigned_abs();
        let sign = if self.estimated_earnings_cents < 0 { "-" } else { "" };
        format!("{}${}.{:02}", sign, cents / 100, cents % 100)
    }

    /// Score text that always keeps a fractional part, e.g. `8.0`.
    pub fn score_text(&self) -> String {
        format!("{:?}", self.score)
    }

    /// Decoded overview geometry.
    pub fn route_coordinates(&self) -> Vec<Coordinate> {
        polyline::decode(&self.overview_polyline)
    }

    /// Initial camera over the ride's pickup and drop-off.
    pub fn camera_position(&self) -> CameraPosition {
        camera::frame(&self.ordered_waypoints)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub current_page: u32,
    pub page_size: u32,
    #[serde(default)]
    pub next_page: Option<u32>,
    pub total_pages: u32,
}

impl Pagination {
    pub fn has_next(&self) -> bool {
        self.next_page.is_some()
    }
}

/// One page of the ride-listing endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RidesResponse {
    pub rides: Vec<Ride>,
    pub pagination: Pagination,
}
