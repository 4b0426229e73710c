//! Real downtown Los Angeles locations for ride fixtures.

use chrono::{TimeZone, Utc};

use hsd_route::ride::{Location, Ride, Waypoint, WaypointType};

/// A named place with coordinates.
#[derive(Debug, Clone, Copy)]
pub struct Place {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Place {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }
}

pub const EAST_41ST_STREET: Place = Place::new("East 41st Street, Los Angeles", 34.0089813, -118.2476647);
pub const ALAMEDA_STREET: Place = Place::new("Alameda Street, Los Angeles", 34.0252756, -118.2395896);
pub const UNION_STATION: Place = Place::new("Union Station, Los Angeles", 34.0562, -118.2365);
pub const GRAND_CENTRAL_MARKET: Place = Place::new("Grand Central Market, Los Angeles", 34.0509, -118.2489);
pub const CRYPTO_ARENA: Place = Place::new("Crypto.com Arena, Los Angeles", 34.0430, -118.2673);
pub const GRIFFITH_OBSERVATORY: Place = Place::new("Griffith Observatory, Los Angeles", 34.1184, -118.3004);

/// Road geometry from East 41st Street to Alameda Street (20 points).
pub const EAST_41ST_TO_ALAMEDA: &str =
    r"eiqnEhgvpU|A{UNcD@o@wlA[WKaL[iAYgCoA{@]YQeEkA`AuFu@SCM\sBYKCGGJI?";

/// Google's reference example: (38.5, -120.2), (40.7, -120.95), (43.252, -126.453).
pub const CANONICAL_POLYLINE: &str = "_p~iF~ps|U_ulLnnqC_mqNvxq`@";

pub fn waypoint(id: i64, kind: WaypointType, place: Place) -> Waypoint {
    Waypoint {
        id,
        location: Location {
            address: place.name.to_string(),
            lat: place.lat,
            lng: place.lng,
        },
        waypoint_type: kind,
    }
}

pub fn pickup(id: i64, place: Place) -> Waypoint {
    waypoint(id, WaypointType::PickUp, place)
}

pub fn dropoff(id: i64, place: Place) -> Waypoint {
    waypoint(id, WaypointType::DropOff, place)
}

/// Ride on 2024-03-15, 09:30 to 10:15 UTC.
pub fn ride(trip_uuid: &str, waypoints: Vec<Waypoint>, overview_polyline: &str) -> Ride {
    Ride {
        starts_at: Utc.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).unwrap(),
        ends_at: Utc.with_ymd_and_hms(2024, 3, 15, 10, 15, 0).unwrap(),
        estimated_earnings_cents: 1500,
        estimated_ride_miles: 10.5,
        estimated_ride_minutes: 30,
        commute_ride_miles: 2.5,
        commute_ride_minutes: 8,
        score: 7.5,
        ordered_waypoints: waypoints,
        overview_polyline: overview_polyline.to_string(),
        trip_uuid: Some(trip_uuid.to_string()),
        uuid: None,
    }
}

/// The East 41st Street to Alameda Street ride.
pub fn downtown_ride() -> Ride {
    ride(
        "downtown",
        vec![pickup(1, EAST_41ST_STREET), dropoff(2, ALAMEDA_STREET)],
        EAST_41ST_TO_ALAMEDA,
    )
}

/// One page of the ride listing in wire format.
pub const RIDES_PAGE_JSON: &str = r#"{
  "rides": [
    {
      "starts_at": "2024-03-15T09:30:00Z",
      "ends_at": "2024-03-15T10:15:00Z",
      "estimated_earnings_cents": 2347,
      "estimated_ride_miles": 3.2,
      "estimated_ride_minutes": 14,
      "commute_ride_miles": 1.1,
      "commute_ride_minutes": 5,
      "score": 8.25,
      "ordered_waypoints": [
        {
          "id": 11,
          "location": { "address": "East 41st Street, Los Angeles", "lat": 34.0089813, "lng": -118.2476647 },
          "waypoint_type": "pick_up"
        },
        {
          "id": 12,
          "location": { "address": "Alameda Street, Los Angeles", "lat": 34.0252756, "lng": -118.2395896 },
          "waypoint_type": "drop_off"
        }
      ],
      "overview_polyline": "eiqnEhgvpU|A{UNcD@o@wlA[WKaL[iAYgCoA{@]YQeEkA`AuFu@SCM\\sBYKCGGJI?",
      "trip_uuid": "7d9b3c1e-2f4a-4b8e-9c61-0a5e2d7f3b10",
      "uuid": "offer-1"
    },
    {
      "starts_at": "2024-03-15T11:00:00Z",
      "ends_at": "2024-03-15T11:40:00Z",
      "estimated_earnings_cents": 1810,
      "estimated_ride_miles": 4.8,
      "estimated_ride_minutes": 22,
      "commute_ride_miles": 2.0,
      "commute_ride_minutes": 9,
      "score": 6.5,
      "ordered_waypoints": [
        {
          "id": 21,
          "location": { "address": "Union Station, Los Angeles", "lat": 34.0562, "lng": -118.2365 },
          "waypoint_type": "pick_up"
        },
        {
          "id": 22,
          "location": { "address": "Grand Central Market, Los Angeles", "lat": 34.0509, "lng": -118.2489 },
          "waypoint_type": "pick_up"
        },
        {
          "id": 23,
          "location": { "address": "Crypto.com Arena, Los Angeles", "lat": 34.0430, "lng": -118.2673 },
          "waypoint_type": "drop_off"
        }
      ],
      "overview_polyline": "",
      "trip_uuid": null,
      "uuid": "offer-2"
    },
    {
      "starts_at": "2024-03-15T13:00:00Z",
      "ends_at": "2024-03-15T13:25:00Z",
      "estimated_earnings_cents": 950,
      "estimated_ride_miles": 1.4,
      "estimated_ride_minutes": 9,
      "commute_ride_miles": 0.6,
      "commute_ride_minutes": 3,
      "score": 4.0,
      "ordered_waypoints": [
        {
          "id": 31,
          "location": { "address": "Griffith Observatory, Los Angeles", "lat": 34.1184, "lng": -118.3004 },
          "waypoint_type": "pick_up"
        }
      ],
      "overview_polyline": "_p~iF~ps|U_ulLnnqC_mqN"
    }
  ],
  "pagination": {
    "current_page": 1,
    "page_size": 3,
    "next_page": 2,
    "total_pages": 4
  }
}"#;
