//! State behind the route detail map.

use chrono::{DateTime, TimeZone, Utc};
use rayon::prelude::*;
use std::fmt::Display;
use tracing::debug;

use crate::camera::{self, CameraPosition};
use crate::geo::Coordinate;
use crate::polyline;
use crate::ride::{Ride, Waypoint, WaypointType};

#[derive(Debug, Clone)]
pub struct RouteView {
    overview_polyline: String,
    waypoints: Vec<Waypoint>,
    starts_at: DateTime<Utc>,
    ends_at: DateTime<Utc>,
    position: CameraPosition,
    selected: Option<i64>,
}

impl RouteView {
    /// The camera position is framed once, here.
    pub fn new(
        overview_polyline: impl Into<String>,
        waypoints: Vec<Waypoint>,
        starts_at: DateTime<Utc>,
        ends_at: DateTime<Utc>,
    ) -> Self {
        let position = camera::frame(&waypoints);
        Self {
            overview_polyline: overview_polyline.into(),
            waypoints,
            starts_at,
            ends_at,
            position,
            selected: None,
        }
    }

    pub fn from_ride(ride: &Ride) -> Self {
        Self::new(
            ride.overview_polyline.clone(),
            ride.ordered_waypoints.clone(),
            ride.starts_at,
            ride.ends_at,
        )
    }

    pub fn overview_polyline(&self) -> &str {
        &self.overview_polyline
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    pub fn starts_at(&self) -> DateTime<Utc> {
        self.starts_at
    }

    pub fn ends_at(&self) -> DateTime<Utc> {
        self.ends_at
    }

    pub fn position(&self) -> &CameraPosition {
        &self.position
    }

    /// Path to draw on the map.
    pub fn coordinates(&self) -> Vec<Coordinate> {
        polyline::decode(&self.overview_polyline)
    }

    /// Selects the waypoint with `id`. Unknown ids leave the selection as is.
    pub fn select(&mut self, id: i64) -> bool {
        if self.waypoints.iter().any(|w| w.id == id) {
            self.selected = Some(id);
            true
        } else {
            false
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&Waypoint> {
        let id = self.selected?;
        self.waypoints.iter().find(|w| w.id == id)
    }

    /// Drop-offs show the end time; pickups and no selection show the start.
    pub fn selected_time(&self) -> DateTime<Utc> {
        match self.selected().map(|w| w.waypoint_type) {
            Some(WaypointType::DropOff) => self.ends_at,
            Some(WaypointType::PickUp) | None => self.starts_at,
        }
    }

    pub fn selected_schedule<Tz>(&self, tz: &Tz) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        format_schedule(self.selected_time(), tz)
    }
}

/// Renders e.g. `Friday, March 15\n9:30 AM (UTC)` in the given zone.
pub fn format_schedule<Tz>(time: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    time.with_timezone(tz)
        .format("%A, %B %-d\n%-I:%M %p (%Z)")
        .to_string()
}

/// Builds route views for a page of rides, in input order.
pub fn prepare_routes(rides: &[Ride]) -> Vec<RouteView> {
    debug!(rides = rides.len(), "preparing route views");
    rides.par_iter().map(RouteView::from_ride).collect()
}
