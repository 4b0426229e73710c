//! Core domain traits for route framing.
//!
//! Kept minimal so callers can frame their own stop records without
//! converting them into [`Waypoint`](crate::ride::Waypoint) first.

use crate::geo::Coordinate;
use crate::ride::WaypointType;

/// A stop along a ride that the camera framer can place on the map.
pub trait Stop {
    /// Whether the stop is a pickup or a drop-off.
    fn kind(&self) -> WaypointType;

    /// Location of the stop.
    fn coordinate(&self) -> Coordinate;
}

impl<T: Stop + ?Sized> Stop for &T {
    fn kind(&self) -> WaypointType {
        (**self).kind()
    }

    fn coordinate(&self) -> Coordinate {
        (**self).coordinate()
    }
}
