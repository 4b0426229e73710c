//! Initial camera framing for a ride's route.
//!
//! The viewport covers the first pickup and the last drop-off of a ride,
//! padded on both axes and never narrower than a minimum span. Without
//! both stops the map is left to choose its own viewport.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::geo::{Region, Span};
use crate::ride::WaypointType;
use crate::traits::Stop;

/// Padding and minimum span used when framing a ride.
#[derive(Debug, Clone)]
pub struct FramingOptions {
    /// Multiplier applied to the raw distance between the two stops.
    pub padding_factor: f64,
    /// Smallest span, in degrees, on either axis.
    pub min_span: f64,
}

impl Default for FramingOptions {
    fn default() -> Self {
        Self {
            padding_factor: 1.5, // 50% beyond the stops
            min_span: 0.01,
        }
    }
}

/// Where the map camera starts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CameraPosition {
    /// Let the map pick its default viewport.
    Automatic,
    Region(Region),
}

impl CameraPosition {
    pub fn region(&self) -> Option<&Region> {
        match self {
            CameraPosition::Region(region) => Some(region),
            CameraPosition::Automatic => None,
        }
    }

    pub fn is_automatic(&self) -> bool {
        matches!(self, CameraPosition::Automatic)
    }
}

/// Frames `waypoints` with [`FramingOptions::default`].
pub fn frame<S: Stop>(waypoints: &[S]) -> CameraPosition {
    frame_with(waypoints, &FramingOptions::default())
}

/// Frames the first pickup and the last drop-off in `waypoints`.
///
/// Returns [`CameraPosition::Automatic`] when either stop is missing.
pub fn frame_with<S: Stop>(waypoints: &[S], options: &FramingOptions) -> CameraPosition {
    let start = waypoints.iter().find(|w| w.kind() == WaypointType::PickUp);
    let end = waypoints.iter().rev().find(|w| w.kind() == WaypointType::DropOff);

    let (Some(start), Some(end)) = (start, end) else {
        trace!(
            waypoints = waypoints.len(),
            has_pickup = start.is_some(),
            has_dropoff = end.is_some(),
            "no pickup/drop-off pair, using automatic camera"
        );
        return CameraPosition::Automatic;
    };

    let start = start.coordinate();
    let end = end.coordinate();

    let lat_delta = (start.lat - end.lat).abs() * options.padding_factor;
    let lng_delta = (start.lng - end.lng).abs() * options.padding_factor;

    CameraPosition::Region(Region::new(
        start.midpoint(&end),
        Span::new(lat_delta.max(options.min_span), lng_delta.max(options.min_span)),
    ))
}
