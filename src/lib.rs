//! hsd-route core
//!
//! Map-side building blocks for ride pickup offers: decoding route
//! geometries and framing the initial camera over a ride.

pub mod geo;
pub mod traits;
pub mod polyline;
pub mod camera;
pub mod ride;
pub mod route;
