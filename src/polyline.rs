//! Polyline representation and codec for route geometries.
//!
//! Rides carry their overview geometry in Google's encoded polyline
//! format (precision 1e5). [`decode`] turns that string into coordinates
//! for rendering and never fails: truncated input yields fewer points.
//! [`try_decode`] applies the same algorithm but reports malformed input.
//!
//! See <https://developers.google.com/maps/documentation/utilities/polylinealgorithm>.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::geo::Coordinate;

/// Scale between degrees and the encoded integer units.
const PRECISION: f64 = 1e5;

/// Every encoded byte is offset by this value to land in printable ASCII.
const CHAR_OFFSET: i32 = 63;

/// Highest byte a well-formed polyline may contain (`'~'`).
const MAX_CHAR: u8 = 126;

const CHUNK_BITS: u32 = 5;
const CHUNK_MASK: i32 = 0x1f;
const CONTINUATION_BIT: i32 = 0x20;

/// A polyline representing a route geometry as decoded coordinates.
///
/// Encoding to/from the compact string format happens at the boundary,
/// through [`Polyline::decode`] and [`Polyline::encode`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<Coordinate>,
}

impl Polyline {
    /// Creates a new Polyline from decoded coordinate points.
    pub fn new(points: Vec<Coordinate>) -> Self {
        Self { points }
    }

    /// Leniently decodes an encoded polyline string. See [`decode`].
    pub fn decode(encoded: &str) -> Self {
        Self::new(decode(encoded))
    }

    /// Encodes the points back into the compact string format.
    pub fn encode(&self) -> String {
        encode(&self.points)
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    /// Consumes the polyline and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<Coordinate> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl FromStr for Polyline {
    type Err = PolylineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        try_decode(s)
    }
}

impl fmt::Display for Polyline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

/// Malformed input reported by [`try_decode`].
///
/// Every variant carries the byte index at which the problem was found.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolylineError {
    #[error("byte {byte:#04x} at index {index} is outside the polyline alphabet")]
    InvalidCharacter { index: usize, byte: u8 },
    #[error("value starting at index {index} ends without a terminating chunk")]
    UnterminatedValue { index: usize },
    #[error("latitude ending at index {index} has no matching longitude")]
    MissingLongitude { index: usize },
    #[error("value starting at index {index} does not fit in 32 bits")]
    Overflow { index: usize },
}

/// Decodes an encoded polyline into coordinates.
///
/// Total over every input. A trailing latitude with no longitude after it
/// is dropped, and a value cut off mid-way contributes whatever bits were
/// read. Accumulators are signed 32-bit and wrap instead of overflowing.
pub fn decode(polyline: &str) -> Vec<Coordinate> {
    let bytes = polyline.as_bytes();
    let mut index = 0;
    let mut lat: i32 = 0;
    let mut lng: i32 = 0;
    let mut points = Vec::new();

    while index < bytes.len() {
        lat = lat.wrapping_add(read_value(bytes, &mut index));

        if index >= bytes.len() {
            debug!(
                decoded = points.len(),
                length = bytes.len(),
                "dropping trailing latitude without longitude"
            );
            break;
        }

        lng = lng.wrapping_add(read_value(bytes, &mut index));
        points.push(to_coordinate(lat, lng));
    }

    points
}

/// Decodes an encoded polyline, rejecting anything [`decode`] would have
/// to guess about.
///
/// For well-formed input the result equals [`Polyline::decode`].
pub fn try_decode(polyline: &str) -> Result<Polyline, PolylineError> {
    let bytes = polyline.as_bytes();
    let mut index = 0;
    let mut lat: i32 = 0;
    let mut lng: i32 = 0;
    let mut points = Vec::new();

    while index < bytes.len() {
        lat = lat.wrapping_add(read_value_strict(bytes, &mut index)?);

        if index >= bytes.len() {
            return Err(PolylineError::MissingLongitude { index });
        }

        lng = lng.wrapping_add(read_value_strict(bytes, &mut index)?);
        points.push(to_coordinate(lat, lng));
    }

    Ok(Polyline::new(points))
}

/// Encodes coordinates with the standard algorithm at precision 1e5.
///
/// Points that are not finite or lie outside the valid latitude/longitude
/// range are skipped.
pub fn encode(points: &[Coordinate]) -> String {
    let mut encoded = String::with_capacity(points.len() * 8);
    let mut prev_lat = 0i64;
    let mut prev_lng = 0i64;

    for point in points {
        if !is_encodable(point) {
            debug!(lat = point.lat, lng = point.lng, "skipping coordinate outside encodable range");
            continue;
        }

        let lat = (point.lat * PRECISION).round() as i64;
        let lng = (point.lng * PRECISION).round() as i64;

        write_value(lat.wrapping_sub(prev_lat), &mut encoded);
        write_value(lng.wrapping_sub(prev_lng), &mut encoded);

        prev_lat = lat;
        prev_lng = lng;
    }

    encoded
}

fn is_encodable(point: &Coordinate) -> bool {
    (-90.0..=90.0).contains(&point.lat) && (-180.0..=180.0).contains(&point.lng)
}

fn to_coordinate(lat: i32, lng: i32) -> Coordinate {
    Coordinate::new(f64::from(lat) / PRECISION, f64::from(lng) / PRECISION)
}

/// Reads one signed delta, advancing `index` past every byte consumed.
fn read_value(bytes: &[u8], index: &mut usize) -> i32 {
    let mut result: i32 = 0;
    let mut shift: u32 = 0;

    while let Some(&byte) = bytes.get(*index) {
        let value = i32::from(byte) - CHAR_OFFSET;
        *index += 1;
        // Chunks past bit 31 are discarded.
        result |= (value & CHUNK_MASK).checked_shl(shift).unwrap_or(0);
        shift = shift.saturating_add(CHUNK_BITS);
        if value < CONTINUATION_BIT {
            break;
        }
    }

    unfold_sign(result)
}

fn read_value_strict(bytes: &[u8], index: &mut usize) -> Result<i32, PolylineError> {
    let start = *index;
    let mut result: i32 = 0;
    let mut shift: u32 = 0;

    loop {
        let Some(&byte) = bytes.get(*index) else {
            return Err(PolylineError::UnterminatedValue { index: start });
        };
        if !(CHAR_OFFSET as u8..=MAX_CHAR).contains(&byte) {
            return Err(PolylineError::InvalidCharacter {
                index: *index,
                byte,
            });
        }

        let value = i32::from(byte) - CHAR_OFFSET;
        let chunk = value & CHUNK_MASK;
        if shift >= 32 || (chunk << shift) as u32 >> shift != chunk as u32 {
            return Err(PolylineError::Overflow { index: start });
        }

        *index += 1;
        result |= chunk << shift;
        shift += CHUNK_BITS;
        if value < CONTINUATION_BIT {
            return Ok(unfold_sign(result));
        }
    }
}

/// Undoes the zig-zag fold: odd values are negative.
fn unfold_sign(result: i32) -> i32 {
    if result & 1 != 0 {
        !(result >> 1)
    } else {
        result >> 1
    }
}

fn write_value(delta: i64, output: &mut String) {
    // Zig-zag fold: negative deltas become odd.
    let mut value = ((delta << 1) ^ (delta >> 63)) as u64;

    while value >= CONTINUATION_BIT as u64 {
        let chunk = (value & CHUNK_MASK as u64) as u8 | CONTINUATION_BIT as u8;
        output.push(char::from(chunk + CHAR_OFFSET as u8));
        value >>= CHUNK_BITS;
    }
    output.push(char::from(value as u8 + CHAR_OFFSET as u8));
}
