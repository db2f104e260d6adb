// Copyright 2025 Chris Custine
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Geodesic math: points, haversine distance, great-circle
//! interpolation and initial bearing.
//!
//! Every function in this crate uses the same spherical Earth model
//! ([`EARTH_RADIUS_KM`]). Inputs are validated once at construction
//! ([`GeoPoint::new`]); the math itself is total and never panics.

use serde::{Deserialize, Serialize};

use crate::error::GeoError;

// =============================================================================
// Constants
// =============================================================================

/// Mean Earth radius in kilometers. The single radius used crate-wide.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = EARTH_RADIUS_KM * 1000.0;

/// Meters per degree of latitude.
pub const METERS_PER_DEG_LAT: f64 = 111_320.0;

/// Conversion factor: feet to meters.
pub const FEET_TO_METERS: f64 = 0.3048;

/// Conversion factor: meters to feet.
pub const METERS_TO_FEET: f64 = 3.28084;

/// Conversion factor: meters per second to kilometers per hour.
pub const MPS_TO_KMH: f64 = 3.6;

/// Central angle below which two points are treated as coincident.
const MIN_ANGULAR_DISTANCE: f64 = 1e-12;

// =============================================================================
// GeoPoint
// =============================================================================

/// A geographic point in degrees. Immutable value type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees, [-90, 90].
    pub latitude: f64,
    /// Longitude in degrees, [-180, 180].
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a validated point.
    ///
    /// Rejects NaN/infinite and out-of-range coordinates so the rest of
    /// the pipeline never has to re-check them.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, GeoError> {
        if !latitude.is_finite() {
            return Err(GeoError::NotFinite("latitude"));
        }
        if !longitude.is_finite() {
            return Err(GeoError::NotFinite("longitude"));
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(GeoError::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(GeoError::LongitudeOutOfRange(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

// =============================================================================
// Geodesic functions
// =============================================================================

/// Haversine central angle between two points, in radians.
#[must_use]
pub fn angular_distance(from: GeoPoint, to: GeoPoint) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let delta_lat = (to.latitude - from.latitude).to_radians();
    let delta_lon = (to.longitude - from.longitude).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    2.0 * a.sqrt().asin()
}

/// Great-circle distance between two points in kilometers.
#[must_use]
pub fn haversine_distance_km(from: GeoPoint, to: GeoPoint) -> f64 {
    EARTH_RADIUS_KM * angular_distance(from, to)
}

/// Interpolate along the great circle between `from` and `to`.
///
/// `fraction` 0.0 reproduces `from` and 1.0 reproduces `to` (within
/// floating-point tolerance of the radian round trip). Coincident
/// endpoints return `from` unchanged, which avoids the division by
/// sin(0) in the slerp weights.
///
/// Antipodal endpoints have no unique great circle; the result is
/// numerically unstable there and callers should not rely on it.
#[must_use]
pub fn interpolate(from: GeoPoint, to: GeoPoint, fraction: f64) -> GeoPoint {
    let delta = angular_distance(from, to);
    if delta < MIN_ANGULAR_DISTANCE {
        return from;
    }

    let lat1 = from.latitude.to_radians();
    let lon1 = from.longitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let lon2 = to.longitude.to_radians();

    // Spherical linear interpolation: weighted sum of the endpoint
    // unit vectors, converted back to lat/lon.
    let a = ((1.0 - fraction) * delta).sin() / delta.sin();
    let b = (fraction * delta).sin() / delta.sin();

    let x = a * lat1.cos() * lon1.cos() + b * lat2.cos() * lon2.cos();
    let y = a * lat1.cos() * lon1.sin() + b * lat2.cos() * lon2.sin();
    let z = a * lat1.sin() + b * lat2.sin();

    GeoPoint {
        latitude: z.atan2((x * x + y * y).sqrt()).to_degrees(),
        longitude: y.atan2(x).to_degrees(),
    }
}

/// Initial bearing (forward azimuth) from one point toward another.
///
/// Returns degrees in [0, 360), clockwise from north. For coincident
/// points the atan2 convention yields 0; that degenerate case is
/// documented rather than special-cased.
#[must_use]
pub fn initial_bearing(from: GeoPoint, to: GeoPoint) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let delta_lon = (to.longitude - from.longitude).to_radians();

    let y = delta_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * delta_lon.cos();

    (y.atan2(x).to_degrees() + 360.0) % 360.0
}
