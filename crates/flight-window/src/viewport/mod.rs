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

//! Horizon distance and cabin-window ("hublot") viewport bounds.
//!
//! Given the aircraft position and altitude, these functions compute
//! the ground extent a passenger can see: straight down for the
//! overview map, or displaced to one side of the track for the
//! left/right window views. Viewports have no lifecycle of their own;
//! they are recomputed from scratch on every progress update.

use serde::{Deserialize, Serialize};

use crate::geo::{GeoPoint, EARTH_RADIUS_KM, METERS_PER_DEG_LAT};

/// Which side of the cabin a window faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowSide {
    Left,
    Right,
}

impl WindowSide {
    /// Signed lateral offset from the aircraft track toward this
    /// window, given the unsigned offset magnitude in degrees.
    #[must_use]
    pub fn signed_offset_deg(self, magnitude_deg: f64) -> f64 {
        match self {
            Self::Left => -magnitude_deg,
            Self::Right => magnitude_deg,
        }
    }
}

/// Geographic bounding box, south-west and north-east corners.
///
/// Corners are not clamped to the valid coordinate ranges: close to the
/// poles or the antimeridian they may exceed them, matching what the
/// consuming map layer accepts for fit-bounds input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub south_west: GeoPoint,
    pub north_east: GeoPoint,
}

impl Viewport {
    /// Geometric center of the box.
    #[must_use]
    pub fn center(&self) -> GeoPoint {
        GeoPoint {
            latitude: (self.south_west.latitude + self.north_east.latitude) / 2.0,
            longitude: (self.south_west.longitude + self.north_east.longitude) / 2.0,
        }
    }
}

/// Distance to the horizon in meters for an observer at `altitude_m`.
///
/// d = sqrt((R + h)^2 - R^2) on the mean-radius sphere. Negative or
/// non-finite altitudes clamp to sea level, so the result is always a
/// finite non-negative distance.
#[must_use]
pub fn horizon_distance_m(altitude_m: f64) -> f64 {
    let h_km = if altitude_m.is_finite() && altitude_m > 0.0 {
        altitude_m / 1000.0
    } else {
        0.0
    };
    let d_km = ((EARTH_RADIUS_KM + h_km).powi(2) - EARTH_RADIUS_KM.powi(2)).sqrt();
    d_km * 1000.0
}

/// Bounds covering one horizon distance in every direction from
/// `center`, for the straight-down overview map.
///
/// The horizon distance is converted to a latitude delta with the
/// fixed meters-per-degree constant and to a longitude delta scaled by
/// cos(latitude).
#[must_use]
pub fn horizon_bounds(center: GeoPoint, altitude_m: f64) -> Viewport {
    let d = horizon_distance_m(altitude_m);
    let d_lat_deg = d / METERS_PER_DEG_LAT;
    let meters_per_deg_lon = METERS_PER_DEG_LAT * center.latitude.to_radians().cos();
    let d_lon_deg = d / meters_per_deg_lon;

    Viewport {
        south_west: GeoPoint {
            latitude: center.latitude - d_lat_deg,
            longitude: center.longitude - d_lon_deg,
        },
        north_east: GeoPoint {
            latitude: center.latitude + d_lat_deg,
            longitude: center.longitude + d_lon_deg,
        },
    }
}

/// Bounds for a cabin-window view.
///
/// The viewport center is displaced half the horizon distance along
/// `track_deg + offset_deg`, then a half-sized box is built around the
/// displaced center. `track_deg` is caller input: the actual track
/// bearing for live data, or any artificial heading a demo view wants.
#[must_use]
pub fn window_bounds(
    center: GeoPoint,
    altitude_m: f64,
    track_deg: f64,
    offset_deg: f64,
) -> Viewport {
    let d = horizon_distance_m(altitude_m);
    let direction = (track_deg + offset_deg).to_radians();
    let d_center = d / 2.0;

    let meters_per_deg_lon = METERS_PER_DEG_LAT * center.latitude.to_radians().cos();
    let window_lat = center.latitude + (d_center / METERS_PER_DEG_LAT) * direction.cos();
    let window_lon = center.longitude + (d_center / meters_per_deg_lon) * direction.sin();

    let d_lat_deg = d / METERS_PER_DEG_LAT / 2.0;
    let d_lon_deg = d / (2.0 * meters_per_deg_lon);

    Viewport {
        south_west: GeoPoint {
            latitude: window_lat - d_lat_deg,
            longitude: window_lon - d_lon_deg,
        },
        north_east: GeoPoint {
            latitude: window_lat + d_lat_deg,
            longitude: window_lon + d_lon_deg,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::FEET_TO_METERS;

    #[test]
    fn test_horizon_distance_at_sea_level() {
        assert!(horizon_distance_m(0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_horizon_distance_cruise_altitude() {
        // 35,000 ft => about 368 km to the horizon
        let d = horizon_distance_m(35_000.0 * FEET_TO_METERS);
        assert!((d - 368_000.0).abs() < 3_000.0, "distance {d}");
    }

    #[test]
    fn test_horizon_distance_strictly_increasing() {
        let mut previous = horizon_distance_m(0.0);
        for altitude in [10.0, 100.0, 1_000.0, 5_000.0, 12_000.0] {
            let d = horizon_distance_m(altitude);
            assert!(d > previous);
            previous = d;
        }
    }

    #[test]
    fn test_horizon_distance_clamps_invalid_altitude() {
        assert!(horizon_distance_m(-500.0).abs() < f64::EPSILON);
        assert!(horizon_distance_m(f64::NAN).abs() < f64::EPSILON);
    }

    #[test]
    fn test_horizon_bounds_contains_center() {
        let center = GeoPoint::new(46.2381, 6.1080).unwrap();
        let bounds = horizon_bounds(center, 10_000.0);
        assert!(bounds.south_west.latitude < center.latitude);
        assert!(bounds.north_east.latitude > center.latitude);
        assert!(bounds.south_west.longitude < center.longitude);
        assert!(bounds.north_east.longitude > center.longitude);

        let box_center = bounds.center();
        assert!((box_center.latitude - center.latitude).abs() < 1e-9);
        assert!((box_center.longitude - center.longitude).abs() < 1e-9);
    }

    #[test]
    fn test_window_bounds_displaced_from_track() {
        let center = GeoPoint::new(44.0, 12.0).unwrap();
        let track = 135.0;
        let left = window_bounds(center, 10_668.0, track, WindowSide::Left.signed_offset_deg(30.0));
        let right = window_bounds(
            center,
            10_668.0,
            track,
            WindowSide::Right.signed_offset_deg(30.0),
        );

        // The two windows look at different ground, on opposite sides
        // of the track.
        assert!(left.center().latitude != right.center().latitude);
        assert!(left.center().longitude != right.center().longitude);

        // Heading 135 +/- 30 both point south-east-ish, so both centers
        // sit south of the aircraft.
        assert!(left.center().latitude < center.latitude);
        assert!(right.center().latitude < center.latitude);
    }

    #[test]
    fn test_window_bounds_half_sized() {
        let center = GeoPoint::new(44.0, 12.0).unwrap();
        let overview = horizon_bounds(center, 10_000.0);
        let window = window_bounds(center, 10_000.0, 90.0, 30.0);

        let overview_span = overview.north_east.latitude - overview.south_west.latitude;
        let window_span = window.north_east.latitude - window.south_west.latitude;
        assert!((window_span - overview_span / 2.0).abs() < 1e-9);
    }
}
