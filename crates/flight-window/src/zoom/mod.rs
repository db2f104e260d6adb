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

//! Web-Mercator "fit bounds" zoom estimation.
//!
//! Computes the integer tile-pyramid zoom level at which a geographic
//! bounding box fits inside a pixel viewport. Different call sites want
//! different clamp ranges (wide overview map vs. close-up window view),
//! so the clamp is a caller parameter rather than a constant.

use serde::{Deserialize, Serialize};

use crate::viewport::Viewport;

/// Pixel size of the zoom-0 world tile.
const WORLD_TILE_PX: f64 = 256.0;

/// Ceiling of the Web-Mercator tile pyramid used by the map layer.
pub const MAX_WEB_MERCATOR_ZOOM: u8 = 18;

/// Inclusive zoom clamp supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoomRange {
    pub min: u8,
    pub max: u8,
}

impl ZoomRange {
    /// The full tile pyramid, [0, 18].
    pub const FULL: Self = Self {
        min: 0,
        max: MAX_WEB_MERCATOR_ZOOM,
    };

    /// Build a clamp range, swapping the ends if given backwards and
    /// capping at the pyramid ceiling.
    #[must_use]
    pub fn new(min: u8, max: u8) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            min: min.min(MAX_WEB_MERCATOR_ZOOM),
            max: max.min(MAX_WEB_MERCATOR_ZOOM),
        }
    }
}

impl Default for ZoomRange {
    fn default() -> Self {
        Self::FULL
    }
}

/// Latitude converted to Mercator y, in radians of world height.
fn mercator_lat(lat_deg: f64) -> f64 {
    let sin = lat_deg.to_radians().sin();
    ((1.0 + sin) / (1.0 - sin)).ln() / 2.0
}

/// Zoom at which `fraction` of the world fits into `map_px` pixels.
fn axis_zoom(map_px: u32, fraction: f64) -> f64 {
    (f64::from(map_px) / WORLD_TILE_PX / fraction).log2().floor()
}

/// Estimate the zoom level that fits `bounds` into a viewport of
/// `width_px` by `height_px` pixels, clamped to `range`.
///
/// Longitude spans crossing the antimeridian (negative east minus west
/// difference) wrap by 360. Degenerate zero-extent bounds clamp to
/// `range.max`; the function is total for any finite bounds.
#[must_use]
pub fn fit_bounds_zoom(bounds: &Viewport, width_px: u32, height_px: u32, range: ZoomRange) -> u8 {
    let lat_fraction = (mercator_lat(bounds.north_east.latitude)
        - mercator_lat(bounds.south_west.latitude))
        / std::f64::consts::PI;

    let lon_diff = bounds.north_east.longitude - bounds.south_west.longitude;
    let lon_span = if lon_diff < 0.0 {
        lon_diff + 360.0
    } else {
        lon_diff
    };
    let lon_fraction = lon_span / 360.0;

    let zoom = axis_zoom(height_px, lat_fraction).min(axis_zoom(width_px, lon_fraction));
    if zoom.is_nan() {
        return range.max;
    }
    zoom.clamp(f64::from(range.min), f64::from(range.max)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::GeoPoint;
    use crate::viewport::horizon_bounds;

    fn bounds(south: f64, west: f64, north: f64, east: f64) -> Viewport {
        Viewport {
            south_west: GeoPoint {
                latitude: south,
                longitude: west,
            },
            north_east: GeoPoint {
                latitude: north,
                longitude: east,
            },
        }
    }

    #[test]
    fn test_whole_world_is_zoom_zero() {
        let world = bounds(-85.0, -180.0, 85.0, 180.0);
        assert_eq!(fit_bounds_zoom(&world, 600, 400, ZoomRange::FULL), 0);
    }

    #[test]
    fn test_small_bounds_zoom_in() {
        // Roughly a city block: should land deep in the pyramid.
        let block = bounds(46.2000, 6.1000, 46.2010, 6.1010);
        let zoom = fit_bounds_zoom(&block, 600, 400, ZoomRange::FULL);
        assert!(zoom >= 15, "zoom {zoom}");
        assert!(zoom <= MAX_WEB_MERCATOR_ZOOM);
    }

    #[test]
    fn test_zoom_respects_caller_clamp() {
        let world = bounds(-85.0, -180.0, 85.0, 180.0);
        let block = bounds(46.2000, 6.1000, 46.2010, 6.1010);
        let range = ZoomRange::new(8, 15);

        assert_eq!(fit_bounds_zoom(&world, 600, 400, range), 8);
        assert_eq!(fit_bounds_zoom(&block, 600, 400, range), 15);
    }

    #[test]
    fn test_degenerate_bounds_clamp_to_max() {
        let point = bounds(46.2, 6.1, 46.2, 6.1);
        assert_eq!(
            fit_bounds_zoom(&point, 600, 400, ZoomRange::FULL),
            MAX_WEB_MERCATOR_ZOOM
        );
    }

    #[test]
    fn test_antimeridian_wraparound() {
        // Fiji-ish box spanning the date line: east < west in raw degrees.
        let fiji = bounds(-19.0, 177.0, -16.0, -178.0);
        let zoom = fit_bounds_zoom(&fiji, 600, 400, ZoomRange::FULL);
        assert!(zoom >= 5 && zoom <= 8, "zoom {zoom}");
    }

    #[test]
    fn test_cruise_horizon_bounds_plausible_zoom() {
        let center = GeoPoint::new(44.0, 12.0).unwrap();
        let cruise = horizon_bounds(center, 10_668.0);
        let zoom = fit_bounds_zoom(&cruise, 600, 400, ZoomRange::FULL);
        // Two horizon-widths is several hundred km, a regional view.
        assert!(zoom >= 4 && zoom <= 8, "zoom {zoom}");
    }

    #[test]
    fn test_range_new_normalizes() {
        let range = ZoomRange::new(15, 8);
        assert_eq!(range.min, 8);
        assert_eq!(range.max, 15);
        assert_eq!(ZoomRange::new(0, 30).max, MAX_WEB_MERCATOR_ZOOM);
    }
}
