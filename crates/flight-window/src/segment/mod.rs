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

//! Per-progress flight segments.
//!
//! A [`FlightSegment`] is one row of the window-view table: the
//! interpolated position plus everything the rendering layer needs for
//! that progress step (altitude, speed, clock time, phase, viewports
//! and fitted zooms). Segments are ephemeral; the whole set is
//! recomputed whenever the progress source changes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;
use crate::phase::FlightPhase;
use crate::viewport::{horizon_bounds, window_bounds, Viewport, WindowSide};
use crate::zoom::{fit_bounds_zoom, ZoomRange};

/// Pixel size of the map container the zoom estimate must fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowPx {
    pub width: u32,
    pub height: u32,
}

impl Default for WindowPx {
    fn default() -> Self {
        // Map container size of the original window page.
        Self {
            width: 600,
            height: 400,
        }
    }
}

/// Caller-supplied policy for the segment pipeline: how big the map
/// container is, how far the window views swing off the track, and
/// which zoom clamp applies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentParams {
    /// Pixel viewport for the window maps.
    pub window_px: WindowPx,
    /// Unsigned lateral window offset from the track, in degrees.
    /// Left and right views use -offset and +offset respectively.
    pub window_offset_deg: f64,
    /// Zoom clamp for the window maps.
    pub zoom_range: ZoomRange,
}

impl Default for SegmentParams {
    fn default() -> Self {
        Self {
            window_px: WindowPx::default(),
            window_offset_deg: 30.0,
            zoom_range: ZoomRange::FULL,
        }
    }
}

/// One row of the per-progress flight table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlightSegment {
    /// Progress index: percent for simulated flights, sample index for
    /// recorded tracks.
    pub percent: u32,
    /// Position along the route.
    pub position: GeoPoint,
    /// Altitude in feet.
    pub altitude_feet: i32,
    /// Ground speed in km/h.
    pub speed_kmh: i32,
    /// Minutes since departure.
    pub elapsed_minutes: i64,
    /// Wall-clock time of this sample.
    pub clock_time: DateTime<Utc>,
    /// Phase label for this sample.
    pub phase: FlightPhase,
    /// Straight-down horizon bounds for the overview map.
    pub horizon: Viewport,
    /// Left cabin-window bounds.
    pub window_left: Viewport,
    /// Right cabin-window bounds.
    pub window_right: Viewport,
    /// Fitted zoom for the left window.
    pub zoom_left: u8,
    /// Fitted zoom for the right window.
    pub zoom_right: u8,
}

/// Viewports and zooms for one sample, shared by the simulated and
/// recorded-track pipelines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SegmentViews {
    pub horizon: Viewport,
    pub window_left: Viewport,
    pub window_right: Viewport,
    pub zoom_left: u8,
    pub zoom_right: u8,
}

impl SegmentParams {
    pub(crate) fn views(&self, position: GeoPoint, altitude_m: f64, track_deg: f64) -> SegmentViews {
        let left_offset = WindowSide::Left.signed_offset_deg(self.window_offset_deg);
        let right_offset = WindowSide::Right.signed_offset_deg(self.window_offset_deg);

        let window_left = window_bounds(position, altitude_m, track_deg, left_offset);
        let window_right = window_bounds(position, altitude_m, track_deg, right_offset);

        SegmentViews {
            horizon: horizon_bounds(position, altitude_m),
            zoom_left: fit_bounds_zoom(
                &window_left,
                self.window_px.width,
                self.window_px.height,
                self.zoom_range,
            ),
            zoom_right: fit_bounds_zoom(
                &window_right,
                self.window_px.width,
                self.window_px.height,
                self.zoom_range,
            ),
            window_left,
            window_right,
        }
    }
}

/// Segment matching a slider position, falling back to the first
/// segment when no exact percent matches.
#[must_use]
pub fn current_segment(segments: &[FlightSegment], percent: u32) -> Option<&FlightSegment> {
    segments
        .iter()
        .find(|s| s.percent == percent)
        .or_else(|| segments.first())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_views_zoom_within_range() {
        let params = SegmentParams {
            zoom_range: ZoomRange::new(8, 15),
            ..Default::default()
        };
        let position = GeoPoint::new(44.0, 12.0).unwrap();

        for altitude_m in [0.0, 500.0, 5_000.0, 10_668.0] {
            let views = params.views(position, altitude_m, 135.0);
            assert!(views.zoom_left >= 8 && views.zoom_left <= 15);
            assert!(views.zoom_right >= 8 && views.zoom_right <= 15);
        }
    }

    #[test]
    fn test_views_windows_differ() {
        let params = SegmentParams::default();
        let position = GeoPoint::new(44.0, 12.0).unwrap();
        let views = params.views(position, 10_668.0, 135.0);
        assert!(views.window_left != views.window_right);
    }
}
