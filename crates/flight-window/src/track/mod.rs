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

//! Recorded-track pipeline.
//!
//! Turns an ordered sequence of recorded [`TrackPoint`]s (from a live
//! flight-tracking feed or a replay file) into the same
//! [`FlightSegment`] rows the simulator produces, so the rendering
//! layer does not care where the data came from.

use chrono::DateTime;
use serde::{Deserialize, Serialize};

use crate::error::GeoError;
use crate::geo::{initial_bearing, GeoPoint, METERS_TO_FEET, MPS_TO_KMH};
use crate::phase::classify_phases;
use crate::segment::{FlightSegment, SegmentParams};

/// One recorded sample of an aircraft track. Samples are expected in
/// time order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackPoint {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Altitude in meters.
    pub altitude_m: f64,
    /// Ground speed in meters per second.
    pub speed_mps: f64,
    /// Sample time as Unix epoch seconds.
    pub timestamp: i64,
}

impl TrackPoint {
    /// Validated position of this sample.
    pub fn position(&self) -> Result<GeoPoint, GeoError> {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

/// Build flight segments from a recorded track.
///
/// Each point's track bearing is taken toward its successor; the last
/// point reuses the bearing from its predecessor. Altitude converts to
/// feet, speed to km/h, and elapsed time counts from the first sample.
/// An empty track yields an empty segment list. Invalid coordinates or
/// non-finite altitude/speed values are rejected.
pub fn segments_from_track(
    points: &[TrackPoint],
    params: &SegmentParams,
) -> Result<Vec<FlightSegment>, GeoError> {
    let Some(first) = points.first() else {
        return Ok(Vec::new());
    };

    let positions: Vec<GeoPoint> = points
        .iter()
        .map(TrackPoint::position)
        .collect::<Result<_, _>>()?;

    let mut segments = Vec::with_capacity(points.len());
    for (i, point) in points.iter().enumerate() {
        if !point.altitude_m.is_finite() {
            return Err(GeoError::NotFinite("altitude_m"));
        }
        if !point.speed_mps.is_finite() {
            return Err(GeoError::NotFinite("speed_mps"));
        }

        let position = positions[i];
        let track_deg = if i + 1 < positions.len() {
            initial_bearing(position, positions[i + 1])
        } else if i > 0 {
            initial_bearing(positions[i - 1], position)
        } else {
            // Single-point track: no direction information.
            0.0
        };

        let clock_time = DateTime::from_timestamp(point.timestamp, 0)
            .ok_or(GeoError::InvalidTimestamp(point.timestamp))?;
        let views = params.views(position, point.altitude_m, track_deg);

        segments.push(FlightSegment {
            percent: i as u32,
            position,
            altitude_feet: (point.altitude_m * METERS_TO_FEET).round() as i32,
            speed_kmh: (point.speed_mps * MPS_TO_KMH).round() as i32,
            elapsed_minutes: (point.timestamp - first.timestamp) / 60,
            clock_time,
            phase: crate::phase::FlightPhase::TaxiDeparture,
            horizon: views.horizon,
            window_left: views.window_left,
            window_right: views.window_right,
            zoom_left: views.zoom_left,
            zoom_right: views.zoom_right,
        });
    }

    let altitudes: Vec<f64> = points.iter().map(|p| p.altitude_m).collect();
    for (segment, phase) in segments.iter_mut().zip(classify_phases(&altitudes)) {
        segment.phase = phase;
    }

    Ok(segments)
}
