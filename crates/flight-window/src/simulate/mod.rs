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

//! Demo flight simulator.
//!
//! Generates the 101-row segment table (one row per percent of
//! progress) for a great-circle route, using the trapezoid
//! altitude/speed profile of the original demo flight. The output
//! feeds the same rendering path as recorded tracks.

use chrono::{DateTime, Duration, Utc};
use log::warn;

use crate::error::GeoError;
use crate::geo::{
    haversine_distance_km, initial_bearing, interpolate, GeoPoint, FEET_TO_METERS,
};
use crate::phase::classify_phases;
use crate::segment::{FlightSegment, SegmentParams};

/// Tolerance for the endpoint sanity check, in degrees.
const ENDPOINT_TOLERANCE_DEG: f64 = 0.05;

// Profile ramp fractions from the original demo: altitude ramps over
// the first/last 15% of the flight, speed over the first/last 10%.
const ALTITUDE_RAMP: f64 = 0.15;
const SPEED_RAMP: f64 = 0.10;

/// Great-circle route between two airports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Route {
    pub departure: GeoPoint,
    pub arrival: GeoPoint,
}

impl Route {
    /// Initial bearing from departure to arrival, in degrees.
    #[must_use]
    pub fn initial_bearing_deg(&self) -> f64 {
        initial_bearing(self.departure, self.arrival)
    }

    /// Great-circle length of the route in kilometers.
    #[must_use]
    pub fn distance_km(&self) -> f64 {
        haversine_distance_km(self.departure, self.arrival)
    }
}

/// Altitude/speed profile for a simulated flight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightProfile {
    /// Cruise altitude in feet.
    pub cruise_altitude_ft: f64,
    /// Cruise ground speed in km/h.
    pub cruise_speed_kmh: f64,
    /// Block time in minutes.
    pub duration_min: f64,
}

impl Default for FlightProfile {
    fn default() -> Self {
        // A320 short-haul demo profile: FL350, 850 km/h, 3h15.
        Self {
            cruise_altitude_ft: 35_000.0,
            cruise_speed_kmh: 850.0,
            duration_min: 195.0,
        }
    }
}

impl FlightProfile {
    /// Altitude in feet at progress fraction `f`.
    #[must_use]
    pub fn altitude_ft_at(&self, f: f64) -> f64 {
        if f < ALTITUDE_RAMP {
            self.cruise_altitude_ft * (f / ALTITUDE_RAMP)
        } else if f <= 1.0 - ALTITUDE_RAMP {
            self.cruise_altitude_ft
        } else {
            self.cruise_altitude_ft * ((1.0 - f) / ALTITUDE_RAMP)
        }
    }

    /// Ground speed in km/h at progress fraction `f`.
    #[must_use]
    pub fn speed_kmh_at(&self, f: f64) -> f64 {
        if f < SPEED_RAMP {
            self.cruise_speed_kmh * (f / SPEED_RAMP)
        } else if f <= 1.0 - SPEED_RAMP {
            self.cruise_speed_kmh
        } else {
            self.cruise_speed_kmh * ((1.0 - f) / SPEED_RAMP)
        }
    }
}

/// Simulate a flight and return its 101 per-percent segments.
///
/// Positions follow the great circle between the route endpoints; a
/// single whole-route track bearing orients the window views, as the
/// original demo did. After generation the first and last samples are
/// checked against the route endpoints (0.05 degree tolerance); drift
/// beyond that means the interpolation went wrong and the whole table
/// is rejected.
pub fn simulate_segments(
    route: &Route,
    profile: &FlightProfile,
    departure_time: DateTime<Utc>,
    params: &SegmentParams,
) -> Result<Vec<FlightSegment>, GeoError> {
    let track_deg = route.initial_bearing_deg();
    let mut segments = Vec::with_capacity(101);
    let mut altitudes = Vec::with_capacity(101);

    for percent in 0..=100_u32 {
        let f = f64::from(percent) / 100.0;
        let position = interpolate(route.departure, route.arrival, f);
        let altitude_ft = profile.altitude_ft_at(f);
        let altitude_m = altitude_ft * FEET_TO_METERS;
        let elapsed_min = profile.duration_min * f;
        let clock_time = departure_time + Duration::seconds((elapsed_min * 60.0).round() as i64);
        let views = params.views(position, altitude_m, track_deg);

        altitudes.push(altitude_ft);
        segments.push(FlightSegment {
            percent,
            position,
            altitude_feet: altitude_ft.round() as i32,
            speed_kmh: profile.speed_kmh_at(f).round() as i32,
            elapsed_minutes: elapsed_min.round() as i64,
            clock_time,
            phase: crate::phase::FlightPhase::TaxiDeparture,
            horizon: views.horizon,
            window_left: views.window_left,
            window_right: views.window_right,
            zoom_left: views.zoom_left,
            zoom_right: views.zoom_right,
        });
    }

    for (segment, phase) in segments.iter_mut().zip(classify_phases(&altitudes)) {
        segment.phase = phase;
    }

    check_endpoints(route, &segments)?;
    Ok(segments)
}

/// Reject the table if the first/last samples drifted off the route.
fn check_endpoints(route: &Route, segments: &[FlightSegment]) -> Result<(), GeoError> {
    let first = segments[0].position;
    let last = segments[segments.len() - 1].position;

    let start_error_deg = (first.latitude - route.departure.latitude)
        .abs()
        .max((first.longitude - route.departure.longitude).abs());
    let end_error_deg = (last.latitude - route.arrival.latitude)
        .abs()
        .max((last.longitude - route.arrival.longitude).abs());

    if start_error_deg > ENDPOINT_TOLERANCE_DEG || end_error_deg > ENDPOINT_TOLERANCE_DEG {
        warn!(
            "discarding simulated segments: endpoints off route by {start_error_deg:.4} / {end_error_deg:.4} deg"
        );
        return Err(GeoError::EndpointMismatch {
            start_error_deg,
            end_error_deg,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phase::FlightPhase;
    use crate::segment::current_segment;
    use crate::zoom::ZoomRange;

    fn geneva_athens() -> Route {
        Route {
            departure: GeoPoint::new(46.2381, 6.1080).unwrap(),
            arrival: GeoPoint::new(37.9364, 23.9445).unwrap(),
        }
    }

    #[test]
    fn test_route_distance_and_bearing() {
        let route = geneva_athens();
        // GVA-ATH is roughly 1,650 km heading south-east.
        let distance = route.distance_km();
        assert!((distance - 1_650.0).abs() < 100.0, "distance {distance}");
        let bearing = route.initial_bearing_deg();
        assert!(bearing > 110.0 && bearing < 140.0, "bearing {bearing}");
    }

    #[test]
    fn test_profile_trapezoid() {
        let profile = FlightProfile::default();
        assert!(profile.altitude_ft_at(0.0).abs() < f64::EPSILON);
        assert!((profile.altitude_ft_at(0.5) - 35_000.0).abs() < f64::EPSILON);
        assert!(profile.altitude_ft_at(1.0).abs() < 1e-9);
        assert!(profile.speed_kmh_at(0.05) < 850.0);
        assert!((profile.speed_kmh_at(0.5) - 850.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_simulate_produces_101_segments() {
        let segments = simulate_segments(
            &geneva_athens(),
            &FlightProfile::default(),
            Utc::now(),
            &SegmentParams::default(),
        )
        .unwrap();

        assert_eq!(segments.len(), 101);
        assert_eq!(segments[0].percent, 0);
        assert_eq!(segments[100].percent, 100);
    }

    #[test]
    fn test_simulate_endpoints_match_route() {
        let route = geneva_athens();
        let segments = simulate_segments(
            &route,
            &FlightProfile::default(),
            Utc::now(),
            &SegmentParams::default(),
        )
        .unwrap();

        let first = segments[0].position;
        let last = segments[100].position;
        assert!((first.latitude - route.departure.latitude).abs() < 0.05);
        assert!((first.longitude - route.departure.longitude).abs() < 0.05);
        assert!((last.latitude - route.arrival.latitude).abs() < 0.05);
        assert!((last.longitude - route.arrival.longitude).abs() < 0.05);
    }

    #[test]
    fn test_simulate_phases_and_clock() {
        let departure = DateTime::parse_from_rfc3339("2025-06-08T08:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let segments = simulate_segments(
            &geneva_athens(),
            &FlightProfile::default(),
            departure,
            &SegmentParams::default(),
        )
        .unwrap();

        assert_eq!(segments[0].phase, FlightPhase::TaxiDeparture);
        assert_eq!(segments[50].phase, FlightPhase::Cruise);
        assert_eq!(segments[0].clock_time, departure);
        // 195 minutes block time
        assert_eq!(segments[100].elapsed_minutes, 195);
        assert_eq!(
            (segments[100].clock_time - departure).num_minutes(),
            195
        );
    }

    #[test]
    fn test_simulate_zooms_clamped() {
        let params = SegmentParams {
            zoom_range: ZoomRange::new(8, 15),
            ..Default::default()
        };
        let segments = simulate_segments(
            &geneva_athens(),
            &FlightProfile::default(),
            Utc::now(),
            &params,
        )
        .unwrap();

        for segment in &segments {
            assert!(segment.zoom_left >= 8 && segment.zoom_left <= 15);
            assert!(segment.zoom_right >= 8 && segment.zoom_right <= 15);
        }
    }

    #[test]
    fn test_current_segment_lookup() {
        let segments = simulate_segments(
            &geneva_athens(),
            &FlightProfile::default(),
            Utc::now(),
            &SegmentParams::default(),
        )
        .unwrap();

        assert_eq!(current_segment(&segments, 29).unwrap().percent, 29);
        // Out-of-table percent falls back to the first segment.
        assert_eq!(current_segment(&segments, 250).unwrap().percent, 0);
        assert!(current_segment(&[], 10).is_none());
    }
}
