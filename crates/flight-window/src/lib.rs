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

//! Flight position and cabin-window viewport geometry.
//!
//! This library animates a flight along its great-circle route and
//! computes everything the "through my window" view needs at each
//! progress step. The layers can be used independently or composed:
//!
//! - **Geo layer**: great-circle interpolation, haversine distance and
//!   initial bearing on a single spherical Earth model
//! - **Viewport layer**: horizon distance and the left/right
//!   cabin-window ("hublot") ground bounds
//! - **Zoom layer**: Web-Mercator fit-bounds zoom estimation with a
//!   caller-supplied clamp range
//! - **Phase layer**: demo flight-phase labels (taxi/climb/cruise/
//!   descent/taxi)
//! - **Pipelines**: per-percent segment tables from either a simulated
//!   route or a recorded track
//!
//! Everything is a pure function of its inputs: no I/O, no shared
//! mutable state, nothing retained between calls. Callers on a UI tick
//! recompute the derived values every frame.
//!
//! # Quick Start
//!
//! Simulate a flight and read the state at 25% progress:
//!
//! ```
//! use chrono::Utc;
//! use flight_window::{
//!     current_segment, simulate_segments, FlightProfile, GeoPoint, Route, SegmentParams,
//! };
//!
//! let route = Route {
//!     departure: GeoPoint::new(46.2381, 6.1080)?, // Geneva
//!     arrival: GeoPoint::new(37.9364, 23.9445)?,  // Athens
//! };
//! let segments = simulate_segments(
//!     &route,
//!     &FlightProfile::default(),
//!     Utc::now(),
//!     &SegmentParams::default(),
//! )?;
//!
//! let segment = current_segment(&segments, 25).unwrap();
//! println!("{} at {} ft ({})", segment.position, segment.altitude_feet, segment.phase);
//! # Ok::<(), flight_window::GeoError>(())
//! ```
//!
//! # Using Individual Layers
//!
//! Each layer is a plain function and can be called on its own:
//!
//! ```
//! use flight_window::{fit_bounds_zoom, horizon_distance_m, window_bounds, GeoPoint, ZoomRange};
//!
//! let position = GeoPoint::new(44.4, 12.5)?;
//! let horizon_m = horizon_distance_m(10_668.0);
//! let left = window_bounds(position, 10_668.0, 135.0, -30.0);
//! let zoom = fit_bounds_zoom(&left, 600, 400, ZoomRange::new(8, 15));
//! assert!(horizon_m > 300_000.0 && zoom >= 8);
//! # Ok::<(), flight_window::GeoError>(())
//! ```

pub mod error;
pub mod geo;
pub mod phase;
pub mod segment;
pub mod simulate;
pub mod track;
pub mod viewport;
pub mod zoom;

pub use error::GeoError;
pub use geo::{
    angular_distance, haversine_distance_km, initial_bearing, interpolate, GeoPoint,
    EARTH_RADIUS_KM, EARTH_RADIUS_M, FEET_TO_METERS, METERS_PER_DEG_LAT, METERS_TO_FEET,
    MPS_TO_KMH,
};
pub use phase::{classify_phases, FlightPhase};
pub use segment::{current_segment, FlightSegment, SegmentParams, WindowPx};
pub use simulate::{simulate_segments, FlightProfile, Route};
pub use track::{segments_from_track, TrackPoint};
pub use viewport::{horizon_bounds, horizon_distance_m, window_bounds, Viewport, WindowSide};
pub use zoom::{fit_bounds_zoom, ZoomRange, MAX_WEB_MERCATOR_ZOOM};
