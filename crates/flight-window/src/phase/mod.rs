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

//! Flight phase labels for the segment table.
//!
//! This is the demo heuristic from the original window view, not a real
//! flight-phase detector: phases come from fixed percentage bands of
//! the sample count, with ground samples at either end relabeled as
//! taxi. Altitude only matters for the taxi scan.

use serde::{Deserialize, Serialize};

/// Phase of flight assigned to one progress sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlightPhase {
    TaxiDeparture,
    Climb,
    Cruise,
    Descent,
    TaxiArrival,
}

impl std::fmt::Display for FlightPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::TaxiDeparture => "TAXI_DEPARTURE",
            Self::Climb => "CLIMB",
            Self::Cruise => "CRUISE",
            Self::Descent => "DESCENT",
            Self::TaxiArrival => "TAXI_ARRIVAL",
        };
        f.write_str(label)
    }
}

/// Label each altitude sample with a flight phase.
///
/// With N samples, climb ends at round(0.2 N) and cruise runs through
/// round(0.8 N); descent follows. Contiguous samples at or below zero
/// altitude at either end override those bands as taxi-out/taxi-in,
/// and the very first sample is always taxi-out regardless of its
/// altitude. Empty input returns an empty vector.
#[must_use]
pub fn classify_phases(altitudes: &[f64]) -> Vec<FlightPhase> {
    if altitudes.is_empty() {
        return Vec::new();
    }

    let n = altitudes.len();
    let climb_end = (n as f64 * 0.2).round() as usize;
    let cruise_end = (n as f64 * 0.8).round() as usize;

    // First airborne sample from each end; everything outside is taxi.
    let surface_takeoff = altitudes.iter().position(|a| *a > 0.0).unwrap_or(n);
    let surface_landing = altitudes.iter().rposition(|a| *a > 0.0);

    let mut phases = vec![FlightPhase::TaxiDeparture; n];
    for (i, phase) in phases.iter_mut().enumerate().skip(1) {
        *phase = if i < surface_takeoff {
            FlightPhase::TaxiDeparture
        } else if surface_landing.is_some_and(|last| i > last) {
            FlightPhase::TaxiArrival
        } else if i < climb_end {
            FlightPhase::Climb
        } else if i <= cruise_end {
            FlightPhase::Cruise
        } else {
            FlightPhase::Descent
        };
    }

    phases
}
