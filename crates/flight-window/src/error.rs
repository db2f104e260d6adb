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

use thiserror::Error;

/// Errors rejected at the crate boundary.
///
/// Interior math is total: once inputs pass validation, every function
/// returns a value rather than failing.
#[derive(Debug, Error)]
pub enum GeoError {
    #[error("latitude out of range [-90, 90]: {0}")]
    LatitudeOutOfRange(f64),

    #[error("longitude out of range [-180, 180]: {0}")]
    LongitudeOutOfRange(f64),

    #[error("non-finite value for {0}")]
    NotFinite(&'static str),

    #[error("track point has an unrepresentable timestamp: {0}")]
    InvalidTimestamp(i64),

    #[error(
        "simulated endpoints drifted from the route \
         (start off by {start_error_deg:.4} deg, end off by {end_error_deg:.4} deg)"
    )]
    EndpointMismatch {
        start_error_deg: f64,
        end_error_deg: f64,
    },
}
