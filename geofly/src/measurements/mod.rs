// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
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

//! Units and conversion constants.
//!
//! Lengths are in meters, heights in meters above mean sea level, speeds in
//! meters per second and angles in degrees unless noted otherwise.

pub mod constants;

use constants::METER_PER_SECONDS_IN_KNOTS;

/// Converts a speed in meters per second to knots.
pub fn mps_to_kt(mps: f64) -> f64 {
    mps * METER_PER_SECONDS_IN_KNOTS
}

/// Converts a speed in meters per second to kilometers per hour.
pub fn mps_to_kmh(mps: f64) -> f64 {
    mps * constants::SECONDS_PER_HOUR / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speeds() {
        assert!((mps_to_kmh(10.0) - 36.0).abs() < 1e-9);
        assert!((mps_to_kt(1.0) - 1.943844).abs() < 1e-9);
    }
}
