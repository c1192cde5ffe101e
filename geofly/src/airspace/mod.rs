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

//! Airspaces read from OpenAir files.
//!
//! The airspace model itself is defined by the [`openair`] crate. This module
//! renders the geometries into polygons and indexes them.

mod index;
mod render;

pub use index::AirspaceIndex;
pub use openair::{Airspace, AirspaceClass, Altitude, Geometry, PolygonSegment, VerticalDistance};
pub use render::{to_polygon, ARC_POINTS_PER_QUADRANT};

/// Returns the rendered polygon of the airspace or `None` if it has no
/// geometry.
pub fn polygon(airspace: &Airspace) -> Option<geo::Polygon<f64>> {
    airspace.geometry.as_ref().map(to_polygon)
}
