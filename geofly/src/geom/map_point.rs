// SPDX-License-Identifier: Apache-2.0
// Copyright 2024, 2026 Joe Pearson
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

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A point on the map with an optional altitude in meters.
///
/// The point (0, 0) marks an unset position and is never treated as a real
/// location. See [`MapPoint::is_valid`].
#[derive(Copy, Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct MapPoint {
    /// Latitude in the range from -90° (south) to 90° (north).
    pub latitude: f64,

    /// Longitude in the range from -180° (west) to 180° (east).
    pub longitude: f64,

    /// Altitude above mean sea level in meters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub altitude: Option<f64>,
}

impl MapPoint {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude: None,
        }
    }

    pub const fn with_altitude(latitude: f64, longitude: f64, altitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude: Some(altitude),
        }
    }

    /// Returns `false` for the unset point where latitude and longitude are
    /// both exactly 0.
    pub fn is_valid(&self) -> bool {
        !(self.latitude == 0.0 && self.longitude == 0.0)
    }

    /// Formats the point as degrees, minutes and seconds e.g.
    /// `47°40'35.2"N 11°52'15.6"E`.
    pub fn to_dms_string(&self) -> String {
        format!(
            "{} {}",
            dms(self.latitude, 'N', 'S'),
            dms(self.longitude, 'E', 'W')
        )
    }
}

fn dms(value: f64, positive: char, negative: char) -> String {
    let hemisphere = if value < 0.0 { negative } else { positive };
    let tenths = (value.abs() * 36_000.0).round() as u64;

    let degrees = tenths / 36_000;
    let minutes = (tenths % 36_000) / 600;
    let seconds = (tenths % 600) as f64 / 10.0;

    format!("{degrees}°{minutes:02}'{seconds:04.1}\"{hemisphere}")
}

impl From<openair::Coord> for MapPoint {
    fn from(c: openair::Coord) -> Self {
        Self::new(c.latitude, c.longitude)
    }
}

impl From<MapPoint> for geo::Coord<f64> {
    fn from(p: MapPoint) -> Self {
        geo::Coord {
            x: p.longitude,
            y: p.latitude,
        }
    }
}

impl From<MapPoint> for geo::Point<f64> {
    fn from(p: MapPoint) -> Self {
        geo::Point::new(p.longitude, p.latitude)
    }
}

impl From<geo::Coord<f64>> for MapPoint {
    fn from(c: geo::Coord<f64>) -> Self {
        Self::new(c.y, c.x)
    }
}

impl FromStr for MapPoint {
    type Err = Error;

    /// Parses any text accepted by [`parse_coordinate`].
    ///
    /// [`parse_coordinate`]: crate::geom::parse_coordinate
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::parse_coordinate(s).ok_or_else(|| Error::InvalidCoordinate(s.to_string()))
    }
}

impl Display for MapPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.altitude {
            Some(altitude) => write!(
                f,
                "({0}, {1}, {2} m)",
                self.latitude, self.longitude, altitude
            ),
            None => write!(f, "({0}, {1})", self.latitude, self.longitude),
        }
    }
}
