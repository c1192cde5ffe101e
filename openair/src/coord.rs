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

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Coordinate in decimal degrees.
///
/// The coordinate (0, 0) is used as "unset" and is never treated as a real
/// position. See [`Coord::is_valid`].
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coord {
    /// Latitude in the range from -90° (south) to 90° (north).
    pub latitude: f64,

    /// Longitude, positive to the east. Not range checked.
    pub longitude: f64,
}

impl Coord {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns `false` if both latitude and longitude are exactly 0.
    pub fn is_valid(&self) -> bool {
        !(self.latitude == 0.0 && self.longitude == 0.0)
    }
}

impl FromStr for Coord {
    type Err = Error;

    /// Parses a coordinate like `52:23:00 N 005:50:00 E`.
    ///
    /// Each component is either `DD`, `DD:MM.mmm` (decimal minutes) or
    /// `DD:MM:SS.sss` (decimal seconds) followed by the hemisphere. Spaces
    /// between the numbers and the hemisphere are optional.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidCoordinate {
            value: s.trim().to_string(),
        };

        let compact: String = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_ascii_uppercase();

        if !compact.is_ascii() {
            return Err(invalid());
        }

        let split = compact.find(['N', 'S']).ok_or_else(invalid)?;
        let (lat, rest) = compact.split_at(split);
        let lat_sign = if rest.starts_with('S') { -1.0 } else { 1.0 };

        let rest = &rest[1..];
        let (lon, hem) = rest.split_at(rest.len().checked_sub(1).ok_or_else(invalid)?);
        let lon_sign = match hem {
            "E" => 1.0,
            "W" => -1.0,
            _ => return Err(invalid()),
        };

        let latitude = lat_sign * parse_component(lat).ok_or_else(invalid)?;
        let longitude = lon_sign * parse_component(lon).ok_or_else(invalid)?;

        if !(-90.0..=90.0).contains(&latitude) {
            return Err(invalid());
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({0}, {1})", self.latitude, self.longitude)
    }
}

/// Converts `DD`, `DD:MM.mmm` or `DD:MM:SS.sss` to decimal degrees.
fn parse_component(s: &str) -> Option<f64> {
    let parts: Vec<&str> = s.split(':').collect();

    match parts.as_slice() {
        [deg] => decimal(deg),
        [deg, min] => {
            let min = decimal(min).filter(|min| *min < 60.0)?;
            Some(integer(deg)? + min / 60.0)
        }
        [deg, min, sec] => {
            let min = integer(min).filter(|min| *min < 60.0)?;
            let sec = decimal(sec).filter(|sec| *sec < 60.0)?;
            Some(integer(deg)? + min / 60.0 + sec / 3600.0)
        }
        _ => None,
    }
}

fn integer(s: &str) -> Option<f64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    s.parse::<u32>().ok().map(f64::from)
}

fn decimal(s: &str) -> Option<f64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return None;
    }

    s.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_coord(s: &str, latitude: f64, longitude: f64) {
        let coord: Coord = s.parse().expect("coordinate should parse");
        assert!(
            (coord.latitude - latitude).abs() < 1e-6,
            "{s}: latitude {} != {latitude}",
            coord.latitude
        );
        assert!(
            (coord.longitude - longitude).abs() < 1e-6,
            "{s}: longitude {} != {longitude}",
            coord.longitude
        );
    }

    #[test]
    fn degrees_minutes_seconds() {
        assert_coord(
            "52:23:00 N 005:50:00 E",
            52.0 + 23.0 / 60.0,
            5.0 + 50.0 / 60.0,
        );
        assert_coord(
            "46:51:44N 009:19:42E",
            46.86222222222222,
            9.328333333333333,
        );
    }

    #[test]
    fn decimal_minutes() {
        assert_coord(
            "52:21.30 S 005:52.30 W",
            -(52.0 + 21.30 / 60.0),
            -(5.0 + 52.30 / 60.0),
        );
    }

    #[test]
    fn decimal_seconds() {
        assert_coord(
            "52:21:30.123 S 005:52:30.456 W",
            -(52.0 + 21.0 / 60.0 + 30.123 / 3600.0),
            -(5.0 + 52.0 / 60.0 + 30.456 / 3600.0),
        );
    }

    #[test]
    fn invalid() {
        for s in [
            "",
            "52:23:00 Q 005:50:00 R",
            "52:23:00 N 005:50:00",
            "52:61:00 N 005:50:00 E",
            "91:00:00 N 005:50:00 E",
            "52:23:00:01 N 005:50:00 E",
            "N E",
        ] {
            assert!(s.parse::<Coord>().is_err(), "{s} should be invalid");
        }
    }

    #[test]
    fn null_island_is_invalid() {
        assert!(!Coord::new(0.0, 0.0).is_valid());
        assert!(Coord::new(0.0, 1.0).is_valid());
        assert!(Coord::new(-0.5, 0.0).is_valid());
    }
}
