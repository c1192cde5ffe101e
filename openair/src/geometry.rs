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

use crate::constants::NAUTICAL_MILE_IN_METER;
use crate::coord::Coord;
use crate::error::Error;

/// Direction in which an arc is drawn.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" => Ok(Self::Clockwise),
            "-" => Ok(Self::CounterClockwise),
            other => Err(Error::InvalidDirection {
                value: other.to_string(),
            }),
        }
    }
}

/// A part of a polygon boundary.
///
/// The segments of a polygon are kept in the order in which they are defined.
/// Arcs are drawn from the end of the previous segment.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PolygonSegment {
    /// A single boundary point (`DP`).
    Point(Coord),

    /// An arc around `center` from `start` to `end` (`DB`).
    Arc {
        center: Coord,
        start: Coord,
        end: Coord,
        direction: Direction,
    },

    /// An arc around `center` with a radius in meters between two true
    /// bearings in degrees (`DA`).
    ArcSegment {
        center: Coord,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        direction: Direction,
    },
}

impl PolygonSegment {
    /// Parses the data of a `DA` command, `radius, start angle, end angle`
    /// with the radius in nautical miles.
    pub fn arc_segment(data: &str, center: Coord, direction: Direction) -> Result<Self, Error> {
        let invalid = || Error::InvalidArc {
            command: "DA",
            value: data.trim().to_string(),
        };

        let values = data
            .split(',')
            .map(|v| v.trim().parse::<f64>().ok().filter(|v| v.is_finite()))
            .collect::<Option<Vec<f64>>>()
            .ok_or_else(invalid)?;

        match values.as_slice() {
            [radius, start_angle, end_angle] if *radius > 0.0 => Ok(Self::ArcSegment {
                center,
                radius: radius_in_meters(*radius)?,
                start_angle: *start_angle,
                end_angle: *end_angle,
                direction,
            }),
            _ => Err(invalid()),
        }
    }

    /// Parses the data of a `DB` command, two coordinates separated by a
    /// comma.
    pub fn arc(data: &str, center: Coord, direction: Direction) -> Result<Self, Error> {
        let invalid = || Error::InvalidArc {
            command: "DB",
            value: data.trim().to_string(),
        };

        let Some((start, end)) = data.split_once(',') else {
            return Err(invalid());
        };

        Ok(Self::Arc {
            center,
            start: start.parse()?,
            end: end.parse()?,
            direction,
        })
    }
}

/// The horizontal shape of an airspace.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Geometry {
    /// A circle with its radius in meters.
    Circle { center: Coord, radius: f64 },

    /// A polygon of ordered segments. It may be open or closed.
    Polygon { segments: Vec<PolygonSegment> },
}

impl Geometry {
    fn kind(&self) -> &'static str {
        match self {
            Self::Circle { .. } => "circle",
            Self::Polygon { .. } => "polygon",
        }
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Circle { radius, .. } => write!(f, "Circle[r={radius}m]"),
            Self::Polygon { segments } => write!(f, "Polygon[{}]", segments.len()),
        }
    }
}

/// Accumulates the geometry of one airspace.
///
/// The first geometry kind that is added wins. Adding the other kind later is
/// rejected and the geometry stays unchanged.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct GeometryBuilder {
    geometry: Option<Geometry>,
}

impl GeometryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a segment to the polygon.
    pub fn add_segment(&mut self, segment: PolygonSegment) -> Result<(), Error> {
        match &mut self.geometry {
            None => {
                self.geometry = Some(Geometry::Polygon {
                    segments: vec![segment],
                });
                Ok(())
            }
            Some(Geometry::Polygon { segments }) => {
                segments.push(segment);
                Ok(())
            }
            Some(circle @ Geometry::Circle { .. }) => Err(Error::GeometryConflict {
                existing: circle.kind(),
                rejected: "polygon segment",
            }),
        }
    }

    /// Sets the geometry to a circle with the radius in nautical miles.
    pub fn set_circle(&mut self, center: Coord, radius_nm: f64) -> Result<(), Error> {
        match &self.geometry {
            None => {
                self.geometry = Some(Geometry::Circle {
                    center,
                    radius: radius_in_meters(radius_nm)?,
                });
                Ok(())
            }
            Some(existing) => Err(Error::GeometryConflict {
                existing: existing.kind(),
                rejected: "circle",
            }),
        }
    }

    pub fn build(self) -> Option<Geometry> {
        self.geometry
    }
}

/// Converts a radius in nautical miles to meters. The result must be finite
/// and positive.
fn radius_in_meters(radius_nm: f64) -> Result<f64, Error> {
    let radius = radius_nm * NAUTICAL_MILE_IN_METER;

    if radius.is_finite() && radius > 0.0 {
        Ok(radius)
    } else {
        Err(Error::InvalidRadius {
            value: format!("{radius_nm:e}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CENTER: Coord = Coord::new(52.0, 13.0);

    #[test]
    fn direction_from_str() {
        assert_eq!("+".parse::<Direction>(), Ok(Direction::Clockwise));
        assert_eq!(" - ".parse::<Direction>(), Ok(Direction::CounterClockwise));
        assert!("x".parse::<Direction>().is_err());
    }

    #[test]
    fn arc_segment() {
        assert_eq!(
            PolygonSegment::arc_segment(" 10 ,  270 ,290", CENTER, Direction::Clockwise),
            Ok(PolygonSegment::ArcSegment {
                center: CENTER,
                radius: 10.0 * 1852.0,
                start_angle: 270.0,
                end_angle: 290.0,
                direction: Direction::Clockwise,
            })
        );

        assert!(PolygonSegment::arc_segment("10,270", CENTER, Direction::Clockwise).is_err());
        assert!(PolygonSegment::arc_segment("10,270,290,", CENTER, Direction::Clockwise).is_err());
        assert!(PolygonSegment::arc_segment("-1,0,90", CENTER, Direction::Clockwise).is_err());
        assert_eq!(
            PolygonSegment::arc_segment("1e306,0,90", CENTER, Direction::Clockwise),
            Err(Error::InvalidRadius {
                value: "1e306".to_string()
            })
        );
    }

    #[test]
    fn arc() {
        let segment = PolygonSegment::arc(
            "52:10:00 N 013:00:00 E, 52:00:00 N 013:10:00 E",
            CENTER,
            Direction::CounterClockwise,
        )
        .expect("arc should parse");

        match segment {
            PolygonSegment::Arc {
                start,
                end,
                direction,
                ..
            } => {
                assert!((start.latitude - (52.0 + 10.0 / 60.0)).abs() < 1e-9);
                assert!((end.longitude - (13.0 + 10.0 / 60.0)).abs() < 1e-9);
                assert_eq!(direction, Direction::CounterClockwise);
            }
            other => panic!("unexpected {other:?}"),
        }

        assert!(PolygonSegment::arc("52:10:00 N 013:00:00 E", CENTER, Direction::Clockwise).is_err());
    }

    #[test]
    fn circle_rejects_segments() {
        let mut builder = GeometryBuilder::new();
        builder.set_circle(CENTER, 5.0).unwrap();

        assert!(builder.add_segment(PolygonSegment::Point(CENTER)).is_err());
        assert!(builder.set_circle(CENTER, 2.0).is_err());
        assert_eq!(
            builder.build(),
            Some(Geometry::Circle {
                center: CENTER,
                radius: 5.0 * 1852.0
            })
        );
    }

    #[test]
    fn polygon_rejects_circle() {
        let mut builder = GeometryBuilder::new();
        builder.add_segment(PolygonSegment::Point(CENTER)).unwrap();
        builder
            .add_segment(PolygonSegment::Point(Coord::new(52.1, 13.1)))
            .unwrap();

        assert_eq!(
            builder.set_circle(CENTER, 5.0),
            Err(Error::GeometryConflict {
                existing: "polygon",
                rejected: "circle"
            })
        );

        match builder.build() {
            Some(Geometry::Polygon { segments }) => assert_eq!(segments.len(), 2),
            other => panic!("unexpected {other:?}"),
        }
    }
}
