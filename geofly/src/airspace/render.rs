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

//! Rendering of OpenAir geometries into closed polygons.

use geo::{Coord, LineString, Polygon};
use openair::{Direction, Geometry, PolygonSegment};

use crate::MapPoint;

/// Number of points to interpolate per 90 degrees of arc.
pub const ARC_POINTS_PER_QUADRANT: usize = 6;

/// Renders the geometry as closed polygon with `x` as longitude and `y` as
/// latitude.
///
/// Segments are rendered in the order of the geometry. Arcs are interpolated
/// with [`ARC_POINTS_PER_QUADRANT`] points per 90° in their direction.
pub fn to_polygon(geometry: &Geometry) -> Polygon<f64> {
    let mut coords = match geometry {
        Geometry::Circle { center, radius } => circle((*center).into(), *radius),
        Geometry::Polygon { segments } => segments.iter().flat_map(render_segment).collect(),
    };

    if let (Some(first), Some(last)) = (coords.first(), coords.last()) {
        if first != last {
            coords.push(*first);
        }
    }

    Polygon::new(LineString::from(coords), vec![])
}

fn render_segment(segment: &PolygonSegment) -> Vec<Coord<f64>> {
    match segment {
        PolygonSegment::Point(coord) => vec![MapPoint::from(*coord).into()],
        PolygonSegment::Arc {
            center,
            start,
            end,
            direction,
        } => {
            let center = MapPoint::from(*center);
            let start = MapPoint::from(*start);
            let end = MapPoint::from(*end);

            let mut coords = interpolate_arc(
                center,
                center.distance_to(&start),
                center.course_to(&start),
                center.course_to(&end),
                *direction,
            );

            // the end may be off the radius of the start
            if let Some(last) = coords.last_mut() {
                *last = end.into();
            }
            if let Some(first) = coords.first_mut() {
                *first = start.into();
            }

            coords
        }
        PolygonSegment::ArcSegment {
            center,
            radius,
            start_angle,
            end_angle,
            direction,
        } => interpolate_arc(
            (*center).into(),
            *radius,
            *start_angle,
            *end_angle,
            *direction,
        ),
    }
}

fn circle(center: MapPoint, radius: f64) -> Vec<Coord<f64>> {
    let num_points = ARC_POINTS_PER_QUADRANT * 4;

    (0..num_points)
        .map(|i| {
            let bearing = i as f64 * 360.0 / num_points as f64;
            center.polar_offset(radius, bearing).into()
        })
        .collect()
}

/// Interpolates points along an arc including its start and end point.
fn interpolate_arc(
    center: MapPoint,
    radius: f64,
    start: f64,
    end: f64,
    direction: Direction,
) -> Vec<Coord<f64>> {
    let sweep = calculate_arc_sweep(start, end, direction);
    let num_points = ((sweep.abs() / 90.0) * ARC_POINTS_PER_QUADRANT as f64).ceil() as usize;
    let num_points = num_points.max(2);

    (0..=num_points)
        .map(|i| {
            let fraction = i as f64 / num_points as f64;
            center.polar_offset(radius, start + sweep * fraction).into()
        })
        .collect()
}

/// Calculates the signed sweep in degrees from `start` to `end`.
///
/// A clockwise sweep is positive and a counter-clockwise sweep negative. Equal
/// angles sweep the full circle.
fn calculate_arc_sweep(start: f64, end: f64, direction: Direction) -> f64 {
    let mut diff = (end - start) % 360.0;

    match direction {
        Direction::Clockwise if diff <= 0.0 => diff += 360.0,
        Direction::CounterClockwise if diff >= 0.0 => diff -= 360.0,
        _ => {}
    }

    diff
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Contains;
    use openair::Coord as OpenAirCoord;

    const CENTER: OpenAirCoord = OpenAirCoord::new(52.0, 13.0);

    #[test]
    fn arc_sweep_clockwise() {
        assert!((calculate_arc_sweep(0.0, 90.0, Direction::Clockwise) - 90.0).abs() < 1e-9);
        assert!((calculate_arc_sweep(90.0, 0.0, Direction::Clockwise) - 270.0).abs() < 1e-9);
        assert!((calculate_arc_sweep(350.0, 10.0, Direction::Clockwise) - 20.0).abs() < 1e-9);
        assert!((calculate_arc_sweep(0.0, 360.0, Direction::Clockwise) - 360.0).abs() < 1e-9);
    }

    #[test]
    fn arc_sweep_counterclockwise() {
        assert!((calculate_arc_sweep(90.0, 0.0, Direction::CounterClockwise) + 90.0).abs() < 1e-9);
        assert!((calculate_arc_sweep(0.0, 90.0, Direction::CounterClockwise) + 270.0).abs() < 1e-9);
    }

    #[test]
    fn circle_is_closed() {
        let polygon = to_polygon(&Geometry::Circle {
            center: CENTER,
            radius: 9260.0,
        });

        let exterior = polygon.exterior();
        assert_eq!(exterior.0.len(), ARC_POINTS_PER_QUADRANT * 4 + 1);
        assert!(exterior.is_closed());

        let center = MapPoint::from(CENTER);
        for coord in exterior.coords() {
            let d = center.distance_to(&MapPoint::from(*coord));
            assert!((d - 9260.0).abs() < 1e-6);
        }

        assert!(polygon.contains(&geo::Point::from(center)));
    }

    #[test]
    fn arc_segment_follows_direction() {
        let center = MapPoint::from(CENTER);

        // quarter circle from north to east closed over the center
        let geometry = Geometry::Polygon {
            segments: vec![
                PolygonSegment::Point(CENTER),
                PolygonSegment::ArcSegment {
                    center: CENTER,
                    radius: 10_000.0,
                    start_angle: 0.0,
                    end_angle: 90.0,
                    direction: Direction::Clockwise,
                },
            ],
        };

        let polygon = to_polygon(&geometry);
        let inside = center.polar_offset(5000.0, 45.0);
        let outside = center.polar_offset(5000.0, 225.0);

        assert!(polygon.contains(&geo::Point::from(inside)));
        assert!(!polygon.contains(&geo::Point::from(outside)));
        // center, 7 arc points and the closing point
        assert_eq!(polygon.exterior().0.len(), 1 + ARC_POINTS_PER_QUADRANT + 1 + 1);
    }

    #[test]
    fn counterclockwise_arc_takes_long_way() {
        let center = MapPoint::from(CENTER);
        let geometry = Geometry::Polygon {
            segments: vec![
                PolygonSegment::Point(CENTER),
                PolygonSegment::ArcSegment {
                    center: CENTER,
                    radius: 10_000.0,
                    start_angle: 0.0,
                    end_angle: 90.0,
                    direction: Direction::CounterClockwise,
                },
            ],
        };

        let polygon = to_polygon(&geometry);
        assert!(!polygon.contains(&geo::Point::from(center.polar_offset(5000.0, 45.0))));
        assert!(polygon.contains(&geo::Point::from(center.polar_offset(5000.0, 225.0))));
    }

    #[test]
    fn arc_keeps_exact_endpoints() {
        let start = MapPoint::from(CENTER).polar_offset(10_000.0, 0.0);
        let end = MapPoint::from(CENTER).polar_offset(10_100.0, 180.0);

        let coords = render_segment(&PolygonSegment::Arc {
            center: CENTER,
            start: OpenAirCoord::new(start.latitude, start.longitude),
            end: OpenAirCoord::new(end.latitude, end.longitude),
            direction: Direction::Clockwise,
        });

        assert_eq!(coords.first(), Some(&Coord::from(start)));
        assert_eq!(coords.last(), Some(&Coord::from(end)));
        assert!(coords.len() > 2 * ARC_POINTS_PER_QUADRANT);
    }
}
