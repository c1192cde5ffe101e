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

//! Distance, course and offsets on a spherical earth.
//!
//! All functions use a sphere with the radius [`EARTH_RADIUS`]. This is
//! accurate to about 0.5% which is good enough to draw and measure on a map.
//! Distances are in meters and angles in degrees.

use crate::measurements::constants::{EARTH_RADIUS, POLE_EPSILON};

use super::MapPoint;

impl MapPoint {
    /// Returns the great circle distance to `other` in meters.
    ///
    /// Uses the haversine formula which is well-conditioned for short as well
    /// as long distances.
    pub fn distance_to(&self, other: &MapPoint) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let d_lat = lat2 - lat1;
        let d_lon = (other.longitude - self.longitude).to_radians();

        let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS * c
    }

    /// Returns the initial true course to `other` in the range [0, 360).
    ///
    /// From the north pole every course is south (180°) and from the south
    /// pole every course is north (0°).
    pub fn course_to(&self, other: &MapPoint) -> f64 {
        let lat1 = self.latitude.to_radians();

        if lat1.cos() < POLE_EPSILON {
            return if lat1 > 0.0 { 180.0 } else { 0.0 };
        }

        let lat2 = other.latitude.to_radians();
        let d_lon = (other.longitude - self.longitude).to_radians();

        let y = d_lon.sin() * lat2.cos();
        let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

        normalize_course(y.atan2(x).to_degrees())
    }

    /// Returns the point at `distance` meters on the true `bearing`.
    ///
    /// The longitude of the result is normalized to (-180, 180] and the
    /// altitude is kept.
    pub fn polar_offset(&self, distance: f64, bearing: f64) -> MapPoint {
        let lat1 = self.latitude.to_radians();
        let lon1 = self.longitude.to_radians();
        let theta = bearing.to_radians();
        let delta = distance / EARTH_RADIUS;

        let lat2 = (lat1.sin() * delta.cos() + lat1.cos() * delta.sin() * theta.cos()).asin();
        let lon2 = lon1
            + (theta.sin() * delta.sin() * lat1.cos()).atan2(delta.cos() - lat1.sin() * lat2.sin());

        MapPoint {
            latitude: lat2.to_degrees(),
            longitude: normalize_longitude(lon2.to_degrees()),
            altitude: self.altitude,
        }
    }

    /// Returns the point `north` and `east` meters away. The `height` is added
    /// to the altitude, if there is one.
    pub fn offset(&self, north: f64, east: f64, height: f64) -> MapPoint {
        let distance = north.hypot(east);
        let bearing = east.atan2(north).to_degrees();

        let mut point = self.polar_offset(distance, bearing);
        point.altitude = self.altitude.map(|altitude| altitude + height);
        point
    }
}

fn normalize_course(course: f64) -> f64 {
    let course = course.rem_euclid(360.0);

    // rem_euclid may round tiny negative values up to 360
    if course >= 360.0 {
        0.0
    } else {
        course
    }
}

/// Normalizes a longitude into (-180, 180].
pub fn normalize_longitude(longitude: f64) -> f64 {
    let longitude = (longitude + 180.0).rem_euclid(360.0) - 180.0;

    if longitude <= -180.0 {
        longitude + 360.0
    } else {
        longitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Hamburg (EDDH) and Luebeck (EDHL)
    const EDDH: MapPoint = MapPoint::new(53.63, 9.99);
    const EDHL: MapPoint = MapPoint::new(53.81, 10.70);

    #[test]
    fn meridian_distance() {
        let a = point!(48.2, 11.0);
        let b = point!(48.3, 11.0);
        assert!((a.distance_to(&b) - 11132.0).abs() < 1.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let d = EDDH.distance_to(&EDHL);
        assert!((d - EDHL.distance_to(&EDDH)).abs() < 1e-9);
        // roughly 27 NM
        assert!((d / 1852.0 - 27.0).abs() < 1.0);
    }

    #[test]
    fn course() {
        let north = point!(50.0, 10.0);
        assert!((north.course_to(&point!(51.0, 10.0)) - 0.0).abs() < 1e-9);
        assert!((north.course_to(&point!(49.0, 10.0)) - 180.0).abs() < 1e-9);
        assert!((point!(0.0, 10.0).course_to(&point!(0.0, 11.0)) - 90.0).abs() < 1e-9);
        assert!((point!(0.0, 10.0).course_to(&point!(0.0, 9.0)) - 270.0).abs() < 1e-9);

        let course = EDDH.course_to(&EDHL);
        assert!((0.0..360.0).contains(&course));
        assert!((course - 66.5).abs() < 0.1);
    }

    #[test]
    fn course_from_poles() {
        let target = point!(50.0, 10.0);
        assert_eq!(point!(90.0, 0.0).course_to(&target), 180.0);
        assert_eq!(point!(-90.0, 0.0).course_to(&target), 0.0);
    }

    #[test]
    fn polar_offset_round_trip() {
        let origin = point!(48.2, 11.0);

        for bearing in [0.0, 90.0, 180.0, 270.0, 71.0] {
            let destination = origin.polar_offset(1000.0, bearing);
            let distance = destination.distance_to(&origin);
            assert!(
                (distance - 1000.0).abs() < 1e-6,
                "bearing {bearing}: {distance}"
            );
        }
    }

    #[test]
    fn polar_offset_wraps_longitude() {
        let p = point!(0.0, 179.99).polar_offset(10_000.0, 90.0);
        assert!(p.longitude < -179.0 && p.longitude > -180.0);

        let p = point!(0.0, -179.99).polar_offset(10_000.0, 270.0);
        assert!(p.longitude > 179.0 && p.longitude <= 180.0);
    }

    #[test]
    fn rectangular_offset() {
        let origin = point!(48.2, 11.0, 500.0);
        let p = origin.offset(1000.0, 1000.0, 50.0);

        assert!((p.distance_to(&origin) - 2f64.sqrt() * 1000.0).abs() < 1e-6);
        assert!((origin.course_to(&p) - 45.0).abs() < 0.01);
        assert_eq!(p.altitude, Some(550.0));

        let p = point!(48.2, 11.0).offset(0.0, -500.0, 50.0);
        assert_eq!(p.altitude, None);
        assert!((point!(48.2, 11.0).course_to(&p) - 270.0).abs() < 0.01);
    }

    #[test]
    fn longitudes() {
        assert_eq!(normalize_longitude(180.0), 180.0);
        assert_eq!(normalize_longitude(-180.0), 180.0);
        assert_eq!(normalize_longitude(190.0), -170.0);
        assert_eq!(normalize_longitude(-190.0), 170.0);
        assert_eq!(normalize_longitude(10.0), 10.0);
    }
}
