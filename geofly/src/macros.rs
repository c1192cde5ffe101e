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

/// Creates a [`MapPoint`] from latitude, longitude and an optional altitude.
///
/// ```
/// use geofly::point;
///
/// let edhf = point!(53.9925, 9.57666667);
/// let top = point!(47.42111, 10.98528, 2962.0);
///
/// assert_eq!(edhf.altitude, None);
/// assert_eq!(top.altitude, Some(2962.0));
/// ```
///
/// [`MapPoint`]: crate::MapPoint
#[macro_export]
macro_rules! point {
    ($latitude:expr, $longitude:expr) => {
        $crate::MapPoint::new($latitude, $longitude)
    };
    ($latitude:expr, $longitude:expr, $altitude:expr) => {
        $crate::MapPoint::with_altitude($latitude, $longitude, $altitude)
    };
}
