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

/// Mean radius of the spherical earth in meters.
pub const EARTH_RADIUS: f64 = 6_378_137.0;
pub const SECONDS_PER_HOUR: f64 = 3600.0;
pub const METER_PER_SECONDS_IN_KNOTS: f64 = 1.943844;
/// Cosine of latitude below which a point is treated as a pole.
pub const POLE_EPSILON: f64 = 1e-12;
