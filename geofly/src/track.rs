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

//! Recorded tracks and their statistics.

use chrono::{DateTime, Utc};
use geo::{BoundingRect, LineString, Rect};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::MapPoint;

/// Start value of the minimum height.
const MIN_HEIGHT_SENTINEL: f64 = 10_000.0;
/// Start value of the maximum height.
const MAX_HEIGHT_SENTINEL: f64 = -10_000.0;
/// Time between two points if one of them has no timestamp.
const DEFAULT_TIME_DELTA: f64 = 1.0;

/// A recorded position.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct TrackPoint {
    pub latitude: f64,
    pub longitude: f64,
    /// Altitude above mean sea level in meters.
    pub altitude: Option<f64>,
    pub timestamp: Option<DateTime<Utc>>,
}

impl TrackPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude: None,
            timestamp: None,
        }
    }

    pub fn with_altitude(mut self, altitude: f64) -> Self {
        self.altitude = Some(altitude);
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn map_point(&self) -> MapPoint {
        MapPoint {
            latitude: self.latitude,
            longitude: self.longitude,
            altitude: self.altitude,
        }
    }
}

/// Statistics derived from the points of a track.
///
/// Lengths and heights are in meters, the duration in seconds and speeds as
/// well as climb rates in meters per second.
#[derive(Copy, Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackStatistics {
    pub duration: f64,
    pub length: f64,
    pub height_gain: f64,
    pub height_loss: f64,
    pub min_height: f64,
    pub max_height: f64,
    pub max_climb_rate: f64,
    /// The steepest descent as negative climb rate.
    pub max_sink_rate: f64,
    pub max_speed: f64,
    pub average_speed: f64,
}

/// Calculates the statistics in a single pass over the points.
///
/// The points are taken in the given order. If one of two consecutive points
/// has no timestamp, one second is assumed between them. Pairs whose time
/// doesn't advance count for length and height but not for speed and climb
/// rate.
pub fn calculate_statistics(points: &[TrackPoint]) -> TrackStatistics {
    let mut stats = TrackStatistics {
        min_height: MIN_HEIGHT_SENTINEL,
        max_height: MAX_HEIGHT_SENTINEL,
        ..Default::default()
    };

    let mut first_time = None;
    let mut last_time = None;
    let mut speed_sum = 0.0;
    let mut speed_samples = 0usize;
    let mut has_heights = false;

    for (i, point) in points.iter().enumerate() {
        if let Some(timestamp) = point.timestamp {
            first_time.get_or_insert(timestamp);
            last_time = Some(timestamp);
        }

        if let Some(altitude) = point.altitude {
            has_heights = true;
            stats.min_height = stats.min_height.min(altitude);
            stats.max_height = stats.max_height.max(altitude);
        }

        let Some(previous) = i.checked_sub(1).map(|p| &points[p]) else {
            continue;
        };

        let distance = previous.map_point().distance_to(&point.map_point());
        stats.length += distance;

        let dt = match (previous.timestamp, point.timestamp) {
            (Some(a), Some(b)) => (b - a).num_milliseconds() as f64 / 1000.0,
            _ => DEFAULT_TIME_DELTA,
        };

        if dt > 0.0 {
            let speed = distance / dt;
            speed_sum += speed;
            speed_samples += 1;
            stats.max_speed = stats.max_speed.max(speed);
        }

        if let (Some(a), Some(b)) = (previous.altitude, point.altitude) {
            let dh = b - a;

            if dh > 0.0 {
                stats.height_gain += dh;
            } else {
                stats.height_loss -= dh;
            }

            if dt > 0.0 {
                let climb = dh / dt;
                stats.max_climb_rate = stats.max_climb_rate.max(climb);
                stats.max_sink_rate = stats.max_sink_rate.min(climb);
            }
        }
    }

    if let (Some(first), Some(last)) = (first_time, last_time) {
        stats.duration = (last - first).num_milliseconds() as f64 / 1000.0;
    }

    if speed_samples > 0 {
        stats.average_speed = speed_sum / speed_samples as f64;
    }

    if !has_heights {
        stats.min_height = 0.0;
        stats.max_height = 0.0;
    }

    stats
}

/// A track of recorded points.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    /// Display color as `RRGGBB` hex string.
    pub color: Option<String>,
    pub points: Vec<TrackPoint>,
    statistics: TrackStatistics,
}

impl Track {
    /// Creates a track and calculates its statistics.
    pub fn new(id: impl Into<String>, name: impl Into<String>, points: Vec<TrackPoint>) -> Self {
        let mut track = Self {
            id: id.into(),
            name: name.into(),
            points,
            ..Default::default()
        };

        track.calculate_statistics();
        track
    }

    /// Appends a point. The statistics are not updated until
    /// [`calculate_statistics`](Self::calculate_statistics) is called.
    pub fn push(&mut self, point: TrackPoint) {
        self.points.push(point);
    }

    /// Recalculates the statistics from all points.
    pub fn calculate_statistics(&mut self) {
        self.statistics = calculate_statistics(&self.points);
        debug!(
            "track {} with {} points: {:.0} m in {:.0} s",
            self.id,
            self.points.len(),
            self.statistics.length,
            self.statistics.duration
        );
    }

    /// The statistics as of the last calculation.
    pub fn statistics(&self) -> &TrackStatistics {
        &self.statistics
    }

    /// Returns the bounding rectangle with `x` as longitude and `y` as
    /// latitude or `None` if the track has no points.
    pub fn bounding_rect(&self) -> Option<Rect<f64>> {
        self.line_string().bounding_rect()
    }

    pub(crate) fn line_string(&self) -> LineString<f64> {
        self.points
            .iter()
            .map(|p| geo::Coord::from(p.map_point()))
            .collect()
    }
}
