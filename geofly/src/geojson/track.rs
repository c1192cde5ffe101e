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

use geo::BoundingRect;
use geojson::{Feature, GeoJson, Geometry, JsonObject, Value};

use super::rect_to_bbox;
use crate::Track;

impl Track {
    /// Returns the track as GeoJSON with a line string geometry.
    #[cfg_attr(docsrs, doc(cfg(feature = "geojson")))]
    pub fn to_geojson(&self) -> GeoJson {
        let line = self.line_string();

        let mut properties = JsonObject::new();
        properties.insert("name".to_string(), self.name.clone().into());
        if let Some(color) = &self.color {
            properties.insert("color".to_string(), color.clone().into());
        }

        GeoJson::Feature(Feature {
            bbox: line.bounding_rect().map(rect_to_bbox),
            geometry: Some(Geometry::new(Value::from(&line))),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TrackPoint;

    #[test]
    fn track_as_line_string() {
        let track = Track::new(
            "t1",
            "Flight",
            vec![TrackPoint::new(48.0, 11.0), TrackPoint::new(48.5, 11.5)],
        );

        let GeoJson::Feature(feature) = track.to_geojson() else {
            panic!("should be a feature");
        };

        assert_eq!(feature.bbox, Some(vec![11.0, 48.0, 11.5, 48.5]));
        assert_eq!(
            feature.geometry.map(|g| g.value),
            Some(Value::LineString(vec![vec![11.0, 48.0], vec![11.5, 48.5]]))
        );
    }
}
