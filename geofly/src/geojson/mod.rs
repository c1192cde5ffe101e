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

//! GeoJSON export of airspaces, tracks and locations.

use geo::{BoundingRect, Rect};
use geojson::{Bbox, Feature, FeatureCollection, GeoJson, Geometry, JsonObject, Value};
use openair::Airspace;

use crate::airspace::polygon;
use crate::Location;

mod track;

pub(crate) fn rect_to_bbox(rect: Rect<f64>) -> Bbox {
    vec![rect.min().x, rect.min().y, rect.max().x, rect.max().y]
}

/// Returns the airspaces as feature collection of polygons.
///
/// Each feature carries the name, class, floor and ceiling as properties.
/// Airspaces without geometry are left out.
#[cfg_attr(docsrs, doc(cfg(feature = "geojson")))]
pub fn airspaces_to_geojson<'a, I>(airspaces: I) -> GeoJson
where
    I: IntoIterator<Item = &'a Airspace>,
{
    let features: Vec<Feature> = airspaces
        .into_iter()
        .filter_map(|airspace| {
            let polygon = polygon(airspace)?;

            let mut properties = JsonObject::new();
            properties.insert("name".to_string(), airspace.name.clone().into());
            properties.insert("class".to_string(), airspace.class.to_string().into());
            properties.insert("floor".to_string(), airspace.floor.to_string().into());
            properties.insert("ceiling".to_string(), airspace.ceiling.to_string().into());
            if let Some(color) = &airspace.color {
                properties.insert("color".to_string(), format!("#{color}").into());
            }

            Some(Feature {
                bbox: polygon.bounding_rect().map(rect_to_bbox),
                geometry: Some(Geometry::new(Value::from(&polygon))),
                id: None,
                properties: Some(properties),
                foreign_members: None,
            })
        })
        .collect();

    GeoJson::FeatureCollection(FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    })
}

impl Location {
    /// Returns the location as point feature with its name as property.
    #[cfg_attr(docsrs, doc(cfg(feature = "geojson")))]
    pub fn to_geojson(&self) -> GeoJson {
        let point = geo::Point::from(self.point);

        let mut properties = JsonObject::new();
        properties.insert("name".to_string(), self.name.clone().into());
        properties.insert("type".to_string(), self.location_type.to_string().into());

        GeoJson::Feature(Feature {
            bbox: None,
            geometry: Some(Geometry::new(Value::from(&point))),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MapPoint;
    use openair::OpenAir;

    #[test]
    fn airspace_features() {
        let openair: OpenAir = "AC R
AN ED-R 1
AL GND
AH FL100
DP 52:00:00 N 013:00:00 E
DP 52:00:00 N 014:00:00 E
DP 53:00:00 N 014:00:00 E
AC Q
AN No geometry
AL GND
AH FL100
"
        .parse()
        .unwrap();

        let GeoJson::FeatureCollection(collection) = airspaces_to_geojson(&openair.airspaces) else {
            panic!("should be a feature collection");
        };

        assert_eq!(collection.features.len(), 1);

        let feature = &collection.features[0];
        assert_eq!(feature.bbox, Some(vec![13.0, 52.0, 14.0, 53.0]));
        assert_eq!(feature.property("name"), Some(&serde_json::json!("ED-R 1")));
        assert_eq!(feature.property("ceiling"), Some(&serde_json::json!("FL100")));
    }

    #[test]
    fn location_feature() {
        let location = Location::new("1", "Wank", MapPoint::new(47.5, 11.1));

        let GeoJson::Feature(feature) = location.to_geojson() else {
            panic!("should be a feature");
        };

        assert_eq!(
            feature.geometry.map(|g| g.value),
            Some(Value::Point(vec![11.1, 47.5]))
        );
    }
}
