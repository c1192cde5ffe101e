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

//! Export of airspaces, tracks and locations as CZML scene.
//!
//! CZML is a JSON array of packets. The first packet is the document header
//! and every following packet describes one object of the 3D scene:
//!
//! | Input                 | Shape                               |
//! |-----------------------|-------------------------------------|
//! | circle airspace       | cylinder from floor to ceiling      |
//! | polygon airspace      | polygon extruded from floor to ceiling |
//! | [`Track`]             | polyline                            |
//! | [`Location`]          | point with label or billboard       |
//!
//! ```
//! use geofly::czml::{Scene, SceneOptions};
//! use openair::OpenAir;
//!
//! let openair: OpenAir = "AC D\nAN CTR\nAL GND\nAH 2500ft\nV X=53:02:53 N 008:47:13 E\nDC 5"
//!     .parse()
//!     .unwrap();
//!
//! let mut scene = Scene::new(SceneOptions::default());
//! scene.add_airspaces(&openair.airspaces);
//!
//! let json = scene.to_json().unwrap();
//! assert!(json.contains("\"cylinder\""));
//! ```

mod packet;

use log::debug;
use openair::{Airspace, AirspaceClass, Altitude, Geometry, VerticalDistance};

pub use packet::*;

use crate::airspace::to_polygon;
use crate::{Location, MapPoint, Track};

const CZML_VERSION: &str = "1.0";

/// Options of the exported scene.
#[derive(Clone, PartialEq, Debug)]
pub struct SceneOptions {
    /// Id of the document header packet.
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    /// Alpha of airspace fills in [0, 255].
    pub airspace_alpha: u8,
    /// Height in meters used for unlimited or textual ceilings.
    pub unlimited_height: f64,
    /// Width of track lines in pixels.
    pub track_width: f64,
    /// Size of location points in pixels.
    pub point_size: f64,
    /// Image shown instead of a point for locations.
    pub location_icon: Option<String>,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            id: "document".to_string(),
            name: "geofly".to_string(),
            description: None,
            airspace_alpha: 96,
            unlimited_height: 20_000.0,
            track_width: 3.0,
            point_size: 10.0,
            location_icon: None,
        }
    }
}

/// A CZML scene that is built object by object.
#[derive(Clone, PartialEq, Debug)]
pub struct Scene {
    options: SceneOptions,
    packets: Vec<Packet>,
}

impl Scene {
    /// Creates a scene with the document header.
    pub fn new(options: SceneOptions) -> Self {
        let header = Packet {
            id: options.id.clone(),
            name: Some(options.name.clone()),
            description: options.description.clone(),
            version: Some(CZML_VERSION.to_string()),
            ..Default::default()
        };

        Self {
            options,
            packets: vec![header],
        }
    }

    /// Adds the airspace as cylinder or extruded polygon.
    ///
    /// Airspaces without geometry have no shape and are skipped.
    pub fn add_airspace(&mut self, airspace: &Airspace) {
        let Some(geometry) = &airspace.geometry else {
            debug!("skipping airspace {} without geometry", airspace.name);
            return;
        };

        let floor = self.height(&airspace.floor, 0.0);
        let ceiling = self.height(&airspace.ceiling, self.options.unlimited_height);
        let fill = airspace_color(airspace, self.options.airspace_alpha);
        let outline_color = fill.with_alpha(255);

        let mut packet = Packet {
            id: format!("airspace-{}", self.packets.len()),
            name: Some(airspace.name.clone()),
            description: Some(airspace_description(airspace)),
            ..Default::default()
        };

        match geometry {
            Geometry::Circle { center, radius } => {
                packet.position = Some(Positions::new([(
                    center.longitude,
                    center.latitude,
                    (floor + ceiling) / 2.0,
                )]));
                packet.cylinder = Some(Cylinder {
                    length: ceiling - floor,
                    top_radius: *radius,
                    bottom_radius: *radius,
                    material: fill.into(),
                    outline: true,
                    outline_color,
                });
            }
            Geometry::Polygon { .. } => {
                let polygon = to_polygon(geometry);
                let coords = polygon.exterior().coords();
                // the closing point is implicit
                let open = coords.take(polygon.exterior().0.len().saturating_sub(1));

                packet.polygon = Some(Polygon {
                    positions: Positions::new(open.map(|c| (c.x, c.y, floor))),
                    height: floor,
                    extruded_height: ceiling,
                    material: fill.into(),
                    outline: true,
                    outline_color,
                });
            }
        }

        self.packets.push(packet);
    }

    pub fn add_airspaces<'a, I>(&mut self, airspaces: I)
    where
        I: IntoIterator<Item = &'a Airspace>,
    {
        for airspace in airspaces {
            self.add_airspace(airspace);
        }
    }

    /// Adds the track as polyline. Points without altitude are placed at 0 m.
    pub fn add_track(&mut self, track: &Track) {
        let color = track
            .color
            .as_deref()
            .and_then(|hex| Color::from_hex(hex, 255))
            .unwrap_or(TRACK_COLOR);

        let positions = track
            .points
            .iter()
            .map(|p| (p.longitude, p.latitude, p.altitude.unwrap_or_default()));

        self.packets.push(Packet {
            id: packet_id("track", &track.id, self.packets.len()),
            name: Some(track.name.clone()),
            description: track.description.clone(),
            polyline: Some(Polyline {
                positions: Positions::new(positions),
                width: self.options.track_width,
                material: color.into(),
            }),
            ..Default::default()
        });
    }

    /// Adds the location as point, or billboard if an icon is set, with its
    /// name as label.
    pub fn add_location(&mut self, location: &Location) {
        let MapPoint {
            latitude,
            longitude,
            altitude,
        } = location.point;

        let mut packet = Packet {
            id: packet_id("location", &location.id, self.packets.len()),
            name: Some(location.name.clone()),
            description: location.description.clone(),
            position: Some(Positions::new([(
                longitude,
                latitude,
                altitude.unwrap_or_default(),
            )])),
            label: Some(Label {
                text: location.name.clone(),
                fill_color: Color::rgba(255, 255, 255, 255),
                pixel_offset: Cartesian2 {
                    cartesian2: [0.0, -self.options.point_size * 2.0],
                },
            }),
            ..Default::default()
        };

        match &self.options.location_icon {
            Some(image) => {
                packet.billboard = Some(Billboard {
                    image: image.clone(),
                    scale: 1.0,
                })
            }
            None => {
                packet.point = Some(Point {
                    color: LOCATION_COLOR,
                    pixel_size: self.options.point_size,
                    outline_color: Color::rgba(0, 0, 0, 255),
                    outline_width: 1.0,
                })
            }
        }

        self.packets.push(packet);
    }

    /// The packets including the header.
    pub fn packets(&self) -> &[Packet] {
        &self.packets
    }

    pub fn to_value(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(&self.packets)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.packets)
    }

    fn height(&self, altitude: &Altitude, fallback: f64) -> f64 {
        match altitude.distance {
            VerticalDistance::Unlimited => self.options.unlimited_height,
            ref distance => distance.approx_meters().unwrap_or(fallback),
        }
    }
}

/// Exports the airspaces as CZML document.
pub fn airspaces_to_czml(airspaces: &[Airspace], options: SceneOptions) -> serde_json::Result<String> {
    let mut scene = Scene::new(options);
    scene.add_airspaces(airspaces);
    scene.to_json()
}

const TRACK_COLOR: Color = Color::rgba(255, 0, 255, 255);
const LOCATION_COLOR: Color = Color::rgba(255, 215, 0, 255);

fn packet_id(kind: &str, id: &str, index: usize) -> String {
    if id.is_empty() {
        format!("{kind}-{index}")
    } else {
        id.to_string()
    }
}

/// Returns the color of the airspace or the default of its class.
pub fn airspace_color(airspace: &Airspace, alpha: u8) -> Color {
    airspace
        .color
        .as_deref()
        .and_then(|hex| Color::from_hex(hex, alpha))
        .unwrap_or_else(|| class_color(airspace.class).with_alpha(alpha))
}

fn class_color(class: AirspaceClass) -> Color {
    match class {
        AirspaceClass::Restricted | AirspaceClass::Prohibited => Color::rgba(220, 20, 60, 255),
        AirspaceClass::Danger => Color::rgba(255, 140, 0, 255),
        AirspaceClass::CTR => Color::rgba(30, 144, 255, 255),
        AirspaceClass::A | AirspaceClass::B | AirspaceClass::C | AirspaceClass::D => {
            Color::rgba(0, 0, 205, 255)
        }
        AirspaceClass::E | AirspaceClass::F | AirspaceClass::G => Color::rgba(46, 139, 87, 255),
        AirspaceClass::GliderProhibited => Color::rgba(139, 0, 139, 255),
        AirspaceClass::WaveWindow => Color::rgba(0, 206, 209, 255),
        AirspaceClass::RMZ | AirspaceClass::TMZ => Color::rgba(112, 128, 144, 255),
        AirspaceClass::Other | AirspaceClass::Unknown => Color::rgba(128, 128, 128, 255),
    }
}

fn airspace_description(airspace: &Airspace) -> String {
    let mut lines = vec![
        format!("Class {}", airspace.class),
        format!("{} - {}", airspace.floor, airspace.ceiling),
    ];

    lines.extend(airspace.frequency.iter().map(|f| format!("Frequency {f}")));
    lines.extend(airspace.call_sign.iter().map(|c| format!("Call sign {c}")));
    lines.extend(airspace.description.iter().cloned());

    lines.join("<br>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TrackPoint;
    use openair::{Coord, PolygonSegment};

    fn airspace(geometry: Geometry) -> Airspace {
        Airspace {
            class: AirspaceClass::Restricted,
            name: "ED-R 1".to_string(),
            description: Some("Test".to_string()),
            floor: Altitude::new(VerticalDistance::Msl(1000.0)),
            ceiling: Altitude::unlimited(),
            color: None,
            airspace_type: None,
            frequency: None,
            call_sign: None,
            geometry: Some(geometry),
        }
    }

    #[test]
    fn header_packet() {
        let scene = Scene::new(SceneOptions {
            description: Some("Airspaces".to_string()),
            ..Default::default()
        });

        let json = scene.to_value().unwrap();
        assert_eq!(json[0]["id"], "document");
        assert_eq!(json[0]["version"], "1.0");
        assert_eq!(json[0]["description"], "Airspaces");
    }

    #[test]
    fn circle_becomes_cylinder() {
        let mut scene = Scene::new(SceneOptions::default());
        scene.add_airspace(&airspace(Geometry::Circle {
            center: Coord::new(52.0, 13.0),
            radius: 9260.0,
        }));

        let json = scene.to_value().unwrap();
        let packet = &json[1];
        let floor = 1000.0 * 0.3048;

        assert_eq!(packet["cylinder"]["topRadius"], 9260.0);
        assert_eq!(packet["position"]["cartographicDegrees"][0], 13.0);
        assert_eq!(packet["position"]["cartographicDegrees"][1], 52.0);

        let length = packet["cylinder"]["length"].as_f64().unwrap();
        assert!((length - (20_000.0 - floor)).abs() < 0.01);
        assert_eq!(
            packet["cylinder"]["material"]["solidColor"]["color"]["rgba"],
            serde_json::json!([220, 20, 60, 96])
        );
    }

    #[test]
    fn polygon_is_extruded() {
        let segments = vec![
            PolygonSegment::Point(Coord::new(53.0, 9.0)),
            PolygonSegment::Point(Coord::new(53.0, 10.0)),
            PolygonSegment::Point(Coord::new(54.0, 10.0)),
        ];

        let mut geometry_airspace = airspace(Geometry::Polygon { segments });
        geometry_airspace.color = Some("00FF00".to_string());

        let mut scene = Scene::new(SceneOptions::default());
        scene.add_airspace(&geometry_airspace);

        let packet = &scene.packets()[1];
        let polygon = packet.polygon.as_ref().expect("should be a polygon");

        assert_eq!(
            polygon.positions.cartographic_degrees[..3],
            [9.0, 53.0, polygon.height]
        );
        assert_eq!(polygon.positions.cartographic_degrees.len(), 9);
        assert_eq!(polygon.extruded_height, 20_000.0);
        assert_eq!(polygon.material.solid_color.color, Color::rgba(0, 255, 0, 96));
        assert!(packet.cylinder.is_none());
    }

    #[test]
    fn airspace_without_geometry_is_skipped() {
        let mut empty = airspace(Geometry::Polygon { segments: vec![] });
        empty.geometry = None;

        let mut scene = Scene::new(SceneOptions::default());
        scene.add_airspace(&empty);

        assert_eq!(scene.packets().len(), 1);
    }

    #[test]
    fn track_and_location() {
        let track = Track::new(
            "",
            "Flight",
            vec![
                TrackPoint::new(48.2, 11.0).with_altitude(600.0),
                TrackPoint::new(48.3, 11.1),
            ],
        );

        let location = Location::new("wp1", "Summit", MapPoint::with_altitude(47.42, 10.98, 2962.0));

        let mut scene = Scene::new(SceneOptions::default());
        scene.add_track(&track);
        scene.add_location(&location);

        let json = scene.to_value().unwrap();
        assert_eq!(json[1]["id"], "track-1");
        assert_eq!(
            json[1]["polyline"]["positions"]["cartographicDegrees"],
            serde_json::json!([11.0, 48.2, 600.0, 11.1, 48.3, 0.0])
        );
        assert_eq!(json[2]["id"], "wp1");
        assert_eq!(json[2]["label"]["text"], "Summit");
        assert_eq!(json[2]["point"]["pixelSize"], 10.0);
        assert!(json[2].get("billboard").is_none());
    }
}
