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

//! The CZML packets and shapes that are written.
//!
//! Only the properties used by the exporter are modeled. Unset properties are
//! omitted from the JSON.

use serde::{Deserialize, Serialize};

/// A CZML packet. The first packet of a document is the header with the id
/// `document`.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Packet {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// CZML version, only set on the header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Positions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point: Option<Point>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<Label>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billboard: Option<Billboard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub polyline: Option<Polyline>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cylinder: Option<Cylinder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub polygon: Option<Polygon>,
}

/// Flattened `[longitude, latitude, height]` triples in degrees and meters.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Positions {
    pub cartographic_degrees: Vec<f64>,
}

impl Positions {
    pub fn new<I>(positions: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64, f64)>,
    {
        Self {
            cartographic_degrees: positions
                .into_iter()
                .flat_map(|(lon, lat, h)| [lon, lat, h])
                .collect(),
        }
    }
}

/// RGBA color with each channel in [0, 255].
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Color {
    pub rgba: [u8; 4],
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { rgba: [r, g, b, a] }
    }

    /// Parses a `RRGGBB` hex string with an optional leading `#`.
    pub fn from_hex(hex: &str, alpha: u8) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::rgba(channel(0)?, channel(2)?, channel(4)?, alpha))
    }

    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self::rgba(self.rgba[0], self.rgba[1], self.rgba[2], alpha)
    }
}

#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolidColor {
    pub color: Color,
}

#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub solid_color: SolidColor,
}

impl From<Color> for Material {
    fn from(color: Color) -> Self {
        Self {
            solid_color: SolidColor { color },
        }
    }
}

#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Point {
    pub color: Color,
    pub pixel_size: f64,
    pub outline_color: Color,
    pub outline_width: f64,
}

#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Label {
    pub text: String,
    pub fill_color: Color,
    /// Screen offset `[x, y]` in pixels.
    pub pixel_offset: Cartesian2,
}

#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cartesian2 {
    pub cartesian2: [f64; 2],
}

#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Billboard {
    pub image: String,
    pub scale: f64,
}

#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Polyline {
    pub positions: Positions,
    pub width: f64,
    pub material: Material,
}

/// A cylinder centered at the packet position.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cylinder {
    pub length: f64,
    pub top_radius: f64,
    pub bottom_radius: f64,
    pub material: Material,
    pub outline: bool,
    pub outline_color: Color,
}

/// A polygon extruded from `height` to `extruded_height`.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Polygon {
    pub positions: Positions,
    pub height: f64,
    pub extruded_height: f64,
    pub material: Material,
    pub outline: bool,
    pub outline_color: Color,
}
