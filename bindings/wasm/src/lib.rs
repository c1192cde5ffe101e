// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Joe Pearson
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

//! JavaScript bindings to read airspaces and build CZML scenes in the browser.

use std::rc::Rc;

use geofly::czml::{Scene, SceneOptions};
use geofly::prelude::*;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

fn warn_diagnostics(openair: &openair::OpenAir) {
    for message in openair.error_messages() {
        web_sys::console::warn_1(&message.into());
    }
}

/// Parses an OpenAir file and returns the airspaces, errors and comments.
#[wasm_bindgen(js_name = parseOpenAir)]
pub fn parse_openair(data: &str) -> Result<JsValue, JsValue> {
    let openair = match data.parse::<openair::OpenAir>() {
        Ok(openair) => openair,
        Err(e) => match e {},
    };
    Ok(serde_wasm_bindgen::to_value(&openair)?)
}

/// Converts an OpenAir file into a CZML document.
#[wasm_bindgen(js_name = openAirToCzml)]
pub fn openair_to_czml(data: &str, name: Option<String>) -> Result<String, JsError> {
    let openair: openair::OpenAir = data.parse()?;
    warn_diagnostics(&openair);

    let mut options = SceneOptions::default();
    if let Some(name) = name {
        options.name = name;
    }

    Ok(geofly::czml::airspaces_to_czml(&openair.airspaces, options)?)
}

/// Converts an OpenAir file into a GeoJSON feature collection.
#[wasm_bindgen(js_name = openAirToGeoJson)]
pub fn openair_to_geojson(data: &str) -> Result<String, JsError> {
    let openair: openair::OpenAir = data.parse()?;
    warn_diagnostics(&openair);

    Ok(geofly::geojson::airspaces_to_geojson(&openair.airspaces).to_string())
}

#[wasm_bindgen(js_name = MapPoint)]
#[derive(Debug, Clone, Copy)]
pub struct JsMapPoint {
    inner: MapPoint,
}

#[wasm_bindgen(js_class = MapPoint)]
impl JsMapPoint {
    #[wasm_bindgen(constructor)]
    pub fn new(latitude: f64, longitude: f64, altitude: Option<f64>) -> Self {
        let inner = match altitude {
            Some(altitude) => MapPoint::with_altitude(latitude, longitude, altitude),
            None => MapPoint::new(latitude, longitude),
        };

        Self { inner }
    }

    /// Parses coordinates in decimal or DMS notation, or from a map link.
    pub fn parse(text: &str) -> Result<Self, JsError> {
        let inner: MapPoint = text.parse()?;
        Ok(Self { inner })
    }

    #[wasm_bindgen(getter)]
    pub fn latitude(&self) -> f64 {
        self.inner.latitude
    }

    #[wasm_bindgen(getter)]
    pub fn longitude(&self) -> f64 {
        self.inner.longitude
    }

    #[wasm_bindgen(getter)]
    pub fn altitude(&self) -> Option<f64> {
        self.inner.altitude
    }

    /// Distance in meters.
    #[wasm_bindgen(js_name = distanceTo)]
    pub fn distance_to(&self, other: &JsMapPoint) -> f64 {
        self.inner.distance_to(&other.inner)
    }

    /// Initial true course in degrees.
    #[wasm_bindgen(js_name = courseTo)]
    pub fn course_to(&self, other: &JsMapPoint) -> f64 {
        self.inner.course_to(&other.inner)
    }

    #[wasm_bindgen(js_name = polarOffset)]
    pub fn polar_offset(&self, distance: f64, bearing: f64) -> Self {
        Self {
            inner: self.inner.polar_offset(distance, bearing),
        }
    }

    #[wasm_bindgen(js_name = toString)]
    pub fn to_js_string(&self) -> String {
        self.inner.to_dms_string()
    }
}

impl From<JsMapPoint> for MapPoint {
    fn from(value: JsMapPoint) -> Self {
        value.inner
    }
}

impl From<MapPoint> for JsMapPoint {
    fn from(value: MapPoint) -> Self {
        Self { inner: value }
    }
}

#[derive(Serialize)]
struct AirspaceSummary {
    name: String,
    class: String,
    floor: String,
    ceiling: String,
}

impl From<&Airspace> for AirspaceSummary {
    fn from(airspace: &Airspace) -> Self {
        Self {
            name: airspace.name.clone(),
            class: airspace.class.to_string(),
            floor: airspace.floor.to_string(),
            ceiling: airspace.ceiling.to_string(),
        }
    }
}

/// Airspaces that can be queried by position.
#[wasm_bindgen(js_name = AirspaceIndex)]
pub struct JsAirspaceIndex {
    inner: AirspaceIndex,
}

#[wasm_bindgen(js_class = AirspaceIndex)]
impl JsAirspaceIndex {
    /// Reads the airspaces from an OpenAir file.
    #[wasm_bindgen(constructor)]
    pub fn new(data: &str) -> Result<Self, JsError> {
        let openair: openair::OpenAir = data.parse()?;
        warn_diagnostics(&openair);

        let airspaces: Vec<Rc<Airspace>> = openair.airspaces.into_iter().map(Rc::new).collect();
        Ok(Self {
            inner: AirspaceIndex::new(airspaces.iter()),
        })
    }

    /// Returns name, class and vertical limits of the airspaces at the point.
    #[wasm_bindgen(js_name = airspacesAt)]
    pub fn airspaces_at(&self, point: &JsMapPoint) -> Result<JsValue, JsValue> {
        let found: Vec<AirspaceSummary> = self
            .inner
            .airspaces_at(&point.inner)
            .map(|airspace| AirspaceSummary::from(airspace.as_ref()))
            .collect();

        Ok(serde_wasm_bindgen::to_value(&found)?)
    }

    #[wasm_bindgen(getter)]
    pub fn length(&self) -> usize {
        self.inner.len()
    }
}

/// A CZML scene of airspaces, tracks and locations.
#[wasm_bindgen(js_name = Scene)]
pub struct JsScene {
    inner: Scene,
}

#[wasm_bindgen(js_class = Scene)]
impl JsScene {
    #[wasm_bindgen(constructor)]
    pub fn new(name: String) -> Self {
        Self {
            inner: Scene::new(SceneOptions {
                name,
                ..Default::default()
            }),
        }
    }

    /// Adds the airspaces of an OpenAir file.
    #[wasm_bindgen(js_name = addOpenAir)]
    pub fn add_openair(&mut self, data: &str) -> Result<(), JsError> {
        let openair: openair::OpenAir = data.parse()?;
        warn_diagnostics(&openair);

        self.inner.add_airspaces(&openair.airspaces);
        Ok(())
    }

    /// Adds a track from an array of `{ latitude, longitude, altitude?,
    /// timestamp? }` objects and returns its statistics.
    #[wasm_bindgen(js_name = addTrack)]
    pub fn add_track(&mut self, name: String, points: JsValue) -> Result<JsValue, JsValue> {
        let points: Vec<TrackPoint> = serde_wasm_bindgen::from_value(points)?;
        let track = Track::new("", name, points);

        self.inner.add_track(&track);
        Ok(serde_wasm_bindgen::to_value(track.statistics())?)
    }

    #[wasm_bindgen(js_name = addLocation)]
    pub fn add_location(&mut self, name: String, point: &JsMapPoint) {
        self.inner
            .add_location(&Location::new("", name, point.inner));
    }

    #[wasm_bindgen(js_name = toCzml)]
    pub fn to_czml(&self) -> Result<String, JsError> {
        Ok(self.inner.to_json()?)
    }
}
