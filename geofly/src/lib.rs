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

//! Airspaces, coordinates and tracks for flight maps and 3D scenes.
//!
//! This crate builds on the [`openair`] parser and adds what is needed to put
//! airspaces and flights on a map:
//!
//! - [`MapPoint`] coordinates with distance, course and offsets on a
//!   spherical earth
//! - parsing of [coordinates] as written by humans or shared as map links
//! - rendering of airspace geometries into polygons and an [`AirspaceIndex`]
//!   to find the airspaces at a point
//! - [`Track`] statistics
//! - export as [CZML] scene or, with the `geojson` feature, as GeoJSON
//!
//! # Examples
//!
//! Find the airspaces above a point:
//!
//! ```
//! use std::rc::Rc;
//! use geofly::{AirspaceIndex, MapPoint};
//!
//! let openair: openair::OpenAir = "\
//! AC D
//! AN CTR BREMEN
//! AL GND
//! AH 2500 ft
//! V X=53:02:53 N 008:47:13 E
//! DC 5
//! "
//! .parse()
//! .unwrap();
//!
//! let airspaces: Vec<_> = openair.airspaces.into_iter().map(Rc::new).collect();
//! let index = AirspaceIndex::new(airspaces.iter());
//!
//! let airport: MapPoint = "53.0475 N, 8.7867 E".parse().unwrap();
//! let found = index.airspaces_at(&airport).next().unwrap();
//! assert_eq!(found.name, "CTR BREMEN");
//! ```
//!
//! [coordinates]: parse_coordinate
//! [CZML]: czml

#![cfg_attr(docsrs, feature(doc_cfg))]

use std::ffi::OsStr;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use log::debug;
use openair::OpenAir;

#[macro_use]
mod macros;

pub mod airspace;
pub mod czml;
mod error;
#[cfg(feature = "geojson")]
#[cfg_attr(docsrs, doc(cfg(feature = "geojson")))]
pub mod geojson;
mod geom;
mod location;
pub mod measurements;
mod track;

pub use airspace::AirspaceIndex;
pub use error::{Error, Result};
pub use geom::{normalize_longitude, parse_coordinate, MapPoint};
pub use location::{Location, LocationType};
pub use track::{calculate_statistics, Track, TrackPoint, TrackStatistics};

pub mod prelude {
    pub use crate::airspace::{Airspace, AirspaceClass, AirspaceIndex, Altitude, VerticalDistance};
    pub use crate::czml::{Scene, SceneOptions};
    pub use crate::{load_airspaces, Location, MapPoint, Track, TrackPoint};
}

const OPENAIR_EXTENSIONS: [&str; 3] = ["txt", "air", "openair"];

/// Reads the OpenAir file at `path`.
///
/// Only files with the extension `.txt`, `.air` or `.openair` are read.
/// Problems with the content don't fail but are returned as
/// [`OpenAir::errors`].
pub fn load_airspaces<P: AsRef<Path>>(path: P) -> Result<OpenAir> {
    let path = path.as_ref();

    let supported = path
        .extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| {
            OPENAIR_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        });

    if !supported {
        return Err(Error::UnsupportedFileExtension(path.to_path_buf()));
    }

    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => Error::FileNotFound(path.to_path_buf()),
        _ => Error::Io(e),
    })?;

    let openair = openair::parse(BufReader::new(file))?;
    debug!(
        "read {} airspaces with {} errors from {}",
        openair.airspaces.len(),
        openair.errors.len(),
        path.display()
    );

    Ok(openair)
}
