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

//! Spatial index to find the airspaces at a position.

use std::rc::Rc;

use geo::{Contains, Point, Polygon};
use log::debug;
use openair::Airspace;
use rstar::primitives::{GeomWithData, Rectangle};
use rstar::{RTree, RTreeObject, AABB};

use super::to_polygon;
use crate::MapPoint;

/// Airspace with its rendered polygon.
#[derive(Clone, Debug)]
struct Entry {
    airspace: Rc<Airspace>,
    polygon: Polygon<f64>,
}

/// Spatial index for airspace queries using an R-tree.
///
/// The index stores the bounding boxes of the rendered airspaces, allowing
/// quick filtering of candidates before the exact polygon containment check.
/// Airspaces without geometry are not indexed.
#[derive(Clone, Debug, Default)]
pub struct AirspaceIndex {
    tree: RTree<GeomWithData<Rectangle<Point<f64>>, usize>>,
    entries: Vec<Entry>,
}

impl AirspaceIndex {
    /// Creates an index from an iterator of airspaces.
    pub fn new<'a>(airspaces: impl Iterator<Item = &'a Rc<Airspace>>) -> Self {
        let entries: Vec<Entry> = airspaces
            .filter_map(|a| {
                a.geometry.as_ref().map(|geometry| Entry {
                    airspace: Rc::clone(a),
                    polygon: to_polygon(geometry),
                })
            })
            .collect();

        let rects = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| GeomWithData::new(Rectangle::from_aabb(entry.polygon.envelope()), i))
            .collect();

        debug!("indexed {} airspaces", entries.len());

        Self {
            tree: RTree::bulk_load(rects),
            entries,
        }
    }

    /// Returns airspaces whose bounding boxes contain the point.
    pub fn candidates_at(&self, point: &MapPoint) -> impl Iterator<Item = &Rc<Airspace>> + '_ {
        self.entries_at(point).map(|entry| &entry.airspace)
    }

    /// Returns the airspaces that contain the point.
    pub fn airspaces_at(&self, point: &MapPoint) -> impl Iterator<Item = &Rc<Airspace>> + '_ {
        let p = Point::from(*point);

        self.entries_at(point)
            .filter(move |entry| entry.polygon.contains(&p))
            .map(|entry| &entry.airspace)
    }

    /// Returns the number of indexed airspaces.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entries_at(&self, point: &MapPoint) -> impl Iterator<Item = &Entry> + '_ {
        let envelope = AABB::from_point(Point::from(*point));

        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .map(|rect| &self.entries[rect.data])
    }
}
