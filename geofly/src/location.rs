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

use std::fmt::{Display, Formatter, Result};

use serde::{Deserialize, Serialize};

use crate::MapPoint;

/// Kind of a [`Location`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum LocationType {
    #[default]
    Waypoint,
    Airfield,
    Outlanding,
    Summit,
    Thermal,
    Turnpoint,
}

impl Display for LocationType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::Waypoint => write!(f, "Waypoint"),
            Self::Airfield => write!(f, "Airfield"),
            Self::Outlanding => write!(f, "Outlanding"),
            Self::Summit => write!(f, "Summit"),
            Self::Thermal => write!(f, "Thermal"),
            Self::Turnpoint => write!(f, "Turnpoint"),
        }
    }
}

/// A named point of interest e.g. read from a waypoint file.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub point: MapPoint,
    pub location_type: LocationType,
}

impl Location {
    pub fn new(id: impl Into<String>, name: impl Into<String>, point: MapPoint) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            point,
            ..Default::default()
        }
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} {} {}", self.location_type, self.name, self.point)
    }
}
