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

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::altitude::Altitude;
use crate::class::AirspaceClass;
use crate::error::Error;
use crate::geometry::{Geometry, GeometryBuilder};

/// Name used for airspaces without an `AN` command.
pub const UNNAMED: &str = "???";

/// Airspace.
///
/// The airspace ranges from the `floor` to the `ceiling` and is enclosed by its
/// `geometry`. The geometry is `None` only if the file didn't define one.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Airspace {
    pub class: AirspaceClass,
    pub name: String,
    /// Comment lines that belong to the airspace, joined by newlines.
    pub description: Option<String>,
    pub floor: Altitude,
    pub ceiling: Altitude,
    /// Display color as `RRGGBB` hex string.
    pub color: Option<String>,
    /// Free text type (`AY`).
    pub airspace_type: Option<String>,
    /// Radio frequency (`AF`).
    pub frequency: Option<String>,
    /// Radio call sign (`AG`).
    pub call_sign: Option<String>,
    pub geometry: Option<Geometry>,
}

impl Display for Airspace {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "{} [{}] ({} - {})",
            self.name, self.class, self.floor, self.ceiling
        )?;

        match &self.geometry {
            Some(geometry) => write!(f, " {geometry}"),
            None => Ok(()),
        }
    }
}

/// An airspace that is still being read.
///
/// Created by an `AC` command and turned into an [`Airspace`] by
/// [`build`](Self::build) once the next `AC` or the end of the file is reached.
#[derive(Clone, PartialEq, Debug)]
pub struct AirspaceBuilder {
    line: usize,
    class: AirspaceClass,
    name: Option<String>,
    description: Vec<String>,
    floor: Option<Altitude>,
    ceiling: Option<Altitude>,
    color: Option<String>,
    airspace_type: Option<String>,
    frequency: Option<String>,
    call_sign: Option<String>,
    geometry: GeometryBuilder,
}

impl AirspaceBuilder {
    /// Starts an airspace of the `class` declared on `line`.
    pub fn new(line: usize, class: AirspaceClass) -> Self {
        Self {
            line,
            class,
            name: None,
            description: Vec::new(),
            floor: None,
            ceiling: None,
            color: None,
            airspace_type: None,
            frequency: None,
            call_sign: None,
            geometry: GeometryBuilder::new(),
        }
    }

    /// The line on which the airspace was declared.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Sets the name.
    ///
    /// A second name is appended to the first one and reported as error.
    pub fn set_name(&mut self, name: &str) -> std::result::Result<(), Error> {
        match &mut self.name {
            None => {
                self.name = Some(name.to_string());
                Ok(())
            }
            Some(existing) => {
                existing.push(' ');
                existing.push_str(name);
                Err(Error::NameAlreadySet {
                    name: existing.clone(),
                })
            }
        }
    }

    pub fn set_floor(&mut self, floor: Altitude) {
        self.floor = Some(floor);
    }

    pub fn set_ceiling(&mut self, ceiling: Altitude) {
        self.ceiling = Some(ceiling);
    }

    pub fn set_color(&mut self, color: String) {
        self.color = Some(color);
    }

    pub fn set_type(&mut self, airspace_type: &str) {
        self.airspace_type = Some(airspace_type.to_string());
    }

    pub fn set_frequency(&mut self, frequency: &str) {
        self.frequency = Some(frequency.to_string());
    }

    pub fn set_call_sign(&mut self, call_sign: &str) {
        self.call_sign = Some(call_sign.to_string());
    }

    pub fn add_description<I>(&mut self, lines: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.description.extend(lines);
    }

    pub fn geometry_mut(&mut self) -> &mut GeometryBuilder {
        &mut self.geometry
    }

    /// Builds the airspace.
    ///
    /// Missing name, floor and ceiling are replaced by `???`, GND and
    /// unlimited. Every missing field including the geometry is returned as
    /// error.
    pub fn build(self) -> (Airspace, Vec<Error>) {
        let mut errors = Vec::new();

        let name = self.name.unwrap_or_else(|| {
            errors.push(Error::MissingField {
                field: "name",
                airspace: UNNAMED.to_string(),
            });
            UNNAMED.to_string()
        });

        let mut missing = |field: &'static str| {
            errors.push(Error::MissingField {
                field,
                airspace: name.clone(),
            })
        };

        let floor = self.floor.unwrap_or_else(|| {
            missing("floor");
            Altitude::gnd()
        });

        let ceiling = self.ceiling.unwrap_or_else(|| {
            missing("ceiling");
            Altitude::unlimited()
        });

        let geometry = self.geometry.build();
        if geometry.is_none() {
            missing("geometry");
        }

        let description = (!self.description.is_empty()).then(|| self.description.join("\n"));

        (
            Airspace {
                class: self.class,
                name,
                description,
                floor,
                ceiling,
                color: self.color,
                airspace_type: self.airspace_type,
                frequency: self.frequency,
                call_sign: self.call_sign,
                geometry,
            },
            errors,
        )
    }
}

/// Reads the color of an `SP` or `SB` command as `RRGGBB`.
///
/// The pen (`SP`) has the fields `style, width, R, G, B` and the brush (`SB`)
/// the fields `R, G, B`.
pub fn parse_color(command: &'static str, data: &str) -> std::result::Result<String, Error> {
    let expected = if command == "SP" { 5 } else { 3 };
    let invalid = || Error::InvalidColor {
        command,
        value: data.trim().to_string(),
        expected,
    };

    let fields: Vec<&str> = data.split(',').map(str::trim).collect();
    if fields.len() != expected {
        return Err(invalid());
    }

    let rgb = fields[expected - 3..]
        .iter()
        .map(|v| v.parse::<u8>().ok())
        .collect::<Option<Vec<u8>>>()
        .ok_or_else(invalid)?;

    Ok(format!("{:02X}{:02X}{:02X}", rgb[0], rgb[1], rgb[2]))
}
