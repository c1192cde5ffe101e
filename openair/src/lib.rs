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

//! OpenAir airspace file parser.
//!
//! OpenAir is a line oriented format where each line starts with a command of
//! one or two letters followed by its data. There is no formal grammar and
//! files found in the wild use many variations of the format. This parser is
//! therefore lenient: a malformed line is recorded as [`Diagnostic`] and the
//! parser continues with the next line. Whatever could be read is returned
//! together with the diagnostics.
//!
//! # Examples
//!
//! Lets read a control zone and print its vertical limits:
//!
//! ```
//! use openair::{Geometry, OpenAir};
//!
//! let data = "\
//! AC CTR
//! AN CTR BREMEN
//! AL GND
//! AH 2500 ft MSL
//! V X=53:02:53 N 008:47:13 E
//! DC 5
//! ";
//!
//! let openair: OpenAir = data.parse().unwrap();
//! assert!(openair.errors.is_empty());
//!
//! let ctr = &openair.airspaces[0];
//! println!("{} from {} to {}", ctr.name, ctr.floor, ctr.ceiling);
//! assert!(matches!(ctr.geometry, Some(Geometry::Circle { .. })));
//! ```
//!
//! Files are read with [`parse`], which accepts any buffered reader. Bytes
//! that are no valid UTF-8 are replaced and don't stop the parser:
//!
//! ```no_run
//! # fn main() -> std::io::Result<()> {
//! let file = std::fs::File::open("germany.txt")?;
//! let openair = openair::parse(std::io::BufReader::new(file))?;
//!
//! for diagnostic in &openair.errors {
//!     eprintln!("{diagnostic}");
//! }
//! # Ok(())
//! # }
//! ```

use std::convert::Infallible;
use std::io::{self, BufRead};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::Serialize;

mod airspace;
mod altitude;
mod class;
mod command;
mod coord;
mod error;
mod geometry;
mod parser;
mod variables;

pub mod constants {
    /// Feet in one meter.
    pub const METER_IN_FEET: f64 = 3.28084;

    /// Meters in one nautical mile.
    pub const NAUTICAL_MILE_IN_METER: f64 = 1852.0;
}

pub use airspace::{Airspace, UNNAMED};
pub use altitude::{Altitude, VerticalDistance};
pub use class::AirspaceClass;
pub use command::{Command, Commands, Line};
pub use coord::Coord;
pub use error::{Diagnostic, Error};
pub use geometry::{Direction, Geometry, PolygonSegment};
pub use parser::Parser;

/// Everything read from one OpenAir file.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct OpenAir {
    /// The airspaces in the order of the file.
    pub airspaces: Vec<Airspace>,

    /// Problems found while reading. An airspace with errors is still part of
    /// `airspaces`.
    pub errors: Vec<Diagnostic>,

    /// Comments that don't belong to an airspace.
    pub comments: Vec<String>,
}

impl OpenAir {
    /// The errors formatted as `error on line N: <message>`.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

impl FromStr for OpenAir {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parser = Parser::new();

        for (number, line) in Commands::new(s) {
            parser.handle(number, line);
        }

        Ok(parser.finish())
    }
}

/// Reads an OpenAir file line by line.
///
/// Only I/O errors of the `reader` are returned. Any problem with the content
/// is part of [`OpenAir::errors`].
pub fn parse<R: BufRead>(mut reader: R) -> io::Result<OpenAir> {
    let mut parser = Parser::new();
    let mut buf = Vec::new();
    let mut number = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        number += 1;
        let line = String::from_utf8_lossy(&buf);
        parser.parse_line(number, line.trim_end_matches(['\r', '\n']));
    }

    Ok(parser.finish())
}
