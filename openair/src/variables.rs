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

//! Variables set by the `V` command.

use std::collections::HashMap;

use crate::coord::Coord;
use crate::error::Error;
use crate::geometry::Direction;

const CENTER: &str = "X";
const DIRECTION: &str = "D";

/// Named variables of one parse run.
///
/// Keys are case-insensitive. The values are kept as written and are only
/// interpreted when a command uses them.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Variables {
    values: HashMap<String, String>,
}

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defines a variable from the data of a `V` command e.g. `X=52:23:00 N
    /// 005:50:00 E`. Existing values are overwritten.
    pub fn define(&mut self, data: &str) -> Result<(), Error> {
        match data.split_once('=') {
            Some((key, value)) if !key.trim().is_empty() => {
                self.values
                    .insert(key.trim().to_ascii_uppercase(), value.trim().to_string());
                Ok(())
            }
            _ => Err(Error::InvalidVariable {
                value: data.trim().to_string(),
            }),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .get(&key.to_ascii_uppercase())
            .map(String::as_str)
    }

    /// Returns the center point `X`.
    pub fn center(&self) -> Result<Coord, Error> {
        self.get(CENTER).ok_or(Error::MissingCenter)?.parse()
    }

    /// Returns the arc direction `D`.
    ///
    /// Defaults to clockwise if `D` is not set. An invalid value falls back to
    /// clockwise as well and the error is returned alongside.
    pub fn direction(&self) -> (Direction, Option<Error>) {
        match self.get(DIRECTION).map(str::parse::<Direction>) {
            None => (Direction::default(), None),
            Some(Ok(direction)) => (direction, None),
            Some(Err(e)) => (Direction::default(), Some(e)),
        }
    }

    /// Forgets the direction `D` while keeping the center `X` for following
    /// airspaces.
    pub fn reset_direction(&mut self) {
        self.values.remove(DIRECTION);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_case_insensitive() {
        let mut vars = Variables::new();
        vars.define("x = 52:00:00 N 013:00:00 E").unwrap();

        assert_eq!(vars.get("X"), Some("52:00:00 N 013:00:00 E"));
        assert_eq!(vars.center(), Ok(Coord::new(52.0, 13.0)));
    }

    #[test]
    fn direction_defaults_to_clockwise() {
        let mut vars = Variables::new();
        assert_eq!(vars.direction(), (Direction::Clockwise, None));

        vars.define("D=-").unwrap();
        assert_eq!(vars.direction(), (Direction::CounterClockwise, None));

        vars.define("D=?").unwrap();
        let (direction, error) = vars.direction();
        assert_eq!(direction, Direction::Clockwise);
        assert!(error.is_some());
    }

    #[test]
    fn reset_keeps_center() {
        let mut vars = Variables::new();
        vars.define("X=52:00:00 N 013:00:00 E").unwrap();
        vars.define("D=-").unwrap();
        vars.reset_direction();

        assert_eq!(vars.get("D"), None);
        assert!(vars.center().is_ok());
    }

    #[test]
    fn missing_center() {
        assert_eq!(Variables::new().center(), Err(Error::MissingCenter));
    }

    #[test]
    fn invalid_definition() {
        let mut vars = Variables::new();
        assert!(vars.define("X 52:00:00 N 013:00:00 E").is_err());
        assert!(vars.define("=+").is_err());
    }
}
