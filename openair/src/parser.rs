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

use log::{debug, trace, warn};

use crate::airspace::{parse_color, Airspace, AirspaceBuilder};
use crate::altitude::Altitude;
use crate::class::AirspaceClass;
use crate::command::{unescape, Command, Line};
use crate::coord::Coord;
use crate::error::{Diagnostic, Error};
use crate::geometry::PolygonSegment;
use crate::variables::Variables;
use crate::OpenAir;

/// State of a single parse run.
///
/// Lines are fed one by one with [`parse_line`](Self::parse_line) and the
/// result is taken with [`finish`](Self::finish), which consumes the parser.
/// Malformed lines never stop the parser but are recorded as [`Diagnostic`].
#[derive(Debug, Default)]
pub struct Parser {
    current: Option<AirspaceBuilder>,
    variables: Variables,
    pending: Vec<String>,
    airspaces: Vec<Airspace>,
    errors: Vec<Diagnostic>,
    comments: Vec<String>,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the raw `line` with the 1-based line `number`.
    pub fn parse_line(&mut self, number: usize, line: &str) {
        self.handle(number, Line::parse(line));
    }

    /// Handles a line that was already classified e.g. by the
    /// [`Commands`](crate::Commands) iterator.
    pub fn handle(&mut self, number: usize, line: Result<Line<'_>, Error>) {
        match line {
            Ok(Line::Blank) => self.comments.append(&mut self.pending),
            Ok(Line::Comment(comment)) => {
                if !comment.is_empty() {
                    self.pending.push(unescape(comment));
                }
            }
            Ok(Line::Command(command)) => {
                trace!("line {number}: {command:?}");
                if let Err(e) = self.dispatch(number, command) {
                    self.record(number, e);
                }
            }
            Err(e) => self.record(number, e),
        }
    }

    /// Finalizes the open airspace and returns everything that was read.
    pub fn finish(mut self) -> OpenAir {
        self.flush_comments();
        self.finalize();

        OpenAir {
            airspaces: self.airspaces,
            errors: self.errors,
            comments: self.comments,
        }
    }

    fn dispatch(&mut self, number: usize, command: Command<'_>) -> Result<(), Error> {
        let airspace = match command {
            Command::Class(data) => {
                self.flush_comments();
                self.finalize();
                self.current = Some(AirspaceBuilder::new(number, AirspaceClass::from_code(data)));
                return Ok(());
            }
            Command::Variable(data) => return self.variables.define(data),
            Command::Ignored(_) => return Ok(()),
            _ => self.current.as_mut().ok_or(Error::NoAirspace {
                command: command.code(),
            })?,
        };

        match command {
            Command::Name(data) => airspace.set_name(&unescape(data)),
            Command::Floor(data) => {
                let (floor, error) = Altitude::interpret(data);
                airspace.set_floor(floor);
                error.map_or(Ok(()), Err)
            }
            Command::Ceiling(data) => {
                let (ceiling, error) = Altitude::interpret(data);
                airspace.set_ceiling(ceiling);
                error.map_or(Ok(()), Err)
            }
            Command::Type(data) => {
                airspace.set_type(&unescape(data));
                Ok(())
            }
            Command::Frequency(data) => {
                airspace.set_frequency(&unescape(data));
                Ok(())
            }
            Command::CallSign(data) => {
                airspace.set_call_sign(&unescape(data));
                Ok(())
            }
            Command::Pen(data) => {
                airspace.set_color(parse_color("SP", data)?);
                Ok(())
            }
            Command::Brush(data) => {
                airspace.set_color(parse_color("SB", data)?);
                Ok(())
            }
            Command::Point(data) => {
                let coord: Coord = data.parse()?;
                airspace.geometry_mut().add_segment(PolygonSegment::Point(coord))
            }
            Command::Circle(data) => {
                let radius = data
                    .parse::<f64>()
                    .ok()
                    .filter(|r| r.is_finite() && *r > 0.0)
                    .ok_or_else(|| Error::InvalidRadius {
                        value: data.to_string(),
                    })?;

                let center = self.variables.center()?;
                airspace.geometry_mut().set_circle(center, radius)
            }
            Command::ArcSegment(data) | Command::Arc(data) => {
                let center = self.variables.center()?;
                let (direction, error) = self.variables.direction();
                if let Some(e) = error {
                    warn!("line {number}: {e}");
                    self.errors.push(Diagnostic::new(number, e));
                }

                let segment = if matches!(command, Command::Arc(_)) {
                    PolygonSegment::arc(data, center, direction)?
                } else {
                    PolygonSegment::arc_segment(data, center, direction)?
                };

                airspace.geometry_mut().add_segment(segment)
            }
            Command::Class(_) | Command::Variable(_) | Command::Ignored(_) => Ok(()),
        }
    }

    /// Moves pending comments to the airspace that is about to be finalized
    /// or, if there is none, to the file comments.
    fn flush_comments(&mut self) {
        if self.pending.is_empty() {
            return;
        }

        let pending = std::mem::take(&mut self.pending);
        match self.current.as_mut() {
            Some(airspace) => airspace.add_description(pending),
            None => self.comments.extend(pending),
        }
    }

    fn finalize(&mut self) {
        let Some(builder) = self.current.take() else {
            return;
        };

        let line = builder.line();
        let (airspace, errors) = builder.build();
        debug!("finalized airspace {airspace} from line {line}");

        for e in errors {
            self.record(line, e);
        }

        self.airspaces.push(airspace);
        self.variables.reset_direction();
    }

    fn record(&mut self, line: usize, error: Error) {
        warn!("line {line}: {error}");
        self.errors.push(Diagnostic::new(line, error));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Direction, Geometry};

    fn parse(lines: &[&str]) -> OpenAir {
        let mut parser = Parser::new();
        for (i, line) in lines.iter().enumerate() {
            parser.parse_line(i + 1, line);
        }
        parser.finish()
    }

    #[test]
    fn command_outside_airspace() {
        let result = parse(&["AN Text"]);

        assert!(result.airspaces.is_empty());
        assert_eq!(
            result.errors,
            vec![Diagnostic::new(1, Error::NoAirspace { command: "AN" })]
        );
    }

    #[test]
    fn double_class_finalizes_empty_airspace() {
        let result = parse(&["AC R", "AC Q", "AN Danger", "AL GND", "AH FL100", "DP 52:00:00 N 013:00:00 E"]);

        assert_eq!(result.airspaces.len(), 2);
        assert_eq!(result.airspaces[0].class, AirspaceClass::Restricted);
        assert_eq!(result.airspaces[1].class, AirspaceClass::Danger);
        assert!(result.errors.iter().all(|d| d.line == 1));
        assert_eq!(result.errors.len(), 4);
    }

    #[test]
    fn overflowing_radius_is_rejected() {
        let result = parse(&[
            "V X=52:00:00 N 013:00:00 E",
            "AC D",
            "DC 1e306",
            "AC R",
            "DA 1e306,0,90",
        ]);

        assert!(result.airspaces.iter().all(|a| a.geometry.is_none()));
        assert!(matches!(
            result.errors[0],
            Diagnostic {
                line: 3,
                error: Error::InvalidRadius { .. }
            }
        ));
        assert!(result
            .errors
            .iter()
            .any(|d| d.line == 5 && matches!(d.error, Error::InvalidRadius { .. })));
    }

    #[test]
    fn invalid_circle_radius() {
        let result = parse(&["V X=52:00:00 N 013:00:00 E", "AC D", "AN D", "AL GND", "AH 2500ft", "DC abc"]);

        assert_eq!(result.airspaces[0].geometry, None);
        assert_eq!(
            result.errors[0],
            Diagnostic::new(
                6,
                Error::InvalidRadius {
                    value: "abc".to_string()
                }
            )
        );
    }

    #[test]
    fn circle_without_center() {
        let result = parse(&["AC D", "DC 5"]);
        assert!(result
            .errors
            .contains(&Diagnostic::new(2, Error::MissingCenter)));
    }

    #[test]
    fn direction_resets_after_airspace() {
        let result = parse(&[
            "V X=52:00:00 N 013:00:00 E",
            "AC R",
            "V D=-",
            "DA 5,0,90",
            "AC R",
            "DA 5,90,180",
        ]);

        let directions: Vec<Direction> = result
            .airspaces
            .iter()
            .filter_map(|a| match &a.geometry {
                Some(Geometry::Polygon { segments }) => match segments.first() {
                    Some(PolygonSegment::ArcSegment { direction, .. }) => Some(*direction),
                    _ => None,
                },
                _ => None,
            })
            .collect();

        assert_eq!(
            directions,
            vec![Direction::CounterClockwise, Direction::Clockwise]
        );
    }

    #[test]
    fn invalid_direction_falls_back() {
        let result = parse(&["V X=52:00:00 N 013:00:00 E", "AC R", "V D=x", "DA 5,0,90"]);

        assert!(result.errors.iter().any(|d| d.line == 4
            && matches!(d.error, Error::InvalidDirection { .. })));
        match &result.airspaces[0].geometry {
            Some(Geometry::Polygon { segments }) => assert_eq!(segments.len(), 1),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn comments() {
        let result = parse(&[
            "* file header",
            "",
            "AC R",
            "* first",
            "* second",
            "AN R1 * trailing comment is dropped",
            "AC Q",
            "* ends up at Q",
        ]);

        assert_eq!(result.comments, vec!["file header".to_string()]);
        assert_eq!(result.airspaces[0].description.as_deref(), Some("first\nsecond"));
        assert_eq!(result.airspaces[0].name, "R1");
        assert_eq!(result.airspaces[1].description.as_deref(), Some("ends up at Q"));
    }

    #[test]
    fn blank_line_moves_comments_to_file() {
        let result = parse(&["AC R", "AN R1", "* mid-block note", "", "AL GND", "* kept"]);

        assert_eq!(result.comments, vec!["mid-block note".to_string()]);
        assert_eq!(result.airspaces[0].description.as_deref(), Some("kept"));
    }

    #[test]
    fn ignored_commands() {
        let result = parse(&["AT 52:00:00 N 013:00:00 E", "TO text", "TC 1"]);
        assert!(result.errors.is_empty());
    }
}
