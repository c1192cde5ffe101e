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

use std::error;
use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Reason why a single line or airspace could not be read as intended.
///
/// None of these errors stop the parser. They are collected as
/// [`Diagnostic`]s next to whatever could be extracted from the file.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Error {
    MissingSeparator {
        line: String,
    },
    UnknownCommand {
        command: String,
    },
    NoAirspace {
        command: &'static str,
    },
    NameAlreadySet {
        name: String,
    },
    InvalidFlightLevel {
        value: String,
    },
    InvalidCoordinate {
        value: String,
    },
    InvalidRadius {
        value: String,
    },
    InvalidArc {
        command: &'static str,
        value: String,
    },
    InvalidDirection {
        value: String,
    },
    InvalidVariable {
        value: String,
    },
    MissingCenter,
    GeometryConflict {
        existing: &'static str,
        rejected: &'static str,
    },
    InvalidColor {
        command: &'static str,
        value: String,
        expected: usize,
    },
    MissingField {
        field: &'static str,
        airspace: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSeparator { line } => {
                write!(f, "no space between command and data in \"{line}\"")
            }
            Self::UnknownCommand { command } => write!(f, "unrecognized command \"{command}\""),
            Self::NoAirspace { command } => {
                write!(f, "{command} outside of an airspace block (missing AC)")
            }
            Self::NameAlreadySet { name } => {
                write!(f, "airspace name already set, appended to \"{name}\"")
            }
            Self::InvalidFlightLevel { value } => {
                write!(f, "invalid flight level \"{value}\", kept as text")
            }
            Self::InvalidCoordinate { value } => write!(f, "invalid coordinate \"{value}\""),
            Self::InvalidRadius { value } => write!(f, "invalid radius \"{value}\""),
            Self::InvalidArc { command, value } => {
                write!(f, "invalid {command} arc definition \"{value}\"")
            }
            Self::InvalidDirection { value } => {
                write!(
                    f,
                    "invalid direction \"{value}\" should be + or -, using clockwise"
                )
            }
            Self::InvalidVariable { value } => {
                write!(f, "invalid variable definition \"{value}\"")
            }
            Self::MissingCenter => write!(f, "center point variable X is not set"),
            Self::GeometryConflict { existing, rejected } => {
                write!(f, "airspace is already a {existing} and can't add a {rejected}")
            }
            Self::InvalidColor {
                command,
                value,
                expected,
            } => {
                write!(
                    f,
                    "{command} color \"{value}\" should have {expected} comma separated numbers"
                )
            }
            Self::MissingField { field, airspace } => {
                write!(f, "airspace \"{airspace}\" has no {field}")
            }
        }
    }
}

impl error::Error for Error {}

/// An [`Error`] together with the line on which it was found.
///
/// Formats as `error on line N: <message>`. Lines are counted from 1.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Diagnostic {
    pub line: usize,
    pub error: Error,
}

impl Diagnostic {
    pub fn new(line: usize, error: Error) -> Self {
        Self { line, error }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error on line {}: {}", self.line, self.error)
    }
}

impl error::Error for Diagnostic {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        Some(&self.error)
    }
}
