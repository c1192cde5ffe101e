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

use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::METER_IN_FEET;
use crate::error::Error;

/// A vertical limit as written in an `AL` or `AH` command.
///
/// Heights are stored in feet. Heights given in meters are converted when
/// parsed.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum VerticalDistance {
    /// Ground or surface level.
    Gnd,

    /// No upper limit.
    Unlimited,

    /// Flight level in hundreds of feet at standard air pressure.
    Fl(u16),

    /// Feet above mean sea level.
    Msl(f64),

    /// Feet above ground level.
    Agl(f64),

    /// Anything that isn't understood, kept as written e.g. `NOTAM`.
    Textual(String),
}

impl VerticalDistance {
    /// Returns the approximate height in meters.
    ///
    /// Ground level is 0 m and AGL heights are treated as if the ground were
    /// at sea level. Returns `None` for [`Unlimited`] and [`Textual`] limits
    /// which have no finite height.
    ///
    /// [`Unlimited`]: VerticalDistance::Unlimited
    /// [`Textual`]: VerticalDistance::Textual
    pub fn approx_meters(&self) -> Option<f64> {
        match self {
            Self::Gnd => Some(0.0),
            Self::Fl(fl) => Some(*fl as f64 * 100.0 / METER_IN_FEET),
            Self::Msl(ft) | Self::Agl(ft) => Some(ft / METER_IN_FEET),
            Self::Unlimited | Self::Textual(_) => None,
        }
    }

    fn interpret(text: &str) -> (Self, Option<Error>) {
        let compact: String = text
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_ascii_uppercase();

        match compact.as_str() {
            "SFC" | "GND" | "0FTGND" => return (Self::Gnd, None),
            "UNL" | "UNLTD" | "UNLIM" | "UNLIMITED" => return (Self::Unlimited, None),
            _ => {}
        }

        if let Some(level) = compact.strip_prefix("FL") {
            return match level.parse::<u16>() {
                Ok(fl) => (Self::Fl(fl), None),
                Err(_) => (
                    Self::Textual(text.to_string()),
                    Some(Error::InvalidFlightLevel {
                        value: text.to_string(),
                    }),
                ),
            };
        }

        match fixed_height(&compact) {
            Some(height) => (height, None),
            None => (Self::Textual(text.to_string()), None),
        }
    }
}

/// Reads heights like `1500FT`, `300M AMSL` or `2000 ft AGL`.
fn fixed_height(compact: &str) -> Option<VerticalDistance> {
    let (value, agl) = if let Some(value) = compact
        .strip_suffix("AMSL")
        .or_else(|| compact.strip_suffix("MSL"))
    {
        (value, false)
    } else if let Some(value) = compact
        .strip_suffix("AGL")
        .or_else(|| compact.strip_suffix("GND"))
        .or_else(|| compact.strip_suffix("SFC"))
    {
        (value, true)
    } else {
        (compact, false)
    };

    let feet = if let Some(meters) = value.strip_suffix('M') {
        parse_number(meters)? * METER_IN_FEET
    } else {
        let feet = value
            .strip_suffix("FT")
            .or_else(|| value.strip_suffix('F'))
            .unwrap_or(value);
        parse_number(feet)?
    };

    if agl {
        Some(VerticalDistance::Agl(feet))
    } else {
        Some(VerticalDistance::Msl(feet))
    }
}

fn parse_number(s: &str) -> Option<f64> {
    // f64::from_str accepts "inf" and "NaN" which are no heights
    if s.is_empty()
        || !s
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.' || c == '-' || c == '+')
    {
        return None;
    }

    s.parse::<f64>().ok()
}

impl fmt::Display for VerticalDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gnd => write!(f, "GND"),
            Self::Unlimited => write!(f, "UNL"),
            Self::Fl(value) => write!(f, "FL{value}"),
            Self::Msl(value) => write!(f, "{value} ft MSL"),
            Self::Agl(value) => write!(f, "{value} ft AGL"),
            Self::Textual(text) => write!(f, "{text}"),
        }
    }
}

impl PartialOrd for VerticalDistance {
    /// Compares limits that refer to a common datum.
    ///
    /// Ground is below and unlimited above everything. Flight levels and MSL
    /// heights are compared in feet, AGL only with AGL. All other pairs are
    /// incomparable.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Textual(_), _) | (_, Self::Textual(_)) => None,

            (Self::Gnd, Self::Gnd) => Some(Ordering::Equal),
            (Self::Gnd, _) => Some(Ordering::Less),
            (_, Self::Gnd) => Some(Ordering::Greater),

            (Self::Unlimited, Self::Unlimited) => Some(Ordering::Equal),
            (Self::Unlimited, _) => Some(Ordering::Greater),
            (_, Self::Unlimited) => Some(Ordering::Less),

            (Self::Agl(v), Self::Agl(o)) => v.partial_cmp(o),
            (Self::Agl(_), _) | (_, Self::Agl(_)) => None,

            _ => {
                fn to_msl(vd: &VerticalDistance) -> f64 {
                    match vd {
                        VerticalDistance::Fl(v) => *v as f64 * 100.0,
                        VerticalDistance::Msl(v) => *v,
                        _ => f64::NAN,
                    }
                }

                to_msl(self).partial_cmp(&to_msl(other))
            }
        }
    }
}

/// A vertical limit of an airspace with optional opening times.
///
/// The opening times are taken from parenthesized text within the limit
/// e.g. `FL100 (MON-FRI 0700-1600)`.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Altitude {
    pub distance: VerticalDistance,
    pub opening_times: Option<String>,
}

impl Altitude {
    pub fn new(distance: VerticalDistance) -> Self {
        Self {
            distance,
            opening_times: None,
        }
    }

    pub fn gnd() -> Self {
        Self::new(VerticalDistance::Gnd)
    }

    pub fn unlimited() -> Self {
        Self::new(VerticalDistance::Unlimited)
    }

    /// Interprets an altitude token.
    ///
    /// Never fails. Tokens that match no known pattern become
    /// [`VerticalDistance::Textual`]. The error is returned for flight levels
    /// with an invalid number which are kept as text as well.
    pub fn interpret(token: &str) -> (Self, Option<Error>) {
        let (text, opening_times) = split_opening_times(token);
        let (distance, error) = VerticalDistance::interpret(&text);

        (
            Self {
                distance,
                opening_times,
            },
            error,
        )
    }
}

impl FromStr for Altitude {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::interpret(s).0)
    }
}

impl fmt::Display for Altitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.opening_times {
            Some(times) => write!(f, "{} ({times})", self.distance),
            None => write!(f, "{}", self.distance),
        }
    }
}

fn split_opening_times(token: &str) -> (String, Option<String>) {
    let Some(open) = token.find('(') else {
        return (token.trim().to_string(), None);
    };

    let inner = &token[open + 1..];
    let (times, after) = match inner.find(')') {
        Some(close) => (&inner[..close], &inner[close + 1..]),
        // unbalanced, take everything to the end
        None => (inner, ""),
    };

    let value = format!("{} {}", token[..open].trim(), after.trim())
        .trim()
        .to_string();
    let times = times.trim();

    (value, (!times.is_empty()).then(|| times.to_string()))
}
