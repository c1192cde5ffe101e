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

//! Classification of OpenAir lines into commands.

use crate::error::Error;

const COMMENT: char = '*';
const ESCAPE: char = '\\';
const BOM: char = '\u{feff}';

/// A command with its data.
///
/// The data references the line with any trailing comment removed.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Command<'a> {
    /// `AC` airspace class
    Class(&'a str),
    /// `AN` airspace name
    Name(&'a str),
    /// `AL` floor
    Floor(&'a str),
    /// `AH` ceiling
    Ceiling(&'a str),
    /// `AY` airspace type
    Type(&'a str),
    /// `AF` frequency
    Frequency(&'a str),
    /// `AG` call sign
    CallSign(&'a str),
    /// `SP` pen
    Pen(&'a str),
    /// `SB` brush
    Brush(&'a str),
    /// `DP` polygon point
    Point(&'a str),
    /// `DC` circle radius
    Circle(&'a str),
    /// `DA` arc by radius and angles
    ArcSegment(&'a str),
    /// `DB` arc by coordinates
    Arc(&'a str),
    /// `V` variable definition
    Variable(&'a str),
    /// `AT`, `TO` and `TC` which are accepted but have no effect.
    Ignored(&'a str),
}

impl<'a> Command<'a> {
    /// Splits `line` at its first space into command and data.
    pub fn parse(line: &'a str) -> Result<Self, Error> {
        let Some((code, data)) = line.split_once(' ') else {
            return Err(Error::MissingSeparator {
                line: line.to_string(),
            });
        };

        let data = data.trim();

        match code.to_ascii_uppercase().as_str() {
            "AC" => Ok(Self::Class(data)),
            "AN" => Ok(Self::Name(data)),
            "AL" => Ok(Self::Floor(data)),
            "AH" => Ok(Self::Ceiling(data)),
            "AY" => Ok(Self::Type(data)),
            "AF" => Ok(Self::Frequency(data)),
            "AG" => Ok(Self::CallSign(data)),
            "SP" => Ok(Self::Pen(data)),
            "SB" => Ok(Self::Brush(data)),
            "DP" => Ok(Self::Point(data)),
            "DC" => Ok(Self::Circle(data)),
            "DA" => Ok(Self::ArcSegment(data)),
            "DB" => Ok(Self::Arc(data)),
            "V" => Ok(Self::Variable(data)),
            "AT" | "TO" | "TC" => Ok(Self::Ignored(data)),
            _ => Err(Error::UnknownCommand {
                command: code.to_string(),
            }),
        }
    }

    /// The two letter code of the command.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Class(_) => "AC",
            Self::Name(_) => "AN",
            Self::Floor(_) => "AL",
            Self::Ceiling(_) => "AH",
            Self::Type(_) => "AY",
            Self::Frequency(_) => "AF",
            Self::CallSign(_) => "AG",
            Self::Pen(_) => "SP",
            Self::Brush(_) => "SB",
            Self::Point(_) => "DP",
            Self::Circle(_) => "DC",
            Self::ArcSegment(_) => "DA",
            Self::Arc(_) => "DB",
            Self::Variable(_) => "V",
            Self::Ignored(_) => "AT",
        }
    }
}

/// A single line of an OpenAir file.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Line<'a> {
    /// An empty line or one with whitespace only.
    Blank,
    /// A line that contains only a comment. The comment marker is removed.
    Comment(&'a str),
    Command(Command<'a>),
}

impl<'a> Line<'a> {
    /// Classifies a raw line.
    ///
    /// Everything after the first unescaped `*` is a comment. A comment marker
    /// can be escaped as `\*`, which is kept in the data and removed by
    /// [`unescape`].
    pub fn parse(raw: &'a str) -> Result<Self, Error> {
        let line = raw.trim_start_matches(BOM).trim();

        if line.is_empty() {
            return Ok(Self::Blank);
        }

        match comment_start(line) {
            Some(0) => Ok(Self::Comment(
                line.trim_start_matches(COMMENT).trim(),
            )),
            Some(start) => Command::parse(line[..start].trim()).map(Self::Command),
            None => Command::parse(line).map(Self::Command),
        }
    }
}

fn comment_start(line: &str) -> Option<usize> {
    let mut escaped = false;

    for (i, c) in line.char_indices() {
        match c {
            COMMENT if !escaped => return Some(i),
            ESCAPE => escaped = !escaped,
            _ => escaped = false,
        }
    }

    None
}

/// Replaces escaped comment markers `\*` by `*`.
pub fn unescape(data: &str) -> String {
    data.replace("\\*", "*")
}

/// Iterator over the numbered and classified lines of an OpenAir string.
///
/// # Examples
///
/// ```
/// use openair::{Command, Line, Commands};
///
/// let data = "* test\nAC R\nAN ED-R 1";
///
/// for (number, line) in Commands::new(data) {
///     if let Ok(Line::Command(Command::Name(name))) = line {
///         assert_eq!(number, 3);
///         assert_eq!(name, "ED-R 1");
///     }
/// }
/// ```
pub struct Commands<'a> {
    inner: std::str::Lines<'a>,
    number: usize,
}

impl<'a> Commands<'a> {
    pub fn new(data: &'a str) -> Self {
        Self {
            inner: data.lines(),
            number: 0,
        }
    }
}

impl<'a> Iterator for Commands<'a> {
    type Item = (usize, Result<Line<'a>, Error>);

    fn next(&mut self) -> Option<Self::Item> {
        let raw = self.inner.next()?;
        self.number += 1;
        Some((self.number, Line::parse(raw)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_split() {
        assert_eq!(Command::parse("AC R"), Ok(Command::Class("R")));
        assert_eq!(Command::parse("AN  ED-R 1 "), Ok(Command::Name("ED-R 1")));
        assert_eq!(
            Command::parse("V X=52:00:00 N 013:00:00 E"),
            Ok(Command::Variable("X=52:00:00 N 013:00:00 E"))
        );
        assert_eq!(Command::parse("dp 1"), Ok(Command::Point("1")));
        assert_eq!(Command::parse("TO ignored"), Ok(Command::Ignored("ignored")));
    }

    #[test]
    fn command_errors() {
        assert!(matches!(
            Command::parse("AC"),
            Err(Error::MissingSeparator { .. })
        ));
        assert_eq!(
            Command::parse("XX 1"),
            Err(Error::UnknownCommand {
                command: "XX".to_string()
            })
        );
    }

    #[test]
    fn lines() {
        assert_eq!(Line::parse(""), Ok(Line::Blank));
        assert_eq!(Line::parse("  \t"), Ok(Line::Blank));
        assert_eq!(Line::parse("* Comment"), Ok(Line::Comment("Comment")));
        assert_eq!(Line::parse("*****"), Ok(Line::Comment("")));
        assert_eq!(Line::parse("\u{feff}AC D"), Ok(Line::Command(Command::Class("D"))));
        assert_eq!(
            Line::parse("AN EDR 1 * trailing"),
            Ok(Line::Command(Command::Name("EDR 1")))
        );
        assert_eq!(
            Line::parse("AN Star \\* Name"),
            Ok(Line::Command(Command::Name("Star \\* Name")))
        );
    }

    #[test]
    fn unescapes_comment_marker() {
        assert_eq!(unescape("Star \\* Name"), "Star * Name");
    }

    #[test]
    fn numbers_lines() {
        let numbers: Vec<usize> = Commands::new("AC R\n\nAN X\r\n").map(|(n, _)| n).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }
}
