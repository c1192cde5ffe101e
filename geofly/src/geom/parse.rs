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

//! Coordinates typed or pasted by a user.

use log::trace;

use super::MapPoint;

/// Query parameters of map links that may hold a coordinate.
const QUERY_KEYS: [&str; 5] = ["q", "query", "ll", "center", "daddr"];

/// Path segments of map links that are followed by a place.
const PLACE_SEGMENTS: [&str; 2] = ["place", "search"];

/// Parses a coordinate from free text.
///
/// Accepts decimal degrees (`47.6764385, 11.8710533`), degrees with minutes
/// and seconds (`47°40'35"N 11°52'15"E`), `geo:` URIs and links of map
/// services that contain a coordinate in their query or path. Returns `None`
/// if the text is no coordinate.
///
/// ```
/// use geofly::parse_coordinate;
///
/// let p = parse_coordinate("47°40'35\"N 11°52'15\"E").unwrap();
/// assert!((p.latitude - 47.6763889).abs() < 1e-6);
///
/// let p = parse_coordinate("https://maps.google.com/?q=47.6764385,11.8710533").unwrap();
/// assert_eq!(p.longitude, 11.8710533);
/// ```
pub fn parse_coordinate(input: &str) -> Option<MapPoint> {
    let input = input.trim();
    let lower = input.to_ascii_lowercase();

    let point = if lower.starts_with("http://") || lower.starts_with("https://") {
        parse_url(input)
    } else if lower.starts_with("geo:") {
        parse_geo_uri(&input[4..])
    } else {
        parse_text(input)
    };

    trace!("parsed {input:?} as {point:?}");
    point
}

fn parse_url(url: &str) -> Option<MapPoint> {
    let (_, rest) = url.split_once("://")?;
    let rest = rest.split('#').next().unwrap_or_default();
    let (path, query) = split_query(rest);

    let from_query = query.and_then(|query| {
        query_values(query)
            .filter(|(key, _)| QUERY_KEYS.contains(key))
            .find_map(|(_, value)| parse_coordinate(&percent_decode(value)))
    });

    if from_query.is_some() {
        return from_query;
    }

    // the first segment is the host
    let mut previous = "";
    for segment in path.split('/').skip(1) {
        let decoded = percent_decode(segment);

        let point = if let Some(view) = decoded.strip_prefix('@') {
            let mut fields = view.split(',');
            match (fields.next(), fields.next()) {
                (Some(lat), Some(lon)) => parse_text(&format!("{lat},{lon}")),
                _ => None,
            }
        } else if PLACE_SEGMENTS.contains(&previous) {
            parse_coordinate(&decoded)
        } else {
            None
        };

        if point.is_some() {
            return point;
        }

        previous = segment;
    }

    None
}

/// Parses the part after `geo:` e.g. `47.67,11.87,500;u=35` or
/// `0,0?q=47.67,11.87(Label)`.
fn parse_geo_uri(rest: &str) -> Option<MapPoint> {
    let (path, query) = split_query(rest);

    let from_query = query.and_then(|query| {
        query_values(query)
            .filter(|(key, _)| *key == "q")
            .find_map(|(_, value)| {
                let value = percent_decode(value);
                let value = value.split('(').next().unwrap_or_default();
                parse_coordinate(value)
            })
    });

    if from_query.is_some() {
        return from_query;
    }

    let path = percent_decode(path.split(';').next().unwrap_or_default());
    let mut fields = path.split(',');
    let (lat, lon) = (fields.next()?, fields.next()?);
    let altitude = fields
        .next()
        .and_then(|a| a.trim().parse::<f64>().ok())
        .filter(|a| a.is_finite());

    let mut point = parse_text(&format!("{lat},{lon}")).filter(MapPoint::is_valid)?;
    point.altitude = altitude;
    Some(point)
}

fn split_query(s: &str) -> (&str, Option<&str>) {
    match s.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (s, None),
    }
}

fn query_values(query: &str) -> impl Iterator<Item = (&str, &str)> {
    query
        .split('&')
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
}

fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'+' => decoded.push(b' '),
            b'%' if i + 2 < bytes.len() => {
                let hex = std::str::from_utf8(&bytes[i + 1..i + 3])
                    .ok()
                    .and_then(|hex| u8::from_str_radix(hex, 16).ok());

                match hex {
                    Some(b) => {
                        decoded.push(b);
                        i += 2;
                    }
                    None => decoded.push(b'%'),
                }
            }
            b => decoded.push(b),
        }
        i += 1;
    }

    String::from_utf8_lossy(&decoded).into_owned()
}

/// Parses two angles separated by a single comma or a single space.
fn parse_text(text: &str) -> Option<MapPoint> {
    let text = normalize(text);
    let (first, second) = split_pair(&text)?;

    // a longitude followed by a latitude is swapped
    let (lat, lon) = if has_hemisphere(first, &['E', 'W']) && has_hemisphere(second, &['N', 'S']) {
        (second, first)
    } else {
        (first, second)
    };

    let latitude = parse_angle(lat, 'N', 'S')?;
    let longitude = parse_angle(lon, 'E', 'W')?;

    if !(-90.0..=90.0).contains(&latitude) {
        return None;
    }

    Some(MapPoint::new(latitude, longitude))
}

/// Collapses whitespace and replaces typographic primes by `'` and `"`.
fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .chars()
        .map(|c| match c {
            '\u{2032}' | '\u{2018}' | '\u{2019}' | '\u{00b4}' | '`' => '\'',
            '\u{2033}' | '\u{201c}' | '\u{201d}' => '"',
            '\u{00ba}' | '\u{02da}' => '°',
            c => c,
        })
        .collect::<String>()
        .replace("''", "\"")
}

fn split_pair(text: &str) -> Option<(&str, &str)> {
    let delimiter = match text.matches(',').count() {
        1 => ',',
        0 if text.matches(' ').count() == 1 => ' ',
        _ => return None,
    };

    let (first, second) = text.split_once(delimiter)?;
    let (first, second) = (first.trim(), second.trim());

    if first.is_empty() || second.is_empty() {
        None
    } else {
        Some((first, second))
    }
}

fn has_hemisphere(token: &str, letters: &[char]) -> bool {
    let upper = |c: char| c.to_ascii_uppercase();

    token.chars().next().map(upper).is_some_and(|c| letters.contains(&c))
        || token.chars().last().map(upper).is_some_and(|c| letters.contains(&c))
}

/// Parses a signed angle with an optional leading or trailing hemisphere
/// letter, where `negative` flips the sign.
fn parse_angle(token: &str, positive: char, negative: char) -> Option<f64> {
    let token: String = token
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_uppercase();

    let (value, sign) = strip_hemisphere(&token, positive, negative)?;
    let angle = decimal(value).or_else(|| dms(value))?;

    Some(sign * angle)
}

fn strip_hemisphere(token: &str, positive: char, negative: char) -> Option<(&str, f64)> {
    let sign = |c: char| {
        if c == positive {
            Some(1.0)
        } else if c == negative {
            Some(-1.0)
        } else {
            None
        }
    };

    let first = token.chars().next()?;
    let last = token.chars().last()?;

    if first.is_ascii_alphabetic() {
        Some((&token[1..], sign(first)?))
    } else if last.is_ascii_alphabetic() {
        Some((&token[..token.len() - 1], sign(last)?))
    } else {
        Some((token, 1.0))
    }
}

fn decimal(s: &str) -> Option<f64> {
    let digits = s.strip_prefix(['-', '+']).unwrap_or(s);

    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return None;
    }

    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parses `D°M'S"`, `D°M'` or `D°` with decimal places on the last part.
fn dms(s: &str) -> Option<f64> {
    if ['°', '\'', '"'].iter().any(|mark| s.matches(*mark).count() > 1) {
        return None;
    }

    let (degrees, rest) = s.split_once('°')?;
    let (minutes, rest) = rest.split_once('\'').unwrap_or((rest, ""));
    let (seconds, rest) = rest.split_once('"').unwrap_or((rest, ""));

    if !rest.is_empty() {
        return None;
    }

    let negative = degrees.starts_with('-');
    let degrees = decimal(degrees)?.abs();
    let minutes = part(minutes)?;
    let seconds = part(seconds)?;

    let angle = degrees + minutes / 60.0 + seconds / 3600.0;
    Some(if negative { -angle } else { angle })
}

fn part(s: &str) -> Option<f64> {
    if s.is_empty() {
        return Some(0.0);
    }

    if s.starts_with(['-', '+']) {
        return None;
    }

    decimal(s).filter(|v| *v < 60.0)
}
