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


use openair::{AirspaceClass, Direction, Error, Geometry, OpenAir, PolygonSegment, VerticalDistance};

const OPENAIR_DATA: &str = r#"*****************************************************
* Test airspaces
*****************************************************

AC D
* Tegel control zone
AN EDDT CTR
AL GND
AH 2500ft MSL
AF 118.705
AG Tegel Tower
SP 0,1,0,0,255
SB 0,0,255
DP 52:38:00 N 013:06:00 E
DP 52:38:00 N 013:26:00 E
DP 52:30:00 N 013:26:00 E
DP 52:30:00 N 013:06:00 E
AC R
* Restricted area with arcs
AN ED-R 146 (TEMPO)
AY Restricted
AL 1000 AGL (MON-FRI 0700-1600)
AH FL100
V X=52:34:00 N 013:20:00 E
V D=-
DA 5,270,90
DP 52:34:00 N 013:30:00 E
V D=+
DB 52:34:00 N 013:28:00 E, 52:34:00 N 013:12:00 E
AC Q
AN Danger Circle
AL 500M MSL
AH UNLIMITED
V X=52:23:00 N 005:50:00 E
DC 2.5
"#;

#[test]
fn reads_all_airspaces() {
    let openair: OpenAir = OPENAIR_DATA.parse().unwrap();

    assert!(openair.errors.is_empty(), "{:?}", openair.error_messages());
    assert_eq!(openair.airspaces.len(), 3);
    assert_eq!(openair.comments, vec!["Test airspaces".to_string()]);

    let ctr = &openair.airspaces[0];
    assert_eq!(ctr.class, AirspaceClass::D);
    assert_eq!(ctr.name, "EDDT CTR");
    assert_eq!(ctr.description.as_deref(), Some("Tegel control zone"));
    assert_eq!(ctr.frequency.as_deref(), Some("118.705"));
    assert_eq!(ctr.call_sign.as_deref(), Some("Tegel Tower"));
    assert_eq!(ctr.color.as_deref(), Some("0000FF"));
    assert_eq!(ctr.ceiling.distance, VerticalDistance::Msl(2500.0));
    match &ctr.geometry {
        Some(Geometry::Polygon { segments }) => assert_eq!(segments.len(), 4),
        other => panic!("unexpected geometry {other:?}"),
    }

    let restricted = &openair.airspaces[1];
    assert_eq!(restricted.class, AirspaceClass::Restricted);
    assert_eq!(restricted.name, "ED-R 146 (TEMPO)");
    assert_eq!(restricted.description.as_deref(), Some("Restricted area with arcs"));
    assert_eq!(restricted.airspace_type.as_deref(), Some("Restricted"));
    assert_eq!(restricted.floor.distance, VerticalDistance::Agl(1000.0));
    assert_eq!(
        restricted.floor.opening_times.as_deref(),
        Some("MON-FRI 0700-1600")
    );
    assert_eq!(restricted.ceiling.distance, VerticalDistance::Fl(100));
    match &restricted.geometry {
        Some(Geometry::Polygon { segments }) => {
            assert_eq!(segments.len(), 3);
            assert!(matches!(
                segments[0],
                PolygonSegment::ArcSegment {
                    direction: Direction::CounterClockwise,
                    ..
                }
            ));
            assert!(matches!(segments[1], PolygonSegment::Point(_)));
            assert!(matches!(
                segments[2],
                PolygonSegment::Arc {
                    direction: Direction::Clockwise,
                    ..
                }
            ));
        }
        other => panic!("unexpected geometry {other:?}"),
    }

    let danger = &openair.airspaces[2];
    assert_eq!(danger.class, AirspaceClass::Danger);
    assert_eq!(danger.description, None);
    assert_eq!(danger.ceiling.distance, VerticalDistance::Unlimited);
    match danger.floor.distance {
        VerticalDistance::Msl(ft) => assert!((ft - 500.0 * 3.28084).abs() < 1e-9),
        ref other => panic!("unexpected floor {other:?}"),
    }
}

#[test]
fn minimal_circle() {
    let data = "AC C\nAN UnitTest\nAL GND\nAH UNLIMITED\nV X=52:23:00 N 005:50:00 E\nDC 5\n";
    let openair = openair::parse(data.as_bytes()).unwrap();

    assert!(openair.errors.is_empty());
    assert_eq!(openair.airspaces.len(), 1);

    let airspace = &openair.airspaces[0];
    assert_eq!(airspace.class, AirspaceClass::C);
    assert_eq!(airspace.name, "UnitTest");
    assert_eq!(airspace.floor.distance, VerticalDistance::Gnd);
    assert_eq!(airspace.ceiling.distance, VerticalDistance::Unlimited);

    match airspace.geometry {
        Some(Geometry::Circle { center, radius }) => {
            assert_eq!(radius, 5.0 * 1852.0);
            assert!((center.latitude - (52.0 + 23.0 / 60.0)).abs() < 1e-6);
            assert!((center.longitude - (5.0 + 50.0 / 60.0)).abs() < 1e-6);
        }
        ref other => panic!("unexpected geometry {other:?}"),
    }
}

#[test]
fn error_fixtures_produce_diagnostics() {
    let fixtures = [
        "AN Text\n",
        "AC A\nAC B\n",
        "AC C\nAN X\nAL GND\nAH FL50\nV X=52:23:00 N 005:50:00 E\nDC -5\n",
        "AC C\nAN X\nAL GND\nAH FL50\nV X=52:23:00 N 005:50:00 E\nDC 1e306\n",
        "AC C\nAN X\nAL GND\nAH FL50\nV X=52:23:00 N 005:50:00 E\nDC 5\nDP 52:00:00 N 005:00:00 E\n",
        "AC C\nAN X\nAL GND\nAH FL50\nSP 0,0,255\nDP 52:00:00 N 005:00:00 E\n",
        "AC C\nAN X\nAL GND\nAH FL50\nXY 1\nDP 52:00:00 N 005:00:00 E\n",
        "AC C\nAN X\nAL GND\nAH FL50\nDP\n",
        "AC C\nAN X\nAL GND\nAH FLxyz\nDP 52:00:00 N 005:00:00 E\n",
    ];

    for fixture in fixtures {
        let openair: OpenAir = fixture.parse().unwrap();
        assert!(!openair.errors.is_empty(), "no error for {fixture:?}");

        for message in openair.error_messages() {
            assert!(message.starts_with("error on line "), "{message}");
        }
    }
}

#[test]
fn geometry_conflict_keeps_circle() {
    let data = "AC C\nAN X\nAL GND\nAH FL50\nV X=52:23:00 N 005:50:00 E\nDC 5\nDP 52:00:00 N 005:00:00 E\n";
    let openair: OpenAir = data.parse().unwrap();

    assert!(matches!(
        openair.airspaces[0].geometry,
        Some(Geometry::Circle { .. })
    ));
    assert_eq!(openair.errors.len(), 1);
    assert_eq!(openair.errors[0].line, 7);
    assert!(matches!(
        openair.errors[0].error,
        Error::GeometryConflict { .. }
    ));
}

#[test]
fn center_is_shared_between_airspaces() {
    let data = "V X=52:23:00 N 005:50:00 E\nAC R\nDC 1\nAC R\nDC 2\n";
    let openair: OpenAir = data.parse().unwrap();

    let centers: Vec<_> = openair
        .airspaces
        .iter()
        .filter_map(|a| match a.geometry {
            Some(Geometry::Circle { center, .. }) => Some(center),
            _ => None,
        })
        .collect();

    assert_eq!(centers.len(), 2);
    assert_eq!(centers[0], centers[1]);
}

#[cfg(feature = "serde")]
#[test]
fn serializes_to_json() {
    let data = "AC C\nAN UnitTest\nAL GND\nAH FL65\nV X=52:23:00 N 005:50:00 E\nDC 5\n";
    let openair: OpenAir = data.parse().unwrap();

    let json = serde_json::to_value(&openair).expect("airspaces should serialize");
    assert_eq!(json["airspaces"][0]["name"], "UnitTest");
    assert_eq!(json["airspaces"][0]["ceiling"]["distance"]["Fl"], 65);
    assert_eq!(json["errors"].as_array().map(Vec::len), Some(0));
}
