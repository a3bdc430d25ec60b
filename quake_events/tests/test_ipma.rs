/*
 * Copyright © 2025, United States Government, as represented by the Administrator of 
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License"); 
 * you may not use this file except in compliance with the License. You may obtain a copy 
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

use chrono::{TimeZone, Utc};
use quake_common::datetime::DateFormat;
use quake_events::{QuakeError, ipma::*};

const SAMPLE: &str = "tests/data/sismicidade_sample.html";

#[test]
fn test_read_ipma_file() {
    let events = read_ipma_file( SAMPLE, &DateFormat::iso_secs()).unwrap();
    for e in &events { println!("{e:?}") }

    assert_eq!( events.len(), 3);

    let e = &events[0];
    assert_eq!( e.id.as_deref(), Some("11522851"));
    assert_eq!( e.time, Utc.with_ymd_and_hms( 2023, 12, 10, 11, 52, 51).unwrap());
    assert_eq!( e.latitude, 38.736);
    assert_eq!( e.longitude, -8.015);
    assert_eq!( e.depth, Some(12.0));
    assert_eq!( e.magnitude, Some(2.1));
    assert_eq!( e.place.as_deref(), Some("Arraiolos"));

    // numeric lat/lon, empty depth and magnitude strings
    let e = &events[2];
    assert_eq!( e.latitude, 41.487);
    assert_eq!( e.depth, None);
    assert_eq!( e.magnitude, None);
}

#[test]
fn test_extract_seismic_json() {
    let html = "<script>\nvar seismicdata_world = {\"data\":[]};\n</script>";
    assert_eq!( extract_seismic_json( html).unwrap(), "{\"data\":[]}");

    let res = extract_seismic_json( "<html><body>nothing here</body></html>");
    assert!( matches!( res, Err(QuakeError::ParseError(_))));
}

#[test]
fn test_malformed_json() {
    let res = parse_ipma_html( "var seismicdata_world = {\"data\":[{\"time\":\"2023-12-10T11:52:51\"}]};", &DateFormat::iso_secs());
    assert!( matches!( res, Err(QuakeError::JsonError(_))));

    let res = parse_ipma_json( r#"{"data":[{"time":"2023-12-10T11:52:51","lat":"n/a","lon":"-8.0"}]}"#, &DateFormat::iso_secs());
    assert!( matches!( res, Err(QuakeError::ParseError(_))));

    let res = parse_ipma_json( r#"{"data":[{"time":"10.12.2023","lat":"38.0","lon":"-8.0"}]}"#, &DateFormat::iso_secs());
    assert!( matches!( res, Err(QuakeError::DateTimeError(_))));
}

#[test]
fn test_alternative_fields() {
    let events = parse_ipma_json( r#"{"data":[{"time":"2023-12-10T11:52:51","lat":38.0,"lon":-8.0,"mag":3.5,"sismoId":42}]}"#, &DateFormat::iso_secs()).unwrap();
    assert_eq!( events[0].magnitude, Some(3.5));
    assert_eq!( events[0].id.as_deref(), Some("42"));
    assert_eq!( events[0].depth, None);
}
