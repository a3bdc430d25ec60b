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

use chrono::{TimeDelta, TimeZone, Utc};
use quake_events::{percent_of_max, bucketize, ChartSeries, QuakeEvent};

#[test]
fn test_percent_of_max() {
    assert_eq!( percent_of_max( &[0.0, 5.0, 10.0]), vec![0.0, 50.0, 100.0]);
    assert_eq!( percent_of_max( &[2.0, 8.0]), vec![25.0, 100.0]);
}

#[test]
fn test_zero_max() {
    assert_eq!( percent_of_max( &[0.0, 0.0, 0.0]), vec![0.0, 0.0, 0.0]);
    assert!( percent_of_max( &[]).is_empty());
}

#[test]
fn test_chart_series() {
    let start = Utc.with_ymd_and_hms( 2023, 1, 1, 0, 0, 0).unwrap();
    let mk = |days: i64, mag: f64, depth: f64| QuakeEvent {
        id: None, time: start + TimeDelta::days(days), latitude: 0.0, longitude: 0.0,
        depth: Some(depth), magnitude: Some(mag), mag_type: None, place: None
    };
    let events = vec![ mk(1, 2.0, 10.0), mk(2, 4.0, 5.0), mk(8, 1.0, 20.0) ];

    let buckets = bucketize( start, start + TimeDelta::days(21), 168, &events).unwrap();
    let series = ChartSeries::from_buckets( &buckets);
    println!("{series:?}");

    assert_eq!( series.len(), 3);
    assert_eq!( series.labels, vec!["0", "1", "2"]);
    assert_eq!( series.counts, vec![100.0, 50.0, 0.0]);
    assert_eq!( series.magnitudes, vec![100.0, 25.0, 0.0]);
    assert_eq!( series.depths, vec![50.0, 100.0, 0.0]);
}
