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

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use quake_events::{QuakeEvent, QuakeError, bucketize, bucket::{bucket_count, bucket_index}};

fn t0 ()->DateTime<Utc> { Utc.with_ymd_and_hms( 2023, 1, 1, 0, 0, 0).unwrap() }

fn event (time: DateTime<Utc>, magnitude: Option<f64>, depth: Option<f64>)->QuakeEvent {
    QuakeEvent { id: None, time, latitude: 38.7, longitude: -9.1, depth, magnitude, mag_type: None, place: None }
}

const WEEK: u32 = 168;

#[test]
fn test_bucket_count() {
    let start = t0();
    assert_eq!( bucket_count( &start, &(start + TimeDelta::days(30)), WEEK).unwrap(), 4);
    assert_eq!( bucket_count( &start, &(start + TimeDelta::days(28)), WEEK).unwrap(), 4);
    assert_eq!( bucket_count( &start, &(start + TimeDelta::days(6)), WEEK).unwrap(), 0);
    assert_eq!( bucket_count( &start, &(start - TimeDelta::days(1)), WEEK).unwrap(), 0);
    assert!( matches!( bucket_count( &start, &start, 0), Err(QuakeError::ConfigError(_))));
}

#[test]
fn test_boundary_goes_to_earlier_bucket() {
    let start = t0();
    let week = TimeDelta::days(7);

    assert_eq!( bucket_index( &start, &start, WEEK, 4).unwrap(), Some(0));
    assert_eq!( bucket_index( &(start + week), &start, WEEK, 4).unwrap(), Some(0));
    assert_eq!( bucket_index( &(start + week + TimeDelta::milliseconds(1)), &start, WEEK, 4).unwrap(), Some(1));
    assert_eq!( bucket_index( &(start + week * 4), &start, WEEK, 4).unwrap(), Some(3));
    assert_eq!( bucket_index( &(start + week * 4 + TimeDelta::seconds(1)), &start, WEEK, 4).unwrap(), None);
    assert_eq!( bucket_index( &(start - TimeDelta::seconds(1)), &start, WEEK, 4).unwrap(), None);
}

#[test]
fn test_bucketize() {
    let start = t0();
    let end = start + TimeDelta::days(30);
    let events = vec![
        event( start, Some(1.5), Some(10.0)),
        event( start + TimeDelta::days(1), Some(3.2), None),
        event( start + TimeDelta::days(7), None, Some(22.5)),         // boundary -> bucket 0
        event( start + TimeDelta::days(9), Some(2.0), Some(5.0)),
        event( start + TimeDelta::days(29), Some(6.0), Some(100.0)),  // trailing partial week
        event( end, Some(6.0), Some(100.0)),
    ];

    let buckets = bucketize( start, end, WEEK, &events).unwrap();
    for b in &buckets {
        println!("{}: [{} - {}] count={} mag={} depth={}", b.index, b.start, b.end, b.count, b.max_magnitude, b.max_depth);
    }

    assert_eq!( buckets.len(), 4);
    assert_eq!( buckets.iter().map(|b| b.count).collect::<Vec<_>>(), vec![3,1,0,0]);
    assert_eq!( buckets[0].max_magnitude, 3.2);
    assert_eq!( buckets[0].max_depth, 22.5);
    assert_eq!( buckets[1].max_magnitude, 2.0);
    assert_eq!( buckets[2].max_magnitude, 0.0);
    assert_eq!( buckets[3].end, start + TimeDelta::days(28));

    // no record is counted twice
    let n: usize = buckets.iter().map(|b| b.count).sum();
    assert_eq!( n, 4);
}

#[test]
fn test_unsorted_input() {
    let start = t0();
    let end = start + TimeDelta::days(14);
    let events = vec![
        event( start + TimeDelta::days(10), Some(1.0), None),
        event( start + TimeDelta::days(2), Some(2.0), None),
        event( start + TimeDelta::days(8), Some(3.0), None),
    ];

    let buckets = bucketize( start, end, WEEK, &events).unwrap();
    assert_eq!( buckets[0].count, 1);
    assert_eq!( buckets[1].count, 2);
    assert_eq!( buckets[1].items[0].magnitude, Some(1.0)); // input order within bucket
    assert_eq!( buckets[1].max_magnitude, 3.0);
}

#[test]
fn test_zero_interval() {
    let events: Vec<QuakeEvent> = Vec::new();
    let res = bucketize( t0(), t0() + TimeDelta::days(1), 0, &events);
    assert!( matches!( res, Err(QuakeError::ConfigError(_))));
}

#[test]
fn test_daily_events_in_one_week() {
    let start = t0();
    let events: Vec<QuakeEvent> = (0..3).map( |i| event( start + TimeDelta::days(i), Some(1.0), Some(5.0))).collect();

    let buckets = bucketize( start, start + TimeDelta::days(7), WEEK, &events).unwrap();
    assert_eq!( buckets.len(), 1);
    assert_eq!( buckets[0].count, 3);
}
