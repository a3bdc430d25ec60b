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

//! partitioning of dated records into fixed width time buckets with per-bucket aggregates.
//!
//! For a start date S, end date E and width W there are `floor((E-S)/W)` buckets. Bucket `i` covers the
//! closed interval `[S + i·W, S + (i+1)·W]`. Each record is assigned to the first bucket (in index order)
//! that contains it, which means a record that falls on a shared boundary `S + k·W` is counted once in
//! bucket `k-1`. Records before S or after the end of the last complete bucket are not counted.

use chrono::{DateTime, TimeDelta, Utc};
use quake_common::datetime::{Dated, is_between_inclusive};
use crate::errors::{Result, QuakeError, config_error};

/// something that has (optional) magnitude and depth values
pub trait Measured {
    fn magnitude (&self)->Option<f64>;
    fn depth (&self)->Option<f64>;
}

impl<T: Measured> Measured for &T {
    fn magnitude (&self)->Option<f64> { (*self).magnitude() }
    fn depth (&self)->Option<f64> { (*self).depth() }
}

#[derive(Debug,Clone)]
pub struct Bucket<'a,T> {
    pub index: usize,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub count: usize,

    /// running max starting at 0, records without magnitude don't update it
    pub max_magnitude: f64,

    /// running max starting at 0, records without depth don't update it
    pub max_depth: f64,

    pub items: Vec<&'a T>
}

impl<'a,T: Measured> Bucket<'a,T> {
    fn new (index: usize, start: DateTime<Utc>, end: DateTime<Utc>)->Self {
        Bucket { index, start, end, count: 0, max_magnitude: 0.0, max_depth: 0.0, items: Vec::new() }
    }

    /// closed interval test - note that adjacent buckets share their boundary
    pub fn contains (&self, date: &DateTime<Utc>)->bool {
        is_between_inclusive( date, &self.start, &self.end)
    }

    fn add (&mut self, item: &'a T) {
        self.count += 1;

        if let Some(mag) = item.magnitude() {
            if mag > self.max_magnitude { self.max_magnitude = mag }
        }
        if let Some(depth) = item.depth() {
            if depth > self.max_depth { self.max_depth = depth }
        }

        self.items.push(item);
    }
}

fn interval_delta (interval_hours: u32)->Result<TimeDelta> {
    if interval_hours == 0 {
        Err( config_error!("bucket interval has to be at least one hour"))
    } else {
        Ok( TimeDelta::hours( interval_hours as i64) )
    }
}

/// number of complete buckets of given width within [date_start,date_end]. A trailing partial window is dropped
pub fn bucket_count (date_start: &DateTime<Utc>, date_end: &DateTime<Utc>, interval_hours: u32)->Result<usize> {
    let w_ms = interval_delta( interval_hours)?.num_milliseconds();
    let span_ms = (*date_end - *date_start).num_milliseconds();

    if span_ms < 0 { Ok(0) } else { Ok( (span_ms / w_ms) as usize ) }
}

/// index of the first of `n_buckets` buckets that contains `date`, or None if it is outside of all of them.
/// This is computed directly instead of scanning the buckets but yields the same first-match result
pub fn bucket_index (date: &DateTime<Utc>, date_start: &DateTime<Utc>, interval_hours: u32, n_buckets: usize)->Result<Option<usize>> {
    let w_ms = interval_delta( interval_hours)?.num_milliseconds();
    let offset = *date - *date_start;

    if offset < TimeDelta::zero() || n_buckets == 0 {
        return Ok(None)
    }

    // offsets are truncated to millis, which doesn't change the quotient since w_ms is a whole number of millis
    let mut idx = offset.num_milliseconds() / w_ms;
    if idx > 0 && offset == TimeDelta::milliseconds( idx * w_ms) {
        idx -= 1; // on the boundary between idx-1 and idx, the earlier bucket matches first
    }

    let idx = idx as usize;
    if idx < n_buckets { Ok(Some(idx)) } else { Ok(None) }
}

/// partition `items` into the complete buckets of width `interval_hours` between `date_start` and `date_end`.
/// Items are not required to be sorted and keep their input order within each bucket
pub fn bucketize<'a,T,I> (date_start: DateTime<Utc>, date_end: DateTime<Utc>, interval_hours: u32, items: I) -> Result<Vec<Bucket<'a,T>>>
    where T: Dated + Measured + 'a, I: IntoIterator<Item=&'a T>
{
    let n_buckets = bucket_count( &date_start, &date_end, interval_hours)?;
    let interval = interval_delta( interval_hours)?;

    let mut buckets: Vec<Bucket<'a,T>> = (0..n_buckets).map( |i| {
        let start = date_start + TimeDelta::milliseconds( interval.num_milliseconds() * i as i64);
        Bucket::new( i, start, start + interval)
    }).collect();

    for item in items {
        if let Some(idx) = bucket_index( &item.date(), &date_start, interval_hours, n_buckets)? {
            buckets[idx].add( item);
        }
    }

    Ok(buckets)
}
