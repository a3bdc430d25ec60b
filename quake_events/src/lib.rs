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

//! crate to import earthquake events from USGS (CSV) and IPMA (HTML embedded JSON) sources, filter them
//! by geographic region and aggregate them over fixed time intervals for terminal bar charts

use chrono::{DateTime,Utc};
use quake_common::datetime::{Dated, date_range};

pub mod errors;
pub use errors::*;
use errors::no_data;

pub mod config;
pub use config::*;

pub mod region;
pub use region::{Point, Region, Located, filter_region};

pub mod bucket;
pub use bucket::{Bucket, Measured, bucketize};

pub mod normalize;
pub use normalize::{ChartSeries, percent_of_max};

pub mod usgs;
pub mod ipma;
pub mod chart;

quake_common::define_load_config!{}

/* #region types  **********************************************************************************/

/// the source independent event record we work with
#[derive(Debug,Clone,PartialEq)]
pub struct QuakeEvent {
    /// source specific event id (if any) - the same event can be reported in overlapping downloads
    pub id: Option<String>,
    pub time: DateTime<Utc>,
    pub latitude: f64,
    pub longitude: f64,
    /// km
    pub depth: Option<f64>,
    pub magnitude: Option<f64>,
    pub mag_type: Option<String>,
    pub place: Option<String>,
}

impl Dated for QuakeEvent {
    fn date (&self)->DateTime<Utc> { self.time }
}

impl Measured for QuakeEvent {
    fn magnitude (&self)->Option<f64> { self.magnitude }
    fn depth (&self)->Option<f64> { self.depth }
}

impl Located for QuakeEvent {
    fn position (&self)->Point { Point::from_lat_lon( self.latitude, self.longitude) }
}

/// the result of filtering and bucketing a set of events
#[derive(Debug)]
pub struct QuakeSummary<'a> {
    pub n_total: usize,
    pub n_in_region: usize,
    pub n_excluded: usize,

    /// earliest and latest event time of all (unfiltered) events, i.e. the time frame the buckets are laid out in
    pub date_start: DateTime<Utc>,
    pub date_end: DateTime<Utc>,

    pub buckets: Vec<Bucket<'a,QuakeEvent>>
}

impl<'a> QuakeSummary<'a> {
    /// number of in-region events that fell into a bucket (events in the trailing partial interval are not counted)
    pub fn n_bucketed (&self)->usize {
        self.buckets.iter().map( |b| b.count).sum()
    }

    pub fn chart_series (&self)->ChartSeries {
        ChartSeries::from_buckets( &self.buckets)
    }
}

/* #endregion types */

/// the processing pipeline: compute the time frame of all events, filter by region and sort the remaining events
/// into buckets of `interval_hours` width
pub fn summarize<'a> (events: &'a [QuakeEvent], region: &Region, interval_hours: u32)->Result<QuakeSummary<'a>> {
    region.validate()?;

    let (date_start, date_end) = date_range( events).ok_or_else( || no_data!("no data found"))?;
    let (in_region, n_excluded) = filter_region( events, region);
    let buckets = bucketize( date_start, date_end, interval_hours, in_region.iter().copied())?;

    Ok( QuakeSummary {
        n_total: events.len(),
        n_in_region: in_region.len(),
        n_excluded,
        date_start,
        date_end,
        buckets
    })
}
