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

//! import of earthquake events from the USGS FDSN event web service
//! see https://earthquake.usgs.gov/fdsnws/event/1/ for the query API. Example (1 month, min. magnitude 0, CSV):
//! ```text
//! GET https://earthquake.usgs.gov/fdsnws/event/1/query.csv?
//!     starttime=2023-12-08 00:00:00&
//!     endtime=2024-01-07 23:59:59&
//!     minmagnitude=0&
//!     orderby=time
//! ```

use std::{collections::HashSet, fmt, fs::File, io, path::{Path,PathBuf}, time::Duration};
use chrono::{DateTime, TimeDelta, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use reqwest::{Client, Url};
use serde::Deserialize;
use quake_common::{
    datetime::DateFormat, debug, 
    fs::{filename, matching_files_in_dir}, 
    net::download_url
};
use crate::{FetchConfig, QuakeEvent, errors::{Result, QuakeError, config_error, no_data}};

lazy_static! {
    static ref CSV_FILE_RE: Regex = Regex::new( r".*\.csv$").unwrap();
}

/* #region CSV records ************************************************************************************/

/// this is the raw record format of the USGS CSV product as it is retrieved from the FDSN server
/// field descriptions on https://earthquake.usgs.gov/data/comcat/data-eventterms.php
/// Numeric fields can be empty, which maps to None. Non-empty fields that do not parse are errors
#[derive(Debug,Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawUsgsEvent {
    pub time: String,
    pub latitude: f64,
    pub longitude: f64,
    pub depth: Option<f64>,
    pub mag: Option<f64>,
    pub mag_type: Option<String>,
    pub nst: Option<u32>,
    pub gap: Option<f64>,
    pub dmin: Option<f64>,
    pub rms: Option<f64>,
    pub net: Option<String>,
    pub id: Option<String>,
    pub updated: Option<String>,
    pub place: Option<String>,
    #[serde(rename = "type")]
    pub event_type: Option<String>,
    pub horizontal_error: Option<f64>,
    pub depth_error: Option<f64>,
    pub mag_error: Option<f64>,
    pub mag_nst: Option<u32>,
    pub status: Option<String>,
    pub location_source: Option<String>,
    pub mag_source: Option<String>,
}

impl RawUsgsEvent {
    pub fn into_event (self, date_format: &DateFormat)->Result<QuakeEvent> {
        let time = date_format.parse( &self.time)?;
        Ok( QuakeEvent {
            id: self.id.filter( |id| !id.is_empty()),
            time,
            latitude: self.latitude,
            longitude: self.longitude,
            depth: self.depth,
            magnitude: self.mag,
            mag_type: self.mag_type,
            place: self.place
        })
    }
}

/// parse the CSV data provided by the reader (which has to include the header line)
pub fn read_usgs_csv (reader: impl io::Read, date_format: &DateFormat)->Result<Vec<QuakeEvent>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut events: Vec<QuakeEvent> = Vec::new();

    for res in csv_reader.deserialize() {
        let raw: RawUsgsEvent = res?;
        events.push( raw.into_event( date_format)?);
    }

    Ok(events)
}

pub fn read_usgs_file (path: impl AsRef<Path>, date_format: &DateFormat)->Result<Vec<QuakeEvent>> {
    let file = File::open( path.as_ref())?;
    read_usgs_csv( file, date_format)
}

/// read all events from (up to `max_files`) *.csv files in `dir`, in order of file names.
/// It is an error if there are no such files or if they don't contain any records
pub fn read_usgs_dir (dir: impl AsRef<Path>, date_format: &DateFormat, max_files: usize)->Result<Vec<QuakeEvent>> {
    let dir = dir.as_ref();
    let files = matching_files_in_dir( &dir, &CSV_FILE_RE)?;
    if files.is_empty() {
        return Err( no_data!("no files found in {:?}", dir))
    }

    let mut events: Vec<QuakeEvent> = Vec::new();
    for path in files.iter().take( max_files) {
        let mut file_events = read_usgs_file( path, date_format)?;
        debug!("read {} events from {:?}", file_events.len(), filename(path));
        events.append( &mut file_events);
    }

    if events.is_empty() {
        Err( no_data!("no data found in {:?}", dir))
    } else {
        Ok(events)
    }
}

/// remove events with an id that was already seen (overlapping query windows report the same events).
/// Events without id are kept. Returns the remaining events in input order and the number of removed duplicates
pub fn dedup_events (events: Vec<QuakeEvent>)->(Vec<QuakeEvent>,usize) {
    let n = events.len();
    let mut seen: HashSet<String> = HashSet::with_capacity(n);

    let events: Vec<QuakeEvent> = events.into_iter().filter( |e| {
        match &e.id {
            Some(id) => seen.insert( id.clone()),
            None => true
        }
    }).collect();

    let n_dups = n - events.len();
    (events, n_dups)
}

/* #endregion CSV records */

/* #region queries ***************************************************************************************/

/// the time range of a single query (and output file)
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct FetchWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>
}

impl fmt::Display for FetchWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} - {}]", self.start, self.end)
    }
}

/// `n_windows` consecutive windows of `window_days` each, walking backwards from `end`.
/// Window i+1 ends where window i starts
pub fn fetch_windows (end: DateTime<Utc>, n_windows: usize, window_days: u32)->Vec<FetchWindow> {
    let len = TimeDelta::days( window_days as i64);
    let mut window_end = end;

    (0..n_windows).map( |_| {
        let window = FetchWindow { start: window_end - len, end: window_end };
        window_end = window.start;
        window
    }).collect()
}

pub fn query_url (base_url: &str, window: &FetchWindow, min_magnitude: f64, date_format: &DateFormat)->Result<Url> {
    let params = [
        ("starttime", date_format.format( &window.start)?),
        ("endtime", date_format.format( &window.end)?),
        ("minmagnitude", min_magnitude.to_string()),
        ("orderby", "time".to_string()),
    ];
    Url::parse_with_params( base_url, &params).map_err( |e| config_error!("invalid query URL {}: {}", base_url, e))
}

/// "<start>_<end>.csv", e.g. "2023-04-12 00:00:00_2023-05-12 00:00:00.csv"
pub fn window_filename (window: &FetchWindow, date_format: &DateFormat)->Result<String> {
    Ok( format!("{}_{}.csv", date_format.format( &window.start)?, date_format.format( &window.end)?) )
}

/// a planned download
#[derive(Debug,Clone)]
pub struct FetchRequest {
    pub window: FetchWindow,
    pub url: Url,
    pub path: PathBuf
}

/// compute the requests for `n_windows` windows ending at `end`. This does not access the network or file system
pub fn plan_fetch (config: &FetchConfig, end: DateTime<Utc>, n_windows: usize)->Result<Vec<FetchRequest>> {
    if config.window_days == 0 {
        return Err( config_error!("fetch window has to be at least one day"))
    }

    fetch_windows( end, n_windows, config.window_days).into_iter().map( |window| -> Result<FetchRequest> {
        let url = query_url( &config.base_url, &window, config.min_magnitude, &config.query_date_format)?;
        let path = config.out_dir.join( window_filename( &window, &config.query_date_format)?);
        Ok( FetchRequest { window, url, path } )
    }).collect()
}

/// execute a single download request. Any non-2xx response is an error, the target file is only created on success
pub async fn fetch_window (client: &Client, request: &FetchRequest, timeout: Option<Duration>)->Result<u64> {
    debug!("requesting {}", request.url);
    Ok( download_url( client, request.url.as_str(), timeout, &request.path).await? )
}

/* #endregion queries */
