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

use std::path::PathBuf;
use serde::{Serialize,Deserialize};
use quake_common::datetime::DateFormat;
use crate::region::{Point, Region};

pub const USGS_QUERY_URL: &str = "https://earthquake.usgs.gov/fdsnws/event/1/query.csv";

/// configuration for downloading USGS event data (the command line sets the time range)
#[derive(Debug,Clone,Serialize,Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// FDSN event query endpoint that returns CSV
    pub base_url: String,

    pub min_magnitude: f64,

    /// directory where downloaded CSV files are stored
    pub out_dir: PathBuf,

    /// time range covered by each request / file. Consecutive windows walk backwards from the start date
    pub window_days: u32,

    /// format of `starttime`/`endtime` query parameters and output file names
    pub query_date_format: DateFormat,
}

impl Default for FetchConfig {
    fn default() -> Self {
        FetchConfig {
            base_url: USGS_QUERY_URL.to_string(),
            min_magnitude: 0.0,
            out_dir: PathBuf::from("usgs_data"),
            window_days: 30,
            query_date_format: DateFormat::spaced(),
        }
    }
}

/// configuration to chart USGS CSV data from a directory
#[derive(Debug,Clone,Serialize,Deserialize)]
#[serde(default)]
pub struct UsgsGraphConfig {
    pub data_dir: PathBuf,

    /// format of the CSV 'time' column (e.g. "2022-10-13T23:59:54.158Z")
    pub date_format: DateFormat,

    pub interval_hours: u32,
    pub region: Region,

    /// max number of CSV files to read from data_dir
    pub max_files: usize,

    /// chart title, the covered date range gets appended
    pub title: String,
}

impl Default for UsgsGraphConfig {
    fn default() -> Self {
        UsgsGraphConfig {
            data_dir: PathBuf::from("usgs_data"),
            date_format: DateFormat::iso_fractional_z(),
            interval_hours: 720, // 30 days
            region: Region {
                nw: Point::new( 42.30, -130.30),
                ne: Point::new( 42.30, -110.30),
                sw: Point::new( 36.30, -130.30),
                se: Point::new( 36.30, -110.30),
            },
            max_files: 1000,
            title: "Number of earthquakes and intensity, by month".to_string(),
        }
    }
}

/// configuration to chart events from a saved IPMA seismicity page
#[derive(Debug,Clone,Serialize,Deserialize)]
#[serde(default)]
pub struct IpmaGraphConfig {
    pub html_file: PathBuf,

    /// format of the 'time' field (e.g. "2023-12-10T11:52:51")
    pub date_format: DateFormat,

    pub interval_hours: u32,
    pub region: Region,
    pub title: String,
}

impl Default for IpmaGraphConfig {
    fn default() -> Self {
        IpmaGraphConfig {
            html_file: PathBuf::from("ipma_data/sismicidade.html"),
            date_format: DateFormat::iso_secs(),
            interval_hours: 168, // 7 days
            region: Region {
                nw: Point::new( 42.30, -10.30),
                ne: Point::new( 42.30, -6.30),
                sw: Point::new( 36.30, -10.30),
                se: Point::new( 36.30, -6.30),
            },
            title: "Number of earthquakes, by week".to_string(),
        }
    }
}
