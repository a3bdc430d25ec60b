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

//! import of earthquake events from a saved IPMA (Instituto Português do Mar e da Atmosfera) seismicity page,
//! which embeds the event list as a JSON object literal assigned to the `seismicdata_world` script variable

use std::path::Path;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use quake_common::{datetime::DateFormat, fs::filepath_contents_as_string};
use crate::{QuakeEvent, errors::{Result, QuakeError, parse_error}};

lazy_static! {
    static ref SEISMIC_DATA_RE: Regex = Regex::new( r"var seismicdata_world = (\{.*\})").unwrap();
}

/// IPMA serializes most numeric values as strings
#[derive(Debug,Clone,Deserialize)]
#[serde(untagged)]
pub enum NumOrStr {
    Num(f64),
    Str(String)
}

impl NumOrStr {
    /// empty strings are missing values, other non-numeric strings are errors
    fn value (&self, field: &str)->Result<Option<f64>> {
        match self {
            NumOrStr::Num(v) => Ok(Some(*v)),
            NumOrStr::Str(s) => {
                let s = s.trim();
                if s.is_empty() { 
                    Ok(None) 
                } else {
                    s.parse::<f64>().map(Some).map_err( |e| parse_error!("invalid {} value '{}': {}", field, s, e))
                }
            }
        }
    }

    fn required_value (&self, field: &str)->Result<f64> {
        self.value(field)?.ok_or_else( || parse_error!("missing {} value", field))
    }
}

#[derive(Debug,Deserialize)]
pub struct RawIpmaData {
    pub data: Vec<RawIpmaEvent>
}

/// the subset of IPMA event fields we use (unknown fields are ignored)
#[derive(Debug,Deserialize)]
pub struct RawIpmaEvent {
    pub time: String,
    pub lat: NumOrStr,
    pub lon: NumOrStr,

    #[serde(default)]
    pub depth: Option<NumOrStr>,

    #[serde(default, alias = "mag")]
    pub magnitud: Option<NumOrStr>,

    #[serde(default, rename = "magType")]
    pub mag_type: Option<String>,

    #[serde(default, rename = "sismoId")]
    pub sismo_id: Option<Value>,

    #[serde(default)]
    pub local: Option<String>,
}

impl RawIpmaEvent {
    pub fn into_event (self, date_format: &DateFormat)->Result<QuakeEvent> {
        let time = date_format.parse( &self.time)?;
        let latitude = self.lat.required_value("lat")?;
        let longitude = self.lon.required_value("lon")?;
        let depth = match &self.depth { Some(v) => v.value("depth")?, None => None };
        let magnitude = match &self.magnitud { Some(v) => v.value("magnitud")?, None => None };

        let id = match self.sismo_id {
            Some(Value::String(s)) => Some(s),
            Some(Value::Null) | None => None,
            Some(other) => Some(other.to_string())
        };

        Ok( QuakeEvent { id, time, latitude, longitude, depth, magnitude, mag_type: self.mag_type, place: self.local } )
    }
}

/// the `{...}` text assigned to the `seismicdata_world` variable in the page source
pub fn extract_seismic_json (html: &str)->Result<&str> {
    SEISMIC_DATA_RE.captures( html)
        .and_then( |cap| cap.get(1))
        .map( |m| m.as_str())
        .ok_or_else( || parse_error!("no seismicdata_world variable found"))
}

pub fn parse_ipma_json (json: &str, date_format: &DateFormat)->Result<Vec<QuakeEvent>> {
    let raw: RawIpmaData = serde_json::from_str( json)?;
    raw.data.into_iter().map( |e| e.into_event( date_format)).collect()
}

pub fn parse_ipma_html (html: &str, date_format: &DateFormat)->Result<Vec<QuakeEvent>> {
    let json = extract_seismic_json( html)?;
    parse_ipma_json( json, date_format)
}

pub fn read_ipma_file (path: impl AsRef<Path>, date_format: &DateFormat)->Result<Vec<QuakeEvent>> {
    let html = filepath_contents_as_string( &path.as_ref())?;
    parse_ipma_html( &html, date_format)
}
