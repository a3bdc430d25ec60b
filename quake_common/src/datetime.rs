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

use std::fmt::{self,Write as FmtWrite};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use serde::{Serialize,Deserialize};
use crate::define_error;

/// format of timestamps such as "2023-12-10T11:52:51" (no fractional seconds, no zone)
pub const ISO_SECS_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// format of timestamps such as "2022-10-13T23:59:54.158Z" (fractional seconds, literal 'Z' suffix).
/// Note that `%.f` also accepts a missing fractional part
pub const ISO_FRACTIONAL_Z_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.fZ";

/// space separated date and time as used in query parameters and file names
pub const SPACED_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// plain calendar date as used for command line arguments
pub const DATE_FORMAT: &str = "%Y-%m-%d";

define_error!{ pub DateTimeError =
    ParseError(String,String,chrono::ParseError) : "invalid datetime '{0}' (expected format '{1}'): {2}",
    FormatError(String) : "invalid datetime format '{0}'"
}

pub type Result<T> = std::result::Result<T,DateTimeError>;

/* #region DateFormat ********************************************************************************************/

/// a strftime-style format specifier that is used to parse and format UTC timestamps.
/// Data sources differ in how they write timestamps, which is why this is configurable (it serializes as
/// the plain specifier string) instead of being a fixed constant.
/// Parsed timestamps without zone information are taken to be UTC.
#[derive(Debug,Clone,PartialEq,Eq,Serialize,Deserialize)]
#[serde(transparent)]
pub struct DateFormat(String);

impl DateFormat {
    pub fn new (spec: impl ToString)->Self { DateFormat(spec.to_string()) }

    pub fn iso_secs ()->Self { DateFormat::new(ISO_SECS_FORMAT) }
    pub fn iso_fractional_z ()->Self { DateFormat::new(ISO_FRACTIONAL_Z_FORMAT) }
    pub fn spaced ()->Self { DateFormat::new(SPACED_DATETIME_FORMAT) }

    pub fn spec (&self)->&str { self.0.as_str() }

    pub fn parse (&self, s: &str)->Result<DateTime<Utc>> {
        let s = s.trim();
        NaiveDateTime::parse_from_str( s, &self.0)
            .map( |ndt| ndt.and_utc())
            .map_err( |e| DateTimeError::ParseError( s.to_string(), self.0.clone(), e))
    }

    pub fn format<Tz> (&self, dt: &DateTime<Tz>)->Result<String> where Tz: TimeZone, Tz::Offset: fmt::Display {
        let mut s = String::with_capacity(32);
        // DelayedFormat reports invalid specifiers as fmt::Error, which would panic in to_string()
        write!( s, "{}", dt.format(&self.0)).map_err( |_| DateTimeError::FormatError( self.0.clone()))?;
        Ok(s)
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/* #endregion DateFormat */

#[inline]
pub fn utc_now()->DateTime<Utc> {
    Utc::now()
}

pub fn is_between_inclusive (dt: &DateTime<Utc>, dt_start: &DateTime<Utc>, dt_end: &DateTime<Utc>) -> bool {
    dt >= dt_start && dt <= dt_end
}

/// get a DateTime<Utc> from a NaiveDate that is supposed to be in Utc
pub fn naive_utc_date_to_utc_datetime (nd: NaiveDate) -> DateTime<Utc> {
    NaiveDateTime::new( nd, NaiveTime::MIN).and_utc()
}

/// parse a "YYYY-MM-DD" command line argument into the start of that day in UTC.
/// The signature makes this usable as a clap `value_parser`
pub fn parse_utc_datetime_from_date_str (s: &str) -> Result<DateTime<Utc>> {
    NaiveDate::parse_from_str( s.trim(), DATE_FORMAT)
        .map( naive_utc_date_to_utc_datetime)
        .map_err( |e| DateTimeError::ParseError( s.to_string(), DATE_FORMAT.to_string(), e))
}

/* #region dated objects ****************************************************************************************/

/// a type bound for something we can get a date for.
/// The main purpose of this trait is to avoid having to extract DateTime lists out of already existing collections
pub trait Dated {
    fn date (&self)->DateTime<Utc>;
}

impl<Tz:TimeZone> Dated for DateTime<Tz> {
    fn date (&self)->DateTime<Utc> { self.to_utc() }
}

impl<T: Dated> Dated for &T {
    fn date (&self)->DateTime<Utc> { (*self).date() }
}

/// earliest and latest date of the provided items, or None if there are no items
pub fn date_range<'a,T,I> (items: I)->Option<(DateTime<Utc>,DateTime<Utc>)> where T: Dated + 'a, I: IntoIterator<Item=&'a T> {
    items.into_iter().fold( None, |acc, item| {
        let date = item.date();
        match acc {
            Some((min,max)) => Some( (min.min(date), max.max(date)) ),
            None => Some( (date,date) )
        }
    })
}

/* #endregion dated objects */
