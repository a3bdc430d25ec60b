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

use thiserror::Error;

pub type Result<T> = std::result::Result<T, QuakeError>;
 
#[derive(Error,Debug)]
pub enum QuakeError {

    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),

    #[error("net error {0}")]
    NetError( #[from] quake_common::net::NetError),

    #[error("datetime error {0}")]
    DateTimeError( #[from] quake_common::datetime::DateTimeError),

    #[error("config error {0}")]
    ConfigError( String ),

    #[error("CSV error {0}")]
    CsvError( #[from] csv::Error),

    #[error("JSON error {0}")]
    JsonError( #[from] serde_json::Error),

    #[error("parse error {0}")]
    ParseError( String ),

    #[error("{0}")]
    NoData( String ),
}

impl From<quake_common::config::ConfigError> for QuakeError {
    fn from (e: quake_common::config::ConfigError)->Self { QuakeError::ConfigError( e.to_string()) }
}

macro_rules! config_error {
    ($fmt:literal $(, $arg:expr )* ) => {
        QuakeError::ConfigError( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use config_error;

macro_rules! parse_error {
    ($fmt:literal $(, $arg:expr )* ) => {
        QuakeError::ParseError( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use parse_error;

macro_rules! no_data {
    ($fmt:literal $(, $arg:expr )* ) => {
        QuakeError::NoData( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use no_data;
