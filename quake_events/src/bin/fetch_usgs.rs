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

#![allow(unused)]

use std::time::Duration;
use tokio;
use anyhow::Result;
use clap::{ArgAction, Parser};
use chrono::{DateTime, Utc};
use reqwest::Client;
use quake_common::{
    info,
    datetime::{naive_utc_date_to_utc_datetime, parse_utc_datetime_from_date_str, utc_now},
    fs::ensure_writable_dir,
    logging::init_logging
};
use quake_events::{load_config_or_default, FetchConfig, usgs::{plan_fetch, fetch_window}};


#[derive(Parser, Debug)]
#[command(version, about, long_about = "download USGS earthquake CSV data in monthly windows, walking backwards from the start date")]
pub struct Args {
    /// number of 30 day windows to retrieve
    #[arg(short,long, default_value_t = 1)]
    pub months: usize,

    /// date (%Y-%m-%d) the most recent window ends at [default: today]
    #[arg(short,long, value_parser = parse_utc_datetime_from_date_str)]
    pub start: Option<DateTime<Utc>>,

    /// delay in seconds between successive requests
    #[arg(short='t', long="timeout", visible_alias="delay", default_value_t = 10)]
    pub delay: u64,

    /// request timeout in seconds
    #[arg(long, default_value_t = 10)]
    pub request_timeout: u64,

    /// only print what would be retrieved, without accessing the server
    #[arg(short,long, default_value_t = true, action = ArgAction::Set)]
    pub demo: bool,

    /// RON config file
    #[arg(short,long, default_value = "fetch_usgs.ron")]
    pub config: String,
}

#[tokio::main]
async fn main()->Result<()> {
    init_logging();
    let args = Args::parse();

    let config: FetchConfig = load_config_or_default( &args.config)?;
    let end = args.start.unwrap_or_else( || naive_utc_date_to_utc_datetime( utc_now().date_naive()));
    let requests = plan_fetch( &config, end, args.months)?;

    if !args.demo {
        ensure_writable_dir( &config.out_dir)?;
    }

    let client = Client::new();
    let request_timeout = Some( Duration::from_secs( args.request_timeout));
    let delay = Duration::from_secs( args.delay);

    for (i,req) in requests.iter().enumerate() {
        println!("Fetching {}", req.url);

        if args.demo {
            println!("[DEMO] Would write to {}", req.path.display());
        } else {
            if i > 0 && !delay.is_zero() {
                tokio::time::sleep( delay).await;
            }
            let len = fetch_window( &client, req, request_timeout).await?;
            info!("stored {} bytes of {} in {:?}", len, req.window, req.path);
        }
    }

    println!("Done!");
    Ok(())
}
