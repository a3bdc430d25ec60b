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

use std::path::PathBuf;
use anyhow::Result;
use clap::Parser;
use quake_common::{info, datetime::DATE_FORMAT, logging::init_logging};
use quake_events::{
    load_config_or_default, summarize, UsgsGraphConfig,
    chart::{QuakeChart, DEFAULT_CHART_HEIGHT},
    usgs::{dedup_events, read_usgs_dir}
};


#[derive(Parser, Debug)]
#[command(version, about, long_about = "chart number and intensity of USGS earthquakes in a region over time")]
pub struct Args {
    /// RON config file
    #[arg(short,long, default_value = "graph_usgs.ron")]
    pub config: String,

    /// directory with USGS CSV files (overrides config)
    #[arg(short,long)]
    pub data_dir: Option<PathBuf>,

    /// bucket interval in hours (overrides config)
    #[arg(short,long)]
    pub interval_hours: Option<u32>,
}

fn main()->Result<()> {
    init_logging();
    let args = Args::parse();

    let mut config: UsgsGraphConfig = load_config_or_default( &args.config)?;
    if let Some(dir) = args.data_dir { config.data_dir = dir }
    if let Some(hours) = args.interval_hours { config.interval_hours = hours }

    let events = read_usgs_dir( &config.data_dir, &config.date_format, config.max_files)?;
    let (events, n_dups) = dedup_events( events);
    if n_dups > 0 { info!("dropped {} duplicate events", n_dups) }

    let summary = summarize( &events, &config.region, config.interval_hours)?;
    info!("{} events, {} excluded as outside of region, {} in {} buckets", 
          summary.n_total, summary.n_excluded, summary.n_bucketed(), summary.buckets.len());

    let title = format!("{}, {} - {}", config.title, 
                        summary.date_start.format( DATE_FORMAT), summary.date_end.format( DATE_FORMAT));
    let chart = QuakeChart::intensity( &summary.chart_series(), &title);
    chart.show( DEFAULT_CHART_HEIGHT)?;

    Ok(())
}
