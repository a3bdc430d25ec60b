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
use quake_common::{info, logging::init_logging};
use quake_events::{
    load_config_or_default, summarize, IpmaGraphConfig,
    chart::{QuakeChart, DEFAULT_CHART_HEIGHT},
    ipma::read_ipma_file
};


#[derive(Parser, Debug)]
#[command(version, about, long_about = "chart number of earthquakes from a saved IPMA seismicity page")]
pub struct Args {
    /// RON config file
    #[arg(short,long, default_value = "graph_ipma.ron")]
    pub config: String,

    /// saved IPMA seismicity HTML page (overrides config)
    #[arg(short,long)]
    pub file: Option<PathBuf>,

    /// bucket interval in hours (overrides config)
    #[arg(short,long)]
    pub interval_hours: Option<u32>,
}

fn main()->Result<()> {
    init_logging();
    let args = Args::parse();

    let mut config: IpmaGraphConfig = load_config_or_default( &args.config)?;
    if let Some(file) = args.file { config.html_file = file }
    if let Some(hours) = args.interval_hours { config.interval_hours = hours }

    let events = read_ipma_file( &config.html_file, &config.date_format)?;
    let summary = summarize( &events, &config.region, config.interval_hours)?;
    info!("{} events, {} excluded as outside of region, {} in {} buckets", 
          summary.n_total, summary.n_excluded, summary.n_bucketed(), summary.buckets.len());

    let chart = QuakeChart::counts( &summary.chart_series(), &config.title);
    chart.show( DEFAULT_CHART_HEIGHT)?;

    Ok(())
}
