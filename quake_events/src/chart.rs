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

//! terminal bar charts of bucketed quake data

use std::io::{stdout, IsTerminal, Write};
use ratatui::{
    prelude::*,
    widgets::{Bar, BarChart, BarGroup, Block},
    TerminalOptions, Viewport
};
use crate::{errors::Result, normalize::ChartSeries};

pub mod theme;
use theme::THEME;

pub const DEFAULT_CHART_HEIGHT: u16 = 20;

/// chart bar values are percentages
fn bar_value (v: f64)->u64 {
    if v.is_finite() { v.round().clamp( 0.0, 100.0) as u64 } else { 0 }
}

/// width needed for `n_groups` groups plus borders, at least wide enough for the title.
/// Large bucket counts saturate at the max terminal width
fn chart_width (n_groups: usize, group_width: u16, group_gap: u16, title: &str)->u16 {
    let bars = n_groups.saturating_mul( group_width as usize);
    let gaps = n_groups.saturating_sub(1).saturating_mul( group_gap as usize);
    let width = bars.saturating_add( gaps).saturating_add(2).max( title.len().saturating_add(4));
    u16::try_from( width).unwrap_or( u16::MAX)
}

fn chart_block (title: &str, legend: Line<'static>)->Block<'static> {
    Block::bordered()
        .border_style( THEME.border)
        .title( Line::styled( format!(" {} ", title), THEME.title))
        .title_bottom( legend)
}

fn legend_entry (name: &'static str, color: Color)->Vec<Span<'static>> {
    vec![ Span::styled( " ■ ", Style::new().fg(color)), Span::styled( name, THEME.legend) ]
}

/// a ready-to-render chart together with the width it needs to show all bars
#[derive(Debug,Clone)]
pub struct QuakeChart {
    pub chart: BarChart<'static>,
    pub width: u16,
}

impl QuakeChart {
    /// bar-per-bucket chart of the relative quake counts
    pub fn counts (series: &ChartSeries, title: &str)->Self {
        let bars: Vec<Bar> = series.labels.iter().zip( series.counts.iter()).map( |(label,v)| {
            Bar::default()
                .value( bar_value(*v))
                .style( THEME.chart.count_bar)
                .value_style( THEME.chart.count_val)
                .label( Line::styled( label.clone(), THEME.chart.label))
        }).collect();

        let legend = Line::from( legend_entry( "Quakes", THEME.chart.count_bar));

        let chart = BarChart::default()
            .block( chart_block( title, legend))
            .bar_width( THEME.chart.bar_width)
            .bar_gap( 1)
            .max( 100)
            .data( BarGroup::default().bars( &bars));

        let width = chart_width( series.len(), THEME.chart.bar_width, 1, title);
        QuakeChart { chart, width }
    }

    /// groups of (count, max magnitude, max depth) bars per bucket
    pub fn intensity (series: &ChartSeries, title: &str)->Self {
        let mut chart = BarChart::default()
            .bar_width( THEME.chart.bar_width)
            .bar_gap( THEME.chart.bar_gap)
            .group_gap( THEME.chart.group_gap)
            .max( 100);

        for i in 0..series.len() {
            let group = BarGroup::default()
                .bars( &[
                    Bar::default()
                        .value( bar_value( series.counts[i]))
                        .style( THEME.chart.count_bar)
                        .value_style( THEME.chart.count_val),
                    Bar::default()
                        .value( bar_value( series.magnitudes[i]))
                        .style( THEME.chart.mag_bar)
                        .value_style( THEME.chart.mag_val),
                    Bar::default()
                        .value( bar_value( series.depths[i]))
                        .style( THEME.chart.depth_bar)
                        .value_style( THEME.chart.depth_val),
                ])
                .label( Line::from( series.labels[i].clone()).centered());
            chart = chart.data( group);
        }

        let mut legend = legend_entry( "Quakes", THEME.chart.count_bar);
        legend.extend( legend_entry( "Max Mag.", THEME.chart.mag_bar));
        legend.extend( legend_entry( "Max Depth", THEME.chart.depth_bar));
        let chart = chart.block( chart_block( title, Line::from( legend)));

        let group_width = 3 * THEME.chart.bar_width + 2 * THEME.chart.bar_gap;
        let width = chart_width( series.len(), group_width, THEME.chart.group_gap, title);
        QuakeChart { chart, width }
    }

    /// render into an off-screen buffer and return the (right-trimmed) text lines
    pub fn render_to_lines (&self, width: u16, height: u16)->Vec<String> {
        let area = Rect::new( 0, 0, width, height);
        let mut buf = Buffer::empty( area);
        self.chart.clone().render( area, &mut buf);

        (0..height).map( |y| {
            let line: String = (0..width).map( |x| buf[(x,y)].symbol()).collect();
            line.trim_end().to_string()
        }).collect()
    }

    /// draw inline if stdout is a terminal, otherwise print as plain text
    pub fn show (&self, height: u16)->Result<()> {
        if stdout().is_terminal() {
            let mut terminal = Terminal::with_options(
                CrosstermBackend::new( stdout()),
                TerminalOptions { viewport: Viewport::Inline( height) }
            )?;
            terminal.draw( |frame| frame.render_widget( self.chart.clone(), frame.area()))?;
            println!();

        } else {
            let mut out = stdout().lock();
            for line in self.render_to_lines( self.width, height) {
                writeln!( out, "{}", line)?;
            }
        }
        Ok(())
    }
}
