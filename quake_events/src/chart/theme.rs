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

use ratatui::style::{Color, Modifier, Style};

/// it defines the look of all quake charts
pub struct Theme {
    pub title: Style,
    pub border: Style,
    pub legend: Style,
    pub chart: QuakeBarChart,
}

pub struct QuakeBarChart {
    pub count_bar: Color,
    pub count_val: Style,
    pub mag_bar: Color,
    pub mag_val: Style,
    pub depth_bar: Color,
    pub depth_val: Style,
    pub label: Style,
    pub bar_width: u16,
    pub bar_gap: u16,
    pub group_gap: u16,
}

pub const THEME: Theme = Theme {
    title: Style::new()
        .fg(Palette::WHITE)
        .add_modifier(Modifier::BOLD),
    border: Style::new().fg(Palette::MID_GRAY),
    legend: Style::new().fg(Palette::LIGHT_GRAY),
    chart: QuakeBarChart {
        count_bar: Palette::YELLOW,
        count_val: Style::new()
            .fg(Palette::DARK_GRAY)
            .bg(Palette::YELLOW),
        mag_bar: Palette::ORANGE,
        mag_val: Style::new()
            .fg(Palette::DARK_GRAY)
            .bg(Palette::ORANGE),
        depth_bar: Palette::RED,
        depth_val: Style::new()
            .fg(Palette::BLACK)
            .bg(Palette::RED),
        label: Style::new().fg(Palette::MID_GRAY),
        bar_width: 3,
        bar_gap: 0,
        group_gap: 2,
    }
};

pub struct Palette;
impl Palette {
    // white-gray-black theme
    pub const WHITE: Color = Color::Rgb(255,255,255);
    pub const LIGHT_GRAY: Color = Color::Rgb(220, 220, 220);
    pub const MID_GRAY: Color = Color::Rgb(128, 128, 128);
    pub const DARK_GRAY: Color = Color::Rgb(68, 68, 68);
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    // fire theme
    pub const YELLOW: Color = Color::Rgb(255, 207, 51);
    pub const ORANGE: Color = Color::Rgb(240, 127, 0);
    pub const RED: Color = Color::Rgb(212, 0, 0);
}
