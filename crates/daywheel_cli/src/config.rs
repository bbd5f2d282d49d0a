/*
    DayWheel

    Copyright 2024-2025 Daniel Balsom

    Permission is hereby granted, free of charge, to any person obtaining a
    copy of this software and associated documentation files (the “Software”),
    to deal in the Software without restriction, including without limitation
    the rights to use, copy, modify, merge, publish, distribute, sublicense,
    and/or sell copies of the Software, and to permit persons to whom the
    Software is furnished to do so, subject to the following conditions:

    The above copyright notice and this permission notice shall be included in
    all copies or substantial portions of the Software.

    THE SOFTWARE IS PROVIDED “AS IS”, WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
    IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
    FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
    AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
    LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
    FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER
    DEALINGS IN THE SOFTWARE.

    --------------------------------------------------------------------------
*/

//! Style configuration, loaded from a TOML file. Every field is optional; anything left out
//! keeps its default value.
//!
//! ```toml
//! hub_radius_ratio = 0.16
//! schedule_radius_ratio = 0.84
//! geometry = "arc"
//! policy = "stacked"
//!
//! [dial]
//! tick_length = 10.0
//! hub_text = "24h"
//! background = { fill = "#f7f7f7", stroke = "#cccccc", stroke_width = 1.0 }
//! hour_labels = { fill = [102, 102, 102, 255], font_size = 14.0 }
//!
//! [bands]
//! stroke_width = 1.5
//! highlight = { stroke = 0xffd600ff, stroke_width = 3.0 }
//! ```

use std::{fs, path::Path};

use anyhow::{anyhow, Context, Error};
use daywheel::prelude::*;
use daywheel_svg::prelude::*;
use serde::Deserialize;

// Deserialize colors as a hex string, an RGBA tuple or a u32
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ConfigColor {
    Hex(String),
    Rgba(u8, u8, u8, u8),
    U32(u32),
}

// Conversion for ConfigColor to VizColor
impl ConfigColor {
    fn to_viz_color(&self) -> Result<VizColor, Error> {
        match self {
            ConfigColor::Hex(hex) => VizColor::from_hex(hex).map_err(|e| anyhow!(e)),
            ConfigColor::Rgba(r, g, b, a) => Ok(VizColor::from_rgba8(*r, *g, *b, *a)),
            ConfigColor::U32(val) => {
                let r = ((val >> 24) & 0xFF) as u8;
                let g = ((val >> 16) & 0xFF) as u8;
                let b = ((val >> 8) & 0xFF) as u8;
                let a = (val & 0xFF) as u8;
                Ok(VizColor::from_rgba8(r, g, b, a))
            }
        }
    }
}

fn merge_color(custom: &Option<ConfigColor>, default: VizColor) -> Result<VizColor, Error> {
    custom.as_ref().map_or(Ok(default), |c| c.to_viz_color())
}

// Optional style fields
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PartialStyleConfig {
    fill: Option<ConfigColor>,
    stroke: Option<ConfigColor>,
    stroke_width: Option<f32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PartialTextConfig {
    fill: Option<ConfigColor>,
    font_size: Option<f32>,
    font_family: Option<String>,
    bold: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct DialConfigInput {
    tick_length: Option<f32>,
    label_offset: Option<f32>,
    label_every: Option<u32>,
    hub_text: Option<String>,
    #[serde(default)]
    background: PartialStyleConfig,
    #[serde(default)]
    ticks: PartialStyleConfig,
    #[serde(default)]
    hub: PartialStyleConfig,
    #[serde(default)]
    hour_labels: PartialTextConfig,
    #[serde(default)]
    hub_label: PartialTextConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct BandConfigInput {
    default_fill: Option<ConfigColor>,
    default_stroke: Option<ConfigColor>,
    stroke_width: Option<f32>,
    #[serde(default)]
    label: PartialTextConfig,
    #[serde(default)]
    highlight: PartialStyleConfig,
}

// Complete style configuration file
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct StyleConfigFileInput {
    hub_radius_ratio: Option<f32>,
    schedule_radius_ratio: Option<f32>,
    geometry: Option<String>,
    policy: Option<String>,
    #[serde(default)]
    dial: DialConfigInput,
    #[serde(default)]
    bands: BandConfigInput,
}

// Translated and merged configuration
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct StyleConfig {
    pub(crate) hub_radius_ratio: f32,
    pub(crate) schedule_radius_ratio: f32,
    pub(crate) geometry: RenderGeometry,
    pub(crate) policy: OverlapPolicy,
    pub(crate) dial_params: DialParams,
    pub(crate) dial_style: DialStyle,
    pub(crate) band_style: BandStyle,
}

impl Default for StyleConfig {
    fn default() -> Self {
        let viz = CommonVizParams::default();
        Self {
            hub_radius_ratio: viz.hub_radius_ratio,
            schedule_radius_ratio: viz.schedule_radius_ratio,
            geometry: viz.geometry,
            policy: viz.policy,
            dial_params: DialParams::default(),
            dial_style: DialStyle::default(),
            band_style: BandStyle::default(),
        }
    }
}

// Merge optional styles with defaults
fn merge_style(default: &ElementStyle, custom: &PartialStyleConfig) -> Result<ElementStyle, Error> {
    Ok(ElementStyle {
        fill: merge_color(&custom.fill, default.fill)?,
        stroke: merge_color(&custom.stroke, default.stroke)?,
        stroke_width: custom.stroke_width.unwrap_or(default.stroke_width),
    })
}

fn merge_text(default: &TextStyle, custom: &PartialTextConfig) -> Result<TextStyle, Error> {
    Ok(TextStyle {
        fill: merge_color(&custom.fill, default.fill)?,
        font_size: custom.font_size.unwrap_or(default.font_size),
        font_family: custom.font_family.clone().unwrap_or_else(|| default.font_family.clone()),
        bold: custom.bold.unwrap_or(default.bold),
    })
}

pub(crate) fn parse_style_config(config_str: &str) -> Result<StyleConfig, Error> {
    let input: StyleConfigFileInput = toml::from_str(config_str)?;
    let defaults = StyleConfig::default();

    let geometry = match &input.geometry {
        Some(s) => s
            .parse::<RenderGeometry>()
            .map_err(|_| anyhow!("Unknown geometry '{}', expected 'sector' or 'arc'", s))?,
        None => defaults.geometry,
    };
    let policy = match &input.policy {
        Some(s) => s
            .parse::<OverlapPolicy>()
            .map_err(|_| anyhow!("Unknown policy '{}', expected 'stacked' or 'highest_priority'", s))?,
        None => defaults.policy,
    };

    let dial = &input.dial;
    let dial_params = DialParams {
        tick_length: dial.tick_length.unwrap_or(defaults.dial_params.tick_length),
        label_offset: dial.label_offset.unwrap_or(defaults.dial_params.label_offset),
        label_every: dial.label_every.unwrap_or(defaults.dial_params.label_every),
        // An empty string disables the hub label.
        hub_label: match &dial.hub_text {
            Some(text) if text.is_empty() => None,
            Some(text) => Some(text.clone()),
            None => defaults.dial_params.hub_label.clone(),
        },
    };
    let dial_style = DialStyle {
        background: merge_style(&defaults.dial_style.background, &dial.background)?,
        ticks: merge_style(&defaults.dial_style.ticks, &dial.ticks)?,
        hour_labels: merge_text(&defaults.dial_style.hour_labels, &dial.hour_labels)?,
        hub: merge_style(&defaults.dial_style.hub, &dial.hub)?,
        hub_label: merge_text(&defaults.dial_style.hub_label, &dial.hub_label)?,
    };

    let bands = &input.bands;
    let band_style = BandStyle {
        default_fill: merge_color(&bands.default_fill, defaults.band_style.default_fill)?,
        default_stroke: merge_color(&bands.default_stroke, defaults.band_style.default_stroke)?,
        stroke_width: bands.stroke_width.unwrap_or(defaults.band_style.stroke_width),
        label: merge_text(&defaults.band_style.label, &bands.label)?,
        highlight: merge_style(&defaults.band_style.highlight, &bands.highlight)?,
    };

    Ok(StyleConfig {
        hub_radius_ratio: input.hub_radius_ratio.unwrap_or(defaults.hub_radius_ratio),
        schedule_radius_ratio: input.schedule_radius_ratio.unwrap_or(defaults.schedule_radius_ratio),
        geometry,
        policy,
        dial_params,
        dial_style,
        band_style,
    })
}

pub(crate) fn load_style_config(path: impl AsRef<Path>) -> Result<StyleConfig, Error> {
    let path = path.as_ref();
    let config_str =
        fs::read_to_string(path).with_context(|| format!("Error reading style file {}", path.display()))?;
    parse_style_config(&config_str).with_context(|| format!("Error in style file {}", path.display()))
}
