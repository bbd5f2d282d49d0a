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

//! Styles applied to the dial and to activity bands. Activity fill and border colors come from
//! the activities themselves, so only the remaining presentation details live here.

use daywheel::visualization::prelude::VizColor;

/// Fill and stroke for a shape.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementStyle {
    pub fill: VizColor,
    pub stroke: VizColor,
    pub stroke_width: f32,
}

impl Default for ElementStyle {
    fn default() -> Self {
        Self {
            fill: VizColor::TRANSPARENT,
            stroke: VizColor::BLACK,
            stroke_width: 1.0,
        }
    }
}

impl ElementStyle {
    pub fn fill_only(fill: VizColor) -> ElementStyle {
        ElementStyle {
            fill,
            stroke: VizColor::TRANSPARENT,
            stroke_width: 0.0,
        }
    }
}

/// Presentation attributes for text.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextStyle {
    pub fill: VizColor,
    pub font_size: f32,
    pub font_family: String,
    pub bold: bool,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            fill: VizColor::from_rgba8(0x22, 0x22, 0x22, 0xff),
            font_size: 12.0,
            font_family: "sans-serif".to_string(),
            bold: false,
        }
    }
}

/// Styles for the static parts of the dial.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DialStyle {
    pub background: ElementStyle,
    pub ticks: ElementStyle,
    pub hour_labels: TextStyle,
    pub hub: ElementStyle,
    pub hub_label: TextStyle,
}

impl Default for DialStyle {
    fn default() -> Self {
        let border = VizColor::from_rgba8(0xcc, 0xcc, 0xcc, 0xff);
        Self {
            background: ElementStyle {
                fill: VizColor::from_rgba8(0xf7, 0xf7, 0xf7, 0xff),
                stroke: border,
                stroke_width: 1.0,
            },
            ticks: ElementStyle {
                fill: VizColor::TRANSPARENT,
                stroke: border,
                stroke_width: 1.0,
            },
            hour_labels: TextStyle {
                fill: VizColor::from_rgba8(0x66, 0x66, 0x66, 0xff),
                font_size: 14.0,
                ..Default::default()
            },
            hub: ElementStyle::fill_only(VizColor::WHITE),
            hub_label: TextStyle {
                font_size: 18.0,
                ..Default::default()
            },
        }
    }
}

/// Styles for activity bands.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BandStyle {
    /// Fill used for activities with no color of their own.
    pub default_fill: VizColor,
    /// Border used for activities with no border color of their own.
    pub default_stroke: VizColor,
    /// Width of the border drawn around each sector, in the activity's border color. Ignored for
    /// arc geometry, where the band is drawn as a stroke.
    pub stroke_width: f32,
    pub label: TextStyle,
    /// Outline drawn over highlighted bands.
    pub highlight: ElementStyle,
}

impl Default for BandStyle {
    fn default() -> Self {
        Self {
            default_fill: VizColor::from_rgba8(0x9e, 0x9e, 0x9e, 0xff),
            default_stroke: VizColor::from_rgba8(0x61, 0x61, 0x61, 0xff),
            stroke_width: 1.0,
            label: TextStyle {
                bold: true,
                ..Default::default()
            },
            highlight: ElementStyle {
                fill: VizColor::TRANSPARENT,
                stroke: VizColor::from_rgba8(0xff, 0xd6, 0x00, 0xff),
                stroke_width: 3.0,
            },
        }
    }
}
