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

//! Vectorization of the clock dial drawn around and behind a schedule.

use crate::{
    activity::MINUTES_PER_DAY,
    polar::minutes_to_degrees,
    visualization::{
        types::shapes::{VizCircle, VizLine, VizPoint2d, VizText},
        CommonVizParams,
    },
    VizError,
};

const HOURS_PER_DAY: u32 = (MINUTES_PER_DAY / 60) as u32;

/// Parameters for dial vectorization. Lengths are in the same units as
/// [CommonVizParams::radius].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DialParams {
    /// Length of the hour tick marks, measured outward from the edge of the schedule ring.
    pub tick_length: f32,
    /// Distance from the edge of the schedule ring to the center of the hour labels.
    pub label_offset: f32,
    /// Draw an hour label every `label_every` hours, starting at midnight.
    pub label_every: u32,
    /// Text drawn in the central hub, if any.
    pub hub_label: Option<String>,
}

impl Default for DialParams {
    fn default() -> Self {
        Self {
            tick_length: 10.0,
            label_offset: 25.0,
            label_every: 3,
            hub_label: Some("24h".to_string()),
        }
    }
}

/// The static components of the dial.
#[derive(Clone, Debug, PartialEq)]
pub struct VizDial {
    /// Disc beneath the schedule ring, with the radius of the schedule's outer boundary.
    pub background: VizCircle,
    /// One tick per hour, starting at midnight.
    pub ticks: Vec<VizLine<f32>>,
    pub hour_labels: Vec<VizText>,
    /// The central hub, covering the unused area inside the schedule's inner boundary.
    pub hub: VizCircle,
    pub hub_label: Option<VizText>,
}

/// Produce the dial for a schedule rendered with parameters `p`.
pub fn vectorize_dial(p: &CommonVizParams, d: &DialParams) -> Result<VizDial, VizError> {
    // Validates radius and ratios.
    let layout_params = p.layout_params()?;

    if d.label_every == 0 {
        return Err(VizError::InvalidParameter("label_every must be at least 1".to_string()));
    }
    if !(d.tick_length.is_finite() && d.label_offset.is_finite()) {
        return Err(VizError::InvalidParameter(
            "tick_length and label_offset must be finite".to_string(),
        ));
    }

    let center = p.center();
    let ring = layout_params.bounds.outer();

    let mut ticks = Vec::with_capacity(HOURS_PER_DAY as usize);
    let mut hour_labels = Vec::with_capacity((HOURS_PER_DAY / d.label_every) as usize + 1);

    for hour in 0..HOURS_PER_DAY {
        let angle = minutes_to_degrees((hour * 60) as i32);
        ticks.push(VizLine::new(
            VizPoint2d::from_polar(&center, ring, angle),
            VizPoint2d::from_polar(&center, ring + d.tick_length, angle),
        ));

        if hour % d.label_every == 0 {
            hour_labels.push(VizText::new(
                VizPoint2d::from_polar(&center, ring + d.label_offset, angle),
                hour.to_string(),
            ));
        }
    }

    Ok(VizDial {
        background: VizCircle::new(center, ring),
        ticks,
        hour_labels,
        hub: VizCircle::new(center, layout_params.bounds.inner()),
        hub_label: d.hub_label.as_ref().map(|text| VizText::new(center, text.clone())),
    })
}
