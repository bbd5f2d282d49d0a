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

//! The layout pipeline: normalize, partition and allocate in one call.

use crate::{
    activity::{Activity, Minutes},
    allocator::{allocate_bands, LayoutOverflowWarning, OverlapPolicy, RadialBand, RadialBounds},
    normalize::normalize_activities,
    sweep::partition,
    ScheduleError,
};

/// Total radius of the reference dial, matching a 500x500 view box.
pub const DEFAULT_DIAL_RADIUS: f32 = 250.0;
/// Radius of the central hub. Activity bands start here.
pub const DEFAULT_HUB_RADIUS: f32 = 40.0;
/// Outer radius of the activity bands. The remaining margin holds hour markers and labels.
pub const DEFAULT_SCHEDULE_RADIUS: f32 = 210.0;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct LayoutParams {
    pub bounds: RadialBounds,
    pub policy: OverlapPolicy,
}

/// The bands of a single time slice, ordered from the inner boundary outward.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SliceLayout {
    pub start: Minutes,
    pub end: Minutes,
    pub bands: Vec<RadialBand>,
}

/// A complete layout: the slices of the day in ascending order, each with its bands, plus any
/// non-fatal warnings raised during allocation.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduleLayout {
    pub slices: Vec<SliceLayout>,
    pub warnings: Vec<LayoutOverflowWarning>,
}

impl ScheduleLayout {
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Return the total number of bands across all slices.
    pub fn band_count(&self) -> usize {
        self.slices.iter().map(|s| s.bands.len()).sum()
    }

    /// Return an iterator over every band along with the index of its slice.
    pub fn bands(&self) -> impl Iterator<Item = (usize, &RadialBand)> {
        self.slices
            .iter()
            .enumerate()
            .flat_map(|(si, slice)| slice.bands.iter().map(move |b| (si, b)))
    }
}

/// Lay out a list of activities. This is a pure function of its inputs; calling it twice with
/// the same activities produces identical output.
pub fn layout_schedule(activities: &[Activity], params: &LayoutParams) -> Result<ScheduleLayout, ScheduleError> {
    let sub_events = normalize_activities(activities)?;
    let slices = partition(&sub_events);

    let mut layout = ScheduleLayout {
        slices: Vec::with_capacity(slices.len()),
        warnings: Vec::new(),
    };

    for slice in &slices {
        let allocation = allocate_bands(slice, &params.bounds, params.policy);
        layout.warnings.extend(allocation.warnings);
        layout.slices.push(SliceLayout {
            start: slice.start,
            end: slice.end,
            bands: allocation.bands,
        });
    }

    log::debug!(
        "layout_schedule(): {} slices, {} bands, {} warnings",
        layout.slices.len(),
        layout.band_count(),
        layout.warnings.len()
    );
    Ok(layout)
}
