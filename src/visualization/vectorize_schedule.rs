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

//! Methods for emitting display lists of [VizElement] objects from the bands of a
//! [ScheduleLayout].

use crate::{
    activity::{Activity, Minutes},
    allocator::{LayoutOverflowWarning, RadialBand},
    layout::{layout_schedule, ScheduleLayout},
    visualization::{
        types::{
            display_list::VizScheduleDisplayList,
            shapes::{VizElement, VizElementFlags, VizElementInfo, VizPoint2d, VizSector, VizShape, VizStrokeArc},
        },
        CommonVizParams,
        RenderGeometry,
    },
    VizError,
};

/// The output of [vectorize_schedule]: a display list along with any layout warnings that were
/// raised while allocating bands.
#[derive(Clone, Debug, Default)]
pub struct VectorizedSchedule {
    pub display_list: VizScheduleDisplayList,
    pub warnings: Vec<LayoutOverflowWarning>,
}

pub struct CalcElementParams<'a> {
    pub center:    VizPoint2d<f32>,
    pub band:      &'a RadialBand,
    pub span:      (Minutes, Minutes),
    pub slice_idx: usize,
    pub band_idx:  usize,
}

/// Calculate a [VizElement] for a single [RadialBand], producing the geometry selected by
/// `p.geometry`.
pub fn calc_element(e: &CalcElementParams, p: &CommonVizParams) -> VizElement {
    let band = e.band;

    let mut flags = VizElementFlags::NONE;
    if band.wrapped {
        flags |= VizElementFlags::WRAPPED;
    }
    if (band.end_angle - band.start_angle).abs() >= 360.0 {
        flags |= VizElementFlags::FULL_CIRCLE;
    }
    if e.band_idx == 0 {
        flags |= VizElementFlags::TOP_PRIORITY;
    }

    let shape: VizShape = match p.geometry {
        RenderGeometry::Sector => VizSector::from_angles(
            &e.center,
            p.winding,
            band.start_angle,
            band.end_angle,
            band.inner_radius,
            band.outer_radius,
        )
        .into(),
        RenderGeometry::Arc => VizStrokeArc::from_angles(
            &e.center,
            p.winding,
            band.start_angle,
            band.end_angle,
            band.mid_radius(),
            band.thickness(),
        )
        .into(),
    };

    let info = VizElementInfo {
        origin_id: Some(band.origin_id),
        time_range: Some(e.span.0..e.span.1),
        slice_idx: Some(e.slice_idx),
        band_idx: Some(e.band_idx),
        label: band.label.clone(),
        color: band.color.clone(),
        border_color: band.border_color.clone(),
    };

    VizElement::new(shape, flags, info)
}

/// Create a [VizScheduleDisplayList] from an existing [ScheduleLayout].
/// The layout's radii are used as-is, so it should have been produced with the bounds returned
/// by [CommonVizParams::layout_params].
pub fn vectorize_layout(layout: &ScheduleLayout, p: &CommonVizParams) -> VizScheduleDisplayList {
    let center = p.center();
    let spans = layout.slices.iter().map(|s| (s.start, s.end)).collect();
    let mut display_list = VizScheduleDisplayList::new(p.winding, spans);

    for (si, slice) in layout.slices.iter().enumerate() {
        log::trace!(
            "vectorize_layout(): slice {} ({}-{}) has {} bands",
            si,
            slice.start,
            slice.end,
            slice.bands.len()
        );
        for (bi, band) in slice.bands.iter().enumerate() {
            let element = calc_element(
                &CalcElementParams {
                    center,
                    band,
                    span: (slice.start, slice.end),
                    slice_idx: si,
                    band_idx: bi,
                },
                p,
            );
            display_list.push(si, element);
        }
    }

    display_list
}

/// Lay out `activities` and vectorize the result.
/// # Arguments:
/// - `activities`: The activities to render. Wrapping activities are split at midnight.
/// - `p`: A reference to a [CommonVizParams] object containing the parameters common to all
///   visualization functions.
pub fn vectorize_schedule(activities: &[Activity], p: &CommonVizParams) -> Result<VectorizedSchedule, VizError> {
    let layout_params = p.layout_params()?;
    let layout = layout_schedule(activities, &layout_params)?;

    let display_list = vectorize_layout(&layout, p);
    log::debug!(
        "vectorize_schedule(): {} activities produced {} elements in {} slices",
        activities.len(),
        display_list.len(),
        display_list.slices.len()
    );

    Ok(VectorizedSchedule {
        display_list,
        warnings: layout.warnings,
    })
}
