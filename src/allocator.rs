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

//! The priority radial allocator. Within each [TimeSlice], the radial span between the inner and
//! outer boundary is divided between the active events in proportion to their priorities. The
//! highest priority event is placed innermost.

use strum::{Display, EnumString};

use crate::{
    activity::{ActivityId, Minutes},
    layout::{DEFAULT_HUB_RADIUS, DEFAULT_SCHEDULE_RADIUS},
    polar::minutes_to_degrees,
    sweep::TimeSlice,
    LayoutError,
};

/// Tolerance for floating point accumulation when placing bands against the radial boundaries.
pub const LAYOUT_EPSILON: f32 = 1e-3;

/// The usable radial span for activity bands. The area inside `inner` is reserved for the
/// central hub, and the area outside `outer` for the hour markers and labels.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "(f32, f32)", into = "(f32, f32)"))]
pub struct RadialBounds {
    inner: f32,
    outer: f32,
}

impl Default for RadialBounds {
    fn default() -> Self {
        RadialBounds {
            inner: DEFAULT_HUB_RADIUS,
            outer: DEFAULT_SCHEDULE_RADIUS,
        }
    }
}

// Deserialized bounds go through the same checks as RadialBounds::new
impl TryFrom<(f32, f32)> for RadialBounds {
    type Error = LayoutError;

    fn try_from((inner, outer): (f32, f32)) -> Result<Self, Self::Error> {
        RadialBounds::new(inner, outer)
    }
}

impl From<RadialBounds> for (f32, f32) {
    fn from(bounds: RadialBounds) -> Self {
        (bounds.inner, bounds.outer)
    }
}

impl RadialBounds {
    pub fn new(inner: f32, outer: f32) -> Result<RadialBounds, LayoutError> {
        if !inner.is_finite() || !outer.is_finite() || inner < 0.0 || outer <= inner {
            return Err(LayoutError::InvalidBounds { inner, outer });
        }
        Ok(RadialBounds { inner, outer })
    }

    #[inline]
    pub fn inner(&self) -> f32 {
        self.inner
    }

    #[inline]
    pub fn outer(&self) -> f32 {
        self.outer
    }

    #[inline]
    pub fn span(&self) -> f32 {
        self.outer - self.inner
    }

    /// Return true if `[inner, outer]` lies within these bounds, allowing [LAYOUT_EPSILON] of
    /// slack on either side.
    #[inline]
    pub fn contains(&self, inner: f32, outer: f32) -> bool {
        inner >= self.inner - LAYOUT_EPSILON && outer <= self.outer + LAYOUT_EPSILON
    }
}

/// Selects how overlapping activities within a slice share the radial span.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Display, EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum OverlapPolicy {
    /// Every active event receives a band, sized in proportion to its priority.
    #[default]
    Stacked,
    /// Only the first, highest priority event of each slice is drawn, across the full span.
    /// Ties are broken by input order.
    HighestPriority,
}

/// A [RadialBand] is one concentric ring segment within a slice's sector, representing one
/// active event's share of the radial span. Angles are in degrees, see [crate::polar].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RadialBand {
    pub origin_id: ActivityId,
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub start_angle: f32,
    pub end_angle: f32,
    pub color: String,
    pub border_color: String,
    pub label: String,
    pub priority: i32,
    pub wrapped: bool,
}

impl RadialBand {
    #[inline]
    pub fn thickness(&self) -> f32 {
        self.outer_radius - self.inner_radius
    }

    #[inline]
    pub fn mid_radius(&self) -> f32 {
        self.inner_radius + self.thickness() / 2.0
    }
}

/// A non-fatal condition: a band would have been placed outside the radial bounds and was
/// skipped. The remaining bands of the slice are unaffected.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LayoutOverflowWarning {
    pub slice_start: Minutes,
    pub slice_end: Minutes,
    pub origin_id: ActivityId,
    pub inner_radius: f32,
    pub outer_radius: f32,
}

/// The bands allocated for a single slice, along with any overflow warnings.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BandAllocation {
    pub bands: Vec<RadialBand>,
    pub warnings: Vec<LayoutOverflowWarning>,
}

/// Check a candidate band span against the bounds, returning `(inner, outer)` if it fits.
#[inline]
pub fn place_band(bounds: &RadialBounds, cursor: f32, thickness: f32) -> Option<(f32, f32)> {
    let (inner, outer) = (cursor, cursor + thickness);
    if bounds.contains(inner, outer) {
        Some((inner, outer))
    }
    else {
        None
    }
}

/// Allocate the radial span of `bounds` between the active events of `slice`.
///
/// Events are walked in the slice's priority order starting at the inner boundary. Each event
/// receives `priority / total_priority` of the span. A band that would fall outside the bounds
/// is skipped and reported in [BandAllocation::warnings].
pub fn allocate_bands(slice: &TimeSlice, bounds: &RadialBounds, policy: OverlapPolicy) -> BandAllocation {
    let events = match policy {
        OverlapPolicy::Stacked => &slice.active_events[..],
        OverlapPolicy::HighestPriority => slice.top_event().map(std::slice::from_ref).unwrap_or_default(),
    };

    let mut allocation = BandAllocation {
        bands: Vec::with_capacity(events.len()),
        warnings: Vec::new(),
    };

    // Sum in i64 so that absurd priorities can't overflow.
    let total_priority: i64 = events.iter().map(|e| e.priority.max(1) as i64).sum();
    if total_priority == 0 {
        return allocation;
    }

    let span = bounds.span();
    let start_angle = minutes_to_degrees(slice.start);
    let end_angle = minutes_to_degrees(slice.end);
    let mut cursor = bounds.inner();

    for event in events {
        let thickness = (event.priority.max(1) as f64 / total_priority as f64) as f32 * span;

        match place_band(bounds, cursor, thickness) {
            Some((inner_radius, outer_radius)) => {
                allocation.bands.push(RadialBand {
                    origin_id: event.origin_id,
                    inner_radius,
                    outer_radius,
                    start_angle,
                    end_angle,
                    color: event.color.clone(),
                    border_color: event.border_color.clone(),
                    label: event.label.clone(),
                    priority: event.priority,
                    wrapped: event.wrapped,
                });
            }
            None => {
                log::warn!(
                    "allocate_bands(): band for activity {} in slice {}-{} overflows bounds ({:.4}-{:.4}), skipping",
                    event.origin_id,
                    slice.start,
                    slice.end,
                    cursor,
                    cursor + thickness
                );
                allocation.warnings.push(LayoutOverflowWarning {
                    slice_start: slice.start,
                    slice_end: slice.end,
                    origin_id: event.origin_id,
                    inner_radius: cursor,
                    outer_radius: cursor + thickness,
                });
            }
        }
        cursor += thickness;
    }

    allocation
}
