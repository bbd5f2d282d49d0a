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

//! The prelude re-exports the types most callers need to lay out a schedule.

pub use crate::{
    activity::{format_minutes, Activity, ActivityId, Minutes, MINUTES_PER_DAY},
    allocator::{
        allocate_bands,
        BandAllocation,
        LayoutOverflowWarning,
        OverlapPolicy,
        RadialBand,
        RadialBounds,
        LAYOUT_EPSILON,
    },
    layout::{layout_schedule, LayoutParams, ScheduleLayout, SliceLayout},
    normalize::{normalize_activities, validate_activity, SubEvent},
    polar::{minutes_to_degrees, FULL_CIRCLE_CLAMP},
    sweep::{partition, partition_activities, slice_at, TimeSlice},
    LayoutError,
    ScheduleError,
    ValidationError,
};

#[cfg(feature = "viz")]
pub use crate::{visualization::prelude::*, VizError};
