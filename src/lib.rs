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

//! # DayWheel
//!
//! DayWheel lays out a 24-hour schedule of named activities as a circular, clock-face chart.
//!
//! Activities are time intervals measured in minutes from midnight. They may overlap each other
//! and may wrap past midnight. Each activity also carries a priority which is used to resolve
//! overlaps: rather than hiding lower priority activities, every period of the day in which more
//! than one activity is active is divided radially into concentric bands, with the highest
//! priority activity placed innermost and given the largest share of the available radius.
//!
//! The layout pipeline is a set of pure functions:
//!
//! - [normalize](crate::normalize) splits activities that wrap past midnight into two
//!   non-wrapping [SubEvent]s.
//! - [sweep](crate::sweep) partitions the day into disjoint [TimeSlice]s, each holding the
//!   priority-sorted list of activities active within it.
//! - [allocator](crate::allocator) divides the radial span between the activities of a slice,
//!   producing [RadialBand]s.
//! - [visualization](crate::visualization) (requires the `viz` feature) converts bands into
//!   annular sector shapes and path primitives, collected in a display list that any vector
//!   drawing surface can consume. The `daywheel_svg` crate provides an SVG backend.
//!
//! Nothing is cached between calls. A change to the activity list simply requires running the
//! pipeline again.

pub mod activity;
pub mod allocator;
pub mod layout;
pub mod normalize;
pub mod polar;
pub mod prelude;
pub mod sweep;

#[cfg(feature = "viz")]
pub mod visualization;

use thiserror::Error;

pub use crate::{
    activity::{Activity, ActivityId, Minutes, MINUTES_PER_DAY},
    allocator::{allocate_bands, BandAllocation, LayoutOverflowWarning, OverlapPolicy, RadialBand, RadialBounds},
    layout::{layout_schedule, LayoutParams, ScheduleLayout, SliceLayout},
    normalize::{normalize_activities, SubEvent},
    sweep::{partition, partition_activities, TimeSlice},
};

/// An error raised when an [Activity] cannot be accepted by the layout pipeline.
/// Validation errors are fatal: no partial layout is produced and the caller must correct the
/// offending activity before trying again.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Activity {id}: start time {start} is outside the range 0..1440")]
    StartOutOfRange { id: ActivityId, start: Minutes },
    #[error("Activity {id}: end time {end} is outside the range 0..=1440")]
    EndOutOfRange { id: ActivityId, end: Minutes },
}

/// An error raised when the radial layout cannot be performed with the supplied parameters.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum LayoutError {
    #[error("Invalid radial bounds: inner radius {inner} must be finite, non-negative and less than outer radius {outer}")]
    InvalidBounds { inner: f32, outer: f32 },
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ScheduleError {
    #[error("Invalid activity: {0}")]
    Validation(#[from] ValidationError),
    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),
}

/// An error type for the visualization functions.
#[cfg(feature = "viz")]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum VizError {
    #[error("An invalid parameter was supplied: {0}")]
    InvalidParameter(String),
    #[error("The schedule could not be laid out: {0}")]
    Schedule(#[from] ScheduleError),
}
