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

//! Interval normalization. Activities that wrap past midnight are split into two non-wrapping
//! [SubEvent]s, both tagged with the id of the activity they came from.

use crate::{
    activity::{Activity, ActivityId, Minutes, MINUTES_PER_DAY},
    ValidationError,
};

/// A [SubEvent] is a non-wrapping piece of an [Activity], satisfying
/// `0 <= start < end <= 1440`. One activity produces one sub-event, or two if it wraps.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SubEvent {
    pub origin_id: ActivityId,
    pub start: Minutes,
    pub end: Minutes,
    pub color: String,
    pub border_color: String,
    /// The effective priority of the originating activity (never less than 1).
    pub priority: i32,
    pub label: String,
    /// True if this piece is one half of an activity that wraps past midnight.
    pub wrapped: bool,
}

impl SubEvent {
    fn from_activity(activity: &Activity, start: Minutes, end: Minutes) -> SubEvent {
        SubEvent {
            origin_id: activity.id,
            start,
            end,
            color: activity.color.clone(),
            border_color: activity.border_color.clone(),
            priority: activity.effective_priority(),
            label: activity.name.clone(),
            wrapped: activity.wraps(),
        }
    }

    #[inline]
    pub fn duration(&self) -> Minutes {
        self.end - self.start
    }

    /// Return a copy of this sub-event restricted to `[start, end)`.
    pub(crate) fn restricted(&self, start: Minutes, end: Minutes) -> SubEvent {
        SubEvent {
            start: self.start.max(start),
            end: self.end.min(end),
            ..self.clone()
        }
    }
}

/// Check that an activity's times are within range. `end` may equal 1440 so that a full-day
/// activity can be expressed without wrapping.
pub fn validate_activity(activity: &Activity) -> Result<(), ValidationError> {
    if !(0..MINUTES_PER_DAY).contains(&activity.start) {
        return Err(ValidationError::StartOutOfRange {
            id: activity.id,
            start: activity.start,
        });
    }
    if !(0..=MINUTES_PER_DAY).contains(&activity.end) {
        return Err(ValidationError::EndOutOfRange {
            id: activity.id,
            end: activity.end,
        });
    }
    Ok(())
}

/// Split each activity into non-wrapping [SubEvent]s, preserving input order.
///
/// A wrapping activity (`start >= end`) produces `[start, 1440)` followed by `[0, end)`. Pieces
/// of zero width are not emitted, so an activity ending exactly at midnight produces one piece.
/// The first invalid activity aborts normalization with a [ValidationError].
pub fn normalize_activities(activities: &[Activity]) -> Result<Vec<SubEvent>, ValidationError> {
    let mut sub_events = Vec::with_capacity(activities.len() * 2);

    for activity in activities {
        validate_activity(activity)?;

        if !activity.wraps() {
            sub_events.push(SubEvent::from_activity(activity, activity.start, activity.end));
            continue;
        }

        log::trace!("normalize_activities(): splitting wrapping activity {}", activity);
        sub_events.push(SubEvent::from_activity(activity, activity.start, MINUTES_PER_DAY));
        if activity.end > 0 {
            sub_events.push(SubEvent::from_activity(activity, 0, activity.end));
        }
    }

    log::debug!(
        "normalize_activities(): {} activities produced {} sub-events",
        activities.len(),
        sub_events.len()
    );
    Ok(sub_events)
}
