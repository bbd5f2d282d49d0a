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

//! The sweep partitioner. All sub-event boundaries are merged into a sorted set of time points,
//! and the day is cut into maximal [TimeSlice]s within which the set of active sub-events does
//! not change.

use std::{cmp::Reverse, collections::BTreeSet};

use crate::{
    activity::{Activity, Minutes},
    normalize::{normalize_activities, SubEvent},
    ValidationError,
};

/// A [TimeSlice] is a half-open interval `[start, end)` of the day, along with the sub-events
/// active within it, clipped to the slice and sorted by descending priority. Equal priorities
/// keep their input order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TimeSlice {
    pub start: Minutes,
    pub end: Minutes,
    pub active_events: Vec<SubEvent>,
}

impl TimeSlice {
    #[inline]
    pub fn duration(&self) -> Minutes {
        self.end - self.start
    }

    /// Return true if `minute` falls within `[start, end)`.
    #[inline]
    pub fn contains(&self, minute: Minutes) -> bool {
        minute >= self.start && minute < self.end
    }

    /// Return the highest priority event in this slice.
    pub fn top_event(&self) -> Option<&SubEvent> {
        self.active_events.first()
    }
}

/// Partition a list of sub-events into disjoint [TimeSlice]s, sorted by start time.
///
/// Intervals in which no sub-event is active are omitted, so the union of the returned slices
/// is exactly the union of the input sub-events.
pub fn partition(sub_events: &[SubEvent]) -> Vec<TimeSlice> {
    let boundaries: BTreeSet<Minutes> = sub_events.iter().flat_map(|e| [e.start, e.end]).collect();
    let points: Vec<Minutes> = boundaries.into_iter().collect();

    let mut slices = Vec::with_capacity(points.len().saturating_sub(1));

    for window in points.windows(2) {
        let (t0, t1) = (window[0], window[1]);

        // Half-open overlap test. Sub-events that merely touch the boundary are not active.
        let mut active: Vec<SubEvent> = sub_events
            .iter()
            .filter(|e| e.start < t1 && e.end > t0)
            .map(|e| e.restricted(t0, t1))
            .collect();

        if active.is_empty() {
            log::trace!("partition(): gap at {}-{}", t0, t1);
            continue;
        }

        // sort_by_key is stable, which keeps equal priorities in input order.
        active.sort_by_key(|e| Reverse(e.priority));

        log::trace!("partition(): slice {}-{} has {} active events", t0, t1, active.len());
        slices.push(TimeSlice {
            start: t0,
            end: t1,
            active_events: active,
        });
    }

    log::debug!(
        "partition(): {} sub-events, {} boundaries, {} slices",
        sub_events.len(),
        points.len(),
        slices.len()
    );
    slices
}

/// Normalize and partition a list of activities in one step.
pub fn partition_activities(activities: &[Activity]) -> Result<Vec<TimeSlice>, ValidationError> {
    let sub_events = normalize_activities(activities)?;
    Ok(partition(&sub_events))
}

/// Find the slice containing `minute`, if any. `slices` must be sorted and disjoint, as
/// returned by [partition].
pub fn slice_at(slices: &[TimeSlice], minute: Minutes) -> Option<&TimeSlice> {
    let idx = slice_index_at(slices, minute)?;
    slices.get(idx)
}

pub(crate) fn slice_index_at(slices: &[TimeSlice], minute: Minutes) -> Option<usize> {
    let idx = slices.partition_point(|s| s.end <= minute);
    match slices.get(idx) {
        Some(slice) if slice.contains(minute) => Some(idx),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(slice: &TimeSlice) -> Vec<u32> {
        slice.active_events.iter().map(|e| e.origin_id).collect()
    }

    #[test]
    fn empty_input_yields_no_slices() {
        assert!(partition(&[]).is_empty());
        assert!(partition_activities(&[]).unwrap().is_empty());
    }

    #[test]
    fn full_day_yields_single_slice() {
        let slices = partition_activities(&[Activity::new(1, "day", 0, 1440)]).unwrap();
        assert_eq!(slices.len(), 1);
        assert_eq!((slices[0].start, slices[0].end), (0, 1440));
        assert_eq!(ids(&slices[0]), vec![1]);
    }

    #[test]
    fn three_way_split() {
        // B runs past midnight: 15:00 to 01:00.
        let slices = partition_activities(&[
            Activity::new(1, "A", 600, 1200).with_priority(5),
            Activity::new(2, "B", 900, 60).with_priority(3),
        ])
        .unwrap();

        let spans: Vec<(i32, i32)> = slices.iter().map(|s| (s.start, s.end)).collect();
        assert_eq!(spans, vec![(0, 60), (600, 900), (900, 1200), (1200, 1440)]);
        assert_eq!(ids(&slices[0]), vec![2]);
        assert_eq!(ids(&slices[1]), vec![1]);
        assert_eq!(ids(&slices[2]), vec![1, 2]);
        assert_eq!(ids(&slices[3]), vec![2]);
    }

    #[test]
    fn touching_intervals_do_not_overlap() {
        let slices = partition_activities(&[Activity::new(1, "a", 60, 120), Activity::new(2, "b", 120, 180)]).unwrap();
        assert_eq!(slices.len(), 2);
        assert_eq!(ids(&slices[0]), vec![1]);
        assert_eq!(ids(&slices[1]), vec![2]);
    }

    #[test]
    fn gaps_are_omitted() {
        let slices = partition_activities(&[Activity::new(1, "a", 60, 120), Activity::new(2, "b", 300, 360)]).unwrap();
        let spans: Vec<(i32, i32)> = slices.iter().map(|s| (s.start, s.end)).collect();
        assert_eq!(spans, vec![(60, 120), (300, 360)]);
    }

    #[test]
    fn equal_priorities_keep_input_order() {
        let slices = partition_activities(&[
            Activity::new(3, "c", 0, 100).with_priority(2),
            Activity::new(1, "a", 0, 100).with_priority(2),
            Activity::new(2, "b", 0, 100).with_priority(4),
        ])
        .unwrap();
        assert_eq!(ids(&slices[0]), vec![2, 3, 1]);
    }

    #[test]
    fn active_events_are_clipped_to_slice() {
        let slices = partition_activities(&[Activity::new(1, "a", 0, 300), Activity::new(2, "b", 100, 200)]).unwrap();
        let mid = &slices[1];
        assert_eq!((mid.start, mid.end), (100, 200));
        for e in &mid.active_events {
            assert_eq!((e.start, e.end), (100, 200));
        }
    }

    #[test]
    fn wrap_covers_both_ends_of_day() {
        let slices = partition_activities(&[Activity::new(9, "sleep", 1320, 360).with_colors("#112233", "#000")]).unwrap();
        let spans: Vec<(i32, i32)> = slices.iter().map(|s| (s.start, s.end)).collect();
        assert_eq!(spans, vec![(0, 360), (1320, 1440)]);
        assert!(slices.iter().all(|s| ids(s) == vec![9]));
        assert_eq!(slices[0].active_events[0].color, slices[1].active_events[0].color);
    }

    #[test]
    fn slice_lookup() {
        let slices = partition_activities(&[Activity::new(1, "a", 60, 120), Activity::new(2, "b", 300, 360)]).unwrap();
        assert_eq!(slice_at(&slices, 60).map(|s| s.start), Some(60));
        assert_eq!(slice_at(&slices, 119).map(|s| s.start), Some(60));
        assert!(slice_at(&slices, 120).is_none());
        assert!(slice_at(&slices, 0).is_none());
        assert_eq!(slice_at(&slices, 359).map(|s| s.start), Some(300));
        assert!(slice_at(&slices, 1439).is_none());
    }
}
