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

//! End to end checks of the layout pipeline against the documented behavior.

mod common;

use common::*;
use daywheel::prelude::*;

#[test]
fn wrap_correctness() {
    init();
    // 22:00 to 06:00
    let activities = [Activity::new(9, "night", 1320, 360).with_colors("navy", "black")];
    let slices = partition_activities(&activities).unwrap();

    assert_eq!(slices.len(), 2);
    assert_eq!((slices[0].start, slices[0].end), (0, 360));
    assert_eq!((slices[1].start, slices[1].end), (1320, 1440));
    for slice in &slices {
        assert_eq!(slice.active_events.len(), 1);
        assert_eq!(slice.active_events[0].origin_id, 9);
        assert_eq!(slice.active_events[0].color, "navy");
        assert!(slice.active_events[0].wrapped);
    }
}

#[test]
fn proportional_allocation() {
    init();
    let activities = [
        Activity::new(1, "five", 0, 120).with_priority(5),
        Activity::new(2, "three", 0, 120).with_priority(3),
    ];
    let params = LayoutParams {
        bounds: RadialBounds::new(50.0, 210.0).unwrap(),
        ..Default::default()
    };
    let layout = layout_schedule(&activities, &params).unwrap();
    let bands = &layout.slices[0].bands;

    assert!(close(bands[0].thickness(), 100.0));
    assert!(close(bands[1].thickness(), 60.0));
    assert!(bands[0].inner_radius < bands[1].inner_radius);
}

#[test]
fn single_full_day_activity() {
    init();
    let layout = layout_schedule(&[Activity::new(1, "all day", 0, 1440)], &LayoutParams::default()).unwrap();
    assert_eq!(layout.slices.len(), 1);
    assert_eq!((layout.slices[0].start, layout.slices[0].end), (0, 1440));

    let band = &layout.slices[0].bands[0];
    let bounds = RadialBounds::default();
    assert!(close(band.inner_radius, bounds.inner()));
    assert!(close(band.outer_radius, bounds.outer()));
}

#[test]
fn three_way_split_example() {
    init();
    let slices = partition_activities(&three_way_split()).unwrap();

    // B's wrapped tail before midnight is the fourth slice
    let spans: Vec<_> = slices.iter().map(|s| (s.start, s.end)).collect();
    assert_eq!(spans, vec![(0, 60), (600, 900), (900, 1200), (1200, 1440)]);

    let ids = |i: usize| slices[i].active_events.iter().map(|e| e.origin_id).collect::<Vec<_>>();
    assert_eq!(ids(1), vec![1]);
    assert_eq!(ids(2), vec![1, 2]);
    assert_eq!(ids(3), vec![2]);

    let bounds = RadialBounds::default();
    let alloc = allocate_bands(&slices[2], &bounds, OverlapPolicy::Stacked);
    let ratio = alloc.bands[0].thickness() / alloc.bands[1].thickness();
    assert!(close(ratio, 5.0 / 3.0));
}

#[test]
fn no_activities() {
    init();
    assert!(partition_activities(&[]).unwrap().is_empty());
    let layout = layout_schedule(&[], &LayoutParams::default()).unwrap();
    assert!(layout.is_empty());
    assert!(layout.warnings.is_empty());
}

#[test]
fn angle_mapping() {
    assert!(close(minutes_to_degrees(0), -90.0));
    assert!(close(minutes_to_degrees(360), 0.0));
    assert!(close(minutes_to_degrees(720), 90.0));
    assert!(close((minutes_to_degrees(1440) - minutes_to_degrees(0)).rem_euclid(360.0), 0.0));
}

#[test]
fn equal_priorities_keep_input_order() {
    init();
    let activities: Vec<Activity> = (1..=4).map(|i| Activity::new(i, format!("a{i}"), 100, 200)).collect();
    let slices = partition_activities(&activities).unwrap();
    let ids: Vec<_> = slices[0].active_events.iter().map(|e| e.origin_id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[test]
fn non_positive_priority_counts_as_one() {
    init();
    let activities = [
        Activity::new(1, "zero", 0, 60).with_priority(0),
        Activity::new(2, "negative", 0, 60).with_priority(-4),
    ];
    let layout = layout_schedule(&activities, &LayoutParams::default()).unwrap();
    let bands = &layout.slices[0].bands;
    assert_eq!(bands.len(), 2);
    assert!(close(bands[0].thickness(), bands[1].thickness()));
}

#[test]
fn touching_activities_do_not_overlap() {
    init();
    let activities = [Activity::new(1, "a", 0, 60), Activity::new(2, "b", 60, 120)];
    let slices = partition_activities(&activities).unwrap();
    assert_eq!(slices.len(), 2);
    assert!(slices.iter().all(|s| s.active_events.len() == 1));
}

#[test]
fn gaps_are_not_filled() {
    init();
    let activities = [Activity::new(1, "a", 60, 120), Activity::new(2, "b", 600, 660)];
    let slices = partition_activities(&activities).unwrap();
    assert_eq!(slices.len(), 2);
    assert!(slice_at(&slices, 300).is_none());
    assert_eq!(slice_at(&slices, 90).map(|s| s.start), Some(60));
}

#[test]
fn vectorized_full_day_is_drawable() {
    init();
    let out = vectorize_schedule(&[Activity::new(1, "all day", 0, 1440)], &CommonVizParams::default()).unwrap();
    let element = out.display_list.iter().next().unwrap();
    let VizShape::Sector(sector) = &element.shape
    else {
        panic!("expected a sector");
    };
    assert!(close(sector.span(), FULL_CIRCLE_CLAMP));
    assert!(sector.large_arc());
}

#[test]
fn overflow_warnings_are_collected() {
    init();
    let n = 3000;
    let activities: Vec<Activity> = (1..=n).map(|i| Activity::new(i, format!("a{i}"), 0, 60)).collect();
    let layout = layout_schedule(&activities, &LayoutParams::default()).unwrap();

    assert_eq!(layout.slices.len(), 1);
    assert_eq!(layout.band_count(), n as usize - 1);
    assert_eq!(layout.warnings.len(), 1);
    assert_eq!(layout.warnings[0].origin_id, n);

    let bounds = RadialBounds::default();
    let last = &layout.slices[0].bands[layout.slices[0].bands.len() - 1];
    assert!(last.outer_radius <= bounds.outer() + LAYOUT_EPSILON);
}
