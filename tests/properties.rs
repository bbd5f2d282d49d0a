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

//! Property tests of the tiling, ordering and allocation invariants.

mod common;

use common::*;
use daywheel::prelude::*;
use proptest::prelude::*;

proptest! {
    #[test]
    fn slices_tile_covered_minutes(activities in arb_activities(12)) {
        let slices = partition_activities(&activities).unwrap();

        prop_assert_eq!(sliced_minutes(&slices), covered_minutes(&activities));

        for slice in &slices {
            prop_assert!(slice.start < slice.end);
            prop_assert!(!slice.active_events.is_empty());
        }
        for pair in slices.windows(2) {
            prop_assert!(pair[0].end <= pair[1].start);
        }
    }

    #[test]
    fn active_events_are_sorted_stably(activities in arb_activities(12)) {
        let slices = partition_activities(&activities).unwrap();
        for slice in &slices {
            for pair in slice.active_events.windows(2) {
                prop_assert!(pair[0].priority >= pair[1].priority);
                if pair[0].priority == pair[1].priority {
                    prop_assert!(pair[0].origin_id < pair[1].origin_id);
                }
            }
        }
    }

    #[test]
    fn layout_is_deterministic(activities in arb_activities(12)) {
        let first = layout_schedule(&activities, &LayoutParams::default()).unwrap();
        let second = layout_schedule(&activities, &LayoutParams::default()).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn bands_fill_the_radial_span(activities in arb_activities(12)) {
        let bounds = RadialBounds::default();
        let layout = layout_schedule(&activities, &LayoutParams { bounds, ..Default::default() }).unwrap();

        prop_assert!(layout.warnings.is_empty());
        for slice in &layout.slices {
            let first = &slice.bands[0];
            let last = &slice.bands[slice.bands.len() - 1];
            prop_assert!(close(first.inner_radius, bounds.inner()));
            prop_assert!(close(last.outer_radius, bounds.outer()));
            for pair in slice.bands.windows(2) {
                prop_assert!(close(pair[0].outer_radius, pair[1].inner_radius));
            }
        }
    }

    #[test]
    fn every_band_is_hit_at_its_anchor(activities in arb_activities(6)) {
        let p = CommonVizParams::default();
        let layout = layout_schedule(&activities, &p.layout_params().unwrap()).unwrap();
        let display_list = vectorize_layout(&layout, &p);

        for element in display_list.iter() {
            let VizShape::Sector(sector) = &element.shape else { continue };
            // Skip slivers too thin to resolve reliably in f32.
            if sector.span() < 1.0 || sector.outer_radius - sector.inner_radius < 1.0 {
                continue;
            }
            let hit = hit_test(&layout, &p, sector.label_anchor()).unwrap();
            prop_assert_eq!(Some(hit.origin_id), element.info.origin_id);
            prop_assert_eq!(Some(hit.slice_idx), element.info.slice_idx);
        }
    }
}
