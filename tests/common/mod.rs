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

    tests/common/mod.rs

    Common support routines for tests
*/
#![allow(dead_code)]

use daywheel::prelude::*;
use proptest::prelude::*;

pub const EPSILON: f32 = 1e-3;

pub fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

/// Return a map of which minutes of the day are covered by at least one activity, computed
/// directly from the activity definitions rather than through normalization.
pub fn covered_minutes(activities: &[Activity]) -> Vec<bool> {
    let mut covered = vec![false; MINUTES_PER_DAY as usize];
    for a in activities {
        for m in 0..MINUTES_PER_DAY {
            let inside = if a.start < a.end {
                m >= a.start && m < a.end
            }
            else {
                m >= a.start || m < a.end
            };
            if inside {
                covered[m as usize] = true;
            }
        }
    }
    covered
}

/// Return a map of which minutes of the day fall within a time slice.
pub fn sliced_minutes(slices: &[TimeSlice]) -> Vec<bool> {
    let mut sliced = vec![false; MINUTES_PER_DAY as usize];
    for s in slices {
        for m in s.start..s.end {
            sliced[m as usize] = true;
        }
    }
    sliced
}

/// The activities of the three way split example: A from 10:00 to 20:00 and B from 15:00 to
/// 01:00 the next day.
pub fn three_way_split() -> Vec<Activity> {
    vec![
        Activity::new(1, "A", 600, 1200).with_priority(5),
        Activity::new(2, "B", 900, 1500 - MINUTES_PER_DAY).with_priority(3),
    ]
}

prop_compose! {
    pub fn arb_activity(id: u32)(
        start in 0..MINUTES_PER_DAY,
        end in 0..=MINUTES_PER_DAY,
        priority in -2..12i32,
    ) -> Activity {
        Activity::new(id, format!("activity {id}"), start, end).with_priority(priority)
    }
}

pub fn arb_activities(max: usize) -> impl Strategy<Value = Vec<Activity>> {
    prop::collection::vec(arb_activity(0), 0..max).prop_map(|mut v| {
        for (i, a) in v.iter_mut().enumerate() {
            a.id = i as u32 + 1;
        }
        v
    })
}
