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
pub mod args;

use crate::{args::GlobalOptions, input::load_activities};
use anyhow::Error;
use daywheel::prelude::*;
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SliceReport<'a> {
    start: Minutes,
    end: Minutes,
    active: Vec<ActiveReport<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ActiveReport<'a> {
    origin_id: ActivityId,
    name: &'a str,
    priority: i32,
    wrapped: bool,
}

pub(crate) fn run(global: &GlobalOptions, params: &args::SlicesParams) -> Result<(), Error> {
    let activities = load_activities(&params.in_file)?;
    let slices = partition_activities(&activities)?;

    if params.json {
        let report: Vec<SliceReport> = slices
            .iter()
            .map(|slice| SliceReport {
                start: slice.start,
                end: slice.end,
                active: slice
                    .active_events
                    .iter()
                    .map(|e| ActiveReport {
                        origin_id: e.origin_id,
                        name: &e.label,
                        priority: e.priority,
                        wrapped: e.wrapped,
                    })
                    .collect(),
            })
            .collect();
        // Required output, printed even when --silent is given.
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    global.loud(|| println!("{} activities, {} time slices", activities.len(), slices.len()));
    for slice in &slices {
        let active: Vec<String> = slice
            .active_events
            .iter()
            .map(|e| format!("{} (#{}, p{})", e.label, e.origin_id, e.priority))
            .collect();
        println!(
            "{}-{}  {}",
            format_minutes(slice.start),
            format_minutes(slice.end),
            active.join(", ")
        );
    }
    Ok(())
}
