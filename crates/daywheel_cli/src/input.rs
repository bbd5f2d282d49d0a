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
use std::{fs, path::Path};

use anyhow::{Context, Error};
use daywheel::prelude::*;

/// Read a list of activities from a JSON file. The file must contain an array of activity
/// objects with camelCase keys, as written by the web front end.
pub(crate) fn load_activities(path: impl AsRef<Path>) -> Result<Vec<Activity>, Error> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).with_context(|| format!("Error reading {}", path.display()))?;
    let activities: Vec<Activity> =
        serde_json::from_str(&json).with_context(|| format!("Error parsing activities in {}", path.display()))?;

    for activity in &activities {
        log::trace!("load_activities(): {}", activity);
    }
    Ok(activities)
}
