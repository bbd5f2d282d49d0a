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

//! Defines the [Activity] type, the user editable input to the layout pipeline.

use std::fmt::{self, Display, Formatter};

/// The number of minutes in a day. Activity times are measured in minutes from midnight.
pub const MINUTES_PER_DAY: Minutes = 1440;

/// The default priority for activities that do not specify one, or specify one that is not
/// positive.
pub const DEFAULT_PRIORITY: i32 = 1;

pub type ActivityId = u32;
pub type Minutes = i32;

#[cfg(feature = "serde")]
fn default_priority() -> i32 {
    DEFAULT_PRIORITY
}

/// An [Activity] is a named interval of the day with a fill and border color and a priority.
///
/// If `start >= end` the activity wraps past midnight and occupies `[start, 1440)` and `[0, end)`.
/// An activity covering the whole day should be expressed as `start: 0, end: 1440`.
///
/// Priorities are expected to be in the range 1-10, but any value is accepted. Values less than
/// 1 are treated as 1 - see [Activity::effective_priority].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Activity {
    pub id: ActivityId,
    pub name: String,
    pub start: Minutes,
    pub end: Minutes,
    #[cfg_attr(feature = "serde", serde(default))]
    pub color: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub border_color: String,
    #[cfg_attr(feature = "serde", serde(default = "default_priority"))]
    pub priority: i32,
}

impl Activity {
    pub fn new(id: ActivityId, name: impl Into<String>, start: Minutes, end: Minutes) -> Self {
        Activity {
            id,
            name: name.into(),
            start,
            end,
            color: String::new(),
            border_color: String::new(),
            priority: DEFAULT_PRIORITY,
        }
    }

    pub fn with_colors(mut self, color: impl Into<String>, border_color: impl Into<String>) -> Self {
        self.color = color.into();
        self.border_color = border_color.into();
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Return the priority used for ordering and radial allocation. Missing, zero or negative
    /// priorities are treated as [DEFAULT_PRIORITY].
    #[inline]
    pub fn effective_priority(&self) -> i32 {
        self.priority.max(DEFAULT_PRIORITY)
    }

    /// Return true if this activity wraps past midnight.
    #[inline]
    pub fn wraps(&self) -> bool {
        self.start >= self.end
    }

    /// Return the number of minutes of the day covered by this activity.
    pub fn duration(&self) -> Minutes {
        if self.wraps() {
            MINUTES_PER_DAY - self.start + self.end
        }
        else {
            self.end - self.start
        }
    }
}

impl Display for Activity {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(
            f,
            "#{} '{}' {}-{} (priority {})",
            self.id,
            self.name,
            format_minutes(self.start),
            format_minutes(self.end),
            self.priority
        )
    }
}

/// Format a minute offset as `HH:MM`.
pub fn format_minutes(minutes: Minutes) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}
