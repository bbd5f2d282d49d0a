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

//! # daywheel_svg
//!
//! An SVG rendering backend for `daywheel` display lists.
//!
//! ```no_run
//! use daywheel::prelude::*;
//! use daywheel_svg::prelude::*;
//!
//! let activities = vec![
//!     Activity::new(1, "Sleep", 1380, 420).with_colors("#3f51b5", "#283593"),
//!     Activity::new(2, "Work", 540, 1020).with_colors("#ff9800", "#e65100").with_priority(3),
//! ];
//!
//! let document = SvgRenderer::new()
//!     .with_labels(true)
//!     .render(&activities)
//!     .and_then(|renderer| renderer.create_document())
//!     .expect("render failed");
//!
//! document.save("schedule.svg").expect("save failed");
//! ```

mod document;
pub mod prelude;
mod render_dial;
mod render_display_list;
mod render_elements;
pub mod renderer;
pub mod styles;

/// The default width and height of the square view box, matching the reference dial.
pub const DEFAULT_VIEW_BOX: f32 = 500.0;
