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

use crate::{render_elements::*, styles::BandStyle};

use daywheel::visualization::prelude::VizScheduleDisplayList;
use svg::node::element::Group;

/// Render every band of a display list into a group. Labels are collected into a second group
/// so that they are drawn above all bands.
pub fn render_display_list_as_svg(
    display_list: &VizScheduleDisplayList,
    style: &BandStyle,
    labels: bool,
) -> (Group, Option<Group>) {
    let mut bands = Group::new().set("class", "schedule-items");
    let mut label_group = labels.then(|| Group::new().set("class", "item-labels").set("pointer-events", "none"));

    for element in display_list.iter() {
        for node in svg_render_element(element, style) {
            bands = match node {
                RenderNode::Path(path) => bands.add(path),
                RenderNode::Circle(circle) => bands.add(circle),
                RenderNode::Line(line) => bands.add(line),
                RenderNode::Text(text) => bands.add(text),
            };
        }

        if let Some(group) = label_group.take() {
            label_group = Some(match svg_render_label(element, style) {
                Some(text) => group.add(text),
                None => group,
            });
        }
    }

    (bands, label_group)
}
