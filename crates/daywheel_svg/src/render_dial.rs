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

use crate::{
    render_elements::{svg_render_viz_text, viz_color_to_value},
    styles::{DialStyle, ElementStyle},
};

use daywheel::visualization::prelude::{VizCircle, VizDial};
use svg::node::element::{Circle, Group, Line};

fn svg_render_circle(circle: &VizCircle, style: &ElementStyle) -> Circle {
    Circle::new()
        .set("cx", circle.center.x)
        .set("cy", circle.center.y)
        .set("r", circle.radius)
        .set("fill", viz_color_to_value(style.fill))
        .set("stroke", viz_color_to_value(style.stroke))
        .set("stroke-width", style.stroke_width)
}

/// Render the dial background. This is drawn before the schedule bands.
pub fn render_dial_background(dial: &VizDial, style: &DialStyle) -> Circle {
    svg_render_circle(&dial.background, &style.background).set("class", "background-circle")
}

/// Render the hour markers, hour labels and hub. These are drawn over the schedule bands.
pub fn render_dial_foreground(dial: &VizDial, style: &DialStyle) -> Group {
    let mut markers = Group::new().set("class", "hour-markers");
    for tick in &dial.ticks {
        markers = markers.add(
            Line::new()
                .set("x1", tick.start.x)
                .set("y1", tick.start.y)
                .set("x2", tick.end.x)
                .set("y2", tick.end.y)
                .set("stroke", viz_color_to_value(style.ticks.stroke))
                .set("stroke-width", style.ticks.stroke_width),
        );
    }
    for label in &dial.hour_labels {
        markers = markers.add(svg_render_viz_text(label, &style.hour_labels));
    }

    let mut group = Group::new()
        .add(markers)
        .add(svg_render_circle(&dial.hub, &style.hub).set("class", "hub"));

    if let Some(label) = &dial.hub_label {
        group = group.add(svg_render_viz_text(label, &style.hub_label));
    }
    group
}
