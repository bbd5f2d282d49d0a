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

use crate::styles::{BandStyle, ElementStyle, TextStyle};
use daywheel::visualization::prelude::{
    VizColor,
    VizElement,
    VizElementFlags,
    VizPathOp,
    VizPoint2d,
    VizShape,
    VizText,
};

use svg::node::{
    element::{path::Data, Circle, Line, Path, Text, TextPath},
    Value,
};

#[derive(Clone, Debug)]
pub enum RenderNode {
    Path(Path),
    Circle(Circle),
    Line(Line),
    Text(Text),
}

pub(crate) fn viz_color_to_value(color: VizColor) -> Value {
    if color.a == 0 {
        // Fully transparent, return 'none' to prevent rendering
        Value::from("none")
    }
    else if color.a < 255 {
        // Convert to rgba() string if alpha is present
        Value::from(format!(
            "rgba({}, {}, {}, {:.3})",
            color.r,
            color.g,
            color.b,
            color.opacity()
        ))
    }
    else {
        // Convert to hex string if fully opaque
        Value::from(format!("#{:02X}{:02X}{:02X}", color.r, color.g, color.b))
    }
}

/// Activity colors are passed through as-is. An empty color falls back to `fallback`.
pub(crate) fn paint_value(color: &str, fallback: VizColor) -> Value {
    if color.trim().is_empty() {
        viz_color_to_value(fallback)
    }
    else {
        Value::from(color)
    }
}

/// The id of the centerline path of a band, referenced by `<textPath>` labels.
pub(crate) fn band_path_id(element: &VizElement) -> String {
    format!(
        "band-{}-{}",
        element.info.slice_idx.unwrap_or_default(),
        element.info.band_idx.unwrap_or_default()
    )
}

pub(crate) fn svg_render_path_ops(mut data: Data, ops: &[VizPathOp]) -> Data {
    for op in ops {
        data = match op {
            VizPathOp::MoveTo(p) => data.move_to((p.x, p.y)),
            VizPathOp::LineTo(p) => data.line_to((p.x, p.y)),
            VizPathOp::ArcTo(arc) => data.elliptical_arc_to(vec![
                arc.radius,
                arc.radius,
                0.0,
                if arc.large_arc { 1.0 } else { 0.0 },
                if arc.sweep { 1.0 } else { 0.0 },
                arc.end.x,
                arc.end.y,
            ]),
            VizPathOp::Close => data.close(),
        };
    }
    data
}

pub(crate) fn svg_render_text(anchor: VizPoint2d<f32>, content: &str, style: &TextStyle) -> Text {
    Text::new(content)
        .set("x", anchor.x)
        .set("y", anchor.y)
        .set("text-anchor", "middle")
        .set("dominant-baseline", "middle")
        .set("font-size", style.font_size)
        .set("font-family", style.font_family.clone())
        .set("font-weight", if style.bold { "bold" } else { "normal" })
        .set("fill", viz_color_to_value(style.fill))
}

pub(crate) fn svg_render_viz_text(text: &VizText, style: &TextStyle) -> Text {
    svg_render_text(text.anchor, &text.text, style)
}

fn outline(data: Data, style: &ElementStyle, width: f32) -> Path {
    Path::new()
        .set("d", data)
        .set("fill", "none")
        .set("stroke", viz_color_to_value(style.stroke))
        .set("stroke-width", width)
}

/// Render a band element. More than one node may be produced if the element is highlighted.
/// Nodes are returned in drawing order.
pub fn svg_render_element(element: &VizElement, style: &BandStyle) -> Vec<RenderNode> {
    let highlight = element.flags.contains(VizElementFlags::HIGHLIGHT);
    let mut nodes = Vec::with_capacity(2);

    match &element.shape {
        VizShape::Sector(sector) => {
            let data = svg_render_path_ops(Data::new(), &sector.path());
            nodes.push(RenderNode::Path(
                Path::new()
                    .set("d", data.clone())
                    .set("fill", paint_value(&element.info.color, style.default_fill))
                    .set("stroke", paint_value(&element.info.border_color, style.default_stroke))
                    .set("stroke-width", style.stroke_width),
            ));
            if highlight {
                nodes.push(RenderNode::Path(outline(
                    data,
                    &style.highlight,
                    style.highlight.stroke_width,
                )));
            }
        }
        VizShape::StrokeArc(arc) => {
            let data = svg_render_path_ops(Data::new(), &arc.path());
            if highlight {
                // A wider stroke beneath the band shows as a border on both edges.
                nodes.push(RenderNode::Path(outline(
                    data.clone(),
                    &style.highlight,
                    arc.thickness + style.highlight.stroke_width * 2.0,
                )));
            }
            nodes.push(RenderNode::Path(
                Path::new()
                    .set("id", band_path_id(element))
                    .set("d", data)
                    .set("fill", "none")
                    .set("stroke", paint_value(&element.info.color, style.default_fill))
                    .set("stroke-width", arc.thickness),
            ));
        }
        VizShape::Circle(circle, width) => {
            nodes.push(RenderNode::Circle(
                Circle::new()
                    .set("cx", circle.center.x)
                    .set("cy", circle.center.y)
                    .set("r", circle.radius)
                    .set("fill", paint_value(&element.info.color, style.default_fill))
                    .set("stroke", paint_value(&element.info.border_color, style.default_stroke))
                    .set("stroke-width", *width),
            ));
        }
        VizShape::Line(line, width) => {
            nodes.push(RenderNode::Line(
                Line::new()
                    .set("x1", line.start.x)
                    .set("y1", line.start.y)
                    .set("x2", line.end.x)
                    .set("y2", line.end.y)
                    .set("stroke", paint_value(&element.info.border_color, style.default_stroke))
                    .set("stroke-width", *width),
            ));
        }
        VizShape::Text(text) => {
            nodes.push(RenderNode::Text(svg_render_viz_text(text, &style.label)));
        }
    }

    nodes
}

/// Render the label of a band element, if it has one. Sector labels are centered on the band's
/// label anchor. Arc labels follow the band's centerline, which must have been emitted with
/// [svg_render_element] so that the `<textPath>` reference resolves.
pub fn svg_render_label(element: &VizElement, style: &BandStyle) -> Option<Text> {
    if element.info.label.is_empty() {
        return None;
    }

    match &element.shape {
        VizShape::StrokeArc(_) => {
            let text_path = TextPath::new("")
                .set("href", format!("#{}", band_path_id(element)))
                .set("startOffset", "50%")
                .add(svg::node::Text::new(element.info.label.clone()));

            Some(
                Text::new("")
                    .set("text-anchor", "middle")
                    .set("dominant-baseline", "middle")
                    .set("font-size", style.label.font_size)
                    .set("font-family", style.label.font_family.clone())
                    .set("font-weight", if style.label.bold { "bold" } else { "normal" })
                    .set("fill", viz_color_to_value(style.label.fill))
                    .add(text_path),
            )
        }
        VizShape::Text(_) => None,
        shape => shape
            .label_anchor()
            .map(|anchor| svg_render_text(anchor, &element.info.label, &style.label)),
    }
}
