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

use daywheel::prelude::*;
use daywheel_svg::prelude::*;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn activities() -> Vec<Activity> {
    vec![
        Activity::new(1, "Work", 600, 1200)
            .with_colors("tomato", "darkred")
            .with_priority(5),
        Activity::new(2, "Sleep", 900, 60)
            .with_colors("#3f51b5", "#283593")
            .with_priority(3),
    ]
}

fn render(renderer: SvgRenderer) -> String {
    renderer
        .render(&activities())
        .and_then(|r| r.create_document())
        .unwrap()
        .to_string()
}

#[test]
fn renders_one_path_per_band() {
    init();
    let doc = SvgRenderer::new()
        .with_dial(false)
        .with_labels(false)
        .render(&activities())
        .and_then(|r| r.create_document())
        .unwrap();

    assert_eq!(doc.band_count, 5);
    assert_eq!(doc.warning_count, 0);

    let svg = doc.to_string();
    assert_eq!(svg.matches("<path").count(), 5);
    assert!(svg.contains("fill=\"tomato\""));
    assert!(svg.contains("stroke=\"darkred\""));
    assert!(svg.contains("fill=\"#3f51b5\""));
    assert!(!svg.contains("<circle"));
    assert!(!svg.contains("<text"));
}

#[test]
fn dial_and_labels() {
    init();
    let svg = render(SvgRenderer::new());

    // Background and hub
    assert_eq!(svg.matches("<circle").count(), 2);
    // 24 hour ticks
    assert_eq!(svg.matches("<line").count(), 24);
    assert!(svg.contains("24h"));
    assert!(svg.contains("Work"));
    assert!(svg.contains("Sleep"));
    assert!(svg.contains("viewBox=\"0 0 500 500\""));
}

#[test]
fn arc_geometry_uses_text_paths() {
    init();
    let svg = render(SvgRenderer::new().with_geometry(RenderGeometry::Arc).with_dial(false));

    assert!(svg.contains("<textPath"));
    assert!(svg.contains("href=\"#band-2-0\""));
    assert!(svg.contains("id=\"band-2-0\""));
    assert!(svg.contains("fill=\"none\""));
}

#[test]
fn highest_priority_policy_draws_fewer_bands() {
    init();
    let doc = SvgRenderer::new()
        .with_policy(OverlapPolicy::HighestPriority)
        .render(&activities())
        .and_then(|r| r.create_document())
        .unwrap();
    assert_eq!(doc.band_count, 4);
}

#[test]
fn margins_expand_view_box() {
    init();
    let svg = render(SvgRenderer::new().with_margins(10.0, 20.0, 30.0, 40.0).with_dial(false));
    assert!(svg.contains("viewBox=\"-40 -10 560 540\""));
}

#[test]
fn invalid_input_is_an_error() {
    init();
    let result = SvgRenderer::new().render(&[Activity::new(1, "bad", -5, 10)]);
    assert!(result.is_err());

    let result = SvgRenderer::new()
        .with_view_box(VizRect::from_tuple((0.0, 0.0), (0.0, 0.0)))
        .render(&activities());
    assert!(result.is_err());

    let result = SvgRenderer::new()
        .with_radius_ratios(0.8, 0.2)
        .render(&activities());
    assert!(result.is_err());
}

#[test]
fn document_requires_render() {
    assert!(SvgRenderer::new().create_document().is_err());
}

#[test]
fn highlighted_activity_is_outlined() {
    init();
    let plain = render(SvgRenderer::new().with_dial(false).with_labels(false));
    let highlighted = render(
        SvgRenderer::new()
            .with_dial(false)
            .with_labels(false)
            .with_highlight(Some(2)),
    );
    // Activity 2 has three bands, each gains an outline
    assert_eq!(
        highlighted.matches("<path").count(),
        plain.matches("<path").count() + 3
    );
}
