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
use svg::{
    node::element::{Circle, Group},
    Document,
};
use web_time::Instant;

use crate::{
    document::RenderedDocument,
    render_dial::{render_dial_background, render_dial_foreground},
    render_display_list::render_display_list_as_svg,
    styles::{BandStyle, DialStyle},
    DEFAULT_VIEW_BOX,
};

#[derive(Clone, Default)]
pub struct SvgRenderer {
    // The view box for the dial. This should be square.
    view_box: VizRect<f32>,
    // Margins as top, right, bottom, left.
    margins: (f32, f32, f32, f32),
    // Whether to render the dial background, hour markers and hub.
    render_dial: bool,
    // Whether to render activity names on their bands.
    render_labels: bool,
    // An activity to highlight, if any.
    highlight: Option<ActivityId>,
    dial_params: DialParams,
    dial_style: DialStyle,
    band_style: BandStyle,
    // Internal state
    common_params: CommonVizParams,

    background: Option<Circle>,
    band_group: Option<Group>,
    label_group: Option<Group>,
    dial_group: Option<Group>,
    band_count: usize,
    warning_count: usize,

    build_error:   bool,
    error_message: Option<String>,
}

impl SvgRenderer {
    pub fn new() -> Self {
        Self {
            view_box: VizRect::from_tuple((0.0, 0.0), (DEFAULT_VIEW_BOX, DEFAULT_VIEW_BOX)),
            common_params: CommonVizParams {
                radius: DEFAULT_VIEW_BOX / 2.0,
                ..Default::default()
            },
            render_dial: true,
            render_labels: true,
            ..Default::default()
        }
    }

    /// Set the view box for the dial. This effectively controls the default "resolution" of the
    /// rendered image. The view box should be square; if it is not, the dial is sized to fit the
    /// shorter side.
    pub fn with_view_box(mut self, view_box: VizRect<f32>) -> Self {
        let side = view_box.width().min(view_box.height());
        if !(side.is_finite() && side > 0.0) {
            self.build_error = true;
            self.error_message = Some("View box must have a positive width and height.".to_string());
            return self;
        }
        self.common_params.radius = side / 2.0;
        let center = view_box.center();
        self.common_params.pos_offset = Some(VizPoint2d::new(center.x - side / 2.0, center.y - side / 2.0));
        self.view_box = view_box;
        self
    }

    /// Specify the hub and schedule radius ratios, as a fraction of half the view box width.
    /// Bands are drawn between the two radii.
    pub fn with_radius_ratios(mut self, hub: f32, schedule: f32) -> Self {
        self.common_params.hub_radius_ratio = hub;
        self.common_params.schedule_radius_ratio = schedule;
        self
    }

    /// Select filled sectors or stroked arcs for activity bands. The default is
    /// [RenderGeometry::Sector].
    pub fn with_geometry(mut self, geometry: RenderGeometry) -> Self {
        self.common_params.geometry = geometry;
        self
    }

    pub fn with_winding(mut self, winding: RenderWinding) -> Self {
        self.common_params.winding = winding;
        self
    }

    /// Set how overlapping activities share the schedule ring. The default is
    /// [OverlapPolicy::Stacked].
    pub fn with_policy(mut self, policy: OverlapPolicy) -> Self {
        self.common_params.policy = policy;
        self
    }

    /// Render the dial background, hour markers and hub. The default is true.
    pub fn with_dial(mut self, state: bool) -> Self {
        self.render_dial = state;
        self
    }

    pub fn with_dial_params(mut self, params: DialParams) -> Self {
        self.dial_params = params;
        self
    }

    pub fn with_dial_style(mut self, style: DialStyle) -> Self {
        self.dial_style = style;
        self
    }

    pub fn with_band_style(mut self, style: BandStyle) -> Self {
        self.band_style = style;
        self
    }

    /// Draw activity names over their bands. The default is true.
    pub fn with_labels(mut self, state: bool) -> Self {
        self.render_labels = state;
        self
    }

    /// Outline every band of the specified activity.
    pub fn with_highlight(mut self, id: Option<ActivityId>) -> Self {
        self.highlight = id;
        self
    }

    /// Expand the document view box by the specified margins.
    pub fn with_margins(mut self, top: f32, right: f32, bottom: f32, left: f32) -> Self {
        self.margins = (top, right, bottom, left);
        self
    }

    pub fn render(mut self, activities: &[Activity]) -> Result<Self, String> {
        if self.build_error {
            return Err(self.error_message.unwrap_or("Unknown error.".to_string()));
        }

        log::trace!("render(): Vectorizing {} activities...", activities.len());
        let timer = Instant::now();

        let VectorizedSchedule {
            mut display_list,
            warnings,
        } = vectorize_schedule(activities, &self.common_params).map_err(|e| format!("Failed to vectorize schedule: {}", e))?;

        if self.highlight.is_some() {
            let count = highlight_activity(&mut display_list, self.highlight);
            log::debug!("render(): Highlighted {} elements", count);
        }

        for warning in &warnings {
            log::warn!(
                "render(): band for activity {} in {}-{} did not fit and was skipped",
                warning.origin_id,
                format_minutes(warning.slice_start),
                format_minutes(warning.slice_end)
            );
        }

        let (bands, labels) = render_display_list_as_svg(&display_list, &self.band_style, self.render_labels);
        self.band_group = Some(bands);
        self.label_group = labels;
        self.band_count = display_list.len();
        self.warning_count = warnings.len();

        log::trace!(
            "render(): Rendering {} bands took {:.3}ms",
            self.band_count,
            timer.elapsed().as_secs_f64() * 1000.0
        );

        if self.render_dial {
            let dial_timer = Instant::now();
            let dial = vectorize_dial(&self.common_params, &self.dial_params)
                .map_err(|e| format!("Failed to vectorize dial: {}", e))?;
            self.background = Some(render_dial_background(&dial, &self.dial_style));
            self.dial_group = Some(render_dial_foreground(&dial, &self.dial_style));
            log::trace!(
                "render(): Rendering dial took {:.3}ms",
                dial_timer.elapsed().as_secs_f64() * 1000.0
            );
        }

        Ok(self)
    }

    /// Create an SVG document after rendering using the specified parameters.
    pub fn create_document(self) -> Result<RenderedDocument, String> {
        let Some(band_group) = self.band_group
        else {
            return Err("Nothing to document: render() has not been called.".to_string());
        };

        let (top, right, bottom, left) = self.margins;
        let global_view_box = (
            self.view_box.top_left.x - left,
            self.view_box.top_left.y - top,
            self.view_box.width() + left + right,
            self.view_box.height() + top + bottom,
        );

        // Draw order: background, bands, labels, hour markers and hub.
        let mut document = Document::new().set("viewBox", global_view_box);
        if let Some(background) = self.background {
            document = document.add(background);
        }
        document = document.add(band_group);
        if let Some(labels) = self.label_group {
            document = document.add(labels);
        }
        if let Some(dial) = self.dial_group {
            document = document.add(dial);
        }

        log::debug!(
            "create_document(): Created document with {} bands ({} skipped)",
            self.band_count,
            self.warning_count
        );
        Ok(RenderedDocument {
            document,
            band_count: self.band_count,
            warning_count: self.warning_count,
        })
    }
}
