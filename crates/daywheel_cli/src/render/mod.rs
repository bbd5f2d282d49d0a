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

use crate::{args::GlobalOptions, config::load_style_config, input::load_activities};
use anyhow::{anyhow, Error};
use daywheel::prelude::*;
use daywheel_svg::prelude::*;

pub(crate) fn run(global: &GlobalOptions, params: &args::RenderParams) -> Result<(), Error> {
    let activities = load_activities(&params.in_file)?;
    global.loud(|| println!("Loaded {} activities from {}", activities.len(), params.in_file.display()));

    let config = match &params.style {
        Some(path) => {
            let config = load_style_config(path)?;
            log::debug!("Loaded style configuration from {}", path.display());
            config
        }
        None => Default::default(),
    };

    let size = params.size.map(|s| s as f32).unwrap_or(DEFAULT_VIEW_BOX);

    // Command line switches take precedence over the style file.
    let geometry = if params.arc { RenderGeometry::Arc } else { config.geometry };
    let policy = if params.winner {
        OverlapPolicy::HighestPriority
    }
    else {
        config.policy
    };

    let renderer = SvgRenderer::new()
        .with_view_box(VizRect::from_tuple((0.0, 0.0), (size, size)))
        .with_radius_ratios(config.hub_radius_ratio, config.schedule_radius_ratio)
        .with_geometry(geometry)
        .with_policy(policy)
        .with_dial(!params.no_dial)
        .with_dial_params(config.dial_params)
        .with_dial_style(config.dial_style)
        .with_band_style(config.band_style)
        .with_labels(!params.no_labels)
        .with_highlight(params.highlight);

    let document = renderer
        .render(&activities)
        .and_then(|renderer| renderer.create_document())
        .map_err(|e| anyhow!("Error rendering schedule: {}", e))?;

    if document.warning_count > 0 {
        global.loud(|| {
            println!(
                "Warning: {} band(s) did not fit the schedule ring and were skipped",
                document.warning_count
            )
        });
    }

    document.save(&params.out_file).map_err(|e| anyhow!(e))?;
    global.loud(|| {
        println!(
            "Rendered {} bands ({} geometry, {} policy) to {}",
            document.band_count,
            geometry,
            policy,
            params.out_file.display()
        )
    });
    Ok(())
}
