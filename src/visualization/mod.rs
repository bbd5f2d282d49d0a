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

//! # DayWheel Visualization
//! The `visualization` module turns a [ScheduleLayout](crate::layout::ScheduleLayout) into vector shapes.
//! This module requires the `viz` feature to be enabled.
//!
//! A schedule is drawn on a dial centered in a square view box. Midnight is at the top of the
//! dial, and time advances clockwise, so that 06:00 is at the 3 o'clock position. Every
//! [RadialBand](crate::allocator::RadialBand) of the layout becomes one
//! [VizElement](types::shapes::VizElement) in a
//! [VizScheduleDisplayList](types::display_list::VizScheduleDisplayList).
//!
//! ## Geometry
//!
//! Two kinds of geometry may be generated, selected by [RenderGeometry]:
//!
//! - `Sector` produces a filled annular sector for each band: an inner arc, a radial line out
//!   to the outer radius, the outer arc traversed in the opposite direction, and a closing
//!   line. Bands do not reach the center of the dial, so these are never simple pie slices.
//! - `Arc` produces a single arc along the middle of the band, to be stroked at the band's
//!   thickness. This is useful if your rasterizer cannot fill concave paths, or if you wish
//!   to draw labels along a curved path.
//!
//! Both encode the same layout. The functions in this module never fail on a valid layout.
//!
//! ## Dial
//!
//! [vectorize_dial] produces the static dial furniture: a background disc behind the
//! schedule, hour tick marks and labels outside the schedule ring, and the central hub.
//!
//! ## Helper crates
//!
//! - The `daywheel_svg` crate provides a backend capable of rendering display lists to SVG.

pub mod dial;
pub mod prelude;
pub mod types;
pub mod vectorize_schedule;

use crate::{
    allocator::{OverlapPolicy, RadialBounds},
    layout::{LayoutParams, DEFAULT_DIAL_RADIUS, DEFAULT_HUB_RADIUS, DEFAULT_SCHEDULE_RADIUS},
    visualization::types::shapes::VizPoint2d,
    VizError,
};
use strum::{Display, EnumString};

pub use dial::{vectorize_dial, DialParams, VizDial};
pub use hit_test::{highlight_activity, hit_test, HitTestResult};
pub use vectorize_schedule::{vectorize_layout, vectorize_schedule, VectorizedSchedule};

pub(crate) const DEFAULT_HUB_RADIUS_RATIO: f32 = DEFAULT_HUB_RADIUS / DEFAULT_DIAL_RADIUS;
pub(crate) const DEFAULT_SCHEDULE_RADIUS_RATIO: f32 = DEFAULT_SCHEDULE_RADIUS / DEFAULT_DIAL_RADIUS;

/// Point winding to use when emitting closed paths.
/// With `Clockwise` winding, the inner arc of a sector is traversed clockwise (forward in time)
/// and the outer arc counter-clockwise.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Display, EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum RenderWinding {
    #[default]
    Clockwise,
    CounterClockwise,
}

/// A [RenderGeometry] enum specifies what geometry to generate for schedule bands.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Display, EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum RenderGeometry {
    #[default]
    Sector,
    Arc,
}

/// Common parameters for all vectorization functions
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CommonVizParams {
    /// Outer radius of the whole dial, including the hour label margin. This should equal the
    /// width of a square view box divided by two. The default of 250.0 matches a 500x500 view
    /// box.
    pub radius: f32,
    /// Radius of the central hub as a fraction of `radius`. Bands begin at this radius.
    pub hub_radius_ratio: f32,
    /// Outer radius of the schedule ring as a fraction of `radius`. Bands end at this radius,
    /// and the space beyond holds hour markers and labels.
    pub schedule_radius_ratio: f32,
    /// Offset for points produced by the vectorization functions. If `None`, the dial is
    /// centered at `(radius, radius)`.
    pub pos_offset: Option<VizPoint2d<f32>>,
    /// The type of geometry to produce for each band.
    pub geometry: RenderGeometry,
    /// The winding to use for closed paths.
    pub winding: RenderWinding,
    /// How overlapping activities share the schedule ring.
    pub policy: OverlapPolicy,
}

impl Default for CommonVizParams {
    fn default() -> Self {
        Self {
            radius: DEFAULT_DIAL_RADIUS,
            hub_radius_ratio: DEFAULT_HUB_RADIUS_RATIO,
            schedule_radius_ratio: DEFAULT_SCHEDULE_RADIUS_RATIO,
            pos_offset: None,
            geometry: RenderGeometry::default(),
            winding: RenderWinding::default(),
            policy: OverlapPolicy::default(),
        }
    }
}

impl CommonVizParams {
    /// Return the center of the dial.
    pub fn center(&self) -> VizPoint2d<f32> {
        let offset = self.pos_offset.unwrap_or_default();
        VizPoint2d::new(self.radius + offset.x, self.radius + offset.y)
    }

    #[inline]
    pub fn hub_radius(&self) -> f32 {
        self.hub_radius_ratio * self.radius
    }

    #[inline]
    pub fn schedule_radius(&self) -> f32 {
        self.schedule_radius_ratio * self.radius
    }

    /// Validate these parameters and derive the [LayoutParams] used to allocate bands.
    pub fn layout_params(&self) -> Result<LayoutParams, VizError> {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(VizError::InvalidParameter(format!(
                "radius must be a positive number, got {}",
                self.radius
            )));
        }
        if !(0.0..1.0).contains(&self.hub_radius_ratio) {
            return Err(VizError::InvalidParameter(format!(
                "hub_radius_ratio must be in the range [0.0, 1.0), got {}",
                self.hub_radius_ratio
            )));
        }
        if self.schedule_radius_ratio <= self.hub_radius_ratio || self.schedule_radius_ratio > 1.0 {
            return Err(VizError::InvalidParameter(
                "schedule_radius_ratio must be greater than hub_radius_ratio and no greater than 1.0".to_string(),
            ));
        }

        let bounds = RadialBounds::new(self.hub_radius(), self.schedule_radius())
            .map_err(|e| VizError::InvalidParameter(e.to_string()))?;

        Ok(LayoutParams {
            bounds,
            policy: self.policy,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params_match_reference_dial() {
        let p = CommonVizParams::default();
        let lp = p.layout_params().unwrap();
        assert!((lp.bounds.inner() - 40.0).abs() < 1e-3);
        assert!((lp.bounds.outer() - 210.0).abs() < 1e-3);
        let c = p.center();
        assert_eq!((c.x, c.y), (250.0, 250.0));
    }

    #[test]
    fn offset_moves_center() {
        let p = CommonVizParams {
            radius: 100.0,
            pos_offset: Some(VizPoint2d::new(10.0, 20.0)),
            ..Default::default()
        };
        let c = p.center();
        assert_eq!((c.x, c.y), (110.0, 120.0));
    }

    #[test]
    fn bad_ratios_are_rejected() {
        let p = CommonVizParams {
            hub_radius_ratio: 0.9,
            schedule_radius_ratio: 0.5,
            ..Default::default()
        };
        assert!(matches!(p.layout_params(), Err(VizError::InvalidParameter(_))));

        let p = CommonVizParams {
            radius: 0.0,
            ..Default::default()
        };
        assert!(p.layout_params().is_err());
    }

    #[test]
    fn geometry_parses_from_string() {
        assert_eq!("arc".parse::<RenderGeometry>().unwrap(), RenderGeometry::Arc);
        assert_eq!(
            "counter_clockwise".parse::<RenderWinding>().unwrap(),
            RenderWinding::CounterClockwise
        );
    }
}
