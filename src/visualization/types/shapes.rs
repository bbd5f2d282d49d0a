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

//! Vector primitives used to represent schedule bands and dial furniture in the visualization
//! layer.
//!
//! Arcs are expressed in endpoint form, that is, as a start point, an end point, a radius and
//! a pair of flags selecting which of the four possible arcs between the points is meant. This
//! maps directly onto the SVG `A` path command and is easy to convert to center form for
//! rasterizers that need it.

use std::{
    fmt::{self, Display, Formatter},
    ops::{Add, Div, Range},
};

use crate::{
    activity::{ActivityId, Minutes},
    polar::{clamp_span, polar_to_cartesian},
    visualization::RenderWinding,
};

use bitflags::bitflags;
use num_traits::Num;

bitflags! {
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
    pub struct VizElementFlags: u32 {
        // No flags set
        const NONE = 0b0000_0000;
        // This element is one half of an activity that wraps past midnight
        const WRAPPED = 0b0000_0001;
        // This element's span was clamped to avoid a degenerate full circle
        const FULL_CIRCLE = 0b0000_0010;
        // This element is the innermost, highest priority band of its slice
        const TOP_PRIORITY = 0b0000_0100;
        // This element represents a highlighted element
        const HIGHLIGHT = 0b0000_1000;
    }
}

/// A VizShape represents a shape that can be rendered in a visualization.
/// The second parameter, if present, is the thickness of the shape. This should be used for the
/// stroke parameter during rendering.
#[derive(Clone, Debug, PartialEq)]
pub enum VizShape {
    Sector(VizSector),
    StrokeArc(VizStrokeArc),
    Circle(VizCircle, f32),
    Line(VizLine<f32>, f32),
    Text(VizText),
}

impl VizShape {
    /// Return the point at which a label for this shape should be anchored, if the shape
    /// carries one.
    pub fn label_anchor(&self) -> Option<VizPoint2d<f32>> {
        match self {
            VizShape::Sector(sector) => Some(sector.label_anchor()),
            VizShape::StrokeArc(arc) => Some(arc.label_anchor()),
            VizShape::Text(text) => Some(text.anchor),
            VizShape::Circle(_, _) | VizShape::Line(_, _) => None,
        }
    }
}

/// A [VizLine] represents a line segment in 2D space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VizLine<T: Num + Copy + Default> {
    pub start: VizPoint2d<T>,
    pub end:   VizPoint2d<T>,
}

impl<T: Num + Copy + Default> VizLine<T> {
    pub fn new(start: VizPoint2d<T>, end: VizPoint2d<T>) -> VizLine<T> {
        VizLine { start, end }
    }
}

impl From<(VizLine<f32>, f32)> for VizShape {
    #[inline]
    fn from(tuple: (VizLine<f32>, f32)) -> VizShape {
        VizShape::Line(tuple.0, tuple.1)
    }
}

/// A [VizRect] represents a rectangle in 2D space. It is generic across numeric types, using
/// `num_traits`.
///
/// The rectangle is defined by two points, the top-left and bottom-right corners.
#[derive(Copy, Clone, Default, Debug, PartialEq)]
pub struct VizRect<T: Num + Copy + PartialOrd + Default> {
    pub top_left: VizPoint2d<T>,
    pub bottom_right: VizPoint2d<T>,
}

impl<T: Num + Copy + PartialOrd + Default> VizRect<T> {
    pub fn from_tuple(top_left: (T, T), bottom_right: (T, T)) -> VizRect<T> {
        VizRect {
            top_left: VizPoint2d::from(top_left),
            bottom_right: VizPoint2d::from(bottom_right),
        }
    }

    pub fn width(&self) -> T {
        self.bottom_right.x - self.top_left.x
    }

    pub fn height(&self) -> T {
        self.bottom_right.y - self.top_left.y
    }
}

impl<T> VizRect<T>
where
    T: Num + Copy + Add<T, Output = T> + Div<T, Output = T> + From<f32> + PartialOrd + Default,
{
    pub fn center(&self) -> VizPoint2d<T> {
        VizPoint2d::new(
            self.top_left.x + self.width() / T::from(2.0),
            self.top_left.y + self.height() / T::from(2.0),
        )
    }
}

/// A [VizPoint2d] represents a point in 2D space.
/// It is generic across numeric types, using `num_traits`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VizPoint2d<T> {
    pub x: T,
    pub y: T,
}

impl<T: Num + Copy + Default + Display> Display for VizPoint2d<T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl<T: Num + Copy + Default> Default for VizPoint2d<T> {
    fn default() -> Self {
        VizPoint2d {
            x: T::default(),
            y: T::default(),
        }
    }
}

impl<T: Num + Copy + Default> From<(T, T)> for VizPoint2d<T> {
    fn from(tuple: (T, T)) -> Self {
        VizPoint2d { x: tuple.0, y: tuple.1 }
    }
}

impl<T: Num + Copy + Default> VizPoint2d<T> {
    pub fn new(x: T, y: T) -> Self {
        VizPoint2d { x, y }
    }
}

impl VizPoint2d<f32> {
    /// Return the point at `radius` and `degrees` around `center`.
    #[inline]
    pub fn from_polar(center: &VizPoint2d<f32>, radius: f32, degrees: f32) -> VizPoint2d<f32> {
        VizPoint2d::from(polar_to_cartesian(center.x, center.y, radius, degrees))
    }
}

/// A [VizArcTo] is a circular arc in endpoint form, continuing from the current point of a path.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VizArcTo {
    pub radius: f32,
    /// Select the arc spanning more than 180 degrees.
    pub large_arc: bool,
    /// Select the arc drawn in the direction of increasing angle (clockwise on a y-down surface).
    pub sweep: bool,
    pub end: VizPoint2d<f32>,
}

/// A single path command, see [VizSector::path].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum VizPathOp {
    MoveTo(VizPoint2d<f32>),
    LineTo(VizPoint2d<f32>),
    ArcTo(VizArcTo),
    Close,
}

/// A [VizCircle] represents a simple circle with center point and radius.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VizCircle {
    pub center: VizPoint2d<f32>,
    pub radius: f32,
}

impl VizCircle {
    pub fn new(center: VizPoint2d<f32>, radius: f32) -> VizCircle {
        VizCircle { center, radius }
    }
}

impl From<(VizCircle, f32)> for VizShape {
    #[inline]
    fn from(tuple: (VizCircle, f32)) -> VizShape {
        VizShape::Circle(tuple.0, tuple.1)
    }
}

/// A [VizSector] represents an arc with thickness, or an 'annular sector'. Angles are in
/// degrees on the dial, see [crate::polar].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VizSector {
    pub center: VizPoint2d<f32>,
    pub winding: RenderWinding,
    /// The angle at which the sector starts
    pub start_angle: f32,
    /// The angle at which the sector ends. The span never exceeds [crate::polar::FULL_CIRCLE_CLAMP].
    pub end_angle: f32,
    pub inner_radius: f32,
    pub outer_radius: f32,
}

impl VizSector {
    /// Calculate a [VizSector] from a center point, start and end angles in degrees, and an inner
    /// and outer radius. A span of a full circle or more is clamped.
    #[inline]
    pub fn from_angles(
        center: &VizPoint2d<f32>,
        winding: RenderWinding,
        start_angle: f32,
        end_angle: f32,
        inner_radius: f32,
        outer_radius: f32,
    ) -> VizSector {
        let (start_angle, end_angle) = clamp_span(start_angle, end_angle);
        VizSector {
            center: *center,
            winding,
            start_angle,
            end_angle,
            inner_radius,
            outer_radius,
        }
    }

    #[inline]
    pub fn span(&self) -> f32 {
        self.end_angle - self.start_angle
    }

    /// Return true if the sector spans more than half the circle. Both arcs of the sector must
    /// then be emitted with the large arc flag set.
    #[inline]
    pub fn large_arc(&self) -> bool {
        self.span() > 180.0
    }

    #[inline]
    pub fn mid_angle(&self) -> f32 {
        self.start_angle + self.span() / 2.0
    }

    #[inline]
    pub fn mid_radius(&self) -> f32 {
        (self.inner_radius + self.outer_radius) / 2.0
    }

    /// Return the point at the middle angle and middle radius of the sector.
    pub fn label_anchor(&self) -> VizPoint2d<f32> {
        VizPoint2d::from_polar(&self.center, self.mid_radius(), self.mid_angle())
    }

    /// Produce the closed outline of the sector: the inner arc, a radial line out to the outer
    /// radius, the outer arc in the opposite direction, and a line closing back to the start.
    pub fn path(&self) -> [VizPathOp; 5] {
        let large_arc = self.large_arc();
        let point = |r: f32, a: f32| VizPoint2d::from_polar(&self.center, r, a);

        let (from, to, inner_sweep) = match self.winding {
            RenderWinding::Clockwise => (self.start_angle, self.end_angle, true),
            RenderWinding::CounterClockwise => (self.end_angle, self.start_angle, false),
        };

        [
            VizPathOp::MoveTo(point(self.inner_radius, from)),
            VizPathOp::ArcTo(VizArcTo {
                radius: self.inner_radius,
                large_arc,
                sweep: inner_sweep,
                end: point(self.inner_radius, to),
            }),
            VizPathOp::LineTo(point(self.outer_radius, to)),
            VizPathOp::ArcTo(VizArcTo {
                radius: self.outer_radius,
                large_arc,
                sweep: !inner_sweep,
                end: point(self.outer_radius, from),
            }),
            VizPathOp::Close,
        ]
    }
}

impl From<VizSector> for VizShape {
    #[inline]
    fn from(sector: VizSector) -> VizShape {
        VizShape::Sector(sector)
    }
}

/// A [VizStrokeArc] is an alternate encoding of a band as a single arc along its middle radius,
/// intended to be stroked with a width of `thickness`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VizStrokeArc {
    pub center: VizPoint2d<f32>,
    pub winding: RenderWinding,
    pub start_angle: f32,
    pub end_angle: f32,
    pub radius: f32,
    pub thickness: f32,
}

impl VizStrokeArc {
    pub fn from_angles(
        center: &VizPoint2d<f32>,
        winding: RenderWinding,
        start_angle: f32,
        end_angle: f32,
        radius: f32,
        thickness: f32,
    ) -> VizStrokeArc {
        let (start_angle, end_angle) = clamp_span(start_angle, end_angle);
        VizStrokeArc {
            center: *center,
            winding,
            start_angle,
            end_angle,
            radius,
            thickness,
        }
    }

    #[inline]
    pub fn span(&self) -> f32 {
        self.end_angle - self.start_angle
    }

    #[inline]
    pub fn large_arc(&self) -> bool {
        self.span() > 180.0
    }

    pub fn label_anchor(&self) -> VizPoint2d<f32> {
        VizPoint2d::from_polar(&self.center, self.radius, self.start_angle + self.span() / 2.0)
    }

    /// Produce the centerline of the arc as a move followed by a single arc command.
    pub fn path(&self) -> [VizPathOp; 2] {
        let point = |a: f32| VizPoint2d::from_polar(&self.center, self.radius, a);
        let (from, to, sweep) = match self.winding {
            RenderWinding::Clockwise => (self.start_angle, self.end_angle, true),
            RenderWinding::CounterClockwise => (self.end_angle, self.start_angle, false),
        };
        [
            VizPathOp::MoveTo(point(from)),
            VizPathOp::ArcTo(VizArcTo {
                radius: self.radius,
                large_arc: self.large_arc(),
                sweep,
                end: point(to),
            }),
        ]
    }
}

impl From<VizStrokeArc> for VizShape {
    #[inline]
    fn from(arc: VizStrokeArc) -> VizShape {
        VizShape::StrokeArc(arc)
    }
}

/// A [VizText] is a label anchored at a point. Renderers should center the text on the anchor.
#[derive(Clone, Debug, PartialEq)]
pub struct VizText {
    pub anchor: VizPoint2d<f32>,
    pub text:   String,
}

impl VizText {
    pub fn new(anchor: VizPoint2d<f32>, text: impl Into<String>) -> VizText {
        VizText {
            anchor,
            text: text.into(),
        }
    }
}

impl From<VizText> for VizShape {
    #[inline]
    fn from(text: VizText) -> VizShape {
        VizShape::Text(text)
    }
}

/// A [VizElementInfo] represents all the information needed to render a schedule band in a
/// visualization as well as resolve the element back to its activity, useful for interactive
/// visualizations (e.g., selecting activities with the mouse).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VizElementInfo {
    /// The id of the activity this element was produced from.
    pub origin_id: Option<ActivityId>,
    /// The time range of the slice containing the element, in minutes.
    pub time_range: Option<Range<Minutes>>,
    /// The index of the slice containing the element.
    pub slice_idx: Option<usize>,
    /// The index of the band within its slice, starting at 0 at the inner boundary.
    pub band_idx: Option<usize>,
    pub label: String,
    pub color: String,
    pub border_color: String,
}

/// A [VizElement] represents a [VizShape] with additional metadata, such as color and
/// schedule location.
#[derive(Clone, Debug, PartialEq)]
pub struct VizElement {
    pub shape: VizShape,        // The shape of the element
    pub flags: VizElementFlags, // Flags to control rendering of the element
    pub info:  VizElementInfo,  // Metadata fields for the element
}

impl VizElement {
    pub fn new(shape: impl Into<VizShape>, flags: VizElementFlags, info: VizElementInfo) -> VizElement {
        VizElement {
            shape: shape.into(),
            flags,
            info,
        }
    }
}
