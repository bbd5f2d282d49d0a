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

//! Angle mapping between minutes of the day and degrees on the dial.
//!
//! Midnight is placed at the top of the dial (12 o'clock) and time increases clockwise, in a
//! y-down coordinate system such as SVG or a pixmap. Angles are expressed in degrees, where
//! 0 degrees points right (3 o'clock), so midnight maps to -90 degrees.

use crate::activity::{Minutes, MINUTES_PER_DAY};

/// The largest angular span emitted for a single shape. A full 360 degree span would produce
/// identical start and end points, which many renderers draw as nothing at all.
pub const FULL_CIRCLE_CLAMP: f32 = 359.99;

/// Convert a minute offset from midnight to an angle in degrees.
#[inline]
pub fn minutes_to_degrees(minutes: Minutes) -> f32 {
    (minutes as f32 / MINUTES_PER_DAY as f32) * 360.0 - 90.0
}

/// Convert an angle in degrees back to a minute offset from midnight, in the range `0..1440`.
pub fn degrees_to_minutes(degrees: f32) -> f32 {
    let normalized = normalize_degrees(degrees + 90.0);
    (normalized / 360.0) * MINUTES_PER_DAY as f32
}

/// Normalize an angle in degrees to the range `[0, 360)`.
#[inline]
pub fn normalize_degrees(degrees: f32) -> f32 {
    let r = degrees.rem_euclid(360.0);
    // rem_euclid may round up to exactly 360.0 for tiny negative inputs
    if r >= 360.0 {
        0.0
    }
    else {
        r
    }
}

/// Apply the full circle guard to a pair of angles, returning a pair whose span never exceeds
/// [FULL_CIRCLE_CLAMP].
#[inline]
pub fn clamp_span(start_angle: f32, end_angle: f32) -> (f32, f32) {
    if (end_angle - start_angle).abs() >= 360.0 {
        (start_angle, start_angle + FULL_CIRCLE_CLAMP.copysign(end_angle - start_angle))
    }
    else {
        (start_angle, end_angle)
    }
}

/// Convert polar coordinates around `(cx, cy)` into cartesian coordinates.
#[inline]
pub fn polar_to_cartesian(cx: f32, cy: f32, radius: f32, degrees: f32) -> (f32, f32) {
    let (sin, cos) = degrees.to_radians().sin_cos();
    (cx + radius * cos, cy + radius * sin)
}

/// Convert cartesian coordinates into a (radius, degrees) pair around `(cx, cy)`.
#[inline]
pub fn cartesian_to_polar(cx: f32, cy: f32, x: f32, y: f32) -> (f32, f32) {
    let (dx, dy) = (x - cx, y - cy);
    ((dx * dx + dy * dy).sqrt(), dy.atan2(dx).to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn angle_mapping() {
        assert!(close(minutes_to_degrees(0), -90.0));
        assert!(close(minutes_to_degrees(360), 0.0));
        assert!(close(minutes_to_degrees(720), 90.0));
        assert!(close(minutes_to_degrees(1080), 180.0));
        assert!(close(
            normalize_degrees(minutes_to_degrees(1440)),
            normalize_degrees(minutes_to_degrees(0))
        ));
    }

    #[test]
    fn degrees_back_to_minutes() {
        assert!(close(degrees_to_minutes(-90.0), 0.0));
        assert!(close(degrees_to_minutes(0.0), 360.0));
        assert!(close(degrees_to_minutes(180.0), 1080.0));
        assert!(close(degrees_to_minutes(269.0), 1436.0));
    }

    #[test]
    fn full_circle_is_clamped() {
        let (s, e) = clamp_span(-90.0, 270.0);
        assert!(close(s, -90.0));
        assert!(close(e - s, FULL_CIRCLE_CLAMP));

        let (s, e) = clamp_span(0.0, 180.0);
        assert!(close(s, 0.0) && close(e, 180.0));
    }

    #[test]
    fn polar_round_trip() {
        let (x, y) = polar_to_cartesian(250.0, 250.0, 100.0, -90.0);
        assert!(close(x, 250.0) && close(y, 150.0));

        let (r, a) = cartesian_to_polar(250.0, 250.0, x, y);
        assert!(close(r, 100.0));
        assert!(close(a, -90.0));
    }
}
