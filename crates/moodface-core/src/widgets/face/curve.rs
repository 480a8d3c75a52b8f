//! Quadratic Bezier geometry for the mouth.
//!
//! The mouth is a closed lens: two quadratic Bezier segments sharing their
//! endpoints, one forming the upper edge and one the lower. It is always
//! filled, never stroked — the closed outline would otherwise render as a
//! thin open arc. Filling subdivides the span into vertical pixel columns
//! and draws a `Line` between the two curves in each column.

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle};

extern crate alloc;
use alloc::vec::Vec;

use super::Mood;
use super::constants::{
    HAPPY_LOWER_CTRL_Y, HAPPY_UPPER_CTRL_Y, MOUTH_CORNER_Y, MOUTH_CTRL_X, MOUTH_LEFT_X,
    MOUTH_OUTLINE_SUBDIVISIONS, MOUTH_RIGHT_X, SAD_LOWER_CTRL_Y, SAD_UPPER_CTRL_Y,
};

/// A point in continuous pixel space, before rounding to the pixel grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    pub x: f32,
    pub y: f32,
}

impl CurvePoint {
    fn to_pixel(self) -> Point {
        Point::new(round_px(self.x), round_px(self.y))
    }
}

/// Round to the nearest pixel. `f32::round` is not available in `core`.
#[inline]
fn round_px(v: f32) -> i32 {
    if v >= 0.0 { (v + 0.5) as i32 } else { (v - 0.5) as i32 }
}

/// One quadratic Bezier segment: start, control, end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadSegment {
    pub start: CurvePoint,
    pub ctrl: CurvePoint,
    pub end: CurvePoint,
}

impl QuadSegment {
    /// Evaluate the curve at parameter `t` in `[0, 1]`.
    pub fn point_at(&self, t: f32) -> CurvePoint {
        let u = 1.0 - t;
        CurvePoint {
            x: u * u * self.start.x + 2.0 * u * t * self.ctrl.x + t * t * self.end.x,
            y: u * u * self.start.y + 2.0 * u * t * self.ctrl.y + t * t * self.end.y,
        }
    }
}

/// The mouth's closed two-segment outline for a given side length and mood.
///
/// `upper` runs left corner to right corner; `lower` runs back again, so the
/// path's end coincides with its start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouthPath {
    upper: QuadSegment,
    lower: QuadSegment,
}

impl MouthPath {
    /// Build the mouth for a face whose square starts at `origin` with the
    /// given `side`, parameterized by mood.
    pub fn new(origin: Point, side: u32, mood: Mood) -> Self {
        let s = side as f32;
        let ox = origin.x as f32;
        let oy = origin.y as f32;

        let (upper_ctrl_y, lower_ctrl_y) = if mood.is_happy() {
            (HAPPY_UPPER_CTRL_Y, HAPPY_LOWER_CTRL_Y)
        } else {
            (SAD_UPPER_CTRL_Y, SAD_LOWER_CTRL_Y)
        };

        let left = CurvePoint {
            x: ox + MOUTH_LEFT_X * s,
            y: oy + MOUTH_CORNER_Y * s,
        };
        let right = CurvePoint {
            x: ox + MOUTH_RIGHT_X * s,
            y: oy + MOUTH_CORNER_Y * s,
        };

        Self {
            upper: QuadSegment {
                start: left,
                ctrl: CurvePoint {
                    x: ox + MOUTH_CTRL_X * s,
                    y: oy + upper_ctrl_y * s,
                },
                end: right,
            },
            lower: QuadSegment {
                start: right,
                ctrl: CurvePoint {
                    x: ox + MOUTH_CTRL_X * s,
                    y: oy + lower_ctrl_y * s,
                },
                end: left,
            },
        }
    }

    /// Sample the full outline into pixel points.
    ///
    /// The last point equals the first, so the returned polyline is closed.
    pub fn outline(&self) -> Vec<Point> {
        let mut points = Vec::with_capacity(2 * MOUTH_OUTLINE_SUBDIVISIONS + 1);
        let step = 1.0 / MOUTH_OUTLINE_SUBDIVISIONS as f32;

        for j in 0..=MOUTH_OUTLINE_SUBDIVISIONS {
            points.push(self.upper.point_at(j as f32 * step).to_pixel());
        }
        // Skip the lower curve's t = 0 sample; it duplicates the upper end.
        for j in 1..=MOUTH_OUTLINE_SUBDIVISIONS {
            points.push(self.lower.point_at(j as f32 * step).to_pixel());
        }

        points
    }

    /// Whether the sampled outline's final point coincides with its start.
    pub fn is_closed(&self) -> bool {
        let outline = self.outline();
        outline.first() == outline.last()
    }

    /// Fill the lens between the two curves.
    ///
    /// Both control points sit at the chord midpoint, so each curve's x
    /// coordinate is linear in its parameter. That lets every pixel column
    /// between the corners map back to an exact parameter value, and the
    /// column is filled with a vertical `Line` between the two curve heights.
    pub fn draw_filled<D: DrawTarget<Color = Rgb565>>(
        &self,
        color: Rgb565,
        display: &mut D,
    ) -> Result<(), D::Error> {
        let left_x = self.upper.start.x;
        let right_x = self.upper.end.x;
        let span = right_x - left_x;
        if span <= 0.0 {
            return Ok(());
        }

        let style = PrimitiveStyle::with_stroke(color, 1);

        for x_px in round_px(left_x)..=round_px(right_x) {
            let t = ((x_px as f32 - left_x) / span).clamp(0.0, 1.0);
            let y_upper = self.upper.point_at(t).y;
            // The lower curve runs right-to-left; mirror the parameter.
            let y_lower = self.lower.point_at(1.0 - t).y;

            let y0 = round_px(y_upper.min(y_lower));
            let y1 = round_px(y_upper.max(y_lower));

            Line::new(Point::new(x_px, y0), Point::new(x_px, y1))
                .into_styled(style)
                .draw(display)?;
        }

        Ok(())
    }
}
