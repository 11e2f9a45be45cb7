//! Engine — the clock's drawing model.
//!
//! Turns a clock reading into draw calls against a `Surface`: one digit glyph
//! per position, seven line segments per glyph, colon dots between pairs.
//!
//! The engine knows geometry and digit encodings. It never deals with
//! terminals, ANSI codes, or cell grids.

pub mod objects;

use crate::types::{Color, DrawOp, Point, Rect};

/// The drawing target the engine renders onto.
pub trait Surface {
    /// Fill `rect` with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: &Color);

    /// Draw a straight line from `start` to `end` with the given stroke width.
    fn draw_line(&mut self, start: Point, end: Point, width: i32, color: &Color);
}

/// Recording surface: every call becomes a `DrawOp`, in call order.
impl Surface for Vec<DrawOp> {
    fn fill_rect(&mut self, rect: Rect, color: &Color) {
        self.push(DrawOp::FillRect {
            rect,
            color: color.clone(),
        });
    }

    fn draw_line(&mut self, start: Point, end: Point, width: i32, color: &Color) {
        self.push(DrawOp::Line {
            start,
            end,
            width,
            color: color.clone(),
        });
    }
}
