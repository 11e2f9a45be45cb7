use crate::config::GlyphConfig;
use crate::engine::Surface;
use crate::types::{Color, Point, Rect};

use super::segments::{self, Digit, DigitError, SEGMENT_COUNT, Segment};

/// One seven-segment digit inside a fixed bounding rectangle.
///
/// The glyph keeps no "current digit": every `render` call redraws all
/// seven segments from scratch.
#[derive(Debug, Clone)]
pub struct DigitGlyph {
    rect: Rect,
    segments: [Segment; SEGMENT_COUNT],
    segment_width: i32,
    background: Option<Color>,
    on_color: Color,
    off_color: Color,
}

impl DigitGlyph {
    pub fn new(position: Point, config: &GlyphConfig) -> Self {
        let rect = Rect::from_parts(position, config.size);
        DigitGlyph {
            rect,
            segments: segments::segment_map(&rect, config.segment_width),
            segment_width: config.segment_width,
            background: config.background.clone(),
            on_color: config.on_color.clone(),
            off_color: config.off_color.clone(),
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn segments(&self) -> &[Segment; SEGMENT_COUNT] {
        &self.segments
    }

    /// Draw `value`. Anything outside 0..=9 is drawn as 0.
    pub fn render(&self, surface: &mut impl Surface, value: i64) {
        self.draw(surface, Digit::or_zero(value));
    }

    /// Like `render`, but refuses values outside 0..=9 without drawing.
    pub fn try_render(&self, surface: &mut impl Surface, value: i64) -> Result<(), DigitError> {
        let digit = Digit::try_from(value)?;
        self.draw(surface, digit);
        Ok(())
    }

    pub fn draw(&self, surface: &mut impl Surface, digit: Digit) {
        if let Some(bg) = &self.background {
            surface.fill_rect(self.rect, bg);
        }

        for (segment, &lit) in self.segments.iter().zip(digit.encoding()) {
            let color = if lit { &self.on_color } else { &self.off_color };
            surface.draw_line(segment.start, segment.end, self.segment_width, color);
        }
    }
}
