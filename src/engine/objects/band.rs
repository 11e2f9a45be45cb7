use crate::clock::{ClockReading, WallClock};
use crate::config::GlyphConfig;
use crate::engine::Surface;
use crate::types::{Color, Point, Rect};

use super::DigitGlyph;

pub const GLYPH_COUNT: usize = 6;

/// Gap between digits of the same field (e.g. the two hour digits).
pub const NARROW_GAP: i32 = 10;
/// Gap between fields, where the colon dots sit.
pub const WIDE_GAP: i32 = 30;

/// Horizontal offset of the colon dots past the glyph's right edge.
const COLON_OFFSET: i32 = 15;
/// Vertical inset of the colon dots from the glyph's top and bottom.
const COLON_INSET: i32 = 10;
const COLON_SIZE: i32 = 10;
const COLON_COLOR: Color = Color::RED;

/// Six digit glyphs laid out as HH:MM:SS.
#[derive(Debug, Clone)]
pub struct ClockBand {
    glyphs: [DigitGlyph; GLYPH_COUNT],
}

impl ClockBand {
    pub fn new(start: Point, config: &GlyphConfig) -> Self {
        let mut pos = start;
        let glyphs = std::array::from_fn(|i| {
            let glyph = DigitGlyph::new(pos, config);
            let gap = if (i + 1) % 2 == 0 { WIDE_GAP } else { NARROW_GAP };
            pos = Point::new(glyph.rect().right().saturating_add(gap), pos.y);
            glyph
        });
        ClockBand { glyphs }
    }

    pub fn glyphs(&self) -> &[DigitGlyph; GLYPH_COUNT] {
        &self.glyphs
    }

    /// Draw the clock's current reading.
    pub fn render(&self, surface: &mut impl Surface, clock: &impl WallClock) {
        self.render_reading(surface, &clock.now());
    }

    pub fn render_reading(&self, surface: &mut impl Surface, reading: &ClockReading) {
        for (index, (glyph, digit)) in self.glyphs.iter().zip(reading.digits()).enumerate() {
            glyph.render(surface, i64::from(digit));
            // Colons after HH and MM only.
            if index == 1 || index == 3 {
                Self::draw_colon(surface, &glyph.rect());
            }
        }
    }

    fn draw_colon(surface: &mut impl Surface, after: &Rect) {
        let x = after.right().saturating_add(COLON_OFFSET);
        let upper = Rect::new(x, after.y.saturating_add(COLON_INSET), COLON_SIZE, COLON_SIZE);
        let lower = Rect::new(x, after.bottom().saturating_sub(COLON_INSET), COLON_SIZE, COLON_SIZE);
        surface.fill_rect(upper, &COLON_COLOR);
        surface.fill_rect(lower, &COLON_COLOR);
    }
}
