use crate::engine::Surface;
use crate::types::{Color, Point, Rect};

/// A fixed-size pixel raster. Everything drawn outside it is clipped.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl Canvas {
    pub fn new(width: u16, height: u16, clear: Color) -> Self {
        let (width, height) = (width as usize, height as usize);
        Canvas {
            width,
            height,
            pixels: vec![clear; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn clear(&mut self, color: &Color) {
        self.pixels.fill(color.clone());
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<&Color> {
        if x < self.width && y < self.height {
            self.pixels.get(y * self.width + x)
        } else {
            None
        }
    }

    fn set(&mut self, x: i64, y: i64, color: &Color) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = color.clone();
        }
    }
}

impl Surface for Canvas {
    fn fill_rect(&mut self, rect: Rect, color: &Color) {
        if rect.width <= 0 || rect.height <= 0 {
            return;
        }
        let x0 = rect.x.max(0);
        let y0 = rect.y.max(0);
        let x1 = rect.right().min(self.width as i32);
        let y1 = rect.bottom().min(self.height as i32);
        for y in y0..y1 {
            for x in x0..x1 {
                self.set(i64::from(x), i64::from(y), color);
            }
        }
    }

    /// Bresenham line. Each step stamps `width` pixels across the minor axis,
    /// centered on the line.
    fn draw_line(&mut self, start: Point, end: Point, width: i32, color: &Color) {
        if width < 1 {
            return;
        }
        // i64 keeps the stepping exact for any pair of i32 endpoints.
        let (x0, y0) = (i64::from(start.x), i64::from(start.y));
        let (x1, y1) = (i64::from(end.x), i64::from(end.y));
        let (width, reach) = (i64::from(width), i64::from(width) / 2 + 1);
        if x0.max(x1) + reach < 0
            || y0.max(y1) + reach < 0
            || x0.min(x1) - reach >= self.width as i64
            || y0.min(y1) - reach >= self.height as i64
        {
            return;
        }

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let x_major = dx >= -dy;

        let (mut x, mut y) = (x0, y0);
        let mut err = dx + dy;
        loop {
            for k in 0..width {
                let off = k - width / 2;
                if x_major {
                    self.set(x, y + off, color);
                } else {
                    self.set(x + off, y, color);
                }
            }
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BG: Color = Color::Named(crate::types::NamedColor::Black);

    fn lit(canvas: &Canvas) -> usize {
        (0..canvas.height())
            .flat_map(|y| (0..canvas.width()).map(move |x| (x, y)))
            .filter(|&(x, y)| canvas.pixel(x, y) != Some(&BG))
            .count()
    }

    #[test]
    fn fill_rect_is_clipped() {
        let mut canvas = Canvas::new(10, 10, BG);
        canvas.fill_rect(Rect::new(-5, 8, 8, 8), &Color::RED);
        assert_eq!(lit(&canvas), 3 * 2);
        assert_eq!(canvas.pixel(0, 9), Some(&Color::RED));
        assert_eq!(canvas.pixel(3, 9), Some(&BG));
    }

    #[test]
    fn degenerate_rect_draws_nothing() {
        let mut canvas = Canvas::new(10, 10, BG);
        canvas.fill_rect(Rect::new(2, 2, 0, 5), &Color::RED);
        canvas.fill_rect(Rect::new(2, 2, 5, -1), &Color::RED);
        assert_eq!(lit(&canvas), 0);
    }

    #[test]
    fn horizontal_line_is_thickened_vertically() {
        let mut canvas = Canvas::new(20, 20, BG);
        canvas.draw_line(Point::new(2, 10), Point::new(12, 10), 4, &Color::RED);
        assert_eq!(lit(&canvas), 11 * 4);
        for y in 8..12 {
            assert_eq!(canvas.pixel(5, y), Some(&Color::RED), "row {y}");
        }
        assert_eq!(canvas.pixel(5, 7), Some(&BG));
        assert_eq!(canvas.pixel(5, 12), Some(&BG));
    }

    #[test]
    fn vertical_line_is_thickened_horizontally() {
        let mut canvas = Canvas::new(20, 20, BG);
        canvas.draw_line(Point::new(10, 15), Point::new(10, 5), 1, &Color::WHITE);
        assert_eq!(lit(&canvas), 11);
        assert_eq!(canvas.pixel(10, 5), Some(&Color::WHITE));
        assert_eq!(canvas.pixel(11, 10), Some(&BG));
    }

    #[test]
    fn zero_width_line_draws_nothing() {
        let mut canvas = Canvas::new(20, 20, BG);
        canvas.draw_line(Point::new(0, 0), Point::new(19, 19), 0, &Color::RED);
        assert_eq!(lit(&canvas), 0);
    }

    #[test]
    fn lines_at_the_i32_limits_are_clipped() {
        let mut canvas = Canvas::new(20, 20, BG);
        let edge = Point::new(i32::MAX, i32::MAX);
        canvas.draw_line(Point::new(i32::MAX - 30, i32::MAX), edge, 4, &Color::RED);
        canvas.draw_line(Point::new(i32::MIN, 5), Point::new(i32::MIN, 15), 4, &Color::RED);
        assert_eq!(lit(&canvas), 0);

        // A thick stroke hugging the edge still reaches row 0.
        canvas.draw_line(Point::new(2, -1), Point::new(8, -1), 4, &Color::RED);
        assert_eq!(canvas.pixel(5, 0), Some(&Color::RED));
    }

    #[test]
    fn clear_resets_every_pixel() {
        let mut canvas = Canvas::new(4, 4, BG);
        canvas.fill_rect(Rect::new(0, 0, 4, 4), &Color::RED);
        canvas.clear(&BG);
        assert_eq!(lit(&canvas), 0);
    }
}
