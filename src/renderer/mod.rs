//! Renderer — the deterministic rasterizer.
//!
//! Takes a `Canvas` (pixels, drawn by the engine) and produces a grid of
//! terminal `Cell`s, plus diffs between consecutive grids for the player.
//!
//! The renderer is pure and stateless. Given the same input, it always
//! produces the same output. It knows nothing about time or digits.

mod canvas;

pub use canvas::Canvas;

use crate::config::CellSize;
use crate::types::{Cell, CellChange, Color, Style, TerminalContract};

/// Upper half block: foreground paints the top half, background the bottom.
pub const HALF_BLOCK: char = '▀';

pub struct Renderer;

impl Renderer {
    /// Grid dimensions for `canvas` at the given cell size. Partial cells at
    /// the right and bottom edges are dropped.
    pub fn contract(canvas: &Canvas, cell: CellSize) -> TerminalContract {
        let cols = canvas.width() / cell.width.max(1) as usize;
        let rows = canvas.height() / cell.height.max(1) as usize;
        TerminalContract {
            width: cols.min(u16::MAX as usize) as u16,
            height: rows.min(u16::MAX as usize) as u16,
        }
    }

    /// Downsample the canvas onto a cell grid.
    ///
    /// Each cell covers a `cell.width × cell.height` block split into an upper
    /// and a lower half. A half takes its most frequent non-`clear` color, so
    /// thin strokes survive the downsampling.
    pub fn rasterize(canvas: &Canvas, cell: CellSize, clear: &Color) -> Vec<Vec<Cell>> {
        let contract = Self::contract(canvas, cell);
        let cw = cell.width.max(1) as usize;
        let ch = cell.height.max(1) as usize;
        let half = (ch / 2).max(1);

        (0..contract.height as usize)
            .map(|row| {
                let top = row * ch;
                (0..contract.width as usize)
                    .map(|col| {
                        let left = col * cw;
                        let upper = Self::dominant(canvas, left..left + cw, top..top + half, clear);
                        let lower =
                            Self::dominant(canvas, left..left + cw, top + half..top + ch, clear);
                        Cell {
                            ch: HALF_BLOCK,
                            style: Style {
                                fg: Some(upper),
                                bg: Some(lower),
                            },
                        }
                    })
                    .collect()
            })
            .collect()
    }

    fn dominant(
        canvas: &Canvas,
        xs: std::ops::Range<usize>,
        ys: std::ops::Range<usize>,
        clear: &Color,
    ) -> Color {
        let mut counts: Vec<(&Color, usize)> = Vec::new();
        for y in ys {
            for x in xs.clone() {
                let Some(color) = canvas.pixel(x, y) else {
                    continue;
                };
                if color == clear {
                    continue;
                }
                match counts.iter_mut().find(|(c, _)| *c == color) {
                    Some((_, n)) => *n += 1,
                    None => counts.push((color, 1)),
                }
            }
        }

        let mut best: Option<(&Color, usize)> = None;
        for (color, n) in counts {
            if best.is_none_or(|(_, m)| n > m) {
                best = Some((color, n));
            }
        }
        best.map_or_else(|| clear.clone(), |(c, _)| c.clone())
    }

    /// Compute a cell-level diff between two grids.
    pub fn diff(prev: &[Vec<Cell>], next: &[Vec<Cell>]) -> Vec<CellChange> {
        let mut changes = Vec::new();
        for (y, (prev_row, next_row)) in prev.iter().zip(next.iter()).enumerate() {
            for (x, (prev_cell, next_cell)) in prev_row.iter().zip(next_row.iter()).enumerate() {
                if prev_cell != next_cell {
                    changes.push(CellChange {
                        x: x as u16,
                        y: y as u16,
                        cell: next_cell.clone(),
                    });
                }
            }
        }
        changes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Surface;
    use crate::types::{NamedColor, Point, Rect};

    const BG: Color = Color::Named(NamedColor::Black);
    const CELL: CellSize = CellSize { width: 4, height: 8 };

    #[test]
    fn contract_drops_partial_cells() {
        let canvas = Canvas::new(18, 20, BG);
        assert_eq!(
            Renderer::contract(&canvas, CELL),
            TerminalContract { width: 4, height: 2 }
        );
    }

    #[test]
    fn blank_canvas_is_all_clear() {
        let canvas = Canvas::new(8, 8, BG);
        let grid = Renderer::rasterize(&canvas, CELL, &BG);
        assert_eq!(grid.len(), 1);
        assert_eq!(grid[0].len(), 2);
        for cell in &grid[0] {
            assert_eq!(cell.ch, HALF_BLOCK);
            assert_eq!(cell.style.fg, Some(BG));
            assert_eq!(cell.style.bg, Some(BG));
        }
    }

    #[test]
    fn halves_are_sampled_separately() {
        let mut canvas = Canvas::new(4, 8, BG);
        canvas.fill_rect(Rect::new(0, 4, 4, 4), &Color::WHITE);
        let grid = Renderer::rasterize(&canvas, CELL, &BG);
        assert_eq!(grid[0][0].style.fg, Some(BG));
        assert_eq!(grid[0][0].style.bg, Some(Color::WHITE));
    }

    #[test]
    fn thin_stroke_wins_over_clear() {
        let mut canvas = Canvas::new(4, 8, BG);
        canvas.draw_line(Point::new(0, 1), Point::new(3, 1), 1, &Color::RED);
        let grid = Renderer::rasterize(&canvas, CELL, &BG);
        assert_eq!(grid[0][0].style.fg, Some(Color::RED));
    }

    #[test]
    fn majority_color_wins_and_ties_go_to_first_seen() {
        let mut canvas = Canvas::new(4, 8, BG);
        canvas.fill_rect(Rect::new(0, 0, 1, 4), &Color::WHITE);
        canvas.fill_rect(Rect::new(1, 0, 2, 4), &Color::RED);
        let grid = Renderer::rasterize(&canvas, CELL, &BG);
        assert_eq!(grid[0][0].style.fg, Some(Color::RED));

        let mut canvas = Canvas::new(4, 8, BG);
        canvas.fill_rect(Rect::new(0, 0, 2, 4), &Color::WHITE);
        canvas.fill_rect(Rect::new(2, 0, 2, 4), &Color::RED);
        let grid = Renderer::rasterize(&canvas, CELL, &BG);
        assert_eq!(grid[0][0].style.fg, Some(Color::WHITE));
    }

    #[test]
    fn diff_reports_only_changed_cells() {
        let a = vec![vec![Cell::default(); 3]; 2];
        let mut b = a.clone();
        b[1][2].ch = 'x';
        let changes = Renderer::diff(&a, &b);
        assert_eq!(changes.len(), 1);
        assert_eq!((changes[0].x, changes[0].y), (2, 1));
        assert_eq!(changes[0].cell.ch, 'x');
        assert!(Renderer::diff(&a, &a).is_empty());
    }
}
