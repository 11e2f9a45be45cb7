//! Player — the runtime frame loop.
//!
//! Owns the canvas and drives the clock to the terminal: every tick it polls
//! input, redraws the band from the wall clock, and presents only the cells
//! that changed since the previous frame.

mod events;
mod throttle;

pub use events::{EventSource, InputEvent, TerminalEvents, translate};
pub use throttle::FrameThrottle;

use std::io::{self, Write};

use anyhow::{Result, bail};
use crossterm::{cursor, execute, queue, style, terminal};

use crate::clock::WallClock;
use crate::config::{AppConfig, CellSize};
use crate::engine::objects::ClockBand;
use crate::renderer::{Canvas, Renderer};
use crate::types::{Cell, Color, Frame, NamedColor, Style, TerminalContract};

pub struct Player<C: WallClock> {
    band: ClockBand,
    canvas: Canvas,
    cell: CellSize,
    background: Color,
    clock: C,
    fps: u32,
    /// Last presented grid; `None` forces a full frame.
    grid: Option<Vec<Vec<Cell>>>,
}

impl<C: WallClock> Player<C> {
    pub fn new(config: &AppConfig, clock: C) -> Self {
        Self {
            band: ClockBand::new(config.clock.position, &config.clock.glyph),
            canvas: Canvas::new(
                config.canvas.width,
                config.canvas.height,
                config.background.clone(),
            ),
            cell: config.cell,
            background: config.background.clone(),
            clock,
            fps: config.fps,
            grid: None,
        }
    }

    pub fn contract(&self) -> TerminalContract {
        Renderer::contract(&self.canvas, self.cell)
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Redraw the clock and return what changed on screen.
    ///
    /// The first frame, and the first after `invalidate`, is a full frame.
    /// Later frames are diffs against the previous one.
    pub fn frame(&mut self) -> Frame {
        self.canvas.clear(&self.background);
        self.band.render(&mut self.canvas, &self.clock);
        let next = Renderer::rasterize(&self.canvas, self.cell, &self.background);

        let frame = match &self.grid {
            None => Frame::Full {
                cells: next.clone(),
            },
            Some(prev) => Frame::Diff {
                changes: Renderer::diff(prev, &next),
            },
        };
        self.grid = Some(next);
        frame
    }

    /// Forget the presented grid so the next frame repaints everything.
    pub fn invalidate(&mut self) {
        self.grid = None;
    }

    /// Run the clock in the terminal until Esc or Ctrl-C.
    ///
    /// Sets up the terminal, enters the frame loop, and restores the terminal
    /// on exit (even on error).
    pub fn play(&mut self, events: &mut impl EventSource) -> Result<()> {
        let (term_w, term_h) = terminal::size()?;
        let need = self.contract();
        if term_w < need.width || term_h < need.height {
            bail!(
                "Terminal too small: need {}x{}, have {}x{}",
                need.width,
                need.height,
                term_w,
                term_h,
            );
        }

        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(terminal::ClearType::All),
        )?;

        let result = self.run_loop(&mut stdout, events).map(|_| ());

        // Always restore terminal state.
        let _ = execute!(
            stdout,
            style::ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();

        result
    }

    // -----------------------------------------------------------------------
    // Frame loop
    // -----------------------------------------------------------------------

    /// Returns the number of frames presented.
    fn run_loop(&mut self, out: &mut impl Write, events: &mut impl EventSource) -> Result<u64> {
        let mut throttle = FrameThrottle::new(self.fps);
        let mut running = true;
        let mut frames: u64 = 0;

        while running {
            for event in events.poll()? {
                if event.is_exit() {
                    running = false;
                } else if event == InputEvent::Resize {
                    log::debug!("terminal resized, repainting");
                    queue!(out, terminal::Clear(terminal::ClearType::All))?;
                    self.invalidate();
                }
            }
            if !running {
                break;
            }

            let frame = self.frame();
            present(out, &frame)?;
            frames += 1;
            throttle.tick();
        }

        log::info!("frame loop stopped after {frames} frames");
        Ok(frames)
    }
}

// ---------------------------------------------------------------------------
// Terminal output
// ---------------------------------------------------------------------------

pub fn present(out: &mut impl Write, frame: &Frame) -> io::Result<()> {
    match frame {
        Frame::Full { cells } => {
            for (y, row) in cells.iter().enumerate() {
                queue!(out, cursor::MoveTo(0, y as u16))?;
                for cell in row {
                    print_cell(out, cell)?;
                }
            }
        }
        Frame::Diff { changes } => {
            for change in changes {
                queue!(out, cursor::MoveTo(change.x, change.y))?;
                print_cell(out, &change.cell)?;
            }
        }
    }
    out.flush()
}

fn print_cell(out: &mut impl Write, cell: &Cell) -> io::Result<()> {
    let cs = to_content_style(&cell.style);
    queue!(
        out,
        style::PrintStyledContent(style::StyledContent::new(cs, cell.ch))
    )
}

// ---------------------------------------------------------------------------
// Style conversion
// ---------------------------------------------------------------------------

pub fn to_content_style(s: &Style) -> style::ContentStyle {
    let mut cs = style::ContentStyle::default();
    if let Some(fg) = &s.fg {
        cs.foreground_color = Some(to_ct_color(fg));
    }
    if let Some(bg) = &s.bg {
        cs.background_color = Some(to_ct_color(bg));
    }
    cs
}

pub fn to_ct_color(c: &Color) -> style::Color {
    match c {
        Color::Named(n) => match n {
            NamedColor::Black => style::Color::Black,
            NamedColor::Red => style::Color::Red,
            NamedColor::Green => style::Color::Green,
            NamedColor::Yellow => style::Color::Yellow,
            NamedColor::Blue => style::Color::Blue,
            NamedColor::Magenta => style::Color::Magenta,
            NamedColor::Cyan => style::Color::Cyan,
            NamedColor::White => style::Color::White,
        },
        Color::Rgb { r, g, b } => style::Color::Rgb {
            r: *r,
            g: *g,
            b: *b,
        },
    }
}
