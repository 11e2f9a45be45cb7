//! Clock objects and their render implementations.
//!
//! Each object lives in its own module with its struct definition and
//! rendering side by side. Lookup tables live in `segments`.

pub mod segments;
mod band;
mod glyph;

pub use band::{ClockBand, GLYPH_COUNT, NARROW_GAP, WIDE_GAP};
pub use glyph::DigitGlyph;
pub use segments::{Digit, DigitError};
