//! Seven-segment lookup tables.
//!
//! Segments are numbered 1..=7 in a fixed topology: top bar, upper-right,
//! lower-right, bottom bar, lower-left, upper-left, middle bar. Tables below
//! are indexed by `segment id - 1`.

use thiserror::Error;

use crate::types::{Point, Rect};

pub const SEGMENT_COUNT: usize = 7;

/// Lit segments for each digit, aligned with segment ids 1..=7.
pub const DIGIT_ENCODING: [[bool; SEGMENT_COUNT]; 10] = {
    const X: bool = true;
    const O: bool = false;
    [
        [X, X, X, X, X, X, O], // 0
        [O, X, X, O, O, O, O], // 1
        [X, X, O, X, X, O, X], // 2
        [X, X, X, X, O, O, X], // 3
        [O, X, X, O, O, X, X], // 4
        [X, O, X, X, O, X, X], // 5
        [X, O, X, X, X, X, X], // 6
        [X, X, X, O, O, X, O], // 7
        [X, X, X, X, X, X, X], // 8
        [X, X, X, X, O, X, X], // 9
    ]
};

/// Rectangle-relative endpoint of a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Anchor {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    MidLeft,
    MidRight,
    /// Mid-left moved right by one stroke width.
    MidLeftInset,
    /// Mid-right moved left by one stroke width.
    MidRightInset,
}

impl Anchor {
    fn resolve(self, rect: &Rect, stroke: i32) -> Point {
        match self {
            Anchor::TopLeft => rect.top_left(),
            Anchor::TopRight => rect.top_right(),
            Anchor::BottomLeft => rect.bottom_left(),
            Anchor::BottomRight => rect.bottom_right(),
            Anchor::MidLeft => Point::new(rect.x, rect.center_y()),
            Anchor::MidRight => Point::new(rect.right(), rect.center_y()),
            Anchor::MidLeftInset => Point::new(rect.x.saturating_add(stroke), rect.center_y()),
            Anchor::MidRightInset => Point::new(rect.right().saturating_sub(stroke), rect.center_y()),
        }
    }
}

/// Segment geometry template: (start, end) for segment ids 1..=7.
const SEGMENT_TEMPLATE: [(Anchor, Anchor); SEGMENT_COUNT] = [
    (Anchor::TopLeft, Anchor::TopRight),
    (Anchor::TopRight, Anchor::MidRight),
    (Anchor::MidRight, Anchor::BottomRight),
    (Anchor::BottomRight, Anchor::BottomLeft),
    (Anchor::BottomLeft, Anchor::MidLeft),
    (Anchor::MidLeft, Anchor::TopLeft),
    (Anchor::MidLeftInset, Anchor::MidRightInset),
];

/// Endpoints of one segment in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

/// Resolve the segment template against a bounding rectangle.
pub fn segment_map(rect: &Rect, stroke: i32) -> [Segment; SEGMENT_COUNT] {
    SEGMENT_TEMPLATE.map(|(start, end)| Segment {
        start: start.resolve(rect, stroke),
        end: end.resolve(rect, stroke),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DigitError {
    #[error("digit {0} is outside 0..=9")]
    OutOfRange(i64),
}

/// A decimal digit, 0..=9.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digit(u8);

impl Digit {
    pub const ZERO: Digit = Digit(0);

    /// Convert `value`, falling back to zero when it is outside 0..=9.
    pub fn or_zero(value: i64) -> Self {
        Digit::try_from(value).unwrap_or(Digit::ZERO)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn encoding(self) -> &'static [bool; SEGMENT_COUNT] {
        &DIGIT_ENCODING[self.0 as usize]
    }
}

impl TryFrom<i64> for Digit {
    type Error = DigitError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0..=9 => Ok(Digit(value as u8)),
            _ => Err(DigitError::OutOfRange(value)),
        }
    }
}
