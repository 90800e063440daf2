use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::glyph::Glyph;
use crate::core::position::Position;
use crate::figure::{Figure, LineEnding};

/// Height and width of a rectangle, borders included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Shape {
    pub height: usize,
    pub width: usize,
}

impl Shape {
    #[inline]
    pub const fn new(height: usize, width: usize) -> Self {
        Self { height, width }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.height, self.width)
    }
}

/// A rectangle found in a figure, identified by its two opposite corners.
///
/// Both corners are inclusive, so the smallest rectangle (`++` over `++`) has
/// `bottom_right = top_left + (1, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rectangle {
    top_left: Position,
    bottom_right: Position,
}

impl Rectangle {
    pub fn new(top_left: Position, bottom_right: Position) -> Self {
        debug_assert!(bottom_right.row > top_left.row);
        debug_assert!(bottom_right.col > top_left.col);
        Self {
            top_left,
            bottom_right,
        }
    }

    #[inline]
    pub fn top_left(&self) -> Position {
        self.top_left
    }

    #[inline]
    pub fn bottom_right(&self) -> Position {
        self.bottom_right
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.bottom_right.row - self.top_left.row + 1
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.bottom_right.col - self.top_left.col + 1
    }

    #[inline]
    pub fn shape(&self) -> Shape {
        Shape::new(self.height(), self.width())
    }

    pub fn render(&self, line_ending: LineEnding) -> RenderedRectangle {
        render(self.shape(), line_ending)
    }

    /// Whether every cell strictly inside the borders is a space (or absent) in `figure`.
    ///
    /// Rendering ignores the interior entirely; this is only a diagnostic.
    pub fn interior_is_blank(&self, figure: &Figure) -> bool {
        let rows = self.top_left.row + 1..self.bottom_right.row;
        rows.flat_map(|r| {
            (self.top_left.col + 1..self.bottom_right.col).map(move |c| Position::new(r, c))
        })
        .all(|p| matches!(figure.glyph(p), None | Some(Glyph::Blank)))
    }
}

/// The text block of a rectangle, independent of where it sat in the figure.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RenderedRectangle(String);

impl RenderedRectangle {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for RenderedRectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for RenderedRectangle {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for RenderedRectangle {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Draw a blank box of the given shape.
///
/// Dimensions below 2 are raised to 2, the smallest box that has four corners.
pub fn render(shape: Shape, line_ending: LineEnding) -> RenderedRectangle {
    let height = shape.height.max(2);
    let width = shape.width.max(2);

    let eol = line_ending.as_str();
    let inner = width - 2;

    let mut edge = String::with_capacity(width + eol.len());
    edge.push('+');
    edge.extend(std::iter::repeat('-').take(inner));
    edge.push('+');
    edge.push_str(eol);

    let mut side = String::with_capacity(width + eol.len());
    side.push('|');
    side.extend(std::iter::repeat(' ').take(inner));
    side.push('|');
    side.push_str(eol);

    let mut out = String::with_capacity(height * edge.len());
    out.push_str(&edge);
    for _ in 0..height - 2 {
        out.push_str(&side);
    }
    out.push_str(&edge);
    RenderedRectangle(out)
}
