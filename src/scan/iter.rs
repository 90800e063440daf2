use std::iter::FusedIterator;

use log::{debug, trace};

use crate::core::position::Position;
use crate::figure::Figure;
use crate::rect::{Rectangle, RenderedRectangle};
use crate::scan::{find_rectangle, is_corner};

/// Row-major scan state over a figure.
///
/// The cursor holds no reference to the figure; the iterators below pair it
/// with a borrowed or owned one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanCursor {
    next: Position,
}

impl ScanCursor {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// The next cell the scan will examine.
    #[inline]
    pub fn position(&self) -> Position {
        self.next
    }

    /// Scan forward until a corner roots a rectangle, leaving the cursor just past that corner.
    pub fn advance(&mut self, figure: &Figure) -> Option<Rectangle> {
        while self.next.row < figure.height() {
            while self.next.col < figure.width() {
                let here = self.next;
                self.next.col += 1;

                if !is_corner(figure, here) {
                    continue;
                }
                match find_rectangle(figure, here) {
                    Some(rect) => {
                        debug!(
                            "rectangle {} rooted at {here}, closes at {}",
                            rect.shape(),
                            rect.bottom_right()
                        );
                        return Some(rect);
                    }
                    None => trace!("no rectangle rooted at {here}"),
                }
            }
            self.next = Position::new(self.next.row + 1, 0);
        }
        None
    }

    #[inline]
    pub fn is_exhausted(&self, figure: &Figure) -> bool {
        self.next.row >= figure.height()
    }
}

/// Rectangles of a borrowed figure, in discovery order.
#[derive(Debug, Clone)]
pub struct Rectangles<'a> {
    figure: &'a Figure,
    cursor: ScanCursor,
}

impl<'a> Rectangles<'a> {
    pub fn new(figure: &'a Figure) -> Self {
        Self {
            figure,
            cursor: ScanCursor::new(),
        }
    }

    #[inline]
    pub fn cursor(&self) -> ScanCursor {
        self.cursor
    }
}

impl Iterator for Rectangles<'_> {
    type Item = Rectangle;

    fn next(&mut self) -> Option<Rectangle> {
        self.cursor.advance(self.figure)
    }
}

impl FusedIterator for Rectangles<'_> {}

/// Rendered rectangles of an owned figure.
///
/// Renderings use the figure's own line ending.
#[derive(Debug, Clone)]
pub struct Decomposition {
    figure: Figure,
    cursor: ScanCursor,
}

impl Decomposition {
    pub fn new(figure: Figure) -> Self {
        Self {
            figure,
            cursor: ScanCursor::new(),
        }
    }

    #[inline]
    pub fn figure(&self) -> &Figure {
        &self.figure
    }

    #[inline]
    pub fn cursor(&self) -> ScanCursor {
        self.cursor
    }
}

impl Iterator for Decomposition {
    type Item = RenderedRectangle;

    fn next(&mut self) -> Option<RenderedRectangle> {
        let rect = self.cursor.advance(&self.figure)?;
        Some(rect.render(self.figure.line_ending()))
    }
}

impl FusedIterator for Decomposition {}

/// Break a text figure into its minimal rectangles, lazily.
pub fn decompose(text: &str) -> Decomposition {
    Decomposition::new(Figure::parse(text))
}
