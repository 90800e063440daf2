//! Rectangle discovery.
//!
//! [`find_rectangle`] roots a single rectangle at a corner marker; [`iter`]
//! drives it over a whole figure, one discovery per `next()`.
//!
//! The search from a top-left corner `(r0, c0)` walks down column `c0` while it
//! stays `|`. Every `+` met on the way is a candidate bottom row, which is then
//! walked rightward while it stays `-`; every `+` met there whose column also
//! has a `+` on row `r0` is checked for an intact top and right edge. The first
//! pair that checks out wins, which makes the result the minimal rectangle
//! under nearest-row-then-nearest-column order.

pub mod iter;

use log::trace;

use crate::core::glyph::Glyph;
use crate::core::position::Position;
use crate::figure::Figure;
use crate::rect::Rectangle;

pub use iter::{decompose, Decomposition, Rectangles, ScanCursor};

#[inline]
pub fn is_corner(figure: &Figure, pos: Position) -> bool {
    figure.glyph(pos) == Some(Glyph::Corner)
}

/// `-` or `+`. Absent cells are not borders.
#[inline]
pub fn is_horizontal(figure: &Figure, pos: Position) -> bool {
    figure.glyph(pos).is_some_and(Glyph::is_horizontal_border)
}

/// `|` or `+`. Absent cells are not borders.
#[inline]
pub fn is_vertical(figure: &Figure, pos: Position) -> bool {
    figure.glyph(pos).is_some_and(Glyph::is_vertical_border)
}

/// The minimal rectangle whose top-left corner is `top_left`, if any.
pub fn find_rectangle(figure: &Figure, top_left: Position) -> Option<Rectangle> {
    if !is_corner(figure, top_left) {
        return None;
    }

    for row in top_left.row + 1..figure.height() {
        match figure.glyph(top_left.with_row(row)) {
            Some(Glyph::Corner) => {
                if let Some(rect) = close_along_row(figure, top_left, row) {
                    return Some(rect);
                }
            }
            Some(Glyph::Vertical) => {}
            _ => {
                trace!("left edge from {top_left} broken at row {row}");
                return None;
            }
        }
    }
    None
}

/// Walk the candidate bottom edge on `row` looking for the nearest valid bottom-right corner.
fn close_along_row(figure: &Figure, top_left: Position, row: usize) -> Option<Rectangle> {
    for col in top_left.col + 1..figure.width() {
        let here = Position::new(row, col);
        match figure.glyph(here) {
            Some(Glyph::Corner) => {
                if is_corner(figure, top_left.with_col(col))
                    && top_edge_intact(figure, top_left, col)
                    && right_edge_intact(figure, top_left.row, row, col)
                {
                    return Some(Rectangle::new(top_left, here));
                }
            }
            Some(Glyph::Horizontal) => {}
            _ => return None,
        }
    }
    None
}

fn top_edge_intact(figure: &Figure, top_left: Position, right_col: usize) -> bool {
    (top_left.col + 1..right_col).all(|c| is_horizontal(figure, top_left.with_col(c)))
}

fn right_edge_intact(figure: &Figure, top_row: usize, bottom_row: usize, col: usize) -> bool {
    (top_row + 1..bottom_row).all(|r| is_vertical(figure, Position::new(r, col)))
}
