//! Low-level grid primitives.
//!
//! - [`position`]: zero-based `(row, col)` cells.
//! - [`glyph`]: the four-symbol box alphabet plus a catch-all for anything else.

pub mod glyph;
pub mod position;
