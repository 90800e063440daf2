//! Decomposition of ASCII box diagrams into the minimal rectangles they are made of.
//!
//! A figure is drawn with `+` corners, `-` and `|` edges and blank interiors:
//!
//! ```
//! let parts: Vec<String> = ascii_rects::decompose("+--+--+\n|  |  |\n+--+--+\n")
//!     .map(|r| r.into_string())
//!     .collect();
//! assert_eq!(parts, vec!["+--+\n|  |\n+--+\n"; 2]);
//! ```

pub mod core;
pub mod error;
pub mod figure;
pub mod rect;
pub mod scan;
pub mod tally;

pub use crate::core::glyph::Glyph;
pub use crate::core::position::Position;
pub use error::FigureError;
pub use figure::{Figure, LineEnding};
pub use rect::{render, RenderedRectangle, Rectangle, Shape};
pub use scan::{decompose, find_rectangle, Decomposition, Rectangles, ScanCursor};
pub use tally::ShapeTally;
