use thiserror::Error;

use crate::core::position::Position;

/// Errors from loading or strictly checking a figure.
///
/// Decomposition itself never fails: malformed figures just produce fewer
/// rectangles.
#[derive(Debug, Error)]
pub enum FigureError {
    /// A character outside `{+, -, |, ' '}` (only reported by strict checking).
    #[error("unexpected glyph {glyph:?} at {at}")]
    UnexpectedGlyph { glyph: char, at: Position },
    /// Reading the figure text failed.
    #[error("failed to read figure from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
