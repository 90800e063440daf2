//! Parsed box figures.
//!
//! A [`Figure`] keeps each row at its own length. Cells past the end of a
//! short row (and rows past the last one) read back as `None`, so scanners can
//! walk off an edge without special cases.

use std::fs;
use std::io::Read;
use std::path::Path;

use log::debug;

use crate::core::glyph::Glyph;
use crate::core::position::Position;
use crate::error::FigureError;
use crate::scan::Rectangles;

/// How rows are terminated, both in the source text and in renderings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    /// `CrLf` as soon as the text contains a single `\r\n`.
    pub fn detect(text: &str) -> Self {
        if text.contains("\r\n") {
            LineEnding::CrLf
        } else {
            LineEnding::Lf
        }
    }

    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// An immutable grid of glyphs.
#[derive(Clone, Debug)]
pub struct Figure {
    rows: Vec<Vec<Glyph>>,
    width: usize,
    line_ending: LineEnding,
}

impl Figure {
    pub fn parse(text: &str) -> Self {
        let line_ending = LineEnding::detect(text);
        let rows: Vec<Vec<Glyph>> = text
            .lines()
            .map(|line| line.chars().map(Glyph::from_char).collect())
            .collect();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);

        debug!(
            "parsed figure: {} rows, {width} columns, {line_ending:?} line endings",
            rows.len()
        );

        Self {
            rows,
            width,
            line_ending,
        }
    }

    /// Read a whole figure from `reader`. `origin` names the source in errors.
    pub fn from_reader<R: Read>(mut reader: R, origin: &str) -> Result<Self, FigureError> {
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(|source| FigureError::Io {
                path: origin.to_string(),
                source,
            })?;
        Ok(Self::parse(&text))
    }

    pub fn read_path(path: &Path) -> Result<Self, FigureError> {
        let text = fs::read_to_string(path).map_err(|source| FigureError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self::parse(&text))
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Length of the longest row.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0
    }

    #[inline]
    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// The glyph at `pos`, or `None` if the cell lies past its row or past the last row.
    #[inline]
    pub fn glyph(&self, pos: Position) -> Option<Glyph> {
        self.rows.get(pos.row)?.get(pos.col).copied()
    }

    /// All present cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Glyph)> + '_ {
        self.rows.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(move |(c, &g)| (Position::new(r, c), g))
        })
    }

    /// Minimal rectangles of this figure, discovered lazily in row-major order.
    pub fn rectangles(&self) -> Rectangles<'_> {
        Rectangles::new(self)
    }

    /// Strict mode: reject the first character outside `{+, -, |, ' '}`.
    ///
    /// Decomposition does not need this; it treats unknown glyphs as non-border.
    pub fn check_alphabet(&self) -> Result<(), FigureError> {
        match self.cells().find(|(_, g)| !g.is_known()) {
            Some((at, g)) => Err(FigureError::UnexpectedGlyph {
                glyph: g.as_char(),
                at,
            }),
            None => Ok(()),
        }
    }
}
