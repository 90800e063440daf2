/// One character of a box figure, classified by the role it can play in a border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    /// `+`
    Corner,
    /// `-`
    Horizontal,
    /// `|`
    Vertical,
    /// ` `
    Blank,
    /// Anything outside the four-symbol alphabet.
    Other(char),
}

impl Glyph {
    #[inline]
    pub const fn from_char(c: char) -> Self {
        match c {
            '+' => Glyph::Corner,
            '-' => Glyph::Horizontal,
            '|' => Glyph::Vertical,
            ' ' => Glyph::Blank,
            other => Glyph::Other(other),
        }
    }

    #[inline]
    pub const fn as_char(self) -> char {
        match self {
            Glyph::Corner => '+',
            Glyph::Horizontal => '-',
            Glyph::Vertical => '|',
            Glyph::Blank => ' ',
            Glyph::Other(c) => c,
        }
    }

    /// Can this glyph continue a top or bottom edge?
    #[inline]
    pub const fn is_horizontal_border(self) -> bool {
        matches!(self, Glyph::Corner | Glyph::Horizontal)
    }

    /// Can this glyph continue a left or right edge?
    #[inline]
    pub const fn is_vertical_border(self) -> bool {
        matches!(self, Glyph::Corner | Glyph::Vertical)
    }

    #[inline]
    pub const fn is_known(self) -> bool {
        !matches!(self, Glyph::Other(_))
    }
}

impl From<char> for Glyph {
    fn from(c: char) -> Self {
        Glyph::from_char(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_belongs_to_both_edge_kinds() {
        assert!(Glyph::Corner.is_horizontal_border());
        assert!(Glyph::Corner.is_vertical_border());
        assert!(!Glyph::Horizontal.is_vertical_border());
        assert!(!Glyph::Vertical.is_horizontal_border());
        assert!(!Glyph::Blank.is_horizontal_border());
        assert!(!Glyph::Blank.is_vertical_border());
    }

    #[test]
    fn chars_roundtrip_through_classification() {
        for c in ['+', '-', '|', ' ', '#'] {
            assert_eq!(Glyph::from_char(c).as_char(), c);
        }
        assert!(!Glyph::from('x').is_known());
        assert!(Glyph::from('|').is_known());
    }
}
