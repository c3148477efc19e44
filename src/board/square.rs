use std::fmt;

use super::color::Color;

pub const ROWS: i8 = 10;
pub const COLS: i8 = 9;
pub const SQUARE_COUNT: usize = 90;

/// A grid coordinate. Row 0 is Black's back rank, column 0 is the a-file.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Square {
    pub row: i8,
    pub col: i8,
}

impl Square {
    /// Off-board marker used by the null move.
    pub const NONE: Square = Square { row: -1, col: -1 };

    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    pub fn from_index(index: usize) -> Self {
        debug_assert!(index < SQUARE_COUNT, "square index {} out of range", index);
        Self::new((index / COLS as usize) as i8, (index % COLS as usize) as i8)
    }

    pub fn is_on_board(&self) -> bool {
        (0..ROWS).contains(&self.row) && (0..COLS).contains(&self.col)
    }

    pub fn index(&self) -> usize {
        debug_assert!(self.is_on_board(), "off-board square {:?}", self);
        (self.row as usize) * COLS as usize + self.col as usize
    }

    pub fn offset(&self, d_row: i8, d_col: i8) -> Square {
        Square::new(self.row + d_row, self.col + d_col)
    }

    /// Point reflection through the board centre, used to read Red-oriented tables for Black.
    pub fn flip(&self) -> Square {
        Square::new(ROWS - 1 - self.row, COLS - 1 - self.col)
    }

    pub fn is_in_palace(&self, color: Color) -> bool {
        let rows = match color {
            Color::Red => 7..=9,
            Color::Black => 0..=2,
        };
        rows.contains(&self.row) && (3..=5).contains(&self.col)
    }

    pub fn is_home_half(&self, color: Color) -> bool {
        color.is_home_row(self.row)
    }

    /// Renders as `<file><rank>`, e.g. `e0` for Red's king square.
    pub fn to_text(&self) -> String {
        format!(
            "{}{}",
            (b'a' + self.col as u8) as char,
            (b'9' - self.row as u8) as char
        )
    }

    pub fn from_text(text: &str) -> Option<Square> {
        let mut chars = text.chars();
        let file = chars.next()?;
        let rank = chars.next()?;
        if chars.next().is_some() || !('a'..='i').contains(&file) || !rank.is_ascii_digit() {
            return None;
        }
        Some(Square::new(
            (b'9' - rank as u8) as i8,
            (file as u8 - b'a') as i8,
        ))
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..SQUARE_COUNT).map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_on_board() {
            write!(f, "{}", self.to_text())
        } else {
            write!(f, "--")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_coordinates() {
        assert_eq!(Square::new(9, 4).to_text(), "e0");
        assert_eq!(Square::new(0, 0).to_text(), "a9");
        assert_eq!(Square::from_text("h2"), Some(Square::new(7, 7)));
        assert_eq!(Square::from_text("j2"), None);
        assert_eq!(Square::from_text("h"), None);
    }

    #[test]
    fn test_palace() {
        assert!(Square::new(9, 4).is_in_palace(Color::Red));
        assert!(!Square::new(6, 4).is_in_palace(Color::Red));
        assert!(Square::new(2, 3).is_in_palace(Color::Black));
        assert!(!Square::new(2, 6).is_in_palace(Color::Black));
    }

    #[test]
    fn test_flip() {
        assert_eq!(Square::new(9, 0).flip(), Square::new(0, 8));
        assert_eq!(Square::new(4, 4).flip(), Square::new(5, 4));
    }

    #[test]
    fn test_index_round_trip() {
        for sq in Square::all() {
            assert_eq!(Square::from_index(sq.index()), sq);
        }
    }
}
