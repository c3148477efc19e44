use super::Board;
use super::Square;
use std::fmt;

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..10 {
            for col in 0..9 {
                let c = match self.get(Square::new(row, col)) {
                    Some((piece, color)) => piece.to_fen_char(color),
                    None => '.',
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        write!(f, "turn: {}", self.turn())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Board({})", self.to_fen())
    }
}

/// Builds a board from ten rows of nine characters, Black's back rank first.
/// Red is to move; call `set_turn` afterwards to change that.
#[macro_export]
macro_rules! xiangqi_position {
    ($($piece:tt)*) => {{
        let mut board = $crate::board::Board::new();
        // Convert all input tokens to a string and filter out whitespace characters.
        let pieces: Vec<_> = stringify!($($piece)*)
            .chars()
            .filter(|&c| !c.is_whitespace())
            .collect();
        assert_eq!(pieces.len(), 90, "Invalid number of squares. Expected 90, got {}", pieces.len());
        for (i, &c) in pieces.iter().enumerate() {
            if c != '.' {
                let (piece, color) = $crate::board::Piece::from_fen_char(c)
                    .unwrap_or_else(|| panic!("Invalid character in xiangqi position: {}", c));
                let square = $crate::board::Square::from_index(i);
                board.put(square, piece, color).unwrap();
            }
        }
        board.set_irreversible();
        board
    }};
}
